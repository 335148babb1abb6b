// Raverte - app/mod.rs
//
// Application layer: the user profile and its persistence lifecycle.
// Dependencies: platform and util layers.

pub mod profile;
