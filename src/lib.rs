// Raverte - lib.rs
//
// Library entry point, exposing all modules for integration testing and
// for embedding in the desktop client.

pub mod app;
pub mod platform;
pub mod util;
