// Raverte - platform/mod.rs
//
// Platform layer: directory resolution, asset store, config loading.
// Dependencies: util layer, standard library, directories crate.
// Must NOT depend on: app.

pub mod assets;
pub mod config;
pub mod paths;
