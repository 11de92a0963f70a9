// src/lib.rs - Library interface for internal module access

pub mod column_names;
pub mod constants;
pub mod data_input;
pub mod datasets;
pub mod error;
pub mod font_config;
pub mod plot_framework;
pub mod plot_functions;
#[cfg(feature = "viewer")]
pub mod viewer;

pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
