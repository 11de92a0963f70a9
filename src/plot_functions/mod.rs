// src/plot_functions/mod.rs

pub mod plot_noise_vs_exposure;

// src/plot_functions/mod.rs
