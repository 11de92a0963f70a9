// src/data_input/mod.rs

pub mod measurement_metadata;
pub mod report;
pub mod report_parser;

// src/data_input/mod.rs
