//! Record sources: dataset files and the demo generator.

pub mod dataset;
pub mod generator;

pub use dataset::{load_dataset, save_dataset};
pub use generator::{GeneratorOptions, generate};
