//! Terminal rendering layer.

pub mod grid;

pub use grid::{RenderOptions, render};
