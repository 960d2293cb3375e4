//! The environment and its per-tick entry point

pub mod environment;

pub use environment::{Environment, RenderView};
