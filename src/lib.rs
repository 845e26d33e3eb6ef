pub mod content;
pub mod model;
pub mod geometry;
pub mod render;
pub mod page;

// Configuration, errors and the static-site writer
pub mod config;
pub mod error;
pub mod export;

pub use error::{GuideError, Result};
