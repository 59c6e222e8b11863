//! Artifact renderers.

mod express;
mod templates;

pub use express::ExpressRenderer;
