//! Scene renderers.

mod json;
mod svg;

pub use json::JsonSceneRenderer;
pub use svg::SvgRenderer;
