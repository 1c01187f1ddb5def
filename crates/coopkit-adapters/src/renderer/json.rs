//! Scene graph export as JSON.

use coopkit_core::{
    application::{ApplicationError, ports::SceneRenderer},
    domain::Scene,
    error::{CoopError, CoopResult},
};
use tracing::instrument;

/// Serializes the scene graph itself, for consumers that draw it their own way.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSceneRenderer;

impl JsonSceneRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl SceneRenderer for JsonSceneRenderer {
    #[instrument(skip_all)]
    fn render(&self, scene: &Scene) -> CoopResult<String> {
        let mut json = serde_json::to_string_pretty(scene).map_err(|e| {
            CoopError::from(ApplicationError::RenderingFailed {
                reason: e.to_string(),
            })
        })?;
        json.push('\n');
        Ok(json)
    }

    fn media_type(&self) -> &'static str {
        "application/json"
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}
