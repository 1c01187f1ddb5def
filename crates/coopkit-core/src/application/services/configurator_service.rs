//! Configurator Service - main application orchestrator.
//!
//! This service coordinates one configurator refresh:
//! 1. Price the configuration
//! 2. Generate the schematic scene
//! 3. Render it through the injected renderer and, on export, write it out
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, SceneRenderer},
    },
    domain::{Configuration, Price, PriceLine, PriceTable, Scene, generate_schematic},
    error::CoopResult,
};

/// Everything the configurator shows for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    pub configuration: Configuration,
    pub price: Price,
    pub breakdown: Vec<PriceLine>,
    pub scene: Scene,
}

/// Main configurator service.
///
/// Stateless apart from the price table: every call recomputes price and
/// scene from the configuration it is given.
pub struct ConfiguratorService {
    renderer: Box<dyn SceneRenderer>,
    filesystem: Box<dyn Filesystem>,
    price_table: PriceTable,
}

impl ConfiguratorService {
    /// Create a new configurator service with the given adapters and the
    /// published price table.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use coopkit_core::application::ConfiguratorService;
    ///
    /// let service = ConfiguratorService::new(
    ///     renderer,   // impl SceneRenderer
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(renderer: Box<dyn SceneRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
            price_table: PriceTable::default(),
        }
    }

    /// Replace the price table. The table is validated first.
    pub fn with_price_table(mut self, table: PriceTable) -> CoopResult<Self> {
        table.validate()?;
        self.price_table = table;
        Ok(self)
    }

    /// Price only.
    pub fn price(&self, config: &Configuration) -> Price {
        self.price_table.estimate(config)
    }

    /// Price, itemised terms and scene for `config`.
    #[instrument(skip_all, fields(config = %config))]
    pub fn estimate(&self, config: &Configuration) -> Estimate {
        let price = self.price_table.estimate(config);
        let scene = generate_schematic(config);
        debug!(%price, parts = scene.parts.len(), "Estimate computed");

        Estimate {
            configuration: *config,
            price,
            breakdown: self.price_table.breakdown(config),
            scene,
        }
    }

    /// Render the schematic for `config` with the injected renderer.
    #[instrument(skip_all, fields(config = %config, media_type = self.renderer.media_type()))]
    pub fn render(&self, config: &Configuration) -> CoopResult<String> {
        let scene = generate_schematic(config);
        let document = self.renderer.render(&scene)?;
        debug!(bytes = document.len(), "Scene rendered");
        Ok(document)
    }

    /// Render and write the schematic to `path`.
    ///
    /// Refuses to replace an existing file unless `overwrite` is set.
    #[instrument(skip_all, fields(config = %config, path = %path.as_ref().display()))]
    pub fn export(
        &self,
        config: &Configuration,
        path: impl AsRef<Path>,
        overwrite: bool,
    ) -> CoopResult<PathBuf> {
        let path = path.as_ref();

        if self.filesystem.exists(path) && !overwrite {
            return Err(ApplicationError::ArtifactExists {
                path: path.to_path_buf(),
            }
            .into());
        }

        let document = self.render(config)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, &document)?;

        info!("Schematic exported");
        Ok(path.to_path_buf())
    }

    /// Default file extension of the injected renderer.
    pub fn extension(&self) -> &'static str {
        self.renderer.extension()
    }
}
