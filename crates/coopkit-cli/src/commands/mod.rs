//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments into core calls and print the result.
//! No business logic lives here.

pub mod completions;
pub mod config;
pub mod init;
pub mod price;
pub mod quote;
pub mod render;

use coopkit_adapters::{JsonSceneRenderer, LocalFilesystem, SvgRenderer};
use coopkit_core::{application::ConfiguratorService, application::ports::SceneRenderer};

use crate::{cli::RenderFormat, config::AppConfig, error::CliResult};

/// Configurator wired to the local filesystem and the configured price table.
pub(crate) fn configurator(config: &AppConfig, format: RenderFormat) -> CliResult<ConfiguratorService> {
    let renderer: Box<dyn SceneRenderer> = match format {
        RenderFormat::Svg => Box::new(SvgRenderer::new()),
        RenderFormat::Json => Box::new(JsonSceneRenderer::new()),
    };
    let service = ConfiguratorService::new(renderer, Box::new(LocalFilesystem::new()))
        .with_price_table(config.pricing)?;
    Ok(service)
}
