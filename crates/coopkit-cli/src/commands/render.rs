//! `coopkit render`: draw the coop schematic.

use tracing::{debug, instrument};

use crate::{
    cli::RenderArgs,
    commands::configurator,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(format = ?args.format))]
pub fn execute(args: RenderArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let selection = args.selection.resolve(&config.defaults);
    let service = configurator(&config, args.format)?;
    debug!(config = %selection, "Rendering schematic");

    match args.output {
        Some(path) => {
            let written = service.export(&selection, &path, args.force)?;
            output.success(&format!("Schematic written to {}", written.display()))?;
        }
        None => {
            let document = service.render(&selection)?;
            output.data(&document)?;
        }
    }

    Ok(())
}
