//! `coopkit config`: inspect the effective configuration.

use serde_json::Value;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.data(&value)?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                return output.json(&config);
            }
            let serialised =
                toml::to_string_pretty(&config).with_cli_context(|| "Failed to serialise config")?;
            output.data(&serialised)?;
        }

        ConfigCommands::Path => {
            let path = AppConfig::active_path(global.config.as_ref());
            output.data(&path.display().to_string())?;
        }
    }

    Ok(())
}

/// Look up a dotted key such as `defaults.wood` or `pricing.base_fee`.
///
/// Strings print bare; everything else prints as JSON.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let root = serde_json::to_value(config).map_err(|e| CliError::Internal {
        message: format!("Failed to serialise config: {e}"),
    })?;

    let value = key
        .split('.')
        .try_fold(&root, |node, segment| node.get(segment))
        .ok_or_else(|| CliError::ConfigKeyNotFound { key: key.into() })?;

    Ok(match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_keys() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "defaults.wood").unwrap(), "cedar");
        assert_eq!(get_config_value(&cfg, "defaults.length_feet").unwrap(), "11");
        assert_eq!(get_config_value(&cfg, "quote.recipient").unwrap(), "sales@example.com");
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }

    #[test]
    fn get_section_prints_json() {
        let cfg = AppConfig::default();
        let section = get_config_value(&cfg, "quote").unwrap();
        assert!(section.starts_with('{'));
        assert!(section.contains("recipient"));
    }

    #[test]
    fn get_unknown_key_is_not_found() {
        let cfg = AppConfig::default();
        for key in ["does.not.exist", "defaults.colour", "defaults.wood.grain", ""] {
            let err = get_config_value(&cfg, key).unwrap_err();
            assert!(matches!(err, CliError::ConfigKeyNotFound { .. }), "{key}");
            assert_eq!(err.exit_code(), 3);
        }
    }
}
