//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.
//!
//! Coop options (`--wood`, `--roof`, ...) are parsed with the core types'
//! `FromStr` impls, so the accepted spellings and error messages are the
//! same ones the config file uses.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use coopkit_core::domain::{
    Configuration, ContactDetails, HardwareFinish, Levels, RoofMaterial, RoofStyle, Wood,
};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "coopkit",
    bin_name = "coopkit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f414} Price, draw and quote a custom chicken coop",
    long_about = "coopkit prices a coop configuration, renders its isometric \
                  schematic and prepares the quote-request email.",
    after_help = "EXAMPLES:\n\
        \x20 coopkit price --wood pine --length 8 --breakdown\n\
        \x20 coopkit render --roof lean-to --levels 1 -o coop.svg\n\
        \x20 coopkit quote --timed-door true --name 'Ada Farmer' --mailto\n\
        \x20 coopkit completions bash > ~/.local/share/bash-completion/completions/coopkit",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Estimate the price of a coop.
    #[command(
        visible_alias = "p",
        about = "Estimate the price of a coop",
        after_help = "EXAMPLES:\n\
            \x20 coopkit price\n\
            \x20 coopkit price --wood pine --roof lean-to --length 6\n\
            \x20 coopkit price --breakdown --output-format json"
    )]
    Price(PriceArgs),

    /// Render the coop schematic.
    #[command(
        visible_alias = "draw",
        about = "Render the coop schematic",
        after_help = "EXAMPLES:\n\
            \x20 coopkit render > coop.svg\n\
            \x20 coopkit render --roof-material wood -o renders/coop.svg\n\
            \x20 coopkit render --format json -o scene.json --force"
    )]
    Render(RenderArgs),

    /// Prepare a quote request.
    #[command(
        about = "Prepare a quote request email",
        after_help = "EXAMPLES:\n\
            \x20 coopkit quote --name 'Ada Farmer' --email ada@example.com\n\
            \x20 coopkit quote --levels 1 --mailto | xargs xdg-open"
    )]
    Quote(QuoteArgs),

    /// Initialise a coopkit configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 coopkit init                  # default location\n\
            \x20 coopkit init --force          # overwrite\n\
            \x20 coopkit -c ./coopkit.toml init # explicit path"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 coopkit completions bash > ~/.local/share/bash-completion/completions/coopkit\n\
            \x20 coopkit completions zsh  > ~/.zfunc/_coopkit\n\
            \x20 coopkit completions fish > ~/.config/fish/completions/coopkit.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the coopkit configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 coopkit config get defaults.wood\n\
            \x20 coopkit config get pricing.base_fee\n\
            \x20 coopkit config list"
    )]
    Config(ConfigCommands),
}

// ── selection ─────────────────────────────────────────────────────────────────

/// Coop options shared by `price`, `render` and `quote`.
///
/// Unset flags fall back to the configured defaults.
#[derive(Debug, Clone, Default, Args)]
pub struct SelectionArgs {
    /// Wood species.
    #[arg(long, value_name = "WOOD", help = "Wood species [cedar, pine]")]
    pub wood: Option<Wood>,

    /// Roof style.
    #[arg(long, value_name = "STYLE", help = "Roof style [gable, lean-to]")]
    pub roof: Option<RoofStyle>,

    /// Roof covering.
    #[arg(
        long = "roof-material",
        value_name = "MATERIAL",
        help = "Roof material [wood, metal]"
    )]
    pub roof_material: Option<RoofMaterial>,

    /// Number of levels.
    #[arg(long, value_name = "N", help = "Levels [1, 2]")]
    pub levels: Option<Levels>,

    /// Automatic timed door.
    #[arg(
        long = "timed-door",
        value_name = "BOOL",
        help = "Add the timed door [true, false]"
    )]
    pub timed_door: Option<bool>,

    /// Length in feet. The price uses it as given; the drawing clamps it.
    #[arg(long = "length", value_name = "FEET", help = "Length in feet")]
    pub length_feet: Option<u32>,

    /// Hardware finish.
    #[arg(
        long = "hardware",
        value_name = "FINISH",
        help = "Hardware finish [black, galvanized]"
    )]
    pub hardware_finish: Option<HardwareFinish>,
}

impl SelectionArgs {
    /// Overlay the flags that were given on top of `defaults`.
    pub fn resolve(&self, defaults: &Configuration) -> Configuration {
        let mut builder = defaults.to_builder();
        if let Some(wood) = self.wood {
            builder = builder.wood(wood);
        }
        if let Some(roof) = self.roof {
            builder = builder.roof(roof);
        }
        if let Some(material) = self.roof_material {
            builder = builder.roof_material(material);
        }
        if let Some(levels) = self.levels {
            builder = builder.levels(levels);
        }
        if let Some(timed) = self.timed_door {
            builder = builder.timed_door(timed);
        }
        if let Some(feet) = self.length_feet {
            builder = builder.length_feet(feet);
        }
        if let Some(finish) = self.hardware_finish {
            builder = builder.hardware_finish(finish);
        }
        builder.build()
    }
}

// ── price ─────────────────────────────────────────────────────────────────────

/// Arguments for `coopkit price`.
#[derive(Debug, Args)]
pub struct PriceArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Show every term of the estimate.
    #[arg(long = "breakdown", help = "Show the itemised estimate")]
    pub breakdown: bool,
}

// ── render ────────────────────────────────────────────────────────────────────

/// Arguments for `coopkit render`.
#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Document format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "svg",
        help = "Document format"
    )]
    pub format: RenderFormat,

    /// Write to a file instead of stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file (default: stdout)"
    )]
    pub output: Option<PathBuf>,

    /// Replace an existing output file.
    #[arg(long = "force", requires = "output", help = "Overwrite existing file")]
    pub force: bool,
}

/// Document format for the `render` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    /// SVG 1.1 markup.
    Svg,
    /// The scene graph as JSON.
    Json,
}

// ── quote ─────────────────────────────────────────────────────────────────────

/// Arguments for `coopkit quote`.
#[derive(Debug, Args)]
pub struct QuoteArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    #[arg(long, value_name = "NAME", help = "Your name")]
    pub name: Option<String>,

    #[arg(long, value_name = "EMAIL", help = "Your email address")]
    pub email: Option<String>,

    #[arg(long, value_name = "PHONE", help = "Your phone number")]
    pub phone: Option<String>,

    #[arg(long, value_name = "CITY", help = "City for delivery")]
    pub city: Option<String>,

    #[arg(long, value_name = "TEXT", help = "Anything else we should know")]
    pub notes: Option<String>,

    /// Print only the `mailto:` link.
    #[arg(long = "mailto", help = "Print only the mailto: link")]
    pub mailto: bool,
}

impl QuoteArgs {
    pub fn contact(&self) -> ContactDetails {
        ContactDetails {
            name: self.name.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            phone: self.phone.clone().unwrap_or_default(),
            city: self.city.clone().unwrap_or_default(),
            notes: self.notes.clone().unwrap_or_default(),
        }
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `coopkit init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `coopkit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `coopkit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.wood`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
