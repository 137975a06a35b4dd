//! CLI entry and dispatch.

use anyhow::Result;
use clap::Parser;
use fancyboard_core::StyleName;

mod commands;

#[derive(Parser)]
#[command(name = "fancyboard")]
#[command(version)]
#[command(about = "Terminal keyboard that types in fancy Unicode styles")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Style selected when the keyboard opens (overrides the config)
    #[arg(long, short, env = "FANCYBOARD_STYLE", value_name = "STYLE")]
    style: Option<StyleName>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print TEXT (or stdin) rewritten in a style
    Convert {
        /// Style to apply (defaults to the configured style)
        #[arg(long, short, value_name = "STYLE")]
        style: Option<StyleName>,

        /// Type every letter as uppercase, like caps lock
        #[arg(long)]
        caps: bool,

        /// Text to convert; read from stdin when omitted
        #[arg(value_name = "TEXT")]
        text: Option<String>,
    },

    /// List available styles with a preview
    Styles,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // default to the interactive keyboard
    let Some(command) = cli.command else {
        return commands::keyboard::run(cli.style);
    };

    match command {
        Commands::Convert { style, caps, text } => commands::convert::run(style, caps, text),
        Commands::Styles => {
            commands::styles::run();
            Ok(())
        }
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
