//! Tank G CLI - Preset Converter
//!
//! Command-line interface for the tankg preset codec.

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::debug;

use tankg::cli::{commands, Cli, Commands};
use tankg::convert::PresetFormat;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    debug!("tankg v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(cmd) => handle_command(cmd),
        None => {
            println!("tankg preset converter v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands) -> anyhow::Result<()> {
    match cmd {
        Commands::Tkg2Yaml { input, output } => {
            commands::convert(&input, output.as_deref(), PresetFormat::Yaml, false)
                .with_context(|| format!("converting {}", input.display()))
        }
        Commands::Yaml2Tkg {
            input,
            output,
            strict,
        } => commands::convert(&input, output.as_deref(), PresetFormat::Tkg, strict)
            .with_context(|| format!("converting {}", input.display())),
        Commands::Convert {
            input,
            output,
            strict,
        } => {
            let target = PresetFormat::from_path(&output).unwrap_or(PresetFormat::Tkg);
            commands::convert(&input, Some(output.as_path()), target, strict)
                .with_context(|| format!("converting {}", input.display()))
        }
        Commands::ConvertDir { dir, to, strict } => commands::convert_directory(&dir, to, strict)
            .with_context(|| format!("converting directory {}", dir.display())),
        Commands::Show { input } => {
            commands::show(&input).with_context(|| format!("reading {}", input.display()))
        }
        Commands::Check { input } => {
            commands::check(&input).with_context(|| format!("checking {}", input.display()))
        }
        Commands::New { output } => commands::new_preset(&output)
            .with_context(|| format!("writing {}", output.display())),
    }
}
