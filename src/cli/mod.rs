//! CLI Module
//!
//! Command-line interface for converting and inspecting Tank G presets.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::convert::PresetFormat;

/// M-VAVE Tank G v2 preset converter
#[derive(Parser, Debug)]
#[command(name = "tankg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a .tkg preset to YAML
    #[command(name = "tkg2yaml")]
    Tkg2Yaml {
        /// Input .tkg file
        input: PathBuf,

        /// Output .yaml file (default: same name with .yaml extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert a YAML preset to .tkg
    #[command(name = "yaml2tkg")]
    Yaml2Tkg {
        /// Input .yaml file
        input: PathBuf,

        /// Output .tkg file (default: same name with .tkg extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Reject unrecognised lines and out-of-range values
        #[arg(long)]
        strict: bool,
    },

    /// Convert between formats, picked from the file extensions
    #[command(name = "convert")]
    Convert {
        /// Input preset
        input: PathBuf,

        /// Output preset
        output: PathBuf,

        /// Reject unrecognised lines and out-of-range values
        #[arg(long)]
        strict: bool,
    },

    /// Convert every preset in a directory tree
    #[command(name = "convert-dir")]
    ConvertDir {
        /// Directory to walk
        dir: PathBuf,

        /// Target format
        #[arg(long, value_enum)]
        to: PresetFormat,

        /// Reject unrecognised lines and out-of-range values
        #[arg(long)]
        strict: bool,
    },

    /// Print a preset as JSON
    #[command(name = "show")]
    Show {
        /// Preset file (.tkg, .yaml or .yml)
        input: PathBuf,
    },

    /// Check a preset against the device ranges
    #[command(name = "check")]
    Check {
        /// Preset file (.tkg, .yaml or .yml)
        input: PathBuf,
    },

    /// Write the default preset
    #[command(name = "new")]
    New {
        /// Output file (.tkg, .yaml or .yml)
        output: PathBuf,
    },
}
