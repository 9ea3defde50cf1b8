//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::path::Path;

use log::{info, warn};

use crate::convert::{
    convert_dir, convert_file, default_output_path, load_preset, save_preset, ConvertOptions,
    PresetFormat,
};
use crate::error::{Result, TankgError};
use crate::preset::Preset;

fn options(strict: bool) -> ConvertOptions {
    if strict {
        ConvertOptions::strict()
    } else {
        ConvertOptions::default()
    }
}

/// Convert a file, deriving the output path when none is given.
pub fn convert(input: &Path, output: Option<&Path>, target: PresetFormat, strict: bool) -> Result<()> {
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => default_output_path(input, target),
    };

    convert_file(input, &output, options(strict))?;
    println!("Converted: {} -> {}", input.display(), output.display());

    Ok(())
}

/// Convert every preset under a directory.
pub fn convert_directory(dir: &Path, target: PresetFormat, strict: bool) -> Result<()> {
    info!("Converting presets in {} to {:?}", dir.display(), target);

    let report = convert_dir(dir, target, options(strict))?;

    for (input, output) in &report.converted {
        println!("Converted: {} -> {}", input.display(), output.display());
    }
    for (input, err) in &report.failed {
        println!("Failed: {}: {}", input.display(), err);
    }
    println!(
        "{} converted, {} failed",
        report.converted.len(),
        report.failed.len()
    );

    if !report.is_success() {
        return Err(TankgError::BatchFailed {
            failed: report.failed.len(),
            total: report.converted.len() + report.failed.len(),
        });
    }

    Ok(())
}

/// Print a preset as pretty JSON.
pub fn show(input: &Path) -> Result<()> {
    let preset = load_preset(input, ConvertOptions::default())?;

    let json = serde_json::to_string_pretty(&preset)?;
    println!("{}", json);

    if preset.amp.model_kind().is_none() {
        warn!("Amp model id {} is not a known model", preset.amp.model);
    }

    Ok(())
}

/// Validate a preset against the device ranges.
pub fn check(input: &Path) -> Result<()> {
    let preset = load_preset(input, ConvertOptions::default())?;
    preset.validate()?;

    println!("OK: {}", input.display());

    Ok(())
}

/// Write the default preset.
pub fn new_preset(output: &Path) -> Result<()> {
    info!("Writing default preset to {}", output.display());

    save_preset(output, &Preset::default(), ConvertOptions::default())?;
    println!("Created: {}", output.display());

    Ok(())
}
