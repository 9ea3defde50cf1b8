//! File conversion
//!
//! Loads and saves presets by file extension: `.tkg` is the binary format,
//! `.yaml` / `.yml` the text format. Whole directory trees can be converted
//! in one pass.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{Result, TankgError};
use crate::preset::Preset;
use crate::text::ParseMode;

/// On-disk preset format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PresetFormat {
    /// 21-byte binary `.tkg`
    Tkg,
    /// Text `.yaml` / `.yml`
    Yaml,
}

impl PresetFormat {
    /// Detect the format from a path's extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "tkg" => Some(PresetFormat::Tkg),
            "yaml" | "yml" => Some(PresetFormat::Yaml),
            _ => None,
        }
    }

    /// Extension written for new files
    pub fn extension(self) -> &'static str {
        match self {
            PresetFormat::Tkg => "tkg",
            PresetFormat::Yaml => "yaml",
        }
    }

    pub fn other(self) -> Self {
        match self {
            PresetFormat::Tkg => PresetFormat::Yaml,
            PresetFormat::Yaml => PresetFormat::Tkg,
        }
    }
}

/// Options shared by load, save and convert
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    /// Text parse mode
    pub parse_mode: ParseMode,
    /// Run device-range validation before writing a `.tkg`
    pub validate: bool,
}

impl ConvertOptions {
    /// Strict text parsing and validation on write
    pub fn strict() -> Self {
        Self {
            parse_mode: ParseMode::Strict,
            validate: true,
        }
    }
}

fn extension_label(path: &Path) -> String {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_else(|| "(none)".to_string())
}

fn format_of(path: &Path, other: &Path) -> Result<PresetFormat> {
    PresetFormat::from_path(path).ok_or_else(|| TankgError::UnsupportedConversion {
        from: extension_label(path),
        to: extension_label(other),
    })
}

/// Load a preset, picking the decoder from the file extension
pub fn load_preset(path: &Path, options: ConvertOptions) -> Result<Preset> {
    let format = format_of(path, path)?;
    if !path.exists() {
        return Err(TankgError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    debug!("Loading {:?} preset from {}", format, path.display());

    match format {
        PresetFormat::Tkg => {
            let bytes = fs::read(path).map_err(|e| TankgError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;
            Preset::from_bytes(&bytes)
        }
        PresetFormat::Yaml => {
            let text = fs::read_to_string(path).map_err(|e| TankgError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;
            Preset::from_text(&text, options.parse_mode)
        }
    }
}

/// Save a preset, picking the encoder from the file extension
pub fn save_preset(path: &Path, preset: &Preset, options: ConvertOptions) -> Result<()> {
    let format = format_of(path, path)?;
    debug!("Saving {:?} preset to {}", format, path.display());

    let result = match format {
        PresetFormat::Tkg => {
            if options.validate {
                preset.validate()?;
            }
            fs::write(path, preset.to_bytes())
        }
        PresetFormat::Yaml => fs::write(path, preset.to_text()),
    };

    result.map_err(|e| TankgError::FileWriteError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Convert between `.tkg` and `.yaml`/`.yml`.
///
/// The two paths must be of different formats.
pub fn convert_file(input: &Path, output: &Path, options: ConvertOptions) -> Result<()> {
    let from = format_of(input, output)?;
    let to = format_of(output, input)?;
    if from == to {
        return Err(TankgError::UnsupportedConversion {
            from: extension_label(input),
            to: extension_label(output),
        });
    }

    let preset = load_preset(input, options)?;
    save_preset(output, &preset, options)?;
    info!("Converted: {} -> {}", input.display(), output.display());
    Ok(())
}

/// Path with its extension replaced for the given format
pub fn default_output_path(input: &Path, format: PresetFormat) -> PathBuf {
    input.with_extension(format.extension())
}

/// Outcome of a directory conversion
#[derive(Debug, Default)]
pub struct ConvertReport {
    /// (input, output) pairs written
    pub converted: Vec<(PathBuf, PathBuf)>,
    /// Inputs that failed, with the error
    pub failed: Vec<(PathBuf, TankgError)>,
}

impl ConvertReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Convert every preset under `dir` into `target` format, writing each
/// output next to its input. A failing file is recorded and skipped.
pub fn convert_dir(dir: &Path, target: PresetFormat, options: ConvertOptions) -> Result<ConvertReport> {
    if !dir.is_dir() {
        return Err(TankgError::FileNotFound {
            path: dir.to_path_buf(),
        });
    }

    let source = target.other();
    let mut report = ConvertReport::default();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let input = entry.path();
        if PresetFormat::from_path(input) != Some(source) {
            continue;
        }

        let output = default_output_path(input, target);
        match convert_file(input, &output, options) {
            Ok(()) => report.converted.push((input.to_path_buf(), output)),
            Err(e) => {
                warn!("Failed to convert {}: {}", input.display(), e);
                report.failed.push((input.to_path_buf(), e));
            }
        }
    }

    info!(
        "Converted {} file(s), {} failed",
        report.converted.len(),
        report.failed.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_format_detection() {
        assert_eq!(PresetFormat::from_path(Path::new("a.tkg")), Some(PresetFormat::Tkg));
        assert_eq!(PresetFormat::from_path(Path::new("a.TKG")), Some(PresetFormat::Tkg));
        assert_eq!(PresetFormat::from_path(Path::new("a.yml")), Some(PresetFormat::Yaml));
        assert_eq!(PresetFormat::from_path(Path::new("a.json")), None);
        assert_eq!(PresetFormat::from_path(Path::new("tkg")), None);
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("dir/lead.tkg"), PresetFormat::Yaml),
            PathBuf::from("dir/lead.yaml")
        );
    }

    #[test]
    fn test_convert_file_round_trip() {
        let dir = tempdir().unwrap();
        let tkg = dir.path().join("lead.tkg");
        let yaml = dir.path().join("lead.yaml");
        let back = dir.path().join("back.tkg");

        let mut preset = Preset::default();
        preset.reverb.enabled = true;
        preset.reverb.decay = 12;
        save_preset(&tkg, &preset, ConvertOptions::default()).unwrap();

        convert_file(&tkg, &yaml, ConvertOptions::default()).unwrap();
        convert_file(&yaml, &back, ConvertOptions::default()).unwrap();

        assert_eq!(fs::read(&tkg).unwrap(), fs::read(&back).unwrap());
    }

    #[test]
    fn test_unsupported_conversion() {
        let dir = tempdir().unwrap();
        let err = convert_file(
            &dir.path().join("a.tkg"),
            &dir.path().join("b.tkg"),
            ConvertOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_CONVERSION");

        let err = convert_file(
            &dir.path().join("a.wav"),
            &dir.path().join("b.tkg"),
            ConvertOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, TankgError::UnsupportedConversion { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_preset(&dir.path().join("nope.tkg"), ConvertOptions::default()).unwrap_err();
        assert_eq!(err.error_code(), "FILE_NOT_FOUND");
    }

    #[test]
    fn test_load_wrong_size() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("short.tkg");
        fs::write(&path, [0u8; 20]).unwrap();
        let err = load_preset(&path, ConvertOptions::default()).unwrap_err();
        assert!(matches!(err, TankgError::Size { actual: 20, .. }));
    }

    #[test]
    fn test_strict_save_validates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.tkg");
        let mut preset = Preset::default();
        preset.ir_cab = 40;

        assert!(save_preset(&path, &preset, ConvertOptions::strict()).is_err());
        assert!(!path.exists());
        assert!(save_preset(&path, &preset, ConvertOptions::default()).is_ok());
    }

    #[test]
    fn test_convert_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("bank1");
        fs::create_dir(&nested).unwrap();

        save_preset(&dir.path().join("a.tkg"), &Preset::default(), ConvertOptions::default())
            .unwrap();
        save_preset(&nested.join("b.tkg"), &Preset::default(), ConvertOptions::default())
            .unwrap();
        fs::write(nested.join("broken.tkg"), [1u8, 2, 3]).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();

        let report = convert_dir(dir.path(), PresetFormat::Yaml, ConvertOptions::default()).unwrap();

        assert_eq!(report.converted.len(), 2);
        assert_eq!(report.failed.len(), 1);
        assert!(!report.is_success());
        assert!(dir.path().join("a.yaml").exists());
        assert!(nested.join("b.yaml").exists());
        assert!(!nested.join("broken.yaml").exists());
    }
}
