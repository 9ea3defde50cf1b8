//! Enum name tables
//!
//! Human-readable names for amp models and effect types. Names are matched
//! case-sensitively, exactly as the device software writes them.

use serde::{Deserialize, Serialize};

/// Implements the id/name lookup tables shared by every selector enum
macro_rules! impl_name_table {
    ($type:ident, $default:ident, [$(($variant:ident, $id:literal, $name:literal)),+ $(,)?]) => {
        impl $type {
            /// Every variant in id order
            pub const ALL: &'static [$type] = &[$($type::$variant),+];

            /// Numeric identifier stored in the preset
            pub fn id(self) -> u8 {
                match self {
                    $($type::$variant => $id,)+
                }
            }

            /// Look up a variant by numeric identifier
            pub fn from_id(id: u8) -> Option<Self> {
                match id {
                    $($id => Some($type::$variant),)+
                    _ => None,
                }
            }

            /// Display name used in text presets
            pub fn name(self) -> &'static str {
                match self {
                    $($type::$variant => $name,)+
                }
            }

            /// Look up a variant by display name
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some($type::$variant),)+
                    _ => None,
                }
            }
        }

        impl Default for $type {
            fn default() -> Self {
                $type::$default
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

/// Amp model selector (ids 0-8)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmpModel {
    Clean,
    Crunch,
    #[serde(rename = "Hi-Gain")]
    HiGain,
    Metal,
    Acoustic,
    Bass,
    British,
    American,
    Boutique,
}

impl_name_table!(AmpModel, Clean, [
    (Clean, 0, "Clean"),
    (Crunch, 1, "Crunch"),
    (HiGain, 2, "Hi-Gain"),
    (Metal, 3, "Metal"),
    (Acoustic, 4, "Acoustic"),
    (Bass, 5, "Bass"),
    (British, 6, "British"),
    (American, 7, "American"),
    (Boutique, 8, "Boutique"),
]);

/// Modulation type (ids 1-3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModType {
    Chorus,
    Phaser,
    Tremolo,
}

impl_name_table!(ModType, Chorus, [
    (Chorus, 1, "Chorus"),
    (Phaser, 2, "Phaser"),
    (Tremolo, 3, "Tremolo"),
]);

/// Delay type (ids 1-3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DelayType {
    Digital,
    Analog,
    Tape,
}

impl_name_table!(DelayType, Digital, [
    (Digital, 1, "Digital"),
    (Analog, 2, "Analog"),
    (Tape, 3, "Tape"),
]);

/// Reverb type (ids 1-3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReverbType {
    Room,
    Hall,
    Plate,
}

impl_name_table!(ReverbType, Room, [
    (Room, 1, "Room"),
    (Hall, 2, "Hall"),
    (Plate, 3, "Plate"),
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amp_model_table() {
        assert_eq!(AmpModel::ALL.len(), 9);
        for (i, model) in AmpModel::ALL.iter().enumerate() {
            assert_eq!(model.id() as usize, i);
            assert_eq!(AmpModel::from_name(model.name()), Some(*model));
        }
        assert_eq!(AmpModel::from_id(4), Some(AmpModel::Acoustic));
        assert_eq!(AmpModel::from_id(9), None);
        assert_eq!(AmpModel::HiGain.name(), "Hi-Gain");
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert_eq!(ReverbType::from_name("Hall"), Some(ReverbType::Hall));
        assert_eq!(ReverbType::from_name("hall"), None);
        assert_eq!(ModType::from_name("CHORUS"), None);
    }

    #[test]
    fn test_effect_type_ids_start_at_one() {
        assert_eq!(ModType::from_id(0), None);
        assert_eq!(ModType::default().id(), 1);
        assert_eq!(DelayType::from_id(3), Some(DelayType::Tape));
        assert_eq!(ReverbType::from_id(4), None);
    }
}
