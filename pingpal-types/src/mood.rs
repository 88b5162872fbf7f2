use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, Display,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    #[default]
    Happy,
    Neutral,
    Sad,
    Stressed,
}

/// An RGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Mood {
    pub const VARIANTS: [Self; 4] = [Self::Happy, Self::Neutral, Self::Sad, Self::Stressed];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Happy => "😊",
            Self::Neutral => "😐",
            Self::Sad => "😔",
            Self::Stressed => "😤",
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            Self::Happy => Rgb(0xbf, 0xdb, 0xfe),
            Self::Neutral => Rgb(0xdb, 0xea, 0xfe),
            Self::Sad => Rgb(0x93, 0xc5, 0xfd),
            Self::Stressed => Rgb(0x60, 0xa5, 0xfa),
        }
    }
}
