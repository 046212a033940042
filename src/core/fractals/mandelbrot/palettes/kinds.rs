use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::engine::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteKind {
    #[default]
    Classic,
    FireGradient,
    BlueWhiteGradient,
}

impl PaletteKind {
    pub const ALL: &'static [Self] = &[Self::Classic, Self::FireGradient, Self::BlueWhiteGradient];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::FireGradient => "Fire gradient",
            Self::BlueWhiteGradient => "Blue-white gradient",
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::FireGradient => "fire-gradient",
            Self::BlueWhiteGradient => "blue-white-gradient",
        }
    }
}

impl std::fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for PaletteKind {
    type Err = EngineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();

        Self::ALL
            .iter()
            .copied()
            .find(|kind| {
                kind.key().eq_ignore_ascii_case(wanted)
                    || kind.display_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|kind| kind.key()).collect();
                EngineError::invalid(
                    "palette",
                    format!("unknown palette {wanted:?}, expected one of {}", known.join(", ")),
                )
            })
    }
}
