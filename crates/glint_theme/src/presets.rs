//! Built-in gradient preset catalog.

use std::fmt::{Display, Formatter};

use glint_core::ColorPair;
use serde::{Deserialize, Serialize};

/// Built-in preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GradientPreset {
    /// Sky blue into pink.
    SkyPink,
    /// Violet into orange.
    PurpleOrange,
    /// Emerald into blue.
    GreenBlue,
    /// Cyan into blue.
    TechBlue,
    /// Emerald into cyan.
    CoolTeal,
    /// Orange into red.
    WarmSunset,
}

impl GradientPreset {
    /// Stable preset id for untyped props and serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::SkyPink => "skyPink",
            Self::PurpleOrange => "purpleOrange",
            Self::GreenBlue => "greenBlue",
            Self::TechBlue => "techBlue",
            Self::CoolTeal => "coolTeal",
            Self::WarmSunset => "warmSunset",
        }
    }

    /// Look up a preset by its stable id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|preset| preset.id() == id)
    }

    /// Full preset list.
    pub fn all() -> &'static [GradientPreset] {
        const PRESETS: [GradientPreset; 6] = [
            GradientPreset::SkyPink,
            GradientPreset::PurpleOrange,
            GradientPreset::GreenBlue,
            GradientPreset::TechBlue,
            GradientPreset::CoolTeal,
            GradientPreset::WarmSunset,
        ];
        &PRESETS
    }

    /// The color pair bound to this preset.
    pub fn colors(self) -> ColorPair {
        match self {
            Self::SkyPink => ColorPair::new("#7dd3fc", "#f472b6"),
            Self::PurpleOrange => ColorPair::new("#a78bfa", "#fb923c"),
            Self::GreenBlue => ColorPair::new("#10b981", "#3b82f6"),
            Self::TechBlue => ColorPair::new("#06b6d4", "#3b82f6"),
            Self::CoolTeal => ColorPair::new("#10b981", "#06b6d4"),
            Self::WarmSunset => ColorPair::new("#fb923c", "#ef4444"),
        }
    }

    /// Comma-separated id list for diagnostics.
    pub fn expected_ids() -> String {
        Self::all()
            .iter()
            .map(|preset| preset.id())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Display for GradientPreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Untyped lookup; `None` when the name is not a registered preset.
pub fn get_preset(name: &str) -> Option<ColorPair> {
    GradientPreset::from_id(name).map(GradientPreset::colors)
}
