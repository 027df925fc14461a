//! Preset-then-validate color resolution shared by both components.
//!
//! Order matters: the preset fills color slots the caller left unset, then
//! every slot is validated independently. An explicit color always wins
//! over the preset's corresponding slot, field by field.

use glint_core::color::validate_color;
use glint_core::diag::{warn, DiagnosticsMode};
use glint_core::ColorPair;
use glint_theme::{get_preset, GradientPreset};

/// Global default start color.
pub const DEFAULT_COLOR_START: &str = "#3b82f6";
/// Global default end color.
pub const DEFAULT_COLOR_END: &str = "#ec4899";

/// Preset selector: a typed catalog entry or an untyped id.
#[derive(Clone, Debug, PartialEq)]
pub enum PresetProp {
    Typed(GradientPreset),
    Raw(String),
}

impl From<GradientPreset> for PresetProp {
    fn from(preset: GradientPreset) -> Self {
        PresetProp::Typed(preset)
    }
}

impl From<&str> for PresetProp {
    fn from(id: &str) -> Self {
        PresetProp::Raw(id.to_string())
    }
}

impl From<String> for PresetProp {
    fn from(id: String) -> Self {
        PresetProp::Raw(id)
    }
}

fn resolve_preset(preset: Option<&PresetProp>, mode: DiagnosticsMode) -> Option<ColorPair> {
    match preset {
        None => None,
        Some(PresetProp::Typed(preset)) => Some(preset.colors()),
        Some(PresetProp::Raw(id)) => {
            let pair = get_preset(id);
            if pair.is_none() {
                warn(
                    mode,
                    &format!("unknown preset: \"{id}\""),
                    &format!("use one of: {}", GradientPreset::expected_ids()),
                );
            }
            pair
        }
    }
}

/// Fill unset color slots from the preset, then validate each slot,
/// falling back to the global defaults.
pub(crate) fn resolve_color_pair(
    color_start: Option<&str>,
    color_end: Option<&str>,
    preset: Option<&PresetProp>,
    mode: DiagnosticsMode,
) -> ColorPair {
    let preset_pair = resolve_preset(preset, mode);
    let start = color_start
        .filter(|c| !c.is_empty())
        .or(preset_pair.as_ref().map(|pair| pair.start.as_str()));
    let end = color_end
        .filter(|c| !c.is_empty())
        .or(preset_pair.as_ref().map(|pair| pair.end.as_str()));

    ColorPair::new(
        validate_color(start, "color_start", DEFAULT_COLOR_START, mode),
        validate_color(end, "color_end", DEFAULT_COLOR_END, mode),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODE: DiagnosticsMode = DiagnosticsMode::Production;

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let pair = resolve_color_pair(None, None, None, MODE);
        assert_eq!(pair, ColorPair::new(DEFAULT_COLOR_START, DEFAULT_COLOR_END));
    }

    #[test]
    fn test_preset_fills_both_slots() {
        let preset = PresetProp::from(GradientPreset::SkyPink);
        let pair = resolve_color_pair(None, None, Some(&preset), MODE);
        assert_eq!(pair, ColorPair::new("#7dd3fc", "#f472b6"));
    }

    #[test]
    fn test_explicit_color_overrides_preset_slot_field_by_field() {
        let preset = PresetProp::from(GradientPreset::SkyPink);
        let pair = resolve_color_pair(None, Some("#123456"), Some(&preset), MODE);
        assert_eq!(pair.start, "#7dd3fc");
        assert_eq!(pair.end, "#123456");
    }

    #[test]
    fn test_unknown_preset_id_falls_back_to_defaults() {
        let preset = PresetProp::from("nonexistent");
        let pair = resolve_color_pair(None, None, Some(&preset), MODE);
        assert_eq!(pair, ColorPair::new(DEFAULT_COLOR_START, DEFAULT_COLOR_END));
    }

    #[test]
    fn test_raw_preset_id_resolves_like_typed() {
        let typed = PresetProp::from(GradientPreset::WarmSunset);
        let raw = PresetProp::from("warmSunset");
        assert_eq!(
            resolve_color_pair(None, None, Some(&typed), MODE),
            resolve_color_pair(None, None, Some(&raw), MODE),
        );
    }

    #[test]
    fn test_invalid_explicit_color_falls_back_to_default_not_preset() {
        let preset = PresetProp::from(GradientPreset::SkyPink);
        let pair = resolve_color_pair(Some("bogus"), None, Some(&preset), MODE);
        assert_eq!(pair.start, DEFAULT_COLOR_START);
        assert_eq!(pair.end, "#f472b6");
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let preset = PresetProp::from(GradientPreset::GreenBlue);
        let first = resolve_color_pair(Some("#abc"), None, Some(&preset), MODE);
        let second =
            resolve_color_pair(Some(first.start.as_str()), Some(first.end.as_str()), None, MODE);
        assert_eq!(first, second);
    }
}
