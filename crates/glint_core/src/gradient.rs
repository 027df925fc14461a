//! CSS gradient string generation
//!
//! Builds `linear-gradient()` descriptors from validated inputs. The
//! multi-color path filters out malformed entries rather than substituting
//! defaults; stop positions are spread evenly and rounded half away from
//! zero to integer percentages, so the first stop is always `0%` and the
//! last always `100%`.

use smallvec::SmallVec;

use crate::color::is_valid_color;
use crate::diag::{warn, DiagnosticsMode};

/// Two-stop gradient from an already-validated color pair.
pub fn two_color_gradient(start: &str, end: &str, angle: f32) -> String {
    format!("linear-gradient({angle}deg, {start} 0%, {end} 100%)")
}

/// Evenly spaced multi-stop gradient.
///
/// Malformed entries are dropped with one diagnostic each. Returns `None`
/// when fewer than two valid colors survive filtering; the caller falls
/// back to the two-color pair.
pub fn multi_color_gradient<S: AsRef<str>>(
    colors: &[S],
    angle: f32,
    mode: DiagnosticsMode,
) -> Option<String> {
    if colors.len() < 2 {
        warn(
            mode,
            "colors array must contain at least 2 colors",
            "provide at least 2 colors in the array",
        );
        return None;
    }

    let valid: SmallVec<[&str; 8]> = colors
        .iter()
        .map(AsRef::as_ref)
        .filter(|color| {
            let ok = is_valid_color(color);
            if !ok {
                warn(
                    mode,
                    &format!("invalid color in colors array: \"{color}\""),
                    "remove or fix invalid colors",
                );
            }
            ok
        })
        .collect();

    if valid.len() < 2 {
        return None;
    }

    let step = 100.0 / (valid.len() - 1) as f32;
    let stops = valid
        .iter()
        .enumerate()
        .map(|(i, color)| format!("{color} {}%", (i as f32 * step).round()))
        .collect::<Vec<_>>()
        .join(", ");

    Some(format!("linear-gradient({angle}deg, {stops})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODE: DiagnosticsMode = DiagnosticsMode::Production;

    #[test]
    fn test_two_color_gradient_format() {
        assert_eq!(
            two_color_gradient("#3b82f6", "#ec4899", 135.0),
            "linear-gradient(135deg, #3b82f6 0%, #ec4899 100%)"
        );
    }

    #[test]
    fn test_three_colors_spread_evenly() {
        let gradient =
            multi_color_gradient(&["#ff0000", "#00ff00", "#0000ff"], 135.0, MODE).unwrap();
        assert!(gradient.contains("linear-gradient(135deg"));
        assert!(gradient.contains("#ff0000 0%"));
        assert!(gradient.contains("#00ff00 50%"));
        assert!(gradient.contains("#0000ff 100%"));
    }

    #[test]
    fn test_four_colors_round_intermediate_stops() {
        let gradient =
            multi_color_gradient(&["#ff0000", "#00ff00", "#0000ff", "#ffffff"], 90.0, MODE)
                .unwrap();
        assert_eq!(
            gradient,
            "linear-gradient(90deg, #ff0000 0%, #00ff00 33%, #0000ff 67%, #ffffff 100%)"
        );
    }

    #[test]
    fn test_single_color_yields_none() {
        assert_eq!(multi_color_gradient(&["#ff0000"], 135.0, MODE), None);
    }

    #[test]
    fn test_invalid_entries_are_dropped_not_replaced() {
        let gradient =
            multi_color_gradient(&["#ff0000", "invalid", "#0000ff"], 0.0, MODE).unwrap();
        assert!(gradient.contains("#ff0000 0%"));
        assert!(gradient.contains("#0000ff 100%"));
        assert!(!gradient.contains("invalid"));
        assert_eq!(gradient.matches('%').count(), 2);
    }

    #[test]
    fn test_all_entries_invalid_yields_none() {
        assert_eq!(multi_color_gradient(&["nope", "also-nope"], 45.0, MODE), None);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let colors = ["#ff0000", "#00ff00", "#0000ff"];
        assert_eq!(
            multi_color_gradient(&colors, 135.0, MODE),
            multi_color_gradient(&colors, 135.0, MODE)
        );
    }
}
