//! Color string validation
//!
//! Components accept colors in three textual encodings: hex (`#7dd3fc` or
//! `#abc`), `rgb()`/`rgba()` with integer channels, and `hsl()`/`hsla()`
//! with percentage channels. Valid strings are passed through verbatim to
//! the emitted style variables; nothing is converted between encodings.
//!
//! The grammars are strict. `#ff00` has the wrong digit count,
//! `rgb(256, 0, 0)` is out of range, `rgba(255, 0, 0)` is missing its
//! alpha component, and `hsl(0, 100, 50)` is missing the `%` signs - all
//! of these are rejected.

use nom::branch::alt;
use nom::bytes::complete::{tag, take_while1};
use nom::character::complete::{char, digit1, multispace0};
use nom::combinator::{all_consuming, map_res, opt, verify};
use nom::IResult;
use serde::{Deserialize, Serialize};

use crate::diag::{warn, DiagnosticsMode};

/// Ordered start/end pair for a two-stop gradient.
///
/// Both members are either caller-validated color strings or a component
/// default by the time a pair reaches the rendering layer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorPair {
    pub start: String,
    pub end: String,
}

impl ColorPair {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

fn ws(input: &str) -> IResult<&str, &str> {
    multispace0(input)
}

/// Integer channel, range-checked by the caller.
fn int_channel(input: &str) -> IResult<&str, u32> {
    map_res(digit1, str::parse)(input)
}

/// Decimal alpha value: `1`, `0.5`, `.5`.
fn alpha_value(input: &str) -> IResult<&str, f32> {
    map_res(
        take_while1(|c: char| c.is_ascii_digit() || c == '.'),
        str::parse,
    )(input)
}

fn range_error(input: &str) -> nom::Err<nom::error::Error<&str>> {
    nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Verify))
}

/// Hex color: `#` followed by exactly 3 or 6 hex digits.
fn hex_color(input: &str) -> IResult<&str, &str> {
    let (input, _) = char('#')(input)?;
    verify(take_while1(|c: char| c.is_ascii_hexdigit()), |s: &str| {
        s.len() == 3 || s.len() == 6
    })(input)
}

/// `rgb(r, g, b)` with integer channels 0-255.
fn rgb_color(input: &str) -> IResult<&str, ()> {
    let (input, _) = tag("rgb(")(input)?;
    let (input, _) = ws(input)?;
    let (input, r) = int_channel(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = char(',')(input)?;
    let (input, _) = ws(input)?;
    let (input, g) = int_channel(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = char(',')(input)?;
    let (input, _) = ws(input)?;
    let (input, b) = int_channel(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = char(')')(input)?;

    if r > 255 || g > 255 || b > 255 {
        return Err(range_error(input));
    }
    Ok((input, ()))
}

/// `rgba(r, g, b, a)` with integer channels 0-255 and alpha 0-1.
///
/// The alpha variant requires exactly four components; `rgba(255, 0, 0)`
/// does not parse.
fn rgba_color(input: &str) -> IResult<&str, ()> {
    let (input, _) = tag("rgba(")(input)?;
    let (input, _) = ws(input)?;
    let (input, r) = int_channel(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = char(',')(input)?;
    let (input, _) = ws(input)?;
    let (input, g) = int_channel(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = char(',')(input)?;
    let (input, _) = ws(input)?;
    let (input, b) = int_channel(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = char(',')(input)?;
    let (input, _) = ws(input)?;
    let (input, a) = alpha_value(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = char(')')(input)?;

    if r > 255 || g > 255 || b > 255 || !(0.0..=1.0).contains(&a) {
        return Err(range_error(input));
    }
    Ok((input, ()))
}

/// Optional trailing alpha in `hsl()`/`hsla()`: `, 0.8`.
fn hsl_alpha(input: &str) -> IResult<&str, f32> {
    let (input, _) = char(',')(input)?;
    let (input, _) = ws(input)?;
    let (input, a) = alpha_value(input)?;
    let (input, _) = ws(input)?;
    Ok((input, a))
}

/// `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)` with integer hue and
/// percentage saturation/lightness. The `%` signs are mandatory.
fn hsl_color(input: &str) -> IResult<&str, ()> {
    let (input, _) = alt((tag("hsla("), tag("hsl(")))(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = digit1(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = char(',')(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = digit1(input)?;
    let (input, _) = char('%')(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = char(',')(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = digit1(input)?;
    let (input, _) = char('%')(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = opt(hsl_alpha)(input)?;
    let (input, _) = char(')')(input)?;
    Ok((input, ()))
}

/// Whether `color` is a 3- or 6-digit hex color.
pub fn is_valid_hex_color(color: &str) -> bool {
    all_consuming(hex_color)(color).is_ok()
}

/// Whether `color` is a well-formed `rgb()` or `rgba()` color.
pub fn is_valid_rgb_color(color: &str) -> bool {
    all_consuming(alt((rgba_color, rgb_color)))(color).is_ok()
}

/// Whether `color` is a well-formed `hsl()` or `hsla()` color.
pub fn is_valid_hsl_color(color: &str) -> bool {
    all_consuming(hsl_color)(color).is_ok()
}

/// Whether `color` matches any supported encoding.
pub fn is_valid_color(color: &str) -> bool {
    is_valid_hex_color(color) || is_valid_rgb_color(color) || is_valid_hsl_color(color)
}

/// Validate an optional color prop, falling back to `default`.
///
/// Absent or empty input returns the default silently; a present but
/// malformed value emits one diagnostic naming the prop and returns the
/// default. Valid input is returned unchanged.
pub fn validate_color(
    color: Option<&str>,
    prop: &str,
    default: &str,
    mode: DiagnosticsMode,
) -> String {
    let Some(color) = color.filter(|c| !c.is_empty()) else {
        return default.to_string();
    };

    if !is_valid_color(color) {
        warn(
            mode,
            &format!("invalid color format for {prop}: \"{color}\""),
            "use hex (#7dd3fc), rgb(125, 211, 252), rgba(125, 211, 252, 0.8), or hsl(199, 95%, 74%)",
        );
        return default.to_string();
    }

    color.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_accepts_3_and_6_digits() {
        assert!(is_valid_hex_color("#abc"));
        assert!(is_valid_hex_color("#AbC123"));
        assert!(is_valid_hex_color("#7dd3fc"));
    }

    #[test]
    fn test_hex_rejects_other_lengths() {
        assert!(!is_valid_hex_color("#ff00"));
        assert!(!is_valid_hex_color("#ff0000ff"));
        assert!(!is_valid_hex_color("#f"));
        assert!(!is_valid_hex_color("abc"));
        assert!(!is_valid_hex_color("#ggg"));
        assert!(!is_valid_hex_color("#abc "));
    }

    #[test]
    fn test_rgb_in_range() {
        assert!(is_valid_rgb_color("rgb(0, 0, 0)"));
        assert!(is_valid_rgb_color("rgb(255,255,255)"));
        assert!(is_valid_rgb_color("rgb( 125 , 211 , 252 )"));
    }

    #[test]
    fn test_rgb_out_of_range() {
        assert!(!is_valid_rgb_color("rgb(256, 0, 0)"));
        assert!(!is_valid_rgb_color("rgb(0, 0, 999)"));
    }

    #[test]
    fn test_rgb_rejects_malformed() {
        assert!(!is_valid_rgb_color("rgb(0, 0)"));
        assert!(!is_valid_rgb_color("rgb(0, 0, 0, 0.5)"));
        assert!(!is_valid_rgb_color("rgb(1.5, 0, 0)"));
        assert!(!is_valid_rgb_color("rgb(0 0 0)"));
        assert!(!is_valid_rgb_color("RGB(0, 0, 0)"));
    }

    #[test]
    fn test_rgba_requires_alpha() {
        assert!(is_valid_rgb_color("rgba(255, 0, 0, 1)"));
        assert!(is_valid_rgb_color("rgba(255, 0, 0, 0.5)"));
        assert!(is_valid_rgb_color("rgba(255, 0, 0, .5)"));
        assert!(!is_valid_rgb_color("rgba(255, 0, 0)"));
    }

    #[test]
    fn test_rgba_alpha_range() {
        assert!(!is_valid_rgb_color("rgba(255, 0, 0, 1.5)"));
        assert!(is_valid_rgb_color("rgba(255, 0, 0, 0)"));
    }

    #[test]
    fn test_hsl_requires_percent_signs() {
        assert!(is_valid_hsl_color("hsl(199, 95%, 74%)"));
        assert!(is_valid_hsl_color("hsl(0,100%,50%)"));
        assert!(!is_valid_hsl_color("hsl(0, 100, 50)"));
        assert!(!is_valid_hsl_color("hsl(0, 100%, 50)"));
    }

    #[test]
    fn test_hsla_alpha_is_optional_syntax() {
        assert!(is_valid_hsl_color("hsla(199, 95%, 74%, 0.8)"));
        assert!(is_valid_hsl_color("hsla(199, 95%, 74%)"));
        assert!(is_valid_hsl_color("hsl(199, 95%, 74%, 0.8)"));
        assert!(!is_valid_hsl_color("hsla(199, 95, 74, 0.8)"));
    }

    #[test]
    fn test_validate_color_absent_returns_default() {
        assert_eq!(
            validate_color(None, "color_start", "#000000", DiagnosticsMode::Production),
            "#000000"
        );
        assert_eq!(
            validate_color(Some(""), "color_start", "#000000", DiagnosticsMode::Production),
            "#000000"
        );
    }

    #[test]
    fn test_validate_color_invalid_returns_default() {
        assert_eq!(
            validate_color(
                Some("not-a-color"),
                "color_start",
                "#000000",
                DiagnosticsMode::Production
            ),
            "#000000"
        );
    }

    #[test]
    fn test_validate_color_valid_is_preserved_verbatim() {
        assert_eq!(
            validate_color(Some("#abc"), "color_start", "#000000", DiagnosticsMode::Production),
            "#abc"
        );
        assert_eq!(
            validate_color(
                Some("rgb( 1 , 2 , 3 )"),
                "color_end",
                "#000000",
                DiagnosticsMode::Production
            ),
            "rgb( 1 , 2 , 3 )"
        );
    }

    #[test]
    fn test_validate_color_is_idempotent() {
        let once = validate_color(Some("#abc"), "c", "#000000", DiagnosticsMode::Production);
        let twice = validate_color(Some(once.as_str()), "c", "#000000", DiagnosticsMode::Production);
        assert_eq!(once, twice);
    }
}
