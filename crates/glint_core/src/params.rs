//! Enumerated style parameters
//!
//! Each parameter is a closed token set with a documented default. The
//! typed enums are the source of truth; the stringly-typed prop surface
//! goes through the same catalog via [`StyleParam::parse_token`], so both
//! presentation layers share one validated core.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::diag::{warn, DiagnosticsMode};

/// Raised when an untyped token is not in a parameter's catalog.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown {param} \"{value}\", expected one of: {expected}")]
pub struct ParseParamError {
    pub param: &'static str,
    pub value: String,
    pub expected: String,
}

/// A closed-set style parameter: a fixed catalog of accepted tokens.
pub trait StyleParam: Copy + Default + Sized + 'static {
    /// Prop name used in diagnostics.
    const NAME: &'static str;

    /// Stable token, as it appears in class names and untyped props.
    fn token(self) -> &'static str;

    /// Full catalog of accepted values.
    fn catalog() -> &'static [Self];

    /// Parse an untyped token against the catalog.
    fn parse_token(token: &str) -> Option<Self> {
        Self::catalog().iter().copied().find(|v| v.token() == token)
    }

    /// Quoted, comma-separated token list for diagnostics.
    fn expected() -> String {
        Self::catalog()
            .iter()
            .map(|v| format!("\"{}\"", v.token()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A prop that can arrive as a typed value or an untyped token.
///
/// Typed values are valid by construction; raw tokens are resolved against
/// the catalog with diagnose-and-default recovery.
#[derive(Clone, Debug, PartialEq)]
pub enum Prop<T> {
    Typed(T),
    Raw(String),
}

impl<T: StyleParam> Prop<T> {
    /// Resolve to a definite value, falling back to `default` with a
    /// diagnostic when a raw token is not in the catalog.
    pub fn resolve(&self, default: T, mode: DiagnosticsMode) -> T {
        match self {
            Prop::Typed(value) => *value,
            Prop::Raw(token) => match T::parse_token(token) {
                Some(value) => value,
                None => {
                    warn(
                        mode,
                        &format!("invalid {} value: \"{token}\"", T::NAME),
                        &format!("use one of: {}", T::expected()),
                    );
                    default
                }
            },
        }
    }
}

/// Blur intensity of the gradient backdrop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlurLevel {
    Soft,
    #[default]
    Normal,
    Heavy,
}

impl BlurLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Soft => "soft",
            Self::Normal => "normal",
            Self::Heavy => "heavy",
        }
    }

    pub fn all() -> &'static [BlurLevel] {
        const ALL: [BlurLevel; 3] = [BlurLevel::Soft, BlurLevel::Normal, BlurLevel::Heavy];
        &ALL
    }
}

impl StyleParam for BlurLevel {
    const NAME: &'static str = "blur";

    fn token(self) -> &'static str {
        self.as_str()
    }

    fn catalog() -> &'static [Self] {
        Self::all()
    }
}

/// Edge toward which a full-background gradient fades to the base color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FadeDirection {
    #[default]
    Bottom,
    Top,
    Left,
    Right,
    None,
}

impl FadeDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bottom => "bottom",
            Self::Top => "top",
            Self::Left => "left",
            Self::Right => "right",
            Self::None => "none",
        }
    }

    pub fn all() -> &'static [FadeDirection] {
        const ALL: [FadeDirection; 5] = [
            FadeDirection::Bottom,
            FadeDirection::Top,
            FadeDirection::Left,
            FadeDirection::Right,
            FadeDirection::None,
        ];
        &ALL
    }
}

impl StyleParam for FadeDirection {
    const NAME: &'static str = "fade_direction";

    fn token(self) -> &'static str {
        self.as_str()
    }

    fn catalog() -> &'static [Self] {
        Self::all()
    }
}

/// Card corner a glow accent is anchored to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    #[default]
    #[serde(rename = "tl")]
    TopLeft,
    #[serde(rename = "tr")]
    TopRight,
    #[serde(rename = "bl")]
    BottomLeft,
    #[serde(rename = "br")]
    BottomRight,
}

impl Corner {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "tl",
            Self::TopRight => "tr",
            Self::BottomLeft => "bl",
            Self::BottomRight => "br",
        }
    }

    pub fn all() -> &'static [Corner] {
        const ALL: [Corner; 4] = [
            Corner::TopLeft,
            Corner::TopRight,
            Corner::BottomLeft,
            Corner::BottomRight,
        ];
        &ALL
    }
}

impl StyleParam for Corner {
    const NAME: &'static str = "corner";

    fn token(self) -> &'static str {
        self.as_str()
    }

    fn catalog() -> &'static [Self] {
        Self::all()
    }
}

/// Size of a corner glow accent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlowSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl GlowSize {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    pub fn all() -> &'static [GlowSize] {
        const ALL: [GlowSize; 3] = [GlowSize::Sm, GlowSize::Md, GlowSize::Lg];
        &ALL
    }
}

impl StyleParam for GlowSize {
    const NAME: &'static str = "size";

    fn token(self) -> &'static str {
        self.as_str()
    }

    fn catalog() -> &'static [Self] {
        Self::all()
    }
}

macro_rules! impl_param_conversions {
    ($ty:ty) => {
        impl Display for $ty {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseParamError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as StyleParam>::parse_token(s).ok_or_else(|| ParseParamError {
                    param: <$ty as StyleParam>::NAME,
                    value: s.to_string(),
                    expected: <$ty as StyleParam>::expected(),
                })
            }
        }

        impl From<$ty> for Prop<$ty> {
            fn from(value: $ty) -> Self {
                Prop::Typed(value)
            }
        }

        impl From<&str> for Prop<$ty> {
            fn from(token: &str) -> Self {
                Prop::Raw(token.to_string())
            }
        }

        impl From<String> for Prop<$ty> {
            fn from(token: String) -> Self {
                Prop::Raw(token)
            }
        }
    };
}

impl_param_conversions!(BlurLevel);
impl_param_conversions!(FadeDirection);
impl_param_conversions!(Corner);
impl_param_conversions!(GlowSize);

/// Membership check for blur tokens.
pub fn is_valid_blur(token: &str) -> bool {
    BlurLevel::parse_token(token).is_some()
}

/// Membership check for fade direction tokens.
pub fn is_valid_fade_direction(token: &str) -> bool {
    FadeDirection::parse_token(token).is_some()
}

/// Membership check for corner tokens.
pub fn is_valid_corner(token: &str) -> bool {
    Corner::parse_token(token).is_some()
}

/// Membership check for glow size tokens.
pub fn is_valid_size(token: &str) -> bool {
    GlowSize::parse_token(token).is_some()
}

/// Gradient angles are accepted in the inclusive 0-360 degree range.
pub fn is_valid_angle(angle: f32) -> bool {
    angle.is_finite() && (0.0..=360.0).contains(&angle)
}
