//! Glint Core
//!
//! The validated core of the Glint gradient component library:
//!
//! - **Color grammars**: strict hex / `rgb()` / `hsl()` validation that
//!   preserves valid caller strings verbatim
//! - **Style parameters**: closed token catalogs (blur, fade direction,
//!   corner, glow size) shared by the typed and untyped prop surfaces
//! - **Gradient generation**: `linear-gradient()` descriptors with evenly
//!   spaced stops
//! - **Diagnostics**: advisory `tracing` warnings gated by an explicit
//!   development/production mode
//!
//! Everything here is pure and synchronous. Invalid input never fails an
//! operation; it degrades to a documented default, at most emitting a
//! diagnostic.

pub mod color;
pub mod diag;
pub mod gradient;
pub mod params;
pub mod style;

pub use color::{
    is_valid_color, is_valid_hex_color, is_valid_hsl_color, is_valid_rgb_color, validate_color,
    ColorPair,
};
pub use diag::DiagnosticsMode;
pub use gradient::{multi_color_gradient, two_color_gradient};
pub use params::{
    is_valid_angle, is_valid_blur, is_valid_corner, is_valid_fade_direction, is_valid_size,
    BlurLevel, Corner, FadeDirection, GlowSize, ParseParamError, Prop, StyleParam,
};
pub use style::{StyleVar, StyleVars};
