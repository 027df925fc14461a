//! Glint Components
//!
//! Gradient visual-effects components for web front-ends: a full-background
//! gradient and a card with a corner glow accent. Components resolve their
//! props through the validated core (`glint_core`), fill color slots from
//! presets (`glint_theme`), and render an [`Element`] tree carrying class
//! tokens and CSS custom properties that an accompanying stylesheet turns
//! into the visual effect.
//!
//! # Quick Start
//!
//! ```
//! use glint_components::prelude::*;
//!
//! let hero = background_gradient()
//!     .preset(GradientPreset::PurpleOrange)
//!     .fade_direction(FadeDirection::Bottom)
//!     .child("Welcome")
//!     .build();
//!
//! let html = hero.to_html();
//! assert!(html.contains("gradient-background"));
//! ```
//!
//! # Error handling
//!
//! Nothing here returns an error or panics on bad props. Every invalid
//! input degrades to the component's documented default; in development
//! builds a `tracing` warning describes the value and the fallback.

pub mod background;
pub mod card;
pub mod element;
mod resolve;

pub use background::{background_gradient, BackgroundGradient, ResolvedBackground, DEFAULT_ANGLE};
pub use card::{card_with_corner_accent, CardWithCornerAccent, ResolvedCard};
pub use element::{Element, Node};
pub use resolve::{PresetProp, DEFAULT_COLOR_END, DEFAULT_COLOR_START};

pub mod prelude {
    //! Single-import surface for component consumers.

    pub use crate::background::{background_gradient, BackgroundGradient};
    pub use crate::card::{card_with_corner_accent, CardWithCornerAccent};
    pub use crate::element::{Element, Node};
    pub use glint_core::{
        BlurLevel, Corner, DiagnosticsMode, FadeDirection, GlowSize, StyleVar,
    };
    pub use glint_theme::GradientPreset;
}
