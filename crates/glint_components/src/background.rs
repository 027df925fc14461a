//! BackgroundGradient component - full-background gradient that fades to
//! the neutral base color in a given direction.
//!
//! Supports two-color pairs, multi-stop color lists, custom angles, dark
//! mode, and presets. All props degrade gracefully: an invalid value is
//! diagnosed and replaced by the documented default, never a broken
//! render.
//!
//! # Example
//!
//! ```
//! use glint_components::prelude::*;
//!
//! let element = background_gradient()
//!     .preset(GradientPreset::SkyPink)
//!     .blur(BlurLevel::Soft)
//!     .fade_direction(FadeDirection::Top)
//!     .child("Hello")
//!     .build();
//!
//! assert!(element.has_class("gradient-background"));
//! assert!(element.has_class("blur-soft"));
//! ```

use glint_core::diag::{warn, DiagnosticsMode};
use glint_core::gradient::multi_color_gradient;
use glint_core::params::{is_valid_angle, BlurLevel, FadeDirection, Prop};
use glint_core::{StyleVar, StyleVars};

use crate::element::{Element, Node};
use crate::resolve::{resolve_color_pair, PresetProp};

/// Default gradient angle in degrees.
pub const DEFAULT_ANGLE: f32 = 135.0;

/// Fully resolved background parameters; every field is valid by
/// construction, so the rendering layer never re-validates.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedBackground {
    pub color_start: String,
    pub color_end: String,
    /// Generated multi-color gradient, when a list of two or more colors
    /// survived filtering.
    pub gradient_bg: Option<String>,
    pub blur: BlurLevel,
    pub fade_direction: FadeDirection,
    pub angle: f32,
    pub dark_mode: bool,
}

#[derive(Clone, Debug)]
struct BackgroundGradientConfig {
    color_start: Option<String>,
    color_end: Option<String>,
    colors: Vec<String>,
    blur: Prop<BlurLevel>,
    fade_direction: Prop<FadeDirection>,
    angle: f32,
    dark_mode: bool,
    preset: Option<PresetProp>,
    class: Option<String>,
    style: Option<String>,
    diagnostics: DiagnosticsMode,
}

impl Default for BackgroundGradientConfig {
    fn default() -> Self {
        Self {
            color_start: None,
            color_end: None,
            colors: Vec::new(),
            blur: Prop::Typed(BlurLevel::default()),
            fade_direction: Prop::Typed(FadeDirection::default()),
            angle: DEFAULT_ANGLE,
            dark_mode: false,
            preset: None,
            class: None,
            style: None,
            diagnostics: DiagnosticsMode::default(),
        }
    }
}

/// Builder for the full-background gradient container.
pub struct BackgroundGradient {
    config: BackgroundGradientConfig,
    children: Vec<Node>,
}

/// Create a background gradient builder.
pub fn background_gradient() -> BackgroundGradient {
    BackgroundGradient {
        config: BackgroundGradientConfig::default(),
        children: Vec::new(),
    }
}

impl BackgroundGradient {
    /// Starting gradient color (hex, rgb, rgba, or hsl).
    pub fn color_start(mut self, color: impl Into<String>) -> Self {
        self.config.color_start = Some(color.into());
        self
    }

    /// Ending gradient color (hex, rgb, rgba, or hsl).
    pub fn color_end(mut self, color: impl Into<String>) -> Self {
        self.config.color_end = Some(color.into());
        self
    }

    /// Multi-stop color list. With two or more entries it takes precedence
    /// over the start/end pair for the visual gradient.
    pub fn colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Blur intensity; accepts [`BlurLevel`] or an untyped token.
    pub fn blur(mut self, blur: impl Into<Prop<BlurLevel>>) -> Self {
        self.config.blur = blur.into();
        self
    }

    /// Fade direction; accepts [`FadeDirection`] or an untyped token.
    pub fn fade_direction(mut self, fade: impl Into<Prop<FadeDirection>>) -> Self {
        self.config.fade_direction = fade.into();
        self
    }

    /// Gradient angle in degrees (0-360).
    pub fn angle(mut self, angle: f32) -> Self {
        self.config.angle = angle;
        self
    }

    /// Fade to a dark base color instead of white.
    pub fn dark_mode(mut self, enabled: bool) -> Self {
        self.config.dark_mode = enabled;
        self
    }

    /// Fill unset color slots from a preset; accepts a typed
    /// [`glint_theme::GradientPreset`] or an untyped id.
    pub fn preset(mut self, preset: impl Into<PresetProp>) -> Self {
        self.config.preset = Some(preset.into());
        self
    }

    /// Additional class names, appended after the generated tokens.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.config.class = Some(class.into());
        self
    }

    /// Additional inline declarations, appended after the style variables.
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.config.style = Some(style.into());
        self
    }

    /// Override the diagnostics mode (defaults to the build profile).
    pub fn diagnostics(mut self, mode: DiagnosticsMode) -> Self {
        self.config.diagnostics = mode;
        self
    }

    /// Append content to display inside the gradient container.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Resolve every prop to a definite, valid value.
    pub fn resolve(&self) -> ResolvedBackground {
        let config = &self.config;
        let mode = config.diagnostics;

        let pair = resolve_color_pair(
            config.color_start.as_deref(),
            config.color_end.as_deref(),
            config.preset.as_ref(),
            mode,
        );

        let blur = config.blur.resolve(BlurLevel::default(), mode);
        let fade_direction = config.fade_direction.resolve(FadeDirection::default(), mode);

        let angle = if is_valid_angle(config.angle) {
            config.angle
        } else {
            warn(
                mode,
                &format!("invalid angle: {}", config.angle),
                "use a number between 0 and 360",
            );
            DEFAULT_ANGLE
        };

        // A list shorter than two entries can never beat the two-color
        // path, so the generator is not consulted for it.
        let gradient_bg = if config.colors.len() >= 2 {
            multi_color_gradient(&config.colors, angle, mode)
        } else {
            None
        };

        ResolvedBackground {
            color_start: pair.start,
            color_end: pair.end,
            gradient_bg,
            blur,
            fade_direction,
            angle,
            dark_mode: config.dark_mode,
        }
    }

    /// Resolve props and build the container element.
    pub fn build(self) -> Element {
        let resolved = self.resolve();

        let mut vars = StyleVars::new()
            .with(StyleVar::GradientStart, resolved.color_start.clone())
            .with(StyleVar::GradientEnd, resolved.color_end.clone());
        match &resolved.gradient_bg {
            Some(gradient) => vars.set(StyleVar::GradientBg, gradient.clone()),
            None if resolved.angle != DEFAULT_ANGLE => {
                vars.set(StyleVar::GradientAngle, format!("{}deg", resolved.angle));
            }
            None => {}
        }

        let mut element = Element::div()
            .class("gradient-background")
            .class(format!("blur-{}", resolved.blur.as_str()))
            .class(format!("fade-{}", resolved.fade_direction.as_str()));
        if resolved.dark_mode {
            element = element.class("dark-mode");
        }
        if let Some(class) = self.config.class {
            element = element.class(class);
        }

        element = element.with_vars(vars);
        if let Some(style) = self.config.style {
            element = element.inline_style(style);
        }
        for child in self.children {
            element = element.child(child);
        }
        element
    }
}
