//! CardWithCornerAccent component - card with a soft gradient glow behind
//! one corner.
//!
//! Renders a layered structure: a sized wrapper carrying the resolved
//! color variables, a decorative glow layer anchored to the requested
//! corner, and a content layer wrapping caller content unmodified.
//!
//! # Example
//!
//! ```
//! use glint_components::prelude::*;
//!
//! let element = card_with_corner_accent()
//!     .corner(Corner::BottomRight)
//!     .size(GlowSize::Lg)
//!     .child("Card body")
//!     .build();
//!
//! assert!(element.has_class("corner-lg"));
//! ```

use glint_core::diag::DiagnosticsMode;
use glint_core::params::{Corner, GlowSize, Prop};
use glint_core::{StyleVar, StyleVars};

use crate::element::{Element, Node};
use crate::resolve::{resolve_color_pair, PresetProp};

/// Fully resolved card parameters; every field is valid by construction.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedCard {
    pub color_start: String,
    pub color_end: String,
    pub corner: Corner,
    pub size: GlowSize,
}

#[derive(Clone, Debug)]
struct CardConfig {
    corner: Prop<Corner>,
    color_start: Option<String>,
    color_end: Option<String>,
    size: Prop<GlowSize>,
    preset: Option<PresetProp>,
    class: Option<String>,
    style: Option<String>,
    diagnostics: DiagnosticsMode,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            corner: Prop::Typed(Corner::default()),
            color_start: None,
            color_end: None,
            size: Prop::Typed(GlowSize::default()),
            preset: None,
            class: None,
            style: None,
            diagnostics: DiagnosticsMode::default(),
        }
    }
}

/// Builder for the corner-accent card.
pub struct CardWithCornerAccent {
    config: CardConfig,
    children: Vec<Node>,
}

/// Create a corner-accent card builder.
pub fn card_with_corner_accent() -> CardWithCornerAccent {
    CardWithCornerAccent {
        config: CardConfig::default(),
        children: Vec::new(),
    }
}

impl CardWithCornerAccent {
    /// Corner the glow is anchored to; accepts [`Corner`] or an untyped
    /// token (`tl`, `tr`, `bl`, `br`).
    pub fn corner(mut self, corner: impl Into<Prop<Corner>>) -> Self {
        self.config.corner = corner.into();
        self
    }

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

    /// Glow size; accepts [`GlowSize`] or an untyped token.
    pub fn size(mut self, size: impl Into<Prop<GlowSize>>) -> Self {
        self.config.size = size.into();
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

    /// Append card content.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Resolve every prop to a definite, valid value.
    pub fn resolve(&self) -> ResolvedCard {
        let config = &self.config;
        let mode = config.diagnostics;

        let pair = resolve_color_pair(
            config.color_start.as_deref(),
            config.color_end.as_deref(),
            config.preset.as_ref(),
            mode,
        );

        ResolvedCard {
            color_start: pair.start,
            color_end: pair.end,
            corner: config.corner.resolve(Corner::default(), mode),
            size: config.size.resolve(GlowSize::default(), mode),
        }
    }

    /// Resolve props and build the layered card element.
    pub fn build(self) -> Element {
        let resolved = self.resolve();

        let vars = StyleVars::new()
            .with(StyleVar::GradientStart, resolved.color_start.clone())
            .with(StyleVar::GradientEnd, resolved.color_end.clone());

        let accent = Element::div()
            .class("gradient-corner-bg")
            .class(format!("gradient-corner-bg-{}", resolved.corner.as_str()));

        let mut content = Element::div().class("card-content");
        for child in self.children {
            content = content.child(child);
        }
        let card = Element::div().class("card-with-accent").child(content);

        let mut wrapper = Element::div()
            .class("card-corner-wrapper")
            .class(format!("corner-{}", resolved.size.as_str()));
        if let Some(class) = self.config.class {
            wrapper = wrapper.class(class);
        }
        wrapper = wrapper.with_vars(vars);
        if let Some(style) = self.config.style {
            wrapper = wrapper.inline_style(style);
        }
        wrapper.child(accent).child(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_theme::GradientPreset;

    fn quiet() -> CardWithCornerAccent {
        card_with_corner_accent().diagnostics(DiagnosticsMode::Production)
    }

    #[test]
    fn test_default_resolution() {
        let resolved = quiet().resolve();
        assert_eq!(resolved.color_start, "#3b82f6");
        assert_eq!(resolved.color_end, "#ec4899");
        assert_eq!(resolved.corner, Corner::TopLeft);
        assert_eq!(resolved.size, GlowSize::Md);
    }

    #[test]
    fn test_layered_structure() {
        let element = quiet().child("body").build();
        assert!(element.has_class("card-corner-wrapper"));
        assert!(element.has_class("corner-md"));
        assert_eq!(element.children().len(), 2);

        let Node::Element(accent) = &element.children()[0] else {
            panic!("expected accent layer");
        };
        assert!(accent.has_class("gradient-corner-bg"));
        assert!(accent.has_class("gradient-corner-bg-tl"));

        let Node::Element(card) = &element.children()[1] else {
            panic!("expected card layer");
        };
        assert!(card.has_class("card-with-accent"));
        let Node::Element(content) = &card.children()[0] else {
            panic!("expected content layer");
        };
        assert!(content.has_class("card-content"));
        assert_eq!(content.children()[0], Node::Text("body".to_string()));
    }

    #[test]
    fn test_corner_token_in_accent_class() {
        let element = quiet().corner(Corner::BottomRight).build();
        let Node::Element(accent) = &element.children()[0] else {
            panic!("expected accent layer");
        };
        assert!(accent.has_class("gradient-corner-bg-br"));
    }

    #[test]
    fn test_invalid_corner_and_size_fall_back() {
        let resolved = quiet().corner("middle").size("xxl").resolve();
        assert_eq!(resolved.corner, Corner::TopLeft);
        assert_eq!(resolved.size, GlowSize::Md);
    }

    #[test]
    fn test_untyped_tokens_resolve() {
        let resolved = quiet().corner("bl").size("sm").resolve();
        assert_eq!(resolved.corner, Corner::BottomLeft);
        assert_eq!(resolved.size, GlowSize::Sm);
    }

    #[test]
    fn test_preset_with_override() {
        let resolved = quiet()
            .preset(GradientPreset::WarmSunset)
            .color_start("#000000")
            .resolve();
        assert_eq!(resolved.color_start, "#000000");
        assert_eq!(resolved.color_end, "#ef4444");
    }

    #[test]
    fn test_wrapper_carries_color_vars() {
        let element = quiet().preset("coolTeal").build();
        assert_eq!(
            element.style_vars().get(StyleVar::GradientStart),
            Some("#10b981")
        );
        assert_eq!(
            element.style_vars().get(StyleVar::GradientEnd),
            Some("#06b6d4")
        );
    }

    #[test]
    fn test_caller_class_appends_after_size_token() {
        let element = quiet().size(GlowSize::Lg).class("pricing-card").build();
        let classes: Vec<&str> = element.classes().collect();
        assert_eq!(classes, vec!["card-corner-wrapper", "corner-lg", "pricing-card"]);
    }
}
