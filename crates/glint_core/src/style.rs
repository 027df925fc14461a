//! Style variable model
//!
//! Components hand their resolved parameters to the stylesheet through a
//! closed set of CSS custom properties. Modeling the set as an enum-keyed
//! mapping (rather than an open dictionary) keeps the styling contract
//! explicit: a consumer can enumerate exactly which variables may appear.

use std::fmt::Write;

/// CSS custom properties a component can expose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleVar {
    /// `--gradient-start`: resolved start color.
    GradientStart,
    /// `--gradient-end`: resolved end color.
    GradientEnd,
    /// `--gradient-bg`: full multi-color gradient override.
    GradientBg,
    /// `--gradient-angle`: non-default angle override, e.g. `90deg`.
    GradientAngle,
}

impl StyleVar {
    pub const ALL: [StyleVar; 4] = [
        StyleVar::GradientStart,
        StyleVar::GradientEnd,
        StyleVar::GradientBg,
        StyleVar::GradientAngle,
    ];

    /// The custom-property name as it appears in a `style` attribute.
    pub fn css_name(self) -> &'static str {
        match self {
            Self::GradientStart => "--gradient-start",
            Self::GradientEnd => "--gradient-end",
            Self::GradientBg => "--gradient-bg",
            Self::GradientAngle => "--gradient-angle",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::GradientStart => 0,
            Self::GradientEnd => 1,
            Self::GradientBg => 2,
            Self::GradientAngle => 3,
        }
    }
}

/// Values for the closed [`StyleVar`] set.
///
/// Emission order is fixed to the declaration order of [`StyleVar`]
/// regardless of insertion order, so serialized output is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleVars {
    values: [Option<String>; 4],
}

impl StyleVars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, var: StyleVar, value: impl Into<String>) {
        self.values[var.index()] = Some(value.into());
    }

    pub fn with(mut self, var: StyleVar, value: impl Into<String>) -> Self {
        self.set(var, value);
        self
    }

    pub fn get(&self, var: StyleVar) -> Option<&str> {
        self.values[var.index()].as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Set variables in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleVar, &str)> + '_ {
        StyleVar::ALL
            .iter()
            .zip(&self.values)
            .filter_map(|(var, value)| value.as_deref().map(|v| (*var, v)))
    }

    /// Render as inline `style` declarations.
    pub fn to_inline_css(&self) -> String {
        let mut out = String::new();
        for (var, value) in self.iter() {
            if !out.is_empty() {
                out.push_str("; ");
            }
            let _ = write!(out, "{}: {}", var.css_name(), value);
        }
        out
    }
}
