//! Prop diagnostics
//!
//! Invalid props never fail a render; they fall back to documented defaults
//! and report what happened through `tracing`. Emission is gated by an
//! explicit [`DiagnosticsMode`] passed through the validation layer, so
//! production builds stay silent and tests can exercise both modes
//! deterministically.

/// Controls whether prop diagnostics are emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticsMode {
    /// Emit advisory warnings for invalid props.
    Development,
    /// Suppress all diagnostics. Fallback values are still applied.
    Production,
}

impl Default for DiagnosticsMode {
    fn default() -> Self {
        Self::from_build()
    }
}

impl DiagnosticsMode {
    /// Mode matching the current build profile.
    pub fn from_build() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }

    /// Whether diagnostics are emitted in this mode.
    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Emit a prop diagnostic with a follow-up suggestion.
///
/// Advisory only: callers apply their documented fallback regardless of
/// whether the message is emitted.
pub fn warn(mode: DiagnosticsMode, message: &str, suggestion: &str) {
    if mode.is_enabled() {
        tracing::warn!(target: "glint", suggestion, "{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_mode_is_enabled() {
        assert!(DiagnosticsMode::Development.is_enabled());
        assert!(!DiagnosticsMode::Production.is_enabled());
    }

    #[test]
    fn default_mode_follows_build_profile() {
        assert_eq!(DiagnosticsMode::default(), DiagnosticsMode::from_build());
    }
}
