//! Glint Theme
//!
//! Built-in gradient color presets. A preset binds a stable name to a
//! start/end color pair; components use presets to fill color slots the
//! caller left unset, and explicit colors always win over the preset's
//! corresponding slot.
//!
//! The catalog is static data: lookups are read-only, never allocate
//! registry state, and never panic.

pub mod presets;

pub use presets::{get_preset, GradientPreset};
