//! Theme engine and template rendering.
//!
//! Provides Tera-based template rendering with built-in dashboard templates,
//! directory overrides, and page template suggestion resolution.

mod engine;

pub use engine::ThemeEngine;
