//! Coursedesk Kernel Library
//!
//! Server-side renderers for the course administration dashboard: the
//! navigation drawer, content sections, the translation progress table,
//! and the page shell that composes them.
//! The `coursedesk` binary renders page models from files for previewing.

pub mod config;
pub mod error;
pub mod markup;
pub mod menu;
pub mod progress;
pub mod section;
pub mod shell;
pub mod theme;

pub use config::Config;
pub use error::{RenderError, RenderResult};
pub use markup::Markup;
pub use shell::{PageShell, ShellSettings};
pub use theme::ThemeEngine;
