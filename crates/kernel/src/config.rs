//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, bail};

/// Renderer configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory of `*.html` templates layered over the built-in ones.
    pub template_dir: Option<PathBuf>,

    /// Product version shown in the footer when the page supplies none.
    pub product_version: String,

    /// Course-relative path the course switcher links to (default: /dashboard).
    pub switcher_path: String,

    /// Site administration link shown to global admins (default: /admin/global).
    pub site_admin_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_dir: None,
            product_version: env!("CARGO_PKG_VERSION").to_string(),
            switcher_path: "/dashboard".to_string(),
            site_admin_url: "/admin/global".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from `lookup`, which maps a variable name to its
    /// value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let template_dir = match lookup("COURSEDESK_TEMPLATE_DIR") {
            Some(dir) if !dir.trim().is_empty() => {
                let dir = PathBuf::from(dir.trim());
                if !dir.is_dir() {
                    bail!(
                        "COURSEDESK_TEMPLATE_DIR {} is not a directory",
                        dir.display()
                    );
                }
                Some(dir)
            }
            _ => None,
        };

        let product_version =
            lookup("COURSEDESK_PRODUCT_VERSION").unwrap_or(defaults.product_version);

        let switcher_path = lookup("COURSEDESK_SWITCHER_PATH").unwrap_or(defaults.switcher_path);

        let site_admin_url =
            lookup("COURSEDESK_SITE_ADMIN_URL").unwrap_or(defaults.site_admin_url);

        Ok(Self {
            template_dir,
            product_version,
            switcher_path,
            site_admin_url,
        })
    }
}
