//! Theme engine with Tera templates and suggestion resolution.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use dashmap::DashMap;
use serde::Serialize;
use tera::Tera;
use tracing::debug;

use crate::config::Config;
use crate::error::{RenderError, RenderResult};
use crate::markup::{Markup, js_string};

/// Templates compiled into the binary. Deployments may override any of
/// them from a template directory.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("page.html", include_str!("../../templates/page.html")),
    ("sections.html", include_str!("../../templates/sections.html")),
    ("progress.html", include_str!("../../templates/progress.html")),
];

/// Theme engine for rendering templates.
pub struct ThemeEngine {
    /// Tera template engine instance.
    tera: Tera,
    /// Cache mapping suggestion lists to resolved template names.
    suggestion_cache: DashMap<String, String>,
}

impl ThemeEngine {
    /// Create a theme engine with only the built-in templates.
    pub fn builtin() -> Result<Self> {
        let tera = Self::builtin_tera()?;
        debug!(count = BUILTIN_TEMPLATES.len(), "loaded built-in templates");
        Ok(Self::with_tera(tera))
    }

    /// Create a theme engine loading templates from the given directory.
    ///
    /// Templates in the directory take precedence over built-in templates of
    /// the same name, and may extend any built-in template.
    pub fn new(template_dir: &Path) -> Result<Self> {
        let pattern = template_dir.join("**/*.html");
        let pattern_str = pattern
            .to_str()
            .context("invalid template directory path")?;

        // Parsed without inheritance chains; parents may be built-ins
        let mut tera = Tera::parse(pattern_str).context("failed to parse template overrides")?;
        let overrides = tera.get_template_names().count();

        // extend() keeps templates already present, so overrides win
        let builtin = Self::builtin_tera()?;
        tera.extend(&builtin)
            .context("failed to merge built-in templates")?;
        tera.build_inheritance_chains()
            .context("failed to resolve template inheritance")?;
        Self::register_filters(&mut tera);

        debug!(
            overrides,
            dir = %template_dir.display(),
            "loaded templates"
        );

        Ok(Self::with_tera(tera))
    }

    /// Create the engine described by `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        match &config.template_dir {
            Some(dir) => Self::new(dir),
            None => Self::builtin(),
        }
    }

    /// Create a theme engine with no templates (for testing).
    pub fn empty() -> Self {
        let mut tera = Tera::default();
        Self::register_filters(&mut tera);
        Self::with_tera(tera)
    }

    fn with_tera(tera: Tera) -> Self {
        Self {
            tera,
            suggestion_cache: DashMap::new(),
        }
    }

    fn builtin_tera() -> Result<Tera> {
        let mut tera = Tera::default();
        tera.add_raw_templates(BUILTIN_TEMPLATES.iter().copied())
            .context("failed to compile built-in templates")?;
        Self::register_filters(&mut tera);
        Ok(tera)
    }

    /// Register custom Tera filters.
    fn register_filters(tera: &mut Tera) {
        // Filter for embedding a value in a script as a string literal.
        // Use with `| safe` inside <script>, without it inside attributes.
        tera.register_filter(
            "js_string",
            |value: &tera::Value, _args: &HashMap<String, tera::Value>| {
                let text = tera::try_get_value!("js_string", "value", String, value);
                Ok(tera::Value::String(js_string(&text)))
            },
        );
    }

    /// Get a mutable reference to Tera (for adding templates at runtime).
    pub fn tera_mut(&mut self) -> &mut Tera {
        &mut self.tera
    }

    /// Names of all loaded templates, sorted.
    pub fn template_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .tera
            .get_template_names()
            .map(str::to_string)
            .collect();
        names.sort();
        names
    }

    /// Resolve the best template from a list of suggestions.
    ///
    /// Templates are tried in order; the first one that exists is returned.
    /// Results are cached for performance.
    ///
    /// Example suggestions: `["page--i18n_dashboard", "page"]`
    pub fn resolve_template(&self, suggestions: &[&str]) -> Option<String> {
        if suggestions.is_empty() {
            return None;
        }

        let cache_key = suggestions.join("|");

        if let Some(cached) = self.suggestion_cache.get(&cache_key) {
            return Some(cached.clone());
        }

        for suggestion in suggestions {
            let template_name = format!("{suggestion}.html");
            if self.tera.get_template(&template_name).is_ok() {
                debug!(template = %template_name, "resolved template suggestion");
                self.suggestion_cache
                    .insert(cache_key, template_name.clone());
                return Some(template_name);
            }

            // Also try without .html extension (in case suggestion already has it)
            if self.tera.get_template(suggestion).is_ok() {
                let name = (*suggestion).to_string();
                self.suggestion_cache.insert(cache_key, name.clone());
                return Some(name);
            }
        }

        // Don't cache negative results to allow runtime template additions
        None
    }

    /// Get page template suggestions for a dashboard action.
    ///
    /// `i18n_dashboard` -> `["page--i18n_dashboard", "page"]`
    pub fn page_suggestions(action: Option<&str>) -> Vec<String> {
        let mut suggestions = Vec::new();

        if let Some(action) = action.map(str::trim).filter(|a| !a.is_empty()) {
            suggestions.push(format!("page--{action}"));
        }

        suggestions.push("page".to_string());

        suggestions
    }

    /// Render a named template with a serializable context.
    pub fn render<T: Serialize>(&self, template: &str, values: &T) -> RenderResult<Markup> {
        let context = tera::Context::from_serialize(values)?;
        self.render_context(template, &context)
    }

    /// Render a named template with a prepared Tera context.
    pub fn render_context(&self, template: &str, context: &tera::Context) -> RenderResult<Markup> {
        Ok(Markup::new(self.tera.render(template, context)?))
    }

    /// Render the first existing template among `suggestions`.
    pub fn render_suggested<T: Serialize>(
        &self,
        suggestions: &[String],
        values: &T,
    ) -> RenderResult<Markup> {
        let refs: Vec<&str> = suggestions.iter().map(String::as_str).collect();
        let template = self
            .resolve_template(&refs)
            .ok_or_else(|| RenderError::TemplateNotFound(suggestions.join(", ")))?;
        self.render(&template, values)
    }
}

impl std::fmt::Debug for ThemeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeEngine")
            .field("template_count", &self.tera.get_template_names().count())
            .field("cache_size", &self.suggestion_cache.len())
            .finish()
    }
}
