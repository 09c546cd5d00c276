//! Coursedesk CLI
//!
//! Renders dashboard page models to HTML for previewing themes.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use coursedesk_kernel::menu::AllowAll;
use coursedesk_kernel::{Config, PageShell, ShellSettings, ThemeEngine};
use coursedesk_sdk::page::PageModel;

#[derive(Parser, Debug)]
#[command(name = "coursedesk", about = "Render course dashboard pages")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a page model (YAML or JSON) to HTML.
    Render {
        /// Page model file; `.yaml`/`.yml` are read as YAML, anything else as JSON.
        input: PathBuf,

        /// Output file (default: stdout).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the templates the theme engine resolves.
    Templates,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();
    let config = Config::from_env().context("failed to load configuration")?;
    let theme = ThemeEngine::from_config(&config).context("failed to load templates")?;

    match args.command {
        Command::Render { input, output } => {
            let page = load_page(&input)?;
            let shell = PageShell::new(&theme, ShellSettings::from(&config));
            let html = shell
                .render(&page, &AllowAll)
                .with_context(|| format!("failed to render {}", input.display()))?;

            match output {
                Some(path) => {
                    fs::write(&path, html.as_str())
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    info!(output = %path.display(), bytes = html.as_str().len(), "page rendered");
                }
                None => io::stdout()
                    .write_all(html.as_str().as_bytes())
                    .context("failed to write to stdout")?,
            }
        }
        Command::Templates => {
            let mut stdout = io::stdout().lock();
            for name in theme.template_names() {
                writeln!(stdout, "{name}")?;
            }
        }
    }

    Ok(())
}

fn load_page(path: &Path) -> Result<PageModel> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    );
    let page = if is_yaml {
        serde_yml::from_str(&raw).with_context(|| format!("invalid YAML in {}", path.display()))?
    } else {
        serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", path.display()))?
    };

    info!(input = %path.display(), "page model loaded");
    Ok(page)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr so rendered HTML on stdout stays clean
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
