use chrono::Utc;
use clap::{Parser, Subcommand};
use docsmith::{config, generate, output};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "docsmith")]
#[command(about = "Generate llms.txt and sitemap.xml from a documentation tree")]
#[command(long_about = "\
Generate llms.txt and sitemap.xml from a documentation tree

Every directory of the content tree lists its entries, in order, in a
_meta.json manifest. Both generators follow that order.

Content structure:

  pages/
  ├── _meta.json              # {\"index\": \"Introduction\", \"guide\": \"User Guide\", ...}
  ├── index.mdx               # → /            (priority 1.0)
  ├── guide/
  │   ├── _meta.json          # {\"index\": \"Overview\", \"setup\": \"Setup\"}
  │   ├── index.mdx           # → /guide       (priority 0.9)
  │   └── setup.mdx           # → /guide/setup (priority 0.8)
  └── drafts/                 # No _meta.json = not published

Manifest values:
  \"Title\"                                 page or directory
  {\"title\": \"T\"}                          page or directory
  {\"title\": \"T\", \"href\": \"https://...\"}   link, never expanded
  {\"type\": \"separator\"} or key \"---\"      separator, ignored

Run 'docsmith gen-config' to generate a documented docsmith.toml.")]
#[command(version)]
struct Cli {
    /// Project root; content and output paths are resolved against it
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Config file (default: <root>/docsmith.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the consolidated llms.txt document
    Llms,
    /// Generate sitemap.xml
    Sitemap,
    /// Generate both artifacts
    Build,
    /// Validate manifests and content without writing anything
    Check,
    /// Print a stock docsmith.toml with all options documented
    GenConfig,
}

/// Initialize tracing on stderr so stdout stays the run summary.
///
/// `RUST_LOG` wins when set; otherwise warnings only, or debug with `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "docsmith=debug" } else { "docsmith=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load `docsmith.toml` from `--config`, or from the project root.
fn load_site_config(cli: &Cli) -> Result<config::SiteConfig, config::ConfigError> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| cli.root.join(config::CONFIG_FILE));
    config::load_config(&config_path)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Llms => {
            let site_config = load_site_config(&cli)?;
            println!("==> Generating {}", site_config.llms_file);
            let report = generate::generate_llms(&cli.root, &site_config, Utc::now())?;
            output::print_llms_output(&report);
        }
        Command::Sitemap => {
            let site_config = load_site_config(&cli)?;
            println!("==> Generating {}", site_config.sitemap_file);
            let report = generate::generate_sitemap(&cli.root, &site_config)?;
            output::print_sitemap_output(&report, site_config.site.change_freq);
        }
        Command::Build => {
            let site_config = load_site_config(&cli)?;
            println!("==> Stage 1: {}", site_config.llms_file);
            let llms = generate::generate_llms(&cli.root, &site_config, Utc::now())?;
            output::print_llms_output(&llms);

            println!("==> Stage 2: {}", site_config.sitemap_file);
            let sitemap = generate::generate_sitemap(&cli.root, &site_config)?;
            output::print_sitemap_output(&sitemap, site_config.site.change_freq);

            println!("==> Build complete");
        }
        Command::Check => {
            let site_config = load_site_config(&cli)?;
            let report = generate::check(&cli.root, &site_config)?;
            output::print_check_output(&report);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
