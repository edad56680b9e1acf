use clap::{Parser, Subcommand};
use gallery_discovery::config::{self, SiteConfig};
use gallery_discovery::discovery::{self, Discovery, DiscoveryOptions};
use gallery_discovery::site::{FsSite, HttpSite, SiteBackend};
use gallery_discovery::{gallery, output, patterns, render, update};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gallery-discovery")]
#[command(about = "Find the gallery images a static site can actually serve")]
#[command(long_about = "\
Find the gallery images a static site can actually serve

Images live in three directories under the images root:

  images/
  ├── images.json        # Manifest written by 'update-images' (optional)
  ├── experts/           # Team portraits
  ├── projects/          # Project photos
  └── clients/           # Client logos

Discovery reads images.json first and loads every listed file. Without a
usable manifest it probes common names instead (1.jpg … 20.HEIC,
proyecto-1.jpg, cliente-2.png, ...). Only files that decode as images are kept.

Run 'gallery-discovery gen-config' to generate a documented gallery.toml.")]
#[command(version)]
struct Cli {
    /// Site root directory (also where gallery.toml is read from)
    #[arg(long, default_value = ".", global = true)]
    site: PathBuf,

    /// Probe a deployed site over HTTP instead of the local directory
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve gallery images (manifest first, common names as fallback)
    Discover {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Skip the manifest and probe common names only
        #[arg(long)]
        brute_force: bool,
    },
    /// Rewrite images/images.json from the category directories
    UpdateImages,
    /// List the filenames probed for projects and clients
    Patterns,
    /// Render the projects grid and clients carousel as HTML
    Render {
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a stock gallery.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Discover { json, brute_force } => {
            let site_config = config::load_config(&cli.site)?;
            let found = run_discovery(&cli, &site_config, brute_force)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&found)?);
            } else {
                output::print_discovery_output(&found, &site_config.images.manifest);
            }
        }
        Command::UpdateImages => {
            if cli.base_url.is_some() {
                return Err("update-images works on a local site directory; drop --base-url".into());
            }
            let site_config = config::load_config(&cli.site)?;
            let report = update::update_images(&cli.site, &site_config.images)?;
            output::print_update_output(&report);
        }
        Command::Patterns => {
            output::print_patterns(&patterns::generate_patterns());
        }
        Command::Render { ref out } => {
            let site_config = config::load_config(&cli.site)?;
            let found = run_discovery(&cli, &site_config, false)?;
            let images_dir = &site_config.images.dir;
            let html = render::render_gallery(
                &gallery::project_cards(&found.result, images_dir),
                &gallery::client_logos(&found.result, images_dir),
            )
            .into_string();
            match out {
                Some(path) => std::fs::write(path, html)?,
                None => println!("{}", html),
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Run discovery against the local site, or the HTTP origin when `--base-url` is set.
fn run_discovery(
    cli: &Cli,
    site_config: &SiteConfig,
    brute_force: bool,
) -> Result<Discovery, Box<dyn std::error::Error>> {
    let options = DiscoveryOptions::from_site_config(site_config);
    let found = match &cli.base_url {
        Some(url) => {
            let site = HttpSite::new(url, site_config.http.timeout())?;
            discover_with(&site, &options, brute_force)
        }
        None => discover_with(&FsSite::new(&cli.site), &options, brute_force),
    };
    Ok(found)
}

fn discover_with<S: SiteBackend>(
    site: &S,
    options: &DiscoveryOptions,
    brute_force: bool,
) -> Discovery {
    if brute_force {
        discovery::load_dynamically(site, options)
    } else {
        discovery::load_images_with_fallback(site, options)
    }
}
