use clap::{Parser, Subcommand};
use folio::{config, content, generate, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Static site generator for a personal portfolio page")]
#[command(long_about = "\
Static site generator for a personal portfolio page

The portfolio content is compiled in. The site source directory only holds
optional configuration and the static assets the page references.

Source structure:

  site/
  ├── config.toml                  # Site config (optional)
  └── assets/                      # Copied to the output root
      ├── images/
      │   ├── favicon.ico
      │   ├── portrait.jpg
      │   └── gallery/
      └── documents/
          ├── recommendation-letter.pdf
          └── placement-report.pdf

Output:

  dist/
  ├── index.html                   # The portfolio page
  ├── view-<document>.html         # The page with a document open
  └── images/, documents/          # Copied assets

Run 'folio gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Site source directory (config.toml and assets)
    #[arg(long, default_value = "site", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the site into the output directory
    Build,
    /// Validate content and config without building
    Check,
    /// Print the compiled-in portfolio content as JSON
    Content,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let site_config = config::load_config(&cli.source)?;
            let portfolio = content::stock();

            println!("==> Generating HTML \u{2192} {}", cli.output.display());
            let report = generate::generate(&portfolio, &site_config, &cli.source, &cli.output)?;
            output::print_generate_output(&report);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            let portfolio = content::stock();
            portfolio.validate()?;

            let assets_dir = cli.source.join(&site_config.assets_dir);
            let missing = generate::missing_assets(&portfolio, &site_config.site, &assets_dir);
            output::print_check_output(
                &portfolio,
                cli.source.join("config.toml").exists(),
                assets_dir
                    .is_dir()
                    .then_some(site_config.assets_dir.as_str()),
                &missing,
            );
            println!("==> Content is valid");
        }
        Command::Content => {
            let json = serde_json::to_string_pretty(&content::stock())?;
            println!("{}", json);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
