//! CLI entry point for dev-insights

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dev_insights::commands::show::OutputFormat;

#[derive(Parser)]
#[command(name = "dev-insights")]
#[command(version)]
#[command(about = "Read the Dev Insights articles in your terminal", long_about = None)]
struct Cli {
    /// Directory holding _config.yml (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Disable colors and terminal control sequences
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all articles
    #[command(alias = "ls")]
    List,

    /// List tags and how many articles use them
    Tags,

    /// Show one article
    Show {
        /// Post number or slug
        key: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
        format: OutputFormat,
    },

    /// Browse the articles interactively
    #[command(alias = "b")]
    Browse,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "dev_insights=debug,info"
    } else {
        "dev_insights=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let blog = dev_insights::Blog::new(&base_dir)?;
    let color = blog.config.color && !cli.no_color && std::io::stdout().is_terminal();

    match cli.command {
        Commands::List => dev_insights::commands::list::run(&blog, &mut std::io::stdout())?,

        Commands::Tags => dev_insights::commands::tags::run(&blog, &mut std::io::stdout())?,

        Commands::Show { key, format } => {
            tracing::debug!("Showing {:?} as {:?}", key, format);
            let mut stdout = std::io::stdout();
            dev_insights::commands::show::run(&blog, &key, format, color, &mut stdout).await?;
        }

        Commands::Browse => dev_insights::commands::browse::run(&blog, color).await?,

        Commands::Version => {
            println!("dev-insights version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
