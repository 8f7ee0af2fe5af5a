//! CLI entry point for folio

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Content pipeline for a personal blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every post of the collection
    Check,

    /// List posts, newest first
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Slug to use instead of one derived from the title
        #[arg(short, long)]
        slug: Option<String>,

        /// Description for the front-matter (defaults to the title)
        #[arg(long)]
        description: Option<String>,
    },

    /// Write the RSS feed to the public directory
    Feed {
        /// Site URL to use instead of the configured one
        #[arg(long)]
        site: Option<String>,
    },

    /// Start a local server exposing the feed
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4321")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Remove the public folder
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Check => {
            let blog = folio::Blog::new(&base_dir)?;
            let count = folio::commands::check::run(&blog)?;
            println!("{} posts OK", count);
        }

        Commands::List { json } => {
            let blog = folio::Blog::new(&base_dir)?;
            folio::commands::list::run(&blog, json)?;
        }

        Commands::New {
            title,
            slug,
            description,
        } => {
            let blog = folio::Blog::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            let path = folio::commands::new::create_post(
                &blog,
                &title,
                slug.as_deref(),
                description.as_deref(),
            )?;
            println!("Created: {:?}", path);
        }

        Commands::Feed { site } => {
            let blog = folio::Blog::new(&base_dir)?;
            tracing::info!("Generating feed...");
            let path = folio::commands::feed::run(&blog, site.as_deref())?;
            println!("Generated {:?}", path);
        }

        Commands::Serve { port, ip } => {
            let blog = folio::Blog::new(&base_dir)?;

            // Validate before serving so broken content fails fast
            folio::commands::check::run(&blog)?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            folio::server::start(&blog, &ip, port).await?;
        }

        Commands::Clean => {
            let blog = folio::Blog::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            folio::commands::clean::run(&blog)?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("folio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
