//! CLI entry point for pit-blog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pit-blog")]
#[command(version)]
#[command(about = "Blog index and static blog pages for the PiT-Inference site", long_about = None)]
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
    /// List posts, the featured post, or categories
    List {
        /// Type of content to list (post, featured, category)
        #[arg(default_value = "post")]
        r#type: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show a single post by slug
    Show {
        slug: String,
    },

    /// Generate static files
    #[command(alias = "g")]
    Generate,

    /// Generate, then start a local server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,
    },

    /// Clean the public folder
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "pit_blog=debug,info"
    } else {
        "pit_blog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List { r#type, json } => {
            let blog = pit_blog::Blog::new(&base_dir)?;
            pit_blog::commands::list::run(&blog, &r#type, json)?;
        }

        Commands::Show { slug } => {
            let blog = pit_blog::Blog::new(&base_dir)?;
            pit_blog::commands::show::run(&blog, &slug)?;
        }

        Commands::Generate => {
            let blog = pit_blog::Blog::new(&base_dir)?;
            tracing::info!("Generating static files...");
            blog.generate()?;
            println!("Generated successfully!");
        }

        Commands::Server { port, ip, open } => {
            let blog = pit_blog::Blog::new(&base_dir)?;

            tracing::info!("Generating static files...");
            blog.generate()?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            pit_blog::server::start(&blog, &ip, port, open).await?;
        }

        Commands::Clean => {
            let blog = pit_blog::Blog::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            blog.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("pit-blog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
