mod books;
mod export;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Export translation files for a book, or for a single sheet of it.
    Export {
        /// Path to the book configuration file
        #[arg(short, long)]
        config: PathBuf,

        /// Book to process; the first configured book when omitted
        #[arg(short, long, default_value = "")]
        book: String,

        /// Single sheet to process; all sheets of the book when omitted
        #[arg(short, long, value_parser = clap::builder::NonEmptyStringValueParser::new())]
        sheet: Option<String>,

        /// Directory substituted for %project_dir% in destination folders;
        /// the current directory when omitted
        #[arg(long)]
        project_dir: Option<PathBuf>,
    },

    /// List the configured books.
    Books {
        /// Path to the book configuration file
        #[arg(short, long)]
        config: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sheetloc=warn")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    match args.command {
        Commands::Export {
            config,
            book,
            sheet,
            project_dir,
        } => export::run(&config, &book, sheet.as_deref(), project_dir.as_deref()),
        Commands::Books { config } => books::run(&config),
    }
}
