use clap::{Parser, Subcommand};
use roster_cli::commands;
use roster_core::CharacterId;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

const DEFAULT_API_URL: &str = "https://rickandmortyapi.com/api/";

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Base URL of the character API
    #[arg(long, global = true, default_value = DEFAULT_API_URL)]
    api: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch pages from the cursor onward and print the catalog
    List {
        #[arg(short, long, default_value_t = 1)]
        pages: u32,
    },
    /// Fetch pages, toggle the given ids and print the favorites
    Favorites {
        #[arg(short, long, default_value_t = 1)]
        pages: u32,
        #[arg(short, long, value_delimiter = ',', required = true)]
        mark: Vec<CharacterId>,
        #[arg(short, long, value_delimiter = ',')]
        unmark: Vec<CharacterId>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).expect("default subscriber");

    match cli.command {
        Commands::List { pages } => commands::cmd_list(&cli.api, pages)?,
        Commands::Favorites {
            pages,
            mark,
            unmark,
        } => commands::cmd_favorites(&cli.api, pages, mark, unmark)?,
    }

    Ok(())
}
