use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use freshcli::{cli, config, error, types::SortMode, types::MAX_BATCH_SIZE};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Scan the subreddit and sync resolved tracks into the target playlists
    Sync(SyncOptions),

    /// List or edit the target playlists
    Playlists(PlaylistsOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SyncOptions {
    /// Listing order of the subreddit
    #[clap(short, long, value_enum, default_value_t = SortMode::Top)]
    pub sort: SortMode,

    /// How many posts to grab
    #[clap(short, long, default_value_t = 25)]
    pub limit: u32,

    /// Only posts with a score of at least this value
    #[clap(short, long)]
    pub threshold: Option<i64>,

    /// Include every track of posted albums
    #[clap(long = "include-albums", visible_alias = "ia")]
    pub include_albums: bool,

    /// Only add tracks tagged [FRESH]
    #[clap(short, long)]
    pub fresh: bool,

    /// Output songs being added and other info
    #[clap(short, long)]
    pub verbose: bool,

    /// Subreddit to scan
    #[clap(long, default_value = config::DEFAULT_SUBREDDIT)]
    pub subreddit: String,

    /// Tracks per playlist request (at most 90)
    #[clap(long, default_value_t = MAX_BATCH_SIZE)]
    pub batch_size: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistsOptions {
    #[command(subcommand)]
    pub command: Option<PlaylistsSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum PlaylistsSubcommand {
    /// Add target playlists (ids or links)
    Add {
        #[clap(required = true)]
        ids: Vec<String>,
    },

    /// Remove target playlists (ids or links)
    Remove {
        #[clap(required = true)]
        ids: Vec<String>,
    },
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => cli::auth().await,
        Command::Sync(opt) => {
            cli::sync(cli::SyncArgs {
                sort: opt.sort,
                limit: opt.limit,
                threshold: opt.threshold,
                include_albums: opt.include_albums,
                fresh: opt.fresh,
                verbose: opt.verbose,
                subreddit: opt.subreddit,
                batch_size: opt.batch_size,
            })
            .await
        }
        Command::Playlists(opt) => match opt.command {
            Some(PlaylistsSubcommand::Add { ids }) => cli::add_playlists(ids).await,
            Some(PlaylistsSubcommand::Remove { ids }) => cli::remove_playlists(ids).await,
            None => cli::list_playlists().await,
        },
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
