use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotime::{
    cli,
    config::{self, Config},
    detect::LinguaDetector,
    error,
    server::AppState,
    spotify::CachedTokenProvider,
    types::{PeriodQuery, PeriodType, SortOrder, default_min_songs},
};

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

    /// Run the HTTP server
    Serve,

    /// Group liked songs by the period they were added in
    Groups(GroupsOptions),

    /// Group liked songs by detected language
    Languages,

    #[clap(about = "Create playlist for one period group")]
    Playlist(PlaylistOptions),

    #[clap(about = "Create playlist for one language group")]
    LanguagePlaylist(LanguagePlaylistOptions),

    /// Search artists by name
    Artists(ArtistsOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct PeriodOptions {
    /// Grouping granularity
    #[clap(long, value_enum, default_value_t = PeriodType::Monthly)]
    period: PeriodType,

    /// Drop songs added before this year
    #[clap(long)]
    start_year: Option<i32>,

    /// Drop songs added after this year
    #[clap(long)]
    end_year: Option<i32>,

    /// Order of tracks within a group
    #[clap(long, value_enum, default_value_t = SortOrder::Asc)]
    order: SortOrder,
}

impl From<PeriodOptions> for PeriodQuery {
    fn from(opt: PeriodOptions) -> Self {
        PeriodQuery {
            period: opt.period,
            start_year: opt.start_year,
            end_year: opt.end_year,
            order: opt.order,
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct GroupsOptions {
    #[clap(flatten)]
    period: PeriodOptions,

    /// Print the track ids of every group
    #[clap(long)]
    tracks: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistOptions {
    /// Group key as listed by `groups`, e.g. 2024(1-3)
    group_key: String,

    #[clap(flatten)]
    period: PeriodOptions,

    #[clap(long)]
    name: Option<String>,

    #[clap(long)]
    description: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct LanguagePlaylistOptions {
    /// ISO 639-1 language code, e.g. en
    language_code: String,

    #[clap(long)]
    name: Option<String>,

    /// Refuse to create the playlist below this many songs
    #[clap(long, default_value_t = default_min_songs())]
    min_songs: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistsOptions {
    /// Search for artists
    #[clap(long)]
    search: String,

    /// Maximum number of results (1-50)
    #[clap(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..=50))]
    limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("{}", e),
    };

    let clients = CachedTokenProvider::new(config.clone());

    match cli.command {
        Command::Auth => {
            let state = AppState::new(config, Arc::new(clients), Arc::new(LinguaDetector::new()));
            cli::auth(state).await;
        }
        Command::Serve => {
            let state = AppState::new(config, Arc::new(clients), Arc::new(LinguaDetector::new()));
            cli::serve(state).await;
        }
        Command::Groups(opt) => cli::groups(&clients, opt.period.into(), opt.tracks).await,
        Command::Languages => cli::languages(&clients, &LinguaDetector::new()).await,
        Command::Playlist(opt) => {
            cli::playlist(
                &clients,
                opt.period.into(),
                &opt.group_key,
                opt.name,
                opt.description,
            )
            .await
        }
        Command::LanguagePlaylist(opt) => {
            cli::language_playlist(
                &clients,
                &LinguaDetector::new(),
                &opt.language_code,
                opt.name,
                opt.min_songs,
            )
            .await
        }
        Command::Artists(opt) => cli::list_artists(&clients, &opt.search, opt.limit).await,
        Command::Completions(_) => {}
    }
}
