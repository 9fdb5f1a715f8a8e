use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{error, info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use albumshelf::browse::{
    browse_albums, browse_artists, AlbumSortKey, ArtistFilters, ArtistSortKey, BrowseSession,
    SortOrder,
};
use albumshelf::catalog::{Album, AlbumSummary, ArtistRollup, SortNameRules};
use albumshelf::client::CatalogApi;
use albumshelf::config::FileConfig;

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to a TOML config file.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Backend base URL, overrides the config file.
    #[clap(long)]
    pub backend_url: Option<String>,

    /// Initial view state as a query string, e.g. "letter=B&min=7".
    #[clap(long, default_value = "")]
    pub query: String,
}

fn print_albums(albums: &[Album]) {
    if albums.is_empty() {
        println!("No albums found for these filters.");
        return;
    }
    for album in albums {
        let year = album
            .release_year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "----".to_string());
        let rating = album
            .rating
            .map(|r| format!(" *{r}"))
            .unwrap_or_default();
        let genre = album
            .genre
            .as_deref()
            .map(|g| format!(" [{g}]"))
            .unwrap_or_default();
        println!(
            "{:>6}  {} - {} ({}){}{}",
            album.id,
            album.artist_name(),
            album.album_name,
            year,
            genre,
            rating
        );
    }
    let summary = AlbumSummary::compute(albums);
    let avg = summary
        .avg_rating
        .map(|a| format!(", avg rating {a}"))
        .unwrap_or_default();
    println!(
        "-- {} albums, {} rated, {} artists{}",
        summary.total, summary.rated, summary.unique_artists, avg
    );
}

fn print_artists(rollups: &[ArtistRollup]) {
    if rollups.is_empty() {
        println!("No artists found for these filters.");
        return;
    }
    for rollup in rollups {
        let avg = rollup
            .avg_rating
            .map(|a| format!(", avg {a:.2}"))
            .unwrap_or_default();
        println!(
            "[{}] {} ({} albums{})",
            rollup.letter, rollup.artist.artist_name, rollup.album_count, avg
        );
    }
}

fn print_help() {
    println!(
        "Commands:\n\
         \x20 list                      show the filtered album view\n\
         \x20 artists [key] [order]     artist view (letter|artist|albumCount|avgRating)\n\
         \x20 search <text>             filter by title or artist substring\n\
         \x20 letter <A-Z|#>            filter by artist letter bucket\n\
         \x20 artist <name>             filter by exact artist\n\
         \x20 genre <text>              filter by genre substring\n\
         \x20 year <prefix>             filter by year prefix\n\
         \x20 min <rating>              minimum rating filter\n\
         \x20 sort <key> [asc|desc]     letter|artist|title|year|genre|rating\n\
         \x20 url                       print the shareable query string\n\
         \x20 open <query>              load a shared query string\n\
         \x20 delete-album <id>         delete an album on the backend\n\
         \x20 reset | refresh | quit"
    );
}

struct Browser {
    api: CatalogApi,
    rules: SortNameRules,
    session: BrowseSession,
    albums: Vec<Album>,
    artists: Vec<ArtistRollup>,
}

impl Browser {
    /// Fetch failures degrade to an empty collection: the view stays
    /// usable and the error only shows up in the log.
    async fn refresh(&mut self) {
        self.albums = match self.api.list_albums().await {
            Ok(albums) => albums,
            Err(err) => {
                error!("Error fetching albums: {err}");
                Vec::new()
            }
        };
        self.artists = match self.api.list_artists().await {
            Ok(artists) => ArtistRollup::build_all(artists, &self.rules),
            Err(err) => {
                error!("Error fetching artists: {err}");
                Vec::new()
            }
        };
        info!(
            "Catalog loaded: {} albums, {} artists",
            self.albums.len(),
            self.artists.len()
        );
    }

    fn list(&self) {
        print_albums(&browse_albums(&self.albums, self.session.state(), &self.rules));
    }

    fn artist_view(&self, args: &str) {
        let mut parts = args.split_whitespace();
        let key = parts
            .next()
            .and_then(ArtistSortKey::from_param)
            .unwrap_or_default();
        let order = parts
            .next()
            .and_then(SortOrder::from_param)
            .unwrap_or_default();
        print_artists(&browse_artists(
            &self.artists,
            &ArtistFilters::default(),
            key,
            order,
        ));
    }

    async fn dispatch(&mut self, line: &str) {
        let (command, args) = match line.split_once(' ') {
            Some((command, args)) => (command, args.trim()),
            None => (line, ""),
        };

        match command {
            "help" => print_help(),
            "list" => self.list(),
            "artists" => self.artist_view(args),
            "search" => self.session.set_search(args),
            "letter" => self.session.set_letter(args),
            "artist" => self.session.set_artist(args),
            "genre" => self.session.set_genre(args),
            "year" => self.session.set_year(args),
            "min" => self
                .session
                .set_min_rating(args.parse::<f64>().ok().filter(|v| v.is_finite())),
            "sort" => {
                let mut parts = args.split_whitespace();
                match parts.next().and_then(AlbumSortKey::from_param) {
                    Some(key) => {
                        let order = parts
                            .next()
                            .and_then(SortOrder::from_param)
                            .unwrap_or_default();
                        self.session.set_sort(key, order);
                    }
                    None => println!("Unknown sort key, try: letter artist title year genre rating"),
                }
            }
            "url" => println!("?{}", albumshelf::browse::query::encode(self.session.state())),
            "open" => {
                self.session.begin_hydrate(args);
            }
            "delete-album" => match args.parse::<i64>() {
                Ok(id) => match self.api.delete_album(id).await {
                    Ok(()) => {
                        println!("Album {id} deleted.");
                        self.refresh().await;
                    }
                    Err(err) => error!("Error deleting album {id}: {err}"),
                },
                Err(_) => println!("Usage: delete-album <id>"),
            },
            "reset" => self.session.reset_filters(),
            "refresh" => self.refresh().await,
            "" => {}
            _ => println!("Unknown command \"{command}\", try \"help\"."),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let config = match &cli_args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let backend_url = cli_args
        .backend_url
        .unwrap_or_else(|| config.backend_url().to_string());

    let rules = SortNameRules::with_aliases(config.sort_aliases());
    let api = CatalogApi::new(backend_url, config.timeout_sec());
    info!("Fetching catalog from {}...", api.base_url());

    let mut browser = Browser {
        api,
        rules,
        session: BrowseSession::from_query(&cli_args.query),
        albums: Vec::new(),
        artists: Vec::new(),
    };
    browser.refresh().await;
    println!("Type \"list\" to browse, \"help\" for all commands.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line == "quit" || line == "exit" {
            break;
        }

        browser.dispatch(line).await;

        // End of the update cycle: push the view state to the "address
        // bar" unless it came from there.
        if let Some(query) = browser.session.complete_update() {
            println!("url: ?{query}");
        }
    }
    Ok(())
}
