use clap::{Parser, Subcommand, ValueEnum};
use melodex::{CatalogClient, SearchType};

#[derive(Parser)]
#[command(name = "melodex-cli")]
#[command(about = "CLI for Melodex - music catalog lookups", long_about = None)]
struct Cli {
    /// Override the API base URL, version segment included
    #[arg(long, env = "MELODEX_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog
    Search {
        /// Search query
        query: String,

        /// Type of content to search for
        #[arg(short, long, value_enum, default_value_t = Category::Track)]
        r#type: Category,

        /// Limit results
        #[arg(short, long)]
        limit: Option<u32>,

        /// Offset into the result list
        #[arg(short, long)]
        offset: Option<u32>,
    },
    /// Show an artist with its top tracks
    Artist {
        /// Artist ID
        id: String,

        /// Country for the top-tracks lookup
        #[arg(short, long, default_value = "US")]
        country: String,
    },
    /// Show an album and its track listing
    Album {
        /// Album ID
        id: String,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Category {
    Artist,
    Album,
    Track,
}

impl From<Category> for SearchType {
    fn from(c: Category) -> Self {
        match c {
            Category::Artist => SearchType::Artist,
            Category::Album => SearchType::Album,
            Category::Track => SearchType::Track,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let client = match &cli.base_url {
        Some(url) => CatalogClient::builder().base_url(url.clone()).build()?,
        None => CatalogClient::new()?,
    };

    match &cli.command {
        Commands::Search {
            query,
            r#type,
            limit,
            offset,
        } => {
            println!("Searching for '{}'...", query);
            let result = client
                .search(query, &[(*r#type).into()], *limit, *offset)
                .await?;

            match r#type {
                Category::Artist => {
                    for (i, artist) in result.artists.items.iter().enumerate() {
                        println!("{}. {} (ID: {})", i + 1, artist.name, artist.id);
                    }
                    println!("{} of {} artists", result.artists.len(), result.artists.total);
                }
                Category::Album => {
                    for (i, album) in result.albums.items.iter().enumerate() {
                        println!(
                            "{}. {} - {} (ID: {})",
                            i + 1,
                            album.artists_string(", "),
                            album.name,
                            album.id
                        );
                    }
                    println!("{} of {} albums", result.albums.len(), result.albums.total);
                }
                Category::Track => {
                    for (i, track) in result.tracks.items.iter().enumerate() {
                        println!(
                            "{}. {} - {} [{}] (ID: {})",
                            i + 1,
                            track.artists_string(", "),
                            track.name,
                            track.duration_formatted(),
                            track.id
                        );
                    }
                    println!("{} of {} tracks", result.tracks.len(), result.tracks.total);
                }
            }
        }
        Commands::Artist { id, country } => {
            let artist = client.get_artist(id).await?;
            println!("{} (popularity {})", artist.name, artist.popularity);
            if !artist.genres.is_empty() {
                println!("Genres: {}", artist.genres.join(", "));
            }

            let tracks = client.get_artist_top_tracks(id, country).await?;
            if !tracks.is_empty() {
                println!("Top tracks in {}:", country);
                for (i, track) in tracks.iter().enumerate() {
                    println!(
                        "{}. {} [{}]",
                        i + 1,
                        track.name,
                        track.duration_formatted()
                    );
                }
            }
        }
        Commands::Album { id } => {
            let album = client.get_album(id).await?;
            println!(
                "{} - {} ({})",
                album.artists_string(", "),
                album.name,
                album.release_date
            );
            for track in &album.tracks.items {
                println!(
                    "{:>3}. {} [{}]",
                    track.track_number,
                    track.name,
                    track.duration_formatted()
                );
            }
            if album.tracks.total > album.tracks.len() as u32 {
                println!(
                    "({} of {} tracks shown)",
                    album.tracks.len(),
                    album.tracks.total
                );
            }
        }
    }

    Ok(())
}
