/// Tubelist Server - playlist manager for YouTube tracks
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tubelist_core::{NewTrack, PlaylistStore, TrackAddition};
use tubelist_server::{config::ServerConfig, create_router, state::AppState};
use tubelist_storage::LocalStore;

#[derive(Parser)]
#[command(name = "tubelist-server")]
#[command(about = "Tubelist playlist server", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "TUBELIST_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// List all playlists
    ListPlaylists,
    /// Create a new playlist
    CreatePlaylist {
        /// Playlist title
        title: String,
    },
    /// Add a track to a playlist
    AddTrack {
        #[arg(short, long)]
        playlist: String,
        #[arg(short, long)]
        date: String,
        #[arg(short, long)]
        artist: String,
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tubelist_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => serve(config).await?,
        Commands::ListPlaylists => list_playlists(&config).await?,
        Commands::CreatePlaylist { title } => create_playlist(&config, &title).await?,
        Commands::AddTrack {
            playlist,
            date,
            artist,
            title,
            url,
        } => {
            let track = NewTrack::new(date, artist, title, url);
            add_track(&config, &playlist, track).await?;
        }
    }

    Ok(())
}

async fn connect(config: &ServerConfig) -> anyhow::Result<LocalStore> {
    let store = LocalStore::connect_with(
        &config.storage.database_url,
        config.storage.max_connections,
    )
    .await?;
    Ok(store)
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Tubelist Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let store = Arc::new(connect(&config).await?);
    tracing::info!("Database connected");

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    let app = create_router(AppState::new(store, config.views));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn list_playlists(config: &ServerConfig) -> anyhow::Result<()> {
    let store = connect(config).await?;
    let playlists = store.list_playlists().await?;

    println!("Playlists:");
    for title in playlists {
        println!("  {title}");
    }
    println!("Tracks in library: {}", store.track_count().await?);

    Ok(())
}

async fn create_playlist(config: &ServerConfig, title: &str) -> anyhow::Result<()> {
    let store = connect(config).await?;

    if store.create_playlist(title).await? {
        println!("Created playlist \"{title}\"");
    } else {
        anyhow::bail!("Playlist \"{title}\" already exists");
    }

    Ok(())
}

async fn add_track(config: &ServerConfig, playlist: &str, track: NewTrack) -> anyhow::Result<()> {
    let store = connect(config).await?;

    if !store.playlist_exists(playlist).await? {
        let known = store.list_playlists().await?;
        anyhow::bail!(
            "Playlist \"{playlist}\" does not exist (known: {})",
            known.join(", ")
        );
    }

    match store.add_track_to_playlist(playlist, track).await? {
        TrackAddition::Added { track_id, created } => {
            let kind = if created { "new" } else { "existing" };
            println!("Added {kind} track {track_id} to \"{playlist}\"");
            // An existing row keeps its first url, which may differ from the one given
            if let Some(stored) = store.get_track(track_id).await? {
                println!("  {} - {} ({})", stored.artist, stored.title, stored.url);
            }
        }
        TrackAddition::AlreadyPresent { track_id } => {
            println!("Track {track_id} is already in \"{playlist}\"");
        }
        TrackAddition::PlaylistNotFound => {
            anyhow::bail!("Playlist \"{playlist}\" does not exist");
        }
    }

    Ok(())
}
