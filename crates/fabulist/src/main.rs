use clap::Parser;
use fabulist::{
    AudioOutcome, Cli, Commands, FabulistConfig, ImageOutcome, ImageSize, Session, Voice,
    live_studio,
};
use fabulist_core::prompt::{DEFAULT_IMAGE_STYLE, DEFAULT_STORY_TEMPLATE};
use std::path::PathBuf;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let config = FabulistConfig::load()?;

    match cli.command {
        Commands::Serve { host, port } => {
            let mut http = config.server;
            if let Some(host) = host {
                http.host = host;
            }
            if let Some(port) = port {
                http.port = port;
            }
            fabulist_server::serve(http, config.openai, config.storage.root).await?;
        }

        Commands::Tell {
            idea,
            voice,
            size,
            output,
        } => {
            tell(&config, &idea, voice, size, output).await?;
        }
    }

    Ok(())
}

async fn tell(
    config: &FabulistConfig,
    idea: &str,
    voice: Option<String>,
    size: Option<String>,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let voice = parse_voice(voice)?;
    let size = parse_size(size)?;

    let api_key = std::env::var("OPENAI_API_KEY")
        .map_err(|_| "OPENAI_API_KEY must be set to generate stories")?;

    let root = output.unwrap_or_else(|| config.storage.root.clone());
    let studio = live_studio(&config.openai, root, &api_key)?;
    let mut session = Session::new();

    let outcome = studio
        .generate_all(
            &mut session,
            DEFAULT_STORY_TEMPLATE,
            idea,
            DEFAULT_IMAGE_STYLE,
            size,
            voice,
        )
        .await?;

    println!("{}", outcome.story().story());
    println!();
    println!("Story: {}", outcome.story().path().display());
    if let ImageOutcome::Generated { path, .. } = outcome.image() {
        println!("Image: {}", path.display());
    }
    if let AudioOutcome::Generated { path, .. } = outcome.audio() {
        println!("Audio: {}", path.display());
    }

    Ok(())
}

fn parse_voice(voice: Option<String>) -> Result<Voice, String> {
    match voice {
        Some(name) => Voice::from_str(&name).map_err(|_| {
            let known: Vec<String> = Voice::iter().map(|v| v.to_string()).collect();
            format!(
                "Unknown voice {:?}. Valid voices: {}",
                name,
                known.join(", ")
            )
        }),
        None => Ok(Voice::default()),
    }
}

fn parse_size(size: Option<String>) -> Result<ImageSize, String> {
    match size {
        Some(name) => ImageSize::from_str(&name).map_err(|_| {
            let known: Vec<String> = ImageSize::iter().map(|s| s.to_string()).collect();
            format!("Unknown size {:?}. Valid sizes: {}", name, known.join(", "))
        }),
        None => Ok(ImageSize::default()),
    }
}
