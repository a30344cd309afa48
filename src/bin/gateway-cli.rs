use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde_json::Value;

use video_gateway::client::{ApiClient, ProgressFn, RenderOptions, UploadSource};
use video_gateway::config::{loader, ClientConfig};

#[derive(Parser)]
#[command(name = "gateway-cli")]
#[command(about = "Exercise the video API client facade", long_about = None)]
struct Cli {
    /// Base URL of the video API backend (overrides VIDEO_API_URL).
    #[arg(short, long)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a video file
    Upload { file: PathBuf },
    /// Transcribe an uploaded video
    Transcribe { video_id: String },
    /// Generate a story from a transcript
    GenerateStory {
        video_id: String,
        prompt: String,
        #[arg(long)]
        mode: Option<String>,
    },
    /// Render a story into a video
    Render {
        video_id: String,
        /// JSON file holding the scene array
        scenes_file: PathBuf,
        #[arg(long)]
        transition_duration: Option<f64>,
    },
    /// Search within a video
    Search { video_id: String, query: String },
    /// Probe the CORS test endpoint
    CorsTest,
    /// Check backend health
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = ClientConfig::default();
    if let Ok(url) = std::env::var(loader::API_URL_ENV) {
        config.base_url = url;
    }
    if let Some(url) = cli.url {
        config.base_url = url;
    }
    let client = ApiClient::new(&config)?;

    match cli.command {
        Commands::Upload { file } => {
            let data = tokio::fs::read(&file).await?;
            let file_name = file
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("video.mp4")
                .to_string();
            let content_type = guess_content_type(&file).to_string();
            let source = UploadSource {
                file_name,
                content_type,
                data: data.into(),
            };
            let progress: ProgressFn = Box::new(|p| {
                eprintln!("uploaded {}/{} bytes", p.bytes_sent, p.total_bytes);
            });
            let response = client.upload_video(source, Some(progress)).await?;
            println!("status: {}", response.status);
            print_value(&response.body)?;
        }
        Commands::Transcribe { video_id } => {
            print_value(&client.transcribe_video(&video_id).await?)?;
        }
        Commands::GenerateStory {
            video_id,
            prompt,
            mode,
        } => {
            print_value(
                &client
                    .generate_story(&video_id, &prompt, mode.as_deref())
                    .await?,
            )?;
        }
        Commands::Render {
            video_id,
            scenes_file,
            transition_duration,
        } => {
            let scenes: Vec<Value> =
                serde_json::from_str(&tokio::fs::read_to_string(&scenes_file).await?)?;
            let options = RenderOptions {
                transition_duration,
            };
            print_value(&client.render_video(&video_id, &scenes, options).await?)?;
        }
        Commands::Search { video_id, query } => {
            print_value(&client.search_video(&video_id, &query).await?)?;
        }
        Commands::CorsTest => print_value(&client.test_cors().await?)?,
        Commands::Health => print_value(&client.health_check().await?)?,
    }

    Ok(())
}

fn guess_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("mov") => "video/quicktime",
        Some("webm") => "video/webm",
        Some("avi") => "video/x-msvideo",
        _ => "video/mp4",
    }
}

fn print_value(value: &Value) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
