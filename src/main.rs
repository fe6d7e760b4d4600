//! YogaTube - Catalog Browser and Player
//!
//! Pages through a remote video catalog one record at a time and hands the
//! selected video to mpv or the system browser.

use anyhow::Result;
use clap::Parser;
use yogatube::api::{CatalogApi, HttpCatalogClient, PageResult, VideoDetail};
use yogatube::utils::{AppSettings, PlayerChoice};
use yogatube::viewer::state::DEFAULT_EXCEEDED_NOTICE;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Base URL of the catalog API
    #[arg(long)]
    api_domain: Option<String>,

    /// Player used for playback
    #[arg(long, value_enum)]
    player: Option<PlayerChoice>,

    /// Print the full catalog and exit
    #[arg(long, conflicts_with = "show")]
    list: bool,

    /// Print the record at OFFSET and exit
    #[arg(long, value_name = "OFFSET")]
    show: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = AppSettings::load()?;
    if let Some(domain) = args.api_domain {
        settings.api_domain = domain;
    }
    if let Some(player) = args.player {
        settings.player = player;
    }
    let settings = settings.normalized();

    // Initialize logging
    yogatube::app::init_tracing(&settings);

    if args.list || args.show.is_some() {
        // Run headless inside a temporary Tokio runtime
        let rt = tokio::runtime::Runtime::new()?;
        let client = HttpCatalogClient::new(&settings.api_domain);
        return rt.block_on(async move {
            match args.show {
                Some(offset) => show_cli(&client, offset).await,
                None => list_cli(&client).await,
            }
        });
    }

    // Start the GUI application (synchronous entrypoint)
    yogatube::app::run(settings)
}

async fn list_cli(client: &HttpCatalogClient) -> Result<()> {
    let videos = client.fetch_videos().await?;
    for video in &videos {
        println!("{:>6}  {}", video.id, video.title);
    }
    println!("{} videos", videos.len());
    Ok(())
}

async fn show_cli(client: &HttpCatalogClient, offset: u64) -> Result<()> {
    match client.fetch_video(offset).await? {
        PageResult::Video(video) => print_video(&video),
        PageResult::Exceeded { message } => {
            println!("{}", message.as_deref().unwrap_or(DEFAULT_EXCEEDED_NOTICE));
        }
    }
    Ok(())
}

fn print_video(video: &VideoDetail) {
    println!("ID:          {}", video.id);
    println!("Title:       {}", video.title);
    if let Some(channel) = video.channel_title() {
        println!("Channel:     {}", channel);
    }
    if let Some(published) = video.published_at {
        println!("Published:   {}", published.format("%Y-%m-%d %H:%M UTC"));
    }
    if let Some(url) = video.watch_url() {
        println!("Watch:       {}", url);
    }
    if let Some(thumbnail) = video.preferred_thumbnail() {
        println!("Thumbnail:   {}", thumbnail.url);
    }
    if let Some(description) = video.description() {
        println!();
        println!("{}", description);
    }
}
