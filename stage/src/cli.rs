use std::{error::Error, fs::File, time::Duration};

use chrono::Utc;
use clap::Parser;
use log::{info, LevelFilter};
use scroll_events::scripted::{ScriptedScroller, Waypoint};
use scroll_events::steady::SteadyScroller;
use scroll_events::ScrollEventGenerator;
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode, WriteLogger};
use tokio::sync::mpsc::{self, error::TryRecvError};
use unfurl_stage::{Layout, PageConfig, Stage};
use unfurl_surface::ConsoleSurface;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "demos/portfolio.csv")]
    layout_file: String,
    #[arg(short, long, default_value = "demos/portfolio.json")]
    page_file: String,
    #[arg(short, long)]
    scroll_script: Option<String>,
    /// Steady scroll velocity in page units per second, used when no
    /// script is given.
    #[arg(long, default_value_t = 240.0)]
    scroll_speed: f64,
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
    #[arg(long, default_value_t = 120.0)]
    sample_rate: f64,
}

fn load_waypoints(path: &str) -> Result<Vec<Waypoint>, Box<dyn Error>> {
    Ok(csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)?
        .deserialize()
        .filter_map(|record: Result<Waypoint, _>| record.ok())
        .collect())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(
            LevelFilter::Debug,
            Config::default(),
            File::create("unfurl.log")?,
        ),
    ])?;

    let cli = Cli::parse();

    let layout = Layout::from_csv_file(&cli.layout_file)?;
    info!("Loaded {} elements from {}", layout.len(), cli.layout_file);
    let config = PageConfig::from_file(&cli.page_file)?;
    let max_scroll = (layout.bottom() - config.viewport_height).max(0.0);

    let mut stage = Stage::from_page(layout, &config)?;
    info!(
        "Page ready with {} effects",
        stage.effect_labels().count()
    );

    let (event_sender, mut event_receiver) = mpsc::channel(16);
    let scroller: Box<dyn ScrollEventGenerator> = match cli.scroll_script {
        Some(ref path) => {
            let waypoints = load_waypoints(path)?;
            info!("Replaying {} waypoints from {}", waypoints.len(), path);
            Box::new(ScriptedScroller::new(waypoints, cli.sample_rate, event_sender))
        }
        None => {
            info!(
                "Scrolling to {} at {} units/s",
                max_scroll, cli.scroll_speed
            );
            Box::new(SteadyScroller::new(
                cli.scroll_speed,
                cli.sample_rate,
                max_scroll,
                event_sender,
            ))
        }
    };
    info!("Scroll source: {}", scroller.get_name());

    let surface = ConsoleSurface::new();
    let frame_time = Duration::from_secs_f64(1.0 / cli.fps.max(1.0));
    let mut last_frame = Utc::now();
    let mut drained = false;
    let mut settle_ticks = 0;

    // Scrub a little past the end of the scroll source so one-shot
    // timelines still in flight can finish.
    while settle_ticks < (2.0 * cli.fps) as u32 {
        tokio::time::sleep(frame_time).await;

        loop {
            match event_receiver.try_recv() {
                Ok(event) => stage.handle_event(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    drained = true;
                    break;
                }
            }
        }

        let now = Utc::now();
        let delta = (now - last_frame).num_milliseconds() as f64 / 1000.0;
        last_frame = now;

        stage.tick(delta);
        stage.present_to(&surface)?;

        if drained {
            settle_ticks += 1;
        }
    }

    info!("Page run complete");
    Ok(())
}
