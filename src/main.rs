use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use progression::constants::FRAME_TIME;
use progression::{ConsoleSurface, Direction, Markup, Page};

/// Drives a sample walkthrough page from the terminal: seeded random clicks
/// land on the slider and the feature toggles while the session loop ticks,
/// printing a snapshot line whenever the page visibly changes.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of slide pairs on the sample page
    #[arg(long, default_value_t = 4)]
    slides: usize,

    /// Image count per feature region, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = vec![2, 2])]
    regions: Vec<usize>,

    /// Random clicks to inject before letting the page settle
    #[arg(long, default_value_t = 24)]
    events: usize,

    /// Seed of the click generator
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Milliseconds per session tick
    #[arg(long, default_value_t = FRAME_TIME.as_millis() as u64)]
    tick_ms: u64,

    /// Log every surface command and scheduler phase
    #[arg(short, long)]
    verbose: bool,
}

fn stage_name(k: usize) -> String {
    const STAGES: [&str; 4] = ["research", "wireframes", "visual-design", "handoff"];
    STAGES
        .get(k)
        .map(|name| (*name).to_owned())
        .unwrap_or_else(|| format!("stage-{}", k + 1))
}

fn sample_markup(slides: usize, regions: &[usize]) -> Markup {
    Markup {
        slide_images: (0..slides).map(stage_name).collect(),
        slide_contents: (0..slides)
            .map(|k| format!("{}-brief", stage_name(k)))
            .collect(),
        feature_regions: regions
            .iter()
            .map(|&len| {
                (0..len)
                    .map(|i| match i {
                        0 => "before".to_owned(),
                        1 => "after".to_owned(),
                        _ => format!("variant-{i}"),
                    })
                    .collect()
            })
            .collect(),
    }
}

fn inject(
    page: &mut Page,
    console: &mut ConsoleSurface,
    rng: &mut StdRng,
    slides: usize,
    regions: usize,
    clock: Duration,
) {
    let clock_ms = clock.as_millis();
    let roll: u32 = rng.random_range(0..8);
    match roll {
        0..=2 => {
            println!("[{clock_ms:>6}ms] click: next arrow");
            page.on_next_clicked(console);
        }
        3 => {
            println!("[{clock_ms:>6}ms] click: prev arrow");
            page.on_previous_clicked(console);
        }
        4..=5 => {
            // Targets one past the end now and then to show the ignore path.
            let target = rng.random_range(0..slides + 1);
            println!("[{clock_ms:>6}ms] click: dot {target}");
            page.on_indicator_clicked(target, console);
        }
        _ => {
            if regions == 0 {
                println!("[{clock_ms:>6}ms] click: next arrow");
                page.on_next_clicked(console);
                return;
            }
            let region = rng.random_range(0..regions);
            let direction = if rng.random_bool(0.5) {
                Direction::Forward
            } else {
                Direction::Backward
            };
            println!("[{clock_ms:>6}ms] click: region {region} toggle {direction:?}");
            page.on_toggle_arrow_clicked(region, direction, console);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "progression=trace" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let markup = sample_markup(args.slides, &args.regions);
    let mut page = Page::wire(&markup).context("page markup is malformed")?;
    let mut console = ConsoleSurface::new(&markup);

    info!(
        slides = args.slides,
        regions = args.regions.len(),
        seed = args.seed,
        "walkthrough page loaded"
    );

    page.initialize(&mut console);
    println!("[{:>6}ms] {}", 0, console.snapshot());
    let _ = console.take_changed();

    let tick = Duration::from_millis(args.tick_ms);
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut clock = Duration::ZERO;
    let mut remaining_events = args.events;
    let mut frames_until_event: u32 = rng.random_range(2..45);

    while remaining_events > 0 || !page.is_settled() {
        if remaining_events > 0 {
            if frames_until_event == 0 {
                inject(
                    &mut page,
                    &mut console,
                    &mut rng,
                    args.slides,
                    args.regions.len(),
                    clock,
                );
                remaining_events -= 1;
                frames_until_event = rng.random_range(2..45);
            } else {
                frames_until_event -= 1;
            }
        }

        page.tick(tick, &mut console);
        clock += tick;

        if console.take_changed() {
            println!("[{:>6}ms] {}", clock.as_millis(), console.snapshot());
        }
    }

    println!("[{:>6}ms] settled: {}", clock.as_millis(), console.snapshot());
    Ok(())
}
