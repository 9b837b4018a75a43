//! pagesim CLI: watch a page-replacement policy work, one reference at a time.

use std::io;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing::debug;

use pagesim::common::logger::setup_logger;
use pagesim::input::select_sequence;
use pagesim::{
    compare_policies, Driver, JsonRenderer, PageId, Policy, Renderer, ReplacementEngine,
    Result, SimulationConfig, TextRenderer, DEFAULT_FRAME_SIZE, DEFAULT_STEP_DELAY_MS,
};

#[derive(Parser)]
#[command(name = "pagesim")]
#[command(about = "Step-by-step page-replacement simulator (LRU, True LRU, Optimal)")]
#[command(version)]
struct Cli {
    /// Reference string, e.g. "7 0 1 2 0 3 0 4"
    #[arg(long)]
    pages: Option<String>,

    /// File holding the reference string ('#' lines are comments)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Number of frames
    #[arg(short, long, default_value_t = DEFAULT_FRAME_SIZE, value_parser = parse_frames)]
    frames: usize,

    /// Replacement policy: lru, true-lru or optimal
    #[arg(short, long, default_value = "lru")]
    policy: Policy,

    /// Pause between steps in milliseconds (0 for none)
    #[arg(long, default_value_t = DEFAULT_STEP_DELAY_MS)]
    delay_ms: u64,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Leave out the [HH:MM:SS] prefix on text output
    #[arg(long)]
    no_timestamps: bool,

    /// Run every policy and print their fault counts side by side
    #[arg(long)]
    compare: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn parse_frames(s: &str) -> Result<usize> {
    pagesim::input::parse_frame_size(s)
}

fn main() {
    let cli = Cli::parse();
    setup_logger(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let sequence = select_sequence(cli.pages.as_deref(), cli.input.as_deref())?;
    let config = SimulationConfig::new(cli.frames, cli.policy)
        .with_step_delay(Duration::from_millis(cli.delay_ms));
    config.validate()?;

    debug!(references = sequence.len(), frames = config.frame_size, "input ready");

    if cli.compare {
        return cmd_compare(&sequence, config.frame_size);
    }

    let engine = ReplacementEngine::with_config(sequence, &config)?;
    let driver = Driver::from_config(&config);
    let stdout = io::stdout().lock();

    let mut renderer: Box<dyn Renderer> = match cli.format {
        Format::Text => Box::new(TextRenderer::new(stdout).with_timestamps(!cli.no_timestamps)),
        Format::Json => Box::new(JsonRenderer::new(stdout)),
    };

    driver.run(engine, renderer.as_mut())?;
    Ok(())
}

fn cmd_compare(sequence: &[PageId], frame_size: usize) -> Result<()> {
    let summaries = compare_policies(sequence, frame_size)?;

    println!("Policy Comparison");
    println!("=================");
    println!("References:   {}", sequence.len());
    println!("Frames:       {frame_size}");
    println!();
    println!("{:<10} {:>8} {:>8} {:>10} {:>9}", "Policy", "Faults", "Hits", "Evictions", "Hit rate");
    for summary in &summaries {
        println!(
            "{:<10} {:>8} {:>8} {:>10} {:>8.2}%",
            summary.policy.to_string(),
            summary.faults,
            summary.hits,
            summary.evictions,
            summary.hit_rate() * 100.0
        );
    }
    Ok(())
}
