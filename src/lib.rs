//! Sightspeak: annotation overlays and summaries for vision-service results.
//!
//! Given a decoded image and the object, label and OCR results a vision
//! service returned for it, sightspeak draws pixel-accurate overlays onto
//! copies of the image and merges the three result sets into one text
//! summary, whose OCR text can be handed to a speech synthesizer.
//!
//! # Modules
//!
//! - [`ir`]: Detection types and the vision results JSON reader
//! - [`geometry`]: Normalized-to-pixel coordinate mapping
//! - [`render`]: Object and OCR overlay drawing
//! - [`scale`]: Aspect-preserving downscale for display
//! - [`summary`]: Result aggregation
//! - [`speech`]: Narration duration estimate
//! - [`pipeline`]: Decode-once analysis of a single image
//! - [`error`]: Error types for sightspeak operations

pub mod error;
pub mod geometry;
pub mod ir;
pub mod logging;
pub mod pipeline;
pub mod render;
pub mod scale;
pub mod speech;
pub mod summary;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::{info, warn};

pub use error::SightspeakError;

use pipeline::{AnalyzeOptions, Analysis};
use render::{OverlayRenderer, OverlayStyle};
use scale::{DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH};
use summary::AnnotationSummary;

/// The sightspeak CLI application.
#[derive(Parser)]
#[command(name = "sightspeak")]
#[command(version, about)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Draw object and OCR overlays for an image and print the summary.
    Annotate(AnnotateArgs),
    /// Print the result summary without touching the image.
    Summary(SummaryArgs),
}

/// Arguments for the annotate subcommand.
#[derive(clap::Args)]
struct AnnotateArgs {
    /// Image file to annotate.
    image: PathBuf,

    /// Vision results JSON (AnnotateImageResponse) for the image.
    #[arg(short, long)]
    annotations: PathBuf,

    /// Directory to write the overlay images into.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Maximum overlay width.
    #[arg(long, default_value_t = DEFAULT_MAX_WIDTH)]
    max_width: u32,

    /// Maximum overlay height.
    #[arg(long, default_value_t = DEFAULT_MAX_HEIGHT)]
    max_height: u32,

    /// Keep overlays at the source resolution.
    #[arg(long)]
    no_fit: bool,

    /// TrueType/OpenType font for labels (system fonts are probed otherwise).
    #[arg(long, env = render::FONT_ENV)]
    font: Option<PathBuf>,

    /// Output format for the summary ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Arguments for the summary subcommand.
#[derive(clap::Args)]
struct SummaryArgs {
    /// Vision results JSON (AnnotateImageResponse).
    #[arg(short, long)]
    annotations: PathBuf,

    /// Output format for the summary ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Summary output formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn parse(raw: &str) -> Result<Self, SightspeakError> {
        match raw {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(SightspeakError::UnsupportedFormat(format!(
                "'{}' (supported: text, json)",
                other
            ))),
        }
    }
}

/// Run the sightspeak CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), SightspeakError> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Some(Commands::Annotate(args)) => run_annotate(args),
        Some(Commands::Summary(args)) => run_summary(args),
        None => {
            println!("sightspeak {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Annotation overlays and summaries for vision-service results.");
            println!();
            println!("Run 'sightspeak --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the annotate subcommand.
fn run_annotate(args: AnnotateArgs) -> Result<(), SightspeakError> {
    let format = OutputFormat::parse(&args.output)?;
    let annotations = ir::io_vision_json::read_vision_json(&args.annotations)?;
    let image = pipeline::load_image(&args.image)?;
    info!(
        "Loaded {} ({}x{})",
        args.image.display(),
        image.width(),
        image.height()
    );

    let renderer = build_renderer(args.font.as_deref())?;
    let opts = AnalyzeOptions {
        fit: (!args.no_fit).then_some((args.max_width, args.max_height)),
    };
    let analysis = pipeline::analyze(&image, &annotations, &renderer, &opts)?;

    std::fs::create_dir_all(&args.out_dir)?;
    let stem = args
        .image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    let objects_path = args.out_dir.join(format!("{stem}.objects.png"));
    let texts_path = args.out_dir.join(format!("{stem}.ocr.png"));
    pipeline::save_image(&analysis.objects.image, &objects_path)?;
    pipeline::save_image(&analysis.texts.image, &texts_path)?;

    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "summary": &analysis.summary,
                "speech_seconds_estimated": analysis.speech_seconds,
                "objects_overlay": objects_path.display().to_string(),
                "ocr_overlay": texts_path.display().to_string(),
                "skipped": skipped_json(&analysis),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => {
            print_summary_text(&analysis.summary, analysis.speech_seconds);
            println!();
            println!("Objects overlay: {}", objects_path.display());
            println!("OCR overlay:     {}", texts_path.display());
            let skipped = analysis
                .objects
                .skipped
                .iter()
                .map(|s| ("object", s))
                .chain(analysis.texts.skipped.iter().map(|s| ("text", s)));
            for (kind, s) in skipped {
                println!("Skipped {} {} ('{}'): {}", kind, s.index, s.label, s.error);
            }
        }
    }

    Ok(())
}

/// Execute the summary subcommand.
fn run_summary(args: SummaryArgs) -> Result<(), SightspeakError> {
    let format = OutputFormat::parse(&args.output)?;
    let annotations = ir::io_vision_json::read_vision_json(&args.annotations)?;
    let summary = summary::aggregate_set(&annotations);
    let speech_seconds = speech::estimate_speech_duration(summary.speech_text());

    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "summary": &summary,
                "speech_seconds_estimated": speech_seconds,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => print_summary_text(&summary, speech_seconds),
    }

    Ok(())
}

fn build_renderer(font: Option<&Path>) -> Result<OverlayRenderer, SightspeakError> {
    let renderer = OverlayRenderer::new(OverlayStyle::default());
    match render::resolve_label_font(font) {
        Ok(font) => Ok(renderer.with_font(font)),
        Err(SightspeakError::NoFontFound) => {
            warn!("No label font found; overlays will have no text labels");
            Ok(renderer)
        }
        Err(err) => Err(err),
    }
}

fn print_summary_text(summary: &AnnotationSummary, speech_seconds: f64) {
    println!("{}", summary);
    println!();
    println!("Speech duration (estimated): {:.2} seconds", speech_seconds);
}

fn skipped_json(analysis: &Analysis) -> serde_json::Value {
    let entries = |kind: &str, overlay: &render::RenderedOverlay| -> Vec<serde_json::Value> {
        overlay
            .skipped
            .iter()
            .map(|s| {
                serde_json::json!({
                    "kind": kind,
                    "index": s.index,
                    "label": s.label,
                    "reason": s.error.to_string(),
                })
            })
            .collect()
    };

    let mut all = entries("object", &analysis.objects);
    all.extend(entries("text", &analysis.texts));
    serde_json::Value::Array(all)
}
