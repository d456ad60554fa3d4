//! DreamForge CLI
//!
//! Thin wrapper around dreamforge-core for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Generate a design document from a free-text idea
//! dreamforge generate "A horror game where you rewind time"
//!
//! # Generate from template fields instead
//! dreamforge generate --title "Abyssal" --genre survival --setting "underwater lab"
//!
//! # Skip the simulated delay and export a PDF
//! dreamforge generate --instant --output concept.pdf "space pirates"
//!
//! # Show detected themes and chosen variants
//! dreamforge classify "medieval knights in space"
//!
//! # Show the inspiration gallery
//! dreamforge images "a lucid dream under the sea"
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use dreamforge_core::{
    classify, export_to_file, select_art_style, select_inspiration_images, select_world_map,
    DreamEngine, EngineConfig, ExportDocument, ExportFormat, GameIdea, GameTemplate,
    GenerationEvent, GenerationOutcome, InstantDelay, Theme,
};
use tokio::sync::broadcast;

/// DreamForge - Game Design Document Builder
#[derive(Parser)]
#[command(name = "dreamforge")]
#[command(version = "0.1.0")]
#[command(about = "DreamForge - turn a game idea into a design document")]
#[command(
    long_about = "Classifies a free-text game idea by keyword and assembles a game design document from pre-authored sections: plotline, world map, art style, game loop and UI sketches."
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (default: ~/.dreamforge/config.json if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a game design document
    Generate {
        /// Free-text game idea (takes precedence over template fields)
        idea: Option<String>,

        #[command(flatten)]
        template: TemplateArgs,

        /// Skip the simulated generation delay
        #[arg(long)]
        instant: bool,

        /// Export the document to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export format: md, html, json or pdf (default: from file extension)
        #[arg(short, long, requires = "output")]
        format: Option<String>,

        /// Print the full outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show detected themes and the selected content variants
    Classify {
        /// Free-text game idea
        idea: String,
    },

    /// Show the three inspiration images for an idea
    Images {
        /// Free-text game idea
        idea: String,
    },
}

/// Structured template fields
#[derive(Args, Default)]
struct TemplateArgs {
    /// Game title
    #[arg(long)]
    title: Option<String>,
    /// Genre
    #[arg(long)]
    genre: Option<String>,
    /// Setting
    #[arg(long)]
    setting: Option<String>,
    /// Storyline
    #[arg(long)]
    storyline: Option<String>,
    /// Main characters
    #[arg(long)]
    characters: Option<String>,
    /// Core mechanics
    #[arg(long)]
    mechanics: Option<String>,
}

impl TemplateArgs {
    fn into_template(self) -> GameTemplate {
        GameTemplate {
            title: self.title.unwrap_or_default(),
            genre: self.genre.unwrap_or_default(),
            setting: self.setting.unwrap_or_default(),
            storyline: self.storyline.unwrap_or_default(),
            characters: self.characters.unwrap_or_default(),
            mechanics: self.mechanics.unwrap_or_default(),
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Resolve the export format from the flag or the output path
fn parse_export_format(format: Option<&str>, output: &std::path::Path) -> Result<ExportFormat> {
    match format {
        Some(name) => name
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid format '{}': {}", name, e)),
        None => ExportFormat::from_path(output).map_err(|_| {
            anyhow::anyhow!(
                "Cannot infer export format from '{}'. Use --format md|html|json|pdf",
                output.display()
            )
        }),
    }
}

/// Print progress to stderr until the concept is ready
async fn report_progress(mut rx: broadcast::Receiver<GenerationEvent>) {
    while let Ok(event) = rx.recv().await {
        match event {
            GenerationEvent::StateChanged(state) => eprintln!("[{}]", state),
            GenerationEvent::ImageFallback(notice) => eprintln!("Notice: {}", notice),
            GenerationEvent::ConceptReady(_) => break,
        }
    }
}

fn print_outcome(outcome: &GenerationOutcome) {
    println!("Game Design Document");
    println!("  ID: {}", outcome.id);
    println!("  Idea: {}", outcome.idea);
    let themes: Vec<String> = outcome
        .flags
        .detected()
        .iter()
        .map(|t| t.to_string())
        .collect();
    if themes.is_empty() {
        println!("  Themes: (none detected)");
    } else {
        println!("  Themes: {}", themes.join(", "));
    }
    println!();

    for (title, body) in outcome.concept.sections() {
        println!("== {} ==", title);
        println!();
        println!("{}", body);
        println!();
    }

    println!("Inspiration images:");
    for (i, image) in outcome.images.iter().enumerate() {
        println!("  {}. {} -> {}", i + 1, image.description, image.reference());
    }

    for notice in &outcome.notices {
        println!();
        println!("Notice: {}", notice);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = EngineConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load config")?;
    tracing::debug!(?config, "Loaded config");

    match cli.command {
        Commands::Generate {
            idea,
            template,
            instant,
            output,
            format,
            json,
        } => {
            let idea = match idea {
                Some(text) => GameIdea::new(text),
                None => template.into_template().to_idea(),
            };
            if idea.is_blank() {
                anyhow::bail!(
                    "Nothing to generate: enter a game idea or fill in the template fields"
                );
            }

            // Validate the export target before spending time generating
            let export = match &output {
                Some(path) => Some((parse_export_format(format.as_deref(), path)?, path.clone())),
                None => None,
            };

            let mut engine = DreamEngine::new(config);
            if instant {
                engine = engine.with_delay(InstantDelay::new());
            }

            let progress = if json {
                None
            } else {
                Some(tokio::spawn(report_progress(engine.subscribe())))
            };

            let outcome = engine.generate(&idea).await?;
            if let Some(progress) = progress {
                if let Err(e) = progress.await {
                    tracing::warn!(error = %e, "Progress reporter stopped unexpectedly");
                }
            }

            if json {
                println!("{}", serde_json::to_string_pretty(outcome)?);
            } else {
                print_outcome(outcome);
            }

            if let Some((format, path)) = export {
                export_to_file(&ExportDocument::from(outcome), format, &path)
                    .with_context(|| format!("Export failed: {}", path.display()))?;
                if !json {
                    println!();
                    println!("Exported {} to {}", format, path.display());
                }
            }
        }

        Commands::Classify { idea } => {
            let flags = classify(&idea);
            println!("Themes:");
            for theme in Theme::ALL {
                let mark = if flags.get(theme) { "yes" } else { "no" };
                println!("  {:<8} {}", theme, mark);
            }
            println!();
            println!("World map: {}", select_world_map(&flags));
            println!("Art style: {}", select_art_style(&flags));
        }

        Commands::Images { idea } => {
            println!("Inspiration images:");
            for (i, image) in select_inspiration_images(&idea).iter().enumerate() {
                println!("  {}. {} -> {}", i + 1, image.description, image.reference());
            }
        }
    }

    Ok(())
}
