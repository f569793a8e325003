//! deckmd CLI - compile directive-based Markdown into a presentation deck

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use deckmd::render::{resolve_rows, ResolvedCell};
use deckmd::{
    ContentBounds, Deckmd, Result, Slide, SlideRenderer, TablePlacement, TableSpec, Theme,
};

#[derive(Parser)]
#[command(name = "deckmd")]
#[command(version)]
#[command(about = "Compile directive-based Markdown into a presentation deck", long_about = None)]
struct Cli {
    /// Input Markdown file
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output deck manifest (JSON)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Theme configuration file (JSON)
    #[arg(long, value_name = "FILE")]
    theme: Option<PathBuf>,

    /// Directory for intermediate slide markup files
    /// (default: "slides" next to the output)
    #[arg(long, value_name = "DIR")]
    slides_dir: Option<PathBuf>,

    /// Write compact JSON
    #[arg(long)]
    compact: bool,

    /// Parse slides sequentially instead of in parallel
    #[arg(long)]
    sequential: bool,

    /// Fail on malformed table data instead of dropping it
    #[arg(long)]
    strict_tables: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show deck information without writing any output
    Info {
        /// Input Markdown file
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },
}

/// A table placed on a rendered slide, as written to the manifest.
#[derive(Serialize)]
struct PlacedTable {
    slide: usize,
    title: Option<String>,
    placement: TablePlacement,
    rows: Vec<Vec<ResolvedCell>>,
}

/// The deck manifest written to the output path.
#[derive(Serialize)]
struct Manifest<'a> {
    slides: &'a [Slide],
    tables: &'a [PlacedTable],
}

/// Renderer that writes one markup document per slide and records table
/// placements for the manifest.
struct ExportRenderer {
    slides_dir: PathBuf,
    progress: ProgressBar,
    tables: Vec<PlacedTable>,
}

impl SlideRenderer for ExportRenderer {
    fn render_slide(
        &mut self,
        index: usize,
        _slide: &Slide,
        document: &str,
    ) -> Result<ContentBounds> {
        let path = self.slides_dir.join(format!("slide_{}.html", index + 1));
        fs::write(path, document)?;
        self.progress.inc(1);

        // Markup export cannot measure layout; placement falls back to the
        // parse-time heuristics.
        Ok(ContentBounds::unmeasured())
    }

    fn place_table(
        &mut self,
        slide_index: usize,
        table: &TableSpec,
        placement: &TablePlacement,
    ) -> Result<()> {
        self.tables.push(PlacedTable {
            slide: slide_index,
            title: table.title.clone(),
            placement: placement.clone(),
            rows: resolve_rows(table),
        });
        Ok(())
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Info { ref input }) => info(input),
        None => build(&cli),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn build(cli: &Cli) -> Result<()> {
    // Both positional paths are required before any parsing happens.
    let (input, output) = match (&cli.input, &cli.output) {
        (Some(input), Some(output)) => (input, output),
        _ => {
            return Err(deckmd::Error::Other(
                "usage: deckmd <INPUT> <OUTPUT>".to_string(),
            ))
        }
    };

    let mut builder = Deckmd::new();
    if cli.sequential {
        builder = builder.sequential();
    }
    if cli.strict_tables {
        builder = builder.strict_tables();
    }
    if let Some(theme_path) = &cli.theme {
        builder = builder.with_theme(load_theme(theme_path)?);
    }

    let result = builder.parse_file(input)?;
    let retained = result
        .deck()
        .slides
        .iter()
        .filter(|s| !s.is_empty())
        .count();

    let slides_dir = cli.slides_dir.clone().unwrap_or_else(|| {
        output
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("slides")
    });
    prepare_slides_dir(&slides_dir)?;

    let progress = ProgressBar::new(retained as u64);
    progress.set_style(
        ProgressStyle::with_template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} slides")
            .expect("valid progress template")
            .progress_chars("#>-"),
    );

    let mut renderer = ExportRenderer {
        slides_dir: slides_dir.clone(),
        progress: progress.clone(),
        tables: Vec::new(),
    };
    let deck = result.assemble(&mut renderer)?;
    progress.finish_and_clear();

    let manifest = Manifest {
        slides: &deck.slides,
        tables: &renderer.tables,
    };
    let json = if cli.compact {
        serde_json::to_string(&manifest)
    } else {
        serde_json::to_string_pretty(&manifest)
    }
    .map_err(deckmd::Error::from)?;
    fs::write(output, json)?;

    println!(
        "{} {}",
        "Generated:".green().bold(),
        output.display().to_string().bold()
    );
    println!("  Slides: {}", deck.slide_count());
    println!("  Tables: {}", renderer.tables.len());
    println!("  Slide markup in: {}", slides_dir.display());

    Ok(())
}

fn info(input: &Path) -> Result<()> {
    let deck = deckmd::parse_file(input)?;

    println!("{}", "Deck".bold());
    println!("  Slides (parsed):   {}", deck.slide_count());
    println!(
        "  Slides (retained): {}",
        deck.slides.iter().filter(|s| !s.is_empty()).count()
    );
    println!("  Tables:            {}", deck.table_count());

    for (i, slide) in deck.slides.iter().enumerate() {
        let title = if slide.title.is_empty() {
            "(untitled)".dimmed().to_string()
        } else {
            slide.title.clone()
        };
        let mut notes = Vec::new();
        if slide.has_tables() {
            notes.push(format!("{} table(s)", slide.tables.len()));
        }
        if slide.is_empty() {
            notes.push("empty".to_string());
        }
        let suffix = if notes.is_empty() {
            String::new()
        } else {
            format!(" [{}]", notes.join(", "))
        };
        println!("  {:>3}. {title}{suffix}", i + 1);
    }

    Ok(())
}

fn load_theme(path: &Path) -> Result<Theme> {
    let json = fs::read_to_string(path)?;
    Theme::from_json(&json)
}

/// Create the slides directory and clear any markup files from a previous
/// run so stale slides never linger next to fresh ones.
fn prepare_slides_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "html") {
            fs::remove_file(path)?;
        }
    }
    Ok(())
}
