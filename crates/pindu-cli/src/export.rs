use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use pindu_core::annotate_segment;
use pindu_dictionary::CedictIndex;
use pindu_layout::{LayoutConfig, LayoutEngine, segments};

use crate::document::PlacementDocument;

/// Lay out a Chinese text with per-character pinyin into a paged
/// placement document.
#[derive(Debug, Parser)]
#[command(name = "pindu")]
pub struct ExportArgs {
    /// Path to a text file with the Chinese input text
    #[arg(long)]
    pub input_file: Option<PathBuf>,

    /// Chinese input text passed directly on the command line
    #[arg(long, default_value = "")]
    pub input_text: String,

    /// Headline placed centered on the first page
    #[arg(long, default_value = "")]
    pub headline: String,

    /// Output name; the placement document is written to `<output>.json`
    #[arg(long, default_value = "OutputFile")]
    pub output: String,

    /// Path to the dictionary resource file
    #[arg(long, default_value = "res/cedict.itp")]
    pub dictionary: PathBuf,

    /// Start a new line whenever a new sentence starts
    #[arg(long)]
    pub sentence_per_line: bool,

    /// Extra large glyphs for increased visibility
    #[arg(long)]
    pub large_text: bool,
}

#[derive(Debug)]
pub enum ExportOutcome {
    Written(PathBuf),
    /// No usable input text; informational, not an error. No file is
    /// produced.
    EmptyInput,
}

pub fn run(args: &ExportArgs) -> anyhow::Result<ExportOutcome> {
    let index = CedictIndex::load(&args.dictionary)
        .with_context(|| format!("failed to load dictionary '{}'", args.dictionary.display()))?;

    let text = resolve_input(args);
    if text.is_empty() {
        tracing::warn!("No usable input text, nothing to export");
        return Ok(ExportOutcome::EmptyInput);
    }

    let base = if args.large_text {
        LayoutConfig::large_text()
    } else {
        LayoutConfig::a4()
    };
    let config = LayoutConfig {
        split_on_sentence: args.sentence_per_line,
        ..base
    };
    let mut engine = LayoutEngine::new(config.clone())?;
    let mut document = PlacementDocument::new(args.headline.clone());

    engine.place_headline(&args.headline, &mut document);
    for segment in segments(&text, config.split_on_sentence) {
        if segment.is_empty() {
            continue;
        }
        let chars = annotate_segment(segment, &index, &index, &config.ignored_for_romanization);
        engine.place_segment(&chars, &mut document);
    }

    let path = output_path(&args.output);
    document.save(&path)
        .with_context(|| format!("failed to write '{}'", path.display()))?;
    tracing::info!(
        "Wrote {} pages to {}",
        document.page_count(),
        path.display()
    );
    Ok(ExportOutcome::Written(path))
}

/// A readable input file wins over inline text; an unreadable file
/// degrades to the inline text with a warning rather than aborting.
fn resolve_input(args: &ExportArgs) -> String {
    if let Some(path) = &args.input_file {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                tracing::info!("Text file found, text loaded");
                return text;
            }
            Err(e) => {
                tracing::warn!("Could not read input file '{}': {e}", path.display());
            }
        }
    }
    args.input_text.clone()
}

fn output_path(output: &str) -> PathBuf {
    Path::new(output).with_extension("json")
}
