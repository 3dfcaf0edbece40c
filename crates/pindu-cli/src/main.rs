use clap::Parser;
use tracing_subscriber::EnvFilter;

mod document;
mod export;

use self::export::{ExportArgs, ExportOutcome};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = ExportArgs::parse();
    match export::run(&args)? {
        ExportOutcome::Written(path) => {
            println!("Success! Text has been written to '{}'.", path.display());
        }
        ExportOutcome::EmptyInput => {
            println!(
                "No input text to lay out. Pass a text file or an inline text; see --help for help."
            );
        }
    }
    Ok(())
}
