//! Convert text into element symbols or atomic ids.
//!
//! ```text
//! to_elements Geoffrey            # 32 8 9 9 75 39
//! to_elements --full Geoffrey     # symbols, names and ids
//! to_elements -i Dsra             # prefers Ds Ra over D + S + Ra
//! ```
//!
//! With `--isotopes`, deuterium (`D`, `1.2`) and tritium (`T`, `1.3`) are
//! available but discouraged: a spelling without them wins whenever one
//! exists.

use anyhow::Result;
use clap::Parser;
use element_spell::{OutputMode, Speller};

#[derive(Parser)]
#[command(about = "Convert text to chemical element symbols or atomic IDs.")]
struct Cli {
    /// Output symbols, element names, and atomic IDs.
    #[arg(short, long)]
    full: bool,

    /// Enable Hydrogen isotopes: D -> "1.2", T -> "1.3".
    #[arg(short, long)]
    isotopes: bool,

    /// The text to convert.
    text: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let mode = if cli.full {
        OutputMode::Full
    } else {
        OutputMode::Ids
    };

    let speller = Speller::elements(cli.isotopes);
    let output = speller.convert(&cli.text, mode)?;
    println!("{output}");
    Ok(())
}
