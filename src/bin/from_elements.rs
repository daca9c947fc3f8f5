//! Convert atomic ids into concatenated element symbols.
//!
//! ```text
//! from_elements 32 8 9 9 75 39    # GeOFFReY
//! from_elements -i 1 1.2 1.3      # HDT
//! ```

use anyhow::Result;
use clap::Parser;
use element_spell::{atomic_ids::decode_ids, elements::periodic_table};

#[derive(Parser)]
#[command(about = "Convert atomic IDs to concatenated element symbols.")]
struct Cli {
    /// Enable Hydrogen isotope IDs: "1.2" (D) and "1.3" (T).
    #[arg(short, long)]
    isotopes: bool,

    /// Atomic IDs: 1..118 (and optionally "1.2"/"1.3" with --isotopes).
    #[arg(required = true)]
    ids: Vec<String>,
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
    let table = periodic_table(cli.isotopes);
    let symbols = decode_ids(&cli.ids, &table, cli.isotopes)?;
    println!("{symbols}");
    Ok(())
}
