use std::path::PathBuf;
use std::time::Instant;

use anyhow::anyhow;
use clap::Parser as ClapParser;
use erddl::generate_schema;

#[derive(clap::Parser)]
#[command(name = "erddl")]
#[command(about = "Mermaid ER diagram to DuckDB DDL generator", long_about = None)]
struct Cli {
    /// Path to the Markdown document containing the ER diagrams.
    #[arg(value_name = "INPUT", default_value = "er_diagram.md")]
    input: PathBuf,
    /// Path of the generated SQL file. Overwritten if it exists.
    #[arg(short, long, default_value = "schema.sql")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let now = Instant::now();

    env_logger::init();
    let cli = Cli::parse();

    let document = std::fs::read_to_string(&cli.input).map_err(|err| {
        anyhow!(
            "Failed to read input file {} due to error: {}",
            cli.input.display(),
            err
        )
    })?;

    let ddl = generate_schema(&document);

    std::fs::write(&cli.output, ddl).map_err(|err| {
        anyhow!(
            "Failed to write output file {} due to error: {}",
            cli.output.display(),
            err
        )
    })?;

    let elapsed = now.elapsed();
    log::info!("Wrote {} in {:.2?}", cli.output.display(), elapsed);

    Ok(())
}
