//! Writes `ivec8mul` test data to stdout, e.g. `ivec8mul-data 4096 > data.S`.

use clap::Parser;

use gen_data::commands::ivec8mul::{run, Args};

fn main() -> Result<(), String> {
    let args = Args::parse();

    let _guard = gen_data::configure_logger()?;
    ftlog::info!("{args:?}");

    let mut out = std::io::BufWriter::new(std::io::stdout().lock());
    let num_words = run(&args, &mut out)?;
    ftlog::info!("Wrote {num_words} words.");

    Ok(())
}
