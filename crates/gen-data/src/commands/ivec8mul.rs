//! Test data for 8-bit vector multiplication.

use std::io::Write;

use clap::Parser;
use rand::SeedableRng;
use testvec::{kernels::Ivec8mul, Element};

/// Generate input data for 8-bit vector multiplication.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The vector length.
    #[arg(default_value_t = testvec::kernels::DEFAULT_LEN)]
    pub n: usize,

    /// The random seed to use.
    #[arg(short('s'), long, default_value = "42")]
    pub seed: u64,
}

/// Generates the operands and golden product and writes them to `out`.
///
/// Returns the number of `.word` lines written.
///
/// # Errors
///
/// - If writing to `out` fails.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<usize, String> {
    ftlog::info!("Seed: {}", args.seed);
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(args.seed);

    ftlog::info!("Generating {} elements of type {}...", args.n, i8::type_name());
    let data = Ivec8mul::generate(args.n, &mut rng)?;

    super::write_asm(&data.to_asm(), out)
}
