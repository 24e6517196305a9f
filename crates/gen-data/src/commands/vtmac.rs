//! Test data for the `vtmac` custom instruction.

use std::io::Write;

use clap::Parser;
use rand::SeedableRng;
use testvec::{kernels::Vtmac, Element};

/// Generate input data for the vtmac kernel.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The vector length.
    #[arg(default_value_t = testvec::kernels::DEFAULT_LEN)]
    pub n: usize,

    /// The random seed to use. Without one, the generator is seeded from
    /// the operating system and every run differs.
    #[arg(short('s'), long)]
    pub seed: Option<u64>,

    /// Fill `std_result` with the reference product instead of zeros.
    #[arg(long, default_value_t = false)]
    pub fill_reference: bool,
}

/// Generates the operands and result buffers and writes them to `out`.
///
/// Returns the number of `.word` lines written.
///
/// # Errors
///
/// - If writing to `out` fails.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<usize, String> {
    let mut rng = if let Some(seed) = args.seed {
        ftlog::info!("Seed: {seed}");
        rand_chacha::ChaCha8Rng::seed_from_u64(seed)
    } else {
        ftlog::info!("No seed given. Seeding from entropy.");
        rand_chacha::ChaCha8Rng::from_entropy()
    };

    ftlog::info!("Generating {} elements of type {}...", args.n, f64::type_name());
    let data = Vtmac::generate(args.n, &mut rng, args.fill_reference)?;

    super::write_asm(&data.to_asm(), out)
}
