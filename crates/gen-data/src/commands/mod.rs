//! One module per kernel, each with its arguments and its entry point.

pub mod ivec8mul;
pub mod vtmac;

use std::io::Write;

use testvec::AsmFile;

/// Writes `asm` to `out` and flushes it, returning the number of `.word`
/// lines written.
fn write_asm<W: Write>(asm: &AsmFile, out: &mut W) -> Result<usize, String> {
    ftlog::info!(
        "Writing {} directives with {} words...",
        asm.directives().len(),
        asm.num_words()
    );
    asm.write_to(out)?;
    out.flush().map_err(|e| e.to_string())?;
    Ok(asm.num_words())
}
