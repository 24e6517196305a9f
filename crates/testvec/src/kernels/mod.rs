//! Data layouts for the vector kernels under test.
//!
//! Each kernel owns its input, placeholder and golden vectors and knows how
//! its test program expects them to be laid out in memory.

mod ivec8mul;
mod vtmac;

pub use ivec8mul::Ivec8mul;
pub use vtmac::Vtmac;

/// The default vector length.
pub const DEFAULT_LEN: usize = 1024;

/// Alignment of the vector operands, resolved against the lane count of the
/// target when the data file is assembled.
pub const LANE_ALIGNMENT: &str = "NR_LANES*4";
