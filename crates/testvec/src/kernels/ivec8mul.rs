//! Elementwise multiplication of 8-bit signed integers.

use rand::Rng;

use crate::{golden, random_data, Alignment, AsmFile, Section};

/// Inputs and expected output for the `ivec8mul` kernel, `c = a * b` with
/// 8-bit wraparound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ivec8mul {
    /// The first operand.
    pub a: Vec<i8>,
    /// The second operand.
    pub b: Vec<i8>,
    /// Zeroed space for the kernel to write its result.
    pub c: Vec<i8>,
    /// The golden result.
    pub g: Vec<i8>,
}

impl Ivec8mul {
    /// Draws `a` and then `b` uniformly from `[-128, 127]` and computes the
    /// golden product.
    ///
    /// # Errors
    ///
    /// * If the golden product cannot be computed.
    pub fn generate<R: Rng>(n: usize, rng: &mut R) -> Result<Self, String> {
        let a = random_data::random_full_range_i8(n, rng);
        let b = random_data::random_full_range_i8(n, rng);
        Self::from_operands(a, b)
    }

    /// Builds the data set from given operands.
    ///
    /// # Errors
    ///
    /// * If `a` and `b` have different lengths.
    pub fn from_operands(a: Vec<i8>, b: Vec<i8>) -> Result<Self, String> {
        let g = golden::multiply(&a, &b)?;
        let c = vec![0; a.len()];
        Ok(Self { a, b, c, g })
    }

    /// The vector length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.a.len()
    }

    /// Whether the vectors are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Lays out `N`, `a`, `b`, `c` and `g` in `.data`.
    #[must_use]
    pub fn to_asm(&self) -> AsmFile {
        let lanes = Alignment::expr(super::LANE_ALIGNMENT);
        let mut asm = AsmFile::new();
        asm.section(Section::Data)
            .symbol("N", &[self.len() as u64], Alignment::default())
            .symbol("a", &self.a, lanes.clone())
            .symbol("b", &self.b, lanes.clone())
            .symbol("c", &self.c, lanes.clone())
            .symbol("g", &self.g, lanes);
        asm
    }
}
