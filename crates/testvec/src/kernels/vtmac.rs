//! Elementwise multiplication of doubles, checked against the custom `vtmac`
//! instruction.

use rand::Rng;

use crate::{golden, random_data, Alignment, AsmFile, Section};

/// Inputs and result buffers for the `vtmac` kernel.
///
/// The test program computes its own reference with `vfmul.vv` into
/// `std_result`, so both buffers are zeroed unless the reference is filled in
/// explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Vtmac {
    /// The first operand.
    pub a: Vec<f64>,
    /// The second operand.
    pub b: Vec<f64>,
    /// Zeroed space for the `vtmac` result.
    pub result: Vec<f64>,
    /// Space for the standard multiplication result, or the reference product.
    pub std_result: Vec<f64>,
}

impl Vtmac {
    /// Draws `a` and then `b` uniformly from `[0, 1)`.
    ///
    /// When `fill_reference` is set, `std_result` holds `a * b` instead of
    /// zeros.
    ///
    /// # Errors
    ///
    /// * If the reference product cannot be computed.
    pub fn generate<R: Rng>(n: usize, rng: &mut R, fill_reference: bool) -> Result<Self, String> {
        let a = random_data::random_unit_floats(n, rng);
        let b = random_data::random_unit_floats(n, rng);
        let std_result = if fill_reference {
            golden::multiply(&a, &b)?
        } else {
            vec![0.0; n]
        };
        Ok(Self {
            a,
            b,
            result: vec![0.0; n],
            std_result,
        })
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

    /// Lays out `N` in `.sdata` and the four vectors in `.l2`.
    #[must_use]
    pub fn to_asm(&self) -> AsmFile {
        let lanes = Alignment::expr(super::LANE_ALIGNMENT);
        let mut asm = AsmFile::new().with_indent(" ");
        asm.section(Section::Data)
            .global("N")
            .section(Section::SmallData)
            .dword("N", self.len() as u64)
            .section(Section::Custom(".l2".to_string()))
            .symbol("a", &self.a, lanes.clone())
            .symbol("b", &self.b, lanes.clone())
            .symbol("result", &self.result, lanes.clone())
            .symbol("std_result", &self.std_result, lanes);
        asm
    }
}
