//! Tests for the kernel data layouts.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use test_case::test_case;
use testvec::{
    golden,
    kernels::{Ivec8mul, Vtmac},
};

#[test]
fn ivec8mul_pinned() -> Result<(), String> {
    let data = Ivec8mul::generate(4, &mut ChaCha8Rng::seed_from_u64(42))?;

    assert_eq!(data.a, vec![-95, -75, -120, -58]);
    assert_eq!(data.b, vec![-116, 8, 82, -7]);
    assert_eq!(data.g, vec![12, -88, -112, -106]);
    assert_eq!(data.c, vec![0; 4]);

    let expected = "\
.section .data,\"aw\",@progbits
.global N
.balign 8
N:
    .word 0x00000004
    .word 0x00000000
.global a
.balign NR_LANES*4
a:
    .word 0xc688b5a1
.global b
.balign NR_LANES*4
b:
    .word 0xf952088c
.global c
.balign NR_LANES*4
c:
    .word 0x00000000
.global g
.balign NR_LANES*4
g:
    .word 0x9690a80c
";
    assert_eq!(data.to_asm().to_string(), expected);

    Ok(())
}

#[test]
fn ivec8mul_deterministic() -> Result<(), String> {
    let first = Ivec8mul::generate(1000, &mut ChaCha8Rng::seed_from_u64(42))?
        .to_asm()
        .to_string();
    let second = Ivec8mul::generate(1000, &mut ChaCha8Rng::seed_from_u64(42))?
        .to_asm()
        .to_string();
    assert_eq!(first, second);

    Ok(())
}

#[test_case(0)]
#[test_case(1)]
#[test_case(7)]
#[test_case(1024)]
fn ivec8mul_golden(n: usize) -> Result<(), String> {
    let data = Ivec8mul::generate(n, &mut ChaCha8Rng::seed_from_u64(n as u64))?;

    assert_eq!(data.len(), n);
    assert_eq!(data.g.len(), n);
    for ((&a, &b), &g) in data.a.iter().zip(&data.b).zip(&data.g) {
        let wide = (i32::from(a) * i32::from(b)).rem_euclid(256);
        let expected = if wide > 127 { wide - 256 } else { wide };
        assert_eq!(i32::from(g), expected);
    }

    assert_eq!(golden::first_mismatch(&data.g, &data.g, 0)?, None);
    if n > 0 {
        assert_eq!(golden::first_mismatch(&data.c, &data.g, 0)?.is_some(), data.g.iter().any(|&g| g != 0));
    }

    Ok(())
}

#[test]
fn ivec8mul_from_operands() -> Result<(), String> {
    let data = Ivec8mul::from_operands(vec![100, 2, -128], vec![100, -4, 1])?;
    assert_eq!(data.a, vec![100, 2, -128]);
    assert_eq!(data.b, vec![100, -4, 1]);
    assert_eq!(data.g, vec![16, -8, -128]);
    assert_eq!(data.c, vec![0, 0, 0]);

    assert_eq!(golden::first_mismatch(&data.c, &data.g, 0)?, Some(0));
    assert_eq!(golden::first_mismatch(&data.c[2..], &data.g[2..], 0)?, Some(0));

    Ok(())
}

#[test_case(vec![100, 2, 3], vec![100, -4]; "longer first")]
#[test_case(vec![1], vec![1, 2]; "longer second")]
#[test_case(vec![], vec![7]; "empty first")]
fn ivec8mul_mismatched_operands(a: Vec<i8>, b: Vec<i8>) {
    assert!(Ivec8mul::from_operands(a, b).is_err());
}

#[test]
fn ivec8mul_empty() -> Result<(), String> {
    let data = Ivec8mul::generate(0, &mut ChaCha8Rng::seed_from_u64(42))?;
    assert!(data.is_empty());

    let text = data.to_asm().to_string();
    assert_eq!(text.lines().filter(|l| l.contains(".word")).count(), 2);
    assert!(text.ends_with(".global g\n.balign NR_LANES*4\ng:\n"));

    Ok(())
}

#[test_case(1)]
#[test_case(5)]
#[test_case(1024)]
fn vtmac_layout(n: usize) -> Result<(), String> {
    let data = Vtmac::generate(n, &mut ChaCha8Rng::seed_from_u64(42), false)?;
    assert_eq!(data.len(), n);
    assert!(data.a.iter().chain(&data.b).all(|v| (0.0..1.0).contains(v)));
    assert!(data.result.iter().chain(&data.std_result).all(|&v| v == 0.0));

    let text = data.to_asm().to_string();
    let header = format!(
        ".section .data,\"aw\",@progbits\n.global N\n.section .sdata,\"aw\",@progbits\nN: .dword {n}\n.section .l2,\"aw\",@progbits\n.global a\n.balign NR_LANES*4\na:\n .word 0x"
    );
    assert!(text.starts_with(&header));
    assert_eq!(text.lines().filter(|l| l.starts_with(" .word 0x")).count(), 4 * 2 * n);

    let labels = text
        .lines()
        .filter(|l| l.ends_with(':'))
        .collect::<Vec<_>>();
    assert_eq!(labels, vec!["a:", "b:", "result:", "std_result:"]);

    Ok(())
}

#[test]
fn vtmac_fill_reference() -> Result<(), String> {
    let data = Vtmac::generate(256, &mut ChaCha8Rng::seed_from_u64(3), true)?;
    let expected = golden::multiply(&data.a, &data.b)?;

    assert_eq!(golden::first_mismatch(&data.std_result, &expected, 1e-2)?, None);
    for (&actual, &expected) in data.std_result.iter().zip(&expected) {
        float_cmp::assert_approx_eq!(f64, actual, expected, ulps = 0);
    }
    assert!(data.result.iter().all(|&v| v == 0.0));

    Ok(())
}

#[test]
fn vtmac_seeded_is_reproducible() -> Result<(), String> {
    let first = Vtmac::generate(64, &mut ChaCha8Rng::seed_from_u64(9), false)?;
    let second = Vtmac::generate(64, &mut ChaCha8Rng::seed_from_u64(9), false)?;
    assert_eq!(first, second);

    Ok(())
}
