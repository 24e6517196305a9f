#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![doc = include_str!("../README.md")]

pub mod asm;
pub mod golden;
pub mod kernels;
pub mod number;
pub mod random_data;

pub use asm::{Alignment, AsmFile, Directive, Section};
pub use number::Element;

/// The version of the crate.
pub const VERSION: &str = "0.1.0";
