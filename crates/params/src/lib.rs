//! Parameter constants for standard binary extension fields
//!
//! This crate holds the degrees and reduction polynomials of the SEC 2
//! binary fields as plain constants. It performs no arithmetic and has no
//! dependencies, so it is always usable in `no_std` environments.

#![no_std]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod binary;

pub use binary::{
    BinaryFieldParams, GF2_163, GF2_233, GF2_283, GF2_409, GF2_571,
};
