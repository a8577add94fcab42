//! Binary extension field arithmetic
//!
//! This crate implements arithmetic over GF(2^m), the binary extension
//! fields used by binary elliptic curves and error-correcting codes.
//! A field is described once by its degree and irreducible reduction
//! polynomial; every operation is then a pure function of that immutable
//! descriptor and its operands.
//!
//! The implementation is not constant-time. It is intended for protocol
//! plumbing, test tooling, and education, not for processing secret key
//! material. The library is designed to be usable in both `std` and
//! `no_std` environments (the field engine itself requires `alloc`).

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Field engine
#[cfg(feature = "alloc")]
pub mod field;
#[cfg(feature = "alloc")]
pub use field::{BinaryField, FieldElement};
