//! # gf2m
//!
//! Arithmetic over the binary extension fields GF(2^m).
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! gf2m = "0.1"
//! ```
//!
//! Describe a field once, then use it from as many threads as you like:
//!
//! ```
//! use gf2m::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let gf = BinaryField::new(GF2_409.degree, GF2_409.poly_terms)?;
//!     let a = gf.element_from_u64(12345)?;
//!     let b = gf.element_from_u64(67890)?;
//!
//!     let product = gf.mul(&a, &b);
//!     let inverse = gf.inverse(&a)?;
//!     assert_eq!(gf.mul(&a, &inverse), gf.one());
//!     assert!(gf.trace(&product) <= 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from two
//! sub-crates:
//!
//! - [`gf2m-algorithms`](gf2m_algorithms): the field engine (element
//!   representation, arithmetic, trace, serialization)
//! - [`gf2m-params`](gf2m_params): parameter constants for the SEC 2
//!   standard binary fields

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use gf2m_params as params;

pub use gf2m_algorithms as algorithms;

/// Common imports for gf2m users
pub mod prelude {
    // Re-export error types
    pub use crate::algorithms::{Error, Result};

    // Re-export the field engine
    #[cfg(any(feature = "std", feature = "alloc"))]
    pub use crate::algorithms::{BinaryField, FieldElement};

    // Re-export the standard field parameters
    pub use crate::params::{
        BinaryFieldParams, GF2_163, GF2_233, GF2_283, GF2_409, GF2_571,
    };
}
