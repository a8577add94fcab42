//! GF(2^m) Binary Extension Field Arithmetic
//!
//! This module implements arithmetic in the binary extension field
//! GF(2^m) for a fixed irreducible reduction polynomial, e.g. the
//! sect409k1 base field GF(2^409) with polynomial x^409 + x^87 + 1.
//! Elements are polynomials over GF(2) of degree below m, stored as
//! little-endian 64-bit limbs; addition is XOR, multiplication is
//! shift-and-reduce modulo the reduction polynomial, and inversion uses
//! Fermat's little theorem.
//!
//! A [`BinaryField`] descriptor is built once from the degree and the
//! polynomial's nonzero terms. It is read-only afterwards, so a single
//! descriptor may be shared freely across threads. Operations are not
//! constant-time.

mod element;
mod poly;

pub use element::FieldElement;

use crate::error::{validate, Error, Result};
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use rand::RngCore;

/// Descriptor of a binary extension field GF(2^m)
///
/// Holds the extension degree and the reduction polynomial as an
/// `(m+1)`-bit mask. Construction verifies that the polynomial is monic of
/// degree m with a nonzero constant term; irreducibility is a caller
/// obligation and is not checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryField {
    /// Extension degree m
    m: usize,
    /// Reduction polynomial as a little-endian limb mask, bit i set when
    /// the coefficient of x^i is 1
    poly: Vec<u64>,
    /// Limb count of every element of this field: m/64 + 1
    words: usize,
}

impl BinaryField {
    /// Create a field descriptor from the reduction polynomial's term
    /// exponents, e.g. `BinaryField::new(409, &[409, 87, 0])`.
    ///
    /// Fails with [`Error::InvalidPolynomial`] if `m` is zero, a term
    /// exceeds `m`, or the degree-m or constant term is absent.
    pub fn new(m: usize, terms: &[usize]) -> Result<Self> {
        let mask = poly::mask_from_terms(m, terms)?;
        Ok(BinaryField {
            m,
            poly: mask,
            words: m / 64 + 1,
        })
    }

    /// Create a field descriptor from the human-readable polynomial form,
    /// e.g. `BinaryField::from_poly_str(409, "x^409 + x^87 + 1")`.
    ///
    /// The string is parsed once here; the bit mask is cached in the
    /// descriptor for the lifetime of the field.
    pub fn from_poly_str(m: usize, s: &str) -> Result<Self> {
        let terms = poly::parse_terms(s)?;
        Self::new(m, &terms)
    }

    /// Extension degree m of this field
    pub fn degree(&self) -> usize {
        self.m
    }

    /// Size of a serialized field element in bytes: ceil(m/8)
    pub fn element_size(&self) -> usize {
        (self.m + 7) / 8
    }

    /// Exponents of the nonzero terms of the reduction polynomial, in
    /// descending order
    pub fn polynomial_terms(&self) -> Vec<usize> {
        (0..=self.m)
            .rev()
            .filter(|&i| (self.poly[i / 64] >> (i % 64)) & 1 == 1)
            .collect()
    }

    /// The additive identity element: 0
    pub fn zero(&self) -> FieldElement {
        FieldElement::zeroed(self.words)
    }

    /// The multiplicative identity element: 1
    pub fn one(&self) -> FieldElement {
        let mut e = FieldElement::zeroed(self.words);
        e.limbs[0] = 1;
        e
    }

    /// Create a field element from an unsigned integer value
    ///
    /// Fails with [`Error::OutOfRange`] if the value has coefficient bits
    /// at position m or above.
    pub fn element_from_u64(&self, value: u64) -> Result<FieldElement> {
        validate::range(self.m >= 64 || value >> self.m == 0, "field element")?;
        let mut e = FieldElement::zeroed(self.words);
        e.limbs[0] = value;
        Ok(e)
    }

    /// Create a field element from big-endian bytes
    ///
    /// Expects exactly [`element_size`](Self::element_size) bytes and a
    /// value below 2^m; fails with [`Error::Length`] or
    /// [`Error::OutOfRange`] otherwise.
    pub fn element_from_bytes(&self, bytes: &[u8]) -> Result<FieldElement> {
        validate::length("field element", bytes.len(), self.element_size())?;

        let mut e = FieldElement::zeroed(self.words);
        for (i, &byte) in bytes.iter().rev().enumerate() {
            e.limbs[i / 8] |= (byte as u64) << (8 * (i % 8));
        }
        validate::range(self.in_range(&e), "field element")?;
        Ok(e)
    }

    /// Convert a field element to big-endian bytes of fixed length
    /// [`element_size`](Self::element_size)
    pub fn to_bytes(&self, a: &FieldElement) -> Vec<u8> {
        debug_assert_eq!(a.limbs.len(), self.words);
        let size = self.element_size();
        let mut out = vec![0u8; size];
        for i in 0..size {
            out[size - 1 - i] = (a.limbs[i / 8] >> (8 * (i % 8))) as u8;
        }
        out
    }

    /// Generate a uniformly random field element
    pub fn random_element<R: RngCore>(&self, rng: &mut R) -> FieldElement {
        let mut bytes = vec![0u8; self.element_size()];
        rng.fill_bytes(&mut bytes);
        // Mask away the bits above m-1 in the leading byte
        bytes[0] &= self.top_byte_mask();
        self.element_from_bytes(&bytes)
            .expect("masked bytes are always in range")
    }

    /// Parse a field element from an MSB-first bit string of exactly m
    /// '0'/'1' characters
    ///
    /// Fails with [`Error::InvalidEncoding`] on a wrong length or any
    /// non-binary character.
    pub fn from_binary(&self, bits: &str) -> Result<FieldElement> {
        validate::encoding(bits.len() == self.m, "bit string", "wrong length")?;

        let mut e = FieldElement::zeroed(self.words);
        for (i, &ch) in bits.as_bytes().iter().enumerate() {
            match ch {
                b'0' => {}
                b'1' => e.set_bit(self.m - 1 - i),
                _ => {
                    return Err(Error::InvalidEncoding {
                        context: "bit string",
                        reason: "non-binary character",
                    })
                }
            }
        }
        Ok(e)
    }

    /// Render a field element as an MSB-first bit string, zero-padded to
    /// exactly m characters
    pub fn to_binary(&self, a: &FieldElement) -> String {
        debug_assert_eq!(a.limbs.len(), self.words);
        let mut out = String::with_capacity(self.m);
        for i in (0..self.m).rev() {
            out.push(if a.bit(i) { '1' } else { '0' });
        }
        out
    }

    /// Field addition: a + b
    ///
    /// XOR of the coefficient vectors. Commutative, associative, and
    /// self-inverse: `add(a, a)` is zero for every a.
    pub fn add(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        debug_assert_eq!(a.limbs.len(), self.words);
        let mut sum = a.clone();
        sum.xor_assign(&b.limbs);
        sum
    }

    /// Field multiplication: a * b modulo the reduction polynomial
    ///
    /// Shift-and-reduce: walk the bits of b from least to most
    /// significant, XOR-accumulating the current shifted copy of a for
    /// each set bit; the copy is multiplied by x each round and reduced
    /// whenever its degree reaches m. Shifts and XORs are word-parallel
    /// over the limbs.
    pub fn mul(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        debug_assert_eq!(a.limbs.len(), self.words);
        debug_assert_eq!(b.limbs.len(), self.words);

        let mut acc = FieldElement::zeroed(self.words);
        let mut shifted = a.clone();
        for i in 0..b.bit_len() {
            if b.bit(i) {
                acc.xor_assign(&shifted.limbs);
            }
            shifted.shl1_assign();
            if shifted.bit(self.m) {
                shifted.xor_assign(&self.poly);
            }
        }
        acc
    }

    /// Field squaring: a * a
    pub fn square(&self, a: &FieldElement) -> FieldElement {
        self.mul(a, a)
    }

    /// Exponentiation by square-and-multiply, exponent as big-endian bytes
    ///
    /// `pow(a, &[])` and a zero exponent both return one, for every a
    /// including zero.
    pub fn pow(&self, a: &FieldElement, exponent: &[u8]) -> FieldElement {
        let mut result = self.one();
        let mut base = a.clone();
        for byte in exponent.iter().rev() {
            for i in 0..8 {
                if (byte >> i) & 1 == 1 {
                    result = self.mul(&result, &base);
                }
                base = self.square(&base);
            }
        }
        result
    }

    /// Exponentiation with a machine-word exponent
    pub fn pow_u64(&self, a: &FieldElement, exponent: u64) -> FieldElement {
        self.pow(a, &exponent.to_be_bytes())
    }

    /// Multiplicative inverse via Fermat's little theorem:
    /// a^(2^m - 2)
    ///
    /// Fails with [`Error::DivisionByZero`] for the zero element, which
    /// has no inverse.
    pub fn inverse(&self, a: &FieldElement) -> Result<FieldElement> {
        if a.is_zero() {
            return Err(Error::DivisionByZero);
        }

        // 2^m - 2 as big-endian bytes: every coefficient bit set except bit 0
        let size = self.element_size();
        let mut exponent = vec![0xFFu8; size];
        exponent[0] = self.top_byte_mask();
        exponent[size - 1] &= 0xFE;
        Ok(self.pow(a, &exponent))
    }

    /// Field trace: the GF(2)-linear sum of the Frobenius conjugates
    /// a + a^2 + a^4 + ... + a^(2^(m-1)), always 0 or 1
    pub fn trace(&self, a: &FieldElement) -> u8 {
        let mut acc = a.clone();
        let mut conjugate = a.clone();
        for _ in 1..self.m {
            conjugate = self.square(&conjugate);
            acc.xor_assign(&conjugate.limbs);
        }
        (acc.limbs[0] & 1) as u8
    }

    /// Mask for the leading serialized byte: keeps the m % 8 low bits
    /// (all eight when m is a multiple of 8)
    fn top_byte_mask(&self) -> u8 {
        match self.m % 8 {
            0 => 0xFF,
            r => (1 << r) - 1,
        }
    }

    /// Check that no coefficient bit at position m or above is set
    fn in_range(&self, e: &FieldElement) -> bool {
        e.limbs[self.words - 1] >> (self.m % 64) == 0
    }
}

impl fmt::Display for BinaryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF(2^{}) with reduction polynomial ", self.m)?;
        let mut first = true;
        for i in (0..=self.m).rev() {
            if (self.poly[i / 64] >> (i % 64)) & 1 == 1 {
                if !first {
                    write!(f, " + ")?;
                }
                match i {
                    0 => write!(f, "1")?,
                    1 => write!(f, "x")?,
                    _ => write!(f, "x^{}", i)?,
                }
                first = false;
            }
        }
        Ok(())
    }
}
