//! Constants for the SEC 2 standard binary fields GF(2^m)

/// Structure containing the parameters of a standard binary field GF(2^m)
pub struct BinaryFieldParams {
    /// Extension degree m of the field
    pub degree: usize,

    /// Exponents of the nonzero terms of the reduction polynomial,
    /// in descending order; always includes `degree` and 0
    pub poly_terms: &'static [usize],

    /// Size of a serialized field element in bytes
    pub element_size: usize,
}

/// GF(2^163) parameters, reduction polynomial x^163 + x^7 + x^6 + x^3 + 1
/// (base field of sect163k1 and sect163r2)
pub const GF2_163: BinaryFieldParams = BinaryFieldParams {
    degree: 163,
    poly_terms: &[163, 7, 6, 3, 0],
    element_size: 21,
};

/// GF(2^233) parameters, reduction polynomial x^233 + x^74 + 1
/// (base field of sect233k1 and sect233r1)
pub const GF2_233: BinaryFieldParams = BinaryFieldParams {
    degree: 233,
    poly_terms: &[233, 74, 0],
    element_size: 30,
};

/// GF(2^283) parameters, reduction polynomial x^283 + x^12 + x^7 + x^5 + 1
/// (base field of sect283k1 and sect283r1)
pub const GF2_283: BinaryFieldParams = BinaryFieldParams {
    degree: 283,
    poly_terms: &[283, 12, 7, 5, 0],
    element_size: 36,
};

/// GF(2^409) parameters, reduction polynomial x^409 + x^87 + 1
/// (base field of sect409k1 and sect409r1)
pub const GF2_409: BinaryFieldParams = BinaryFieldParams {
    degree: 409,
    poly_terms: &[409, 87, 0],
    element_size: 52,
};

/// GF(2^571) parameters, reduction polynomial x^571 + x^10 + x^5 + x^2 + 1
/// (base field of sect571k1 and sect571r1)
pub const GF2_571: BinaryFieldParams = BinaryFieldParams {
    degree: 571,
    poly_terms: &[571, 10, 5, 2, 0],
    element_size: 72,
};
