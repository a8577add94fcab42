//! Example driving the GF(2^409) field engine
//!
//! Walks through every field operation with small literal elements, then
//! measures the average per-call latency of addition, multiplication, and
//! trace computation.

use gf2m::prelude::*;
use rand::rngs::OsRng;
use std::time::Instant;

fn show(gf: &BinaryField, label: &str, e: &FieldElement) {
    println!("{} = 0x{}", label, hex::encode(gf.to_bytes(e)));
}

fn main() -> Result<()> {
    let gf = BinaryField::from_poly_str(409, "x^409 + x^15 + x^6 + x + 1")?;
    println!("{}", gf);
    println!("Element size: {} bytes", gf.element_size());
    println!();

    // Identity elements
    show(&gf, "Zero (additive identity)", &gf.zero());
    show(&gf, "One (multiplicative identity)", &gf.one());

    let a = gf.element_from_u64(12345)?;
    let b = gf.element_from_u64(67890)?;
    let c = gf.element_from_u64(54321)?;

    // Addition
    show(&gf, "12345 + 67890", &gf.add(&a, &b));

    // Multiplication
    show(&gf, "67890 * 54321", &gf.mul(&b, &c));

    // Trace
    println!("Trace of 12345 = {}", gf.trace(&a));

    // Squaring and exponentiation
    show(&gf, "12345^2", &gf.square(&a));
    show(&gf, "12345^57", &gf.pow_u64(&a, 57));

    // Inverse, checked by multiplying back
    let inv = gf.inverse(&a)?;
    show(&gf, "12345^-1", &inv);
    assert_eq!(gf.mul(&a, &inv), gf.one());
    println!("12345 * 12345^-1 = 1 ✓");

    // Fixed-width binary encoding and round trip
    let bits = gf.to_binary(&a);
    println!("Binary representation of 12345 ({} digits):", bits.len());
    println!("{}", bits);
    assert_eq!(gf.from_binary(&bits)?, a);
    println!("Round trip through the bit string ✓");
    println!();

    // The same operations on a randomly chosen element
    let r = gf.random_element(&mut OsRng);
    show(&gf, "Random element r", &r);
    println!("Trace of r = {}", gf.trace(&r));
    let r_inv = gf.inverse(&r)?;
    assert_eq!(gf.mul(&r, &r_inv), gf.one());
    println!("r * r^-1 = 1 ✓");
    println!();

    // Average per-call latency over repeated invocations
    const ROUNDS: u32 = 1000;

    let start = Instant::now();
    for _ in 0..ROUNDS {
        let _ = gf.add(&a, &b);
    }
    let add_time = start.elapsed() / ROUNDS;

    let start = Instant::now();
    for _ in 0..ROUNDS {
        let _ = gf.mul(&a, &b);
    }
    let mul_time = start.elapsed() / ROUNDS;

    let start = Instant::now();
    for _ in 0..ROUNDS {
        let _ = gf.trace(&a);
    }
    let trace_time = start.elapsed() / ROUNDS;

    println!("Average time per call over {} rounds:", ROUNDS);
    println!("Addition:       {:?}", add_time);
    println!("Multiplication: {:?}", mul_time);
    println!("Trace:          {:?}", trace_time);

    Ok(())
}
