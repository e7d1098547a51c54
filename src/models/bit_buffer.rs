//! Bitwise operations over byte buffers.
//!
//! Buffers are read in network order: byte 0 first and, inside each byte,
//! the most significant bit first. A 4-byte buffer therefore reads exactly
//! like the dotted-binary form of an IPv4 address.

use itertools::{Either, Itertools};

/// Bitwise AND of two buffers.
///
/// Buffers of unequal length are padded with zero bytes at the end (right
/// side) up to the longer length, so the result has the longer length.
pub fn and(a: &[u8], b: &[u8]) -> Vec<u8> {
    combine(a, b, |x, y| x & y)
}

/// Bitwise OR of two buffers, padding the shorter one at the end.
pub fn or(a: &[u8], b: &[u8]) -> Vec<u8> {
    combine(a, b, |x, y| x | y)
}

/// Bitwise XOR of two buffers, padding the shorter one at the end.
pub fn xor(a: &[u8], b: &[u8]) -> Vec<u8> {
    combine(a, b, |x, y| x ^ y)
}

/// Bitwise complement, same length as the input.
pub fn not(a: &[u8]) -> Vec<u8> {
    a.iter().map(|b| !b).collect()
}

fn combine(a: &[u8], b: &[u8], op: impl Fn(u8, u8) -> u8) -> Vec<u8> {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| {
            let x = a.get(i).copied().unwrap_or(0);
            let y = b.get(i).copied().unwrap_or(0);
            op(x, y)
        })
        .collect()
}

/// Iterate over the bits of a buffer.
///
/// With `from_left` the bits come in network order (byte 0, MSB first).
/// Otherwise they come in exactly the reverse order, starting at the least
/// significant bit of the last byte.
pub fn bit_stream(bits: &[u8], from_left: bool) -> impl Iterator<Item = bool> + '_ {
    let forward = bits
        .iter()
        .flat_map(|&byte| (0..8u32).rev().map(move |i| (byte >> i) & 1 == 1));
    if from_left {
        Either::Left(forward)
    } else {
        Either::Right(forward.rev())
    }
}

/// Number of consecutive bits equal to `value` at the start of the buffer.
pub fn count_leading(bits: &[u8], value: bool) -> usize {
    bit_stream(bits, true).take_while(|b| *b == value).count()
}

/// Number of consecutive bits equal to `value` at the end of the buffer.
pub fn count_trailing(bits: &[u8], value: bool) -> usize {
    bit_stream(bits, false).take_while(|b| *b == value).count()
}

/// True if the buffer is a run of 1s followed only by 0s.
///
/// All-zero and all-one buffers are valid masks; so is the empty buffer.
pub fn represents_valid_mask(bits: &[u8]) -> bool {
    count_leading(bits, true) + count_trailing(bits, false) == 8 * bits.len()
}

/// Render each byte as 8 binary digits with no separator.
pub fn to_binary_string(bits: &[u8]) -> String {
    bits.iter().map(|b| format!("{b:08b}")).join("")
}

/// Render each byte as 8 binary digits, bytes joined by `separator`.
pub fn to_binary_string_with(bits: &[u8], separator: char) -> String {
    bits.iter()
        .map(|b| format!("{b:08b}"))
        .join(&separator.to_string())
}

/// Render the bit stream with `separator` inserted every `group` bits.
///
/// A `group` of 0 disables the separator.
pub fn to_binary_string_grouped(bits: &[u8], separator: char, group: usize) -> String {
    let mut out = String::with_capacity(bits.len() * 9);
    for (i, bit) in bit_stream(bits, true).enumerate() {
        if group > 0 && i != 0 && i % group == 0 {
            out.push(separator);
        }
        out.push(if bit { '1' } else { '0' });
    }
    out
}
