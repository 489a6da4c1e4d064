//! Course colour assignment.
//!
//! Maps a course name to a palette colour with a content hash, so the
//! same name always gets the same colour: across calls, across process
//! restarts, and regardless of which other courses exist.
//!
//! # Algorithm
//!
//! 1. SHA-256 over the UTF-8 bytes of the name.
//! 2. Read the 32-byte digest as one big-endian integer.
//! 3. Reduce modulo the palette size (10) and index [`Color::PALETTE`].
//!
//! Distinct names may share a colour. That is accepted.

use sha2::{Digest, Sha256};
use std::fmt::Debug;

use crate::models::Color;

/// Assigns a palette colour to a course name.
///
/// Implementations must be pure: the result depends on `name` only.
pub trait ColorAssigner: Send + Sync + Debug {
    /// Colour for a course name.
    fn color_for(&self, name: &str) -> Color;
}

/// Default assigner: SHA-256 of the name, reduced modulo the palette size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HashColorAssigner;

impl ColorAssigner for HashColorAssigner {
    fn color_for(&self, name: &str) -> Color {
        color_for(name)
    }
}

/// Colour for a course name using the default hash assignment.
pub fn color_for(name: &str) -> Color {
    let digest = Sha256::digest(name.as_bytes());
    Color::from_palette_index(digest_mod(&digest, Color::PALETTE.len()))
}

/// Big-endian digest bytes taken as a single integer, modulo `modulus`.
fn digest_mod(bytes: &[u8], modulus: usize) -> usize {
    bytes
        .iter()
        .fold(0usize, |acc, &b| (acc * 256 + b as usize) % modulus)
}
