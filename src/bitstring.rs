//! # BitString
//!
//! Fixed-width binary codec for a vector of bounded real variables. A
//! [`BitString`] packs `groups` variables, each quantized into
//! `bits_per_group` bits, into one flat bit sequence. All variables share
//! the same `[min, max]` range; each group of bits is interpreted
//! most-significant-bit first.
//!
//! The decode mapping for a group with unsigned value `v` is
//! `min + (max - min) * v / (2^bits_per_group - 1)`, so the all-zero group
//! decodes to `min` and the all-one group to `max`. `encode` is the inverse
//! and rounds to the nearest representable value, keeping round-trips
//! within one quantization step.
//!
//! ## Example
//!
//! ```rust
//! use bitga::bitstring::BitString;
//! use bitga::rng::RandomNumberGenerator;
//!
//! let mut bits = BitString::new(8, 2, -5.12, 5.12).unwrap();
//! bits.randomize(&mut RandomNumberGenerator::from_seed(1));
//!
//! let decoded = bits.decode();
//! assert_eq!(decoded.len(), 2);
//! assert!(decoded.iter().all(|x| (-5.12..=5.12).contains(x)));
//! ```

use std::fmt;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// The widest group that still fits the unsigned decode accumulator.
const MAX_BITS_PER_GROUP: usize = 64;

/// A fixed-width binary encoding of `groups` bounded real variables.
///
/// Modeled as a value type composed of bit storage, bounds, and group
/// count. The bit storage is only reachable through operations that keep
/// the group alignment intact (single-bit access, whole-vector encode,
/// randomization).
#[derive(Debug, Clone, PartialEq)]
pub struct BitString {
    bits: Vec<u8>,
    min: f64,
    max: f64,
    groups: usize,
}

impl BitString {
    /// Creates an all-zero bitstring of `groups * bits_per_group` bits.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `bits_per_group` is zero or
    /// exceeds 64, `groups` is zero, or `min >= max`.
    pub fn new(bits_per_group: usize, groups: usize, min: f64, max: f64) -> Result<Self> {
        let out = Self {
            bits: vec![0; bits_per_group * groups],
            min,
            max,
            groups,
        };
        out.validate()?;
        Ok(out)
    }

    /// Creates a bitstring from an existing bit sequence.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the sequence length is not
    /// an exact multiple of `groups`, any entry is not 0 or 1, or the shape
    /// constraints of [`BitString::new`] are violated.
    pub fn from_bits(bits: Vec<u8>, min: f64, max: f64, groups: usize) -> Result<Self> {
        if bits.iter().any(|&b| b > 1) {
            return Err(GeneticError::Configuration(
                "Bit sequence entries must be 0 or 1".to_string(),
            ));
        }
        let out = Self {
            bits,
            min,
            max,
            groups,
        };
        out.validate()?;
        Ok(out)
    }

    fn validate(&self) -> Result<()> {
        if self.groups == 0 {
            return Err(GeneticError::Configuration(
                "Bitstring must have at least one group".to_string(),
            ));
        }
        if self.bits.len() % self.groups != 0 {
            return Err(GeneticError::Configuration(format!(
                "Bitstring length ({}) must be an exact multiple of the group count ({})",
                self.bits.len(),
                self.groups
            )));
        }
        let bits_per_group = self.bits.len() / self.groups;
        if bits_per_group == 0 || bits_per_group > MAX_BITS_PER_GROUP {
            return Err(GeneticError::Configuration(format!(
                "Bits per group must be in 1..={}, got {}",
                MAX_BITS_PER_GROUP, bits_per_group
            )));
        }
        if !(self.min < self.max) {
            return Err(GeneticError::Configuration(format!(
                "Lower bound ({}) must be less than upper bound ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Total number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// `true` when the bitstring holds no bits. Never the case for a
    /// validated instance; provided for API completeness.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of variables encoded in the bitstring.
    pub fn groups(&self) -> usize {
        self.groups
    }

    /// Number of bits backing each variable.
    pub fn bits_per_group(&self) -> usize {
        self.bits.len() / self.groups
    }

    /// Shared lower bound of every variable.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Shared upper bound of every variable.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// The largest unsigned value a group can hold, `2^bits_per_group - 1`.
    ///
    /// This is the normalizing denominator shared by `encode` and `decode`;
    /// it ties the codec's precision to the group width.
    pub fn max_full_size(&self) -> f64 {
        let bits_per_group = self.bits_per_group();
        if bits_per_group == MAX_BITS_PER_GROUP {
            u64::MAX as f64
        } else {
            ((1u64 << bits_per_group) - 1) as f64
        }
    }

    /// Returns the bit at `index`.
    pub fn get(&self, index: usize) -> u8 {
        self.bits[index]
    }

    /// Read-only view of the raw bit sequence.
    pub fn as_slice(&self) -> &[u8] {
        &self.bits
    }

    /// Sets the bit at `index`.
    pub fn set(&mut self, index: usize, bit: u8) {
        debug_assert!(bit <= 1);
        self.bits[index] = bit;
    }

    /// Toggles the bit at `index`.
    ///
    /// The codec keeps no derived state, so the flip itself invalidates
    /// nothing; owners caching fitness must invalidate their cache.
    pub fn flip(&mut self, index: usize) {
        self.bits[index] ^= 1;
    }

    /// Sets every bit independently and uniformly at random.
    pub fn randomize(&mut self, rng: &mut RandomNumberGenerator) {
        for bit in &mut self.bits {
            *bit = rng.gen_range(0..=1u8);
        }
    }

    /// Decodes the whole bit sequence into one real value per group.
    ///
    /// Every decoded value lies in `[min, max]` by construction.
    pub fn decode(&self) -> Vec<f64> {
        let bits_per_group = self.bits_per_group();
        (0..self.groups)
            .map(|g| self.decode_group(g * bits_per_group, bits_per_group))
            .collect()
    }

    fn decode_group(&self, start: usize, len: usize) -> f64 {
        let value = self.bits[start..start + len]
            .iter()
            .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit));
        // Normalizing before scaling keeps the result inside [min, max]
        // even at the rounding edges: the ratio is exactly 0.0 or 1.0 for
        // the all-zero and all-one groups.
        self.min + (self.max - self.min) * ((value as f64) / self.max_full_size())
    }

    /// Encodes one real value per group into the bit sequence, replacing
    /// its contents. Inverse of [`BitString::decode`] up to quantization.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Codec` if `values.len() != groups` or any
    /// value falls outside `[min, max]`.
    pub fn encode(&mut self, values: &[f64]) -> Result<()> {
        if values.len() != self.groups {
            return Err(GeneticError::Codec(format!(
                "Expected {} values to encode, got {}",
                self.groups,
                values.len()
            )));
        }
        for &v in values {
            if !(self.min..=self.max).contains(&v) {
                return Err(GeneticError::Codec(format!(
                    "Value {} is outside the encodable range [{}, {}]",
                    v, self.min, self.max
                )));
            }
        }
        let bits_per_group = self.bits_per_group();
        for (g, &v) in values.iter().enumerate() {
            let scaled = (v - self.min) / (self.max - self.min) * self.max_full_size();
            let mut int_val = scaled.round() as u64;
            let start = g * bits_per_group;
            for i in (0..bits_per_group).rev() {
                self.bits[start + i] = (int_val & 1) as u8;
                int_val >>= 1;
            }
        }
        Ok(())
    }

    /// Number of positions at which two bitstrings differ.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Codec` if the two bitstrings have different
    /// lengths.
    pub fn hamming_distance(&self, other: &Self) -> Result<usize> {
        if self.bits.len() != other.bits.len() {
            return Err(GeneticError::Codec(format!(
                "Cannot compare bitstrings of different lengths ({} vs {})",
                self.bits.len(),
                other.bits.len()
            )));
        }
        Ok(self
            .bits
            .iter()
            .zip(&other.bits)
            .filter(|(a, b)| a != b)
            .count())
    }

    /// Indices at which two bitstrings differ, in ascending order.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Codec` if the two bitstrings have different
    /// lengths.
    pub fn differing_indices(&self, other: &Self) -> Result<Vec<usize>> {
        if self.bits.len() != other.bits.len() {
            return Err(GeneticError::Codec(format!(
                "Cannot compare bitstrings of different lengths ({} vs {})",
                self.bits.len(),
                other.bits.len()
            )));
        }
        Ok(self
            .bits
            .iter()
            .zip(&other.bits)
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i)
            .collect())
    }
}

// Debugging aid only, not part of the codec contract.
impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}
