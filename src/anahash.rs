use ibig::UBig;
use num_traits::{One, Zero};

use crate::types::*;

///Trait for objects that can be anahashed (string-like)
pub trait Anahashable {
    fn anahash(&self) -> AnaValue;
    fn normalize(&self) -> NormString;
}

impl Anahashable for str {
    ///Compute the anahash for a given string: the product of one prime per letter.
    ///Characters outside the alphabet are simply not represented in the value.
    fn anahash(&self) -> AnaValue {
        let mut hash: AnaValue = AnaValue::empty();
        for c in self.chars() {
            if c.is_ascii_alphabetic() {
                let charvalue = AnaValue::character(char_index(c));
                hash = hash.insert(&charvalue);
            }
        }
        hash
    }

    ///Normalize a string: keep only ASCII letters, lowercased, in their original relative order
    fn normalize(&self) -> NormString {
        let mut result = String::with_capacity(self.len());
        for c in self.chars() {
            if c.is_ascii_alphabetic() {
                result.push(c.to_ascii_lowercase());
            }
        }
        result
    }
}

///Index of a letter in the alphabet, case insensitive. Caller must ensure the
///character is ASCII alphabetic.
pub fn char_index(c: char) -> CharIndexType {
    c.to_ascii_lowercase() as CharIndexType - b'a'
}

/// This trait can be applied to types
/// that can function as anahashes.
/// It can be implemented for integer types.
pub trait Anahash: One + Zero {
    fn character(seqnr: CharIndexType) -> AnaValue;
    fn empty() -> AnaValue;
    fn is_empty(&self) -> bool;
    fn insert(&self, value: &AnaValue) -> AnaValue;
}

impl Anahash for AnaValue {
    /// Computes the anagram value for the n'th letter in the alphabet
    fn character(seqnr: CharIndexType) -> AnaValue {
        UBig::from(PRIMES[seqnr as usize])
    }

    /// Insert the characters represented by the anagram value, returning the result
    fn insert(&self, value: &AnaValue) -> AnaValue {
        if self == &AnaValue::zero() {
            value.clone()
        } else {
            self * value
        }
    }

    /// The value of an empty anahash
    fn empty() -> AnaValue {
        AnaValue::one()
    }

    /// Tests whether this is the value of an empty anahash
    fn is_empty(&self) -> bool {
        self == &AnaValue::empty() || self == &AnaValue::zero()
    }
}
