use ibig::UBig;

///Each inserted word gets assigned an ID integer, carries no further meaning
pub type WordId = u64;

pub type CharIndexType = u8;

pub type CharType = u32;

///A normalized word: lowercased ASCII letters only, original relative order retained
pub type NormString = String;

///Size of the alphabet (ASCII a-z)
pub const ALPHABET_SIZE: CharIndexType = 26;

///One prime per letter of the alphabet, index 0 corresponds to 'a'
pub const PRIMES: &[CharType] = &[
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101,
];

///The anagram value: a bag-of-characters representation where each letter maps to a prime and
///the value is the product over all letters. Multiplication is commutative so all anagrams share
///one value, and unique factorization guarantees no other word does.
pub type AnaValue = UBig;
