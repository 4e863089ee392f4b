use std::collections::HashMap;

use crate::types::*;

#[derive(Clone, Debug)]
pub struct WordEntry {
    ///The word exactly as it was inserted
    pub text: String,

    /// A normalized version of the text (lowercased, letters only)
    pub norm: NormString,
}

///Map integers (indices correspond to WordId) to word entries; one entry per insertion,
///so duplicate insertions occupy distinct ids
pub type WordDecoder = Vec<WordEntry>;

///Maps exact word text to the id of its first insertion
pub type WordEncoder = HashMap<String, WordId>;
