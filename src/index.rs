use std::collections::HashMap;

use crate::types::*;

///A node in the anagram index, holding all insertions that instantiate one anagram value
#[derive(Debug)]
pub struct AnaIndexNode {
    ///Word ids in insertion order; duplicate insertions yield duplicate ids
    pub instances: Vec<WordId>,
    ///Number of characters in the normalized form shared by all instances
    pub charcount: u16,
}

///The main index, mapping anagram values to instances
pub type AnaIndex = HashMap<AnaValue, AnaIndexNode>;
