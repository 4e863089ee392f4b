extern crate ibig;
extern crate num_traits;

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufRead, BufReader};

pub mod anahash;
pub mod index;
pub mod types;
pub mod vocab;

pub use crate::anahash::*;
pub use crate::index::*;
pub use crate::types::*;
pub use crate::vocab::*;

///A dictionary of words indexed by anagram value. Given a query it returns every stored
///word whose letters are a rearrangement of the query's letters.
pub struct AnagramDict {
    pub decoder: WordDecoder,
    pub encoder: WordEncoder,

    ///The main index, mapping anagram values to instances
    pub index: AnaIndex,

    pub debug: bool,
}

impl AnagramDict {
    pub fn new(debug: bool) -> AnagramDict {
        AnagramDict {
            decoder: Vec::new(),
            encoder: HashMap::new(),
            index: HashMap::new(),
            debug,
        }
    }

    pub fn get_or_create_node<'a, 'b>(
        &'a mut self,
        anahash: &'b AnaValue,
        charcount: u16,
    ) -> &'a mut AnaIndexNode {
        if self.contains_key(anahash) {
            self.index.get_mut(anahash).expect("get_mut on node after check")
        } else {
            self.index.insert(
                anahash.clone(),
                AnaIndexNode {
                    instances: Vec::new(),
                    charcount,
                },
            );
            self.index.get_mut(anahash).expect("get_mut on node after insert")
        }
    }

    ///Insert a word into the dictionary, storing it under its anagram value.
    ///Words that normalize to nothing (no letters at all) are silently skipped.
    ///Duplicates accumulate rather than overwrite.
    pub fn insert(&mut self, word: &str) {
        let norm = word.normalize();
        if norm.is_empty() {
            return;
        }
        let anahash = norm.anahash();
        if self.debug {
            eprintln!(" -- Adding to dictionary: {} (norm={}, anavalue={})", word, norm, anahash);
        }
        let word_id = self.decoder.len() as WordId;
        if !self.encoder.contains_key(word) {
            self.encoder.insert(word.to_string(), word_id);
        }
        let charcount = norm.len() as u16;
        self.decoder.push(WordEntry {
            text: word.to_string(),
            norm,
        });
        let node = self.get_or_create_node(&anahash, charcount);
        node.instances.push(word_id);
    }

    ///Look up all anagrams of the query, delivering each stored word to the callback,
    ///in insertion order. Queries that normalize to nothing yield no calls. Never mutates.
    pub fn lookup<F>(&self, query: &str, mut emit: F)
    where
        F: FnMut(&str),
    {
        let norm = query.normalize();
        if norm.is_empty() {
            return;
        }
        if let Some(node) = self.index.get(&norm.anahash()) {
            for word_id in node.instances.iter() {
                emit(&self.decoder.get(*word_id as usize).expect("word from decoder").text);
            }
        }
    }

    ///Get all anagram instances for a query, in insertion order
    pub fn get_anagram_instances(&self, text: &str) -> Vec<&WordEntry> {
        let anavalue = text.anahash();
        let mut instances: Vec<&WordEntry> = Vec::new();
        if let Some(node) = self.index.get(&anavalue) {
            for word_id in node.instances.iter() {
                instances.push(self.decoder.get(*word_id as usize).expect("word from decoder"));
            }
        }
        instances
    }

    ///Get an exact item in the dictionary (if it exists), resolving to its first insertion
    pub fn get(&self, text: &str) -> Option<&WordEntry> {
        self.encoder
            .get(text)
            .and_then(|word_id| self.decoder.get(*word_id as usize))
    }

    ///Tests if the dictionary has a specific entry, by exact text
    pub fn has(&self, text: &str) -> bool {
        self.encoder.contains_key(text)
    }

    ///Resolves a word ID
    pub fn get_word(&self, word_id: WordId) -> Option<&WordEntry> {
        self.decoder.get(word_id as usize)
    }

    pub fn contains_key(&self, key: &AnaValue) -> bool {
        self.index.contains_key(key)
    }

    ///Total number of insertions, duplicates included
    pub fn word_count(&self) -> usize {
        self.decoder.len()
    }

    ///Number of distinct anagram values in the index
    pub fn anagram_count(&self) -> usize {
        self.index.len()
    }

    ///Number of distinct anagram values per normalized word length
    pub fn length_distribution(&self) -> BTreeMap<u16, usize> {
        let mut distribution: BTreeMap<u16, usize> = BTreeMap::new();
        for node in self.index.values() {
            *distribution.entry(node.charcount).or_insert(0) += 1;
        }
        distribution
    }

    ///Read a wordlist from a plain-text file and insert every word.
    ///One word per line, empty lines are skipped.
    pub fn read_wordlist(&mut self, filename: &str) -> Result<(), std::io::Error> {
        if self.debug {
            eprintln!("Reading wordlist from {}...", filename);
        }
        let f = File::open(filename)?;
        let f_buffer = BufReader::new(f);
        for line in f_buffer.lines() {
            if let Ok(line) = line {
                if !line.is_empty() {
                    self.insert(&line);
                }
            }
        }
        if self.debug {
            eprintln!(" - Read wordlist, dictionary now holds {} words", self.decoder.len());
        }
        Ok(())
    }
}
