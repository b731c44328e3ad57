use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::WORD_LENGTH;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

/// Five lowercase ascii letters.
pub fn is_valid_word(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.bytes().all(|b| b.is_ascii_lowercase())
}

/// Trim and lowercase a line, keeping it only if it is a playable word.
fn normalize(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    is_valid_word(&word).then_some(word)
}

/// First occurrence wins; later duplicates are dropped.
fn dedup(words: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    words.into_iter().filter(|w| seen.insert(w.clone())).collect()
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    dedup(data.lines().filter_map(normalize))
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize(&line?) {
            words.push(word);
        }
    }
    Ok(dedup(words))
}

pub fn load_embedded_wordbank() -> Vec<String> {
    load_wordbank_from_str(EMBEDDED_WORDBANK)
}
