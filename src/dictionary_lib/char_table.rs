use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::debug_note;

/// Per-character candidate reading lists, canonical reading first.
///
/// A character may have several readings (polyphones); the converter only
/// consults the first one, but the full list is kept so dictionary
/// artifacts round-trip losslessly.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct CharTable {
    #[serde(default)]
    map: FxHashMap<char, Vec<String>>,
}

impl CharTable {
    /// Builds a table from `(character, candidates)` pairs.
    ///
    /// Pairs with an empty candidate list are dropped (a character with no
    /// reading has no business in the table); duplicate characters are
    /// first-wins, matching [`PhraseTable`](crate::dictionary_lib::PhraseTable).
    pub fn build_from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, Vec<String>)>,
    {
        let mut map: FxHashMap<char, Vec<String>> = FxHashMap::default();
        for (ch, candidates) in pairs {
            if candidates.is_empty() {
                debug_note!("character with no readings ignored: {}", ch);
                continue;
            }
            if map.contains_key(&ch) {
                debug_note!("duplicate character ignored (first-wins): {}", ch);
                continue;
            }
            map.insert(ch, candidates);
        }
        CharTable { map }
    }

    /// The canonical (first) reading of `ch`, if the table knows it.
    pub fn first(&self, ch: char) -> Option<&str> {
        self.map
            .get(&ch)
            .and_then(|candidates| candidates.first())
            .map(|s| s.as_str())
    }

    /// All candidate readings of `ch`, canonical first.
    pub fn candidates(&self, ch: char) -> Option<&[String]> {
        self.map.get(&ch).map(|c| c.as_slice())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
