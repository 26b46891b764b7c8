use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::debug_note;

/// Ordered phrase dictionary with a tracked maximum key length.
///
/// `PhraseTable` maps multi-character phrases to a single reading string
/// whose syllables are space-joined, one per character, left to right.
/// Entries are held in **insertion order** in a `Vec`; that order is part
/// of the observable behavior, because the per-character fallback scan in
/// the converter walks the entries front to back and returns the first
/// phrase containing the wanted character. Re-serializing a dictionary in
/// a different order can therefore change fallback output. This is a
/// documented fragility of the format, preserved as-is.
///
/// Exact lookups go through a hash index (`FxHashMap`) keyed by
/// `Box<[char]>`, so segmentation can probe candidate `&[char]` windows
/// without allocating. The index is a runtime accelerator: it is skipped
/// during serialization and rebuilt after loading.
///
/// # Example
/// ```
/// use pinyin_fmmseg::dictionary_lib::PhraseTable;
///
/// let table = PhraseTable::build_from_pairs(vec![
///     ("你好".to_string(), "ni hao".to_string()),
///     ("世界".to_string(), "shi jie".to_string()),
/// ]);
///
/// assert_eq!(table.max_len, 2);
/// assert_eq!(table.get(&['你', '好']), Some("ni hao"));
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct PhraseTable {
    /// Entries in insertion order: `(phrase, reading)`.
    ///
    /// The reading is stored verbatim; a phrase hit during conversion
    /// returns it untouched, whatever its token count.
    #[serde(default)]
    entries: Vec<(String, String)>,

    /// Maximum key length in characters across the table.
    ///
    /// Bounds the probing window during forward maximum matching.
    #[serde(default)]
    pub max_len: usize,

    /// Runtime-only exact-lookup index: phrase chars → entry position.
    #[serde(skip)]
    #[serde(default)]
    index: FxHashMap<Box<[char]>, usize>,
}

impl PhraseTable {
    /// Builds a table from `(phrase, reading)` pairs, preserving the
    /// iteration order of `pairs` as the entry order.
    ///
    /// Duplicate keys are **first-wins**: the later pair is dropped and a
    /// note is printed in debug builds when the readings differ. Empty
    /// keys are rejected the same way.
    pub fn build_from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut table = PhraseTable::default();
        for (phrase, reading) in pairs {
            table.insert(phrase, reading);
        }
        table
    }

    fn insert(&mut self, phrase: String, reading: String) {
        if phrase.is_empty() {
            debug_note!("empty phrase key ignored");
            return;
        }
        let key: Box<[char]> = phrase.chars().collect();
        if let Some(&existing) = self.index.get(key.as_ref()) {
            if self.entries[existing].1 != reading {
                debug_note!(
                    "duplicate phrase ignored (first-wins): key={} kept={} dropped={}",
                    phrase,
                    self.entries[existing].1,
                    reading
                );
            }
            return;
        }
        if self.max_len < key.len() {
            self.max_len = key.len();
        }
        self.index.insert(key, self.entries.len());
        self.entries.push((phrase, reading));
    }

    /// Rebuilds the runtime index and `max_len` from `entries`.
    ///
    /// Must be called after deserialization, before the table is used for
    /// lookups. Loaders in this crate do this automatically.
    pub fn rebuild_index(&mut self) {
        self.index.clear();
        self.max_len = 0;
        for (pos, (phrase, _)) in self.entries.iter().enumerate() {
            let key: Box<[char]> = phrase.chars().collect();
            if self.index.contains_key(key.as_ref()) {
                debug_note!("duplicate phrase in serialized table: key={}", phrase);
                continue;
            }
            if self.max_len < key.len() {
                self.max_len = key.len();
            }
            self.index.insert(key, pos);
        }
    }

    /// Exact lookup by a character window, allocation-free on the key side.
    pub fn get(&self, key: &[char]) -> Option<&str> {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    /// Exact lookup by string key.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        let chars: Vec<char> = key.chars().collect();
        self.get(&chars)
    }

    /// Tests whether a character window is a phrase key.
    #[inline]
    pub fn contains(&self, key: &[char]) -> bool {
        self.index.contains_key(key)
    }

    /// Iterates `(phrase, reading)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, r)| (p.as_str(), r.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
