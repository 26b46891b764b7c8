use serde::{Deserialize, Serialize};
use serde_cbor::from_slice;
use std::error::Error;
use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use zstd::{Decoder, Encoder};

mod char_table;
mod phrase_table;

pub use char_table::CharTable;
pub use phrase_table::PhraseTable;

/// Print a developer note to **stderr** in debug builds; no-op in release.
///
/// Accepts the same syntax as [`eprintln!`]. Used for soft diagnostics
/// while loading user-supplied dictionaries (duplicate keys, empty
/// candidate lists) that should never fail a load or spam release users.
#[macro_export]
macro_rules! debug_note {
    ($($arg:tt)*) => {
        #[allow(unused)]
        {
            if cfg!(debug_assertions) {
                eprintln!($($arg)*);
            }
        }
    };
}

/// The two read-only lookup tables consumed by the converter.
///
/// A `PinyinDictionary` is an explicit, immutable configuration object:
/// it is handed to [`PinyinConverter::new`](crate::PinyinConverter::new)
/// and never mutated afterwards, so multiple converters (or tests) can
/// each carry their own dictionary in isolation. Construction never
/// fails on empty tables.
#[derive(Serialize, Deserialize, Default)]
pub struct PinyinDictionary {
    pub phrases: PhraseTable,
    pub characters: CharTable,
}

impl PinyinDictionary {
    /// Loads the plain-text dictionaries from the local `dicts/` folder.
    ///
    /// Expects `dicts/phrases.txt` (`phrase reading…` per line, syllables
    /// whitespace-separated) and `dicts/characters.txt` (`char reading…`
    /// per line, candidates whitespace-separated, canonical first).
    pub fn from_dicts() -> Result<Self, DictionaryError> {
        let phrases_path = "dicts/phrases.txt";
        let characters_path = "dicts/characters.txt";

        fn read(path: &str) -> Result<String, DictionaryError> {
            fs::read_to_string(path).map_err(|err| {
                DictionaryError::IoError(format!("Failed to read file {}: {}", path, err))
            })
        }

        Ok(Self::from_texts(
            &read(phrases_path)?,
            &read(characters_path)?,
        ))
    }

    /// Parses phrase and character tables from in-memory text.
    ///
    /// Malformed lines are reported to stderr and skipped; a bad line
    /// never fails the load. Blank lines and `#` comments are ignored.
    pub fn from_texts(phrase_content: &str, char_content: &str) -> Self {
        PinyinDictionary {
            phrases: Self::load_phrase_table(phrase_content),
            characters: Self::load_char_table(char_content),
        }
    }

    /// Builds a dictionary from in-memory pairs, mainly for tests and
    /// embedding callers that bring their own data source.
    pub fn from_pairs<P, C>(phrase_pairs: P, char_pairs: C) -> Self
    where
        P: IntoIterator<Item = (String, String)>,
        C: IntoIterator<Item = (char, Vec<String>)>,
    {
        PinyinDictionary {
            phrases: PhraseTable::build_from_pairs(phrase_pairs),
            characters: CharTable::build_from_pairs(char_pairs),
        }
    }

    fn load_phrase_table(content: &str) -> PhraseTable {
        let mut pairs = Vec::new();
        for line in content.lines() {
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() >= 2 {
                pairs.push((parts[0].to_string(), parts[1..].join(" ")));
            } else {
                eprintln!("Invalid line format: {}", line);
            }
        }
        PhraseTable::build_from_pairs(pairs)
    }

    fn load_char_table(content: &str) -> CharTable {
        let mut pairs = Vec::new();
        for line in content.lines() {
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 2 {
                eprintln!("Invalid line format: {}", line);
                continue;
            }
            let mut key_chars = parts[0].chars();
            match (key_chars.next(), key_chars.next()) {
                (Some(ch), None) => {
                    let candidates = parts[1..].iter().map(|s| s.to_string()).collect();
                    pairs.push((ch, candidates));
                }
                _ => eprintln!("Invalid line format: {}", line),
            }
        }
        CharTable::build_from_pairs(pairs)
    }

    /// Reads a dictionary from a JSON artifact.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let json_string = fs::read_to_string(&path)
            .map_err(|err| DictionaryError::IoError(format!("Failed to read JSON file: {}", err)))?;
        let dictionary: PinyinDictionary = serde_json::from_str(&json_string).map_err(|err| {
            DictionaryError::ParseError(format!("Failed to deserialize JSON: {}", err))
        })?;
        Ok(dictionary.finish_load())
    }

    /// Serializes the dictionary to a JSON artifact.
    pub fn serialize_to_json<P: AsRef<Path>>(&self, path: P) -> Result<(), DictionaryError> {
        let json_string = serde_json::to_string(self).map_err(|err| {
            DictionaryError::ParseError(format!("Failed to serialize JSON: {}", err))
        })?;
        fs::write(&path, json_string)
            .map_err(|err| DictionaryError::IoError(format!("Failed to write JSON file: {}", err)))
    }

    /// Serializes the dictionary to a CBOR artifact.
    pub fn serialize_to_cbor<P: AsRef<Path>>(&self, path: P) -> Result<(), DictionaryError> {
        let cbor_data = serde_cbor::to_vec(self).map_err(|err| {
            DictionaryError::ParseError(format!("Failed to serialize to CBOR: {}", err))
        })?;
        fs::write(&path, cbor_data)
            .map_err(|err| DictionaryError::IoError(format!("Failed to write CBOR file: {}", err)))
    }

    /// Reads a dictionary from a CBOR artifact.
    pub fn deserialize_from_cbor<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let cbor_data = fs::read(&path)
            .map_err(|err| DictionaryError::IoError(format!("Failed to read CBOR file: {}", err)))?;
        let dictionary: PinyinDictionary = from_slice(&cbor_data).map_err(|err| {
            DictionaryError::ParseError(format!("Failed to deserialize CBOR: {}", err))
        })?;
        Ok(dictionary.finish_load())
    }

    fn finish_load(mut self) -> Self {
        self.phrases.rebuild_index();
        self
    }
}

/// Writes a dictionary as zstd-compressed CBOR.
pub fn save_compressed(dictionary: &PinyinDictionary, path: &str) -> Result<(), DictionaryError> {
    let file = File::create(path).map_err(|e| DictionaryError::IoError(e.to_string()))?;
    let writer = BufWriter::new(file);
    let mut encoder =
        Encoder::new(writer, 3).map_err(|e| DictionaryError::IoError(e.to_string()))?;
    serde_cbor::to_writer(&mut encoder, dictionary)
        .map_err(|e| DictionaryError::ParseError(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| DictionaryError::IoError(e.to_string()))?;
    Ok(())
}

/// Reads a dictionary written by [`save_compressed`].
pub fn load_compressed(path: &str) -> Result<PinyinDictionary, DictionaryError> {
    let file = File::open(path).map_err(|e| DictionaryError::IoError(e.to_string()))?;
    let reader = BufReader::new(file);
    let mut decoder = Decoder::new(reader).map_err(|e| DictionaryError::IoError(e.to_string()))?;
    let dictionary: PinyinDictionary = serde_cbor::from_reader(&mut decoder)
        .map_err(|e| DictionaryError::ParseError(e.to_string()))?;
    Ok(dictionary.finish_load())
}

#[derive(Debug)]
pub enum DictionaryError {
    IoError(String),
    ParseError(String),
}

impl std::fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DictionaryError::IoError(msg) => write!(f, "I/O Error: {}", msg),
            DictionaryError::ParseError(msg) => write!(f, "Parse Error: {}", msg),
        }
    }
}

impl Error for DictionaryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_phrase_table_joins_reading_tokens() {
        let dictionary = PinyinDictionary::from_texts(
            "你好\tni hao\n中华人民共和国 zhong hua ren min gong he guo\n",
            "",
        );
        assert_eq!(dictionary.phrases.get_str("你好"), Some("ni hao"));
        assert_eq!(
            dictionary.phrases.get_str("中华人民共和国"),
            Some("zhong hua ren min gong he guo")
        );
        assert_eq!(dictionary.phrases.max_len, 7);
    }

    #[test]
    fn test_load_skips_malformed_lines() {
        let dictionary = PinyinDictionary::from_texts(
            "# comment\n你好 ni hao\nbroken_line_without_reading\n\n",
            "好 hao hao\n多字 duo zi\n",
        );
        assert_eq!(dictionary.phrases.len(), 1);
        // a multi-char key is not a valid character entry
        assert_eq!(dictionary.characters.len(), 1);
        assert_eq!(dictionary.characters.first('好'), Some("hao"));
    }

    #[test]
    fn test_duplicate_phrase_first_wins() {
        let table = PhraseTable::build_from_pairs(vec![
            ("你好".to_string(), "ni hao".to_string()),
            ("你好".to_string(), "nei hou".to_string()),
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get_str("你好"), Some("ni hao"));
    }

    #[test]
    fn test_char_table_candidates_keep_order() {
        let table = CharTable::build_from_pairs(vec![(
            '行',
            vec!["xing".to_string(), "hang".to_string()],
        )]);
        assert_eq!(table.first('行'), Some("xing"));
        assert_eq!(table.candidates('行').map(|c| c.len()), Some(2));
        assert_eq!(table.first('走'), None);
    }
}
