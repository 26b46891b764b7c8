//! Chinese-to-pinyin transliteration built on FMM (forward maximum
//! matching) segmentation.
//!
//! The engine takes a string mixing Chinese text, ASCII text, and
//! punctuation and produces a space-separated sequence of phonetic
//! tokens, one per semantic unit. Segmentation is greedy longest-match
//! against a phrase table; each resulting segment is resolved through an
//! ordered fallback policy that ends at a literal `?` marker, so every
//! input character yields *some* token and conversion never fails.
//!
//! ```
//! use pinyin_fmmseg::dictionary_lib::PinyinDictionary;
//! use pinyin_fmmseg::PinyinConverter;
//!
//! let dictionary = PinyinDictionary::from_pairs(
//!     vec![("你好".to_string(), "ni hao".to_string())],
//!     vec![('好', vec!["hao".to_string()])],
//! );
//! let converter = PinyinConverter::new(dictionary);
//! assert_eq!(converter.convert("你好。"), "ni hao .");
//! ```

use crate::dictionary_lib::PinyinDictionary;
use crate::punctuation::{is_ascii_passthrough_punct, to_ascii_punct};

pub mod dictionary_lib;
pub mod punctuation;

/// Token emitted when no rule produces a reading for a character.
///
/// A documented "no known reading" output, not a fault; characters are
/// never silently dropped.
pub const UNKNOWN_READING: &str = "?";

/// Segmentation window used when the phrase table is empty.
const DEFAULT_MAX_PHRASE_LEN: usize = 4;

/// One unit of segmented input.
///
/// Either a matched phrase (two or more characters, guaranteed present in
/// the phrase table at segmentation time) or a single leftover character,
/// which may or may not appear in any table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Phrase(String),
    Char(char),
}

impl Segment {
    /// Length of the segment in characters (code points, not bytes).
    pub fn char_len(&self) -> usize {
        match self {
            Segment::Phrase(phrase) => phrase.chars().count(),
            Segment::Char(_) => 1,
        }
    }
}

/// Stateless converter over a frozen [`PinyinDictionary`].
///
/// The dictionary is owned by the converter and never mutated after
/// construction; `max_phrase_len` is computed once here and not
/// refreshed. `convert` and `segment` take `&self` and touch no interior
/// state, so one instance may be called from several threads at once.
pub struct PinyinConverter {
    dictionary: PinyinDictionary,
    max_phrase_len: usize,
}

impl PinyinConverter {
    /// Creates a converter around `dictionary`.
    ///
    /// Never fails, even with empty tables: segmentation then degrades to
    /// per-character emission with a window of four characters, and every
    /// character resolves through the ASCII/punctuation rules or the `?`
    /// marker.
    pub fn new(dictionary: PinyinDictionary) -> Self {
        let max_phrase_len = match dictionary.phrases.max_len {
            0 => DEFAULT_MAX_PHRASE_LEN,
            n => n,
        };
        PinyinConverter {
            dictionary,
            max_phrase_len,
        }
    }

    pub fn dictionary(&self) -> &PinyinDictionary {
        &self.dictionary
    }

    /// The segmentation window: the longest phrase key in the dictionary,
    /// or 4 when the phrase table is empty.
    pub fn max_phrase_len(&self) -> usize {
        self.max_phrase_len
    }

    /// Splits `text` into maximal phrase matches and leftover characters.
    ///
    /// Greedy forward maximum matching: at each position the longest
    /// phrase-table hit within the window wins and the cursor advances by
    /// its length; with no hit, the single character is emitted and the
    /// cursor advances by one. A greedy choice is never revisited, even
    /// when it leads to poorer downstream matches. Output preserves input
    /// order and segment lengths sum exactly to the input character count.
    ///
    /// A length-1 phrase-table hit is emitted as [`Segment::Char`]; the
    /// conversion policy resolves such characters through the phrase-scan
    /// fallback rather than a direct phrase hit.
    pub fn segment(&self, text: &str) -> Vec<Segment> {
        let text_chars: Vec<char> = text.chars().collect();
        let text_len = text_chars.len();
        let mut result = Vec::new();

        let mut pos = 0;
        while pos < text_len {
            let window = std::cmp::min(self.max_phrase_len, text_len - pos);
            let mut matched_len = 0;
            for len in (1..=window).rev() {
                if self.dictionary.phrases.contains(&text_chars[pos..pos + len]) {
                    matched_len = len;
                    break;
                }
            }

            if matched_len > 1 {
                let phrase: String = text_chars[pos..pos + matched_len].iter().collect();
                result.push(Segment::Phrase(phrase));
                pos += matched_len;
            } else {
                result.push(Segment::Char(text_chars[pos]));
                pos += 1;
            }
        }
        result
    }

    /// Converts `text` to a space-separated sequence of phonetic tokens.
    ///
    /// Segments the input, maps each segment through the fallback policy,
    /// and joins the resulting tokens with single spaces (no leading or
    /// trailing space). Pure function of `text` and the dictionary:
    /// calling it twice yields identical output.
    pub fn convert(&self, text: &str) -> String {
        let segments = self.segment(text);
        let mut tokens: Vec<String> = Vec::with_capacity(segments.len());
        for segment in &segments {
            tokens.push(self.transliterate(segment));
        }
        tokens.join(" ")
    }

    /// Resolves one segment to its output token.
    ///
    /// Ordered policy, first applicable rule wins:
    /// 1. phrase hit — stored reading verbatim (already space-joined per
    ///    character, never re-split);
    /// 2. ASCII letter/digit — unchanged;
    /// 3. ASCII punctuation from the fixed set — unchanged;
    /// 4. full-width punctuation — translated to ASCII;
    /// 5. character-table hit — first (canonical) candidate;
    /// 6. phrase-scan fallback — reading token lifted out of the first
    ///    phrase containing the character;
    /// 7. the `?` marker.
    fn transliterate(&self, segment: &Segment) -> String {
        match segment {
            Segment::Phrase(phrase) => match self.dictionary.phrases.get_str(phrase) {
                Some(reading) => reading.to_string(),
                // segments produced by `segment` always hit
                None => UNKNOWN_READING.to_string(),
            },
            Segment::Char(ch) => self.char_reading(*ch),
        }
    }

    fn char_reading(&self, ch: char) -> String {
        if ch.is_ascii_alphanumeric() || is_ascii_passthrough_punct(ch) {
            return ch.to_string();
        }
        if let Some(mapped) = to_ascii_punct(ch) {
            return mapped.to_string();
        }
        if let Some(reading) = self.dictionary.characters.first(ch) {
            return reading.to_string();
        }
        if let Some(reading) = self.scan_phrases_for(ch) {
            return reading.to_string();
        }
        UNKNOWN_READING.to_string()
    }

    /// Brute-force fallback for characters with no direct mapping: walk
    /// the phrase table in insertion order and lift the character's
    /// reading token out of the first phrase that contains it.
    ///
    /// The result depends entirely on dictionary load order; a
    /// re-serialized dictionary with different entry order may answer
    /// differently for such characters. First-match-wins is preserved
    /// deliberately. Entries whose reading token count does not equal
    /// their key length are skipped, never patched or guessed.
    ///
    /// Worst case O(phrase table size) per character, O(n·m) over a text
    /// where every character lands here; known hotspot for large
    /// dictionaries.
    fn scan_phrases_for(&self, ch: char) -> Option<&str> {
        for (phrase, reading) in self.dictionary.phrases.iter() {
            if let Some(idx) = phrase.chars().position(|c| c == ch) {
                let tokens: Vec<&str> = reading.split(' ').collect();
                if tokens.len() == phrase.chars().count() && !tokens[idx].is_empty() {
                    return Some(tokens[idx]);
                }
            }
        }
        None
    }
}

impl Default for PinyinConverter {
    /// A converter over empty tables: ASCII and punctuation still pass
    /// through, everything else becomes the `?` marker.
    fn default() -> Self {
        PinyinConverter::new(PinyinDictionary::default())
    }
}
