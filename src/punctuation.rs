use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// ASCII punctuation accepted verbatim by the conversion policy.
///
/// Characters in this set are emitted unchanged, exactly like ASCII
/// letters and digits. Everything else falls through to the full-width
/// translation table or the dictionary rules.
pub const ASCII_PUNCTUATION: &str = ".,?!:;\"'/()&-_=+@$";

/// Full-width / Chinese punctuation and its ASCII replacement.
///
/// The table is bidirectionally fixed: one full-width mark maps to exactly
/// one ASCII mark, and the set never grows at runtime. Curly double and
/// single quotes both collapse onto the straight ASCII quote.
const FULLWIDTH_PAIRS: &[(char, char)] = &[
    ('。', '.'),
    ('，', ','),
    ('？', '?'),
    ('！', '!'),
    ('：', ':'),
    ('；', ';'),
    ('“', '"'),
    ('”', '"'),
    ('‘', '\''),
    ('’', '\''),
    ('／', '/'),
    ('（', '('),
    ('）', ')'),
    ('＆', '&'),
    ('－', '-'),
    ('＿', '_'),
    ('＝', '='),
    ('＋', '+'),
    ('＠', '@'),
    ('＄', '$'),
];

// Single u128 mask over code points 0..=0x7F; membership is one shift and AND.
static ASCII_PUNCT_MASK: Lazy<u128> = Lazy::new(|| {
    let mut mask: u128 = 0;
    for ch in ASCII_PUNCTUATION.chars() {
        mask |= 1u128 << (ch as u32);
    }
    mask
});

/// Global full-width → ASCII punctuation map built from [`FULLWIDTH_PAIRS`].
///
/// Initialization happens once at runtime via [`Lazy`]; lookups afterwards
/// are lock-free.
pub static FULLWIDTH_TO_ASCII: Lazy<FxHashMap<char, char>> =
    Lazy::new(|| FULLWIDTH_PAIRS.iter().copied().collect());

/// Tests whether `c` is one of the ASCII punctuation marks passed through
/// unchanged.
///
/// # Examples
///
/// ```
/// use pinyin_fmmseg::punctuation::is_ascii_passthrough_punct;
/// assert!(is_ascii_passthrough_punct('!'));
/// assert!(!is_ascii_passthrough_punct(' '));
/// assert!(!is_ascii_passthrough_punct('。'));
/// ```
#[inline]
pub fn is_ascii_passthrough_punct(c: char) -> bool {
    let u = c as u32;
    u <= 0x7F && ((*ASCII_PUNCT_MASK >> u) & 1) == 1
}

/// Translates a full-width/Chinese punctuation mark to its ASCII
/// counterpart, or `None` when `c` is not in the fixed table.
///
/// # Examples
///
/// ```
/// use pinyin_fmmseg::punctuation::to_ascii_punct;
/// assert_eq!(to_ascii_punct('。'), Some('.'));
/// assert_eq!(to_ascii_punct('“'), Some('"'));
/// assert_eq!(to_ascii_punct('你'), None);
/// ```
#[inline]
pub fn to_ascii_punct(c: char) -> Option<char> {
    FULLWIDTH_TO_ASCII.get(&c).copied()
}
