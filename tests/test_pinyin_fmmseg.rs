use pinyin_fmmseg::dictionary_lib::PinyinDictionary;
use pinyin_fmmseg::{PinyinConverter, Segment};

fn dictionary(phrases: &[(&str, &str)], characters: &[(&str, &[&str])]) -> PinyinDictionary {
    PinyinDictionary::from_pairs(
        phrases
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string())),
        characters.iter().map(|(k, v)| {
            (
                k.chars().next().unwrap(),
                v.iter().map(|s| s.to_string()).collect(),
            )
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrase_hit_test() {
        let converter = PinyinConverter::new(dictionary(&[("你好", "ni hao")], &[]));
        assert_eq!(converter.convert("你好"), "ni hao");
    }

    #[test]
    fn ascii_passthrough_test() {
        let converter = PinyinConverter::default();
        assert_eq!(converter.convert("abc123"), "a b c 1 2 3");
    }

    #[test]
    fn ascii_punctuation_passthrough_test() {
        let converter = PinyinConverter::default();
        assert_eq!(converter.convert("a,b!"), "a , b !");
        assert_eq!(converter.convert("@$"), "@ $");
    }

    #[test]
    fn fullwidth_punctuation_test() {
        let converter = PinyinConverter::default();
        assert_eq!(converter.convert("。"), ".");
        assert_eq!(converter.convert("，"), ",");
        assert_eq!(converter.convert("“”"), "\" \"");
        assert_eq!(converter.convert("（）"), "( )");
    }

    #[test]
    fn unknown_character_test() {
        let converter = PinyinConverter::default();
        assert_eq!(converter.convert("龘"), "?");
        // astral-plane characters get the same marker treatment
        assert_eq!(converter.convert("𠀀"), "?");
    }

    #[test]
    fn space_is_not_a_known_token_test() {
        // ASCII space is in no table and not in the punctuation set
        let converter = PinyinConverter::default();
        assert_eq!(converter.convert("a b"), "a ? b");
    }

    #[test]
    fn char_table_hit_test() {
        let converter =
            PinyinConverter::new(dictionary(&[], &[("中", &["zhong", "zhong4"])]));
        assert_eq!(converter.convert("中"), "zhong");
    }

    #[test]
    fn char_table_wins_over_phrase_scan_test() {
        // '中' appears inside a phrase, but the character table must answer first
        let converter = PinyinConverter::new(dictionary(
            &[("中国", "wrong guo")],
            &[("中", &["zhong"])],
        ));
        assert_eq!(converter.convert("中"), "zhong");
    }

    #[test]
    fn phrase_scan_fallback_test() {
        let converter = PinyinConverter::new(dictionary(&[("你好", "ni hao")], &[]));
        assert_eq!(converter.convert("好"), "hao");
    }

    #[test]
    fn phrase_scan_first_match_wins_test() {
        let forward = PinyinConverter::new(dictionary(
            &[("大好", "da4 hao4"), ("好人", "hao3 ren2")],
            &[],
        ));
        assert_eq!(forward.convert("好"), "hao4");

        let reversed = PinyinConverter::new(dictionary(
            &[("好人", "hao3 ren2"), ("大好", "da4 hao4")],
            &[],
        ));
        assert_eq!(reversed.convert("好"), "hao3");
    }

    #[test]
    fn phrase_scan_skips_mismatched_reading_test() {
        // first entry has one token for two characters; scan moves on
        let converter = PinyinConverter::new(dictionary(
            &[("你好", "nihao"), ("大好", "da hao")],
            &[],
        ));
        assert_eq!(converter.convert("好"), "hao");

        let only_bad = PinyinConverter::new(dictionary(&[("你好", "nihao")], &[]));
        assert_eq!(only_bad.convert("好"), "?");
    }

    #[test]
    fn mismatched_phrase_still_hits_as_whole_test() {
        // a token-count mismatch only disables the fallback path; a direct
        // phrase hit returns the stored reading verbatim
        let converter = PinyinConverter::new(dictionary(&[("你好", "nihao")], &[]));
        assert_eq!(converter.convert("你好"), "nihao");
    }

    #[test]
    fn greedy_longest_match_test() {
        let converter = PinyinConverter::new(dictionary(
            &[("你好", "ni hao"), ("你好吗", "ni hao ma")],
            &[],
        ));
        assert_eq!(converter.convert("你好吗"), "ni hao ma");
    }

    #[test]
    fn greedy_is_not_globally_optimal_test() {
        // FMM takes 中国 at position 0 and never revisits, even though
        // 国人 would have matched one character later
        let converter = PinyinConverter::new(dictionary(
            &[("中国", "zhong guo"), ("国人", "guo ren")],
            &[],
        ));
        let segments = converter.segment("中国人");
        assert_eq!(
            segments,
            vec![
                Segment::Phrase("中国".to_string()),
                Segment::Char('人'),
            ]
        );
        assert_eq!(converter.convert("中国人"), "zhong guo ren");
    }

    #[test]
    fn single_char_phrase_entry_test() {
        // a length-1 phrase key segments as a character and resolves
        // through the phrase-scan fallback
        let converter = PinyinConverter::new(dictionary(&[("你", "ni")], &[]));
        assert_eq!(converter.segment("你"), vec![Segment::Char('你')]);
        assert_eq!(converter.convert("你"), "ni");
    }

    #[test]
    fn segmentation_covers_input_test() {
        let converter = PinyinConverter::new(dictionary(
            &[("你好", "ni hao"), ("世界", "shi jie")],
            &[("中", &["zhong"])],
        ));
        let input = "abc你好,世界！中x龘";
        let segments = converter.segment(input);
        let total: usize = segments.iter().map(|s| s.char_len()).sum();
        assert_eq!(total, input.chars().count());

        let output = converter.convert(input);
        // each two-syllable phrase reading splits into one extra word
        assert_eq!(output.split(' ').count(), segments.len() + 2);
    }

    #[test]
    fn token_count_matches_segments_test() {
        // with single-syllable readings only, output tokens == segments
        let converter = PinyinConverter::new(dictionary(&[], &[("中", &["zhong"])]));
        let input = "ab中。";
        let segments = converter.segment(input);
        let output = converter.convert(input);
        assert_eq!(output.split(' ').count(), segments.len());
        assert_eq!(output, "a b zhong .");
    }

    #[test]
    fn determinism_test() {
        let converter = PinyinConverter::new(dictionary(
            &[("你好", "ni hao"), ("大好", "da hao")],
            &[("中", &["zhong"])],
        ));
        let input = "你好中好abc，龘";
        assert_eq!(converter.convert(input), converter.convert(input));
    }

    #[test]
    fn empty_input_test() {
        let converter = PinyinConverter::default();
        assert_eq!(converter.convert(""), "");
        assert!(converter.segment("").is_empty());
    }

    #[test]
    fn max_phrase_len_test() {
        assert_eq!(PinyinConverter::default().max_phrase_len(), 4);

        let converter = PinyinConverter::new(dictionary(
            &[("中华人民共和国", "zhong hua ren min gong he guo")],
            &[],
        ));
        assert_eq!(converter.max_phrase_len(), 7);
        assert_eq!(
            converter.convert("中华人民共和国"),
            "zhong hua ren min gong he guo"
        );
    }

    #[test]
    fn mixed_text_test() {
        let converter = PinyinConverter::new(dictionary(
            &[("你好", "ni hao"), ("世界", "shi jie")],
            &[("龙", &["long"]), ("马", &["ma"])],
        ));
        assert_eq!(
            converter.convert("Hi你好，世界！龙马2024"),
            "H i ni hao , shi jie ! long ma 2 0 2 4"
        );
    }
}
