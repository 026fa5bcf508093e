use std::borrow::Cow;

use lazy_static::lazy_static;
use phf::{phf_set, Set};
use regex::Regex;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CharType {
    USELESS,
    SPACE,
    KATAKANA,
    HIRAGANA,
    KANJI,
}

lazy_static! {
    // 読み (reading) made only of katakana, long vowel and iteration marks
    static ref PHONETIC_WORD: Regex = Regex::new(r"^[ァ-ヾ]+$").unwrap();
    // brackets which neither count nor break a candidate
    static ref ENCLOSURE: Regex = Regex::new(r"[\[\]「」『』]").unwrap();
    static ref KANA_RUN: Regex = Regex::new(r"^[ァ-ヶー]+$").unwrap();
    static ref HASHTAG: Regex =
        Regex::new(r"[#＃][Ａ-Ｚａ-ｚA-Za-z一-鿆0-9０-９ぁ-ヶｦ-ﾟー]+").unwrap();
}

// 拗音 markers, attached to the preceding mora
static SMALL_KANA: Set<char> = phf_set! {
    'ァ', 'ィ', 'ゥ', 'ェ', 'ォ', 'ャ', 'ュ', 'ョ',
};

// 促音 and 長音, whose weight depends on context
static AMBIGUOUS_MARKS: Set<char> = phf_set! {
    'ッ', 'ー',
};

// identify CharType Of char
pub fn char_type_of(input: &char) -> CharType {
    if input.is_whitespace() {
        return CharType::SPACE;
    }
    match unicode_blocks::find_unicode_block(*input) {
        Some(ub)
            if ub == unicode_blocks::KATAKANA
                || ub == unicode_blocks::KATAKANA_PHONETIC_EXTENSIONS =>
        {
            CharType::KATAKANA
        }
        Some(ub) if ub == unicode_blocks::HIRAGANA => CharType::HIRAGANA,
        Some(ub)
            if ub == unicode_blocks::CJK_UNIFIED_IDEOGRAPHS
                || ub == unicode_blocks::CJK_COMPATIBILITY_IDEOGRAPHS
                || ub == unicode_blocks::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_A =>
        {
            CharType::KANJI
        }
        _ => CharType::USELESS,
    }
}

/// Number of morae in a katakana reading. Small diphthong markers do not count.
pub fn count_mora(reading: &str) -> usize {
    reading.chars().filter(|c| !SMALL_KANA.contains(c)).count()
}

/// Number of geminate / long vowel marks in a reading.
pub fn count_ambiguous(reading: &str) -> usize {
    reading
        .chars()
        .filter(|c| AMBIGUOUS_MARKS.contains(c))
        .count()
}

pub fn is_phonetic_word(tag: &str) -> bool {
    PHONETIC_WORD.is_match(tag)
}

pub fn is_kana_run(surface: &str) -> bool {
    KANA_RUN.is_match(surface)
}

/// Replace quotation brackets with a plain space.
pub fn neutralize_enclosures(text: &str) -> Cow<'_, str> {
    ENCLOSURE.replace_all(text, " ")
}

pub fn strip_hashtags(text: &str) -> Cow<'_, str> {
    HASHTAG.replace_all(text, "")
}
