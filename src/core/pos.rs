//! Part of speech predicates over IPADIC style tags.

use phf::{phf_set, Set};

use crate::core::morpheme::Morpheme;

const VERB: &str = "動詞";
const NON_INDEPENDENT: &str = "非自立";
const SUFFIX: &str = "接尾";
const CONTINUATIVE: &str = "連用";
const IMPERFECTIVE: &str = "未然形";
const SPACE: &str = "空白";
pub const COMMA: &str = "、";

// classes which can open a segment unless non-independent or suffix
static OPEN_CLASSES: Set<&'static str> = phf_set! {
    "名詞",
    "形容詞",
    "形容動詞",
    "副詞",
    "連体詞",
    "接続詞",
    "感動詞",
    "接頭詞",
    "フィラー",
};

// user dictionary classes, always independent
static CUSTOM_CLASSES: Set<&'static str> = phf_set! {
    "カスタム人名",
    "カスタム名詞",
};

/// Whether the morpheme may open a segment.
pub fn is_word_start(m: &Morpheme) -> bool {
    let pos = m.pos();
    let detail = m.pos_detail();
    if OPEN_CLASSES.contains(pos) {
        return detail != NON_INDEPENDENT && detail != SUFFIX;
    }
    if pos == VERB {
        return detail != SUFFIX;
    }
    CUSTOM_CLASSES.contains(pos)
}

/// Whether the morpheme may close the final segment.
pub fn is_sentence_end(m: &Morpheme) -> bool {
    let form = m.conjugation_form();
    m.pos_detail() != NON_INDEPENDENT && !form.starts_with(CONTINUATIVE) && form != IMPERFECTIVE
}

pub fn is_space(m: &Morpheme) -> bool {
    m.pos_detail() == SPACE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(features: &[&str]) -> Morpheme {
        Morpheme::from_features("x", features)
    }

    #[test]
    fn open_classes_start_words() {
        assert!(is_word_start(&m(&["名詞", "一般"])));
        assert!(is_word_start(&m(&["副詞", "助詞類接続"])));
        assert!(is_word_start(&m(&["感動詞", "*"])));
        assert!(is_word_start(&m(&["カスタム名詞"])));
        assert!(is_word_start(&m(&["カスタム人名", "*"])));
    }

    #[test]
    fn bound_forms_do_not_start_words() {
        assert!(!is_word_start(&m(&["名詞", "非自立"])));
        assert!(!is_word_start(&m(&["名詞", "接尾"])));
        assert!(!is_word_start(&m(&["助詞", "格助詞"])));
        assert!(!is_word_start(&m(&["助動詞", "*"])));
        assert!(!is_word_start(&m(&["記号", "一般"])));
        assert!(!is_word_start(&Morpheme::boundary()));
    }

    #[test]
    fn verbs_exclude_only_suffix() {
        assert!(is_word_start(&m(&["動詞", "自立"])));
        assert!(is_word_start(&m(&["動詞", "非自立"])));
        assert!(!is_word_start(&m(&["動詞", "接尾"])));
    }

    #[test]
    fn sentence_end() {
        assert!(is_sentence_end(&m(&["名詞", "一般", "*", "*", "*", "*"])));
        assert!(is_sentence_end(&m(&["動詞", "自立", "*", "*", "五段・マ行", "基本形"])));
        assert!(!is_sentence_end(&m(&["動詞", "自立", "*", "*", "五段・カ行イ音便", "連用タ接続"])));
        assert!(!is_sentence_end(&m(&["動詞", "自立", "*", "*", "一段", "連用形"])));
        assert!(!is_sentence_end(&m(&["動詞", "自立", "*", "*", "一段", "未然形"])));
        assert!(is_sentence_end(&m(&["動詞", "自立", "*", "*", "一段", "未然ウ接続"])));
        assert!(!is_sentence_end(&m(&["名詞", "非自立", "*", "*", "*", "*"])));
    }

    #[test]
    fn space() {
        assert!(is_space(&m(&["記号", "空白"])));
        assert!(!is_space(&m(&["記号", "読点"])));
    }
}
