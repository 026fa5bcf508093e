use crate::core::char_util::is_kana_run;
use crate::core::morpheme::Morpheme;

/// Join consecutive katakana-only morphemes into one.
///
/// Analyzers tend to split loanwords and onomatopoeia they do not know
/// into short pieces; the merged morpheme keeps the feature path of the
/// first piece and reads from the joined surface.
pub fn normalize(morphemes: &[Morpheme]) -> Vec<Morpheme> {
    let mut normalized = Vec::with_capacity(morphemes.len());
    let mut cursor = 0;
    while cursor < morphemes.len() {
        let first = &morphemes[cursor];
        let mut end = cursor + 1;
        if is_kana_run(first.surface()) {
            while end < morphemes.len() && is_kana_run(morphemes[end].surface()) {
                end += 1;
            }
        }
        normalized.push(Morpheme::merged(first, &morphemes[cursor + 1..end]));
        cursor = end;
    }
    normalized
}
