use crate::core::morpheme::Morpheme;
use crate::dict::user_dictionary::UserDictionary;

/// Morphological analyzer: turns raw text into morphemes.
///
/// Output is expected to be wrapped in boundary markers (morphemes with an
/// empty feature path), the last one standing for end of text.
pub trait Analyzer {
    fn tokenize(&self, text: &str, user_dict: Option<&UserDictionary>) -> Vec<Morpheme>;
    fn name(&self) -> &str;
}

impl<A: Analyzer + ?Sized> Analyzer for &A {
    fn tokenize(&self, text: &str, user_dict: Option<&UserDictionary>) -> Vec<Morpheme> {
        (**self).tokenize(text, user_dict)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
