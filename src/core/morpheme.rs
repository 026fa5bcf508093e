use std::fmt::{Display, Formatter};

/// Feature entry meaning "no value" in IPADIC style feature paths.
pub const PLACEHOLDER: &str = "*";

const POS: usize = 0;
const POS_DETAIL: usize = 1;
const CONJUGATION_FORM: usize = 5;

/// One analyzed unit of text: the surface it spans and its feature path
/// (`品詞,品詞細分類1,...,活用形,原形,読み,発音`).
///
/// A morpheme with an empty feature path is a boundary marker (BOS/EOS).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Morpheme {
    surface: String,
    features: Vec<String>,
}

impl Display for Morpheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}", self.surface, self.features.join(","))
    }
}

impl Morpheme {
    pub fn new<S: Into<String>>(surface: S, features: Vec<String>) -> Self {
        Morpheme {
            surface: surface.into(),
            features,
        }
    }

    pub fn from_features<S: Into<String>>(surface: S, features: &[&str]) -> Self {
        Self::new(surface, features.iter().map(|f| f.to_string()).collect())
    }

    pub fn boundary() -> Self {
        Self::default()
    }

    pub fn surface(&self) -> &str {
        &self.surface
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn is_boundary(&self) -> bool {
        self.features.is_empty()
    }

    pub fn feature(&self, index: usize) -> &str {
        self.features
            .get(index)
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER)
    }

    pub fn pos(&self) -> &str {
        self.feature(POS)
    }

    pub fn pos_detail(&self) -> &str {
        self.feature(POS_DETAIL)
    }

    pub fn conjugation_form(&self) -> &str {
        self.feature(CONJUGATION_FORM)
    }

    /// Terminal feature entry, normally the pronunciation.
    pub fn reading(&self) -> &str {
        self.features
            .last()
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER)
    }

    /// The reading used for mora counting; falls back to the surface when
    /// the analyzer left the reading unknown.
    pub fn phonetic_tag(&self) -> &str {
        match self.reading() {
            PLACEHOLDER => self.surface.as_str(),
            reading => reading,
        }
    }

    pub(crate) fn merged<'a, I>(first: &Morpheme, rest: I) -> Morpheme
    where
        I: IntoIterator<Item = &'a Morpheme>,
    {
        let mut merged = first.clone();
        let mut members = 1;
        for m in rest {
            merged.surface.push_str(&m.surface);
            members += 1;
        }
        if members > 1 {
            if let Some(reading) = merged.features.last_mut() {
                *reading = PLACEHOLDER.to_string();
            }
        }
        merged
    }
}
