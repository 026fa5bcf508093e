pub mod config;
pub mod core;
pub mod dict;
pub mod error;

use std::fmt::{Display, Formatter};
use std::path::Path;

use log::debug;

pub use crate::config::configuration::{Configuration, Opt, YamlConfiguration, DEFAULT_RULE};
pub use crate::core::analyzer::Analyzer;
pub use crate::core::char_util::strip_hashtags;
pub use crate::core::matcher::{scan, validate};
pub use crate::core::morpheme::Morpheme;
pub use crate::dict::lexicon::{Lexicon, LexiconAnalyzer};
pub use crate::dict::user_dictionary::UserDictionary;
pub use crate::error::{Error, Result};

use crate::core::char_util::neutralize_enclosures;

/// Finds mora patterns in text analyzed by `A`.
#[derive(Debug, Clone, Default)]
pub struct Matcher<A> {
    analyzer: A,
}

impl<A: Analyzer> Matcher<A> {
    pub fn new(analyzer: A) -> Self {
        Matcher { analyzer }
    }

    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// All substrings of `text` matching `rule`, in order of appearance.
    pub fn find(&self, text: &str, rule: &[u32]) -> Vec<String> {
        self.find_in(text, rule, None)
    }

    /// Like [`Matcher::find`], loading the user dictionary given in `opt`
    /// for this call only.
    pub fn find_with_opt(&self, text: &str, rule: &[u32], opt: &Opt) -> Result<Vec<String>> {
        self.find_with_udic(text, rule, opt.udic.as_deref())
    }

    pub fn find_with_udic(
        &self,
        text: &str,
        rule: &[u32],
        udic: Option<&Path>,
    ) -> Result<Vec<String>> {
        if rule.is_empty() {
            return Ok(Vec::new());
        }
        let user_dict = udic.map(UserDictionary::load).transpose()?;
        Ok(self.find_in(text, rule, user_dict.as_ref()))
    }

    /// Whether `text` is, as a whole, exactly one pattern of `rule`.
    pub fn matches(&self, text: &str, rule: &[u32]) -> bool {
        let text = neutralize_enclosures(text);
        let morphemes = self.analyzer.tokenize(&text, None);
        validate(&morphemes, rule)
    }

    /// The first match of `rule` in `text`, split into its segments.
    pub fn first_verse(&self, text: &str, rule: &[u32]) -> Option<Verse> {
        self.find(text, rule).first().map(|m| Verse::parse(m))
    }

    fn find_in(&self, text: &str, rule: &[u32], user_dict: Option<&UserDictionary>) -> Vec<String> {
        if rule.is_empty() {
            return Vec::new();
        }
        let text = neutralize_enclosures(text);
        let morphemes = self.analyzer.tokenize(&text, user_dict);
        debug!(
            "{} produced {} morphemes",
            self.analyzer.name(),
            morphemes.len()
        );
        scan(&morphemes, rule)
    }
}

/// A matched string split back into its segments (上の句, 中の句, 下の句, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    segments: Vec<String>,
}

impl Verse {
    /// Split on the single spaces the scanner puts between segments.
    pub fn parse(matched: &str) -> Self {
        let segments = if matched.is_empty() {
            Vec::new()
        } else {
            matched.split(' ').map(String::from).collect()
        };
        Verse { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl Display for Verse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join(" "))
    }
}
