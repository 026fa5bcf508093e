use std::fs;
use std::path::Path;

use log::{info, trace};
use serde::{Deserialize, Serialize};

use crate::core::analyzer::Analyzer;
use crate::core::char_util::{char_type_of, CharType};
use crate::core::morpheme::{Morpheme, PLACEHOLDER};
use crate::dict::trie::Trie;
use crate::dict::user_dictionary::UserDictionary;
use crate::error::{Error, Result};

const ANALYZER_NAME: &str = "LEXICON_ANALYZER";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub surface: String,
    pub features: Vec<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct LexiconFile {
    #[serde(default)]
    entries: Vec<LexiconEntry>,
}

/// Surface forms with their IPADIC feature paths.
#[derive(Debug, Default)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
    index: Trie,
    // slots of disabled words, reused by later entries
    free: Vec<usize>,
}

impl Lexicon {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::resource_load(path, e))?;
        let lexicon = Self::from_yaml_str(&content).map_err(|e| Error::resource_load(path, e))?;
        info!("load lexicon {} size = {}", path.display(), lexicon.len());
        Ok(lexicon)
    }

    pub fn from_yaml_str(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        let file: LexiconFile = serde_yaml::from_str(content)?;
        let mut lexicon = Lexicon::default();
        for entry in file.entries {
            lexicon.add_entry(entry);
        }
        Ok(lexicon)
    }

    pub fn add_entry(&mut self, entry: LexiconEntry) {
        if entry.surface.is_empty() {
            return;
        }
        match self.index.get(entry.surface.chars()) {
            Some(id) => self.entries[id] = entry,
            None => match self.free.pop() {
                Some(id) => {
                    self.index.insert(entry.surface.chars(), id);
                    self.entries[id] = entry;
                }
                None => {
                    self.index.insert(entry.surface.chars(), self.entries.len());
                    self.entries.push(entry);
                }
            },
        }
    }

    pub fn disable_words(&mut self, words: Vec<&str>) {
        for word in words {
            if let Some(id) = self.index.delete(word.chars()) {
                self.free.push(id);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    fn morpheme(&self, id: usize) -> Morpheme {
        let entry = &self.entries[id];
        Morpheme::new(entry.surface.as_str(), entry.features.clone())
    }
}

/// Greedy longest-match analyzer over a [`Lexicon`].
///
/// User dictionary words win over lexicon words of the same or shorter
/// length. Text found in neither is grouped by character class into
/// unknown morphemes whose reading is left as a placeholder.
#[derive(Debug, Default)]
pub struct LexiconAnalyzer {
    lexicon: Lexicon,
}

impl LexiconAnalyzer {
    pub fn new(lexicon: Lexicon) -> Self {
        LexiconAnalyzer { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    fn known_at(&self, chars: &[char], cursor: usize, user_dict: Option<&UserDictionary>) -> bool {
        self.lexicon.index.longest_match(chars, cursor).is_some()
            || user_dict.map_or(false, |d| d.longest_match(chars, cursor).is_some())
    }

    fn unknown(
        &self,
        chars: &[char],
        cursor: usize,
        user_dict: Option<&UserDictionary>,
    ) -> (Morpheme, usize) {
        let char_type = char_type_of(&chars[cursor]);
        let mut end = cursor + 1;
        if char_type != CharType::USELESS {
            while end < chars.len()
                && char_type_of(&chars[end]) == char_type
                && !self.known_at(chars, end, user_dict)
            {
                end += 1;
            }
        }
        let surface: String = chars[cursor..end].iter().collect();
        let (pos, detail) = match char_type {
            CharType::SPACE => ("記号", "空白"),
            CharType::USELESS => ("記号", "一般"),
            _ => ("名詞", "一般"),
        };
        let features = [
            pos,
            detail,
            PLACEHOLDER,
            PLACEHOLDER,
            PLACEHOLDER,
            PLACEHOLDER,
            PLACEHOLDER,
        ];
        (Morpheme::from_features(surface, &features), end - cursor)
    }
}

impl Analyzer for LexiconAnalyzer {
    fn tokenize(&self, text: &str, user_dict: Option<&UserDictionary>) -> Vec<Morpheme> {
        let chars: Vec<char> = text.chars().collect();
        let mut morphemes = vec![Morpheme::boundary()];
        let mut cursor = 0;
        while cursor < chars.len() {
            let user_hit = user_dict.and_then(|d| d.longest_match(&chars, cursor));
            let lexicon_hit = self.lexicon.index.longest_match(&chars, cursor);
            let length = match (user_hit, lexicon_hit) {
                (Some((entry, hit)), lexicon_hit)
                    if lexicon_hit.map_or(true, |l| l.length() <= hit.length()) =>
                {
                    morphemes.extend(entry.morphemes());
                    hit.length()
                }
                (_, Some(hit)) => {
                    morphemes.push(self.lexicon.morpheme(hit.entry));
                    hit.length()
                }
                (_, None) => {
                    let (morpheme, length) = self.unknown(&chars, cursor, user_dict);
                    trace!("unknown word {}", morpheme.surface());
                    morphemes.push(morpheme);
                    length
                }
            };
            cursor += length;
        }
        morphemes.push(Morpheme::boundary());
        morphemes
    }

    fn name(&self) -> &str {
        ANALYZER_NAME
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const LEXICON: &str = r#"
entries:
  - surface: 古池
    features: [名詞, 一般, "*", "*", "*", "*", 古池, フルイケ, フルイケ]
  - surface: 古
    features: [接頭詞, 名詞接続, "*", "*", "*", "*", 古, フル, フル]
  - surface: や
    features: [助詞, 間投助詞, "*", "*", "*", "*", や, ヤ, ヤ]
  - surface: 、
    features: [記号, 読点, "*", "*", "*", "*", 、, 、, 、]
  - surface: ジャン
    features: [名詞, 一般, "*", "*", "*", "*", ジャン, ジャン, ジャン]
"#;

    fn analyzer() -> LexiconAnalyzer {
        LexiconAnalyzer::new(Lexicon::from_yaml_str(LEXICON).unwrap())
    }

    fn surfaces(ms: &[Morpheme]) -> Vec<&str> {
        ms.iter().map(Morpheme::surface).collect()
    }

    #[test]
    fn longest_match_wins() {
        let ms = analyzer().tokenize("古池や、", None);
        assert_eq!(surfaces(&ms), vec!["", "古池", "や", "、", ""]);
        assert!(ms[0].is_boundary());
        assert!(ms[4].is_boundary());
        assert_eq!(ms[1].reading(), "フルイケ");
        assert_eq!(ms[3].phonetic_tag(), "、");
    }

    #[test]
    fn unknown_text_grouped_by_class() {
        let ms = analyzer().tokenize("ジャングル 森!", None);
        assert_eq!(surfaces(&ms), vec!["", "ジャン", "グル", " ", "森", "!", ""]);
        assert_eq!(ms[2].pos(), "名詞");
        assert_eq!(ms[2].phonetic_tag(), "グル");
        assert_eq!(ms[3].pos_detail(), "空白");
        assert_eq!(ms[5].pos(), "記号");
    }

    #[test]
    fn unknown_run_stops_at_known_word() {
        let ms = analyzer().tokenize("ドンジャン", None);
        assert_eq!(surfaces(&ms), vec!["", "ドン", "ジャン", ""]);
    }

    #[test]
    fn user_dictionary_takes_priority() {
        let udic = UserDictionary::parse("古池や,古池 や,フルイケ ヤ,カスタム名詞\n").unwrap();
        let ms = analyzer().tokenize("古池や", Some(&udic));
        assert_eq!(surfaces(&ms), vec!["", "古池", "や", ""]);
        assert_eq!(ms[1].pos(), "カスタム名詞");
        assert_eq!(ms[2].pos(), "カスタム名詞");
    }

    #[test]
    fn empty_text_is_only_boundaries() {
        let ms = analyzer().tokenize("", None);
        assert_eq!(ms.len(), 2);
        assert!(ms.iter().all(Morpheme::is_boundary));
    }

    #[test]
    fn disable_words() {
        let mut lexicon = Lexicon::from_yaml_str(LEXICON).unwrap();
        assert_eq!(lexicon.len(), 5);
        lexicon.disable_words(vec!["古池"]);
        assert_eq!(lexicon.len(), 4);
        let ms = LexiconAnalyzer::new(lexicon).tokenize("古池", None);
        assert_eq!(surfaces(&ms), vec!["", "古", "池", ""]);
    }

    #[test]
    fn disabled_slot_is_reused() {
        let mut lexicon = Lexicon::from_yaml_str(LEXICON).unwrap();
        let furuike = LexiconEntry {
            surface: "古池".to_string(),
            features: ["名詞", "一般", "*", "*", "*", "*", "古池", "フルイケ", "フルイケ"]
                .iter()
                .map(|f| f.to_string())
                .collect(),
        };
        for _ in 0..3 {
            lexicon.disable_words(vec!["古池", "ジャン"]);
            lexicon.add_entry(furuike.clone());
        }
        assert_eq!(lexicon.len(), 4);
        assert_eq!(lexicon.entries.len(), 5);
        // the slot of ジャン stays free; unknown words free nothing
        lexicon.disable_words(vec!["蛙"]);
        assert_eq!(lexicon.free.len(), 1);

        let ms = LexiconAnalyzer::new(lexicon).tokenize("古池ジャン", None);
        assert_eq!(surfaces(&ms), vec!["", "古池", "ジャン", ""]);
        assert_eq!(ms[1].reading(), "フルイケ");
        assert_eq!(ms[2].pos(), "名詞");
        assert_eq!(ms[2].phonetic_tag(), "ジャン");
    }

    #[test]
    fn load_lexicon_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(LEXICON.as_bytes()).unwrap();
        let lexicon = Lexicon::load(file.path()).unwrap();
        assert_eq!(lexicon.len(), 5);

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        bad.write_all(b"entries: [not, a, list, of, entries").unwrap();
        assert!(Lexicon::load(bad.path()).is_err());
    }
}
