use std::fs;
use std::path::Path;

use log::info;

use crate::core::morpheme::{Morpheme, PLACEHOLDER};
use crate::dict::hit::Hit;
use crate::dict::trie::Trie;
use crate::error::{Error, Result};

const FIELD_COUNT: usize = 4;

/// One custom vocabulary line:
/// `日本経済新聞,日本 経済 新聞,ニホン ケイザイ シンブン,カスタム名詞`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEntry {
    pub surface: String,
    pub segments: Vec<String>,
    pub readings: Vec<String>,
    pub pos: String,
}

impl UserEntry {
    fn parse(line: &str) -> std::result::Result<Self, String> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != FIELD_COUNT {
            return Err(format!(
                "expected {} fields, found {}",
                FIELD_COUNT,
                fields.len()
            ));
        }
        let surface = fields[0].to_string();
        let segments: Vec<String> = fields[1].split_whitespace().map(String::from).collect();
        let readings: Vec<String> = fields[2].split_whitespace().map(String::from).collect();
        let pos = fields[3].to_string();
        if surface.is_empty() || pos.is_empty() {
            return Err("empty surface or part of speech".to_string());
        }
        if segments.is_empty() || segments.len() != readings.len() {
            return Err(format!(
                "{} segments but {} readings",
                segments.len(),
                readings.len()
            ));
        }
        if segments.concat() != surface {
            return Err(format!("segments do not spell {}", surface));
        }
        Ok(UserEntry {
            surface,
            segments,
            readings,
            pos,
        })
    }

    /// The morphemes this entry produces, one per segment.
    pub fn morphemes(&self) -> Vec<Morpheme> {
        self.segments
            .iter()
            .zip(self.readings.iter())
            .map(|(segment, reading)| {
                Morpheme::new(
                    segment.as_str(),
                    vec![
                        self.pos.clone(),
                        PLACEHOLDER.to_string(),
                        PLACEHOLDER.to_string(),
                        PLACEHOLDER.to_string(),
                        PLACEHOLDER.to_string(),
                        PLACEHOLDER.to_string(),
                        segment.clone(),
                        reading.clone(),
                        reading.clone(),
                    ],
                )
            })
            .collect()
    }
}

/// Custom vocabulary handed to the analyzer for one call.
#[derive(Debug, Default)]
pub struct UserDictionary {
    entries: Vec<UserEntry>,
    index: Trie,
}

impl UserDictionary {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::resource_load(path, e))?;
        let dict = Self::parse(&content).map_err(|e| Error::resource_load(path, e))?;
        info!(
            "load user dictionary {} size = {}",
            path.display(),
            dict.len()
        );
        Ok(dict)
    }

    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        let mut dict = UserDictionary::default();
        for (number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let entry = UserEntry::parse(line).map_err(|e| format!("line {}: {}", number + 1, e))?;
            dict.add_entry(entry);
        }
        Ok(dict)
    }

    pub fn add_entry(&mut self, entry: UserEntry) {
        // later lines win
        match self.index.get(entry.surface.chars()) {
            Some(id) => self.entries[id] = entry,
            None => {
                self.index.insert(entry.surface.chars(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn entries(&self) -> &[UserEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn longest_match(&self, chars: &[char], offset: usize) -> Option<(&UserEntry, Hit)> {
        self.index
            .longest_match(chars, offset)
            .map(|hit| (&self.entries[hit.entry], hit))
    }
}
