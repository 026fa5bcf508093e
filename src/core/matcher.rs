//! Mora pattern matching over analyzed morphemes.
//!
//! [`scan`] looks for every window of the input whose segments add up to
//! the rule, recovering from mismatches; [`validate`] checks that the
//! whole input is exactly one such window.

use log::{debug, trace};

use crate::core::char_util::{count_ambiguous, count_mora, is_phonetic_word};
use crate::core::morpheme::Morpheme;
use crate::core::normalizer::normalize;
use crate::core::pos::{is_sentence_end, is_space, is_word_start, COMMA};

/// Upper bound of morae a segment may overshoot by when the overshoot is
/// made of geminate / long vowel marks.
const MAX_SLACK: usize = 1;

#[derive(Debug, PartialEq, Eq)]
enum Step {
    Open,
    Complete,
    Overshoot,
}

/// Progress of one candidate through the rule.
#[derive(Debug, Clone)]
pub struct MatchState<'r> {
    rule: &'r [u32],
    segment: usize,
    remaining: i64,
    ambiguity: usize,
    segment_len: usize,
    text: String,
    candidate_start: usize,
}

impl<'r> MatchState<'r> {
    pub fn new(rule: &'r [u32]) -> Self {
        MatchState {
            rule,
            segment: 0,
            remaining: rule.first().copied().map_or(0, i64::from),
            ambiguity: 0,
            segment_len: 0,
            text: String::new(),
            candidate_start: 0,
        }
    }

    pub fn reset(&mut self) {
        self.segment = 0;
        self.remaining = self.rule.first().copied().map_or(0, i64::from);
        self.ambiguity = 0;
        self.segment_len = 0;
        self.text.clear();
    }

    pub fn segment(&self) -> usize {
        self.segment
    }

    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn is_fresh(&self) -> bool {
        self.segment == 0 && self.segment_len == 0
    }

    fn at_segment_start(&self) -> bool {
        self.segment_len == 0
    }

    fn consume(&mut self, m: &Morpheme, tolerant: bool) -> Step {
        let tag = m.phonetic_tag();
        self.remaining -= count_mora(tag) as i64;
        self.ambiguity += count_ambiguous(tag);
        self.segment_len += 1;
        self.text.push_str(m.surface());

        let slack = if tolerant {
            self.ambiguity.min(MAX_SLACK) as i64
        } else {
            0
        };
        if self.remaining == 0 || (self.remaining < 0 && self.remaining + slack == 0) {
            Step::Complete
        } else if self.remaining < 0 {
            Step::Overshoot
        } else {
            Step::Open
        }
    }

    /// Close the current segment. Returns true once the whole rule is done.
    fn advance(&mut self) -> bool {
        self.segment += 1;
        if self.segment >= self.rule.len() {
            return true;
        }
        self.remaining = i64::from(self.rule[self.segment]);
        self.ambiguity = 0;
        self.segment_len = 0;
        self.text.push(' ');
        false
    }

    fn take_text(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}

/// Find all windows of `morphemes` matching `rule`, segments joined by a
/// single space.
pub fn scan(morphemes: &[Morpheme], rule: &[u32]) -> Vec<String> {
    let mut found = Vec::new();
    if rule.is_empty() {
        return found;
    }
    let morphemes = normalize(morphemes);
    let mut state = MatchState::new(rule);
    let mut cursor = 0;

    while cursor < morphemes.len() {
        let m = &morphemes[cursor];
        if m.is_boundary() || is_space(m) {
            cursor += 1;
            continue;
        }
        let tag = m.phonetic_tag();
        if !is_phonetic_word(tag) {
            if tag != COMMA {
                state.reset();
            }
            cursor += 1;
            continue;
        }
        if state.at_segment_start() && !is_word_start(m) {
            state.reset();
            cursor += 1;
            continue;
        }
        if state.is_fresh() {
            state.candidate_start = cursor;
        }

        match state.consume(m, true) {
            Step::Complete => {
                if state.advance() {
                    if is_sentence_end(m) {
                        let matched = state.take_text();
                        debug!("matched {} at {}", matched, state.candidate_start);
                        found.push(matched);
                    } else {
                        trace!("discard {}: cannot end on {}", state.text(), m.surface());
                    }
                    state.reset();
                }
            }
            Step::Overshoot => {
                trace!(
                    "overshoot at {}, retry from {}",
                    m.surface(),
                    state.candidate_start + 1
                );
                cursor = state.candidate_start + 1;
                state.reset();
                continue;
            }
            Step::Open => {}
        }
        cursor += 1;
    }
    found
}

/// Whether `morphemes` as a whole spell out `rule`.
///
/// The rule has to be completed exactly, without slack, on the morpheme
/// right before the final one (the end of text marker), and that morpheme
/// must be able to end a sentence.
pub fn validate(morphemes: &[Morpheme], rule: &[u32]) -> bool {
    if rule.is_empty() {
        return false;
    }
    let mut state = MatchState::new(rule);
    for (cursor, m) in morphemes.iter().enumerate() {
        if m.is_boundary() || is_space(m) {
            continue;
        }
        let tag = m.phonetic_tag();
        if !is_phonetic_word(tag) {
            if tag == COMMA {
                continue;
            }
            return false;
        }
        if state.at_segment_start() && !is_word_start(m) {
            return false;
        }
        match state.consume(m, false) {
            Step::Complete => {
                if state.advance() {
                    return cursor + 2 == morphemes.len() && is_sentence_end(m);
                }
            }
            Step::Overshoot => return false,
            Step::Open => {}
        }
    }
    false
}
