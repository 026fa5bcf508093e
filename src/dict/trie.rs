use std::collections::HashMap;

use crate::dict::hit::Hit;

#[derive(Debug, Default)]
pub struct TrieNode {
    value: Option<char>,
    entry: Option<usize>,
    child_nodes: HashMap<char, TrieNode>,
}

impl TrieNode {
    pub fn new(c: char) -> Self {
        TrieNode {
            value: Some(c),
            entry: None,
            child_nodes: HashMap::new(),
        }
    }

    pub fn has_childs(&self) -> bool {
        !self.child_nodes.is_empty()
    }

    fn find<C: Iterator<Item = char>>(&self, chars: C) -> Option<&TrieNode> {
        let mut current_node = self;
        for c in chars {
            current_node = current_node.child_nodes.get(&c)?;
        }
        Some(current_node)
    }

    pub fn get<C: Iterator<Item = char>>(&self, chars: C) -> Option<usize> {
        self.find(chars).and_then(|node| node.entry)
    }

    /// Unmark a word, returning the entry it pointed to.
    pub fn delete<C: Iterator<Item = char>>(&mut self, chars: C) -> Option<usize> {
        let mut current_node = self;
        for c in chars {
            current_node = current_node.child_nodes.get_mut(&c)?;
        }
        current_node.entry.take()
    }

    /// Insert a word, returning the entry it replaced.
    pub fn insert<C: Iterator<Item = char>>(&mut self, chars: C, entry: usize) -> Option<usize> {
        let mut current_node = self;
        for c in chars {
            current_node = current_node
                .child_nodes
                .entry(c)
                .or_insert_with(|| TrieNode::new(c));
        }
        if current_node.value.is_none() {
            // empty word
            return None;
        }
        current_node.entry.replace(entry)
    }

    /// Every word in the trie that is a prefix of `char_list[offset..]`,
    /// shortest first.
    pub fn match_with_offset(&self, char_list: &[char], offset: usize) -> Vec<Hit> {
        let mut hits = Vec::new();
        let mut current_node = self;
        for (cursor, c) in char_list.iter().enumerate().skip(offset) {
            match current_node.child_nodes.get(c) {
                Some(child) => current_node = child,
                None => break,
            }
            if let Some(entry) = current_node.entry {
                hits.push(Hit::new(offset, cursor, entry));
            }
            if !current_node.has_childs() {
                break;
            }
        }
        hits
    }
}

#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    size: usize,
}

impl Trie {
    pub fn insert<C: Iterator<Item = char>>(&mut self, chars: C, entry: usize) -> Option<usize> {
        let mut chars = chars.peekable();
        if chars.peek().is_none() {
            return None;
        }
        let replaced = self.root.insert(chars, entry);
        if replaced.is_none() {
            self.size += 1;
        }
        replaced
    }

    pub fn delete<C: Iterator<Item = char>>(&mut self, chars: C) -> Option<usize> {
        let deleted = self.root.delete(chars);
        if deleted.is_some() {
            self.size -= 1;
        }
        deleted
    }

    pub fn exist<C: Iterator<Item = char>>(&self, chars: C) -> bool {
        self.root.get(chars).is_some()
    }

    pub fn get<C: Iterator<Item = char>>(&self, chars: C) -> Option<usize> {
        self.root.get(chars)
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn match_word_with_offset(&self, char_list: &[char], offset: usize) -> Vec<Hit> {
        self.root.match_with_offset(char_list, offset)
    }

    pub fn longest_match(&self, char_list: &[char], offset: usize) -> Option<Hit> {
        self.match_word_with_offset(char_list, offset).pop()
    }
}
