pub mod hit;
pub mod lexicon;
pub mod trie;
pub mod user_dictionary;
