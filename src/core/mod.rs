pub mod analyzer;
pub mod char_util;
pub mod matcher;
pub mod morpheme;
pub mod normalizer;
pub mod pos;
