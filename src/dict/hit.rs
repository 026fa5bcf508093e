/// A dictionary hit: `[begin, end]` char positions (inclusive) of the
/// matched word and the id of the entry it resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub begin: usize,
    pub end: usize,
    pub entry: usize,
}

impl Hit {
    pub fn new(begin: usize, end: usize, entry: usize) -> Self {
        Hit { begin, end, entry }
    }

    pub fn length(&self) -> usize {
        self.end - self.begin + 1
    }
}
