use std::fmt::{Display, Formatter};

/// Running pass/fail counts for a scenario run.
#[derive(Copy, Clone, Default)]
pub struct Tally {
    pub passed: u32,
    pub failed: u32,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pass(&mut self) {
        self.passed += 1;
    }

    pub fn fail(&mut self) {
        self.failed += 1;
    }

    pub fn merge(&mut self, tally: &Self) {
        self.passed += tally.passed;
        self.failed += tally.failed;
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

impl Display for Tally {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "passed({}) failed({})", self.passed, self.failed)
    }
}
