use crate::prelude::*;

/// Supply of variables never handed out before by this supply.
///
/// Each proof search owns one, so concurrent or repeated searches never
/// share a counter.
#[derive(Clone, Default)]
pub struct Fresh {
    count: u32,
}

impl Fresh {
    pub fn variable(&mut self) -> Id<Variable> {
        let variable = Id::new(self.count);
        self.count += 1;
        variable
    }

    pub fn issued(&self) -> u32 {
        self.count
    }
}
