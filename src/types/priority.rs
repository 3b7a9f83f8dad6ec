use std::collections::HashMap;

/// Rank resolved for chains missing from the table. Sits strictly below
/// every configured priority, so unknown chains never survive the balance
/// filter.
pub const DEFAULT_PRIORITY: i32 = -99;

/// Static chain -> display rank mapping. Higher ranks sort first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriorityTable {
    ranks: HashMap<String, i32>,
}

impl PriorityTable {
    pub fn new(ranks: HashMap<String, i32>) -> Self {
        PriorityTable { ranks }
    }

    pub fn priority(&self, chain: &str) -> i32 {
        self.ranks.get(chain).copied().unwrap_or(DEFAULT_PRIORITY)
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

impl FromIterator<(String, i32)> for PriorityTable {
    fn from_iter<I: IntoIterator<Item = (String, i32)>>(iter: I) -> Self {
        PriorityTable {
            ranks: iter.into_iter().collect(),
        }
    }
}
