use std::{collections::HashSet, hash::Hash};

pub trait Compact {
    fn compact(self) -> Self;
}

impl<T: Eq + Hash + Clone> Compact for Vec<T> {
    /// Drops duplicates, keeping the first occurrence of each value.
    fn compact(self) -> Self {
        let mut seen = HashSet::new();
        self.into_iter()
            .filter(|value| seen.insert(value.clone()))
            .collect()
    }
}

/// Trims user input, refusing text that is empty afterwards.
pub fn clean_text(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
