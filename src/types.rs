//! Common types and data structures

use crate::constants::ROW_COUNT;

/// One row of the demo list: an avatar asset id plus two lines of text.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub avatar: &'static str,
    pub title: String,
    pub subtitle: String,
}

/// The fixed demo content: ten identical rows.
pub fn demo_items() -> Vec<ListItem> {
    (0..ROW_COUNT)
        .map(|_| ListItem {
            avatar: "espresso",
            title: "Bolt UIX".to_string(),
            subtitle: "Get started with Beautiful UI UX design patterns.".to_string(),
        })
        .collect()
}
