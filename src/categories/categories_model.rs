use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Investment category owned by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub label: String,
}

impl Category {
    /// Builds an id -> label lookup for category resolution during report assembly.
    pub fn build_label_lookup(categories: &[Category]) -> HashMap<i64, String> {
        categories
            .iter()
            .map(|category| (category.id, category.label.clone()))
            .collect()
    }
}
