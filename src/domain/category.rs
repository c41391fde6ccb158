use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub subcategories: Vec<String>,
}

impl Category {
    pub fn new(id: &str, name: &str, subcategories: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            subcategories: subcategories.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn has_subcategories(&self) -> bool {
        !self.subcategories.is_empty()
    }

    pub fn contains_subcategory(&self, tag: &str) -> bool {
        self.subcategories.iter().any(|s| s.eq_ignore_ascii_case(tag))
    }
}
