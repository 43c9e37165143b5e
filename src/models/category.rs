use serde::{Deserialize, Serialize};

use super::record::{FieldPatch, RecordId, Resource};

/// Wire field names for category records.
pub mod fields {
    pub const NAME: &str = "CategoryName";
    pub const DESCRIPTION: &str = "Description";
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Category {
    #[serde(rename = "CategoryID", default)]
    pub id: RecordId,
    #[serde(rename = "CategoryName", default)]
    pub name: String,
    #[serde(rename = "Description", default)]
    pub description: String,
}

impl Category {
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl Resource for Category {
    const PATH: &'static str = "categories";
    const LABEL: &'static str = "Category";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn primary_text(&self) -> &str {
        &self.name
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            fields::NAME => Some(self.name.clone()),
            fields::DESCRIPTION => Some(self.description.clone()),
            _ => None,
        }
    }

    fn apply(&mut self, patch: &FieldPatch) {
        for (field, value) in patch.iter() {
            match field {
                fields::NAME => self.name = value.to_string(),
                fields::DESCRIPTION => self.description = value.to_string(),
                _ => {}
            }
        }
    }

    fn field_names() -> &'static [&'static str] {
        &[fields::NAME, fields::DESCRIPTION]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_roundtrip() {
        let category = Category::new("3", "Confections").with_description("Sweets and candies");
        let json = serde_json::to_string(&category).unwrap();
        let parsed: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, category);
    }

    #[test]
    fn test_apply_overwrites_named_fields_only() {
        let mut category = Category::new("3", "Confections").with_description("Sweets");
        category.apply(&FieldPatch::new().with(fields::DESCRIPTION, "Desserts"));
        assert_eq!(category.name, "Confections");
        assert_eq!(category.description, "Desserts");
    }
}
