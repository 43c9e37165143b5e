use serde::{Deserialize, Serialize};

use super::record::{FieldPatch, RecordId, Resource};

/// Wire field names for product records.
pub mod fields {
    pub const NAME: &str = "ProductName";
    pub const CATEGORY: &str = "Category";
    pub const PRICE: &str = "Price";
}

/// Price stays a string: the server stores it verbatim and the client never
/// does arithmetic on it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(rename = "ProductID", default)]
    pub id: RecordId,
    #[serde(rename = "ProductName", default)]
    pub name: String,
    #[serde(rename = "Category", default)]
    pub category: String,
    #[serde(rename = "Price", default)]
    pub price: String,
}

impl Product {
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = price.into();
        self
    }
}

impl Resource for Product {
    const PATH: &'static str = "products";
    const LABEL: &'static str = "Product";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn primary_text(&self) -> &str {
        &self.name
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            fields::NAME => Some(self.name.clone()),
            fields::CATEGORY => Some(self.category.clone()),
            fields::PRICE => Some(self.price.clone()),
            _ => None,
        }
    }

    fn apply(&mut self, patch: &FieldPatch) {
        for (field, value) in patch.iter() {
            match field {
                fields::NAME => self.name = value.to_string(),
                fields::CATEGORY => self.category = value.to_string(),
                fields::PRICE => self.price = value.to_string(),
                _ => {}
            }
        }
    }

    fn field_names() -> &'static [&'static str] {
        &[fields::NAME, fields::CATEGORY, fields::PRICE]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_id_and_missing_category() {
        let product: Product =
            serde_json::from_str(r#"{"ProductID": 12, "ProductName": "Chai", "Price": "18"}"#)
                .unwrap();
        assert_eq!(product.id.as_str(), "12");
        assert_eq!(product.name, "Chai");
        assert_eq!(product.category, "");
        assert_eq!(product.price, "18");
    }

    #[test]
    fn test_apply_patch() {
        let mut product = Product::new("12", "Chai").with_price("18");
        product.apply(&FieldPatch::new().with(fields::PRICE, "19.50"));
        assert_eq!(product.price, "19.50");
        assert_eq!(product.name, "Chai");
    }
}
