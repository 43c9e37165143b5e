use serde::{Deserialize, Serialize};

use super::record::{FieldPatch, RecordId, Resource};

/// Wire field names for customer records.
pub mod fields {
    pub const NAME: &str = "CustomerName";
    pub const ADDRESS: &str = "Address";
    pub const POSTAL_CODE: &str = "PostalCode";
    pub const COUNTRY: &str = "Country";
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    #[serde(rename = "CustomerID", default)]
    pub id: RecordId,
    #[serde(rename = "CustomerName", default)]
    pub name: String,
    #[serde(rename = "Address", default)]
    pub address: String,
    #[serde(rename = "PostalCode", default)]
    pub postal_code: String,
    #[serde(rename = "Country", default)]
    pub country: String,
}

impl Customer {
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = postal_code.into();
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }
}

impl Resource for Customer {
    const PATH: &'static str = "customers";
    const LABEL: &'static str = "Customer";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn primary_text(&self) -> &str {
        &self.name
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            fields::NAME => Some(self.name.clone()),
            fields::ADDRESS => Some(self.address.clone()),
            fields::POSTAL_CODE => Some(self.postal_code.clone()),
            fields::COUNTRY => Some(self.country.clone()),
            _ => None,
        }
    }

    fn apply(&mut self, patch: &FieldPatch) {
        for (field, value) in patch.iter() {
            match field {
                fields::NAME => self.name = value.to_string(),
                fields::ADDRESS => self.address = value.to_string(),
                fields::POSTAL_CODE => self.postal_code = value.to_string(),
                fields::COUNTRY => self.country = value.to_string(),
                _ => {}
            }
        }
    }

    fn field_names() -> &'static [&'static str] {
        &[
            fields::NAME,
            fields::ADDRESS,
            fields::POSTAL_CODE,
            fields::COUNTRY,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let customer = Customer::new("1", "Alfreds Futterkiste")
            .with_address("Obere Str. 57")
            .with_postal_code("12209")
            .with_country("Germany");

        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["CustomerID"], "1");
        assert_eq!(json["CustomerName"], "Alfreds Futterkiste");
        assert_eq!(json["Address"], "Obere Str. 57");
        assert_eq!(json["PostalCode"], "12209");
        assert_eq!(json["Country"], "Germany");
    }

    #[test]
    fn test_missing_fields_default_empty() {
        let customer: Customer = serde_json::from_str(r#"{"CustomerID": 7}"#).unwrap();
        assert_eq!(customer.id.as_str(), "7");
        assert_eq!(customer.name, "");
        assert_eq!(customer.country, "");
    }

    #[test]
    fn test_apply_is_shallow() {
        let mut customer = Customer::new("1", "Bob").with_country("Norway");

        let patch = FieldPatch::new().with(fields::NAME, "Bobby");
        customer.apply(&patch);

        assert_eq!(customer.name, "Bobby");
        // Fields absent from the patch are untouched.
        assert_eq!(customer.country, "Norway");
        assert_eq!(customer.id.as_str(), "1");
    }

    #[test]
    fn test_apply_ignores_unknown_fields() {
        let mut customer = Customer::new("1", "Bob");
        let patch = FieldPatch::new().with("NoSuchField", "x");
        customer.apply(&patch);
        assert_eq!(customer, Customer::new("1", "Bob"));
    }

    #[test]
    fn test_field_lookup_matches_field_names() {
        let customer = Customer::new("1", "Bob").with_address("Elm St 3");
        for name in Customer::field_names() {
            assert!(customer.field(name).is_some());
        }
        assert_eq!(customer.field(fields::ADDRESS).as_deref(), Some("Elm St 3"));
        assert_eq!(customer.field("CustomerID"), None);
    }
}
