mod category;
mod customer;
mod product;
mod record;

pub use category::Category;
pub use customer::Customer;
pub use product::Product;
pub use record::{FieldPatch, RecordId, Resource};

pub use category::fields as category_fields;
pub use customer::fields as customer_fields;
pub use product::fields as product_fields;
