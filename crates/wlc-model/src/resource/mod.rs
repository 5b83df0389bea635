mod quantity;
pub use quantity::Quantity;

mod spec;
pub use spec::{ResourceKind, ResourceSpec};
