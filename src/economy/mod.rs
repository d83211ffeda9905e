//! The economic model: ownable properties and commissions.

pub mod property;

pub use property::{Property, PropertyId, PropertyKind, PropertyRegistry};
