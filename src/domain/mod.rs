pub mod entities;
pub mod entitlement_table;
pub mod repositories;
pub mod value_objects;
