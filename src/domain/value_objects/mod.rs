pub mod enums;
pub mod features;
pub mod plans;
