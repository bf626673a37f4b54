pub mod account_entitlements;
pub mod plan_usages;
