pub mod access_resolver;
pub mod account_entitlement;
