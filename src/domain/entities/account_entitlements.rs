use serde::Serialize;

use crate::domain::value_objects::plans::UsageLimit;

/// What an account may do right now. Built per request, never stored.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AccountEntitlement {
    pub plan: String,
    pub max_profiles: UsageLimit,
    pub current_profiles: i64,
    pub can_create_profile: bool,
    pub features: Vec<String>,
}
