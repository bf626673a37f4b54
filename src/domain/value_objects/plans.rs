use serde::Serialize;

/// Ceiling on a countable resource (business profiles, tax obligations) for a plan.
///
/// Serialized as a plain number, or `null` for [`UsageLimit::Unlimited`].
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum UsageLimit {
    Limited(u32),
    Unlimited,
}

impl UsageLimit {
    /// Whether an account already holding `current` items may add one more.
    ///
    /// Counts are compared as-is: a negative count is below every limit.
    pub fn allows(&self, current: i64) -> bool {
        match self {
            UsageLimit::Unlimited => true,
            UsageLimit::Limited(max) => current < i64::from(*max),
        }
    }
}

/// Limits and feature flags attached to a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanEntitlement {
    pub profile_limit: UsageLimit,
    pub tax_obligation_limit: UsageLimit,
    pub features: &'static [&'static str],
}

impl PlanEntitlement {
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| *f == feature)
    }

    pub fn feature_list(&self) -> Vec<String> {
        self.features.iter().map(|f| f.to_string()).collect()
    }
}
