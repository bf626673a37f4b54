/// An account's subscribed plan and how many of its profiles are active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanUsageEntity {
    pub plan_type: String,
    pub active_profiles: Option<i64>,
}
