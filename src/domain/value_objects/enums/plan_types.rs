use std::fmt::Display;

/// Subscription tiers known to the entitlement table.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanType {
    #[default]
    Free,
    Basic,
    Pro,
    Enterprise,
}

impl Display for PlanType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let plan = match self {
            PlanType::Free => "free",
            PlanType::Basic => "basic",
            PlanType::Pro => "pro",
            PlanType::Enterprise => "enterprise",
        };
        write!(f, "{}", plan)
    }
}

impl PlanType {
    pub const ALL: [PlanType; 4] = [
        PlanType::Free,
        PlanType::Basic,
        PlanType::Pro,
        PlanType::Enterprise,
    ];

    /// Case-insensitive. Anything unrecognised is treated as the free plan.
    pub fn from_str(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "free" => PlanType::Free,
            "basic" => PlanType::Basic,
            "pro" => PlanType::Pro,
            "enterprise" => PlanType::Enterprise,
            _ => PlanType::Free,
        }
    }
}
