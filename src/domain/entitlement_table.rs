//! Static plan → entitlement mapping.
//!
//! The table is compiled in and never mutated, so it can be read from any thread
//! without synchronisation.

use crate::domain::value_objects::{
    enums::plan_types::PlanType,
    features::*,
    plans::{PlanEntitlement, UsageLimit},
};

pub static FREE: PlanEntitlement = PlanEntitlement {
    profile_limit: UsageLimit::Limited(0),
    tax_obligation_limit: UsageLimit::Limited(0),
    features: &[VIEW_COMPLIANCE_GUIDES, BASIC_TAX_INFO],
};

pub static BASIC: PlanEntitlement = PlanEntitlement {
    profile_limit: UsageLimit::Limited(1),
    tax_obligation_limit: UsageLimit::Limited(3),
    features: &[
        EMAIL_REMINDERS,
        TAX_CALCULATOR,
        FILING_GUIDES,
        TAX_OBLIGATIONS_LIMIT_3,
    ],
};

pub static PRO: PlanEntitlement = PlanEntitlement {
    profile_limit: UsageLimit::Limited(5),
    tax_obligation_limit: UsageLimit::Unlimited,
    features: &[
        WHATSAPP_REMINDERS,
        EMAIL_REMINDERS,
        ADVANCED_TAX_CALCULATOR,
        FILING_GUIDES,
        UNLIMITED_TAX_OBLIGATIONS,
        PRIORITY_SUPPORT,
    ],
};

pub static ENTERPRISE: PlanEntitlement = PlanEntitlement {
    profile_limit: UsageLimit::Unlimited,
    tax_obligation_limit: UsageLimit::Unlimited,
    features: &[
        UNLIMITED_PROFILES,
        WHATSAPP_REMINDERS,
        EMAIL_REMINDERS,
        ADVANCED_TAX_CALCULATOR,
        API_ACCESS,
        MULTI_USER_ACCESS,
        DEDICATED_ACCOUNT_MANAGER,
        CUSTOM_INTEGRATIONS,
    ],
};

impl PlanEntitlement {
    pub fn for_plan(plan: PlanType) -> &'static PlanEntitlement {
        match plan {
            PlanType::Free => &FREE,
            PlanType::Basic => &BASIC,
            PlanType::Pro => &PRO,
            PlanType::Enterprise => &ENTERPRISE,
        }
    }
}

/// Entitlements for a raw plan identifier. Case-insensitive; unknown identifiers get the
/// free plan.
pub fn lookup(plan_identifier: &str) -> &'static PlanEntitlement {
    PlanEntitlement::for_plan(PlanType::from_str(plan_identifier))
}
