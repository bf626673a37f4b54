use tracing::debug;

use crate::domain::{entitlement_table, value_objects::plans::PlanEntitlement};

pub fn get_access(plan_identifier: &str) -> &'static PlanEntitlement {
    entitlement_table::lookup(plan_identifier)
}

pub fn can_create_profile(plan_identifier: &str, current_count: i64) -> bool {
    let allowed = get_access(plan_identifier).profile_limit.allows(current_count);
    debug!(
        plan = plan_identifier,
        current_count, allowed, "access_resolver: profile creation check"
    );
    allowed
}

pub fn has_feature(plan_identifier: &str, feature: &str) -> bool {
    get_access(plan_identifier).has_feature(feature)
}

pub fn can_create_tax_obligation(plan_identifier: &str, current_count: i64) -> bool {
    let allowed = get_access(plan_identifier)
        .tax_obligation_limit
        .allows(current_count);
    debug!(
        plan = plan_identifier,
        current_count, allowed, "access_resolver: tax obligation creation check"
    );
    allowed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::features;

    #[test]
    fn known_plans_expose_their_feature_sets() {
        assert_eq!(
            get_access("free").features,
            &["view_compliance_guides", "basic_tax_info"]
        );
        assert_eq!(
            get_access("basic").features,
            &[
                "email_reminders",
                "tax_calculator",
                "filing_guides",
                "tax_obligations_limit_3"
            ]
        );
        assert_eq!(
            get_access("pro").features,
            &[
                "whatsapp_reminders",
                "email_reminders",
                "advanced_tax_calculator",
                "filing_guides",
                "unlimited_tax_obligations",
                "priority_support"
            ]
        );
        assert_eq!(
            get_access("enterprise").features,
            &[
                "unlimited_profiles",
                "whatsapp_reminders",
                "email_reminders",
                "advanced_tax_calculator",
                "api_access",
                "multi_user_access",
                "dedicated_account_manager",
                "custom_integrations"
            ]
        );
    }

    #[test]
    fn unrecognised_plans_resolve_like_free() {
        for plan in ["platinum", "", "FREE_TRIAL", "pro plus"] {
            assert_eq!(get_access(plan), get_access("free"));
        }
    }

    #[test]
    fn enterprise_can_always_create_profiles() {
        for count in [0, 1, 5, 100, 10_000, i64::MAX] {
            assert!(can_create_profile("enterprise", count));
        }
    }

    #[test]
    fn basic_allows_a_single_profile() {
        assert!(can_create_profile("basic", 0));
        assert!(!can_create_profile("basic", 1));
        assert!(!can_create_profile("basic", 2));
    }

    #[test]
    fn pro_allows_up_to_five_profiles() {
        assert!(can_create_profile("pro", 4));
        assert!(!can_create_profile("pro", 5));
    }

    #[test]
    fn free_cannot_create_profiles() {
        assert!(!can_create_profile("free", 0));
        assert!(!can_create_profile("unknown", 0));
    }

    #[test]
    fn negative_counts_are_below_any_limit() {
        assert!(can_create_profile("free", -1));
        assert!(can_create_profile("basic", -5));
    }

    #[test]
    fn plan_lookup_ignores_case_for_checks() {
        assert!(can_create_profile("BASIC", 0));
        assert!(has_feature("Pro", features::WHATSAPP_REMINDERS));
    }

    #[test]
    fn has_feature_uses_exact_membership() {
        assert!(has_feature("pro", "whatsapp_reminders"));
        assert!(!has_feature("pro", "api_access"));
        assert!(!has_feature("pro", "whatsapp"));
        assert!(!has_feature("free", "anything_not_listed"));
        assert!(has_feature("enterprise", features::API_ACCESS));
    }

    #[test]
    fn basic_allows_three_tax_obligations() {
        assert!(can_create_tax_obligation("basic", 0));
        assert!(can_create_tax_obligation("basic", 2));
        assert!(!can_create_tax_obligation("basic", 3));
        assert!(!can_create_tax_obligation("basic", 4));
    }

    #[test]
    fn free_cannot_create_tax_obligations() {
        assert!(!can_create_tax_obligation("free", 0));
        assert!(!can_create_tax_obligation("no_such_plan", 0));
    }

    #[test]
    fn pro_and_enterprise_have_unlimited_tax_obligations() {
        for count in [0, 3, 50, i64::MAX] {
            assert!(can_create_tax_obligation("pro", count));
            assert!(can_create_tax_obligation("ENTERPRISE", count));
        }
    }

    #[test]
    fn profile_and_tax_obligation_limits_are_independent() {
        // pro caps profiles at five while obligations stay unlimited
        assert!(!can_create_profile("pro", 5));
        assert!(can_create_tax_obligation("pro", 5));
        // basic caps both, at different counts
        assert!(!can_create_profile("basic", 1));
        assert!(can_create_tax_obligation("basic", 1));
    }
}
