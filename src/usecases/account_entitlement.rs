use anyhow::Result;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::{
    domain::{
        entities::{account_entitlements::AccountEntitlement, plan_usages::PlanUsageEntity},
        repositories::account_usage::AccountUsageRepository,
        value_objects::enums::plan_types::PlanType,
    },
    usecases::access_resolver,
};

/// Resolves what an account may do from its subscription row and active profile count.
pub struct AccountEntitlementUseCase<R>
where
    R: AccountUsageRepository + Send + Sync + 'static,
{
    account_usage_repo: Arc<R>,
}

impl<R> AccountEntitlementUseCase<R>
where
    R: AccountUsageRepository + Send + Sync + 'static,
{
    pub fn new(account_usage_repo: Arc<R>) -> Self {
        Self { account_usage_repo }
    }

    pub fn resolve_account_entitlement(&self, account_id: Uuid) -> Result<AccountEntitlement> {
        let usage = match self.account_usage_repo.find_plan_usage(account_id)? {
            Some(usage) => usage,
            None => {
                debug!(%account_id, "account_entitlement: no subscription, using free plan");
                PlanUsageEntity {
                    plan_type: PlanType::Free.to_string(),
                    active_profiles: Some(0),
                }
            }
        };

        let current_profiles = usage.active_profiles.unwrap_or(0);
        let access = access_resolver::get_access(&usage.plan_type);

        debug!(
            %account_id,
            plan = %usage.plan_type,
            current_profiles,
            "account_entitlement: resolved plan usage"
        );

        Ok(AccountEntitlement {
            plan: usage.plan_type.to_uppercase(),
            max_profiles: access.profile_limit,
            current_profiles,
            can_create_profile: access_resolver::can_create_profile(
                &usage.plan_type,
                current_profiles,
            ),
            features: access.feature_list(),
        })
    }
}
