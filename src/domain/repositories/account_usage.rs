use anyhow::Result;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::plan_usages::PlanUsageEntity;

/// Blocks the calling thread until the store answers.
#[automock]
pub trait AccountUsageRepository {
    /// `None` when the account has no subscription row.
    fn find_plan_usage(&self, account_id: Uuid) -> Result<Option<PlanUsageEntity>>;
}
