use anyhow::Result;
use diesel::{RunQueryDsl, dsl::count, prelude::*};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::plan_usages::PlanUsageEntity,
        repositories::account_usage::AccountUsageRepository,
    },
    infra::postgres::{
        postgres_connection::PgPoolSquad,
        schema::{company_profiles, subscriptions},
    },
};

pub struct AccountUsagePostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl AccountUsagePostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

impl AccountUsageRepository for AccountUsagePostgres {
    fn find_plan_usage(&self, account_id: Uuid) -> Result<Option<PlanUsageEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = subscriptions::table
            .left_join(
                company_profiles::table.on(company_profiles::user_id
                    .eq(subscriptions::user_id)
                    .and(company_profiles::is_active.eq(true))),
            )
            .filter(subscriptions::user_id.eq(account_id))
            .group_by(subscriptions::plan_type)
            .select((
                subscriptions::plan_type,
                count(company_profiles::id.nullable()),
            ))
            .first::<(String, i64)>(&mut conn)
            .optional()?;

        Ok(row.map(|(plan_type, active_profiles)| PlanUsageEntity {
            plan_type,
            active_profiles: Some(active_profiles),
        }))
    }
}
