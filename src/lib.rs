//! Plan entitlements: which features a subscription plan unlocks and whether an account
//! may create another business profile or tax obligation.
//!
//! The pure checks live in [`usecases::access_resolver`]. Account-level resolution
//! against Postgres goes through [`usecases::account_entitlement`].

pub mod config;
pub mod domain;
pub mod infra;
pub mod observability;
pub mod usecases;

use std::sync::Arc;

use anyhow::Result;
use infra::postgres::{postgres_connection, repositories::account_usage::AccountUsagePostgres};
use tracing::info;
use usecases::account_entitlement::AccountEntitlementUseCase;

pub use usecases::access_resolver::{
    can_create_profile, can_create_tax_obligation, get_access, has_feature,
};

/// Loads config, installs logging and connects to Postgres.
pub fn connect(component: &str) -> Result<AccountEntitlementUseCase<AccountUsagePostgres>> {
    let dotenvy_env = config::config_loader::load()?;

    observability::init_observability(component, dotenvy_env.stage)?;
    info!("ENV has been loaded");

    let postgres_pool = postgres_connection::establish_connection(&dotenvy_env.database)?;
    info!("Postgres connection has been established");

    Ok(AccountEntitlementUseCase::new(Arc::new(
        AccountUsagePostgres::new(Arc::new(postgres_pool)),
    )))
}
