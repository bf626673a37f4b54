pub mod account_usage;
