//! Feature identifiers gated by plan.

pub const VIEW_COMPLIANCE_GUIDES: &str = "view_compliance_guides";
pub const BASIC_TAX_INFO: &str = "basic_tax_info";
pub const EMAIL_REMINDERS: &str = "email_reminders";
pub const TAX_CALCULATOR: &str = "tax_calculator";
pub const FILING_GUIDES: &str = "filing_guides";
pub const TAX_OBLIGATIONS_LIMIT_3: &str = "tax_obligations_limit_3";
pub const WHATSAPP_REMINDERS: &str = "whatsapp_reminders";
pub const ADVANCED_TAX_CALCULATOR: &str = "advanced_tax_calculator";
pub const UNLIMITED_TAX_OBLIGATIONS: &str = "unlimited_tax_obligations";
pub const PRIORITY_SUPPORT: &str = "priority_support";
pub const UNLIMITED_PROFILES: &str = "unlimited_profiles";
pub const API_ACCESS: &str = "api_access";
pub const MULTI_USER_ACCESS: &str = "multi_user_access";
pub const DEDICATED_ACCOUNT_MANAGER: &str = "dedicated_account_manager";
pub const CUSTOM_INTEGRATIONS: &str = "custom_integrations";
