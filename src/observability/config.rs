use std::env;

use crate::config::stage::Stage;

#[derive(Debug, Clone)]
pub(crate) struct ServiceContext {
    pub(crate) service_name: String,
    pub(crate) environment: String,
    pub(crate) component: String,
}

impl ServiceContext {
    pub(crate) fn from_env(component: &str, stage: Stage) -> Self {
        let service_name = env::var("SERVICE_NAME").ok();
        Self::new(component, service_name, stage)
    }

    pub(crate) fn new(component: &str, service_name: Option<String>, stage: Stage) -> Self {
        let component = component.trim().to_string();

        let service_name = service_name
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| component.clone());

        Self {
            service_name,
            environment: stage.to_string(),
            component,
        }
    }
}
