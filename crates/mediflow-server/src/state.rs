//! Shared server state: settings and the gateway, both read-only after
//! startup and handed to handlers behind an `Arc`.

use mediflow_config::Settings;
use mediflow_gateway::ClinicGateway;

pub struct AppState {
    pub settings: Settings,
    pub gateway: ClinicGateway,
}

impl AppState {
    pub fn new(settings: Settings, gateway: ClinicGateway) -> Self {
        Self { settings, gateway }
    }
}
