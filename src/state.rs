use crate::audit::AuditLog;
use crate::config::AppConfig;
use crate::services::alerts::AlertProvider;
use crate::services::dialer::CallDialer;
use crate::services::dialogue::DialogueEngine;
use crate::services::sheets::SheetSource;

pub struct AppState {
    pub config: AppConfig,
    pub sheets: Box<dyn SheetSource>,
    pub alerts: Box<dyn AlertProvider>,
    pub dialer: Box<dyn CallDialer>,
    pub audit: AuditLog,
    pub dialogue: DialogueEngine,
}
