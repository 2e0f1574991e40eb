use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use openlab::auth::JsonCredentialStore;
use openlab::config::AppConfig;
use openlab::error::AppError;
use openlab::workflows::recruiting::{
    ApplicationIntake, JsonApplicationStore, JsonNoticeStore, NoticeBoard, ScreeningClient,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Concrete service graph backed by the configured data directory.
pub(crate) struct Services {
    pub(crate) credentials: Arc<JsonCredentialStore>,
    pub(crate) board: Arc<NoticeBoard<JsonNoticeStore, JsonApplicationStore>>,
    pub(crate) intake: Arc<ApplicationIntake<JsonNoticeStore, JsonApplicationStore>>,
    pub(crate) screener: Arc<ScreeningClient>,
}

pub(crate) fn build_services(config: &AppConfig) -> Result<Services, AppError> {
    let data_dir = config.storage.data_dir.as_path();

    let notices = Arc::new(JsonNoticeStore::in_dir(data_dir));
    let applications = Arc::new(JsonApplicationStore::in_dir(data_dir));
    let board = Arc::new(NoticeBoard::new(notices, applications.clone()));

    let screener = Arc::new(ScreeningClient::from_config(&config.screening)?);
    let intake = Arc::new(ApplicationIntake::new(
        board.clone(),
        applications,
        screener.clone(),
    ));

    let credentials = Arc::new(JsonCredentialStore::in_dir(data_dir));

    Ok(Services {
        credentials,
        board,
        intake,
        screener,
    })
}
