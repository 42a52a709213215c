use crate::config::Config;
use crate::logs::EventLogs;
use crate::store::QuizStore;
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub store: QuizStore,
    pub logs: EventLogs,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = QuizStore::new(config.quizzes_dir());
        let logs = EventLogs::new(config.results_log(), config.cheats_log());
        Self {
            store,
            logs,
            config,
        }
    }
}

impl FromRef<AppState> for QuizStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for EventLogs {
    fn from_ref(state: &AppState) -> Self {
        state.logs.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
