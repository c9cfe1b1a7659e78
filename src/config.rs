use std::env;
use dotenvy::dotenv;

#[derive(Clone)]
pub struct Config {
    pub store_path: String,
    pub session_key: String,
    pub log_dir: String,

    // List pagination
    pub per_page: u64,
    pub max_per_page: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            store_path: env::var("HRDESK_STORE_PATH")
                .unwrap_or_else(|_| "hrdesk_store.json".to_string()),
            session_key: env::var("HRDESK_SESSION_KEY")
                .unwrap_or_else(|_| "hr_manager_session".to_string()),
            log_dir: env::var("HRDESK_LOG_DIR").unwrap_or_else(|_| "logs".to_string()),

            per_page: env::var("HRDESK_PER_PAGE")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap(),
            max_per_page: env::var("HRDESK_MAX_PER_PAGE")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .unwrap(),
        }
    }
}
