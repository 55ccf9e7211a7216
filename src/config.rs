pub mod library;
pub mod log;

use crate::config::library::LibraryConfig;
use serde::Deserialize;
use std::env;

const ENV_PREFIX: &str = "CATALOG";

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    logger: Option<log::Config>,
    #[serde(default)]
    library: LibraryConfig,
}

impl AppConfig {
    pub fn logger(&self) -> Option<&log::Config> {
        self.logger.as_ref()
    }

    pub fn library(&self) -> &LibraryConfig {
        &self.library
    }
}

fn run_mode() -> String {
    env::var("RUN_MODE").unwrap_or_else(|_| "development".into())
}

/// 실행 환경에 따라 .env 파일을 로드한다.
pub fn load_dotenv() {
    let env_filename = env::var("RUN_MODE")
        .map(|env| format!(".env.{}", env))
        .unwrap_or_else(|_| ".env".into());

    dotenvy::from_filename(env_filename).ok();
}

/// `config/{RUN_MODE}.json` 파일과 `CATALOG_` 로 시작하는 환경 변수를 읽어 설정을 만든다.
///
/// 설정 파일은 없어도 되며, 중첩된 키는 `__` 로 구분한다. (예: `CATALOG_LIBRARY__RETURN_POLICY`)
pub fn load_config() -> Result<AppConfig, config::ConfigError> {
    let config = config::Config::builder()
        .add_source(config::File::with_name(&format!("config/{}.json", run_mode())).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::ReturnPolicy;
    use crate::shelf::ShelfKind;

    fn from_json(json: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(json, config::FileFormat::Json))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = from_json("{}");

        assert!(config.logger().is_none());
        assert_eq!(config.library().return_policy(), ReturnPolicy::HistoryOnly);
        assert!(config.library().shelves().is_empty());
    }

    #[test]
    fn reads_library_section() {
        let config = from_json(
            r#"{
                "library": {
                    "return_policy": "restore_availability",
                    "shelves": [
                        { "kind": "book", "capacity": 100, "floor": 1 },
                        { "kind": "magazine", "capacity": 20, "floor": 2 }
                    ]
                }
            }"#,
        );

        let library = config.library();
        assert_eq!(library.return_policy(), ReturnPolicy::RestoreAvailability);
        assert_eq!(library.shelves().len(), 2);
        assert_eq!(library.shelves()[1].kind(), ShelfKind::Magazine);
        assert_eq!(library.shelves()[1].placement().capacity(), 20);
    }

    #[test]
    fn reads_logger_section() {
        let config = from_json(r#"{ "logger": { "dir": "logs", "name": "catalog", "level": "INFO" } }"#);

        let logger = config.logger().unwrap();
        assert_eq!(logger.dir(), "logs");
        assert_eq!(logger.name(), "catalog");
    }
}
