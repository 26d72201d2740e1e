use config::{Config, Environment, File, FileFormat};
use creational::{abstract_factory::Family, builder::CarModel};
use log::LevelFilter;
use serde::{de, Deserialize, Deserializer};
use structural::decorator::Condiment;
use validator::Validate;

use crate::{demo::DemoKind, AppError};

const DEFAULT_CONFIG: &str = include_str!("../../resources/config/default.toml");
const DEFAULT_CONFIG_PREFIX: &str = "APP";
const LIST_SEPARATOR: &str = ",";
const LIST_KEYS: [&str; 4] = ["demos", "gui_families", "car_models", "condiments"];

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct AppConfig {
    #[validate(length(min = 1))]
    pub demos: Vec<DemoKind>,
    pub gui_families: Vec<Family>,
    pub car_models: Vec<CarModel>,
    pub condiments: Vec<Condiment>,
    pub metrics: bool,
    #[serde(deserialize_with = "deserialize_level_filter")]
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn new() -> Result<Self, AppError> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(environment())
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }
}

fn deserialize_level_filter<'de, D>(deserializer: D) -> Result<LevelFilter, D::Error>
where
    D: Deserializer<'de>,
{
    let level = String::deserialize(deserializer)?;
    level.parse::<LevelFilter>().map_err(de::Error::custom)
}

/// Comma separated values for list settings, e.g. `APP_DEMOS=observer,builder`.
fn environment() -> Environment {
    LIST_KEYS.into_iter().fold(
        Environment::with_prefix(DEFAULT_CONFIG_PREFIX)
            .try_parsing(true)
            .list_separator(LIST_SEPARATOR),
        |environment, key| environment.with_list_parse_key(key),
    )
}

#[cfg(test)]
mod tests {
    use creational::abstract_factory::Family;
    use log::LevelFilter;
    use validator::Validate;

    use super::AppConfig;
    use crate::demo::DemoKind;

    #[test]
    fn test_new() {
        let result = AppConfig::new();
        assert!(
            matches!(&result, Ok(x) if x.demos.len() == 5 && !x.metrics && x.log_level == LevelFilter::Info),
            "By default, it should return a valid config running every demo"
        );

        temp_env::with_var("APP_METRICS", Some("true"), || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Ok(x) if x.metrics),
                "Should take into account env vars"
            )
        });

        temp_env::with_var("APP_METRICS", Some("invalid"), || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Err(_)),
                "Should return error when config is not valid"
            )
        });

        temp_env::with_var("APP_DEMOS", Some("builder,decorator"), || {
            let result = AppConfig::new();
            assert!(
                matches!(&result, Ok(x) if x.demos == vec![DemoKind::Builder, DemoKind::Decorator]),
                "Should split list env vars on commas"
            )
        });

        temp_env::with_var("APP_GUI_FAMILIES", Some("mac_os"), || {
            let result = AppConfig::new();
            assert!(
                matches!(&result, Ok(x) if x.gui_families == vec![Family::MacOs]),
                "Should accept a single value for list env vars"
            )
        });

        temp_env::with_var("APP_DEMOS", Some("singleton"), || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Err(_)),
                "Should return error when a listed demo is unknown"
            )
        });

        temp_env::with_var("APP_LOG_LEVEL", Some("debug"), || {
            let result = AppConfig::new();
            assert!(
                matches!(&result, Ok(x) if x.log_level == LevelFilter::Debug),
                "Should parse the log level"
            )
        });

        temp_env::with_var("APP_LOG_LEVEL", Some("loud"), || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Err(_)),
                "Should return error when log level is unknown"
            )
        });
    }

    #[test]
    fn test_validate_should_reject_empty_demo_list() {
        // Given
        let mut config = AppConfig {
            demos: vec![],
            gui_families: vec![],
            car_models: vec![],
            condiments: vec![],
            metrics: false,
            log_level: LevelFilter::Warn,
        };

        // When
        let result = config.validate();

        // Then
        assert!(result.is_err(), "Should require at least one demo");

        // When
        config.demos = vec![DemoKind::Builder];

        // Then
        assert!(config.validate().is_ok());
    }
}
