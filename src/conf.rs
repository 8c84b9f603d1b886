use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings {
    #[serde(default)]
    pub api_base_url: String,
    #[serde(default)]
    pub service_name: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .add_source(Environment::default())
            .build()?;
        let mut s: Settings = conf.try_deserialize()?;
        if s.api_base_url.is_empty() {
            s.api_base_url = "http://localhost:5109".into();
        }
        if s.service_name.is_empty() {
            s.service_name = "careerdesk".into();
        }
        Ok(s)
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}
