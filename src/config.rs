#[derive(serde::Deserialize, Clone, Debug)]
pub struct Config {
    #[serde(default = "defaults::trivia_api_url")]
    pub trivia_api_url: String,
    #[serde(default = "defaults::root_url")]
    pub root_url: String,
    #[serde(default = "defaults::port")]
    pub port: u16,
}

mod defaults {
    pub(super) fn trivia_api_url() -> String {
        String::from("https://opentdb.com")
    }

    pub(super) fn root_url() -> String {
        String::from("http://localhost:8080")
    }

    pub(super) fn port() -> u16 {
        8080
    }
}

impl Config {
    pub fn from_env() -> Self {
        let config: Config = envy::from_env().expect("Failed to read config");
        let trivia_api_url = config.trivia_api_url.trim_end_matches('/').to_string();
        let root_url = config.root_url.trim_end_matches('/').to_string();
        Self {
            trivia_api_url,
            root_url,
            ..config
        }
    }

    #[cfg(test)]
    pub fn test(trivia_api_url: String) -> Self {
        Self {
            trivia_api_url,
            root_url: "http://localhost:8080".to_string(),
            port: 8080,
        }
    }
}
