use std::{sync::Arc, time::Duration};

use tera::Tera;

use crate::{config::Config, Error};

pub type AppState = Arc<InnerAppState>;

#[cfg(feature = "dev")]
pub type InnerTera = Arc<std::sync::RwLock<Tera>>;

#[cfg(not(feature = "dev"))]
pub type InnerTera = Tera;

pub struct InnerAppState {
    pub config: Config,
    tera: InnerTera,
    pub http: reqwest::Client,
}

impl InnerAppState {
    pub fn new(config: Config, tera: InnerTera, http: reqwest::Client) -> Self {
        Self { config, tera, http }
    }

    pub fn render<T: serde::Serialize>(
        &self,
        template_name: &str,
        data: T,
    ) -> Result<axum::response::Html<String>, Error> {
        let context = tera::Context::from_serialize(data)?;
        self.render_ctx(template_name, &context)
    }

    pub fn render_ctx(
        &self,
        template_name: &str,
        context: &tera::Context,
    ) -> Result<axum::response::Html<String>, Error> {
        trace!(?context, ?template_name, "rendering template");
        #[cfg(feature = "dev")]
        let tera = self
            .tera
            .read()
            .expect("Tera read lock poisoned, check logs for previous panics");
        #[cfg(not(feature = "dev"))]
        let tera = &self.tera;
        let html_text = tera.render(template_name, context)?;
        Ok(axum::response::Html(html_text))
    }

    #[cfg(feature = "dev")]
    pub fn reload_tera(&self) {
        if let Err(source) = self
            .tera
            .write()
            .expect("Tera write lock poisoned, check logs for previous panics!")
            .full_reload()
        {
            if let tera::ErrorKind::Msg(msg) = &source.kind {
                error!("Failed to reload templates: {msg}");
            } else {
                error!(?source, "Failed to reload templates");
            }
        }
    }

    fn http_client() -> reqwest::Client {
        reqwest::ClientBuilder::new()
            .user_agent("triviaboard/http")
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client")
    }

    pub fn from_environment() -> AppState {
        let config = Config::from_env();
        let tera = crate::template::tera();
        Arc::new(InnerAppState::new(config, tera, Self::http_client()))
    }

    #[cfg(test)]
    pub fn test(config: Config) -> AppState {
        Arc::new(InnerAppState::new(
            config,
            crate::template::tera(),
            Self::http_client(),
        ))
    }
}
