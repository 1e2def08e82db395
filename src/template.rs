use axum::{extract::FromRequestParts, http::request::Parts};
use tera::Tera;

use crate::AppState;

fn real_tera() -> Tera {
    let mut tera = match Tera::new("./templates/**/*") {
        Ok(v) => v,
        Err(source) => {
            if let tera::ErrorKind::Msg(msg) = &source.kind {
                error!("Failed to load templates: {msg}");
            } else {
                error!(?source, "Failed to load templates");
            }
            std::process::exit(1);
        }
    };
    tera.autoescape_on(vec![".html", ".htm", ".jinja", ".jinja2"]);
    tera
}

#[cfg(feature = "dev")]
pub fn tera() -> crate::state::InnerTera {
    std::sync::Arc::new(std::sync::RwLock::new(real_tera()))
}

#[cfg(not(feature = "dev"))]
pub fn tera() -> crate::state::InnerTera {
    real_tera()
}

#[derive(serde::Serialize, Debug, Clone)]
pub struct BaseRenderInfo {
    pub root_url: String,
}

impl BaseRenderInfo {
    pub fn new(root_url: String) -> Self {
        Self { root_url }
    }
}

#[axum::async_trait]
impl FromRequestParts<AppState> for BaseRenderInfo {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(BaseRenderInfo::new(state.config.root_url.clone()))
    }
}
