use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{template::BaseRenderInfo, AppState};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Tera error: {0}")]
    Tera(#[from] tera::Error),
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("JSON serialization or deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

const RAW_STR_ERROR: &str = "There was an error handling your request. \
    In addition, there was an error attempting to render that error.";

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let mut resp = (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response();
        trace!(?self, "Converting error into response");
        resp.extensions_mut().insert(Arc::new(self));
        resp
    }
}

pub async fn error_middleware(
    State(state): State<AppState>,
    base: BaseRenderInfo,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    let Some(error) = response.extensions().get::<Arc<Error>>().cloned() else {
        return response;
    };

    let status = error.status();

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        error!(?error, "failed to handle request");
    }

    let error_as_string = error.to_string();
    let mut ctx = match tera::Context::from_serialize(base) {
        Ok(v) => v,
        Err(source) => {
            error!(?source, original = ?error, "failed to contextualize error");
            return (StatusCode::INTERNAL_SERVER_ERROR, RAW_STR_ERROR.to_string()).into_response();
        }
    };
    ctx.insert("error", &error_as_string);
    let template_name = format!("{}.jinja", status.as_u16());
    let content = state.render_ctx(&template_name, &ctx).map_err(|source| {
        error!(?source, original = ?error, "failed to render error");
        RAW_STR_ERROR.to_string()
    });
    (status, [("cache-control", "private")], content).into_response()
}

impl Error {
    fn status(&self) -> StatusCode {
        match self {
            Error::Tera(_) | Error::Reqwest(_) | Error::SerdeJson(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
