use axum::extract::State;

use crate::{model::Category, template::BaseRenderInfo, AppState, HandlerResult};

#[derive(serde::Serialize)]
struct IndexPage {
    categories: Vec<Category>,
    #[serde(flatten)]
    base: BaseRenderInfo,
}

pub async fn get(State(state): State<AppState>, base: BaseRenderInfo) -> HandlerResult {
    let categories = Category::load_all(&state).await;
    state.render("index.jinja", IndexPage { categories, base })
}
