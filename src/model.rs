use crate::{AppState, Error};

#[derive(serde::Serialize, serde::Deserialize, Debug, Hash, PartialEq, Eq, Clone)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(serde::Deserialize, Debug)]
struct CategoryResponse {
    trivia_categories: Vec<Category>,
}

impl Category {
    /// Best-effort fetch of the upstream category list. Every failure mode
    /// (connection error, body read, JSON parse, missing field) is logged and
    /// collapsed to an empty list, so callers always get something to render.
    pub async fn load_all(state: &AppState) -> Vec<Category> {
        match Self::fetch_all(state).await {
            Ok(categories) => categories,
            Err(source) => {
                error!(?source, "failed to load trivia categories");
                Vec::new()
            }
        }
    }

    async fn fetch_all(state: &AppState) -> Result<Vec<Category>, Error> {
        let url = format!("{}/api_category.php", state.config.trivia_api_url);
        trace!(%url, "fetching trivia categories");
        // Error statuses are not checked here. Upstream error pages are not
        // JSON, so they fail the parse and take the containment path anyway.
        let body = state.http.get(&url).send().await?.text().await?;
        let resp: CategoryResponse = serde_json::from_str(&body)?;
        Ok(resp.trivia_categories)
    }
}
