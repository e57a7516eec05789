use reqwest::Url;
use tracing::{error, info};

use crate::config::MenuConfig;
use crate::dom;
use crate::error::{MenuError, MenuResult};
use crate::types::MenuData;

/// Client for the static menu JSON served next to the page
pub struct MenuClient {
    base_url: Url,
    client: reqwest::Client,
}

impl MenuClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Client rooted at the current page location
    pub fn for_page() -> MenuResult<Self> {
        let href = dom::window()?.location().href()?;
        let base_url = Url::parse(&href).map_err(|e| MenuError::InvalidUrl(e.to_string()))?;
        Ok(Self::new(base_url))
    }

    pub fn items_url(&self, path: &str) -> MenuResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| MenuError::InvalidUrl(e.to_string()))
    }

    /// Fetch and parse the menu
    pub async fn fetch_menu(&self, path: &str) -> MenuResult<MenuData> {
        let url = self.items_url(path)?;
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(MenuError::StatusError(response.status().as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Load the menu for the page. Any failure is logged and yields an empty menu.
pub async fn load_menu(config: &MenuConfig) -> MenuData {
    let result = match MenuClient::for_page() {
        Ok(client) => client.fetch_menu(&config.items_path).await,
        Err(err) => Err(err),
    };
    menu_or_empty(result)
}

/// Unwrap a fetch result, logging the error and falling back to an empty menu.
pub fn menu_or_empty(result: MenuResult<MenuData>) -> MenuData {
    match result {
        Ok(data) => {
            info!(
                "Loaded {} categories, {} items",
                data.len(),
                data.item_count()
            );
            data
        }
        Err(err) => {
            error!("Error fetching items: {}", err);
            MenuData::default()
        }
    }
}
