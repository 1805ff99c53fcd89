use std::collections::HashMap;
use std::sync::Arc;
use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::models::ThemeDefinition;
use crate::domain::models::ThemeDescriptor;
use crate::domain::models::ThemeLoadError;
use crate::domain::models::ThemeRegistrar;
use crate::domain::models::ThemeSource;

/// Fetches theme definitions from their static resource location, one JSON
/// document per theme keyed by display name.
pub struct HttpThemeSource {
    base_url: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpThemeSource {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
            timeout: Duration::from_secs(10),
        }
    }

    fn definition_url(&self, descriptor: &ThemeDescriptor) -> String {
        return format!(
            "{}/{}.json",
            self.base_url,
            urlencoding::encode(&descriptor.display_name)
        );
    }
}

#[async_trait]
impl ThemeSource for HttpThemeSource {
    async fn fetch(&self, descriptor: &ThemeDescriptor) -> Result<ThemeDefinition, ThemeLoadError> {
        let url = self.definition_url(descriptor);

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|err| ThemeLoadError::Fetch {
                id: descriptor.id.clone(),
                message: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(theme = %descriptor.id, status = status.as_u16(), "theme fetch failed");
            return Err(ThemeLoadError::Status {
                id: descriptor.id.clone(),
                status: status.as_u16(),
            });
        }

        return response
            .json::<ThemeDefinition>()
            .await
            .map_err(|err| ThemeLoadError::Parse {
                id: descriptor.id.clone(),
                message: err.to_string(),
            });
    }
}

/// The editor widget's theme table. The registry writes definitions in as
/// they load; the widget reads them out when the active theme changes.
#[derive(Clone, Default)]
pub struct SharedThemeStore {
    themes: Arc<RwLock<HashMap<String, ThemeDefinition>>>,
}

impl SharedThemeStore {
    pub fn get(&self, id: &str) -> Option<ThemeDefinition> {
        return self.themes.read().unwrap().get(id).cloned();
    }
}

impl ThemeRegistrar for SharedThemeStore {
    fn register(&self, id: &str, definition: ThemeDefinition) {
        self.themes.write().unwrap().insert(id.to_string(), definition);
    }
}
