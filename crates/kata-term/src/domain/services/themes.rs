//! Lazy, memoized theme loading.
//!
//! Theme definitions are numerous and nontrivial to fetch, so nothing is
//! loaded eagerly. Each id is fetched at most once per process: concurrent
//! requests for the same id share the in-flight load and settle together,
//! and a failed load rolls the id back so a later selection can retry.

use std::collections::HashMap;
use std::sync::Mutex;

use tokio::sync::watch;

use crate::domain::models::theme_catalog;
use crate::domain::models::ThemeDescriptor;
use crate::domain::models::ThemeLoadError;
use crate::domain::models::ThemeRegistrarBox;
use crate::domain::models::ThemeSourceBox;

#[cfg(test)]
#[path = "themes_test.rs"]
mod tests;

type LoadOutcome = Option<Result<(), ThemeLoadError>>;

enum LoadState {
    Loading(watch::Receiver<LoadOutcome>),
    Loaded,
}

enum Plan {
    AlreadyLoaded,
    Fetch(watch::Sender<LoadOutcome>),
    Wait(watch::Receiver<LoadOutcome>),
}

pub struct ThemeRegistry {
    source: ThemeSourceBox,
    registrar: ThemeRegistrarBox,
    states: Mutex<HashMap<String, LoadState>>,
}

impl ThemeRegistry {
    pub fn new(source: ThemeSourceBox, registrar: ThemeRegistrarBox) -> ThemeRegistry {
        return ThemeRegistry {
            source,
            registrar,
            states: Mutex::new(HashMap::new()),
        };
    }

    /// The static catalog backing the theme selector.
    pub fn list_available(&self) -> &'static [ThemeDescriptor] {
        return theme_catalog();
    }

    /// Resolve once the theme is fetched and registered with the editor
    /// widget. Built-in and already-loaded themes resolve immediately.
    pub async fn ensure_loaded(&self, descriptor: &ThemeDescriptor) -> Result<(), ThemeLoadError> {
        if descriptor.is_builtin() {
            return Ok(());
        }

        let plan = {
            let mut states = self.states.lock().unwrap();
            match states.get(&descriptor.id) {
                Some(LoadState::Loaded) => Plan::AlreadyLoaded,
                Some(LoadState::Loading(rx)) => Plan::Wait(rx.clone()),
                None => {
                    let (tx, rx) = watch::channel(None);
                    states.insert(descriptor.id.clone(), LoadState::Loading(rx));
                    Plan::Fetch(tx)
                }
            }
        };

        match plan {
            Plan::AlreadyLoaded => return Ok(()),
            Plan::Wait(rx) => return self.wait_for_outcome(descriptor, rx).await,
            Plan::Fetch(tx) => {
                let outcome = self.load(descriptor).await;

                {
                    let mut states = self.states.lock().unwrap();
                    match &outcome {
                        // Roll back so the next selection retries the fetch.
                        Err(_) => states.remove(&descriptor.id),
                        Ok(()) => states.insert(descriptor.id.clone(), LoadState::Loaded),
                    };
                }

                let _ = tx.send(Some(outcome.clone()));
                return outcome;
            }
        }
    }

    async fn load(&self, descriptor: &ThemeDescriptor) -> Result<(), ThemeLoadError> {
        let definition = self.source.fetch(descriptor).await?;
        self.registrar.register(&descriptor.id, definition);
        tracing::debug!(theme = %descriptor.id, "theme definition registered");

        return Ok(());
    }

    async fn wait_for_outcome(
        &self,
        descriptor: &ThemeDescriptor,
        mut rx: watch::Receiver<LoadOutcome>,
    ) -> Result<(), ThemeLoadError> {
        loop {
            {
                let outcome = rx.borrow_and_update();
                if let Some(result) = outcome.as_ref() {
                    return result.clone();
                }
            }

            if rx.changed().await.is_err() {
                return Err(ThemeLoadError::Fetch {
                    id: descriptor.id.clone(),
                    message: "theme load was interrupted".to_string(),
                });
            }
        }
    }
}
