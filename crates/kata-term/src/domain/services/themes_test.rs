use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use std::time::Duration;

use async_trait::async_trait;

use super::*;
use crate::domain::models::ThemeDefinition;
use crate::domain::models::ThemeRegistrar;
use crate::domain::models::ThemeSource;

struct CountingSource {
    fetches: Arc<AtomicUsize>,
    failures_remaining: Arc<AtomicUsize>,
}

impl CountingSource {
    fn new(failures: usize) -> (CountingSource, Arc<AtomicUsize>) {
        let fetches = Arc::new(AtomicUsize::new(0));
        let source = CountingSource {
            fetches: fetches.clone(),
            failures_remaining: Arc::new(AtomicUsize::new(failures)),
        };
        return (source, fetches);
    }
}

#[async_trait]
impl ThemeSource for CountingSource {
    async fn fetch(&self, descriptor: &ThemeDescriptor) -> Result<ThemeDefinition, ThemeLoadError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        // Hold the load open long enough for a second caller to pile on.
        tokio::time::sleep(Duration::from_millis(10)).await;

        if self
            .failures_remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            return Err(ThemeLoadError::Status {
                id: descriptor.id.clone(),
                status: 404,
            });
        }

        return Ok(ThemeDefinition::default());
    }
}

#[derive(Clone, Default)]
struct RecordingRegistrar {
    registered: Arc<StdMutex<Vec<String>>>,
}

impl ThemeRegistrar for RecordingRegistrar {
    fn register(&self, id: &str, _definition: ThemeDefinition) {
        self.registered.lock().unwrap().push(id.to_string());
    }
}

fn registry_with(failures: usize) -> (ThemeRegistry, Arc<AtomicUsize>, RecordingRegistrar) {
    let (source, fetches) = CountingSource::new(failures);
    let registrar = RecordingRegistrar::default();
    let registry = ThemeRegistry::new(Box::new(source), Box::new(registrar.clone()));
    return (registry, fetches, registrar);
}

fn oceanic_next() -> ThemeDescriptor {
    return theme_catalog()
        .iter()
        .find(|e| e.id == "oceanic-next")
        .cloned()
        .unwrap();
}

#[tokio::test]
async fn test_concurrent_loads_share_one_fetch() {
    let (registry, fetches, registrar) = registry_with(0);
    let descriptor = oceanic_next();

    let (a, b) = tokio::join!(
        registry.ensure_loaded(&descriptor),
        registry.ensure_loaded(&descriptor)
    );

    assert!(a.is_ok());
    assert!(b.is_ok());
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
    assert_eq!(
        registrar.registered.lock().unwrap().as_slice(),
        ["oceanic-next"]
    );
}

#[tokio::test]
async fn test_loaded_themes_are_never_refetched() {
    let (registry, fetches, _registrar) = registry_with(0);
    let descriptor = oceanic_next();

    registry.ensure_loaded(&descriptor).await.unwrap();
    registry.ensure_loaded(&descriptor).await.unwrap();
    registry.ensure_loaded(&descriptor).await.unwrap();

    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_builtin_themes_bypass_the_source() {
    let (registry, fetches, registrar) = registry_with(0);

    for id in ["light", "vs-dark"] {
        let descriptor = theme_catalog().iter().find(|e| e.id == id).cloned().unwrap();
        registry.ensure_loaded(&descriptor).await.unwrap();
    }

    assert_eq!(fetches.load(Ordering::SeqCst), 0);
    assert!(registrar.registered.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_load_rolls_back_and_allows_retry() {
    let (registry, fetches, registrar) = registry_with(1);
    let descriptor = oceanic_next();

    let first = registry.ensure_loaded(&descriptor).await;
    assert!(matches!(first, Err(ThemeLoadError::Status { status: 404, .. })));
    assert!(registrar.registered.lock().unwrap().is_empty());

    // The rollback makes the next selection fetch again.
    registry.ensure_loaded(&descriptor).await.unwrap();
    assert_eq!(fetches.load(Ordering::SeqCst), 2);
    assert_eq!(
        registrar.registered.lock().unwrap().as_slice(),
        ["oceanic-next"]
    );
}

#[tokio::test]
async fn test_concurrent_waiters_share_the_failure() {
    let (registry, fetches, _registrar) = registry_with(1);
    let descriptor = oceanic_next();

    let (a, b) = tokio::join!(
        registry.ensure_loaded(&descriptor),
        registry.ensure_loaded(&descriptor)
    );

    assert!(a.is_err());
    assert!(b.is_err());
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_different_ids_load_independently() {
    let (registry, fetches, _registrar) = registry_with(0);
    let nord = theme_catalog().iter().find(|e| e.id == "nord").cloned().unwrap();
    let descriptor = oceanic_next();

    let (a, b) = tokio::join!(
        registry.ensure_loaded(&descriptor),
        registry.ensure_loaded(&nord)
    );

    assert!(a.is_ok());
    assert!(b.is_ok());
    assert_eq!(fetches.load(Ordering::SeqCst), 2);
}

#[test]
fn test_catalog_is_stable_and_starts_with_builtins() {
    let (registry, fetches, _registrar) = registry_with(0);

    let catalog = registry.list_available();
    assert_eq!(catalog[0].id, "light");
    assert_eq!(catalog[1].id, "vs-dark");
    assert!(catalog.len() > 2);

    // Listing is pure: no load was triggered.
    assert_eq!(fetches.load(Ordering::SeqCst), 0);
}
