//! Write-once model state.
//!
//! The model is loaded once at startup and read by every prediction
//! afterwards. A [`ModelSlot`] can be filled exactly once; readers never
//! lock. The process-wide slot returned by [`global`] lives until exit. A
//! failed load leaves it empty and every prediction then reports
//! [`FareError::ModelNotLoaded`].

use once_cell::sync::OnceCell;

use crate::core::error::{FareError, FareResult};
use crate::io::{LoadedModel, ModelLoader, ModelSource};

static GLOBAL_MODEL: ModelSlot = ModelSlot::new();

/// Holder for a model that is set at most once.
#[derive(Debug, Default)]
pub struct ModelSlot {
    cell: OnceCell<LoadedModel>,
}

impl ModelSlot {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Store `loaded`. Fails if the slot already holds a model.
    pub fn set(&self, loaded: LoadedModel) -> FareResult<&LoadedModel> {
        self.cell
            .set(loaded)
            .map_err(|_| FareError::Configuration("Model already initialized".to_string()))?;
        self.get()
    }

    /// The loaded model, or `ModelNotLoaded`.
    pub fn get(&self) -> FareResult<&LoadedModel> {
        self.cell.get().ok_or(FareError::ModelNotLoaded)
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Load the model into this slot.
    ///
    /// If the slot is already filled the existing model is returned and no
    /// fetch happens. Load failures are logged and returned; the slot stays
    /// empty.
    pub async fn init(&self, loader: &ModelLoader, source: &ModelSource) -> FareResult<&LoadedModel> {
        if let Some(existing) = self.cell.get() {
            return Ok(existing);
        }

        match loader.load(source).await {
            Ok(loaded) => {
                if self.cell.set(loaded).is_err() {
                    log::debug!("Model initialized concurrently; keeping the first one");
                }
                self.get()
            }
            Err(e) => {
                log::error!("Model load error: {}", e);
                Err(e)
            }
        }
    }
}

/// The process-wide model slot.
pub fn global() -> &'static ModelSlot {
    &GLOBAL_MODEL
}

/// Initialize the process-wide model.
pub async fn init_model(loader: &ModelLoader, source: &ModelSource) -> FareResult<&'static LoadedModel> {
    GLOBAL_MODEL.init(loader, source).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ModelFetcher;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingFetcher {
        body: &'static str,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ModelFetcher for CountingFetcher {
        async fn fetch(&self, _source: &ModelSource) -> FareResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.body.to_string())
        }
    }

    fn source() -> ModelSource {
        ModelSource::File(PathBuf::from("linear_model.json"))
    }

    #[test]
    fn test_empty_slot_reports_not_loaded() {
        let slot = ModelSlot::new();
        assert!(!slot.is_loaded());
        assert_eq!(slot.get().unwrap_err(), FareError::ModelNotLoaded);
    }

    #[tokio::test]
    async fn test_init_fetches_once() {
        let fetcher = Arc::new(CountingFetcher {
            body: r#"{"coef": [0, 0, 0, 0, 0, 0, 0, 0], "intercept": 42}"#,
            calls: AtomicUsize::new(0),
        });
        let loader = ModelLoader::with_fetcher(fetcher.clone());
        let slot = ModelSlot::new();

        let first = slot.init(&loader, &source()).await.unwrap();
        assert_eq!(first.model.intercept(), 42.0);
        slot.init(&loader, &source()).await.unwrap();

        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
        assert!(slot.is_loaded());
    }

    #[tokio::test]
    async fn test_failed_init_leaves_slot_empty() {
        let loader = ModelLoader::with_fetcher(Arc::new(CountingFetcher {
            body: "not json",
            calls: AtomicUsize::new(0),
        }));
        let slot = ModelSlot::new();

        assert!(slot.init(&loader, &source()).await.is_err());
        assert!(!slot.is_loaded());
        assert_eq!(slot.get().unwrap_err(), FareError::ModelNotLoaded);
    }

    #[tokio::test]
    async fn test_set_twice_fails() {
        let loader = ModelLoader::with_fetcher(Arc::new(CountingFetcher {
            body: r#"{"coef": [1, 1, 1, 1, 1, 1, 1, 1], "intercept": 0}"#,
            calls: AtomicUsize::new(0),
        }));
        let loaded = loader.load(&source()).await.unwrap();

        let slot = ModelSlot::new();
        assert!(slot.set(loaded.clone()).is_ok());
        assert!(slot.set(loaded).is_err());
    }
}
