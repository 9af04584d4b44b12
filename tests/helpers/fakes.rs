use async_trait::async_trait;
use holidaybook::domain::ports::{FileStorage, HolidaySource};
use holidaybook::infrastructure::http::middleware::{ApiError, ApiResult};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Source that serves fixed bytes (or fails) and counts how often it was asked.
pub struct StaticSource {
    body: Option<Vec<u8>>,
    calls: AtomicUsize,
}

impl StaticSource {
    pub fn ok(body: impl Into<Vec<u8>>) -> Arc<Self> {
        Arc::new(Self {
            body: Some(body.into()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            body: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HolidaySource for StaticSource {
    async fn fetch(&self) -> ApiResult<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.body
            .clone()
            .ok_or_else(|| ApiError::Upstream("connection refused".to_string()))
    }

    fn describe(&self) -> String {
        "static-source".to_string()
    }
}

#[derive(Default)]
pub struct MemoryStorage {
    files: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn keys(&self) -> Vec<String> {
        self.files.lock().unwrap().keys().cloned().collect()
    }

    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(key).cloned()
    }

    pub fn insert(&self, key: &str, content: &[u8]) {
        self.files
            .lock()
            .unwrap()
            .insert(key.to_string(), content.to_vec());
    }
}

#[async_trait]
impl FileStorage for MemoryStorage {
    async fn save(&self, path: &str, content: &[u8]) -> ApiResult<()> {
        self.insert(path, content);
        Ok(())
    }

    async fn read(&self, path: &str) -> ApiResult<Vec<u8>> {
        self.get(path)
            .ok_or_else(|| ApiError::NotFound(format!("{} not found in storage", path)))
    }

    async fn exists(&self, path: &str) -> ApiResult<bool> {
        Ok(self.files.lock().unwrap().contains_key(path))
    }

    async fn clear(&self) -> ApiResult<()> {
        self.files.lock().unwrap().clear();
        Ok(())
    }
}
