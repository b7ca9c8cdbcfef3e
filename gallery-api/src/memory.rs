//! In-memory stand-in for the gallery backend.
//!
//! Stores every collection as JSON objects, records each request and can be
//! told to fail specific requests or uploads. Used to drive the admin
//! workflow in tests without a server.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

use crate::backend::GalleryBackend;
use crate::error::{ApiError, ApiResult};
use crate::models::{Collection, EntityId, PendingFile, Resource, UploadedFile};
use crate::session::Session;

/// A request as seen by the in-memory backend
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// e.g. `"PUT /events/events-1"` or `"GET /states?eventId=events-1"`
    pub line: String,
    pub body: Option<Value>,
    pub authorized_as: Option<String>,
}

#[derive(Default)]
struct Store {
    collections: HashMap<Collection, Vec<Map<String, Value>>>,
    next_id: u64,
    requests: Vec<RecordedRequest>,
    failing_uploads: HashSet<String>,
    failing_prefixes: Vec<String>,
}

impl Store {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}-{}", prefix, self.next_id)
    }

    fn record(&mut self, session: &Session, line: String, body: Option<Value>) -> ApiResult<()> {
        let fails = self.failing_prefixes.iter().any(|p| line.starts_with(p));
        self.requests.push(RecordedRequest {
            line: line.clone(),
            body,
            authorized_as: session.username().map(str::to_string),
        });
        if fails {
            return Err(ApiError::Status {
                status: 500,
                url: line,
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryBackend {
    store: Mutex<Store>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Insert a record directly, bypassing the request log. Returns its id.
    pub fn seed(&self, collection: Collection, record: Value) -> EntityId {
        let mut store = self.lock();
        let id = store.next_id(collection.path());
        let mut object = match record {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        object.insert("_id".to_string(), Value::String(id.clone()));
        store.collections.entry(collection).or_default().push(object);
        EntityId::new(id).unwrap_or_else(|| unreachable!("generated ids are never empty"))
    }

    /// Every request received so far, oldest first
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    pub fn request_lines(&self) -> Vec<String> {
        self.lock().requests.iter().map(|r| r.line.clone()).collect()
    }

    pub fn clear_requests(&self) {
        self.lock().requests.clear();
    }

    /// Uploads of a file with this name answer with a server error
    pub fn fail_upload_of(&self, file_name: &str) {
        self.lock().failing_uploads.insert(file_name.to_string());
    }

    /// Requests whose line starts with `prefix` answer with a server error
    pub fn fail_requests(&self, prefix: &str) {
        self.lock().failing_prefixes.push(prefix.to_string());
    }

    pub fn count(&self, collection: Collection) -> usize {
        self.lock()
            .collections
            .get(&collection)
            .map(Vec::len)
            .unwrap_or(0)
    }
}

impl GalleryBackend for InMemoryBackend {
    async fn list<R: Resource>(
        &self,
        session: &Session,
        event_id: Option<&EntityId>,
    ) -> ApiResult<Vec<R>> {
        let records = {
            let mut store = self.lock();
            let line = match event_id {
                Some(id) => format!("GET /{}?eventId={}", R::COLLECTION, id),
                None => format!("GET /{}", R::COLLECTION),
            };
            store.record(session, line, None)?;
            store
                .collections
                .get(&R::COLLECTION)
                .cloned()
                .unwrap_or_default()
        };

        records
            .into_iter()
            .filter(|record| match event_id {
                Some(id) => record.get("eventId").and_then(Value::as_str) == Some(id.as_str()),
                None => true,
            })
            .map(|record| serde_json::from_value(Value::Object(record)).map_err(ApiError::from))
            .collect()
    }

    async fn create<R: Resource, P: Serialize + Sync>(
        &self,
        session: &Session,
        payload: &P,
    ) -> ApiResult<R> {
        let body = serde_json::to_value(payload)?;
        let record = {
            let mut store = self.lock();
            store.record(
                session,
                format!("POST /{}", R::COLLECTION),
                Some(body.clone()),
            )?;
            let id = store.next_id(R::COLLECTION.path());
            let mut object = match body {
                Value::Object(map) => map,
                _ => Map::new(),
            };
            object.insert("_id".to_string(), Value::String(id));
            store
                .collections
                .entry(R::COLLECTION)
                .or_default()
                .push(object.clone());
            object
        };
        Ok(serde_json::from_value(Value::Object(record))?)
    }

    async fn update<R: Resource, P: Serialize + Sync>(
        &self,
        session: &Session,
        id: &EntityId,
        payload: &P,
    ) -> ApiResult<R> {
        let body = serde_json::to_value(payload)?;
        let line = format!("PUT /{}/{}", R::COLLECTION, id);
        let record = {
            let mut store = self.lock();
            store.record(session, line.clone(), Some(body.clone()))?;
            let existing = store
                .collections
                .get_mut(&R::COLLECTION)
                .and_then(|items| {
                    items
                        .iter_mut()
                        .find(|r| r.get("_id").and_then(Value::as_str) == Some(id.as_str()))
                })
                .ok_or(ApiError::Status {
                    status: 404,
                    url: line,
                })?;
            if let Value::Object(changes) = body {
                for (key, value) in changes {
                    existing.insert(key, value);
                }
            }
            existing.clone()
        };
        Ok(serde_json::from_value(Value::Object(record))?)
    }

    async fn delete(
        &self,
        session: &Session,
        collection: Collection,
        id: &EntityId,
    ) -> ApiResult<()> {
        let line = format!("DELETE /{}/{}", collection, id);
        let mut store = self.lock();
        store.record(session, line.clone(), None)?;
        let items = store.collections.entry(collection).or_default();
        let before = items.len();
        items.retain(|r| r.get("_id").and_then(Value::as_str) != Some(id.as_str()));
        if items.len() == before {
            return Err(ApiError::Status {
                status: 404,
                url: line,
            });
        }
        Ok(())
    }

    async fn upload(&self, session: &Session, file: &PendingFile) -> ApiResult<UploadedFile> {
        // let sibling pipelines interleave like real network calls would
        tokio::task::yield_now().await;

        let mut store = self.lock();
        store.record(
            session,
            "POST /upload".to_string(),
            Some(Value::String(file.name.clone())),
        )?;
        if store.failing_uploads.contains(&file.name) {
            return Err(ApiError::Status {
                status: 500,
                url: format!("POST /upload ({})", file.name),
            });
        }
        let key = store.next_id("file");
        Ok(UploadedFile {
            url: format!("https://files.test/{}/{}", key, file.name),
        })
    }
}
