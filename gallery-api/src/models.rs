use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ApiResult;

/// Server-assigned identifier. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId(String);

impl EntityId {
    /// Returns `None` for blank input, which is how "nothing selected" arrives from the UI
    pub fn new(id: impl Into<String>) -> Option<Self> {
        Self::try_from(id.into()).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EntityId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            Err("identifier must not be empty".to_string())
        } else {
            Ok(EntityId(value))
        }
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The remote collections exposed by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Events,
    States,
    Photos,
}

impl Collection {
    pub fn path(&self) -> &'static str {
        match self {
            Collection::Events => "events",
            Collection::States => "states",
            Collection::Photos => "photos",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// An entity type that lives in one of the remote collections
pub trait Resource: DeserializeOwned + Send + 'static {
    const COLLECTION: Collection;

    fn id(&self) -> &EntityId;
}

/// A gallery event (top-level album)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "coverImage")]
    pub cover_image: String,
    /// ISO-8601 creation timestamp
    pub date: String,
}

impl Resource for Event {
    const COLLECTION: Collection = Collection::Events;

    fn id(&self) -> &EntityId {
        &self.id
    }
}

/// A named sub-album belonging to exactly one event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct State {
    #[serde(rename = "_id")]
    pub id: EntityId,
    #[serde(rename = "eventId")]
    pub event_id: EntityId,
    pub name: String,
}

impl Resource for State {
    const COLLECTION: Collection = Collection::States;

    fn id(&self) -> &EntityId {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Photo {
    #[serde(rename = "_id")]
    pub id: EntityId,
    #[serde(rename = "eventId")]
    pub event_id: EntityId,
    #[serde(rename = "state")]
    pub state_id: EntityId,
    pub url: String,
    /// Upload day, `YYYY-MM-DD`
    pub date: String,
}

impl Resource for Photo {
    const COLLECTION: Collection = Collection::Photos;

    fn id(&self) -> &EntityId {
        &self.id
    }
}

/// Payload for `POST /events`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewEvent {
    pub name: String,
    #[serde(rename = "coverImage")]
    pub cover_image: String,
    pub date: String,
}

/// Payload for `PUT /events/:id`. A missing cover image leaves the stored one untouched.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EventUpdate {
    pub name: String,
    #[serde(rename = "coverImage", skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

/// Payload for `POST /states`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewState {
    #[serde(rename = "eventId")]
    pub event_id: EntityId,
    pub name: String,
}

/// Payload for `PUT /states/:id`. The parent event cannot be changed.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StateUpdate {
    pub name: String,
}

/// Payload for `POST /photos`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewPhoto {
    #[serde(rename = "eventId")]
    pub event_id: EntityId,
    pub state: EntityId,
    pub url: String,
    pub date: String,
}

/// Response of `POST /upload`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadedFile {
    pub url: String,
}

/// A local file read into memory, ready to be sent to the upload endpoint
#[derive(Clone, PartialEq)]
pub struct PendingFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl PendingFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let mime = mime_for(&name).to_string();
        Self { name, mime, bytes }
    }

    /// Read a file from disk
    pub async fn from_path(path: &Path) -> ApiResult<Self> {
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload".to_string());
        log::debug!("Read {} ({} bytes)", path.display(), bytes.len());
        Ok(Self::new(name, bytes))
    }
}

impl std::fmt::Debug for PendingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingFile")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

fn mime_for(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "heic" => "image/heic",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_decodes_backend_shape() {
        let event: Event = serde_json::from_value(json!({
            "_id": "65a1",
            "name": "Wedding",
            "coverImage": "https://cdn.test/cover.jpg",
            "date": "2026-03-01T10:00:00.000Z",
            "__v": 0
        }))
        .unwrap();
        assert_eq!(event.id.as_str(), "65a1");
        assert_eq!(event.cover_image, "https://cdn.test/cover.jpg");
    }

    #[test]
    fn test_empty_id_is_rejected() {
        let result = serde_json::from_value::<State>(json!({
            "_id": "",
            "eventId": "e1",
            "name": "Ceremony"
        }));
        assert!(result.is_err());
        assert!(EntityId::new("  ").is_none());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let result = serde_json::from_value::<Photo>(json!({
            "_id": "p1",
            "eventId": "e1",
            "url": "https://cdn.test/p1.jpg",
            "date": "2026-10-01"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_event_update_omits_missing_cover() {
        let update = EventUpdate {
            name: "Renamed".to_string(),
            cover_image: None,
        };
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({ "name": "Renamed" }));
    }

    #[test]
    fn test_new_photo_wire_names() {
        let photo = NewPhoto {
            event_id: EntityId::new("e1").unwrap(),
            state: EntityId::new("s1").unwrap(),
            url: "https://cdn.test/a.jpg".to_string(),
            date: "2026-10-19".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&photo).unwrap(),
            json!({
                "eventId": "e1",
                "state": "s1",
                "url": "https://cdn.test/a.jpg",
                "date": "2026-10-19"
            })
        );
    }

    #[test]
    fn test_pending_file_mime() {
        assert_eq!(PendingFile::new("IMG_001.JPG", vec![]).mime, "image/jpeg");
        assert_eq!(PendingFile::new("scan.png", vec![]).mime, "image/png");
        assert_eq!(PendingFile::new("notes", vec![]).mime, "application/octet-stream");
    }
}
