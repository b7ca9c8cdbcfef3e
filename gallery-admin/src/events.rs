//! Event create / edit / delete

use gallery_api::{
    ApiResult, Collection, EntityId, Event, EventUpdate, GalleryBackend, NewEvent, PendingFile,
    Session,
};

use crate::error::AdminError;
use crate::forms::{is_blank, EventDraft, EventEdit, EventUpdateDraft, FormMessage};
use crate::state::{report_failure, AdminState};

pub const EVENT_INPUT_MISSING: &str = "Event name or image missing.";
pub const EVENT_NAME_MISSING: &str = "Event name missing.";
pub const EVENT_CREATED: &str = "Event uploaded successfully!";
pub const EVENT_CREATE_FAILED: &str = "Failed to upload event.";
pub const EVENT_UPDATED: &str = "Event updated successfully!";
pub const EVENT_UPDATE_FAILED: &str = "Failed to update event.";
pub const EVENT_DELETE_FAILED: &str = "Failed to delete event.";

impl AdminState {
    pub fn set_event_name(&mut self, name: String) {
        self.event_form.name = name;
    }

    pub fn set_event_image(&mut self, image: Option<PendingFile>) {
        self.event_form.image = image;
    }

    /// Validate the create form. `None` means an error message was set and nothing must be sent.
    pub fn prepare_event_create(&mut self) -> Option<EventDraft> {
        self.event_form.message = None;
        let form = &self.event_form;
        let draft = match (&form.image, is_blank(&form.name)) {
            (Some(image), false) => Ok(EventDraft {
                name: form.name.trim().to_string(),
                image: image.clone(),
            }),
            _ => Err(AdminError::Precondition(EVENT_INPUT_MISSING)),
        };
        match draft {
            Ok(draft) => Some(draft),
            Err(e) => {
                report_failure(
                    &mut self.event_form.message,
                    "Event create rejected",
                    e,
                    EVENT_CREATE_FAILED,
                );
                None
            }
        }
    }

    /// Apply the outcome of [`create_event`]: the refreshed event list
    pub fn complete_event_create(&mut self, result: ApiResult<Vec<Event>>) {
        match result {
            Ok(events) => {
                self.events = events;
                self.event_form.name.clear();
                self.event_form.image = None;
                self.event_form.message = Some(FormMessage::Success(EVENT_CREATED.to_string()));
            }
            Err(e) => report_failure(
                &mut self.event_form.message,
                "Error uploading event",
                e.into(),
                EVENT_CREATE_FAILED,
            ),
        }
    }

    pub fn begin_event_edit(&mut self, event: &Event) {
        self.event_form.editing = Some(EventEdit {
            id: event.id.clone(),
            name: event.name.clone(),
            image: None,
        });
    }

    pub fn cancel_event_edit(&mut self) {
        self.event_form.editing = None;
    }

    pub fn set_edit_event_name(&mut self, name: String) {
        if let Some(edit) = self.event_form.editing.as_mut() {
            edit.name = name;
        }
    }

    pub fn set_edit_event_image(&mut self, image: Option<PendingFile>) {
        if let Some(edit) = self.event_form.editing.as_mut() {
            edit.image = image;
        }
    }

    pub fn prepare_event_update(&mut self) -> Option<EventUpdateDraft> {
        self.event_form.message = None;
        let edit = self.event_form.editing.as_ref()?;
        if is_blank(&edit.name) {
            report_failure(
                &mut self.event_form.message,
                "Event update rejected",
                AdminError::Precondition(EVENT_NAME_MISSING),
                EVENT_UPDATE_FAILED,
            );
            return None;
        }
        Some(EventUpdateDraft {
            id: edit.id.clone(),
            name: edit.name.trim().to_string(),
            image: edit.image.clone(),
        })
    }

    pub fn complete_event_update(&mut self, result: ApiResult<Vec<Event>>) {
        match result {
            Ok(events) => {
                self.events = events;
                self.event_form.editing = None;
                self.event_form.message = Some(FormMessage::Success(EVENT_UPDATED.to_string()));
            }
            Err(e) => report_failure(
                &mut self.event_form.message,
                "Error updating event",
                e.into(),
                EVENT_UPDATE_FAILED,
            ),
        }
    }

    pub fn prepare_event_delete(&mut self, id: &EntityId) -> EntityId {
        self.event_form.message = None;
        id.clone()
    }

    /// Drop the deleted event locally and clear the state list it owned
    pub fn complete_event_delete(&mut self, id: &EntityId, result: ApiResult<()>) {
        match result {
            Ok(()) => {
                self.events.retain(|e| &e.id != id);
                self.states.clear();
                if self.selected_event.as_ref() == Some(id) {
                    self.selected_event = None;
                    self.selected_state = None;
                    self.photos.clear();
                }
                if self
                    .event_form
                    .editing
                    .as_ref()
                    .is_some_and(|edit| &edit.id == id)
                {
                    self.event_form.editing = None;
                }
            }
            Err(e) => report_failure(
                &mut self.event_form.message,
                "Failed to delete event",
                e.into(),
                EVENT_DELETE_FAILED,
            ),
        }
    }
}

/// Upload the cover, create the event stamped with the current time, refetch the list
pub async fn create_event<B: GalleryBackend>(
    backend: &B,
    session: &Session,
    draft: EventDraft,
) -> ApiResult<Vec<Event>> {
    let uploaded = backend.upload(session, &draft.image).await?;
    let payload = NewEvent {
        name: draft.name,
        cover_image: uploaded.url,
        date: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
    };
    let created: Event = backend.create(session, &payload).await?;
    log::info!("Event '{}' created as {}", created.name, created.id);
    backend.list(session, None).await
}

/// Upload a replacement cover when one was chosen, update, refetch the list
pub async fn update_event<B: GalleryBackend>(
    backend: &B,
    session: &Session,
    draft: EventUpdateDraft,
) -> ApiResult<Vec<Event>> {
    let cover_image = match &draft.image {
        Some(image) => Some(backend.upload(session, image).await?.url),
        None => None,
    };
    let payload = EventUpdate {
        name: draft.name,
        cover_image,
    };
    let _: Event = backend.update(session, &draft.id, &payload).await?;
    backend.list(session, None).await
}

pub async fn delete_event<B: GalleryBackend>(
    backend: &B,
    session: &Session,
    id: &EntityId,
) -> ApiResult<()> {
    backend.delete(session, Collection::Events, id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_api::memory::InMemoryBackend;
    use gallery_api::{Photo, State};
    use serde_json::json;

    fn seeded() -> (InMemoryBackend, EntityId, EntityId) {
        let backend = InMemoryBackend::new();
        let a = backend.seed(
            Collection::Events,
            json!({ "name": "Alpha", "coverImage": "https://x/a.jpg", "date": "2026-01-01T00:00:00.000Z" }),
        );
        let b = backend.seed(
            Collection::Events,
            json!({ "name": "Beta", "coverImage": "https://x/b.jpg", "date": "2026-02-01T00:00:00.000Z" }),
        );
        (backend, a, b)
    }

    #[tokio::test]
    async fn test_create_requires_name_and_image() {
        let (backend, _, _) = seeded();
        let mut admin = AdminState::new();
        admin.set_event_name("Only a name".to_string());

        assert!(admin.prepare_event_create().is_none());
        assert_eq!(
            admin.event_form.message,
            Some(FormMessage::Error(EVENT_INPUT_MISSING.to_string()))
        );

        admin.set_event_name("   ".to_string());
        admin.set_event_image(Some(PendingFile::new("cover.jpg", vec![1, 2])));
        assert!(admin.prepare_event_create().is_none());

        assert!(admin.events.is_empty());
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_create_refetches_and_resets_form() {
        let (backend, _, _) = seeded();
        let session = Session::anonymous();
        let mut admin = AdminState::new();
        admin.set_event_name("Graduation".to_string());
        admin.set_event_image(Some(PendingFile::new("cover.jpg", vec![1, 2])));

        let draft = admin.prepare_event_create().unwrap();
        admin.complete_event_create(create_event(&backend, &session, draft).await);

        let names: Vec<&str> = admin.events.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names.iter().filter(|n| **n == "Graduation").count(), 1);
        assert_eq!(admin.events.len(), 3);
        assert!(admin.event_form.name.is_empty());
        assert!(admin.event_form.image.is_none());
        assert_eq!(
            admin.event_form.message,
            Some(FormMessage::Success(EVENT_CREATED.to_string()))
        );
        assert_eq!(
            backend.request_lines(),
            vec!["POST /upload", "POST /events", "GET /events"]
        );

        let created = admin.events.iter().find(|e| e.name == "Graduation").unwrap();
        assert!(created.cover_image.starts_with("https://files.test/"));
        assert!(chrono::DateTime::parse_from_rfc3339(&created.date).is_ok());
    }

    #[tokio::test]
    async fn test_create_failure_keeps_input() {
        let (backend, _, _) = seeded();
        backend.fail_requests("POST /events");
        let mut admin = AdminState::new();
        admin.set_event_name("Graduation".to_string());
        admin.set_event_image(Some(PendingFile::new("cover.jpg", vec![1])));

        let draft = admin.prepare_event_create().unwrap();
        admin.complete_event_create(create_event(&backend, &Session::anonymous(), draft).await);

        assert_eq!(admin.event_form.name, "Graduation");
        assert!(admin.event_form.image.is_some());
        assert_eq!(
            admin.event_form.message,
            Some(FormMessage::Error(EVENT_CREATE_FAILED.to_string()))
        );
    }

    #[tokio::test]
    async fn test_edit_without_image_omits_cover() {
        let (backend, a, _) = seeded();
        let session = Session::anonymous();
        let mut admin = AdminState::new();
        admin.apply_events(backend.list(&session, None).await);

        let alpha = admin.events[0].clone();
        admin.begin_event_edit(&alpha);
        assert_eq!(admin.event_form.editing.as_ref().unwrap().name, "Alpha");
        admin.set_edit_event_name("Alpha (renamed)".to_string());

        let draft = admin.prepare_event_update().unwrap();
        admin.complete_event_update(update_event(&backend, &session, draft).await);

        let put = backend
            .requests()
            .into_iter()
            .find(|r| r.line == format!("PUT /events/{}", a))
            .unwrap();
        assert_eq!(put.body, Some(json!({ "name": "Alpha (renamed)" })));
        assert!(admin.event_form.editing.is_none());
        let renamed = admin.events.iter().find(|e| e.id == a).unwrap();
        assert_eq!(renamed.name, "Alpha (renamed)");
        assert_eq!(renamed.cover_image, "https://x/a.jpg");
    }

    #[tokio::test]
    async fn test_edit_with_image_sends_new_url() {
        let (backend, a, _) = seeded();
        let session = Session::anonymous();
        let mut admin = AdminState::new();
        admin.apply_events(backend.list(&session, None).await);

        let alpha = admin.events[0].clone();
        admin.begin_event_edit(&alpha);
        admin.set_edit_event_image(Some(PendingFile::new("new-cover.png", vec![9])));
        let draft = admin.prepare_event_update().unwrap();
        admin.complete_event_update(update_event(&backend, &session, draft).await);

        let put = backend
            .requests()
            .into_iter()
            .find(|r| r.line == format!("PUT /events/{}", a))
            .unwrap();
        let sent = put.body.unwrap()["coverImage"].as_str().unwrap().to_string();
        assert!(sent.ends_with("/new-cover.png"));
        let updated = admin.events.iter().find(|e| e.id == a).unwrap();
        assert_eq!(updated.cover_image, sent);
    }

    #[tokio::test]
    async fn test_edit_with_blank_name_sends_nothing() {
        let (backend, _, _) = seeded();
        let session = Session::anonymous();
        let mut admin = AdminState::new();
        admin.apply_events(backend.list(&session, None).await);
        backend.clear_requests();

        let alpha = admin.events[0].clone();
        admin.begin_event_edit(&alpha);
        admin.set_edit_event_name(String::new());

        assert!(admin.prepare_event_update().is_none());
        assert!(backend.requests().is_empty());
        assert!(admin.event_form.editing.is_some());
    }

    #[tokio::test]
    async fn test_delete_removes_event_and_clears_states() {
        let (backend, a, b) = seeded();
        let session = Session::anonymous();
        let mut admin = AdminState::new();
        admin.apply_events(backend.list(&session, None).await);
        admin.select_event(Some(a.clone()));
        admin.states.push(State {
            id: EntityId::new("s1").unwrap(),
            event_id: a.clone(),
            name: "Ceremony".to_string(),
        });
        admin.photos.push(Photo {
            id: EntityId::new("p1").unwrap(),
            event_id: a.clone(),
            state_id: EntityId::new("s1").unwrap(),
            url: "https://x/p1.jpg".to_string(),
            date: "2026-10-01".to_string(),
        });

        let id = admin.prepare_event_delete(&a);
        let result = delete_event(&backend, &session, &id).await;
        admin.complete_event_delete(&id, result);

        assert_eq!(admin.events.len(), 1);
        assert_eq!(admin.events[0].id, b);
        assert!(admin.states.is_empty());
        assert!(admin.photos.is_empty());
        assert_eq!(admin.selected_event, None);
    }

    #[tokio::test]
    async fn test_delete_failure_changes_nothing() {
        let (backend, a, _) = seeded();
        let session = Session::anonymous();
        backend.fail_requests("DELETE /events");
        let mut admin = AdminState::new();
        admin.apply_events(backend.list(&session, None).await);

        let id = admin.prepare_event_delete(&a);
        let result = delete_event(&backend, &session, &id).await;
        admin.complete_event_delete(&id, result);

        assert_eq!(admin.events.len(), 2);
        assert_eq!(
            admin.event_form.message,
            Some(FormMessage::Error(EVENT_DELETE_FAILED.to_string()))
        );
    }
}
