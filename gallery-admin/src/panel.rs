use gallery_api::{EntityId, GalleryBackend, Session};
use std::sync::Arc;

use crate::state::{load_event_scope, load_events, AdminState};
use crate::{events, photos, states, upload};

/// Drives an [`AdminState`] against a backend, one awaited action at a time.
///
/// UI front ends that cannot hold the state across an await call the
/// `prepare_*` / operation / `complete_*` steps themselves; this type chains
/// them for headless use.
pub struct AdminPanel<B: GalleryBackend> {
    backend: Arc<B>,
    session: Session,
    upload_concurrency: usize,
    pub state: AdminState,
}

impl<B: GalleryBackend> AdminPanel<B> {
    pub fn new(backend: Arc<B>, session: Session, upload_concurrency: usize) -> Self {
        Self {
            backend,
            session,
            upload_concurrency,
            state: AdminState::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn set_session(&mut self, session: Session) {
        self.session = session;
    }

    pub async fn refresh_events(&mut self) {
        let result = load_events(&*self.backend, &self.session).await;
        self.state.apply_events(result);
    }

    pub async fn select_event(&mut self, event_id: Option<EntityId>) {
        if let Some(id) = self.state.select_event(event_id) {
            let scope = load_event_scope(&*self.backend, &self.session, &id).await;
            self.state.apply_event_scope(&id, scope);
        }
    }

    pub async fn submit_event(&mut self) {
        if let Some(draft) = self.state.prepare_event_create() {
            let result = events::create_event(&*self.backend, &self.session, draft).await;
            self.state.complete_event_create(result);
        }
    }

    pub async fn save_event_edit(&mut self) {
        if let Some(draft) = self.state.prepare_event_update() {
            let result = events::update_event(&*self.backend, &self.session, draft).await;
            self.state.complete_event_update(result);
        }
    }

    pub async fn delete_event(&mut self, id: &EntityId) {
        let id = self.state.prepare_event_delete(id);
        let result = events::delete_event(&*self.backend, &self.session, &id).await;
        self.state.complete_event_delete(&id, result);
    }

    pub async fn submit_state(&mut self) {
        if let Some(draft) = self.state.prepare_state_create() {
            let result = states::create_state(&*self.backend, &self.session, &draft).await;
            self.state.complete_state_create(&draft, result);
        }
    }

    pub async fn save_state_edit(&mut self) {
        if let Some(draft) = self.state.prepare_state_update() {
            let result = states::update_state(&*self.backend, &self.session, &draft).await;
            self.state.complete_state_update(&draft, result);
        }
    }

    pub async fn delete_state(&mut self, id: &EntityId) {
        let (id, event_id) = self.state.prepare_state_delete(id);
        let result =
            states::delete_state(&*self.backend, &self.session, &id, event_id.as_ref()).await;
        self.state.complete_state_delete(&id, event_id.as_ref(), result);
    }

    pub async fn submit_photos(&mut self) {
        if let Some(batch) = self.state.prepare_photo_upload() {
            let event_id = batch.event_id.clone();
            let report = upload::upload_photo_batch(
                self.backend.clone(),
                self.session.clone(),
                batch,
                self.upload_concurrency,
            )
            .await;
            self.state.complete_photo_upload(&event_id, report);
        }
    }

    pub async fn delete_photo(&mut self, id: &EntityId) {
        let id = self.state.prepare_photo_delete(id);
        let result = photos::delete_photo(&*self.backend, &self.session, &id).await;
        self.state.complete_photo_delete(&id, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FormMessage;
    use gallery_api::memory::InMemoryBackend;
    use gallery_api::{Collection, Credentials, PendingFile};
    use serde_json::json;

    fn admin_session() -> Session {
        Session::signed_in(Credentials {
            username: "admin".to_string(),
            token: "t".to_string(),
        })
    }

    #[tokio::test]
    async fn test_full_admin_walkthrough() {
        let backend = Arc::new(InMemoryBackend::new());
        let mut panel = AdminPanel::new(backend.clone(), admin_session(), 3);

        panel.refresh_events().await;
        assert!(panel.state.events.is_empty());

        panel.state.set_event_name("Summer Camp".to_string());
        panel
            .state
            .set_event_image(Some(PendingFile::new("camp.jpg", vec![1])));
        panel.submit_event().await;
        assert_eq!(panel.state.events.len(), 1);
        let event_id = panel.state.events[0].id.clone();

        panel.select_event(Some(event_id.clone())).await;
        panel.state.set_state_name("Day 1".to_string());
        panel.submit_state().await;
        assert_eq!(panel.state.states.len(), 1);
        let state_id = panel.state.states[0].id.clone();

        panel.state.select_state(Some(state_id.clone()));
        panel.state.set_photo_files(vec![
            PendingFile::new("1.jpg", vec![1]),
            PendingFile::new("2.jpg", vec![2]),
        ]);
        panel.submit_photos().await;
        assert_eq!(panel.state.photos.len(), 2);
        assert!(panel.state.photos.iter().all(|p| p.state_id == state_id));

        let first = panel.state.photos[0].id.clone();
        panel.delete_photo(&first).await;
        assert_eq!(panel.state.photos.len(), 1);

        panel.delete_state(&state_id).await;
        assert!(panel.state.states.is_empty());

        panel.delete_event(&event_id).await;
        assert!(panel.state.events.is_empty());
        assert_eq!(panel.state.selected_event, None);

        assert!(backend
            .requests()
            .iter()
            .all(|r| r.authorized_as.as_deref() == Some("admin")));
    }

    #[tokio::test]
    async fn test_failure_in_one_form_leaves_others_alone() {
        let backend = Arc::new(InMemoryBackend::new());
        let event_id = backend.seed(
            Collection::Events,
            json!({ "name": "A", "coverImage": "https://x/a.jpg", "date": "2026-01-01" }),
        );
        backend.fail_requests("POST /states");
        let mut panel = AdminPanel::new(backend, Session::anonymous(), 3);
        panel.refresh_events().await;
        panel.select_event(Some(event_id)).await;

        panel.state.set_state_name("Broken".to_string());
        panel.submit_state().await;

        assert!(panel
            .state
            .state_form
            .message
            .as_ref()
            .is_some_and(FormMessage::is_error));
        assert_eq!(panel.state.event_form.message, None);
        assert_eq!(panel.state.photo_form.message, None);
        assert_eq!(panel.state.events.len(), 1);
    }

    #[tokio::test]
    async fn test_switching_event_clears_state_selection() {
        let backend = Arc::new(InMemoryBackend::new());
        let a = backend.seed(
            Collection::Events,
            json!({ "name": "A", "coverImage": "https://x/a.jpg", "date": "2026-01-01" }),
        );
        let b = backend.seed(
            Collection::Events,
            json!({ "name": "B", "coverImage": "https://x/b.jpg", "date": "2026-01-02" }),
        );
        let s = backend.seed(Collection::States, json!({ "eventId": a.as_str(), "name": "S" }));
        let mut panel = AdminPanel::new(backend, Session::anonymous(), 3);

        panel.select_event(Some(a)).await;
        panel.state.select_state(Some(s));
        panel.select_event(Some(b)).await;

        assert_eq!(panel.state.selected_state, None);
        assert!(panel.state.states.is_empty());

        panel
            .state
            .set_photo_files(vec![PendingFile::new("x.jpg", vec![1])]);
        panel.submit_photos().await;
        assert_eq!(
            panel.state.photo_form.message,
            Some(FormMessage::Error(photos::PHOTO_INPUT_MISSING.to_string()))
        );
    }
}
