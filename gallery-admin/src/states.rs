//! State (sub-album) create / edit / delete, always scoped to the selected event

use gallery_api::{
    ApiResult, Collection, EntityId, GalleryBackend, NewState, Session, State, StateUpdate,
};

use crate::error::AdminError;
use crate::forms::{is_blank, FormMessage, StateDraft, StateUpdateDraft};
use crate::state::{report_failure, AdminState};

pub const STATE_INPUT_MISSING: &str = "Missing data.";
pub const STATE_CREATED: &str = "State uploaded successfully!";
pub const STATE_CREATE_FAILED: &str = "Failed to upload state.";
pub const STATE_UPDATED: &str = "State updated successfully!";
pub const STATE_UPDATE_FAILED: &str = "Failed to update state.";
pub const STATE_DELETE_FAILED: &str = "Failed to delete state.";

impl AdminState {
    pub fn set_state_name(&mut self, name: String) {
        self.state_form.name = name;
    }

    pub fn prepare_state_create(&mut self) -> Option<StateDraft> {
        self.state_form.message = None;
        match (&self.selected_event, is_blank(&self.state_form.name)) {
            (Some(event_id), false) => Some(StateDraft {
                event_id: event_id.clone(),
                name: self.state_form.name.trim().to_string(),
            }),
            _ => {
                report_failure(
                    &mut self.state_form.message,
                    "State create rejected",
                    AdminError::Precondition(STATE_INPUT_MISSING),
                    STATE_CREATE_FAILED,
                );
                None
            }
        }
    }

    /// Apply the outcome of [`create_state`]: the refreshed state list of the event
    pub fn complete_state_create(&mut self, draft: &StateDraft, result: ApiResult<Vec<State>>) {
        match result {
            Ok(states) => {
                self.apply_states(&draft.event_id, states);
                self.state_form.name.clear();
                self.state_form.message = Some(FormMessage::Success(STATE_CREATED.to_string()));
            }
            Err(e) => report_failure(
                &mut self.state_form.message,
                "Error uploading state",
                e.into(),
                STATE_CREATE_FAILED,
            ),
        }
    }

    /// Enter edit mode; the shared name field takes the state's current name
    pub fn begin_state_edit(&mut self, state: &State) {
        self.state_form.editing = Some(state.id.clone());
        self.state_form.name = state.name.clone();
    }

    pub fn cancel_state_edit(&mut self) {
        self.state_form.editing = None;
        self.state_form.name.clear();
    }

    pub fn prepare_state_update(&mut self) -> Option<StateUpdateDraft> {
        self.state_form.message = None;
        let id = self.state_form.editing.clone()?;
        if is_blank(&self.state_form.name) {
            report_failure(
                &mut self.state_form.message,
                "State update rejected",
                AdminError::Precondition(STATE_INPUT_MISSING),
                STATE_UPDATE_FAILED,
            );
            return None;
        }
        Some(StateUpdateDraft {
            id,
            event_id: self.selected_event.clone(),
            name: self.state_form.name.trim().to_string(),
        })
    }

    pub fn complete_state_update(
        &mut self,
        draft: &StateUpdateDraft,
        result: ApiResult<Option<Vec<State>>>,
    ) {
        match result {
            Ok(refreshed) => {
                match (&draft.event_id, refreshed) {
                    (Some(event_id), Some(states)) => self.apply_states(event_id, states),
                    _ => {
                        if let Some(state) = self.states.iter_mut().find(|s| s.id == draft.id) {
                            state.name = draft.name.clone();
                        }
                    }
                }
                self.state_form.editing = None;
                self.state_form.name.clear();
                self.state_form.message = Some(FormMessage::Success(STATE_UPDATED.to_string()));
            }
            Err(e) => report_failure(
                &mut self.state_form.message,
                "Update state failed",
                e.into(),
                STATE_UPDATE_FAILED,
            ),
        }
    }

    /// Returns the state to delete and the event to refetch afterwards
    pub fn prepare_state_delete(&mut self, id: &EntityId) -> (EntityId, Option<EntityId>) {
        self.state_form.message = None;
        (id.clone(), self.selected_event.clone())
    }

    pub fn complete_state_delete(
        &mut self,
        id: &EntityId,
        event_id: Option<&EntityId>,
        result: ApiResult<Option<Vec<State>>>,
    ) {
        match result {
            Ok(refreshed) => {
                match (event_id, refreshed) {
                    (Some(event_id), Some(states)) => self.apply_states(event_id, states),
                    _ => self.states.retain(|s| &s.id != id),
                }
                if self.selected_state.as_ref() == Some(id) {
                    self.selected_state = None;
                }
                if self.state_form.is_editing(id) {
                    self.cancel_state_edit();
                }
            }
            Err(e) => report_failure(
                &mut self.state_form.message,
                "Delete state failed",
                e.into(),
                STATE_DELETE_FAILED,
            ),
        }
    }

    fn apply_states(&mut self, event_id: &EntityId, states: Vec<State>) {
        if self.selected_event.as_ref() == Some(event_id) {
            self.states = states;
        } else {
            log::debug!("Selection moved away from {}, not applying states", event_id);
        }
    }
}

async fn refetch<B: GalleryBackend>(
    backend: &B,
    session: &Session,
    event_id: Option<&EntityId>,
) -> ApiResult<Option<Vec<State>>> {
    match event_id {
        Some(id) => backend.list(session, Some(id)).await.map(Some),
        None => Ok(None),
    }
}

pub async fn create_state<B: GalleryBackend>(
    backend: &B,
    session: &Session,
    draft: &StateDraft,
) -> ApiResult<Vec<State>> {
    let payload = NewState {
        event_id: draft.event_id.clone(),
        name: draft.name.clone(),
    };
    let created: State = backend.create(session, &payload).await?;
    log::info!("State '{}' created in event {}", created.name, created.event_id);
    backend.list(session, Some(&draft.event_id)).await
}

pub async fn update_state<B: GalleryBackend>(
    backend: &B,
    session: &Session,
    draft: &StateUpdateDraft,
) -> ApiResult<Option<Vec<State>>> {
    let payload = StateUpdate {
        name: draft.name.clone(),
    };
    let _: State = backend.update(session, &draft.id, &payload).await?;
    refetch(backend, session, draft.event_id.as_ref()).await
}

pub async fn delete_state<B: GalleryBackend>(
    backend: &B,
    session: &Session,
    id: &EntityId,
    event_id: Option<&EntityId>,
) -> ApiResult<Option<Vec<State>>> {
    backend.delete(session, Collection::States, id).await?;
    refetch(backend, session, event_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_api::memory::InMemoryBackend;
    use serde_json::json;

    fn seeded() -> (InMemoryBackend, EntityId) {
        let backend = InMemoryBackend::new();
        let event = backend.seed(
            Collection::Events,
            json!({ "name": "Alpha", "coverImage": "https://x/a.jpg", "date": "2026-01-01" }),
        );
        backend.seed(
            Collection::States,
            json!({ "eventId": event.as_str(), "name": "Ceremony" }),
        );
        (backend, event)
    }

    #[tokio::test]
    async fn test_create_needs_selected_event() {
        let (backend, _) = seeded();
        let mut admin = AdminState::new();
        admin.set_state_name("Reception".to_string());

        assert!(admin.prepare_state_create().is_none());
        assert_eq!(
            admin.state_form.message,
            Some(FormMessage::Error(STATE_INPUT_MISSING.to_string()))
        );
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_create_needs_name() {
        let (backend, event) = seeded();
        let mut admin = AdminState::new();
        admin.select_event(Some(event));

        assert!(admin.prepare_state_create().is_none());
        assert!(admin.states.is_empty());
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_create_refetches_scoped_list() {
        let (backend, event) = seeded();
        let session = Session::anonymous();
        let mut admin = AdminState::new();
        admin.select_event(Some(event.clone()));
        admin.set_state_name("Reception".to_string());

        let draft = admin.prepare_state_create().unwrap();
        let result = create_state(&backend, &session, &draft).await;
        admin.complete_state_create(&draft, result);

        let names: Vec<&str> = admin.states.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Ceremony", "Reception"]);
        assert!(admin.state_form.name.is_empty());
        assert_eq!(
            backend.request_lines(),
            vec!["POST /states".to_string(), format!("GET /states?eventId={}", event)]
        );
    }

    #[tokio::test]
    async fn test_edit_sends_only_name() {
        let (backend, event) = seeded();
        let session = Session::anonymous();
        let mut admin = AdminState::new();
        admin.select_event(Some(event.clone()));
        admin.states = backend.list(&session, Some(&event)).await.unwrap();

        let ceremony = admin.states[0].clone();
        admin.begin_state_edit(&ceremony);
        assert_eq!(admin.state_form.name, "Ceremony");
        admin.set_state_name("Church".to_string());

        let draft = admin.prepare_state_update().unwrap();
        let result = update_state(&backend, &session, &draft).await;
        admin.complete_state_update(&draft, result);

        let put = backend
            .requests()
            .into_iter()
            .find(|r| r.line.starts_with("PUT /states/"))
            .unwrap();
        assert_eq!(put.body, Some(json!({ "name": "Church" })));
        assert_eq!(admin.states[0].name, "Church");
        assert_eq!(admin.states[0].event_id, event);
        assert!(admin.state_form.editing.is_none());
    }

    #[tokio::test]
    async fn test_edit_with_blank_name_sends_nothing() {
        let (backend, event) = seeded();
        let session = Session::anonymous();
        let mut admin = AdminState::new();
        admin.select_event(Some(event.clone()));
        admin.states = backend.list(&session, Some(&event)).await.unwrap();
        backend.clear_requests();

        let ceremony = admin.states[0].clone();
        admin.begin_state_edit(&ceremony);
        admin.set_state_name("   ".to_string());

        assert!(admin.prepare_state_update().is_none());
        assert_eq!(
            admin.state_form.message,
            Some(FormMessage::Error(STATE_INPUT_MISSING.to_string()))
        );
        assert!(admin.state_form.is_editing(&ceremony.id));
        assert_eq!(admin.states[0].name, "Ceremony");
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_delete_refetches() {
        let (backend, event) = seeded();
        let session = Session::anonymous();
        let mut admin = AdminState::new();
        admin.select_event(Some(event.clone()));
        admin.states = backend.list(&session, Some(&event)).await.unwrap();
        let doomed = admin.states[0].id.clone();
        admin.select_state(Some(doomed.clone()));

        let (id, scope) = admin.prepare_state_delete(&doomed);
        let result = delete_state(&backend, &session, &id, scope.as_ref()).await;
        admin.complete_state_delete(&id, scope.as_ref(), result);

        assert!(admin.states.is_empty());
        assert_eq!(admin.selected_state, None);
    }

    #[tokio::test]
    async fn test_failed_update_keeps_edit_mode() {
        let (backend, event) = seeded();
        let session = Session::anonymous();
        backend.fail_requests("PUT /states");
        let mut admin = AdminState::new();
        admin.select_event(Some(event.clone()));
        admin.states = backend.list(&session, Some(&event)).await.unwrap();

        let ceremony = admin.states[0].clone();
        admin.begin_state_edit(&ceremony);
        admin.set_state_name("Church".to_string());
        let draft = admin.prepare_state_update().unwrap();
        let result = update_state(&backend, &session, &draft).await;
        admin.complete_state_update(&draft, result);

        assert!(admin.state_form.is_editing(&ceremony.id));
        assert_eq!(admin.states[0].name, "Ceremony");
        assert_eq!(
            admin.state_form.message,
            Some(FormMessage::Error(STATE_UPDATE_FAILED.to_string()))
        );
    }
}
