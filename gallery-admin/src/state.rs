use gallery_api::{ApiResult, EntityId, Event, GalleryBackend, Photo, Session, State};

use crate::error::AdminError;
use crate::forms::{AdminTab, EventForm, FormMessage, PhotoForm, StateForm};

/// Everything the admin screen owns: list caches, selection and the three forms.
///
/// Mutations are synchronous. Network work happens between a `prepare_*` call
/// (validation, message reset) and the matching `complete_*` call, so callers
/// never hold this state across an await.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminState {
    pub tab: AdminTab,
    pub events: Vec<Event>,
    pub states: Vec<State>,
    pub photos: Vec<Photo>,
    pub selected_event: Option<EntityId>,
    pub selected_state: Option<EntityId>,
    pub event_form: EventForm,
    pub state_form: StateForm,
    pub photo_form: PhotoForm,
}

/// States and photos of one event, fetched together after a selection change
#[derive(Debug)]
pub struct EventScope {
    pub states: ApiResult<Vec<State>>,
    pub photos: ApiResult<Vec<Photo>>,
}

impl AdminState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_tab(&mut self, tab: AdminTab) {
        self.tab = tab;
    }

    pub fn apply_events(&mut self, result: ApiResult<Vec<Event>>) {
        match result {
            Ok(events) => self.events = events,
            Err(e) => log::error!("Error loading events: {}", e),
        }
    }

    /// Change the selected event.
    ///
    /// Always resets the selected state and drops the previous event's states
    /// and photos when the event changes. Returns the event whose states and
    /// photos must now be fetched, if any.
    pub fn select_event(&mut self, event_id: Option<EntityId>) -> Option<EntityId> {
        if self.selected_event == event_id {
            return None;
        }
        self.selected_event = event_id.clone();
        self.selected_state = None;
        self.states.clear();
        self.photos.clear();
        event_id
    }

    /// Apply a scope fetch. Ignored when the selection moved on meanwhile.
    pub fn apply_event_scope(&mut self, event_id: &EntityId, scope: EventScope) {
        if self.selected_event.as_ref() != Some(event_id) {
            log::debug!("Discarding stale states/photos for event {}", event_id);
            return;
        }
        match scope.states {
            Ok(states) => self.states = states,
            Err(e) => log::error!("Error loading states: {}", e),
        }
        match scope.photos {
            Ok(photos) => self.photos = photos,
            Err(e) => log::error!("Error loading photos: {}", e),
        }
    }

    pub fn select_state(&mut self, state_id: Option<EntityId>) {
        self.selected_state = state_id;
    }

    pub fn event_name(&self, id: &EntityId) -> Option<&str> {
        self.events
            .iter()
            .find(|e| &e.id == id)
            .map(|e| e.name.as_str())
    }
}

pub async fn load_events<B: GalleryBackend>(
    backend: &B,
    session: &Session,
) -> ApiResult<Vec<Event>> {
    backend.list(session, None).await
}

/// Fetch states and photos of an event concurrently
pub async fn load_event_scope<B: GalleryBackend>(
    backend: &B,
    session: &Session,
    event_id: &EntityId,
) -> EventScope {
    let (states, photos) = tokio::join!(
        backend.list::<State>(session, Some(event_id)),
        backend.list::<Photo>(session, Some(event_id)),
    );
    EventScope { states, photos }
}

/// Record a failure on a form: log the detail, show the user-facing line
pub(crate) fn report_failure(
    message: &mut Option<FormMessage>,
    context: &str,
    error: AdminError,
    remote_failure: &str,
) {
    match &error {
        AdminError::Precondition(_) => log::debug!("{}: {}", context, error),
        AdminError::Remote(_) => log::error!("{}: {}", context, error),
    }
    *message = Some(FormMessage::Error(error.user_message(remote_failure)));
}
