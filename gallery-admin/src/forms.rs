use gallery_api::{EntityId, PendingFile};

/// The single status line of a form. Success and error can never both be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    Success(String),
    Error(String),
}

impl FormMessage {
    pub fn is_error(&self) -> bool {
        matches!(self, FormMessage::Error(_))
    }

    pub fn text(&self) -> &str {
        match self {
            FormMessage::Success(text) | FormMessage::Error(text) => text,
        }
    }
}

/// Which admin panel is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Photo,
    Event,
    State,
}

/// Create form plus the inline edit form of the event list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventForm {
    pub name: String,
    pub image: Option<PendingFile>,
    /// `Some` while an event is being edited
    pub editing: Option<EventEdit>,
    pub message: Option<FormMessage>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventEdit {
    pub id: EntityId,
    pub name: String,
    /// Replacement cover; `None` keeps the current one
    pub image: Option<PendingFile>,
}

/// Name field shared by create and edit mode
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateForm {
    pub name: String,
    pub editing: Option<EntityId>,
    pub message: Option<FormMessage>,
}

impl StateForm {
    pub fn is_editing(&self, id: &EntityId) -> bool {
        self.editing.as_ref() == Some(id)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotoForm {
    pub files: Vec<PendingFile>,
    pub message: Option<FormMessage>,
}

/// Validated input for creating an event
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub name: String,
    pub image: PendingFile,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventUpdateDraft {
    pub id: EntityId,
    pub name: String,
    pub image: Option<PendingFile>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StateDraft {
    pub event_id: EntityId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StateUpdateDraft {
    pub id: EntityId,
    /// Event whose states are refetched afterwards
    pub event_id: Option<EntityId>,
    pub name: String,
}

/// A validated photo batch: every file lands in the same event, state and day
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoBatch {
    pub event_id: EntityId,
    pub state_id: EntityId,
    /// `YYYY-MM-DD`
    pub date: String,
    pub files: Vec<PendingFile>,
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
