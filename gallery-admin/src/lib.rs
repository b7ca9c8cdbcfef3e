//! # Gallery Admin
//!
//! UI-independent admin workflow for the event gallery.
//!
//! This crate provides:
//! - `AdminState`: event/state/photo list caches, selection and three forms
//! - Create/edit/delete flows for events and states, deletion for photos
//! - Batch photo uploads with a concurrency cap and per-file outcomes
//! - `AdminPanel`, which chains the steps for headless use
//!
//! Every flow is split into a synchronous `prepare_*` step (validation and
//! message reset, no network), an async operation against a
//! [`gallery_api::GalleryBackend`], and a synchronous `complete_*` step that
//! refreshes caches and sets the form message.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use gallery_admin::{events, AdminState};
//!
//! if let Some(draft) = admin.prepare_event_create() {
//!     let result = events::create_event(&client, &session, draft).await;
//!     admin.complete_event_create(result);
//! }
//! ```

pub mod error;
pub mod events;
pub mod forms;
pub mod panel;
pub mod photos;
pub mod state;
pub mod states;
pub mod upload;

pub use error::AdminError;
pub use forms::{
    AdminTab, EventDraft, EventEdit, EventForm, EventUpdateDraft, FormMessage, PhotoBatch,
    PhotoForm, StateDraft, StateForm, StateUpdateDraft,
};
pub use panel::AdminPanel;
pub use state::{load_event_scope, load_events, AdminState, EventScope};
pub use upload::{upload_photo_batch, BatchReport, FailedUpload};
