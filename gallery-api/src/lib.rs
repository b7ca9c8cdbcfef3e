//! # Gallery API
//!
//! Typed client for the event gallery backend.
//!
//! This crate provides:
//! - Entity types (`Event`, `State`, `Photo`) validated when decoded
//! - A `GalleryBackend` trait describing list/create/update/delete/upload
//! - `GalleryClient`, the reqwest implementation of that trait
//! - An explicit `Session` carrying optional admin credentials
//! - `GalleryConfig` loading (defaults, TOML file, environment)
//!
//! ## Separation of Concerns
//!
//! This crate only talks to the server. It does **not**:
//! - Hold list caches or form state (see `gallery-admin`)
//! - Render anything (handled by the application)
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use gallery_api::{Event, GalleryBackend, GalleryClient, GalleryConfig, Session};
//!
//! let config = GalleryConfig::load()?;
//! let client = GalleryClient::new(&config)?;
//! let events: Vec<Event> = client.list(&Session::anonymous(), None).await?;
//! ```

pub mod backend;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod session;

#[cfg(any(test, feature = "test-support"))]
pub mod memory;

pub use backend::GalleryBackend;
pub use client::GalleryClient;
pub use config::GalleryConfig;
pub use error::{ApiError, ApiResult};
pub use models::{
    Collection, EntityId, Event, EventUpdate, NewEvent, NewPhoto, NewState, PendingFile, Photo,
    Resource, State, StateUpdate, UploadedFile,
};
pub use session::{Credentials, Session};
