//! Photo batch submission and deletion

use gallery_api::{ApiResult, Collection, EntityId, GalleryBackend, PendingFile, Session};

use crate::error::AdminError;
use crate::forms::{FormMessage, PhotoBatch};
use crate::state::{report_failure, AdminState};
use crate::upload::BatchReport;

pub const PHOTO_INPUT_MISSING: &str = "Missing fields";
pub const PHOTOS_UPLOADED: &str = "All photos uploaded successfully!";
pub const PHOTOS_UPLOAD_FAILED: &str = "Failed to upload one or more photos.";
pub const PHOTO_DELETE_FAILED: &str = "Failed to delete photo.";

impl AdminState {
    pub fn set_photo_files(&mut self, files: Vec<PendingFile>) {
        self.photo_form.files = files;
    }

    /// Check files, event and state; stamp the batch with today's date (UTC)
    pub fn prepare_photo_upload(&mut self) -> Option<PhotoBatch> {
        self.photo_form.message = None;
        match (&self.selected_event, &self.selected_state) {
            (Some(event_id), Some(state_id)) if !self.photo_form.files.is_empty() => {
                Some(PhotoBatch {
                    event_id: event_id.clone(),
                    state_id: state_id.clone(),
                    date: chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string(),
                    files: self.photo_form.files.clone(),
                })
            }
            _ => {
                report_failure(
                    &mut self.photo_form.message,
                    "Photo upload rejected",
                    AdminError::Precondition(PHOTO_INPUT_MISSING),
                    PHOTOS_UPLOAD_FAILED,
                );
                None
            }
        }
    }

    /// All-or-nothing: the photo cache is replaced by exactly the batch, or left alone.
    ///
    /// A batch for an event that is no longer selected still resets the form
    /// but leaves the cache to the current event.
    pub fn complete_photo_upload(&mut self, event_id: &EntityId, report: BatchReport) {
        if report.is_complete_success() {
            if self.selected_event.as_ref() == Some(event_id) {
                self.photos = report.created;
            } else {
                log::debug!("Selection moved away from {}, not applying photos", event_id);
            }
            self.photo_form.files.clear();
            self.photo_form.message = Some(FormMessage::Success(PHOTOS_UPLOADED.to_string()));
            return;
        }

        for failure in &report.failures {
            log::warn!("Not uploaded: {} ({})", failure.file_name, failure.reason);
        }
        log::error!(
            "Error uploading photos: {} of {} failed",
            report.total - report.created.len(),
            report.total
        );
        self.photo_form.message = Some(FormMessage::Error(PHOTOS_UPLOAD_FAILED.to_string()));
    }

    pub fn prepare_photo_delete(&mut self, id: &EntityId) -> EntityId {
        self.photo_form.message = None;
        id.clone()
    }

    pub fn complete_photo_delete(&mut self, id: &EntityId, result: ApiResult<()>) {
        match result {
            Ok(()) => self.photos.retain(|p| &p.id != id),
            Err(e) => report_failure(
                &mut self.photo_form.message,
                "Delete photo failed",
                e.into(),
                PHOTO_DELETE_FAILED,
            ),
        }
    }
}

pub async fn delete_photo<B: GalleryBackend>(
    backend: &B,
    session: &Session,
    id: &EntityId,
) -> ApiResult<()> {
    backend.delete(session, Collection::Photos, id).await
}
