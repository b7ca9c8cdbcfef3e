//! Batch photo upload orchestration
//!
//! Each file runs through its own pipeline (upload the bytes, then create the
//! photo record). Pipelines run on a `JoinSet` with a concurrency cap, and
//! every outcome is tracked per file. Records already created server-side are
//! never rolled back.

use gallery_api::{ApiResult, EntityId, GalleryBackend, NewPhoto, PendingFile, Photo, Session};
use std::sync::Arc;
use tokio::task::JoinSet;

use crate::forms::PhotoBatch;

/// A file whose pipeline did not finish
#[derive(Debug, Clone, PartialEq)]
pub struct FailedUpload {
    pub file_name: String,
    pub reason: String,
}

/// Per-file outcome of a batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    /// Created records, in the order the files were chosen
    pub created: Vec<Photo>,
    pub failures: Vec<FailedUpload>,
    pub total: usize,
}

impl BatchReport {
    pub fn is_complete_success(&self) -> bool {
        self.failures.is_empty() && self.created.len() == self.total
    }
}

type PipelineOutput = (usize, String, ApiResult<Photo>);

/// Run every file of the batch through upload + create, at most `max_concurrent` at a time
pub async fn upload_photo_batch<B: GalleryBackend>(
    backend: Arc<B>,
    session: Session,
    batch: PhotoBatch,
    max_concurrent: usize,
) -> BatchReport {
    let max_concurrent = max_concurrent.max(1);
    let total = batch.files.len();
    log::info!(
        "Uploading {} photos to event {} / state {} ({} at a time)",
        total,
        batch.event_id,
        batch.state_id,
        max_concurrent
    );

    let mut join_set: JoinSet<PipelineOutput> = JoinSet::new();
    let mut slots: Vec<Option<Photo>> = vec![None; total];
    let mut failures = Vec::new();

    for (index, file) in batch.files.into_iter().enumerate() {
        while join_set.len() >= max_concurrent {
            if let Some(joined) = join_set.join_next().await {
                collect(joined, &mut slots, &mut failures);
            }
        }

        let backend = backend.clone();
        let session = session.clone();
        let event_id = batch.event_id.clone();
        let state_id = batch.state_id.clone();
        let date = batch.date.clone();
        join_set.spawn(async move {
            let name = file.name.clone();
            let result =
                upload_single_photo(&*backend, &session, &file, event_id, state_id, date).await;
            (index, name, result)
        });
    }

    while let Some(joined) = join_set.join_next().await {
        collect(joined, &mut slots, &mut failures);
    }

    let created: Vec<Photo> = slots.into_iter().flatten().collect();
    log::info!("Uploaded {} of {} photos", created.len(), total);
    BatchReport {
        created,
        failures,
        total,
    }
}

fn collect(
    joined: Result<PipelineOutput, tokio::task::JoinError>,
    slots: &mut [Option<Photo>],
    failures: &mut Vec<FailedUpload>,
) {
    match joined {
        Ok((index, _, Ok(photo))) => {
            if let Some(slot) = slots.get_mut(index) {
                *slot = Some(photo);
            }
        }
        Ok((_, file_name, Err(e))) => {
            log::error!("Photo {}: {}", file_name, e);
            failures.push(FailedUpload {
                file_name,
                reason: e.to_string(),
            });
        }
        Err(e) => {
            log::error!("Photo upload task aborted: {}", e);
            failures.push(FailedUpload {
                file_name: String::from("<unknown>"),
                reason: e.to_string(),
            });
        }
    }
}

async fn upload_single_photo<B: GalleryBackend>(
    backend: &B,
    session: &Session,
    file: &PendingFile,
    event_id: EntityId,
    state: EntityId,
    date: String,
) -> ApiResult<Photo> {
    let uploaded = backend.upload(session, file).await?;
    let payload = NewPhoto {
        event_id,
        state,
        url: uploaded.url,
        date,
    };
    backend.create(session, &payload).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_api::memory::InMemoryBackend;
    use gallery_api::Collection;

    fn batch(names: &[&str]) -> PhotoBatch {
        PhotoBatch {
            event_id: EntityId::new("e1").unwrap(),
            state_id: EntityId::new("s1").unwrap(),
            date: "2026-10-19".to_string(),
            files: names
                .iter()
                .map(|n| PendingFile::new(*n, vec![0u8; 4]))
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_all_files_created_in_input_order() {
        let backend = Arc::new(InMemoryBackend::new());
        let names = ["a.jpg", "b.jpg", "c.jpg", "d.jpg", "e.jpg"];

        let report =
            upload_photo_batch(backend.clone(), Session::anonymous(), batch(&names), 2).await;

        assert!(report.is_complete_success());
        assert_eq!(report.created.len(), 5);
        for (photo, name) in report.created.iter().zip(names) {
            assert!(photo.url.ends_with(name));
            assert_eq!(photo.date, "2026-10-19");
            assert_eq!(photo.state_id.as_str(), "s1");
        }
        assert_eq!(backend.count(Collection::Photos), 5);
    }

    #[tokio::test]
    async fn test_failures_tracked_per_file() {
        let backend = Arc::new(InMemoryBackend::new());
        backend.fail_upload_of("b.jpg");

        let report = upload_photo_batch(
            backend.clone(),
            Session::anonymous(),
            batch(&["a.jpg", "b.jpg", "c.jpg"]),
            3,
        )
        .await;

        assert!(!report.is_complete_success());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].file_name, "b.jpg");
        assert_eq!(report.created.len(), 2);
        // no rollback: the other two records exist server-side
        assert_eq!(backend.count(Collection::Photos), 2);
    }

    #[tokio::test]
    async fn test_zero_concurrency_still_progresses() {
        let backend = Arc::new(InMemoryBackend::new());
        let report =
            upload_photo_batch(backend, Session::anonymous(), batch(&["a.jpg"]), 0).await;
        assert!(report.is_complete_success());
    }
}
