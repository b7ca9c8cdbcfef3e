use serde::Serialize;
use std::future::Future;

use crate::error::ApiResult;
use crate::models::{Collection, EntityId, PendingFile, Resource, UploadedFile};
use crate::session::Session;

/// The remote resource contract the admin workflow is written against.
///
/// Every call is a single request/response. Implementations do not retry.
pub trait GalleryBackend: Send + Sync + 'static {
    /// `GET /{collection}`, scoped to one event when `event_id` is given
    fn list<R: Resource>(
        &self,
        session: &Session,
        event_id: Option<&EntityId>,
    ) -> impl Future<Output = ApiResult<Vec<R>>> + Send;

    /// `POST /{collection}`
    fn create<R: Resource, P: Serialize + Sync>(
        &self,
        session: &Session,
        payload: &P,
    ) -> impl Future<Output = ApiResult<R>> + Send;

    /// `PUT /{collection}/{id}`
    fn update<R: Resource, P: Serialize + Sync>(
        &self,
        session: &Session,
        id: &EntityId,
        payload: &P,
    ) -> impl Future<Output = ApiResult<R>> + Send;

    /// `DELETE /{collection}/{id}`
    fn delete(
        &self,
        session: &Session,
        collection: Collection,
        id: &EntityId,
    ) -> impl Future<Output = ApiResult<()>> + Send;

    /// `POST /upload`
    fn upload(
        &self,
        session: &Session,
        file: &PendingFile,
    ) -> impl Future<Output = ApiResult<UploadedFile>> + Send;
}
