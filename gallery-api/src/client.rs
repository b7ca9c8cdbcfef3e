use reqwest::header::ACCEPT;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::backend::GalleryBackend;
use crate::config::GalleryConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{Collection, EntityId, PendingFile, Resource, UploadedFile};
use crate::session::Session;

const USER_AGENT: &str = concat!("EventGallery/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the gallery backend
#[derive(Clone)]
pub struct GalleryClient {
    http: reqwest::Client,
    base_url: String,
}

impl GalleryClient {
    /// Create a new client for the configured base URL
    pub fn new(config: &GalleryConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(config.connect_timeout_secs))
            .tcp_keepalive(std::time::Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn request(&self, session: &Session, method: Method, url: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, url)
            .header(ACCEPT, "application/json");
        match session.credentials() {
            Some(creds) => builder.bearer_auth(&creds.token),
            None => builder,
        }
    }

    async fn send(builder: RequestBuilder) -> ApiResult<Response> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> ApiResult<T> {
        let response = Self::send(builder).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl GalleryBackend for GalleryClient {
    async fn list<R: Resource>(
        &self,
        session: &Session,
        event_id: Option<&EntityId>,
    ) -> ApiResult<Vec<R>> {
        let url = self.url(R::COLLECTION.path());
        let mut builder = self.request(session, Method::GET, &url);
        if let Some(id) = event_id {
            builder = builder.query(&[("eventId", id.as_str())]);
        }
        log::debug!("GET {} (eventId={:?})", url, event_id.map(|id| id.as_str()));
        let items: Vec<R> = Self::send_json(builder).await?;
        log::debug!("Loaded {} {}", items.len(), R::COLLECTION);
        Ok(items)
    }

    async fn create<R: Resource, P: Serialize + Sync>(
        &self,
        session: &Session,
        payload: &P,
    ) -> ApiResult<R> {
        let url = self.url(R::COLLECTION.path());
        log::debug!("POST {}", url);
        let created: R =
            Self::send_json(self.request(session, Method::POST, &url).json(payload)).await?;
        log::info!("Created {} {}", R::COLLECTION, created.id());
        Ok(created)
    }

    async fn update<R: Resource, P: Serialize + Sync>(
        &self,
        session: &Session,
        id: &EntityId,
        payload: &P,
    ) -> ApiResult<R> {
        let url = self.url(&format!("{}/{}", R::COLLECTION.path(), id));
        log::debug!("PUT {}", url);
        let updated =
            Self::send_json(self.request(session, Method::PUT, &url).json(payload)).await?;
        log::info!("Updated {} {}", R::COLLECTION, id);
        Ok(updated)
    }

    async fn delete(
        &self,
        session: &Session,
        collection: Collection,
        id: &EntityId,
    ) -> ApiResult<()> {
        let url = self.url(&format!("{}/{}", collection.path(), id));
        log::debug!("DELETE {}", url);
        Self::send(self.request(session, Method::DELETE, &url)).await?;
        log::info!("Deleted {} {}", collection, id);
        Ok(())
    }

    async fn upload(&self, session: &Session, file: &PendingFile) -> ApiResult<UploadedFile> {
        let url = self.url("upload");
        let part = reqwest::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.mime)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        log::debug!("POST {} ({}, {} bytes)", url, file.name, file.bytes.len());
        let uploaded: UploadedFile =
            Self::send_json(self.request(session, Method::POST, &url).multipart(form)).await?;
        log::info!("Uploaded {} -> {}", file.name, uploaded.url);
        Ok(uploaded)
    }
}
