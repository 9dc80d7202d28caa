//! Reqwest-backed adapter for the seeded service.
//!
//! This adapter owns transport details only: URL construction, JSON
//! serialisation, bearer authentication, status checks and error mapping.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use super::dto::{
    AttachedVideoDto, CreateUserBody, CreatedUserDto, LoginBody, LoginResponseDto, VideoBody,
};
use crate::domain::ports::{SeedApi, SeedApiError};
use crate::domain::{
    AttachedVideo, LoginCredentials, LoginSession, SessionToken, UserId, UserRecord, Video,
};

/// Seed API adapter that issues JSON `POST` requests below one base URL.
///
/// # Example
///
/// ```
/// use video_seed::HttpSeedApi;
///
/// let base_url = "http://localhost:5000/api".parse().expect("valid url");
/// let api = HttpSeedApi::new(base_url, None).expect("client builds");
/// assert_eq!(api.base_url().as_str(), "http://localhost:5000/api/");
/// ```
pub struct HttpSeedApi {
    client: Client,
    base_url: Url,
}

impl HttpSeedApi {
    /// Build an adapter, optionally bounding every request by `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(limit) = timeout {
            builder = builder.timeout(limit);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: with_trailing_slash(base_url),
        })
    }

    /// Base URL every endpoint is resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, SeedApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| SeedApiError::invalid_request("base URL cannot hold a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl SeedApi for HttpSeedApi {
    async fn create_user(&self, user: &UserRecord) -> Result<UserId, SeedApiError> {
        let url = self.endpoint(&["users"])?;
        let request = self.client.post(url).json(&CreateUserBody::from(user));
        let body = send_expecting(request, StatusCode::CREATED).await?;
        let created: CreatedUserDto = decode(&body)?;
        UserId::new(created.id).map_err(|e| SeedApiError::decode(e.to_string()))
    }

    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginSession, SeedApiError> {
        let url = self.endpoint(&["users", "login"])?;
        let request = self.client.post(url).json(&LoginBody::from(credentials));
        let body = send_expecting(request, StatusCode::OK).await?;
        let login: LoginResponseDto = decode(&body)?;
        Ok(LoginSession {
            token: SessionToken::new(login.token),
            user_id: login.user_id.and_then(|id| UserId::new(id).ok()),
        })
    }

    async fn attach_video(
        &self,
        user_id: &UserId,
        token: &SessionToken,
        video: &Video,
    ) -> Result<AttachedVideo, SeedApiError> {
        let url = self.endpoint(&["users", user_id.as_str(), "videos"])?;
        let request = self
            .client
            .post(url)
            .bearer_auth(token.expose())
            .json(&VideoBody::from(video));
        let body = send_expecting(request, StatusCode::CREATED).await?;
        // Success is decided by the status; the echoed document is informational.
        let attached = serde_json::from_slice::<AttachedVideoDto>(&body).unwrap_or_default();
        Ok(AttachedVideo { id: attached.id })
    }
}

async fn send_expecting(
    request: reqwest::RequestBuilder,
    expected: StatusCode,
) -> Result<Vec<u8>, SeedApiError> {
    let response = request.send().await.map_err(map_transport_error)?;
    let status = response.status();
    let body = response.bytes().await.map_err(map_transport_error)?;
    if status != expected {
        return Err(map_status_error(status, body.as_ref()));
    }
    Ok(body.to_vec())
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, SeedApiError> {
    serde_json::from_slice(body)
        .map_err(|error| SeedApiError::decode(format!("invalid JSON payload: {error}")))
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn map_transport_error(error: reqwest::Error) -> SeedApiError {
    if error.is_timeout() {
        SeedApiError::timeout(error.to_string())
    } else {
        SeedApiError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> SeedApiError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        status.canonical_reason().unwrap_or("no body").to_owned()
    } else {
        preview
    };
    SeedApiError::unexpected_status(status.as_u16(), message)
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
