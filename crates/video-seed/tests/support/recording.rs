//! In-memory seed API that records every call.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use video_seed::{
    AttachedVideo, LoginCredentials, LoginSession, SeedApi, SeedApiError, SessionToken, UserId,
    UserRecord, Video,
};

/// One call observed by [`RecordingSeedApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    /// A creation request for the given email.
    Create {
        /// Email sent.
        email: String,
    },
    /// A login request for the given email.
    Login {
        /// Email sent.
        email: String,
    },
    /// An attach request.
    Attach {
        /// Path identifier.
        user_id: String,
        /// Bearer token sent.
        token: String,
        /// Title of the video sent.
        title: String,
    },
}

/// Seed API fake issuing `id-<email>` ids and `token-<email>` tokens.
#[derive(Debug, Default)]
pub struct RecordingSeedApi {
    reject_creation: HashSet<String>,
    calls: Mutex<Vec<Call>>,
}

impl RecordingSeedApi {
    /// Fail creation for `email`; login still succeeds for it.
    #[must_use]
    pub fn rejecting_creation_of(email: &str) -> Self {
        Self {
            reject_creation: HashSet::from([email.to_owned()]),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls observed so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn push(&self, call: Call) {
        self.calls.lock().expect("calls lock").push(call);
    }
}

#[async_trait]
impl SeedApi for RecordingSeedApi {
    async fn create_user(&self, user: &UserRecord) -> Result<UserId, SeedApiError> {
        self.push(Call::Create {
            email: user.email.clone(),
        });
        if self.reject_creation.contains(&user.email) {
            return Err(SeedApiError::unexpected_status(
                400_u16,
                "Email already exists",
            ));
        }
        UserId::new(format!("id-{}", user.email)).map_err(|e| SeedApiError::decode(e.to_string()))
    }

    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginSession, SeedApiError> {
        self.push(Call::Login {
            email: credentials.email().to_owned(),
        });
        Ok(LoginSession {
            token: SessionToken::new(format!("token-{}", credentials.email())),
            user_id: UserId::new(format!("id-{}", credentials.email())).ok(),
        })
    }

    async fn attach_video(
        &self,
        user_id: &UserId,
        token: &SessionToken,
        video: &Video,
    ) -> Result<AttachedVideo, SeedApiError> {
        self.push(Call::Attach {
            user_id: user_id.to_string(),
            token: token.expose().to_owned(),
            title: video.title.clone(),
        });
        Ok(AttachedVideo::default())
    }
}
