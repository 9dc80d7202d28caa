//! Seeding orchestration.
//!
//! Runs the create, login and attach passes in order against a [`SeedApi`]
//! implementation. Every per-user failure is logged and skipped; nothing here
//! aborts a run.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::ports::SeedApi;
use crate::domain::{LoginSession, NewUser, PicturePicker, SessionToken, UserId, Video};
use crate::fixtures::Catalogue;

/// Number of leading catalogue videos offered to each user.
pub const VIDEOS_PER_USER: usize = 3;

/// Which of the offered videos are sent to the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VideoPolicy {
    /// Send the first offered video and stop.
    #[default]
    FirstOnly,
    /// Send every offered video.
    All,
}

/// How created identifiers are matched with login tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PairingMode {
    /// Zip the list of created ids with the list of tokens.
    ///
    /// Both lists shrink independently on failure, so a failure for one user
    /// shifts every later pair onto the wrong account.
    #[default]
    Positional,
    /// Track each user through every pass and pair by user.
    ///
    /// When creation failed but login reports the user's id (for example
    /// because the account already exists), that id is used instead.
    ByUser,
}

/// Counts from one call to [`Seeder::attach_videos`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttachOutcome {
    /// Videos the service accepted.
    pub attached: usize,
    /// Videos the service rejected or that failed in transport.
    pub failed: usize,
}

/// Summary of a seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Users the service created.
    pub users_created: usize,
    /// Users that logged in successfully.
    pub users_logged_in: usize,
    /// Videos attached across all users.
    pub videos_attached: usize,
    /// Video attachments that failed.
    pub videos_failed: usize,
    /// Users never paired with both an id and a token.
    ///
    /// A paired user is not counted here even when no video is offered.
    pub users_skipped: usize,
}

impl SeedReport {
    const fn record(&mut self, outcome: AttachOutcome) {
        self.videos_attached += outcome.attached;
        self.videos_failed += outcome.failed;
    }
}

struct SeedEntry<'a> {
    user: &'a NewUser,
    created: Option<UserId>,
    session: Option<LoginSession>,
}

/// Service that seeds fixture users and videos through a [`SeedApi`].
pub struct Seeder<A> {
    api: Arc<A>,
    pictures: PicturePicker,
    video_policy: VideoPolicy,
    pairing: PairingMode,
}

impl<A> Seeder<A> {
    /// Create a seeder with the default policies.
    #[must_use]
    pub fn new(api: Arc<A>, pictures: PicturePicker) -> Self {
        Self {
            api,
            pictures,
            video_policy: VideoPolicy::default(),
            pairing: PairingMode::default(),
        }
    }

    /// Choose which offered videos get sent.
    #[must_use]
    pub const fn with_video_policy(mut self, video_policy: VideoPolicy) -> Self {
        self.video_policy = video_policy;
        self
    }

    /// Choose how ids and tokens are paired.
    #[must_use]
    pub const fn with_pairing(mut self, pairing: PairingMode) -> Self {
        self.pairing = pairing;
        self
    }
}

impl<A> Seeder<A>
where
    A: SeedApi,
{
    /// Create every user, returning the ids of those the service accepted.
    ///
    /// Each user receives a picture drawn from the picker before sending.
    /// Failed creations are logged and contribute no id, so the result keeps
    /// input order but may be shorter than `users`.
    pub async fn create_users(&mut self, users: &[NewUser]) -> Vec<UserId> {
        let mut ids = Vec::with_capacity(users.len());
        for user in users {
            if let Some(id) = self.create_user(user).await {
                ids.push(id);
            }
        }
        ids
    }

    /// Log every user in, returning the tokens of successful logins.
    ///
    /// Shrinks on failure exactly like [`Self::create_users`].
    pub async fn login_users(&self, users: &[NewUser]) -> Vec<SessionToken> {
        let mut tokens = Vec::with_capacity(users.len());
        for user in users {
            if let Some(session) = self.login_user(user).await {
                tokens.push(session.token);
            }
        }
        tokens
    }

    /// Attach videos to one user according to the video policy.
    pub async fn attach_videos(
        &self,
        user_id: &UserId,
        token: &SessionToken,
        videos: &[Video],
    ) -> AttachOutcome {
        let selected: &[Video] = match self.video_policy {
            VideoPolicy::FirstOnly => videos.get(..1).unwrap_or_default(),
            VideoPolicy::All => videos,
        };

        let mut outcome = AttachOutcome::default();
        for video in selected {
            match self.api.attach_video(user_id, token, video).await {
                Ok(attached) => {
                    info!(
                        video = %video.title,
                        user_id = %user_id,
                        video_id = attached.id.as_deref().unwrap_or("-"),
                        "added video"
                    );
                    outcome.attached += 1;
                }
                Err(error) => {
                    warn!(
                        video = %video.title,
                        user_id = %user_id,
                        error = %error,
                        "failed to add video"
                    );
                    outcome.failed += 1;
                }
            }
        }
        outcome
    }

    /// Seed every catalogue user and attach the leading catalogue videos.
    pub async fn run(&mut self, catalogue: &Catalogue) -> SeedReport {
        let videos = leading_videos(catalogue.videos());
        match self.pairing {
            PairingMode::Positional => self.run_positional(catalogue.users(), videos).await,
            PairingMode::ByUser => self.run_by_user(catalogue.users(), videos).await,
        }
    }

    async fn run_positional(&mut self, users: &[NewUser], videos: &[Video]) -> SeedReport {
        let ids = self.create_users(users).await;
        let tokens = self.login_users(users).await;
        if ids.len() < users.len() || tokens.len() < users.len() {
            warn!(
                expected = users.len(),
                created = ids.len(),
                logged_in = tokens.len(),
                "partial failure; positional pairing may attach videos to the wrong users"
            );
        }

        let pairs = ids.len().min(tokens.len());
        let mut report = SeedReport {
            users_created: ids.len(),
            users_logged_in: tokens.len(),
            users_skipped: users.len().saturating_sub(pairs),
            ..SeedReport::default()
        };
        for (user_id, token) in ids.iter().zip(&tokens) {
            let outcome = self.attach_videos(user_id, token, videos).await;
            report.record(outcome);
        }
        report
    }

    async fn run_by_user(&mut self, users: &[NewUser], videos: &[Video]) -> SeedReport {
        let mut entries = Vec::with_capacity(users.len());
        for user in users {
            let created = self.create_user(user).await;
            entries.push(SeedEntry {
                user,
                created,
                session: None,
            });
        }
        for entry in &mut entries {
            entry.session = self.login_user(entry.user).await;
        }

        let mut report = SeedReport {
            users_created: entries.iter().filter(|e| e.created.is_some()).count(),
            users_logged_in: entries.iter().filter(|e| e.session.is_some()).count(),
            ..SeedReport::default()
        };
        for entry in &entries {
            let Some(session) = entry.session.as_ref() else {
                warn!(user = %entry.user.name, "skipping videos; user is not logged in");
                report.users_skipped += 1;
                continue;
            };
            let Some(user_id) = entry.created.as_ref().or(session.user_id.as_ref()) else {
                warn!(user = %entry.user.name, "skipping videos; no user id known");
                report.users_skipped += 1;
                continue;
            };
            let outcome = self.attach_videos(user_id, &session.token, videos).await;
            report.record(outcome);
        }
        report
    }

    async fn create_user(&mut self, user: &NewUser) -> Option<UserId> {
        let picture = self.pictures.pick().map(str::to_owned);
        let record = user.with_picture(picture);
        match self.api.create_user(&record).await {
            Ok(user_id) => {
                info!(user = %user.name, user_id = %user_id, "created user");
                Some(user_id)
            }
            Err(error) => {
                warn!(user = %user.name, error = %error, "failed to create user");
                None
            }
        }
    }

    async fn login_user(&self, user: &NewUser) -> Option<LoginSession> {
        match self.api.login(&user.credentials()).await {
            Ok(session) => {
                info!(user = %user.name, "logged in user");
                Some(session)
            }
            Err(error) => {
                warn!(user = %user.name, error = %error, "failed to log in user");
                None
            }
        }
    }
}

fn leading_videos(videos: &[Video]) -> &[Video] {
    let end = videos.len().min(VIDEOS_PER_USER);
    videos.get(..end).unwrap_or_default()
}
