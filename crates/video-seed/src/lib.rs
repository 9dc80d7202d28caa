//! Fixture seeding for a video-sharing API.
//!
//! This crate populates a running instance of the video API with a small,
//! hardcoded set of users and videos so the frontend has something to show
//! during local development.
//!
//! # Overview
//!
//! A seeding run performs three passes against the remote service:
//!
//! - create every fixture user, each with a randomly assigned picture
//! - log every fixture user in to obtain a bearer token
//! - attach fixture videos to each created and logged-in user
//!
//! Per-user failures are logged and skipped; they never abort the run.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use video_seed::{Catalogue, HttpSeedApi, PicturePicker, Seeder};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let base_url = "http://localhost:5000/api".parse()?;
//! let api = HttpSeedApi::new(base_url, None)?;
//! let catalogue = Catalogue::builtin();
//! let pictures = PicturePicker::new(catalogue.pictures().to_vec(), Some(7));
//!
//! let mut seeder = Seeder::new(Arc::new(api), pictures);
//! let report = seeder.run(&catalogue).await;
//! assert!(report.users_created <= catalogue.users().len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
mod error;
mod fixtures;
pub mod outbound;
mod startup;

pub use config::SeedSettings;
pub use domain::ports::{SeedApi, SeedApiError};
pub use domain::{
    AttachOutcome, AttachedVideo, LoginCredentials, LoginSession, NewUser, PairingMode,
    PicturePicker, SeedReport, Seeder, SessionToken, UserId, UserIdError, UserRecord,
    VIDEOS_PER_USER, Video, VideoPolicy,
};
pub use error::{CatalogueError, SeedRunError};
pub use fixtures::{Catalogue, DEFAULT_PICTURE_POOL};
pub use outbound::HttpSeedApi;
pub use startup::seed_from_settings;
