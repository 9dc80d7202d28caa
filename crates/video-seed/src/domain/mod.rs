//! Domain types, ports and the seeding service.

mod models;
mod picture;
pub mod ports;
mod seeder;

pub use models::{
    AttachedVideo, LoginCredentials, LoginSession, NewUser, SessionToken, UserId, UserIdError,
    UserRecord, Video,
};
pub use picture::PicturePicker;
pub use seeder::{AttachOutcome, PairingMode, SeedReport, Seeder, VIDEOS_PER_USER, VideoPolicy};
