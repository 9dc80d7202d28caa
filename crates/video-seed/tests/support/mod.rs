//! Shared helpers for video-seed integration tests.

pub mod recording;
pub mod stub_service;

use video_seed::{DEFAULT_PICTURE_POOL, PicturePicker};

/// Picker over the built-in pool with a fixed seed.
pub fn seeded_picker() -> PicturePicker {
    let pool = DEFAULT_PICTURE_POOL
        .iter()
        .map(|url| (*url).to_owned())
        .collect();
    PicturePicker::new(pool, Some(2026))
}
