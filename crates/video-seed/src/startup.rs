//! Wiring from settings to a finished seeding run.

use std::sync::Arc;

use tracing::info;

use crate::config::SeedSettings;
use crate::domain::{PicturePicker, SeedReport, Seeder};
use crate::error::SeedRunError;
use crate::fixtures::Catalogue;
use crate::outbound::HttpSeedApi;

/// Seed the configured service and return the run summary.
///
/// Per-user failures are logged and reflected in the report; only problems
/// that prevent the run from starting are returned as errors.
///
/// # Errors
///
/// Returns [`SeedRunError`] when the base URL is invalid, the HTTP client
/// cannot be built, or the configured catalogue cannot be loaded.
///
/// # Examples
///
/// ```rust,no_run
/// use video_seed::{SeedSettings, seed_from_settings};
///
/// # async fn run(settings: SeedSettings) -> Result<(), video_seed::SeedRunError> {
/// let report = seed_from_settings(&settings).await?;
/// if report.users_skipped > 0 {
///     eprintln!("{} users received no videos", report.users_skipped);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn seed_from_settings(settings: &SeedSettings) -> Result<SeedReport, SeedRunError> {
    let base_url = settings.base_url()?;
    let catalogue = match settings.fixtures_path.as_deref() {
        Some(path) => Catalogue::from_file(path)?,
        None => Catalogue::builtin(),
    };
    let api = HttpSeedApi::new(base_url, settings.timeout())?;
    let pictures = PicturePicker::new(catalogue.pictures().to_vec(), settings.picture_seed);

    info!(
        base_url = %api.base_url(),
        users = catalogue.users().len(),
        videos = catalogue.videos().len(),
        pictures = pictures.pool().len(),
        video_policy = ?settings.video_policy(),
        pairing = ?settings.pairing_mode(),
        "seeding started"
    );

    let mut seeder = Seeder::new(Arc::new(api), pictures)
        .with_video_policy(settings.video_policy())
        .with_pairing(settings.pairing_mode());
    let report = seeder.run(&catalogue).await;

    info!(
        users_created = report.users_created,
        users_logged_in = report.users_logged_in,
        videos_attached = report.videos_attached,
        videos_failed = report.videos_failed,
        users_skipped = report.users_skipped,
        "seeding finished"
    );
    Ok(report)
}
