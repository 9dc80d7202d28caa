//! Fixture catalogue: the users, videos and pictures a run seeds.
//!
//! The built-in catalogue holds three users, two videos and three picture
//! URLs. A replacement can be loaded from a JSON file with the same shape:
//!
//! ```json
//! {
//!   "users": [{"name": "...", "email": "...", "password": "..."}],
//!   "videos": [{"title": "...", "description": "...", "url": "..."}],
//!   "pictures": ["https://..."]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use cap_std::{ambient_authority, fs::Dir};
use serde::Deserialize;

use crate::domain::{NewUser, Video};
use crate::error::CatalogueError;

/// Picture URLs assigned to users of the built-in catalogue.
pub const DEFAULT_PICTURE_POOL: [&str; 3] = [
    "https://images.pexels.com/photos/3408744/pexels-photo-3408744.jpeg",
    "https://images.pexels.com/photos/624015/pexels-photo-624015.jpeg",
    "https://images.pexels.com/photos/572897/pexels-photo-572897.jpeg",
];

/// A validated set of fixture users, videos and pictures.
///
/// # Example
///
/// ```
/// use video_seed::Catalogue;
///
/// let catalogue = Catalogue::builtin();
/// assert_eq!(catalogue.users().len(), 3);
/// assert_eq!(catalogue.videos().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue {
    users: Vec<NewUser>,
    videos: Vec<Video>,
    pictures: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCatalogue {
    users: Vec<NewUser>,
    #[serde(default)]
    videos: Vec<Video>,
    pictures: Vec<String>,
}

impl Catalogue {
    /// The hardcoded development fixtures.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            users: vec![
                NewUser::new("Alice Smith", "alice.smith@example.com", "password1"),
                NewUser::new("Bob Johnson", "bob.johnson@example.com", "password2"),
                NewUser::new("Charlie Brown", "charlie.brown@example.com", "password3"),
            ],
            videos: vec![
                Video::new(
                    "Introduction to Python",
                    "This is the description for the Python intro video.",
                    "https://www.w3schools.com/html/mov_bbb.mp4",
                ),
                Video::new(
                    "Advanced Python Techniques",
                    "This is the description for the advanced Python video.",
                    "https://www.w3schools.com/html/movie.mp4",
                ),
            ],
            pictures: DEFAULT_PICTURE_POOL.iter().map(|url| (*url).to_owned()).collect(),
        }
    }

    /// Parses and validates a catalogue from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError`] if the JSON is malformed, has no users or
    /// pictures, contains blank fields, or repeats an email.
    pub fn from_json(json: &str) -> Result<Self, CatalogueError> {
        let raw: RawCatalogue =
            serde_json::from_str(json).map_err(|e| CatalogueError::ParseError {
                message: e.to_string(),
            })?;
        Self::validated(raw.users, raw.videos, raw.pictures)
    }

    /// Loads a catalogue from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::IoError`] when the file cannot be read, or
    /// any error from [`Self::from_json`].
    pub fn from_file(path: &Path) -> Result<Self, CatalogueError> {
        let io_error = |message: String| CatalogueError::IoError {
            path: path.to_path_buf(),
            message,
        };
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let file_name = path
            .file_name()
            .ok_or_else(|| io_error("catalogue path must be a file".to_owned()))?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|e| io_error(e.to_string()))?;
        let contents = dir
            .read_to_string(Path::new(file_name))
            .map_err(|e| io_error(e.to_string()))?;
        Self::from_json(&contents)
    }

    /// Users in seeding order.
    #[must_use]
    pub fn users(&self) -> &[NewUser] {
        &self.users
    }

    /// Videos in attachment order.
    #[must_use]
    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    /// Picture URLs users are assigned from.
    #[must_use]
    pub fn pictures(&self) -> &[String] {
        &self.pictures
    }

    fn validated(
        users: Vec<NewUser>,
        videos: Vec<Video>,
        pictures: Vec<String>,
    ) -> Result<Self, CatalogueError> {
        if users.is_empty() {
            return Err(CatalogueError::EmptyUsers);
        }
        if pictures.is_empty() {
            return Err(CatalogueError::EmptyPicturePool);
        }

        let mut emails = HashSet::with_capacity(users.len());
        for (index, user) in users.iter().enumerate() {
            require("user", index, "name", &user.name)?;
            require("user", index, "email", &user.email)?;
            require("user", index, "password", &user.password)?;
            if !emails.insert(user.email.to_lowercase()) {
                return Err(CatalogueError::DuplicateEmail {
                    email: user.email.clone(),
                });
            }
        }
        for (index, video) in videos.iter().enumerate() {
            require("video", index, "title", &video.title)?;
            require("video", index, "url", &video.url)?;
        }
        for (index, picture) in pictures.iter().enumerate() {
            require("picture", index, "url", picture)?;
        }

        Ok(Self {
            users,
            videos,
            pictures,
        })
    }
}

fn require(
    entity: &'static str,
    index: usize,
    field: &'static str,
    value: &str,
) -> Result<(), CatalogueError> {
    if value.trim().is_empty() {
        Err(CatalogueError::BlankField {
            entity,
            index,
            field,
        })
    } else {
        Ok(())
    }
}
