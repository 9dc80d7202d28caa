//! Wire shapes for the seeded service's JSON API.

use serde::{Deserialize, Serialize};

use crate::domain::{LoginCredentials, UserRecord, Video};

#[derive(Debug, Serialize)]
pub(super) struct CreateUserBody<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    picture: Option<&'a str>,
}

impl<'a> From<&'a UserRecord> for CreateUserBody<'a> {
    fn from(user: &'a UserRecord) -> Self {
        Self {
            name: &user.name,
            email: &user.email,
            password: &user.password,
            picture: user.picture.as_deref(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

impl<'a> From<&'a LoginCredentials> for LoginBody<'a> {
    fn from(credentials: &'a LoginCredentials) -> Self {
        Self {
            email: credentials.email(),
            password: credentials.password(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct VideoBody<'a> {
    title: &'a str,
    description: &'a str,
    url: &'a str,
}

impl<'a> From<&'a Video> for VideoBody<'a> {
    fn from(video: &'a Video) -> Self {
        Self {
            title: &video.title,
            description: &video.description,
            url: &video.url,
        }
    }
}

/// Created user document; only the identifier is read.
#[derive(Debug, Deserialize)]
pub(super) struct CreatedUserDto {
    #[serde(rename = "_id")]
    pub(super) id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct LoginResponseDto {
    pub(super) token: String,
    #[serde(default)]
    pub(super) user_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct AttachedVideoDto {
    #[serde(rename = "_id", default)]
    pub(super) id: Option<String>,
}
