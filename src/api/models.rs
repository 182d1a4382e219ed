//! Iconfinder API models.
//!
//! Deserialization is strict: required fields must be present and have the
//! declared JSON type (`"5"` is not an integer). Optional fields may be
//! missing or `null`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: u64,
    pub username: String,
    pub location: Option<String>,
    pub name: String,
    pub social_twitter: Option<String>,
    pub social_dribbble: Option<String>,
    /// Behance portfolio URL.
    pub social_behance: Option<String>,
    pub website_url: Option<String>,
    pub company: Option<String>,
    pub is_designer: bool,
    /// Number of icon sets owned by the user.
    pub iconsets_count: u64,
    /// Only present for the authenticated user.
    pub email: Option<String>,
    /// Only present for the authenticated user.
    pub first_name: Option<String>,
    /// Only present for the authenticated user.
    pub last_name: Option<String>,
}

/// An author without a user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub author_id: u64,
    pub name: String,
    pub website_url: String,
    pub iconsets_count: u64,
}

/// Owner of an icon set: either a [`User`] or an [`Author`].
///
/// Objects carrying `user_id` are users; otherwise objects carrying
/// `author_id` are authors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UserOrAuthor {
    User(User),
    Author(Author),
}

impl<'de> Deserialize<'de> for UserOrAuthor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let object = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;

        if object.contains_key("user_id") {
            User::deserialize(serde_json::Value::Object(object))
                .map(Self::User)
                .map_err(D::Error::custom)
        } else if object.contains_key("author_id") {
            Author::deserialize(serde_json::Value::Object(object))
                .map(Self::Author)
                .map_err(D::Error::custom)
        } else {
            Err(D::Error::custom(
                "unable to determine model: expected user_id or author_id",
            ))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub identifier: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    pub identifier: String,
    pub name: String,
}

/// What a license permits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LicenseScope {
    #[serde(rename = "free")]
    Free,
    #[serde(rename = "attribution")]
    FreeWithAttribution,
    #[serde(rename = "commercial")]
    Commercial,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub license_id: u64,
    pub name: String,
    /// Link to the license text.
    pub url: Option<String>,
    pub scope: LicenseScope,
}

/// `GET /categories` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryList {
    pub total_count: u64,
    pub categories: Vec<Category>,
}

/// `GET /styles` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleList {
    pub total_count: u64,
    pub styles: Vec<Style>,
}

/// Paging parameters for list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of entries to return.
    pub count: Option<u32>,
    /// Identifier of the last entry of the previous page.
    pub after: Option<String>,
}

impl PageRequest {
    pub(crate) fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(count) = self.count {
            params.push(("count".to_string(), count.to_string()));
        }
        if let Some(after) = &self.after {
            params.push(("after".to_string(), after.clone()));
        }
        params
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User(user_id = {}, username = {})",
            self.user_id, self.username
        )
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Author(author_id = {}, name = {})",
            self.author_id, self.name
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Category(identifier = {}, name = {})",
            self.identifier, self.name
        )
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Style(identifier = {}, name = {})",
            self.identifier, self.name
        )
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "License(license_id = {}, name = {})",
            self.license_id, self.name
        )
    }
}
