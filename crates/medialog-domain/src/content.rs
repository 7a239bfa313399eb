//! Catalog and list discriminators plus the status values the access layer
//! writes on creation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Initial status of every catalog book.
pub const BOOK_STATUS_UNREAD: &str = "unread";
/// Initial status of every catalog movie.
pub const MOVIE_STATUS_UNWATCHED: &str = "unwatched";
/// Initial status of every reading/watching list entry.
pub const LIST_STATUS_UNCOMPLETED: &str = "uncompleted";

/// Which catalog a content operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Book,
    Movie,
}

/// Which per-user list a list operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Reading,
    Watching,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {expected} discriminator: {value:?}")]
pub struct UnknownDiscriminator {
    pub expected: &'static str,
    pub value: String,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Book => "book",
            Self::Movie => "movie",
        }
    }
}

impl ListType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reading => "reading",
            Self::Watching => "watching",
        }
    }
}

impl FromStr for ContentType {
    type Err = UnknownDiscriminator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "book" => Ok(Self::Book),
            "movie" => Ok(Self::Movie),
            _ => Err(UnknownDiscriminator {
                expected: "content type",
                value: s.to_owned(),
            }),
        }
    }
}

impl FromStr for ListType {
    type Err = UnknownDiscriminator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reading" => Ok(Self::Reading),
            "watching" => Ok(Self::Watching),
            _ => Err(UnknownDiscriminator {
                expected: "list type",
                value: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
