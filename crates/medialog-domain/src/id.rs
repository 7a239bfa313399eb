//! Newtype wrappers for domain identifiers.
//!
//! Every table uses a serial `integer` primary key, so all ids wrap `i32`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! serial_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

serial_id!(
    /// Identifies a user account.
    UserId
);
serial_id!(
    /// Identifies a book in the catalog.
    BookId
);
serial_id!(
    /// Identifies a movie in the catalog.
    MovieId
);
serial_id!(
    /// Identifies a reading list entry.
    ReadingListId
);
serial_id!(
    /// Identifies a watching list entry.
    WatchingListId
);
serial_id!(
    /// Identifies a notification.
    NotificationId
);
serial_id!(
    /// Identifies a reward row.
    RewardId
);
serial_id!(
    /// Identifies a ledger entry in the `transactions` table.
    LedgerEntryId
);
