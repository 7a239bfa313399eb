/// Tracker access-layer error variants.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("user not found")]
    UserNotFound,
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("book not found")]
    BookNotFound,
    #[error("movie not found")]
    MovieNotFound,
    #[error("list not found")]
    ListNotFound,
    #[error("notification not found")]
    NotificationNotFound,
    #[error("referenced user or content does not exist")]
    InvalidReference,
    #[error("unknown content type: {0}")]
    UnknownContentType(String),
    #[error("unknown list type: {0}")]
    UnknownListType(String),
    #[error("invalid ledger type: {0}")]
    InvalidLedgerType(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl TrackerError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::BookNotFound => "BOOK_NOT_FOUND",
            Self::MovieNotFound => "MOVIE_NOT_FOUND",
            Self::ListNotFound => "LIST_NOT_FOUND",
            Self::NotificationNotFound => "NOTIFICATION_NOT_FOUND",
            Self::InvalidReference => "INVALID_REFERENCE",
            Self::UnknownContentType(_) => "UNKNOWN_CONTENT_TYPE",
            Self::UnknownListType(_) => "UNKNOWN_LIST_TYPE",
            Self::InvalidLedgerType(_) => "INVALID_LEDGER_TYPE",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Log the failure of `op` at error level. Store failures carry their
    /// full context chain.
    pub fn log(&self, op: &'static str) {
        match self {
            Self::Internal(e) => {
                let chain = distinct_chain(e);
                tracing::error!(op, kind = self.kind(), error = %chain, "{op} failed");
            }
            _ => tracing::error!(op, kind = self.kind(), error = %self, "{op} failed"),
        }
    }
}

/// Join the context chain of `e`, dropping causes whose message is already
/// part of the previous link. sqlx errors repeat their cause at every layer.
fn distinct_chain(e: &anyhow::Error) -> String {
    let mut parts: Vec<String> = Vec::new();
    for cause in e.chain() {
        let message = cause.to_string();
        if parts.last().is_some_and(|last| last.contains(&message)) {
            continue;
        }
        parts.push(message);
    }
    parts.join(": ")
}
