use std::fmt;

pub type FetchId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedRecord {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub records: Vec<FetchedRecord>,
    /// Absolute url of the following page, `None` on the last page.
    pub next_cursor: Option<String>,
    pub previous_cursor: Option<String>,
    pub total_count: Option<u64>,
    pub final_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    PageFetched {
        fetch_id: FetchId,
        result: Result<FetchedPage, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidCursor,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidCursor => write!(f, "invalid cursor"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            FailureKind::Decode => write!(f, "malformed page"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
