use std::fmt;

pub type FetchId = u64;

/// Opaque pagination token. The core never inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cursor(String);

impl Cursor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for Cursor {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for Cursor {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row as delivered by a page fetch, and as held in the selection list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub url: String,
}

impl Record {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// A known item with its selection flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub url: String,
    pub selected: bool,
}

/// One fetched page, already adapted from the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Page {
    pub records: Vec<Record>,
    pub next_cursor: Option<Cursor>,
    /// Total number of items the remote side reports, when it reports one.
    pub total_count: Option<u64>,
}

impl Page {
    pub fn new(records: Vec<Record>, next_cursor: Option<Cursor>) -> Self {
        Self {
            records,
            next_cursor,
            total_count: None,
        }
    }

    pub fn with_total_count(mut self, count: u64) -> Self {
        self.total_count = Some(count);
        self
    }
}

/// Any failure to obtain a page. Transport and decode problems are not told apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub message: String,
}

impl FetchFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fetch failed: {}", self.message)
    }
}
