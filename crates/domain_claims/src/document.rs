//! Raw FNOL documents and the text providers that supply them

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::ReadFailure;

/// The unstructured text of one First Notice of Loss
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    text: String,
}

impl RawDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when there is no text at all; whitespace still counts as content
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<&str> for RawDocument {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for RawDocument {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Port for anything that can turn a document locator into text
pub trait DocumentSource {
    /// Reads the full text of the document identified by `locator`
    fn read(&self, locator: &str) -> Result<RawDocument, ReadFailure>;
}

/// Reads UTF-8 documents from the local file system
#[derive(Debug, Clone, Default)]
pub struct FileSystemSource {
    root: Option<PathBuf>,
}

impl FileSystemSource {
    /// Resolves locators as paths relative to the working directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves locators relative to `root`
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, locator: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(locator),
            None => PathBuf::from(locator),
        }
    }
}

impl DocumentSource for FileSystemSource {
    fn read(&self, locator: &str) -> Result<RawDocument, ReadFailure> {
        fs::read_to_string(self.resolve(locator))
            .map(RawDocument::new)
            .map_err(|e| ReadFailure::new(locator, e))
    }
}

/// Serves documents held in memory, keyed by locator
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    documents: HashMap<String, String>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, locator: impl Into<String>, text: impl Into<String>) -> Self {
        self.documents.insert(locator.into(), text.into());
        self
    }
}

impl DocumentSource for InMemorySource {
    fn read(&self, locator: &str) -> Result<RawDocument, ReadFailure> {
        self.documents
            .get(locator)
            .map(|text| RawDocument::new(text.as_str()))
            .ok_or_else(|| {
                ReadFailure::new(
                    locator,
                    io::Error::new(io::ErrorKind::NotFound, "no such document"),
                )
            })
    }
}
