//! Option catalog - the fixed, ordered set of values a user can pick from

use serde::{Deserialize, Serialize};

use crate::error::{MultiSelectError, Result};

/// Values offered when no catalog is configured
pub const DEFAULT_OPTIONS: &[&str] = &["Orange", "Green", "Red", "Yellow", "Blue", "Purple", "Pink"];

/// Ordered option labels. Order is display order; labels are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Catalog {
    options: Vec<String>,
}

impl Catalog {
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options: Vec<String> = Vec::new();
        for label in labels {
            let label = label.into();
            if options.contains(&label) {
                return Err(MultiSelectError::DuplicateOption(label));
            }
            options.push(label);
        }

        if options.is_empty() {
            return Err(MultiSelectError::EmptyCatalog);
        }

        Ok(Self { options })
    }

    pub fn contains(&self, label: &str) -> bool {
        self.options.iter().any(|o| o == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            options: DEFAULT_OPTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for Catalog {
    type Error = MultiSelectError;

    fn try_from(labels: Vec<String>) -> Result<Self> {
        Catalog::new(labels)
    }
}

impl From<Catalog> for Vec<String> {
    fn from(catalog: Catalog) -> Self {
        catalog.options
    }
}
