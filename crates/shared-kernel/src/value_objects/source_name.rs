// crates/shared-kernel/src/value_objects/source_name.rs
use serde::Serialize;

use crate::error::{DomainError, DomainResult};

/// Validated name of a text source.
///
/// Construction rejects empty or whitespace-only names, so every
/// `SourceName` held by the rest of the system is known to be usable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SourceName(String);

impl SourceName {
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptySourceName);
        }
        Ok(Self(name))
    }

    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for SourceName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

mod display {
    use std::fmt;

    use super::SourceName;

    impl fmt::Display for SourceName {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.as_str())
        }
    }
}
