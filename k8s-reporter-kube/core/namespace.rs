use std::fmt::Display;

#[cfg(test)]
#[path = "./namespace.tests.rs"]
mod namespace_tests;

/// Represents kubernetes namespace.\
/// **Note** that it treats an empty string as a special case: all namespaces.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Namespace {
    value: Option<String>,
}

impl Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_all() {
            write!(f, "/ALL/")
        } else {
            write!(f, "'{}'", self.as_str())
        }
    }
}

impl Namespace {
    /// Extracts a string slice containing the entire [`Namespace`].\
    /// **Note** that all namespaces are represented by an empty string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }

    /// Provides a [`Namespace`] as an option.
    #[inline]
    pub fn as_option(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Returns `true` if the [`Namespace`] instance represents all namespaces.
    #[inline]
    pub const fn is_all(&self) -> bool {
        self.value.is_none()
    }
}

impl From<&str> for Namespace {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            Self { value: None }
        } else {
            Self {
                value: Some(value.to_owned()),
            }
        }
    }
}
