// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for parameter operations

use thiserror::Error;

/// Result type alias for parameter operations
pub type Result<T> = std::result::Result<T, ParamError>;

/// Errors raised by parameter registration and assignment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// A `set` supplied a name no container holds and user data absorbed
    /// nothing. Aborts the whole `set` call.
    #[error("parameter \"{name}\" not registered")]
    NotRegistered { name: String },

    /// A value failed a strict type rule. Local to the single parameter;
    /// the rest of the `set` call still runs.
    #[error("parameter \"{name}\" failed type check: expected {expected}, got {actual}")]
    TypeMismatch {
        name: String,
        expected: String,
        actual: String,
    },

    /// A predicate rule rejected the value in every container that holds
    /// the parameter. Aborts like `NotRegistered`, kept distinct so callers
    /// can tell a vetoed value from an unknown name.
    #[error("parameter \"{name}\" rejected by predicate")]
    PredicateRejected { name: String },

    /// Registration referenced a container that was never added.
    #[error("container \"{name}\" not registered")]
    UnknownContainer { name: String },
}

impl ParamError {
    /// Create a not-registered error
    pub fn not_registered(name: impl Into<String>) -> Self {
        ParamError::NotRegistered { name: name.into() }
    }

    /// Create a type-mismatch error
    pub fn type_mismatch(
        name: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        ParamError::TypeMismatch {
            name: name.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a predicate-rejected error
    pub fn predicate_rejected(name: impl Into<String>) -> Self {
        ParamError::PredicateRejected { name: name.into() }
    }

    /// Create an unknown-container error
    pub fn unknown_container(name: impl Into<String>) -> Self {
        ParamError::UnknownContainer { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_parameter() {
        let err = ParamError::not_registered("bogus");
        assert_eq!(err.to_string(), "parameter \"bogus\" not registered");

        let err = ParamError::type_mismatch("radius", "float", "text");
        assert_eq!(
            err.to_string(),
            "parameter \"radius\" failed type check: expected float, got text"
        );
    }
}
