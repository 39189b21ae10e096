// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Failure types for a verification run.
//!
//! A run ends in one of two ways besides success:
//!
//! | Class          | Variant                         | Meaning                                        |
//! |----------------|---------------------------------|------------------------------------------------|
//! | Violation      | [`Error::Violation`]            | The inspected type breaks the equality contract |
//! | Infrastructure | every other [`Error`] variant   | The verifier could not build or inspect the type |
//!
//! Violations carry a [`Category`] whose label prefixes the message
//! ("Symmetry:", "Mutability:", ...) and, when the failure came out of a
//! panic in the inspected type, the captured [`Thrown`] as their source.

use std::fmt;

use thiserror::Error;

use crate::invoke::Thrown;

/// The contract property a [`Violation`] is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Signature,
    AbstractDelegation,
    NonNullity,
    TypeCheck,
    Reflexivity,
    Symmetry,
    Transitivity,
    HashCode,
    SignificantFields,
    Mutability,
    Array,
    MultidimensionalArray,
    Float,
    Subclass,
    Superclass,
    RedefinedSuperclass,
    Finality,
    Precondition,
    UnnecessarySuppression,
    /// The inspected type panicked somewhere no check anticipated.
    Panic,
}

impl Category {
    /// Prefix used at the start of every message in this category.
    pub fn label(self) -> &'static str {
        match self {
            Category::Signature => "Overloaded",
            Category::AbstractDelegation => "Abstract delegation",
            Category::NonNullity => "Non-nullity",
            Category::TypeCheck => "Type-check",
            Category::Reflexivity => "Reflexivity",
            Category::Symmetry => "Symmetry",
            Category::Transitivity => "Transitivity",
            Category::HashCode => "hash",
            Category::SignificantFields => "Significant fields",
            Category::Mutability => "Mutability",
            Category::Array => "Array",
            Category::MultidimensionalArray => "Multidimensional array",
            Category::Float => "Float",
            Category::Subclass => "Subclass",
            Category::Superclass => "Superclass",
            Category::RedefinedSuperclass => "Redefined superclass",
            Category::Finality => "Finality",
            Category::Precondition => "Precondition",
            Category::UnnecessarySuppression => "Unnecessary suppression",
            Category::Panic => "Panic",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A broken equality contract, described for a human.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct Violation {
    category: Category,
    message: String,
    #[source]
    cause: Option<Thrown>,
}

impl Violation {
    /// Build a violation; `detail` follows the category label.
    pub fn new(category: Category, detail: impl AsRef<str>) -> Self {
        let detail = detail.as_ref();
        let separator = if detail.starts_with('\n') { "" } else { " " };
        Violation {
            category,
            message: format!("{}:{}{}", category.label(), separator, detail),
            cause: None,
        }
    }

    /// Attach the panic that exposed the violation.
    pub fn with_cause(mut self, cause: Thrown) -> Self {
        self.cause = Some(cause);
        self
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&Thrown> {
        self.cause.as_ref()
    }
}

/// Everything that can end a verification run early.
#[derive(Debug, Error)]
pub enum Error {
    /// The inspected type violates the equality contract.
    #[error(transparent)]
    Violation(#[from] Violation),

    /// Prefab derivation met a type that is already being derived.
    #[error(
        "Recursive datastructure.\nAdd prefab values for one of the following types: {}.",
        .chain.join(", ")
    )]
    Recursion { chain: Vec<String> },

    /// No path produced an instance of the type.
    #[error("Cannot instantiate {class}: {reason}")]
    Instantiation { class: String, reason: String },

    /// The field table and the live object disagree.
    #[error("Reflection: {0}")]
    Reflection(String),

    /// The caller's configuration cannot be honoured.
    #[error("{0}")]
    Configuration(String),

    #[error("invalid verifier configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for contract violations, false for infrastructure failures.
    pub fn is_violation(&self) -> bool {
        matches!(self, Error::Violation(_))
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            Error::Violation(violation) => Some(violation.category()),
            _ => None,
        }
    }

    pub(crate) fn instantiation(class: &str, reason: impl Into<String>) -> Self {
        Error::Instantiation {
            class: class.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
