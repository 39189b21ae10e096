// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Caller configuration: suppressible warnings and the serializable option set.
//!
//! Every builder option except explicit examples and prefab overrides has a
//! counterpart here, so a project can keep its verifier settings in JSON:
//!
//! ```json
//! {
//!   "suppress": ["null-fields", "nonfinal-fields"],
//!   "usingExactType": true,
//!   "allFieldsShouldBeUsedExcept": ["cache"]
//! }
//! ```

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A check the caller accepts failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Warning {
    /// Fields may be `None`; equality need not handle it.
    NullFields,
    /// Equality may depend on mutable fields.
    NonfinalFields,
    /// Equality and hash need not be sealed.
    StrictInheritance,
    /// Identical copies need not be equal (identity-sensitive types).
    IdenticalCopy,
    /// Skip identical-copy reflexivity entirely.
    IdenticalCopyForVersionedEntity,
    /// Ignore `nonnull` and `immutable` markers.
    Annotation,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Warning::NullFields => "NullFields",
            Warning::NonfinalFields => "NonfinalFields",
            Warning::StrictInheritance => "StrictInheritance",
            Warning::IdenticalCopy => "IdenticalCopy",
            Warning::IdenticalCopyForVersionedEntity => "IdenticalCopyForVersionedEntity",
            Warning::Annotation => "Annotation",
        };
        write!(f, "Warning::{}", name)
    }
}

/// Serializable verifier options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VerifierConfig {
    pub suppress: BTreeSet<Warning>,
    /// Equality only holds between identical dynamic types.
    pub using_exact_type: bool,
    pub all_fields_should_be_used: bool,
    /// Field names exempt from the all-fields requirement. Non-empty implies
    /// `all_fields_should_be_used`.
    pub all_fields_should_be_used_except: BTreeSet<String>,
    /// The superclass's equality is intentionally different.
    pub redefined_superclass: bool,
}

impl VerifierConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn is_suppressed(&self, warning: Warning) -> bool {
        self.suppress.contains(&warning)
    }

    /// Whether every field (minus exceptions) must take part in equality.
    pub fn requires_all_fields(&self) -> bool {
        self.all_fields_should_be_used || !self.all_fields_should_be_used_except.is_empty()
    }

    /// Fold `other` into `self`: sets are unioned, flags are or-ed.
    pub fn merge(&mut self, other: VerifierConfig) {
        self.suppress.extend(other.suppress);
        self.using_exact_type |= other.using_exact_type;
        self.all_fields_should_be_used |= other.all_fields_should_be_used;
        self.all_fields_should_be_used_except
            .extend(other.all_fields_should_be_used_except);
        self.redefined_superclass |= other.redefined_superclass;
    }
}
