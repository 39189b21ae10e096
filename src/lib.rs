// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Equality and hash contract verification for arbitrary types.
//!
//! Given a type and nothing else, the verifier synthesizes two instances that
//! differ in every field ("red" and "black"), then runs an ordered battery of
//! checks against them: reflexivity, symmetry, transitivity, non-nullity,
//! hash consistency, field significance, mutability and behaviour across a
//! class hierarchy. The first broken invariant is reported with the objects
//! involved.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌──────────────┐
//! │   model/     │────▶│   prefab/     │────▶│   access/    │
//! │ (Inspect,    │     │ (red/black    │     │ (scramble,   │
//! │  Class)      │     │  pairs)       │     │  copy, set)  │
//! └──────────────┘     └───────────────┘     └──────────────┘
//!        │                     │                     │
//!        ▼                     ▼                     ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                      checker/                           │
//! │  Signature → AbstractDelegation → NullFields →          │
//! │  Preconditions → Examples → Hierarchy → Fields          │
//! └─────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                  verifier.rs (fluent entry point)
//! ```
//!
//! # Module Map
//!
//! | Module        | Role                                                   |
//! |---------------|--------------------------------------------------------|
//! | `model`       | Field tables, method slots, hierarchy by embedding     |
//! | `instantiate` | Zero-valued instances of any described type            |
//! | `prefab`      | Memoized, cycle-checked red/black pairs                |
//! | `access`      | Field get/set/default/toggle/copy on live objects      |
//! | `stash`       | Snapshot and restore of registered static state        |
//! | `checker`     | The pipeline, see [`Stage`] and [`FieldCheck`]         |
//! | `formatter`   | Panic-tolerant rendering for messages                  |
//! | `config`      | [`Warning`] and the serializable [`VerifierConfig`]    |
//!
//! # Usage
//!
//! ```ignore
//! use eqverify::{Inspect, Verifier, Warning};
//!
//! #[derive(Debug, Clone, PartialEq, Hash, Inspect)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! Verifier::for_type::<Point>().verify()?;
//! ```
//!
//! # Failures
//!
//! [`Error::Violation`] means the type is wrong. Every other variant means the
//! verifier could not do its job (no constructor, a recursive type without
//! prefab values, a bad configuration). Panics in the inspected type never
//! escape: they become violations or infrastructure errors.

extern crate self as eqverify;

pub mod access;
pub mod checker;
pub mod config;
pub mod error;
pub mod formatter;
pub mod instantiate;
pub mod invoke;
pub mod model;
pub mod prefab;
pub mod stash;
#[doc(hidden)]
pub mod testing;
mod verifier;

pub use access::{ClassAccessor, FieldAccessor, ObjectAccessor};
pub use checker::{FieldCheck, Stage};
pub use config::{VerifierConfig, Warning};
pub use eqverify_macros::Inspect;
pub use error::{Category, Error, Result, Violation};
pub use instantiate::Instantiator;
pub use invoke::{catching, Thrown, ThrownKind};
pub use model::{
    Args, Class, ClassBuilder, FieldDescriptor, FieldOptions, FieldRef, Inspect, Kind,
    MethodState, Object, Param,
};
pub use prefab::PrefabValues;
pub use stash::StaticStash;
pub use verifier::{RelaxedVerifier, Verifier};
