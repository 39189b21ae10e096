// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading, writing and copying live objects field by field.
//!
//! - [`ClassAccessor`]: a class bound to a prefab store; produces red and black instances.
//! - [`ObjectAccessor`]: an owned object viewed as one class of its hierarchy.
//! - [`FieldAccessor`]: one field of a borrowed object.

mod class;
mod field;
mod object;

pub use class::ClassAccessor;
pub use field::FieldAccessor;
pub use object::{copy_as, ObjectAccessor};
