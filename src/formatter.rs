// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rendering live objects inside failure messages.
//!
//! Diagnostics quote the objects involved. The inspected type's own `Debug`
//! may be as broken as its equality, so rendering never propagates a panic:
//! it falls back to a field-by-field rendering and says what went wrong.
//!
//! ```text
//! Point { x: 1, y: 2 }                          Debug works
//! [Point x=1 y=2]-panics("formatter exploded")  Debug panicked
//! ```

use std::fmt;

use crate::invoke::catching;
use crate::model::{field, hash_code, Object};

/// Displays an object the tolerant way; see [`show`].
pub struct Show<'a>(&'a dyn Object);

/// Displays an object's hash the tolerant way; see [`show_hash`].
pub struct ShowHash<'a>(&'a dyn Object);

/// Wrap `object` for use in `format!`.
pub fn show(object: &dyn Object) -> Show<'_> {
    Show(object)
}

pub fn show_hash(object: &dyn Object) -> ShowHash<'_> {
    ShowHash(object)
}

/// Render `object` with `Debug`, or field by field if that panics.
pub fn render(object: &dyn Object) -> String {
    match catching(|| format!("{:?}", object)) {
        Ok(text) => text,
        Err(thrown) => format!("{}-panics({:?})", render_fields(object), thrown.message()),
    }
}

fn render_fields(object: &dyn Object) -> String {
    let class = object.class();
    let mut out = format!("[{}", class.name());
    for field in field::enumerate(class) {
        let value = match field.get(object) {
            Some(value) => render(value),
            None => String::from("?"),
        };
        out.push_str(&format!(" {}={}", field.name(), value));
    }
    out.push(']');
    out
}

impl fmt::Display for Show<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self.0))
    }
}

impl fmt::Display for ShowHash<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match catching(|| hash_code(self.0)) {
            Ok(hash) => write!(f, "{}", hash),
            Err(thrown) => write!(f, "hash panics: {}", thrown),
        }
    }
}
