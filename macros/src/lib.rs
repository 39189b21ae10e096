// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Derive macro for `eqverify::Inspect`.
//!
//! The verifier cannot reflect over a type at runtime, so each type describes
//! itself once: its fields, its embedded superclass, how it compares and
//! hashes, and how to build it without user data. Writing that description by
//! hand is tedious and easy to get out of sync with the struct. This macro
//! writes it from the struct definition.
//!
//! # Example
//!
//! ```ignore
//! use eqverify::Inspect;
//!
//! #[derive(Debug, Clone, PartialEq, Hash, Inspect)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! #[derive(Debug, Clone, PartialEq, Hash, Inspect)]
//! #[inspect(eq = "exact", open, subclass = "PlainColorPoint")]
//! struct ColorPoint {
//!     #[inspect(extends)]
//!     point: Point,
//!     color: Color,
//!     #[inspect(mutable)]
//!     label: Option<String>,
//! }
//! ```

use proc_macro::TokenStream;

mod attrs;
mod inspect;

/// Derive `Inspect` for a struct or a fieldless enum.
///
/// # Type attributes
///
/// | Attribute              | Effect                                                  |
/// |------------------------|---------------------------------------------------------|
/// | `eq = "partial_eq"`    | equality from `PartialEq`, instanceof-style (default)   |
/// | `eq = "exact"`         | equality from `PartialEq`, identical dynamic types only |
/// | `eq = "inherit"`       | no equality of its own                                  |
/// | `eq = "abstract"`      | abstract equality slot                                  |
/// | `eq = "path::to_fn"`   | `fn(&Self, Option<&dyn Object>) -> bool`                |
/// | `hash = "hash"`        | hash from `Hash` (default)                              |
/// | `hash = "inherit"`, `"abstract"`, `"path"` | as for `eq`                         |
/// | `sealed_eq`, `sealed_hash` | the slot cannot be redefined by subclasses          |
/// | `open`                 | subclasses may exist                                    |
/// | `subclass = "Type"`    | register the trivial subclass stand-in                  |
/// | `abstract_class`       | instances come from the trivial subclass                |
/// | `immutable`            | skip mutability checks                                  |
///
/// # Field attributes
///
/// | Attribute   | Effect                                               |
/// |-------------|------------------------------------------------------|
/// | `extends`   | the field embeds the superclass                      |
/// | `mutable`   | the field may change while the value is in use       |
/// | `nonnull`   | the field is never `None`                            |
/// | `synthetic` | bookkeeping state, ignored by every check            |
/// | `skip`      | not described; built with `Default::default()`       |
#[proc_macro_derive(Inspect, attributes(inspect))]
pub fn derive_inspect(input: TokenStream) -> TokenStream {
    inspect::derive(input)
}
