// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The object model: what the verifier knows about a type.
//!
//! Rust has no runtime reflection, so every inspectable type describes itself
//! once through [`Inspect::describe`]. The description becomes a [`Class`]:
//! a field-descriptor table, an optional embedded superclass, equality and
//! hash method slots, and a way to build instances. Values are handled
//! type-erased as [`Object`] trait objects.
//!
//! # Method resolution
//!
//! | Slot state   | Behaviour when invoked                                   |
//! |--------------|----------------------------------------------------------|
//! | `Inherited`  | resolve on the superclass, then on the universal root    |
//! | `Abstract`   | panic with an "abstract method" payload                  |
//! | `Declared`   | run the body against the declaring class's view          |
//! | (root)       | identity equality, address-based hash                    |
//!
//! # Example
//!
//! ```ignore
//! #[derive(Debug, Clone, PartialEq, Hash, Inspect)]
//! struct Point { x: i32, y: i32 }
//!
//! let class = Class::of::<Point>();
//! assert_eq!(class.name(), "Point");
//! ```

mod builder;
mod builtin;
pub(crate) mod class;
pub mod field;

pub use builder::{Args, ClassBuilder, Construct, FieldOptions, Param};
pub use class::{Class, ClassFn, Kind, MethodState, Signature, Wrapper};
pub use field::{FieldDescriptor, FieldRef};

use std::any::{Any, TypeId};
use std::fmt;

use class::Resolved;

use crate::invoke::ABSTRACT_METHOD;

/// A type the verifier can inspect.
///
/// Implement it with `#[derive(Inspect)]` or by hand through [`ClassBuilder`].
pub trait Inspect: Any + fmt::Debug + Clone {
    /// Register fields, hierarchy, equality, hash and construction.
    fn describe(class: &mut ClassBuilder<Self>);
}

/// A type-erased inspectable value.
pub trait Object: Any + fmt::Debug {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
    /// The dynamic class of this value.
    fn class(&self) -> &'static Class;
    fn clone_object(&self) -> Box<dyn Object>;
    /// Overwrite `self` with `value`; false when the types differ.
    fn assign(&mut self, value: Box<dyn Object>) -> bool;
}

impl<T: Inspect> Object for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn class(&self) -> &'static Class {
        Class::of::<T>()
    }

    fn clone_object(&self) -> Box<dyn Object> {
        Box::new(self.clone())
    }

    fn assign(&mut self, value: Box<dyn Object>) -> bool {
        match value.into_any().downcast::<T>() {
            Ok(value) => {
                *self = *value;
                true
            }
            Err(_) => false,
        }
    }
}

impl<'o> dyn Object + 'o {
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// View this value as `T`, following embedded superclass links.
    pub fn upcast_ref<T: Inspect>(&self) -> Option<&T> {
        self.class()
            .upcast(self.as_any(), TypeId::of::<T>())
            .and_then(|view| view.downcast_ref::<T>())
    }

    /// True if the dynamic class is `class` or one of its subclasses.
    pub fn is_instance_of(&self, class: &Class) -> bool {
        self.class().extends(class)
    }
}

impl Clone for Box<dyn Object> {
    fn clone(&self) -> Self {
        (**self).clone_object()
    }
}

/// Same allocation, regardless of vtable.
pub fn same_object(a: &dyn Object, b: &dyn Object) -> bool {
    std::ptr::addr_eq(a as *const dyn Object, b as *const dyn Object)
}

/// Invoke the resolved equality of `this` against `other`.
///
/// `None` plays the role of a null argument. Panics raised by the body, or by
/// an abstract slot, propagate to the caller.
pub fn equals(this: &dyn Object, other: Option<&dyn Object>) -> bool {
    let class = this.class();
    match class.resolve_equals() {
        Resolved::Root => other.is_some_and(|other| same_object(this, other)),
        Resolved::Abstract(declaring) => panic!(
            "{} `{}::equals` has no implementation",
            ABSTRACT_METHOD,
            declaring.name()
        ),
        Resolved::Declared(declaring, body) => {
            match class.upcast(this.as_any(), declaring.type_id()) {
                Some(view) => body(this, view, other),
                None => false,
            }
        }
    }
}

/// Invoke the resolved hash of `this`.
pub fn hash_code(this: &dyn Object) -> u64 {
    let class = this.class();
    match class.resolve_hash() {
        Resolved::Root => (this as *const dyn Object).cast::<()>() as usize as u64,
        Resolved::Abstract(declaring) => panic!(
            "{} `{}::hash` has no implementation",
            ABSTRACT_METHOD,
            declaring.name()
        ),
        Resolved::Declared(declaring, body) => {
            match class.upcast(this.as_any(), declaring.type_id()) {
                Some(view) => body(view),
                None => 0,
            }
        }
    }
}

/// Strip module paths from a `std::any::type_name`, keeping generics.
///
/// `alloc::vec::Vec<my_crate::Point>` becomes `Vec<Point>`.
pub fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' {
            segment.push(c);
        } else if c == ':' {
            segment.clear();
        } else {
            out.push_str(&segment);
            segment.clear();
            out.push(c);
        }
    }
    out.push_str(&segment);
    out
}
