// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Building instances of arbitrary inspectable types.
//!
//! | Kind                  | Instance                                              |
//! |-----------------------|-------------------------------------------------------|
//! | primitive, float      | the type-zero (`0`, `false`, `""`, ...)                |
//! | enum                  | first declared variant                                |
//! | `Option`, `Vec`       | `None`, `vec![]`                                      |
//! | `Box<T>`              | boxed instance of `T`                                 |
//! | record                | default constructor, else constructor with zero args  |
//! | abstract record       | the registered trivial subclass                       |
//!
//! The stand-in for an abstract record is only used for a top-level instance.
//! Constructor arguments and field zeros must have the exact declared type,
//! so [`instantiate_value`] never substitutes.
//!
//! A constructor that panics with a null dereference on zero arguments is
//! retried once with non-null arguments (`Some(..)` all the way down).
//! Anything else that fails is an infrastructure error.

use tracing::trace;

use crate::error::{Error, Result};
use crate::invoke::{catching, ThrownKind};
use crate::model::class::Factory;
use crate::model::{Class, Kind, Object};

/// Constructor arguments never nest deeper than this.
const MAX_DEPTH: usize = 32;

/// Builds instances of one class.
#[derive(Debug, Clone, Copy)]
pub struct Instantiator {
    class: &'static Class,
}

impl Instantiator {
    pub fn of(class: &'static Class) -> Self {
        Instantiator { class }
    }

    /// A zero-valued instance of the class (or of its stand-in, if abstract).
    pub fn instantiate(&self) -> Result<Box<dyn Object>> {
        if self.class.is_abstract() {
            let subclass = self.class.trivial_subclass().ok_or_else(|| {
                Error::instantiation(
                    self.class.name(),
                    "the class is abstract and no trivial subclass is registered",
                )
            })?;
            trace!(class = self.class.name(), subclass = subclass.name(), "instantiating stand-in");
            return instantiate_at(subclass, 0);
        }
        instantiate_at(self.class, 0)
    }

    /// An instance of the registered trivial subclass, even for concrete classes.
    pub fn instantiate_anonymous_subclass(&self) -> Result<Box<dyn Object>> {
        let subclass = self.class.trivial_subclass().ok_or_else(|| {
            Error::instantiation(
                self.class.name(),
                "no trivial subclass is registered. Add `#[inspect(subclass = \"..\")]` \
                 or call `ClassBuilder::trivial_subclass`",
            )
        })?;
        instantiate_at(subclass, 0)
    }
}

/// Shorthand for `Instantiator::of(class).instantiate()`.
pub fn instantiate(class: &'static Class) -> Result<Box<dyn Object>> {
    Instantiator::of(class).instantiate()
}

/// A zero-valued instance of exactly `class`, abstract or not.
pub fn instantiate_value(class: &'static Class) -> Result<Box<dyn Object>> {
    instantiate_at(class, 0)
}

fn instantiate_at(class: &'static Class, depth: usize) -> Result<Box<dyn Object>> {
    if depth > MAX_DEPTH {
        return Err(Error::instantiation(
            class.name(),
            "constructor arguments nest too deeply",
        ));
    }
    match class.kind() {
        Kind::Primitive { zero } | Kind::Float { zero, .. } => Ok(zero()),
        Kind::Enum { variants } => variants()
            .into_iter()
            .next()
            .ok_or_else(|| Error::instantiation(class.name(), "enum has no variants")),
        Kind::Nullable(wrapper) | Kind::Array(wrapper) | Kind::Boxed(wrapper) => {
            match &wrapper.empty {
                Some(empty) => Ok(empty()),
                None => {
                    let inner = instantiate_at(wrapper.inner(), depth + 1)?;
                    wrapper.wrap(inner).ok_or_else(|| {
                        Error::Reflection(format!("cannot wrap a value into {}", class.name()))
                    })
                }
            }
        }
        Kind::Record => construct(class, depth),
    }
}

/// Like [`instantiate_at`], but `Option` parameters get `Some(..)`.
fn non_null_at(class: &'static Class, depth: usize) -> Result<Box<dyn Object>> {
    match class.kind() {
        Kind::Nullable(wrapper) => {
            let inner = non_null_at(wrapper.inner(), depth + 1)?;
            wrapper.wrap(inner).ok_or_else(|| {
                Error::Reflection(format!("cannot wrap a value into {}", class.name()))
            })
        }
        _ => instantiate_at(class, depth),
    }
}

fn construct(class: &'static Class, depth: usize) -> Result<Box<dyn Object>> {
    match &class.factory {
        Factory::None => Err(Error::instantiation(
            class.name(),
            "no constructor is registered. Derive `Inspect` or call \
             `ClassBuilder::constructor`",
        )),
        Factory::Default(make) => catching(|| make()).map_err(|thrown| {
            Error::instantiation(class.name(), format!("default constructor panicked: {}", thrown))
        }),
        Factory::Constructor { params, build } => {
            let args = params
                .iter()
                .map(|param| instantiate_at(param(), depth + 1))
                .collect::<Result<Vec<_>>>()?;
            trace!(class = class.name(), arity = params.len(), "calling constructor");
            match catching(|| build(args)) {
                Ok(result) => result,
                Err(thrown) if thrown.kind() == ThrownKind::NullDereference => {
                    trace!(class = class.name(), "retrying constructor with non-null arguments");
                    let args = params
                        .iter()
                        .map(|param| non_null_at(param(), depth + 1))
                        .collect::<Result<Vec<_>>>()?;
                    catching(|| build(args)).map_err(|thrown| {
                        Error::instantiation(
                            class.name(),
                            format!("constructor panicked: {}", thrown),
                        )
                    })?
                }
                Err(thrown) => Err(Error::instantiation(
                    class.name(),
                    format!("constructor panicked: {}", thrown),
                )),
            }
        }
    }
}
