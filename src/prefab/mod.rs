// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Red/black value pairs: two unequal values per type, used to toggle fields.
//!
//! # Derivation
//!
//! | Kind              | Pair                                                    |
//! |-------------------|---------------------------------------------------------|
//! | primitive         | seeded (see [`builtin`]); unseeded primitives are errors |
//! | enum              | first and second variant; one variant means no pair     |
//! | `Option`/`Box`/`Vec` | element pair, wrapped (`Vec` gets length-1 vectors)  |
//! | record            | red and black objects of the class                      |
//!
//! Record derivation first derives every field type. A type met again while
//! it is still being derived is a cycle, reported with the full chain.
//!
//! Types that cannot produce two unequal values (single-variant enums, `()`,
//! records whose red and black objects compare equal) are recorded as
//! single-valued. Fields of those types are left alone by toggling checks.

pub mod builtin;

use std::any::TypeId;
use std::cell::RefCell;
use std::collections::HashMap;
use std::ptr;

use tracing::trace;

use crate::access::ObjectAccessor;
use crate::error::{Error, Result};
use crate::instantiate::instantiate_value;
use crate::invoke;
use crate::model::{self, field, Class, Inspect, Kind, Object};
use crate::stash::StaticStash;

enum Entry {
    Pair {
        red: Box<dyn Object>,
        black: Box<dyn Object>,
    },
    Single(Box<dyn Object>),
}

/// Per-run cache of prefab pairs.
pub struct PrefabValues<'s> {
    entries: RefCell<HashMap<TypeId, Entry>>,
    stash: Option<&'s StaticStash>,
}

impl<'s> PrefabValues<'s> {
    /// A store seeded with the built-in pairs.
    pub fn new() -> Self {
        let prefabs = PrefabValues {
            entries: RefCell::new(HashMap::new()),
            stash: None,
        };
        builtin::seed(&prefabs);
        prefabs
    }

    /// Like [`new`](Self::new), backing up the statics of every derived type.
    pub fn with_stash(stash: &'s StaticStash) -> Self {
        let mut prefabs = Self::new();
        prefabs.stash = Some(stash);
        prefabs
    }

    pub fn contains(&self, class: &Class) -> bool {
        self.entries.borrow().contains_key(&class.type_id())
    }

    /// Register an explicit pair for `V`; `red` and `black` must be unequal.
    pub fn put<V: Inspect>(&self, red: V, black: V) -> Result<()> {
        self.put_erased(Class::of::<V>(), Box::new(red), Box::new(black))
    }

    pub(crate) fn put_erased(
        &self,
        class: &'static Class,
        red: Box<dyn Object>,
        black: Box<dyn Object>,
    ) -> Result<()> {
        if invoke::equals(&*red, &*black)? {
            return Err(Error::Configuration(format!(
                "Precondition: both prefab values of type {} are equal.",
                class.name()
            )));
        }
        self.insert(class, Entry::Pair { red, black });
        Ok(())
    }

    pub(crate) fn insert_pair<V: Inspect>(&self, red: V, black: V) {
        self.insert(
            Class::of::<V>(),
            Entry::Pair {
                red: Box::new(red),
                black: Box::new(black),
            },
        );
    }

    pub(crate) fn insert_single<V: Inspect>(&self, value: V) {
        self.insert(Class::of::<V>(), Entry::Single(Box::new(value)));
    }

    fn insert(&self, class: &Class, entry: Entry) {
        self.entries.borrow_mut().insert(class.type_id(), entry);
    }

    /// Red value of `class`, if a pair is known.
    pub fn red(&self, class: &Class) -> Option<Box<dyn Object>> {
        match self.entries.borrow().get(&class.type_id())? {
            Entry::Pair { red, .. } => Some(red.clone()),
            Entry::Single(value) => Some(value.clone()),
        }
    }

    pub fn black(&self, class: &Class) -> Option<Box<dyn Object>> {
        match self.entries.borrow().get(&class.type_id())? {
            Entry::Pair { black, .. } => Some(black.clone()),
            Entry::Single(_) => None,
        }
    }

    /// True if `class` has two unequal values; derives the pair on demand.
    pub fn is_togglable(&self, class: &'static Class) -> Result<bool> {
        self.put_for(class)?;
        Ok(matches!(
            self.entries.borrow().get(&class.type_id()),
            Some(Entry::Pair { .. })
        ))
    }

    /// Derive and cache a pair for `class`, unless one is already known.
    pub fn put_for(&self, class: &'static Class) -> Result<()> {
        let mut stack = Vec::new();
        self.derive(class, &mut stack)
    }

    fn derive(&self, class: &'static Class, stack: &mut Vec<&'static Class>) -> Result<()> {
        if self.contains(class) {
            return Ok(());
        }
        if stack.iter().any(|seen| ptr::eq(*seen, class)) {
            let mut chain: Vec<String> = stack.iter().map(|c| c.name().to_string()).collect();
            chain.push(class.name().to_string());
            return Err(Error::Recursion { chain });
        }
        if let Some(stash) = self.stash {
            stash.backup(class);
        }
        stack.push(class);
        let entry = self.derive_entry(class, stack);
        stack.pop();
        let entry = entry?;
        trace!(
            class = class.name(),
            single = matches!(entry, Entry::Single(_)),
            "prefab derived"
        );
        self.insert(class, entry);
        Ok(())
    }

    fn derive_entry(&self, class: &'static Class, stack: &mut Vec<&'static Class>) -> Result<Entry> {
        match class.kind() {
            Kind::Primitive { .. } | Kind::Float { .. } => Err(Error::Configuration(format!(
                "No prefab values for {}. Add them with `with_prefab_values`.",
                class.name()
            ))),
            Kind::Enum { variants } => {
                let mut variants = variants().into_iter();
                match (variants.next(), variants.next()) {
                    (Some(red), Some(black)) => Ok(Entry::Pair { red, black }),
                    (Some(only), None) => Ok(Entry::Single(only)),
                    _ => Err(Error::instantiation(class.name(), "enum has no variants")),
                }
            }
            Kind::Nullable(wrapper) | Kind::Boxed(wrapper) | Kind::Array(wrapper) => {
                let inner = wrapper.inner();
                self.derive(inner, stack)?;
                let wrap = |value: Box<dyn Object>| {
                    wrapper.wrap(value).ok_or_else(|| {
                        Error::Reflection(format!("cannot wrap {} into {}", inner.name(), class.name()))
                    })
                };
                match (self.red(inner), self.black(inner)) {
                    (Some(red), Some(black)) => Ok(Entry::Pair {
                        red: wrap(red)?,
                        black: wrap(black)?,
                    }),
                    (Some(only), None) => Ok(Entry::Single(wrap(only)?)),
                    _ => Err(Error::Reflection(format!(
                        "no prefab values derived for {}",
                        inner.name()
                    ))),
                }
            }
            Kind::Record => {
                for field in field::enumerate(class) {
                    self.derive(field.class(), stack)?;
                }
                // Field values must have exactly this type, even when abstract.
                let mut red = ObjectAccessor::viewed_as(instantiate_value(class)?, class)?;
                red.scramble(self)?;
                let mut black = red.clone();
                black.scramble(self)?;
                let (red, black) = (red.into_inner(), black.into_inner());
                // A panicking equality counts as a pair; the checks report it.
                let equal = invoke::catching(|| model::equals(&*red, Some(&*black)));
                if equal == Ok(true) {
                    Ok(Entry::Single(red))
                } else {
                    Ok(Entry::Pair { red, black })
                }
            }
        }
    }

    /// The other value of the pair: red when `current` equals black, else black.
    ///
    /// `None` when `class` is single-valued.
    pub fn other(&self, class: &'static Class, current: &dyn Object) -> Result<Option<Box<dyn Object>>> {
        let (red, black) = match self.entries.borrow().get(&class.type_id()) {
            None => {
                return Err(Error::Reflection(format!(
                    "no prefab values derived for {}",
                    class.name()
                )))
            }
            Some(Entry::Single(_)) => return Ok(None),
            Some(Entry::Pair { red, black }) => (red.clone(), black.clone()),
        };
        if same_state(current, &*black)? {
            Ok(Some(red))
        } else {
            Ok(Some(black))
        }
    }
}

/// Equality, except that records with identity equality compare field-wise:
/// the store hands out clones, which identity never matches.
fn same_state(a: &dyn Object, b: &dyn Object) -> Result<bool> {
    let class = a.class();
    if !matches!(class.kind(), Kind::Record) || !class.is_equals_inherited_from_root() {
        return invoke::equals(a, b);
    }
    if class != b.class() {
        return Ok(false);
    }
    for field in field::enumerate(class) {
        match (field.get(a), field.get(b)) {
            (Some(left), Some(right)) => {
                if !same_state(left, right)? {
                    return Ok(false);
                }
            }
            _ => return Ok(false),
        }
    }
    Ok(true)
}

impl Default for PrefabValues<'_> {
    fn default() -> Self {
        Self::new()
    }
}
