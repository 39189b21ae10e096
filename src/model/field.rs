// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Field descriptors and hierarchy-aware field enumeration.
//!
//! [`enumerate`] walks a class and its embedded superclasses from the most
//! derived level to the root, yielding each field name once: a subclass field
//! shadows a superclass field of the same name. Synthetic fields are skipped.
//! [`enumerate_declared`] stops at the class itself.

use std::any::{Any, TypeId};
use std::collections::HashSet;
use std::fmt;
use std::ptr;

use super::class::{Class, ClassFn};
use super::{Inspect, Object};

/// Erased projection from an owner to one of its fields.
pub(crate) trait FieldAccess: Send + Sync {
    fn get<'a>(&self, owner: &'a dyn Any) -> Option<&'a dyn Object>;
    fn get_mut<'a>(&self, owner: &'a mut dyn Any) -> Option<&'a mut dyn Object>;
}

pub(crate) struct Projection<T, F> {
    pub(crate) get: fn(&T) -> &F,
    pub(crate) get_mut: fn(&mut T) -> &mut F,
}

impl<T: Inspect, F: Inspect> FieldAccess for Projection<T, F> {
    fn get<'a>(&self, owner: &'a dyn Any) -> Option<&'a dyn Object> {
        owner
            .downcast_ref::<T>()
            .map(|owner| (self.get)(owner) as &dyn Object)
    }

    fn get_mut<'a>(&self, owner: &'a mut dyn Any) -> Option<&'a mut dyn Object> {
        owner
            .downcast_mut::<T>()
            .map(|owner| (self.get_mut)(owner) as &mut dyn Object)
    }
}

/// One field as declared on one class.
pub struct FieldDescriptor {
    pub(crate) name: &'static str,
    pub(crate) class: ClassFn,
    pub(crate) readonly: bool,
    pub(crate) nonnull: bool,
    pub(crate) synthetic: bool,
    pub(crate) access: Box<dyn FieldAccess>,
}

impl FieldDescriptor {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared type of the field.
    pub fn class(&self) -> &'static Class {
        (self.class)()
    }

    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    pub fn is_nonnull(&self) -> bool {
        self.nonnull
    }

    pub fn is_synthetic(&self) -> bool {
        self.synthetic
    }
}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("class", &self.class().name())
            .field("readonly", &self.readonly)
            .field("nonnull", &self.nonnull)
            .finish()
    }
}

/// A field together with the class that declares it.
#[derive(Clone, Copy)]
pub struct FieldRef {
    declaring: &'static Class,
    descriptor: &'static FieldDescriptor,
}

impl FieldRef {
    pub fn declaring(&self) -> &'static Class {
        self.declaring
    }

    pub fn descriptor(&self) -> &'static FieldDescriptor {
        self.descriptor
    }

    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    pub fn class(&self) -> &'static Class {
        self.descriptor.class()
    }

    pub fn is_readonly(&self) -> bool {
        self.descriptor.readonly
    }

    pub fn is_nonnull(&self) -> bool {
        self.descriptor.nonnull
    }

    /// The field cannot hold `None`.
    pub fn is_primitive(&self) -> bool {
        self.class().is_primitive()
    }

    fn declaring_id(&self) -> TypeId {
        self.declaring.type_id()
    }

    /// Read the field from `object`, which must be an instance of the declaring class.
    pub fn get<'a>(&self, object: &'a dyn Object) -> Option<&'a dyn Object> {
        let view = object.class().upcast(object.as_any(), self.declaring_id())?;
        self.descriptor.access.get(view)
    }

    pub fn get_mut<'a>(&self, object: &'a mut dyn Object) -> Option<&'a mut dyn Object> {
        let class = object.class();
        let view = class.upcast_mut(object.as_any_mut(), self.declaring_id())?;
        self.descriptor.access.get_mut(view)
    }
}

impl PartialEq for FieldRef {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.descriptor, other.descriptor)
    }
}

impl Eq for FieldRef {}

impl fmt::Debug for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.declaring.name(), self.descriptor.name)
    }
}

/// Every field of `class`, most derived first, each name once.
pub fn enumerate(class: &'static Class) -> Vec<FieldRef> {
    let mut seen = HashSet::new();
    let mut fields = Vec::new();
    let mut current = Some(class);
    while let Some(level) = current {
        for descriptor in level.declared_fields() {
            if descriptor.synthetic || !seen.insert(descriptor.name) {
                continue;
            }
            fields.push(FieldRef {
                declaring: level,
                descriptor,
            });
        }
        current = level.superclass();
    }
    fields
}

/// Fields declared directly on `class`.
pub fn enumerate_declared(class: &'static Class) -> Vec<FieldRef> {
    class
        .declared_fields()
        .iter()
        .filter(|descriptor| !descriptor.synthetic)
        .map(|descriptor| FieldRef {
            declaring: class,
            descriptor,
        })
        .collect()
}

/// Look a field up by name across the hierarchy.
pub fn find(class: &'static Class, name: &str) -> Option<FieldRef> {
    enumerate(class).into_iter().find(|field| field.name() == name)
}
