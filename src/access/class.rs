// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::error::Result;
use crate::instantiate::instantiate;
use crate::model::{Class, Object};
use crate::prefab::PrefabValues;

use super::ObjectAccessor;

/// A class bound to the prefab store of one run.
#[derive(Clone, Copy)]
pub struct ClassAccessor<'a> {
    class: &'static Class,
    prefabs: &'a PrefabValues<'a>,
}

impl<'a> ClassAccessor<'a> {
    pub fn new(class: &'static Class, prefabs: &'a PrefabValues<'a>) -> Self {
        ClassAccessor { class, prefabs }
    }

    pub fn class(&self) -> &'static Class {
        self.class
    }

    pub fn prefabs(&self) -> &'a PrefabValues<'a> {
        self.prefabs
    }

    /// Equality is declared on this class rather than inherited.
    pub fn declares_equals(&self) -> bool {
        self.class.declares_equals()
    }

    pub fn declares_hash(&self) -> bool {
        self.class.declares_hash()
    }

    pub fn is_equals_abstract(&self) -> bool {
        self.class.is_equals_abstract()
    }

    pub fn is_hash_abstract(&self) -> bool {
        self.class.is_hash_abstract()
    }

    pub fn is_equals_inherited_from_root(&self) -> bool {
        self.class.is_equals_inherited_from_root()
    }

    /// Same prefab store, bound to the superclass.
    pub fn superclass_accessor(&self) -> Option<ClassAccessor<'a>> {
        self.class
            .superclass()
            .map(|superclass| ClassAccessor::new(superclass, self.prefabs))
    }

    /// A fresh instance with every field toggled once.
    pub fn red_accessor(&self) -> Result<ObjectAccessor> {
        let mut accessor = self.default_values_accessor()?;
        accessor.scramble(self.prefabs)?;
        Ok(accessor)
    }

    /// A fresh instance with every field toggled twice: unequal to red in
    /// every togglable field.
    pub fn black_accessor(&self) -> Result<ObjectAccessor> {
        let mut accessor = self.red_accessor()?;
        accessor.scramble(self.prefabs)?;
        Ok(accessor)
    }

    pub fn default_values_accessor(&self) -> Result<ObjectAccessor> {
        ObjectAccessor::viewed_as(instantiate(self.class)?, self.class)
    }

    pub fn red_object(&self) -> Result<Box<dyn Object>> {
        self.red_accessor().map(ObjectAccessor::into_inner)
    }

    pub fn black_object(&self) -> Result<Box<dyn Object>> {
        self.black_accessor().map(ObjectAccessor::into_inner)
    }

    /// Every field at its type-zero.
    pub fn default_values_object(&self) -> Result<Box<dyn Object>> {
        instantiate(self.class)
    }
}
