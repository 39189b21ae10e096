// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::error::{Error, Result};
use crate::instantiate::instantiate_value;
use crate::model::{FieldRef, Object};
use crate::prefab::PrefabValues;

/// One field of one object, mutated in place.
pub struct FieldAccessor<'o> {
    object: &'o mut dyn Object,
    field: FieldRef,
}

impl<'o> FieldAccessor<'o> {
    pub fn new(object: &'o mut dyn Object, field: FieldRef) -> Self {
        FieldAccessor { object, field }
    }

    pub fn field(&self) -> FieldRef {
        self.field
    }

    pub fn get(&self) -> Result<&dyn Object> {
        self.field.get(&*self.object).ok_or_else(|| missing(&*self.object, self.field))
    }

    pub fn set(&mut self, value: Box<dyn Object>) -> Result<()> {
        let field = self.field;
        let slot = match field.get_mut(&mut *self.object) {
            Some(slot) => slot,
            None => return Err(missing(&*self.object, field)),
        };
        if slot.assign(value) {
            Ok(())
        } else {
            Err(Error::Reflection(format!(
                "value of the wrong type assigned to field {}",
                field.name()
            )))
        }
    }

    /// Reset the field to its type-zero: `None`, `0`, an empty `Vec`, ...
    pub fn default_field(&mut self) -> Result<()> {
        let zero = instantiate_value(self.field.class())?;
        self.set(zero)
    }

    /// Toggle the field to the other value of its prefab pair.
    ///
    /// Fields of single-valued types are left untouched.
    pub fn change_field(&mut self, prefabs: &PrefabValues<'_>) -> Result<()> {
        let class = self.field.class();
        prefabs.put_for(class)?;
        let other = prefabs.other(class, self.get()?)?;
        match other {
            Some(value) => self.set(value),
            None => Ok(()),
        }
    }

    /// Copy this field's value into the same field of `target`.
    pub fn copy_to(&self, target: &mut dyn Object) -> Result<()> {
        let value = self.get()?.clone_object();
        FieldAccessor::new(target, self.field).set(value)
    }
}

fn missing(object: &dyn Object, field: FieldRef) -> Error {
    Error::Reflection(format!(
        "{} has no field {} declared by {}",
        object.class().name(),
        field.name(),
        field.declaring().name()
    ))
}
