// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::error::{Error, Result};
use crate::instantiate::{instantiate, instantiate_value, Instantiator};
use crate::model::{field, Class, FieldRef, Object};
use crate::prefab::PrefabValues;

use super::FieldAccessor;

/// An owned object, viewed as `class` (its own class or an ancestor).
pub struct ObjectAccessor {
    object: Box<dyn Object>,
    class: &'static Class,
}

impl ObjectAccessor {
    pub fn new(object: Box<dyn Object>) -> Self {
        let class = object.class();
        ObjectAccessor { object, class }
    }

    pub fn viewed_as(object: Box<dyn Object>, class: &'static Class) -> Result<Self> {
        if !object.is_instance_of(class) {
            return Err(Error::Reflection(format!(
                "{} is not an instance of {}",
                object.class().name(),
                class.name()
            )));
        }
        Ok(ObjectAccessor { object, class })
    }

    pub fn class(&self) -> &'static Class {
        self.class
    }

    pub fn get(&self) -> &dyn Object {
        &*self.object
    }

    pub fn get_mut(&mut self) -> &mut dyn Object {
        &mut *self.object
    }

    pub fn into_inner(self) -> Box<dyn Object> {
        self.object
    }

    pub fn field(&mut self, field: FieldRef) -> FieldAccessor<'_> {
        FieldAccessor::new(&mut *self.object, field)
    }

    /// A field-wise copy of the viewed fields into a fresh instance of the
    /// same dynamic type.
    pub fn copy(&self) -> Result<ObjectAccessor> {
        let target = instantiate_value(self.object.class())?;
        self.copy_fields_into(target, self.class)
    }

    /// A copy as an instance of `subclass`, which must extend the viewed class.
    ///
    /// Fields the subclass adds keep their zero values.
    pub fn copy_into_subclass(&self, subclass: &'static Class) -> Result<ObjectAccessor> {
        if !subclass.extends(self.class) {
            return Err(Error::Configuration(format!(
                "{} does not extend {}",
                subclass.name(),
                self.class.name()
            )));
        }
        let target = instantiate(subclass)?;
        self.copy_fields_into(target, subclass)
    }

    /// A copy as an instance of the registered trivial subclass.
    pub fn copy_into_anonymous_subclass(&self) -> Result<ObjectAccessor> {
        let target = Instantiator::of(self.class).instantiate_anonymous_subclass()?;
        let class = target.class();
        self.copy_fields_into(target, class)
    }

    fn copy_fields_into(&self, mut target: Box<dyn Object>, class: &'static Class) -> Result<ObjectAccessor> {
        for field in field::enumerate(self.class) {
            copy_field(&*self.object, &mut *target, field)?;
        }
        Ok(ObjectAccessor { object: target, class })
    }

    /// Toggle every field of the viewed class.
    pub fn scramble(&mut self, prefabs: &PrefabValues<'_>) -> Result<()> {
        for field in field::enumerate(self.class) {
            self.field(field).change_field(prefabs)?;
        }
        Ok(())
    }

    /// Toggle only the fields declared on the viewed class itself.
    pub fn shallow_scramble(&mut self, prefabs: &PrefabValues<'_>) -> Result<()> {
        for field in field::enumerate_declared(self.class) {
            self.field(field).change_field(prefabs)?;
        }
        Ok(())
    }
}

impl Clone for ObjectAccessor {
    fn clone(&self) -> Self {
        ObjectAccessor {
            object: self.object.clone(),
            class: self.class,
        }
    }
}

impl fmt::Debug for ObjectAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectAccessor")
            .field("class", &self.class.name())
            .field("object", &self.object)
            .finish()
    }
}

/// Instantiate exactly `class` and copy every field of `class` over from `object`.
///
/// `object` must be an instance of `class` or of a subclass: copying a
/// subclass instance this way yields a superclass-typed copy.
pub fn copy_as(object: &dyn Object, class: &'static Class) -> Result<Box<dyn Object>> {
    let mut target = instantiate_value(class)?;
    for field in field::enumerate(class) {
        copy_field(object, &mut *target, field)?;
    }
    Ok(target)
}

fn copy_field(source: &dyn Object, target: &mut dyn Object, field: FieldRef) -> Result<()> {
    let value = field
        .get(source)
        .ok_or_else(|| {
            Error::Reflection(format!(
                "{} has no field {}",
                source.class().name(),
                field.name()
            ))
        })?
        .clone_object();
    FieldAccessor::new(target, field).set(value)
}
