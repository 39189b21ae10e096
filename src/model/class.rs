// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-type metadata built once from [`Inspect::describe`](super::Inspect).

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use parking_lot::RwLock;

use super::builder::ClassBuilder;
use super::field::{FieldAccess, FieldDescriptor};
use super::{Inspect, Object};
use crate::error::Result;

/// Lazy reference to another class, so descriptions can be mutually recursive.
pub type ClassFn = fn() -> &'static Class;

pub(crate) type EqualsBody =
    Box<dyn Fn(&dyn Object, &dyn Any, Option<&dyn Object>) -> bool + Send + Sync>;
pub(crate) type HashBody = Box<dyn Fn(&dyn Any) -> u64 + Send + Sync>;
pub(crate) type Make = Box<dyn Fn() -> Box<dyn Object> + Send + Sync>;
pub(crate) type Build = Box<dyn Fn(Vec<Box<dyn Object>>) -> Result<Box<dyn Object>> + Send + Sync>;

static CLASSES: LazyLock<RwLock<HashMap<TypeId, &'static Class>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// State of an equality or hash slot as declared on one class.
pub(crate) enum Method<B> {
    Inherited,
    Abstract,
    Declared { body: B, sealed: bool },
}

impl<B> Method<B> {
    fn state(&self) -> MethodState {
        match self {
            Method::Inherited => MethodState::Inherited,
            Method::Abstract => MethodState::Abstract,
            Method::Declared { sealed, .. } => MethodState::Declared { sealed: *sealed },
        }
    }
}

/// Public view of a method slot, without the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodState {
    Inherited,
    Abstract,
    Declared { sealed: bool },
}

pub(crate) enum Resolved<B: 'static> {
    Root,
    Abstract(&'static Class),
    Declared(&'static Class, &'static B),
}

/// A single-element container: `Option`, `Box` or `Vec`.
pub struct Wrapper {
    pub(crate) inner: ClassFn,
    pub(crate) wrap: Box<dyn Fn(Box<dyn Object>) -> Option<Box<dyn Object>> + Send + Sync>,
    /// Value with no element at all (`None`, `vec![]`), if the shape has one.
    pub(crate) empty: Option<Make>,
}

impl Wrapper {
    pub fn inner(&self) -> &'static Class {
        (self.inner)()
    }

    /// Put `value` inside the container; `None` if it has the wrong type.
    pub fn wrap(&self, value: Box<dyn Object>) -> Option<Box<dyn Object>> {
        (self.wrap)(value)
    }
}

/// Shape of a type, as far as prefab derivation and instantiation care.
pub enum Kind {
    Primitive { zero: Make },
    Float { zero: Make, nan: Make },
    /// Fieldless enum; variants in declaration order.
    Enum { variants: Box<dyn Fn() -> Vec<Box<dyn Object>> + Send + Sync> },
    Nullable(Wrapper),
    Boxed(Wrapper),
    Array(Wrapper),
    Record,
}

pub(crate) enum Factory {
    None,
    Default(Make),
    Constructor { params: Vec<ClassFn>, build: Build },
}

pub(crate) struct SuperLink {
    pub(crate) class: ClassFn,
    pub(crate) access: Box<dyn FieldAccess>,
}

pub(crate) struct StaticField {
    pub(crate) name: &'static str,
    pub(crate) snapshot: Box<dyn Fn() -> Box<dyn Any + Send> + Send + Sync>,
    pub(crate) restore: Box<dyn Fn(Box<dyn Any + Send>) + Send + Sync>,
}

/// One declared equality signature, as seen by the signature check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub(crate) params: Vec<super::Param>,
}

impl Signature {
    pub fn params(&self) -> &[super::Param] {
        &self.params
    }
}

/// Everything the verifier knows about one type.
pub struct Class {
    pub(crate) name: String,
    pub(crate) type_id: TypeId,
    pub(crate) kind: Kind,
    pub(crate) superclass: Option<SuperLink>,
    pub(crate) fields: Vec<FieldDescriptor>,
    pub(crate) statics: Vec<StaticField>,
    pub(crate) equals: Method<EqualsBody>,
    pub(crate) hash: Method<HashBody>,
    pub(crate) overloads: Vec<Signature>,
    pub(crate) factory: Factory,
    pub(crate) is_abstract: bool,
    pub(crate) open: bool,
    pub(crate) immutable: bool,
    pub(crate) trivial_subclass: Option<ClassFn>,
}

impl Class {
    /// The class of `T`, described on first use and cached for the process.
    pub fn of<T: Inspect>() -> &'static Class {
        let id = TypeId::of::<T>();
        if let Some(class) = CLASSES.read().get(&id).copied() {
            return class;
        }
        // Describe outside the lock: descriptions look up other classes.
        let mut builder = ClassBuilder::<T>::new();
        T::describe(&mut builder);
        let class: &'static Class = Box::leak(Box::new(builder.finish()));
        *CLASSES.write().entry(id).or_insert(class)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    pub fn is_enum(&self) -> bool {
        matches!(self.kind, Kind::Enum { .. })
    }

    /// Cannot hold the type-zero "null" (`None`).
    pub fn is_primitive(&self) -> bool {
        !matches!(self.kind, Kind::Nullable(_))
    }

    pub fn superclass(&self) -> Option<&'static Class> {
        self.superclass.as_ref().map(|link| (link.class)())
    }

    /// Fields declared directly on this class.
    pub fn declared_fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn static_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.statics.iter().map(|field| field.name)
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    /// No subclass may exist: the class neither opted in nor registered one.
    pub fn is_sealed(&self) -> bool {
        !self.open && self.trivial_subclass.is_none() && !self.is_abstract
    }

    pub fn is_immutable(&self) -> bool {
        self.immutable
    }

    pub fn trivial_subclass(&self) -> Option<&'static Class> {
        self.trivial_subclass.map(|class| class())
    }

    pub fn equals_state(&self) -> MethodState {
        self.equals.state()
    }

    pub fn hash_state(&self) -> MethodState {
        self.hash.state()
    }

    /// Equality is declared (concretely or abstractly) on this very class.
    pub fn declares_equals(&self) -> bool {
        !matches!(self.equals, Method::Inherited)
    }

    pub fn declares_hash(&self) -> bool {
        !matches!(self.hash, Method::Inherited)
    }

    /// Every declared equality signature, the universal one included.
    pub fn equality_signatures(&self) -> Vec<Signature> {
        let mut signatures = Vec::with_capacity(self.overloads.len() + 1);
        if self.declares_equals() {
            signatures.push(Signature {
                params: vec![super::Param::Universal],
            });
        }
        signatures.extend(self.overloads.iter().cloned());
        signatures
    }

    /// `self` is `ancestor` or embeds it somewhere up the chain.
    pub fn extends(&self, ancestor: &Class) -> bool {
        if self.type_id == ancestor.type_id {
            return true;
        }
        self.superclass()
            .is_some_and(|parent| parent.extends(ancestor))
    }

    /// View `obj` (an instance of `self`) as the ancestor with id `target`.
    pub fn upcast<'a>(&self, obj: &'a dyn Any, target: TypeId) -> Option<&'a dyn Any> {
        if self.type_id == target {
            return Some(obj);
        }
        let link = self.superclass.as_ref()?;
        let parent = link.access.get(obj)?;
        (link.class)().upcast(parent.as_any(), target)
    }

    pub fn upcast_mut<'a>(&self, obj: &'a mut dyn Any, target: TypeId) -> Option<&'a mut dyn Any> {
        if self.type_id == target {
            return Some(obj);
        }
        let link = self.superclass.as_ref()?;
        let parent = link.access.get_mut(obj)?;
        (link.class)().upcast_mut(parent.as_any_mut(), target)
    }

    pub(crate) fn resolve_equals(&'static self) -> Resolved<EqualsBody> {
        resolve(self, |class| &class.equals)
    }

    pub(crate) fn resolve_hash(&'static self) -> Resolved<HashBody> {
        resolve(self, |class| &class.hash)
    }

    /// Resolved equality is abstract.
    pub fn is_equals_abstract(&'static self) -> bool {
        matches!(self.resolve_equals(), Resolved::Abstract(_))
    }

    pub fn is_hash_abstract(&'static self) -> bool {
        matches!(self.resolve_hash(), Resolved::Abstract(_))
    }

    /// Nothing in the chain declares equality: identity from the root applies.
    pub fn is_equals_inherited_from_root(&'static self) -> bool {
        matches!(self.resolve_equals(), Resolved::Root)
    }

    pub fn is_equals_sealed(&'static self) -> bool {
        is_sealed_slot(self, |class| &class.equals)
    }

    pub fn is_hash_sealed(&'static self) -> bool {
        is_sealed_slot(self, |class| &class.hash)
    }
}

fn resolve<B: 'static>(start: &'static Class, slot: fn(&'static Class) -> &'static Method<B>) -> Resolved<B> {
    let mut current = Some(start);
    while let Some(class) = current {
        match slot(class) {
            Method::Inherited => current = class.superclass(),
            Method::Abstract => return Resolved::Abstract(class),
            Method::Declared { body, .. } => return Resolved::Declared(class, body),
        }
    }
    Resolved::Root
}

fn is_sealed_slot<B: 'static>(start: &'static Class, slot: fn(&'static Class) -> &'static Method<B>) -> bool {
    let mut current = Some(start);
    while let Some(class) = current {
        match slot(class) {
            Method::Inherited => current = class.superclass(),
            Method::Abstract => return false,
            Method::Declared { sealed, .. } => return *sealed,
        }
    }
    false
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("name", &self.name)
            .field("fields", &self.fields.iter().map(|d| d.name()).collect::<Vec<_>>())
            .field("superclass", &self.superclass().map(Class::name))
            .finish()
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for Class {}
