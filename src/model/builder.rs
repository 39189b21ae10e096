// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Registration API used by [`Inspect::describe`](super::Inspect::describe).
//!
//! # Example
//!
//! ```ignore
//! impl Inspect for Person {
//!     fn describe(class: &mut ClassBuilder<Self>) {
//!         class.field("name", |p| &p.name, |p| &mut p.name).nonnull();
//!         class.field("age", |p| &p.age, |p| &mut p.age).mutable();
//!         class.constructor(|name: String, age: u32| Person::new(name, age));
//!         class.equals_by_partial_eq().hash_by_hash();
//!     }
//! }
//! ```

use std::any::{Any, TypeId};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use super::class::{
    Class, ClassFn, EqualsBody, Factory, HashBody, Kind, Make, Method, Signature, StaticField,
    SuperLink, Wrapper,
};
use super::field::{FieldDescriptor, Projection};
use super::{short_type_name, Inspect, Object};
use crate::error::{Error, Result};

/// Parameter type of an overloaded equality declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    /// `Option<&dyn Object>`: the one signature collections call.
    Universal,
    Type { name: String, id: TypeId },
}

impl Param {
    pub fn of<U: 'static>() -> Self {
        Param::Type {
            name: short_type_name(std::any::type_name::<U>()),
            id: TypeId::of::<U>(),
        }
    }
}

/// Constructor arguments, consumed in declaration order.
pub struct Args {
    values: std::vec::IntoIter<Box<dyn Object>>,
    position: usize,
}

impl Args {
    pub(crate) fn new(values: Vec<Box<dyn Object>>) -> Self {
        Args {
            values: values.into_iter(),
            position: 0,
        }
    }

    /// Next argument as a `V`.
    pub fn take<V: Inspect>(&mut self) -> Result<V> {
        let position = self.position;
        self.position += 1;
        let value = self.values.next().ok_or_else(|| {
            Error::Reflection(format!("constructor argument {} is missing", position))
        })?;
        value.into_any().downcast::<V>().map(|value| *value).map_err(|_| {
            Error::Reflection(format!(
                "constructor argument {} is not a {}",
                position,
                short_type_name(std::any::type_name::<V>())
            ))
        })
    }
}

/// Something callable as a constructor of `T` taking the tuple `A`.
pub trait Construct<T, A>: Send + Sync + 'static {
    fn params() -> Vec<ClassFn>;
    fn construct(&self, args: &mut Args) -> Result<T>;
}

macro_rules! impl_construct {
    ($($arg:ident),*) => {
        impl<T, C, $($arg: Inspect),*> Construct<T, ($($arg,)*)> for C
        where
            C: Fn($($arg),*) -> T + Send + Sync + 'static,
        {
            fn params() -> Vec<ClassFn> {
                vec![$(Class::of::<$arg> as ClassFn),*]
            }

            #[allow(non_snake_case, unused_variables)]
            fn construct(&self, args: &mut Args) -> Result<T> {
                $(let $arg = args.take::<$arg>()?;)*
                Ok(self($($arg),*))
            }
        }
    };
}

impl_construct!();
impl_construct!(A1);
impl_construct!(A1, A2);
impl_construct!(A1, A2, A3);
impl_construct!(A1, A2, A3, A4);
impl_construct!(A1, A2, A3, A4, A5);
impl_construct!(A1, A2, A3, A4, A5, A6);
impl_construct!(A1, A2, A3, A4, A5, A6, A7);
impl_construct!(A1, A2, A3, A4, A5, A6, A7, A8);

enum PendingFactory<T> {
    None,
    Ready(Factory),
    /// Struct literal over every registered field, in registration order.
    FieldWise(fn(&mut Args) -> Result<T>),
}

/// Collects the description of `T`; see [`Inspect::describe`].
pub struct ClassBuilder<T: Inspect> {
    kind: Kind,
    superclass: Option<SuperLink>,
    fields: Vec<FieldDescriptor>,
    params: Vec<ClassFn>,
    statics: Vec<StaticField>,
    equals: Method<EqualsBody>,
    hash: Method<HashBody>,
    seal_equals: bool,
    seal_hash: bool,
    overloads: Vec<Signature>,
    factory: PendingFactory<T>,
    is_abstract: bool,
    open: bool,
    immutable: bool,
    trivial_subclass: Option<ClassFn>,
    _marker: PhantomData<fn() -> T>,
}

/// Flags on a freshly registered field.
pub struct FieldOptions<'b> {
    field: &'b mut FieldDescriptor,
}

impl FieldOptions<'_> {
    /// The field may change while the value is in use (interior mutability).
    pub fn mutable(self) -> Self {
        self.field.readonly = false;
        self
    }

    pub fn readonly(self) -> Self {
        self.field.readonly = true;
        self
    }

    /// The field is never `None`; null-field checks skip it.
    pub fn nonnull(self) -> Self {
        self.field.nonnull = true;
        self
    }

    /// Bookkeeping state that is not part of the value.
    pub fn synthetic(self) -> Self {
        self.field.synthetic = true;
        self
    }
}

impl<T: Inspect> ClassBuilder<T> {
    pub(crate) fn new() -> Self {
        ClassBuilder {
            kind: Kind::Record,
            superclass: None,
            fields: Vec::new(),
            params: Vec::new(),
            statics: Vec::new(),
            equals: Method::Inherited,
            hash: Method::Inherited,
            seal_equals: false,
            seal_hash: false,
            overloads: Vec::new(),
            factory: PendingFactory::None,
            is_abstract: false,
            open: false,
            immutable: false,
            trivial_subclass: None,
            _marker: PhantomData,
        }
    }

    // ========================================================================
    // STRUCTURE
    // ========================================================================

    /// Register an instance field. Fields are readonly unless marked otherwise.
    pub fn field<F: Inspect>(
        &mut self,
        name: &'static str,
        get: fn(&T) -> &F,
        get_mut: fn(&mut T) -> &mut F,
    ) -> FieldOptions<'_> {
        self.params.push(Class::of::<F>);
        self.fields.push(FieldDescriptor {
            name,
            class: Class::of::<F>,
            readonly: true,
            nonnull: false,
            synthetic: false,
            access: Box::new(Projection { get, get_mut }),
        });
        let last = self.fields.len() - 1;
        FieldOptions {
            field: &mut self.fields[last],
        }
    }

    /// Declare `S` as the superclass, embedded in the field reached by `get`.
    pub fn extends<S: Inspect>(
        &mut self,
        get: fn(&T) -> &S,
        get_mut: fn(&mut T) -> &mut S,
    ) -> &mut Self {
        self.params.push(Class::of::<S>);
        self.superclass = Some(SuperLink {
            class: Class::of::<S>,
            access: Box::new(Projection { get, get_mut }),
        });
        self
    }

    /// Register process-wide state to snapshot before and restore after a run.
    pub fn static_state<S: Send + 'static>(
        &mut self,
        name: &'static str,
        snapshot: fn() -> S,
        restore: fn(S),
    ) -> &mut Self {
        self.statics.push(StaticField {
            name,
            snapshot: Box::new(move || Box::new(snapshot()) as Box<dyn Any + Send>),
            restore: Box::new(move |value: Box<dyn Any + Send>| {
                if let Ok(value) = value.downcast::<S>() {
                    restore(*value);
                }
            }),
        });
        self
    }

    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    pub fn default_constructor(&mut self) -> &mut Self
    where
        T: Default,
    {
        self.factory = PendingFactory::Ready(Factory::Default(Box::new(|| {
            Box::new(T::default()) as Box<dyn Object>
        })));
        self
    }

    /// A constructor closure; arguments are synthesized from their types.
    pub fn constructor<A, C: Construct<T, A>>(&mut self, constructor: C) -> &mut Self {
        self.factory = PendingFactory::Ready(Factory::Constructor {
            params: C::params(),
            build: Box::new(move |values: Vec<Box<dyn Object>>| {
                let mut args = Args::new(values);
                constructor
                    .construct(&mut args)
                    .map(|value| Box::new(value) as Box<dyn Object>)
            }),
        });
        self
    }

    /// Build directly from one value per registered field, bypassing any
    /// user-written constructor.
    pub fn raw_constructor(&mut self, build: fn(&mut Args) -> Result<T>) -> &mut Self {
        self.factory = PendingFactory::FieldWise(build);
        self
    }

    /// Abstract: instances come from the trivial subclass.
    pub fn abstract_class(&mut self) -> &mut Self {
        self.is_abstract = true;
        self
    }

    // ========================================================================
    // EQUALITY AND HASH
    // ========================================================================

    /// Equality from `PartialEq`; the other side is upcast to `T` first.
    pub fn equals_by_partial_eq(&mut self) -> &mut Self
    where
        T: PartialEq,
    {
        self.equals = declared(equals_body(|_, this, other| {
            match (
                this.downcast_ref::<T>(),
                other.and_then(|other| other.upcast_ref::<T>()),
            ) {
                (Some(this), Some(other)) => this == other,
                _ => false,
            }
        }));
        self
    }

    /// Equality from `PartialEq`, only between identical dynamic types.
    pub fn equals_by_exact_type(&mut self) -> &mut Self
    where
        T: PartialEq,
    {
        self.equals = declared(equals_body(|receiver, this, other| {
            let Some(other) = other else {
                return false;
            };
            if other.class().type_id() != receiver.class().type_id() {
                return false;
            }
            match (this.downcast_ref::<T>(), other.upcast_ref::<T>()) {
                (Some(this), Some(other)) => this == other,
                _ => false,
            }
        }));
        self
    }

    /// Hand-written equality; `None` stands for a null argument.
    pub fn equals_with<F>(&mut self, body: F) -> &mut Self
    where
        F: Fn(&T, Option<&dyn Object>) -> bool + Send + Sync + 'static,
    {
        self.equals = declared(equals_body(move |_, this, other| {
            this.downcast_ref::<T>()
                .is_some_and(|this| body(this, other))
        }));
        self
    }

    pub fn abstract_equals(&mut self) -> &mut Self {
        self.equals = Method::Abstract;
        self
    }

    pub fn seal_equals(&mut self) -> &mut Self {
        self.seal_equals = true;
        self
    }

    /// Declare an extra, non-universal equality signature.
    pub fn overloaded_equals(&mut self, params: Vec<Param>) -> &mut Self {
        self.overloads.push(Signature { params });
        self
    }

    /// Hash from `Hash`, fed through `DefaultHasher`.
    pub fn hash_by_hash(&mut self) -> &mut Self
    where
        T: Hash,
    {
        self.hash = declared(hash_body(|this| {
            this.downcast_ref::<T>().map_or(0, |this| {
                let mut hasher = DefaultHasher::new();
                this.hash(&mut hasher);
                hasher.finish()
            })
        }));
        self
    }

    pub fn hash_with<F>(&mut self, body: F) -> &mut Self
    where
        F: Fn(&T) -> u64 + Send + Sync + 'static,
    {
        self.hash = declared(hash_body(move |this| {
            this.downcast_ref::<T>().map_or(0, |this| body(this))
        }));
        self
    }

    pub fn abstract_hash(&mut self) -> &mut Self {
        self.hash = Method::Abstract;
        self
    }

    pub fn seal_hash(&mut self) -> &mut Self {
        self.seal_hash = true;
        self
    }

    // ========================================================================
    // HIERARCHY
    // ========================================================================

    /// Allow subclasses without registering a stand-in.
    pub fn open(&mut self) -> &mut Self {
        self.open = true;
        self
    }

    /// Register `S` as the trivial subclass: it embeds `T` and adds nothing.
    pub fn trivial_subclass<S: Inspect>(&mut self) -> &mut Self {
        self.trivial_subclass = Some(Class::of::<S>);
        self
    }

    /// Mark the type as never changing after construction.
    pub fn immutable(&mut self) -> &mut Self {
        self.immutable = true;
        self
    }

    // ========================================================================
    // KINDS
    // ========================================================================

    /// Fieldless enum with its variants in declaration order.
    pub fn variants(&mut self, variants: fn() -> Vec<T>) -> &mut Self {
        self.kind = Kind::Enum {
            variants: Box::new(move || {
                variants()
                    .into_iter()
                    .map(|variant| Box::new(variant) as Box<dyn Object>)
                    .collect()
            }),
        };
        self
    }

    pub(crate) fn primitive(&mut self, zero: fn() -> T) -> &mut Self {
        self.kind = Kind::Primitive { zero: make(zero) };
        self
    }

    pub(crate) fn float(&mut self, zero: fn() -> T, nan: fn() -> T) -> &mut Self {
        self.kind = Kind::Float {
            zero: make(zero),
            nan: make(nan),
        };
        self
    }

    pub(crate) fn nullable<E: Inspect>(&mut self, wrap: fn(E) -> T, empty: fn() -> T) -> &mut Self {
        self.kind = Kind::Nullable(wrapper(wrap, Some(empty)));
        self
    }

    pub(crate) fn boxed<E: Inspect>(&mut self, wrap: fn(E) -> T) -> &mut Self {
        self.kind = Kind::Boxed(wrapper(wrap, None));
        self
    }

    pub(crate) fn array<E: Inspect>(&mut self, wrap: fn(E) -> T, empty: fn() -> T) -> &mut Self {
        self.kind = Kind::Array(wrapper(wrap, Some(empty)));
        self
    }

    pub(crate) fn finish(self) -> Class {
        let factory = match self.factory {
            PendingFactory::None => Factory::None,
            PendingFactory::Ready(factory) => factory,
            PendingFactory::FieldWise(build) => Factory::Constructor {
                params: self.params,
                build: Box::new(move |values: Vec<Box<dyn Object>>| {
                    let mut args = Args::new(values);
                    build(&mut args).map(|value| Box::new(value) as Box<dyn Object>)
                }),
            },
        };
        Class {
            name: short_type_name(std::any::type_name::<T>()),
            type_id: TypeId::of::<T>(),
            kind: self.kind,
            superclass: self.superclass,
            fields: self.fields,
            statics: self.statics,
            equals: seal(self.equals, self.seal_equals),
            hash: seal(self.hash, self.seal_hash),
            overloads: self.overloads,
            factory,
            is_abstract: self.is_abstract,
            open: self.open,
            immutable: self.immutable,
            trivial_subclass: self.trivial_subclass,
        }
    }
}

fn equals_body<F>(body: F) -> EqualsBody
where
    F: Fn(&dyn Object, &dyn Any, Option<&dyn Object>) -> bool + Send + Sync + 'static,
{
    Box::new(body)
}

fn hash_body<F>(body: F) -> HashBody
where
    F: Fn(&dyn Any) -> u64 + Send + Sync + 'static,
{
    Box::new(body)
}

fn declared<B>(body: B) -> Method<B> {
    Method::Declared {
        body,
        sealed: false,
    }
}

fn seal<B>(method: Method<B>, sealed: bool) -> Method<B> {
    match method {
        Method::Declared { body, sealed: was } => Method::Declared {
            body,
            sealed: was || sealed,
        },
        other => other,
    }
}

fn make<T: Inspect>(value: fn() -> T) -> Make {
    Box::new(move || Box::new(value()) as Box<dyn Object>)
}

fn wrapper<T: Inspect, E: Inspect>(wrap: fn(E) -> T, empty: Option<fn() -> T>) -> Wrapper {
    Wrapper {
        inner: Class::of::<E>,
        wrap: Box::new(move |value: Box<dyn Object>| {
            value
                .into_any()
                .downcast::<E>()
                .ok()
                .map(|value| Box::new(wrap(*value)) as Box<dyn Object>)
        }),
        empty: empty.map(make),
    }
}
