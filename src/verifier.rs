// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The fluent entry point.
//!
//! ```ignore
//! Verifier::for_type::<Point>()
//!     .suppress(&[Warning::NullFields])
//!     .all_fields_should_be_used()
//!     .verify()?;
//! ```
//!
//! Builder mistakes (equal prefab values, unknown excepted fields, a
//! redefined subclass that does not extend the target) are reported by
//! [`Verifier::verify`], not by the builder methods, so calls chain freely.

use std::marker::PhantomData;

use tracing::debug;

use crate::access::ClassAccessor;
use crate::checker::{self, Context};
use crate::config::{VerifierConfig, Warning};
use crate::error::{Error, Result};
use crate::model::{field, Class, ClassFn, Inspect, Object};
use crate::prefab::PrefabValues;
use crate::stash::StaticStash;

struct PrefabOverride {
    class: ClassFn,
    red: Box<dyn Object>,
    black: Box<dyn Object>,
}

/// Checks the equality and hash contract of `T`.
pub struct Verifier<T: Inspect> {
    equal_examples: Vec<T>,
    unequal_examples: Vec<T>,
    config: VerifierConfig,
    prefab_overrides: Vec<PrefabOverride>,
    redefined_subclass: Option<ClassFn>,
    _marker: PhantomData<fn() -> T>,
}

/// Half-built verifier holding equal examples; add unequal ones to finish.
pub struct RelaxedVerifier<T: Inspect> {
    equal_examples: Vec<T>,
}

/// Entry points. They live on `Verifier<()>` so the target type is named on
/// the function: `Verifier::for_type::<Point>()`.
impl Verifier<()> {
    /// Verify `T` with synthesized red and black instances.
    pub fn for_type<T: Inspect>() -> Verifier<T> {
        Verifier::<T>::with_examples(Vec::new(), Vec::new())
    }

    /// Verify `T` with at least two caller-supplied, mutually unequal examples.
    pub fn for_examples<T: Inspect>(
        first: T,
        second: T,
        rest: impl IntoIterator<Item = T>,
    ) -> Verifier<T> {
        let mut unequal = vec![first, second];
        unequal.extend(rest);
        Verifier::<T>::with_examples(Vec::new(), unequal)
    }

    /// Start from examples that are equal to each other without being
    /// identical, for types whose equality abstracts over representation.
    pub fn for_relaxed_equal_examples<T: Inspect>(
        first: T,
        second: T,
        rest: impl IntoIterator<Item = T>,
    ) -> RelaxedVerifier<T> {
        let mut equal_examples = vec![first, second];
        equal_examples.extend(rest);
        RelaxedVerifier { equal_examples }
    }
}

impl<T: Inspect> Verifier<T> {
    fn with_examples(equal_examples: Vec<T>, unequal_examples: Vec<T>) -> Self {
        Verifier {
            equal_examples,
            unequal_examples,
            config: VerifierConfig::default(),
            prefab_overrides: Vec::new(),
            redefined_subclass: None,
            _marker: PhantomData,
        }
    }

    pub fn suppress(mut self, warnings: &[Warning]) -> Self {
        self.config.suppress.extend(warnings.iter().copied());
        self
    }

    /// Use `red` and `black` whenever a `V` is needed. They must be unequal.
    pub fn with_prefab_values<V: Inspect>(mut self, red: V, black: V) -> Self {
        self.prefab_overrides.push(PrefabOverride {
            class: Class::of::<V>,
            red: Box::new(red),
            black: Box::new(black),
        });
        self
    }

    /// Equality only holds between values of the same dynamic type.
    pub fn using_exact_type(mut self) -> Self {
        self.config.using_exact_type = true;
        self
    }

    pub fn all_fields_should_be_used(mut self) -> Self {
        self.config.all_fields_should_be_used = true;
        self
    }

    pub fn all_fields_should_be_used_except(mut self, fields: &[&str]) -> Self {
        self.config.all_fields_should_be_used = true;
        self.config
            .all_fields_should_be_used_except
            .extend(fields.iter().map(|name| name.to_string()));
        self
    }

    /// The superclass's equality is deliberately different from `T`'s.
    pub fn with_redefined_superclass(mut self) -> Self {
        self.config.redefined_superclass = true;
        self
    }

    /// `S` extends `T` with state that makes it unequal to any `T`.
    pub fn with_redefined_subclass<S: Inspect>(mut self) -> Self {
        self.redefined_subclass = Some(Class::of::<S>);
        self
    }

    /// Merge a loaded configuration into the current options.
    pub fn with_config(mut self, config: VerifierConfig) -> Self {
        self.config.merge(config);
        self
    }

    /// Run every check; the first violation ends the run.
    pub fn verify(self) -> Result<()> {
        let class = Class::of::<T>();
        debug!(class = class.name(), explicit = !self.unequal_examples.is_empty(), "verification started");
        if class.is_enum() {
            debug!(class = class.name(), "enums need no verification");
            return Ok(());
        }
        self.validate(class)?;

        let stash = StaticStash::new();
        stash.backup(class);
        let result = self.run(class, &stash);
        stash.restore_all();

        match &result {
            Ok(()) => debug!(class = class.name(), "verification passed"),
            Err(error) => debug!(class = class.name(), %error, "verification failed"),
        }
        result
    }

    fn validate(&self, class: &'static Class) -> Result<()> {
        let fields = field::enumerate(class);
        for name in &self.config.all_fields_should_be_used_except {
            if !fields.iter().any(|field| field.name() == name) {
                return Err(Error::Configuration(format!(
                    "Class {} does not contain field {}.",
                    class.name(),
                    name
                )));
            }
        }
        if let Some(subclass) = self.redefined_subclass.map(|subclass| subclass()) {
            if !subclass.extends(class) || subclass == class {
                return Err(Error::Configuration(format!(
                    "Redefined subclass {} does not extend {}.",
                    subclass.name(),
                    class.name()
                )));
            }
        }
        Ok(())
    }

    fn run(self, class: &'static Class, stash: &StaticStash) -> Result<()> {
        let prefabs = PrefabValues::with_stash(stash);
        for prefab in self.prefab_overrides {
            prefabs.put_erased((prefab.class)(), prefab.red, prefab.black)?;
        }
        let explicit_examples = !self.unequal_examples.is_empty();
        let mut ctx = Context {
            accessor: ClassAccessor::new(class, &prefabs),
            config: &self.config,
            equal_examples: boxed(self.equal_examples),
            unequal_examples: boxed(self.unequal_examples),
            explicit_examples,
            redefined_subclass: self.redefined_subclass.map(|subclass| subclass()),
        };
        checker::run(&mut ctx)
    }
}

impl<T: Inspect> RelaxedVerifier<T> {
    pub fn and_unequal_example(self, example: T) -> Verifier<T> {
        Verifier::with_examples(self.equal_examples, vec![example])
    }

    pub fn and_unequal_examples(self, first: T, rest: impl IntoIterator<Item = T>) -> Verifier<T> {
        let mut unequal = vec![first];
        unequal.extend(rest);
        Verifier::with_examples(self.equal_examples, unequal)
    }
}

fn boxed<T: Inspect>(values: Vec<T>) -> Vec<Box<dyn Object>> {
    values
        .into_iter()
        .map(|value| Box::new(value) as Box<dyn Object>)
        .collect()
}
