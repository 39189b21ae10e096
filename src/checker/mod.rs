// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ordered battery of contract checks.
//!
//! Stages run in [`Stage::ORDER`]; the first violated invariant ends the run.
//! Stages before [`Stage::Preconditions`] need no examples. Between the two
//! halves the run makes sure there are unequal examples to work with: the
//! red and black instances, unless the caller supplied some.
//!
//! | Stage                | Looks at                                                |
//! |----------------------|---------------------------------------------------------|
//! | `Signature`          | declared equality signatures                            |
//! | `AbstractDelegation` | equality and hash reaching an abstract slot             |
//! | `NullFields`         | `None` fields panicking equality or hash                |
//! | `Preconditions`      | shape of caller-supplied examples                       |
//! | `Examples`           | reflexivity, non-nullity, symmetry, hash per example    |
//! | `Hierarchy`          | superclass, trivial and redefined subclasses, sealing   |
//! | `Fields`             | per-field checks, in [`FieldCheck::ORDER`]              |

mod abstract_delegation;
mod examples;
mod fields;
mod hierarchy;
mod inspector;
mod null_fields;
mod preconditions;
mod signature;

pub use fields::FieldCheck;

use std::fmt;

use tracing::debug;

use crate::access::ClassAccessor;
use crate::config::{VerifierConfig, Warning};
use crate::error::{Category, Result, Violation};
use crate::model::{Class, Object};
use crate::prefab::PrefabValues;

/// One step of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Signature,
    AbstractDelegation,
    NullFields,
    Preconditions,
    Examples,
    Hierarchy,
    Fields,
}

impl Stage {
    /// Execution order.
    pub const ORDER: [Stage; 7] = [
        Stage::Signature,
        Stage::AbstractDelegation,
        Stage::NullFields,
        Stage::Preconditions,
        Stage::Examples,
        Stage::Hierarchy,
        Stage::Fields,
    ];

    /// Stages that run before unequal examples are ensured.
    pub fn needs_examples(self) -> bool {
        !matches!(
            self,
            Stage::Signature | Stage::AbstractDelegation | Stage::NullFields
        )
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Everything a stage may consult.
pub(crate) struct Context<'a> {
    pub(crate) accessor: ClassAccessor<'a>,
    pub(crate) config: &'a VerifierConfig,
    pub(crate) equal_examples: Vec<Box<dyn Object>>,
    pub(crate) unequal_examples: Vec<Box<dyn Object>>,
    /// The caller supplied the examples.
    pub(crate) explicit_examples: bool,
    pub(crate) redefined_subclass: Option<&'static Class>,
}

impl<'a> Context<'a> {
    pub(crate) fn class(&self) -> &'static Class {
        self.accessor.class()
    }

    pub(crate) fn prefabs(&self) -> &'a PrefabValues<'a> {
        self.accessor.prefabs()
    }

    pub(crate) fn suppressed(&self, warning: Warning) -> bool {
        self.config.is_suppressed(warning)
    }

    /// `nonnull` and `immutable` markers count.
    pub(crate) fn honours_markers(&self) -> bool {
        !self.suppressed(Warning::Annotation)
    }

    /// Red and black become the unequal examples when none were supplied.
    fn ensure_unequal_examples(&mut self) -> Result<()> {
        if !self.unequal_examples.is_empty() {
            return Ok(());
        }
        self.unequal_examples.push(self.accessor.red_object()?);
        self.unequal_examples.push(self.accessor.black_object()?);
        Ok(())
    }

    /// Both example groups, equal examples first.
    pub(crate) fn all_examples(&self) -> impl Iterator<Item = &Box<dyn Object>> {
        self.equal_examples.iter().chain(&self.unequal_examples)
    }
}

/// Run every stage in order, stopping at the first failure.
pub(crate) fn run(ctx: &mut Context<'_>) -> Result<()> {
    for stage in Stage::ORDER {
        if stage == Stage::Preconditions {
            ctx.ensure_unequal_examples()?;
            if !ctx.explicit_examples {
                continue;
            }
        }
        debug!(stage = %stage, class = ctx.class().name(), "running stage");
        run_stage(stage, ctx)?;
    }
    Ok(())
}

fn run_stage(stage: Stage, ctx: &Context<'_>) -> Result<()> {
    match stage {
        Stage::Signature => signature::check(ctx),
        Stage::AbstractDelegation => abstract_delegation::check(ctx),
        Stage::NullFields => null_fields::check(ctx),
        Stage::Preconditions => preconditions::check(ctx),
        Stage::Examples => examples::check(ctx),
        Stage::Hierarchy => hierarchy::check(ctx),
        Stage::Fields => fields::check(ctx),
    }
}

/// `Ok` when `holds`, else a violation built from `detail`.
pub(crate) fn ensure(holds: bool, category: Category, detail: impl FnOnce() -> String) -> Result<()> {
    if holds {
        Ok(())
    } else {
        Err(Violation::new(category, detail()).into())
    }
}
