// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use tracing::trace;

use crate::access::ObjectAccessor;
use crate::error::Result;
use crate::model::{field, FieldRef};

use super::Context;

/// Runs a per-field check against fresh red instances.
///
/// Each field gets its own `reference` and `changed` objects, both red, so
/// one field's check never sees another's mutations.
pub(crate) struct FieldInspector<'c, 'a> {
    ctx: &'c Context<'a>,
}

impl<'c, 'a> FieldInspector<'c, 'a> {
    pub(crate) fn new(ctx: &'c Context<'a>) -> Self {
        FieldInspector { ctx }
    }

    /// Call `check` once per field. With `toggling`, fields whose type has a
    /// single value are skipped.
    pub(crate) fn check<F>(&self, toggling: bool, mut check: F) -> Result<()>
    where
        F: FnMut(FieldRef, &mut ObjectAccessor, &mut ObjectAccessor) -> Result<()>,
    {
        let accessor = self.ctx.accessor;
        for field in field::enumerate(accessor.class()) {
            if toggling && !self.ctx.prefabs().is_togglable(field.class())? {
                trace!(field = field.name(), "single-valued field skipped");
                continue;
            }
            let mut reference = accessor.red_accessor()?;
            let mut changed = accessor.red_accessor()?;
            check(field, &mut reference, &mut changed)?;
        }
        Ok(())
    }
}
