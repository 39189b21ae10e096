// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snapshot and restore of process-wide state registered by inspected types.
//!
//! Instantiating and toggling values can run constructors that bump
//! counters, fill caches, and so on. The stash snapshots every static a
//! class registered (see [`ClassBuilder::static_state`]) the first time the
//! class is touched, and puts the values back when the stash is restored or
//! dropped, whichever comes first.
//!
//! [`ClassBuilder::static_state`]: crate::ClassBuilder::static_state

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashSet;

use tracing::{trace, warn};

use crate::invoke::catching;
use crate::model::Class;

struct Snapshot {
    class: &'static Class,
    values: Vec<Box<dyn Any + Send>>,
}

/// Scoped handle over the static state of every class backed up so far.
#[derive(Default)]
pub struct StaticStash {
    snapshots: RefCell<Vec<Snapshot>>,
    seen: RefCell<HashSet<TypeId>>,
}

impl StaticStash {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot `class`'s statics unless already done since the last restore.
    pub fn backup(&self, class: &'static Class) {
        if class.statics.is_empty() || !self.seen.borrow_mut().insert(class.type_id()) {
            return;
        }
        let mut values = Vec::with_capacity(class.statics.len());
        for field in &class.statics {
            match catching(|| (field.snapshot)()) {
                Ok(value) => values.push(value),
                Err(thrown) => {
                    // Keep what was captured; later statics of the class stay as they are.
                    warn!(class = class.name(), field = field.name, %thrown, "static snapshot panicked");
                    break;
                }
            }
        }
        trace!(class = class.name(), count = values.len(), "statics stashed");
        self.snapshots.borrow_mut().push(Snapshot { class, values });
    }

    /// Number of classes currently stashed.
    pub fn len(&self) -> usize {
        self.snapshots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Put every snapshot back, newest first. Safe to call more than once.
    pub fn restore_all(&self) {
        let snapshots = std::mem::take(&mut *self.snapshots.borrow_mut());
        self.seen.borrow_mut().clear();
        for snapshot in snapshots.into_iter().rev() {
            for (field, value) in snapshot.class.statics.iter().zip(snapshot.values) {
                if let Err(thrown) = catching(|| (field.restore)(value)) {
                    warn!(
                        class = snapshot.class.name(),
                        field = field.name,
                        %thrown,
                        "static restore panicked"
                    );
                }
            }
            trace!(class = snapshot.class.name(), "statics restored");
        }
    }
}

impl Drop for StaticStash {
    fn drop(&mut self) {
        self.restore_all();
    }
}
