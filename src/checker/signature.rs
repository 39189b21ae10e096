// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exactly one equality, taking the universal argument.

use crate::error::{Category, Result, Violation};
use crate::model::{Param, Signature};

use super::Context;

const EXPECTED: &str = "fn equals(&self, other: Option<&dyn Object>) -> bool";

pub(crate) fn check(ctx: &Context<'_>) -> Result<()> {
    let signatures = ctx.class().equality_signatures();
    match signatures.as_slice() {
        [] => Ok(()),
        [signature] => check_single(signature),
        _ => fail("More than one equals method found"),
    }
}

fn check_single(signature: &Signature) -> Result<()> {
    match signature.params() {
        [] => fail("No parameter"),
        [Param::Universal] => Ok(()),
        [Param::Type { name, .. }] => fail(&format!(
            "Parameter should be Option<&dyn Object>, not {}",
            name
        )),
        _ => fail("Too many parameters"),
    }
}

fn fail(detail: &str) -> Result<()> {
    Err(Violation::new(
        Category::Signature,
        format!("{}.\nSignature should be: {}", detail, EXPECTED),
    )
    .into())
}
