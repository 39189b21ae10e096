// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Descriptions of std types: primitives, strings and the containers that
//! stand in for nullable references, indirection and arrays.

use std::path::PathBuf;
use std::time::Duration;

use super::{equals, hash_code, ClassBuilder, Inspect, Object};

macro_rules! primitive {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn describe(class: &mut ClassBuilder<Self>) {
                    class
                        .primitive(|| $zero)
                        .default_constructor()
                        .equals_by_partial_eq()
                        .hash_by_hash()
                        .seal_equals()
                        .seal_hash();
                }
            }
        )*
    };
}

primitive! {
    bool => false,
    char => '\0',
    i8 => 0, i16 => 0, i32 => 0, i64 => 0, i128 => 0, isize => 0,
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, u128 => 0, usize => 0,
    String => String::new(),
    &'static str => "",
    Duration => Duration::ZERO,
    PathBuf => PathBuf::new(),
    () => (),
}

macro_rules! float {
    ($($ty:ident),*) => {
        $(
            impl Inspect for $ty {
                fn describe(class: &mut ClassBuilder<Self>) {
                    class
                        .float(|| 0.0, || $ty::NAN)
                        .default_constructor()
                        .equals_by_partial_eq()
                        .hash_with(|value| u64::from(value.to_bits()))
                        .seal_equals()
                        .seal_hash();
                }
            }
        )*
    };
}

float!(f32, f64);

impl<T: Inspect> Inspect for Option<T> {
    fn describe(class: &mut ClassBuilder<Self>) {
        class
            .nullable::<T>(Some, || None)
            .default_constructor()
            .equals_with(|this, other| {
                match (this, other.and_then(|other| other.downcast_ref::<Option<T>>())) {
                    (None, Some(None)) => true,
                    (Some(a), Some(Some(b))) => equals(a, Some(b as &dyn Object)),
                    _ => false,
                }
            })
            .hash_with(|this| this.as_ref().map_or(0, |value| hash_code(value)))
            .seal_equals()
            .seal_hash();
    }
}

impl<T: Inspect> Inspect for Box<T> {
    fn describe(class: &mut ClassBuilder<Self>) {
        class
            .boxed::<T>(Box::new)
            .constructor(|inner: T| Box::new(inner))
            .equals_with(|this, other| {
                other
                    .and_then(|other| other.downcast_ref::<Box<T>>())
                    .is_some_and(|that| equals(&**this, Some(&**that as &dyn Object)))
            })
            .hash_with(|this| hash_code(&**this))
            .seal_equals()
            .seal_hash();
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn describe(class: &mut ClassBuilder<Self>) {
        class
            .array::<T>(|element| vec![element], Vec::new)
            .default_constructor()
            .equals_with(|this, other| {
                other
                    .and_then(|other| other.downcast_ref::<Vec<T>>())
                    .is_some_and(|that| {
                        this.len() == that.len()
                            && this
                                .iter()
                                .zip(that)
                                .all(|(a, b)| equals(a, Some(b as &dyn Object)))
                    })
            })
            .hash_with(|this| {
                this.iter().fold(1u64, |acc, element| {
                    acc.wrapping_mul(31).wrapping_add(hash_code(element))
                })
            })
            .seal_equals()
            .seal_hash();
    }
}
