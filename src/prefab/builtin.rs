// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Seeded pairs for primitives and std value types.

use std::path::PathBuf;
use std::time::Duration;

use super::PrefabValues;

macro_rules! seed_integers {
    ($prefabs:expr; $($ty:ty),*) => {
        $($prefabs.insert_pair::<$ty>(1, 2);)*
    };
}

pub(crate) fn seed(prefabs: &PrefabValues<'_>) {
    prefabs.insert_pair(true, false);
    seed_integers!(prefabs; i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
    prefabs.insert_pair(0.5f32, 1.0f32);
    prefabs.insert_pair(0.5f64, 1.0f64);
    prefabs.insert_pair('a', 'b');
    prefabs.insert_pair(String::from("one"), String::from("two"));
    prefabs.insert_pair::<&'static str>("one", "two");
    prefabs.insert_pair(Duration::from_secs(1), Duration::from_secs(2));
    prefabs.insert_pair(PathBuf::from("/red"), PathBuf::from("/black"));
    prefabs.insert_single(());
}
