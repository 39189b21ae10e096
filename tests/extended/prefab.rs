//! Recursive types and caller-supplied prefab values.

use super::common::{Child, Handle, Node, Parent, Point};
use eqverify::testing::{assert_infrastructure_error, assert_verifies};
use eqverify::{Class, Error, Object, ObjectAccessor, PrefabValues, Verifier};

#[test]
fn test_recursive_type_needs_prefab_values() {
    let error = assert_infrastructure_error(
        Verifier::for_type::<Node>().verify(),
        &[
            "Recursive datastructure",
            "Add prefab values for one of the following types",
            "Node",
        ],
    );
    let Error::Recursion { chain } = error else {
        panic!("expected a recursion error");
    };
    assert!(chain.iter().any(|name| name == "Node"));
    assert_eq!(chain.first(), chain.last());
}

#[test]
fn test_recursive_type_with_prefab_values() {
    let red = Node {
        value: 1,
        next: None,
    };
    let black = Node {
        value: 2,
        next: Some(Box::new(Node {
            value: 3,
            next: None,
        })),
    };
    assert_verifies(
        Verifier::for_type::<Node>()
            .with_prefab_values(red, black)
            .verify(),
    );
}

#[test]
fn test_mutual_recursion_names_both_types() {
    let error = assert_infrastructure_error(
        Verifier::for_type::<Parent>().verify(),
        &["Recursive datastructure", "Parent", "Child"],
    );
    assert!(matches!(error, Error::Recursion { .. }));
}

#[test]
fn test_mutual_recursion_broken_by_prefab_values() {
    assert_verifies(
        Verifier::for_type::<Parent>()
            .with_prefab_values(
                Child { parent: None },
                Child {
                    parent: Some(Box::new(Parent { child: None })),
                },
            )
            .verify(),
    );
}

#[test]
fn test_equal_prefab_values_are_rejected() {
    let error = assert_infrastructure_error(
        Verifier::for_type::<Point>()
            .with_prefab_values(7i32, 7i32)
            .verify(),
        &["both prefab values of type i32 are equal"],
    );
    assert!(matches!(error, Error::Configuration(_)));
}

#[test]
fn test_prefab_values_are_used_for_fields() {
    assert_verifies(
        Verifier::for_type::<Point>()
            .with_prefab_values(-100i32, 100i32)
            .verify(),
    );
}

#[test]
fn test_derived_record_pair() {
    let prefabs = PrefabValues::new();
    let class = Class::of::<Point>();
    prefabs.put_for(class).unwrap();
    let red = prefabs.red(class).unwrap();
    let black = prefabs.black(class).unwrap();
    let (red, black) = (
        red.downcast_ref::<Point>().unwrap(),
        black.downcast_ref::<Point>().unwrap(),
    );
    assert_ne!(red.x, black.x);
    assert_ne!(red.y, black.y);
    assert!(prefabs.is_togglable(class).unwrap());
}

#[test]
fn test_explicit_pair_round_trips_through_other() {
    let prefabs = PrefabValues::new();
    prefabs
        .put(String::from("left"), String::from("right"))
        .unwrap();
    let class = Class::of::<String>();
    let left = String::from("left");
    let other = prefabs.other(class, &left).unwrap().unwrap();
    assert_eq!(other.downcast_ref::<String>().map(String::as_str), Some("right"));
}

#[test]
fn test_identity_equality_still_toggles() {
    let prefabs = PrefabValues::new();
    let class = Class::of::<Handle>();
    prefabs.put_for(class).unwrap();
    let id = |value: &dyn Object| value.downcast_ref::<Handle>().map(|handle| handle.id);
    let red = prefabs.red(class).unwrap();
    let black = prefabs.black(class).unwrap();
    let back = prefabs.other(class, &*black).unwrap().unwrap();
    assert_eq!(id(&*back), id(&*red));
    let forth = prefabs.other(class, &*red).unwrap().unwrap();
    assert_eq!(id(&*forth), id(&*black));

    // Two scrambles of a red object land back on its field values.
    let mut accessor = ObjectAccessor::new(red.clone());
    accessor.scramble(&prefabs).unwrap();
    assert_eq!(id(accessor.get()), id(&*black));
    accessor.scramble(&prefabs).unwrap();
    assert_eq!(id(accessor.get()), id(&*red));
}
