//! The object model as seen from outside the verifier.

use super::common::{
    init_tracing, Cached, ColorPoint, ConcreteVehicle, ExactPoint, Handle, OpenPoint, Pixel,
    Point, Shape, Vehicle,
};
use eqverify::model::field;
use eqverify::{
    catching, Class, ClassAccessor, Instantiator, MethodState, Object, PrefabValues, Stage,
    ThrownKind, Verifier,
};

fn field_names(class: &'static Class) -> Vec<&'static str> {
    field::enumerate(class).iter().map(|f| f.name()).collect()
}

#[test]
fn test_derived_field_tables() {
    assert_eq!(Class::of::<Point>().name(), "Point");
    assert_eq!(field_names(Class::of::<Point>()), ["x", "y"]);
    assert_eq!(field_names(Class::of::<Pixel>()), ["0", "1", "2"]);
    assert_eq!(field_names(Class::of::<Cached>()), ["key"]);
}

#[test]
fn test_embedded_superclass() {
    let class = Class::of::<ColorPoint>();
    assert_eq!(class.superclass(), Some(Class::of::<ExactPoint>()));
    assert!(class.extends(Class::of::<ExactPoint>()));
    assert!(!Class::of::<ExactPoint>().extends(class));
    assert_eq!(field_names(class), ["color", "x", "y"]);
    assert_eq!(field::enumerate_declared(class).len(), 1);
}

#[test]
fn test_method_slots() {
    assert_eq!(
        Class::of::<OpenPoint>().equals_state(),
        MethodState::Declared { sealed: true }
    );
    assert_eq!(Class::of::<Shape>().equals_state(), MethodState::Abstract);
    assert_eq!(Class::of::<Handle>().equals_state(), MethodState::Inherited);
    assert!(Class::of::<Handle>().is_equals_inherited_from_root());
    assert!(Class::of::<Point>().is_sealed());
    assert!(!Class::of::<OpenPoint>().is_sealed());
}

#[test]
fn test_abstract_class_instantiates_stand_in() {
    let vehicle = Instantiator::of(Class::of::<Vehicle>()).instantiate().unwrap();
    assert!(vehicle.downcast_ref::<ConcreteVehicle>().is_some());
    assert!(vehicle.is_instance_of(Class::of::<Vehicle>()));
    assert_eq!(vehicle.upcast_ref::<Vehicle>(), Some(&Vehicle { wheels: 0 }));
}

#[test]
fn test_upcast_equality() {
    let sub: Box<dyn Object> = Box::new(ConcreteVehicle {
        base: Vehicle { wheels: 4 },
    });
    let base = Vehicle { wheels: 4 };
    assert!(eqverify::model::equals(&base, Some(&*sub)));
    assert!(eqverify::model::equals(&*sub, Some(&base as &dyn Object)));
}

#[test]
fn test_accessors_toggle_fields() {
    let prefabs = PrefabValues::new();
    let accessor = ClassAccessor::new(Class::of::<Point>(), &prefabs);
    let red = accessor.red_object().unwrap();
    let black = accessor.black_object().unwrap();
    assert!(!eqverify::model::equals(&*red, Some(&*black)));

    let mut copy = accessor.red_accessor().unwrap();
    let y = field::find(Class::of::<Point>(), "y").unwrap();
    copy.field(y).default_field().unwrap();
    assert_eq!(copy.get().downcast_ref::<Point>().map(|p| p.y), Some(0));
}

#[test]
fn test_abstract_slot_panics_are_classified() {
    let shape = Shape { sides: 3 };
    let thrown = catching(|| eqverify::model::equals(&shape, Some(&shape as &dyn Object)))
        .unwrap_err();
    assert_eq!(thrown.kind(), ThrownKind::AbstractMethod);
    assert!(thrown.message().contains("Shape::equals"));
}

#[test]
fn test_stage_order_is_fixed() {
    assert_eq!(Stage::ORDER.first(), Some(&Stage::Signature));
    assert_eq!(Stage::ORDER.last(), Some(&Stage::Fields));
}

#[test]
fn test_verification_logs() {
    init_tracing();
    assert!(Verifier::for_type::<Point>().verify().is_ok());
}
