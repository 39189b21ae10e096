//! Static state touched during a run is put back afterwards.

use std::sync::atomic::Ordering;

use super::common::{Tally, Ticket, Voucher, TALLY_CREATED, TICKETS_ISSUED, VOUCHERS_ISSUED};
use eqverify::testing::{assert_infrastructure_error, assert_verifies, assert_violation};
use eqverify::{Category, Class, Error, StaticStash, Verifier};

#[test]
fn test_statics_restored_after_verification() {
    TALLY_CREATED.store(10, Ordering::SeqCst);
    assert_verifies(Verifier::for_type::<Tally>().verify());
    assert_eq!(TALLY_CREATED.load(Ordering::SeqCst), 10);

    let stash = StaticStash::new();
    stash.backup(Class::of::<Tally>());
    assert_eq!(stash.len(), 1);
    let _ = Tally::new(String::from("extra"));
    assert_eq!(TALLY_CREATED.load(Ordering::SeqCst), 11);
    stash.restore_all();
    assert_eq!(TALLY_CREATED.load(Ordering::SeqCst), 10);
    assert!(stash.is_empty());
}

#[test]
fn test_statics_restored_after_violation() {
    VOUCHERS_ISSUED.store(5, Ordering::SeqCst);
    assert_violation(
        Verifier::for_type::<Voucher>().verify(),
        Category::NonNullity,
        &["true returned for a `None` argument"],
    );
    assert_eq!(VOUCHERS_ISSUED.load(Ordering::SeqCst), 5);
}

#[test]
fn test_statics_restored_after_infrastructure_error() {
    TICKETS_ISSUED.store(2, Ordering::SeqCst);
    let error = assert_infrastructure_error(
        Verifier::for_type::<Ticket>().verify(),
        &["Cannot instantiate Ticket"],
    );
    assert!(matches!(error, Error::Instantiation { .. }));
    assert_eq!(TICKETS_ISSUED.load(Ordering::SeqCst), 2);
}
