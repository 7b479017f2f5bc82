use std::error::Error;
use std::io;

use status_rail::chain::AsDynError;
use status_rail::traits::{StatusCarrier, StatusExt};
use status_rail::{Code, SharedError, Status, StatusError, WithStatus, CANCELED};

use crate::common::{base, Caused};

#[test]
fn status_ext_on_concrete_error() {
    let err = WithStatus::new(io::Error::other("eof"), Code::DATA_LOSS, "truncated");

    assert_eq!(err.status_code(), Code::DATA_LOSS);
    assert_eq!(err.to_status().message(), "truncated");
    assert_eq!(err.root_cause().to_string(), "eof");
    assert_eq!(err.causes().count(), 2);
}

#[test]
fn status_ext_on_boxed_error() {
    let boxed: Box<dyn Error + Send + Sync> = Box::new(Caused::new(SharedError::new(CANCELED)));

    assert_eq!(boxed.status_code(), Code::CANCELED);
    assert!(boxed.root_cause().is::<status_rail::ContextError>());
}

#[test]
fn status_ext_on_shared_error_sees_held_node() {
    let shared = SharedError::new(WithStatus::new(io::Error::other("x"), Code::ABORTED, "y"));

    assert_eq!(shared.status_code(), Code::ABORTED);
    assert_eq!(shared.to_status().message(), "y");
    assert_eq!(shared.causes().count(), 2);
    assert_eq!(shared.root_cause().to_string(), "x");
    assert_eq!(status_rail::code(Some(shared.as_dyn_error())), Code::ABORTED);
}

#[test]
fn status_ext_on_plain_error_is_unknown() {
    let err = base("plain");
    let status = (*err).to_status();
    assert_eq!(status.code(), Code::UNKNOWN);
    assert_eq!(status.message(), "plain");
    assert_eq!((*err).causes().count(), 1);
}

#[test]
fn carriers_report_their_codes() {
    let with_status = WithStatus::new(io::Error::other("x"), Code::NOT_FOUND, "y");
    assert_eq!(with_status.carried_code(), Code::NOT_FOUND);
    assert_eq!(with_status.carried_status(), Status::new(Code::NOT_FOUND, "y"));

    let status_error: StatusError = Status::new(Code::INTERNAL, "z").err().unwrap();
    assert_eq!(status_error.carried_code(), Code::INTERNAL);
}
