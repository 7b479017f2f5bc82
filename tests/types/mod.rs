use status_rail::{
    Code, ContextError, Detail, DetailsError, Status, StatusError, WithStatus, CANCELED,
    DEADLINE_EXCEEDED,
};

#[test]
fn code_display_uses_canonical_names() {
    assert_eq!(Code::OK.to_string(), "OK");
    assert_eq!(Code::CANCELED.to_string(), "Canceled");
    assert_eq!(Code::DEADLINE_EXCEEDED.to_string(), "DeadlineExceeded");
    assert_eq!(Code::UNAUTHENTICATED.to_string(), "Unauthenticated");
    assert_eq!(Code::from(1000).to_string(), "Code(1000)");
}

#[test]
fn code_accepts_any_value() {
    let code = Code::new(77);
    assert_eq!(code.value(), 77);
    assert_eq!(code.name(), None);
    assert!(!code.is_ok());
    assert_eq!(u32::from(Code::INTERNAL), 13);
    assert_eq!(Code::default(), Code::OK);
}

#[test]
fn status_display_and_accessors() {
    let status = Status::new(Code::UNAVAILABLE, "backend down");
    assert_eq!(status.to_string(), "code = Unavailable desc = backend down");
    assert!(!status.is_ok());
    assert!(Status::ok().is_ok());
    assert_eq!(Status::default(), Status::ok());
}

#[test]
fn details_are_rejected_on_ok_status() {
    let detail = Detail::new("type.example/Retry", vec![1, 2, 3]);
    assert_eq!(Status::ok().with_details([detail.clone()]), Err(DetailsError));
    assert_eq!(DetailsError.to_string(), "no error details for status with code OK");

    let status = Status::new(Code::RESOURCE_EXHAUSTED, "slow down");
    let detailed = status.with_details([detail.clone()]).unwrap();
    assert_eq!(detailed.details(), &[detail]);
    assert!(status.details().is_empty());
    assert_eq!(detailed.details()[0].type_url(), "type.example/Retry");
    assert_eq!(detailed.details()[0].value(), &[1, 2, 3]);
}

#[test]
fn status_error_round_trips_to_status() {
    let status = Status::new(Code::ABORTED, "conflict");
    let err: StatusError = status.err().unwrap();
    assert_eq!(err.status(), &status);
    assert_eq!(Status::from(err.clone()), status);
    assert_eq!(err.into_status(), status);
    assert!(Status::ok().into_err().is_none());
}

#[test]
fn context_signals() {
    assert_eq!(CANCELED, ContextError::Canceled);
    assert_eq!(DEADLINE_EXCEEDED.code(), Code::DEADLINE_EXCEEDED);
    assert_eq!(CANCELED.code(), Code::CANCELED);
    assert_eq!(CANCELED.to_string(), "context canceled");
    assert_eq!(DEADLINE_EXCEEDED.to_string(), "context deadline exceeded");
    assert_eq!(ContextError::recognize(&CANCELED), Some(ContextError::Canceled));
    assert_eq!(ContextError::recognize(&Status::new(Code::CANCELED, "x").err().unwrap()), None);
}

#[test]
fn with_status_node_exposes_status() {
    let err = WithStatus::new(std::io::Error::other("refused"), Code::UNAVAILABLE, "retry later");
    assert_eq!(err.status(), &Status::new(Code::UNAVAILABLE, "retry later"));
    assert_eq!(err.cause().map(|c| c.to_string()), Some("refused".to_string()));
    assert_eq!(format!("{err}"), "refused");
}

#[test]
fn with_status_from_boxed_cause() {
    let boxed: Box<dyn std::error::Error + Send + Sync> = "plain message".into();
    let err = WithStatus::from_boxed(boxed, Code::INTERNAL, "internal");
    assert_eq!(err.to_string(), "plain message");
    assert_eq!(err.status().code(), Code::INTERNAL);
}

#[cfg(feature = "serde")]
#[test]
fn status_serializes_with_transparent_code() {
    let status = Status::new(Code::NOT_FOUND, "missing")
        .with_details([Detail::new("type.example/Key", b"k".to_vec())])
        .unwrap();

    let json = serde_json::to_value(&status).unwrap();
    assert_eq!(json["code"], 5);
    assert_eq!(json["message"], "missing");

    let back: Status = serde_json::from_value(json).unwrap();
    assert_eq!(back, status);
}
