use std::future::ready;
use std::io;

use status_rail::async_ext::FutureStatusExt;
use status_rail::traits::StatusExt;
use status_rail::Code;

#[tokio::test]
async fn future_error_gets_status() {
    let err = ready(Err::<(), _>(io::Error::other("connection reset")))
        .with_status(Code::UNAVAILABLE, "upstream unavailable")
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Code::UNAVAILABLE);
    assert_eq!(err.status().message(), "upstream unavailable");
    assert_eq!(err.to_string(), "connection reset");
}

#[tokio::test]
async fn future_success_passes_through() {
    let value = ready(Ok::<_, io::Error>(5))
        .with_status(Code::INTERNAL, "never used")
        .await
        .unwrap();
    assert_eq!(value, 5);
}

#[tokio::test]
async fn lazy_message_only_built_on_error() {
    let mut built = false;
    let result = ready(Ok::<_, io::Error>(()))
        .with_status_with(Code::INTERNAL, || {
            built = true;
            String::from("unused")
        })
        .await;

    assert!(result.is_ok());
    assert!(!built);
}
