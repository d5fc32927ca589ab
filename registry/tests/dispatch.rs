//! Exercises the delivery channels through the public API.
use grpc_status_registry::{
    Code, ErrorKind, ErrorRegistry, ErrorResponse, ErrorSink, Metadata, Overrides, Status,
};
use test_log::test;
use tokio::sync::mpsc;

#[test]
fn callback_is_invoked_exactly_once_with_the_resolved_response() {
    let registry = ErrorRegistry::new();
    let mut delivered: Vec<ErrorResponse> = Vec::new();
    registry
        .invoke_callback(
            |response| delivered.push(response),
            &ErrorKind::PermissionDenied,
            Overrides::new().source("AccountService.Delete"),
        )
        .unwrap();

    assert_eq!(delivered.len(), 1);
    let response = &delivered[0];
    assert_eq!(response.code, Code::PermissionDenied);
    assert_eq!(response.message, "Permission denied for the operation.");
}

#[test]
fn callback_is_not_invoked_for_an_unknown_kind() {
    let registry = ErrorRegistry::new();
    let mut invoked = false;
    let result = registry.invoke_callback(
        |_| invoked = true,
        &ErrorKind::custom("NOT_REGISTERED"),
        Overrides::new(),
    );
    assert!(result.is_err());
    assert!(!invoked);
}

#[test]
fn stream_channel_receives_exactly_one_error() {
    let registry = ErrorRegistry::new();
    let (mut tx, mut rx) = mpsc::unbounded_channel::<Result<(), Status>>();
    registry
        .emit_to_stream(
            &mut tx,
            &ErrorKind::DeadlineExceeded,
            Overrides::new().details("round 118 timed out"),
        )
        .unwrap();
    drop(tx);

    let status = rx.try_recv().unwrap().unwrap_err();
    assert_eq!(status.code(), Code::DeadlineExceeded);
    assert_eq!(status.message(), "Deadline for the operation exceeded.");
    assert_eq!(status.details(), b"round 118 timed out");
    // Channel is exhausted after the single emission.
    assert!(rx.try_recv().is_err());
}

#[test]
fn buffered_sink_collects_statuses() {
    let registry = ErrorRegistry::new();
    let mut sink: Vec<Status> = Vec::new();
    registry
        .emit_to_stream(&mut sink, &ErrorKind::Unavailable, Overrides::new())
        .unwrap();
    assert_eq!(sink.len(), 1);
    assert_eq!(sink[0].code(), Code::Unavailable);
}

#[test]
fn resolved_response_round_trips_metadata_into_status() {
    let registry = ErrorRegistry::new();
    let mut metadata = Metadata::new();
    metadata.insert("error_0".to_owned(), "name is required".to_owned());
    let response = registry
        .resolve(
            &ErrorKind::Validation,
            Overrides::new().metadata(metadata).details("name is required"),
        )
        .unwrap();

    let status: Status = response.into();
    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(
        status.metadata().get("error_0").map(|v| v.as_bytes()),
        Some(b"name is required".as_slice())
    );
}

#[test]
fn custom_sink_observes_the_emission() {
    struct Counting {
        emitted: usize,
        last: Option<Status>,
    }
    impl ErrorSink for Counting {
        fn emit_error(&mut self, status: Status) {
            self.emitted += 1;
            self.last = Some(status);
        }
    }

    let registry = ErrorRegistry::new();
    let mut sink = Counting {
        emitted: 0,
        last: None,
    };
    registry
        .emit_to_stream(&mut sink, &ErrorKind::DataLoss, Overrides::new())
        .unwrap();
    assert_eq!(sink.emitted, 1);
    assert_eq!(sink.last.unwrap().code(), Code::DataLoss);
}
