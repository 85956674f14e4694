use stylr_execution::{LogFormat, init_tracing, init_tracing_with_events};

// One test per binary: the global subscriber can only be installed once.
#[test]
fn init_tracing_installs_the_global_subscriber_once() {
    init_tracing(Some("stylr=debug"), LogFormat::Json).unwrap();
    assert!(tracing::dispatcher::has_been_set());
    tracing::info!(target: "stylr_application", "subscriber installed");

    assert!(init_tracing(None, LogFormat::Pretty).is_err());
    assert!(init_tracing_with_events(None).is_err());
}
