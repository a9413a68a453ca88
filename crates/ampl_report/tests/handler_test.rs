use ampl_error::{AmplErrorKind, EngineError};
use ampl_report::{DefaultErrorHandler, ErrorHandler, RecordingErrorHandler};
use std::sync::Arc;

#[test]
fn default_handler_propagates_errors_unchanged() {
    let handler = DefaultErrorHandler::default();
    let reported = EngineError::located("model.mod", 12, 5, "syntax error near token");

    let err = handler.error(reported.clone()).unwrap_err();

    match err.kind() {
        AmplErrorKind::Engine(engine) => assert_eq!(engine, &reported),
        other => panic!("unexpected kind: {other}"),
    }
}

#[test]
fn default_handler_swallows_warnings() {
    let handler = DefaultErrorHandler::new(false);
    assert!(!handler.warnings_as_errors());
    assert!(handler.warning(EngineError::new("deprecated option")).is_ok());
}

#[test]
fn default_handler_can_treat_warnings_as_errors() {
    let handler = DefaultErrorHandler::new(true);
    let err = handler
        .warning(EngineError::located("", 7, 0, "unused variable x"))
        .unwrap_err();

    let engine = err.engine().unwrap();
    assert_eq!(engine.message(), "unused variable x");
    assert_eq!(engine.diagnostic_text(), "Row: 7 Offset: 0\nunused variable x\n");
}

#[test]
fn recording_handler_keeps_reports_in_order() {
    let handler = RecordingErrorHandler::default();

    handler.error(EngineError::new("first")).unwrap();
    handler.warning(EngineError::located("d.dat", 1, 1, "odd value")).unwrap();
    handler.error(EngineError::located("m.mod", 2, 3, "second")).unwrap();

    let errors = handler.errors();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].message(), "first");
    assert_eq!(errors[1].line_number(), 2);

    let warnings = handler.warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].source_name(), "d.dat");

    handler.clear();
    assert!(handler.errors().is_empty());
    assert!(handler.warnings().is_empty());
}

#[test]
fn recording_handler_accepts_reports_from_many_threads() {
    let handler = Arc::new(RecordingErrorHandler::default());

    let workers: Vec<_> = (0..4)
        .map(|i| {
            let handler = Arc::clone(&handler);
            std::thread::spawn(move || {
                handler
                    .error(EngineError::located("m.mod", i, 0, "failed"))
                    .unwrap();
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    let mut lines: Vec<i32> = handler.errors().iter().map(|e| e.line_number()).collect();
    lines.sort();
    assert_eq!(lines, vec![0, 1, 2, 3]);
}

#[test]
fn handlers_are_usable_as_trait_objects() {
    let handlers: Vec<Box<dyn ErrorHandler>> = vec![
        Box::new(DefaultErrorHandler::default()),
        Box::new(RecordingErrorHandler::default()),
    ];
    let outcomes: Vec<bool> = handlers
        .iter()
        .map(|h| h.error(EngineError::new("boom")).is_err())
        .collect();
    assert_eq!(outcomes, vec![true, false]);
}
