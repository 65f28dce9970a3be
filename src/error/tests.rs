//! Test suite for the error type.

use super::*;
use crate::native::NativeErrorCode;
use quickcheck_macros::quickcheck;

/// Stand-in for an error raised by a set-expression parser.
#[derive(Debug, PartialEq, thiserror::Error)]
#[error("unexpected token `{token}` at column {column}")]
struct ParseError {
    token: String,
    column: usize,
}

fn parse_error() -> ParseError {
    ParseError {
        token: "]".to_string(),
        column: 4,
    }
}

mod construction {
    use super::*;

    #[test]
    fn message_only() {
        let err = IslError::invalid_argument("dimension must be non-negative");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.message(), "dimension must be non-negative");
        assert!(err.cause().is_none());
        assert!(err.source().is_none());
    }

    #[test]
    fn message_and_cause() {
        let err = IslError::invalid_argument_with_cause("failed to parse set expression", parse_error());
        assert_eq!(err.message(), "failed to parse set expression");

        let cause = err.cause().expect("cause recorded");
        assert_eq!(cause.downcast_ref::<ParseError>(), Some(&parse_error()));
        let source = err.source().expect("source exposed");
        assert_eq!(source.downcast_ref::<ParseError>(), Some(&parse_error()));
    }

    #[test]
    fn shared_cause_keeps_identity() {
        let cause: Cause = Arc::new(parse_error());
        let err = IslError::with_shared_cause(
            ErrorKind::InvalidArgument,
            "failed to parse set expression",
            Arc::clone(&cause),
        );
        assert!(Arc::ptr_eq(err.cause().unwrap(), &cause));

        let copy = err.clone();
        assert!(Arc::ptr_eq(copy.cause().unwrap(), &cause));
    }

    #[test]
    fn empty_message_is_accepted() {
        let err = IslError::invalid_argument("");
        assert_eq!(err.message(), "");
        assert_eq!(err.to_string(), "");
    }

    #[test]
    fn message_accepts_owned_strings() {
        let dim = 3;
        let err = IslError::invalid_argument(format!("dimension {dim} out of range"));
        assert_eq!(err.message(), "dimension 3 out of range");
    }
}

mod kinds {
    use super::*;

    #[test]
    fn invalid_argument_is_not_native() {
        let err = IslError::invalid_argument("bad");
        assert!(err.is_invalid_argument());
        assert!(!err.is_native());
    }

    #[test]
    fn native_is_not_invalid_argument() {
        let err = IslError::native("Failed to allocate ISL context");
        assert_eq!(err.kind(), ErrorKind::Native);
        assert!(err.is_native());
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn kind_drives_recovery() {
        fn recoverable(result: Result<()>) -> bool {
            match result {
                Ok(()) => true,
                Err(e) => match e.kind() {
                    ErrorKind::InvalidArgument => true,
                    ErrorKind::Native => false,
                },
            }
        }
        assert!(recoverable(Err(IslError::invalid_argument("bad input"))));
        assert!(!recoverable(Err(IslError::native("ISL aborted"))));
    }
}

mod chain {
    use super::*;

    #[test]
    fn walks_every_link() {
        let inner = IslError::native_with_cause("native call failed", NativeErrorCode::Quota);
        let outer = IslError::invalid_argument_with_cause("could not build set", inner);

        let messages: Vec<String> = outer.chain().map(|e| e.to_string()).collect();
        assert_eq!(
            messages,
            vec![
                "could not build set",
                "native call failed",
                "ISL exceeded a resource quota",
            ]
        );
    }

    #[test]
    fn nested_islerror_can_be_downcast() {
        let inner = IslError::native("inner");
        let outer = IslError::invalid_argument_with_cause("outer", inner);
        let source = outer.source().unwrap();
        let inner = source.downcast_ref::<IslError>().unwrap();
        assert!(inner.is_native());
        assert_eq!(inner.message(), "inner");
    }

    #[test]
    fn report_without_cause_is_the_message() {
        let err = IslError::invalid_argument("dimension must be non-negative");
        assert_eq!(err.report().to_string(), "dimension must be non-negative");
    }

    #[test]
    fn report_renders_caused_by_lines() {
        let err = IslError::invalid_argument_with_cause("failed to parse set expression", parse_error());
        assert_eq!(
            err.report().to_string(),
            "failed to parse set expression\ncaused by: unexpected token `]` at column 4"
        );
    }

    #[test]
    fn display_is_message_only() {
        let err = IslError::invalid_argument_with_cause("outer", parse_error());
        assert_eq!(err.to_string(), "outer");
    }
}

#[test]
fn errors_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<IslError>();

    let err = IslError::invalid_argument_with_cause("shared", parse_error());
    let handle = std::thread::spawn(move || err.report().to_string());
    assert_eq!(
        handle.join().unwrap(),
        "shared\ncaused by: unexpected token `]` at column 4"
    );
}

// =============================================================================
// Properties
// =============================================================================

#[quickcheck]
fn message_is_recorded_verbatim(message: String) -> bool {
    let err = IslError::invalid_argument(message.clone());
    err.message() == message && err.to_string() == message && err.cause().is_none()
}

#[quickcheck]
fn cause_is_recorded_verbatim(message: String, token: String, column: usize) -> bool {
    let cause = ParseError { token, column };
    let expected = cause.to_string();
    let err = IslError::invalid_argument_with_cause(message.clone(), cause);
    err.message() == message
        && err
            .cause()
            .and_then(|c| c.downcast_ref::<ParseError>())
            .map(|c| c.to_string() == expected)
            .unwrap_or(false)
}

#[quickcheck]
fn kinds_never_collide(message: String) -> bool {
    IslError::invalid_argument(message.clone()).kind() != IslError::native(message).kind()
}
