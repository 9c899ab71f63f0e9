//! Serde support for check failures (feature-gated)
//!
//! [`CheckError`] serializes as an externally tagged enum so a failure can be
//! reported across a process boundary. Only `CheckError<E>` with a
//! serializable `E` implements `Serialize`; a message-form failure is
//! `CheckError<Infallible>`, so widen it to the caller error type (or any
//! serializable placeholder such as `String`) first:
//!
//! ```rust
//! use precondition::check;
//!
//! let err = check::not_null(&None::<u8>, "x cannot be null").unwrap_err();
//! let json = serde_json::to_string(&err.widen::<String>()).unwrap();
//! assert_eq!(json, r#"{"IllegalArgument":"x cannot be null"}"#);
//! ```

use serde::{Serialize, Serializer};

use crate::CheckError;

impl<E: Serialize> Serialize for CheckError<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CheckError::IllegalArgument(message) => {
                serializer.serialize_newtype_variant("CheckError", 0, "IllegalArgument", message)
            }
            CheckError::Caller(error) => {
                serializer.serialize_newtype_variant("CheckError", 1, "Caller", error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{check, raise};

    #[derive(Serialize, Debug)]
    struct Rejected {
        field: &'static str,
        code: u16,
    }

    #[test]
    fn test_serialize_message() {
        let err = check::not_null(&None::<u8>, "x cannot be null")
            .unwrap_err()
            .widen::<String>();
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"IllegalArgument":"x cannot be null"}"#);
    }

    #[test]
    fn test_serialize_message_widened_to_caller_type() {
        let err = check::is_ascii("tab\there", "memo must be printable ASCII")
            .unwrap_err()
            .widen::<u16>();
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "IllegalArgument": "memo must be printable ASCII" })
        );
    }

    #[test]
    fn test_serialize_caller() {
        let err = check::not_empty(
            "",
            raise(Rejected {
                field: "name",
                code: 422,
            }),
        )
        .unwrap_err();
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "Caller": { "field": "name", "code": 422 } })
        );
    }
}
