//! User Registration Example
//!
//! This example guards a registration handler with precondition checks,
//! mixing plain-message failures with a domain error type.
//!
//! Run with: cargo run --example registration

use std::fmt;

use precondition::prelude::*;

#[derive(Debug, PartialEq)]
enum RegistrationError {
    MissingEmail,
    NoConsent,
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationError::MissingEmail => write!(f, "an email address is required"),
            RegistrationError::NoConsent => write!(f, "terms must be accepted"),
        }
    }
}

impl std::error::Error for RegistrationError {}

struct Registration<'a> {
    username: &'a str,
    email: Option<&'a str>,
    display_name: &'a str,
    interests: Vec<&'a str>,
    accepted_terms: bool,
}

fn register(form: &Registration<'_>) -> Result<String, CheckError<RegistrationError>> {
    check::not_empty(form.username, "username cannot be empty").map_err(CheckError::widen)?;
    check::is_alphanumeric(form.username, "username must be letters and digits")
        .map_err(CheckError::widen)?;
    check::not_null(&form.email, raise(RegistrationError::MissingEmail))?;
    check::is_ascii(form.display_name, "display name must be printable ASCII")
        .map_err(CheckError::widen)?;
    check::not_empty_or_null(&form.interests, "pick at least one interest")
        .map_err(CheckError::widen)?;
    check::is_true(form.accepted_terms, raise(RegistrationError::NoConsent))?;

    Ok(format!("welcome, {}", form.username))
}

fn main() {
    println!("=== Registration Example ===\n");

    let forms = [
        Registration {
            username: "J0hnD03",
            email: Some("john@example.com"),
            display_name: "John Doe",
            interests: vec!["rust"],
            accepted_terms: true,
        },
        Registration {
            username: "John Doe",
            email: Some("john@example.com"),
            display_name: "John Doe",
            interests: vec!["rust"],
            accepted_terms: true,
        },
        Registration {
            username: "jane",
            email: None,
            display_name: "Jane",
            interests: vec!["go"],
            accepted_terms: true,
        },
        Registration {
            username: "jane",
            email: Some("jane@example.com"),
            display_name: "Well,\n this is cool",
            interests: vec!["go"],
            accepted_terms: true,
        },
        Registration {
            username: "jane",
            email: Some("jane@example.com"),
            display_name: "Jane",
            interests: vec![],
            accepted_terms: false,
        },
    ];

    for form in &forms {
        match register(form) {
            Ok(greeting) => println!("{:>10}: {}", form.username, greeting),
            Err(CheckError::IllegalArgument(message)) => {
                println!("{:>10}: rejected ({})", form.username, message)
            }
            Err(CheckError::Caller(error)) => {
                println!("{:>10}: rejected by policy ({})", form.username, error)
            }
        }
    }
}
