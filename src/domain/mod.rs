//! Domain models for the contact book
//!
//! Contains the record type and field rules without any I/O concerns.

mod contact;
mod validate;

pub use contact::{Contact, FIELD_SEPARATOR};
pub use validate::{check_email, check_name, check_phone, FieldError};
