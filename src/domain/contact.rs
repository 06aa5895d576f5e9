//! Contact record model
//!
//! A contact is identified by its phone number; there is no surrogate ID.
//! On disk each contact is one `name,phone,email` line with no header and
//! no escaping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Field separator used by the backing file
pub const FIELD_SEPARATOR: char = ',';

/// A single directory entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Free-form display name
    pub name: String,

    /// Decimal digits only; the natural key of the record
    pub phone: String,

    /// Optional address, empty when not given
    pub email: String,
}

impl Contact {
    /// Creates a new contact
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Returns true if this record is keyed by `phone`
    pub fn has_phone(&self, phone: &str) -> bool {
        self.phone == phone
    }

    /// Renders the record as a backing-file line (without the line break)
    pub fn to_line(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}",
            self.name,
            self.phone,
            self.email,
            sep = FIELD_SEPARATOR
        )
    }

    /// Parses one backing-file line
    ///
    /// Only the line terminator is stripped; fields are kept verbatim so a
    /// saved record reads back unchanged. Returns `None` unless the line
    /// splits into exactly three fields. Callers decide whether that means
    /// skip or fail.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut fields = line
            .trim_end_matches(['\n', '\r'])
            .split(FIELD_SEPARATOR);

        let name = fields.next()?;
        let phone = fields.next()?;
        let email = fields.next()?;

        if fields.next().is_some() {
            return None;
        }

        Some(Self::new(name, phone, email))
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.phone, self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_format() {
        let contact = Contact::new("Ana", "3001234567", "ana@x.com");
        assert_eq!(contact.to_line(), "Ana,3001234567,ana@x.com");
    }

    #[test]
    fn parse_well_formed_line() {
        let contact = Contact::parse_line("Ana,3001234567,ana@x.com\n").unwrap();
        assert_eq!(contact.name, "Ana");
        assert_eq!(contact.phone, "3001234567");
        assert_eq!(contact.email, "ana@x.com");
    }

    #[test]
    fn parse_keeps_empty_fields() {
        let contact = Contact::parse_line("Luis,555,").unwrap();
        assert_eq!(contact.email, "");

        let contact = Contact::parse_line(",,").unwrap();
        assert_eq!(contact, Contact::new("", "", ""));
    }

    #[test]
    fn parse_keeps_surrounding_whitespace() {
        let contact = Contact::new("  Ana ", "1", "");
        assert_eq!(Contact::parse_line(&contact.to_line()), Some(contact));

        let contact = Contact::parse_line("  Ana ,1,\r\n").unwrap();
        assert_eq!(contact.name, "  Ana ");
        assert_eq!(contact.email, "");
    }

    #[test]
    fn parse_rejects_wrong_field_count() {
        assert!(Contact::parse_line("Ana,555").is_none());
        assert!(Contact::parse_line("Ana").is_none());
        assert!(Contact::parse_line("Ana, Maria,555,ana@x.com").is_none());
    }

    #[test]
    fn phone_is_the_lookup_key() {
        let contact = Contact::new("Ana", "555", "");
        assert!(contact.has_phone("555"));
        assert!(!contact.has_phone("5550"));
    }
}
