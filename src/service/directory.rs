//! Contact directory service
//!
//! Exposes create/list/update/delete over a [`ContactStore`]. Every call
//! loads the whole collection, applies its checks, and (for mutations)
//! writes the whole collection back. Nothing is saved when a check fails.
//!
//! # Invariants
//! - At most one stored contact has a given phone.
//! - Stored phones are digits only; stored emails match the address pattern.
//! - Stored names never contain a line break.
//! - One load-mutate-save cycle runs at a time per `Directory`.

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::info;
use thiserror::Error;

use crate::domain::{check_email, check_name, check_phone, Contact, FieldError};
use crate::storage::{Config, ContactStore, StoreError};

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("Invalid phone '{0}': only digits are allowed")]
    InvalidPhone(String),

    #[error("Invalid email '{0}': expected name@domain.tld")]
    InvalidEmail(String),

    #[error("Invalid name {0:?}: line breaks are not allowed")]
    InvalidName(String),

    #[error("A contact with phone {0} already exists")]
    DuplicatePhone(String),

    #[error("Contact not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl From<FieldError> for DirectoryError {
    fn from(err: FieldError) -> Self {
        match err {
            FieldError::InvalidPhone(phone) => DirectoryError::InvalidPhone(phone),
            FieldError::InvalidEmail(email) => DirectoryError::InvalidEmail(email),
            FieldError::InvalidName(name) => DirectoryError::InvalidName(name),
        }
    }
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// One step of the validation pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Check {
    PhoneFormat,
    EmailFormat,
    UniquePhone,
}

/// Format first, then uniqueness against the stored collection
const FULL_CHECKS: &[Check] = &[Check::PhoneFormat, Check::EmailFormat, Check::UniquePhone];

/// Coarse pass for update requests; never looks at stored phones
const FORMAT_CHECKS: &[Check] = &[Check::PhoneFormat, Check::EmailFormat];

/// Update moving a contact to a different phone
const PHONE_CHANGE_CHECKS: &[Check] = &[Check::PhoneFormat, Check::UniquePhone];

/// Update replacing the email
const EMAIL_CHANGE_CHECKS: &[Check] = &[Check::EmailFormat];

/// Field values submitted to the pipeline; empty means "not given"
#[derive(Debug, Clone, Copy, Default)]
struct Fields<'a> {
    phone: &'a str,
    email: &'a str,
}

fn run_checks(checks: &[Check], fields: Fields<'_>, existing: &[Contact]) -> DirectoryResult<()> {
    for check in checks {
        match check {
            Check::PhoneFormat => check_phone(fields.phone)?,
            Check::EmailFormat => check_email(fields.email)?,
            Check::UniquePhone => {
                if !fields.phone.is_empty() && existing.iter().any(|c| c.has_phone(fields.phone)) {
                    return Err(DirectoryError::DuplicatePhone(fields.phone.to_string()));
                }
            }
        }
    }
    Ok(())
}

/// The contact directory
pub struct Directory {
    store: ContactStore,
    lock: Mutex<()>,
}

impl Directory {
    /// Creates a directory over the given store
    pub fn new(store: ContactStore) -> Self {
        Self {
            store,
            lock: Mutex::new(()),
        }
    }

    /// Creates a directory over the store described by `config`
    pub fn open(config: &Config) -> Self {
        Self::new(config.store())
    }

    /// Returns the underlying store
    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        // The guard protects no data of its own; the file is the state.
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Checks field formats and, optionally, phone uniqueness
    ///
    /// The name is accepted as-is. Empty phone or email values pass their
    /// format checks, and an empty phone is never a duplicate.
    pub fn validate(
        &self,
        _name: &str,
        phone: &str,
        email: &str,
        check_duplicate: bool,
    ) -> DirectoryResult<()> {
        let _guard = self.lock();
        let fields = Fields { phone, email };

        if check_duplicate && !phone.is_empty() {
            let existing = self.store.load_all()?;
            run_checks(FULL_CHECKS, fields, &existing)
        } else {
            run_checks(FORMAT_CHECKS, fields, &[])
        }
    }

    /// Adds a new contact
    ///
    /// # Errors
    /// - `MissingRequiredField` when `name` or `phone` is empty
    /// - `InvalidName` when `name` contains a line break
    /// - `InvalidPhone` / `InvalidEmail` on format errors
    /// - `DuplicatePhone` when the phone is already stored
    pub fn create(&self, name: &str, phone: &str, email: &str) -> DirectoryResult<Contact> {
        let _guard = self.lock();

        if name.is_empty() {
            return Err(DirectoryError::MissingRequiredField("name"));
        }
        if phone.is_empty() {
            return Err(DirectoryError::MissingRequiredField("phone"));
        }
        check_name(name)?;

        let mut contacts = self.store.load_all()?;
        run_checks(FULL_CHECKS, Fields { phone, email }, &contacts)?;

        let contact = Contact::new(name, phone, email);
        contacts.push(contact.clone());
        self.store.save_all(&contacts)?;

        info!("created contact {}", contact.phone);
        Ok(contact)
    }

    /// Returns every stored contact in file order
    pub fn list(&self) -> DirectoryResult<Vec<Contact>> {
        let _guard = self.lock();
        Ok(self.store.load_all()?)
    }

    /// Looks up the contact stored under `phone`
    pub fn find(&self, phone: &str) -> DirectoryResult<Option<Contact>> {
        let _guard = self.lock();
        let contacts = self.store.load_all()?;
        Ok(contacts.into_iter().find(|c| c.has_phone(phone)))
    }

    /// Partially updates the contact stored under `original_phone`
    ///
    /// Empty `new_*` values leave the field unchanged. Setting the phone to
    /// its current value is a no-op for that field, not a duplicate.
    pub fn update(
        &self,
        original_phone: &str,
        new_name: &str,
        new_phone: &str,
        new_email: &str,
    ) -> DirectoryResult<Contact> {
        let _guard = self.lock();

        check_name(new_name)?;
        if !new_phone.is_empty() || !new_email.is_empty() {
            run_checks(
                FORMAT_CHECKS,
                Fields {
                    phone: new_phone,
                    email: new_email,
                },
                &[],
            )?;
        }

        let mut contacts = self.store.load_all()?;
        let index = contacts
            .iter()
            .position(|c| c.has_phone(original_phone))
            .ok_or_else(|| DirectoryError::NotFound(original_phone.to_string()))?;

        // Staged on a copy so a late check failure leaves `contacts` intact
        let mut updated = contacts[index].clone();

        if !new_name.is_empty() {
            updated.name = new_name.to_string();
        }

        if !new_phone.is_empty() && new_phone != original_phone {
            let fields = Fields {
                phone: new_phone,
                ..Fields::default()
            };
            run_checks(PHONE_CHANGE_CHECKS, fields, &contacts)?;
            updated.phone = new_phone.to_string();
        }

        if !new_email.is_empty() {
            let fields = Fields {
                email: new_email,
                ..Fields::default()
            };
            run_checks(EMAIL_CHANGE_CHECKS, fields, &contacts)?;
            updated.email = new_email.to_string();
        }

        contacts[index] = updated.clone();
        self.store.save_all(&contacts)?;

        info!("updated contact {} -> {}", original_phone, updated.phone);
        Ok(updated)
    }

    /// Removes the contact stored under `phone`
    pub fn delete(&self, phone: &str) -> DirectoryResult<Contact> {
        let _guard = self.lock();

        let mut contacts = self.store.load_all()?;
        let index = contacts
            .iter()
            .position(|c| c.has_phone(phone))
            .ok_or_else(|| DirectoryError::NotFound(phone.to_string()))?;

        let removed = contacts.remove(index);
        self.store.save_all(&contacts)?;

        info!("deleted contact {}", removed.phone);
        Ok(removed)
    }
}
