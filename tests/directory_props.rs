//! Property tests for the contact directory

use std::collections::HashSet;
use std::fs;

use contact_book::{Contact, ContactStore, Directory, DirectoryError};
use proptest::prelude::*;
use tempfile::TempDir;

fn contact_strategy() -> impl Strategy<Value = (String, String, String)> {
    (
        "[ A-Za-z.]{0,3}[A-Za-z][ A-Za-z.]{0,10}",
        // Small digit space so duplicates actually occur
        "[0-9]{1,2}",
        prop_oneof![Just(String::new()), "[a-z]{1,6}@[a-z]{1,6}\\.[a-z]{2,3}"],
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn phones_stay_unique(requests in prop::collection::vec(contact_strategy(), 1..24)) {
        let dir = TempDir::new().unwrap();
        let directory = Directory::new(ContactStore::new(dir.path().join("contacts.txt")));

        for (name, phone, email) in &requests {
            let before = directory.list().unwrap();
            let taken = before.iter().any(|c| c.has_phone(phone));

            match directory.create(name, phone, email) {
                Ok(_) => prop_assert!(!taken),
                Err(DirectoryError::DuplicatePhone(p)) => {
                    prop_assert!(taken);
                    prop_assert_eq!(&p, phone);
                    prop_assert_eq!(directory.list().unwrap(), before);
                }
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
        }

        let contacts = directory.list().unwrap();
        let phones: HashSet<_> = contacts.iter().map(|c| c.phone.clone()).collect();
        prop_assert_eq!(phones.len(), contacts.len());
    }

    #[test]
    fn resave_is_idempotent(records in prop::collection::vec(contact_strategy(), 0..16)) {
        let dir = TempDir::new().unwrap();
        let store = ContactStore::new(dir.path().join("contacts.txt"));

        let contacts: Vec<_> = records
            .into_iter()
            .map(|(name, phone, email)| Contact::new(name, phone, email))
            .collect();
        store.save_all(&contacts).unwrap();
        let first = fs::read(store.path()).unwrap();

        let loaded = store.load_all().unwrap();
        prop_assert_eq!(&loaded, &contacts);

        store.save_all(&loaded).unwrap();
        prop_assert_eq!(fs::read(store.path()).unwrap(), first);
    }

    #[test]
    fn empty_update_changes_nothing(phone in "[0-9]{1,6}", name in "[A-Za-z]{1,8}") {
        let dir = TempDir::new().unwrap();
        let directory = Directory::new(ContactStore::new(dir.path().join("contacts.txt")));
        directory.create(&name, &phone, "").unwrap();
        directory.create("Other", "9999999", "other@x.com").unwrap();
        let before = directory.list().unwrap();

        directory.update(&phone, "", "", "").unwrap();
        prop_assert_eq!(directory.list().unwrap(), before);
    }
}
