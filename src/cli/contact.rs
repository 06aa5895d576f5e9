//! Contact CLI commands
//!
//! Thin wrappers over [`Directory`]: trim the inputs, call the service,
//! render the result.

use anyhow::{Context, Result};

use super::output::Output;
use crate::service::{Directory, DirectoryError};

pub fn add(output: &Output, directory: &Directory, name: &str, phone: &str, email: &str) -> Result<()> {
    output.verbose_ctx("add", &format!("Adding contact with phone {}", phone.trim()));

    let contact = directory
        .create(name.trim(), phone.trim(), email.trim())
        .with_context(|| format!("Failed to add contact {}", phone.trim()))?;

    if output.is_json() {
        output.data(&contact);
    } else {
        output.success(&format!("Created contact: {}", contact));
    }

    Ok(())
}

pub fn list(output: &Output, directory: &Directory) -> Result<()> {
    let contacts = directory.list().context("Failed to list contacts")?;
    output.verbose_ctx("list", &format!("Loaded {} contacts", contacts.len()));

    if output.is_json() {
        output.data(&contacts);
    } else if contacts.is_empty() {
        println!("No contacts found");
    } else {
        output.row(&["NAME", "PHONE", "EMAIL"]);

        for contact in &contacts {
            output.row(&[contact.name.as_str(), contact.phone.as_str(), contact.email.as_str()]);
        }

        output.blank();
        println!("{} contact(s)", contacts.len());
    }

    Ok(())
}

pub fn show(output: &Output, directory: &Directory, phone: &str) -> Result<()> {
    let phone = phone.trim();
    let contact = directory
        .find(phone)
        .and_then(|found| found.ok_or_else(|| DirectoryError::NotFound(phone.to_string())))
        .with_context(|| format!("Failed to show contact {}", phone))?;

    if output.is_json() {
        output.data(&contact);
    } else {
        println!("Name:  {}", contact.name);
        println!("Phone: {}", contact.phone);
        println!(
            "Email: {}",
            if contact.email.is_empty() { "-" } else { contact.email.as_str() }
        );
    }

    Ok(())
}

pub fn update(
    output: &Output,
    directory: &Directory,
    phone: &str,
    name: Option<&str>,
    new_phone: Option<&str>,
    email: Option<&str>,
) -> Result<()> {
    let name = name.map(str::trim).unwrap_or_default();
    let new_phone = new_phone.map(str::trim).unwrap_or_default();
    let email = email.map(str::trim).unwrap_or_default();

    if name.is_empty() && new_phone.is_empty() && email.is_empty() {
        output.verbose_ctx("update", "No fields given; contact will be rewritten unchanged");
    }

    let phone = phone.trim();
    let contact = directory
        .update(phone, name, new_phone, email)
        .with_context(|| format!("Failed to update contact {}", phone))?;

    if output.is_json() {
        output.data(&contact);
    } else {
        output.success(&format!("Updated contact: {}", contact));
    }

    Ok(())
}

pub fn delete(output: &Output, directory: &Directory, phone: &str) -> Result<()> {
    let phone = phone.trim();
    let removed = directory
        .delete(phone)
        .with_context(|| format!("Failed to delete contact {}", phone))?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "deleted": true,
            "contact": removed,
        }));
    } else {
        output.success(&format!("Deleted contact: {}", removed));
    }

    Ok(())
}
