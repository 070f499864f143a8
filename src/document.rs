//! Policy documents.
//!
//! A document is a JSON array of statements, serialized field for field.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::Error;
use crate::permissions::Permissions;

impl Permissions {
    /// Parses a policy document.
    pub fn from_json(document: &str) -> Result<Self, Error> {
        let permissions: Self = serde_json::from_str(document)?;
        tracing::debug!(
            statements = permissions.statements().len(),
            "parsed policy document"
        );
        Ok(permissions)
    }

    /// Reads a policy document from `reader`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads the policy document at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let permissions = Self::from_reader(BufReader::new(File::open(path)?))?;
        tracing::debug!(
            path = %path.display(),
            statements = permissions.statements().len(),
            "loaded policy document"
        );
        Ok(permissions)
    }

    /// Serializes this policy as a document.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
