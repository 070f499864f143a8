use serde::{Deserialize, Serialize};

use crate::action::ActionName;
use crate::resource::ResourceName;

/// An `action` was denied.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[error("Action '{action}' was denied on resource '{resource}'")]
pub struct PermissionDenied {
    /// The resource that `action` was attempted upon.
    pub resource: ResourceName<'static>,
    /// The `action` attempted upon `resource`.
    pub action: ActionName,
}

/// Errors reading or writing policy documents.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The document is not a valid list of statements.
    #[error("invalid policy document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document could not be read.
    #[error("unable to read policy document: {0}")]
    Io(#[from] std::io::Error),
}
