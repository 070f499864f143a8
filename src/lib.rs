//! Permission evaluation for hierarchical resources.
//!
//! A [`Permissions`] value is an ordered list of [`Statement`]s. Each
//! statement names one or more [`ResourceName`] patterns, a list of actions
//! and whether those actions are allowed. By default, all actions are denied
//! for all resources; when several statements apply to a request, the one
//! declared last decides.
//!
//! ```rust
//! use actionable::{ActionNameList, Identifier, Permissions, ResourceName, Statement};
//!
//! let permissions = Permissions::from(vec![
//!     Statement::for_resource(ResourceName::named("docs").and(Identifier::Any)),
//!     Statement::for_resource(ResourceName::named("docs").and("secret"))
//!         .denying(ActionNameList::All),
//! ]);
//!
//! assert!(permissions.allowed_to(&ResourceName::named("docs").and("public"), "read"));
//! assert!(permissions
//!     .check(&ResourceName::named("docs").and("secret"), "read")
//!     .is_err());
//! ```
//!
//! Statements can also carry configuration values that vary per resource,
//! such as rate limits:
//!
//! ```rust
//! use actionable::{Configuration, Permissions, ResourceName, Statement};
//!
//! let permissions = Permissions::from(Statement::for_any().with("rate-limit", 500_u64));
//! let effective_rate_limit = permissions
//!     .get(&ResourceName::named("core-api"), "rate-limit")
//!     .and_then(Configuration::to_unsigned);
//! assert_eq!(effective_rate_limit, Some(500));
//! ```

#![forbid(unsafe_code)]

pub mod action;
pub mod dispatcher;
mod document;
pub mod effect;
pub mod error;
pub mod matcher;
pub mod permissions;
pub mod resource;
pub mod shared;
pub mod statement;

pub use self::{
    action::{Action, ActionName},
    dispatcher::{
        AsyncDispatcher, AsyncHandler, Dispatcher, Enforced, Handler, Protected, Protection,
    },
    error::{Error, PermissionDenied},
    permissions::Permissions,
    resource::{Identifier, ResourceName},
    shared::SharedPermissions,
    statement::{ActionNameList, Configuration, Statement},
};
