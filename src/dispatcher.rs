//! Permission-enforcing request dispatch.
//!
//! A request type that implements [`Protected`] declares, per request, how it
//! is protected. Wrapping a handler in [`Enforced`] produces a dispatcher that
//! applies that protection against the caller's [`Permissions`] before the
//! handler ever sees the request.
//!
//! Requests can be nested: an unprotected outer request whose handler passes
//! the inner request on to another dispatcher leaves enforcement to that
//! dispatcher.

use async_trait::async_trait;

use crate::action::{Action, ActionName};
use crate::error::PermissionDenied;
use crate::permissions::Permissions;
use crate::resource::ResourceName;

/// How a request is protected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Protection<'a, A> {
    /// The request is dispatched without a permission check.
    None,
    /// `action` must be allowed on `resource`.
    Simple {
        /// The resource the request acts upon.
        resource: ResourceName<'a>,
        /// The action the request performs.
        action: A,
    },
    /// The handler's `verify` decides.
    Custom,
}

impl<'a, A: Action> Protection<'a, A> {
    /// Creates a `Simple` protection.
    pub fn simple(resource: ResourceName<'a>, action: A) -> Self {
        Self::Simple { resource, action }
    }

    /// Applies `None` and `Simple` protection. Returns true if the request
    /// still needs to be verified by its handler.
    fn enforce(&self, permissions: &Permissions) -> Result<bool, PermissionDenied> {
        match self {
            Protection::None => Ok(false),
            Protection::Simple { resource, action } => {
                permissions.check(resource, action).map(|()| false)
            }
            Protection::Custom => Ok(true),
        }
    }
}

/// A request that declares how it must be protected.
pub trait Protected {
    /// The type of action this request performs.
    type Action: Action;

    /// The protection this request requires.
    fn protection(&self) -> Protection<'_, Self::Action>;
}

/// Dispatches `T` to an appropriate handler.
pub trait Dispatcher<T>: Send + Sync {
    /// The type of the result.
    type Result: Send + Sync;

    /// Dispatches `request` to the appropriate handler while also ensuring
    /// `permissions` allows the request.
    fn dispatch(&self, permissions: &Permissions, request: T) -> Self::Result;
}

/// Dispatches `T` to an appropriate handler.
#[async_trait]
pub trait AsyncDispatcher<T>: Send + Sync
where
    T: Send + 'static,
{
    /// The type of the result.
    type Result: Send + Sync;

    /// Dispatches `request` to the appropriate handler while also ensuring
    /// `permissions` allows the request.
    async fn dispatch(&self, permissions: &Permissions, request: T) -> Self::Result;
}

fn unverified() -> PermissionDenied {
    PermissionDenied {
        resource: ResourceName::default(),
        action: ActionName::default(),
    }
}

/// Handles requests whose permissions have already been verified.
pub trait Handler<T>: Send + Sync {
    /// The successful result of handling a request.
    type Output: Send + Sync;
    /// The error type, which must be able to report a denied request.
    type Error: From<PermissionDenied> + Send + Sync;

    /// Verifies a request with [`Protection::Custom`]. Denies unless
    /// overridden.
    fn verify(&self, _permissions: &Permissions, _request: &T) -> Result<(), Self::Error> {
        Err(unverified().into())
    }

    /// Handles an allowed `request`.
    fn handle(&self, permissions: &Permissions, request: T) -> Result<Self::Output, Self::Error>;
}

/// Handles requests whose permissions have already been verified.
#[async_trait]
pub trait AsyncHandler<T>: Send + Sync
where
    T: Send + Sync + 'static,
{
    /// The successful result of handling a request.
    type Output: Send + Sync;
    /// The error type, which must be able to report a denied request.
    type Error: From<PermissionDenied> + Send + Sync;

    /// Verifies a request with [`Protection::Custom`]. Denies unless
    /// overridden.
    async fn verify(&self, _permissions: &Permissions, _request: &T) -> Result<(), Self::Error> {
        Err(unverified().into())
    }

    /// Handles an allowed `request`.
    async fn handle(
        &self,
        permissions: &Permissions,
        request: T,
    ) -> Result<Self::Output, Self::Error>;
}

/// A dispatcher that applies the [`Protection`] of each request before
/// passing it to the wrapped handler. Denied requests never reach the handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Enforced<H>(pub H);

impl<H> Enforced<H> {
    /// The wrapped handler.
    pub fn handler(&self) -> &H {
        &self.0
    }
}

impl<T, H> Dispatcher<T> for Enforced<H>
where
    T: Protected,
    H: Handler<T>,
{
    type Result = Result<H::Output, H::Error>;

    fn dispatch(&self, permissions: &Permissions, request: T) -> Self::Result {
        if request.protection().enforce(permissions)? {
            self.0.verify(permissions, &request)?;
        }
        self.0.handle(permissions, request)
    }
}

#[async_trait]
impl<T, H> AsyncDispatcher<T> for Enforced<H>
where
    T: Protected + Send + Sync + 'static,
    H: AsyncHandler<T>,
{
    type Result = Result<H::Output, H::Error>;

    async fn dispatch(&self, permissions: &Permissions, request: T) -> Self::Result {
        let custom = request.protection().enforce(permissions)?;
        if custom {
            self.0.verify(permissions, &request).await?;
        }
        self.0.handle(permissions, request).await
    }
}
