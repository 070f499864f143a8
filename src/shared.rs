//! The active policy of a running service.
//!
//! Request handling takes a snapshot with [`SharedPermissions::load`] and
//! evaluates against it; policy reloads publish a whole new [`Permissions`].
//! Snapshots already handed out keep the policy they were taken from.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::permissions::Permissions;

/// Cloneable handle to a replaceable [`Permissions`]. Clones share the same
/// active policy.
#[derive(Debug, Clone, Default)]
pub struct SharedPermissions {
    active: Arc<RwLock<Arc<Permissions>>>,
}

impl SharedPermissions {
    /// Creates a handle with `permissions` as the active policy.
    pub fn new(permissions: Permissions) -> Self {
        Self {
            active: Arc::new(RwLock::new(Arc::new(permissions))),
        }
    }

    /// The currently active policy.
    pub fn load(&self) -> Arc<Permissions> {
        Arc::clone(&self.active.read())
    }

    /// Publishes `permissions` as the active policy, returning the one it
    /// replaces.
    pub fn replace(&self, permissions: Permissions) -> Arc<Permissions> {
        let statements = permissions.statements().len();
        let previous = std::mem::replace(&mut *self.active.write(), Arc::new(permissions));
        tracing::info!(statements, "published permissions");
        previous
    }

    /// Publishes the policy produced by `f` from the active one. Concurrent
    /// updates are applied one after another.
    pub fn update<F>(&self, f: F) -> Arc<Permissions>
    where
        F: FnOnce(&Permissions) -> Permissions,
    {
        let mut active = self.active.write();
        let updated = Arc::new(f(&active));
        tracing::info!(
            statements = updated.statements().len(),
            "published permissions"
        );
        *active = Arc::clone(&updated);
        updated
    }
}

impl From<Permissions> for SharedPermissions {
    fn from(permissions: Permissions) -> Self {
        Self::new(permissions)
    }
}
