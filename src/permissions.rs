//! Permission evaluation.
//!
//! A [`Permissions`] value is an ordered list of statements. Evaluating an
//! action on a resource scans the statements in order and the last one that
//! applies decides. If none applies the action is denied.

use serde::{Deserialize, Serialize};

use crate::action::{Action, ActionName};
use crate::effect::{Authorized, ComputedEffect, Silent};
use crate::error::PermissionDenied;
use crate::resource::Identifier;
use crate::statement::{Configuration, Statement};

/// A collection of allowed permissions. This is constructed from a list of
/// [`Statement`]s and is never modified by evaluation.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permissions {
    statements: Vec<Statement>,
}

impl Permissions {
    /// Returns a `Permissions` instance constructed with
    /// [`Statement::allow_all()`].
    #[must_use]
    pub fn allow_all() -> Self {
        Self::from(Statement::allow_all())
    }

    /// Combines `self` with `other`. Statements of `other` are evaluated after
    /// the statements of `self`, so they take precedence where both apply.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }

    /// Combines any number of permissions in order. Returns an empty
    /// `Permissions` if `permissions` is empty.
    #[must_use]
    pub fn merged<I>(permissions: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        permissions.into_iter().fold(Self::default(), Self::merge)
    }

    /// Appends the statements of `other` to `self`.
    pub fn extend(&mut self, other: Self) {
        self.statements.extend(other.statements);
    }

    /// The statements, in evaluation order.
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Iterate over the statements that apply to `resource_name` and `action`,
    /// in evaluation order. The last item is the deciding statement.
    pub fn matching<'s, 'q, 'r>(
        &'s self,
        resource_name: &'q [Identifier<'r>],
        action: &'q ActionName,
    ) -> Matching<'s, 'q, 'r> {
        Matching {
            statements: self.statements.iter(),
            resource_name,
            action,
        }
    }

    /// Computes the effect of this policy for `action` on `resource_name`.
    /// Returns `SILENT` if no statement applies.
    pub fn effect<'a, R, P>(&self, resource_name: R, action: &P) -> ComputedEffect
    where
        R: AsRef<[Identifier<'a>]>,
        P: Action + ?Sized,
    {
        let resource_name = resource_name.as_ref();
        let action = action.name();
        self.matching(resource_name, &action)
            .inspect(|statement| {
                tracing::trace!(
                    resources = ?statement.resources,
                    allowed = statement.allowed,
                    "statement applies"
                );
            })
            .map(|statement| ComputedEffect::from(statement.effect()))
            .collect()
    }

    /// Evaluate whether the `action` is allowed to be taken upon
    /// `resource_name`. Returns true if the action should be allowed. If no
    /// statements that match `resource_name` allow `action`, false will be
    /// returned.
    pub fn allowed_to<'a, R, P>(&self, resource_name: R, action: &P) -> bool
    where
        R: AsRef<[Identifier<'a>]>,
        P: Action + ?Sized,
    {
        self.effect(resource_name, action).authorized()
    }

    /// Evaluate whether the `action` is allowed to be taken upon
    /// `resource_name`. Returns `Err(PermissionDenied)` naming the resource
    /// and action if it is not.
    pub fn check<'a, R, P>(&self, resource_name: R, action: &P) -> Result<(), PermissionDenied>
    where
        R: AsRef<[Identifier<'a>]>,
        P: Action + ?Sized,
    {
        let resource_name = resource_name.as_ref();
        let effect = self.effect(resource_name, action);
        if effect.authorized() {
            Ok(())
        } else {
            let denied = PermissionDenied {
                resource: resource_name.iter().map(Identifier::to_owned).collect(),
                action: action.name(),
            };
            tracing::debug!(
                resource = %denied.resource,
                action = %denied.action,
                implicit = effect.silent(),
                "permission denied"
            );
            Err(denied)
        }
    }

    /// Looks up the configuration value `key` for `resource_name`. The last
    /// statement that applies to the resource and defines `key` provides the
    /// value. Action lists and the allowed flag are not considered.
    pub fn get<'s, 'a, R>(&'s self, resource_name: R, key: &str) -> Option<&'s Configuration>
    where
        R: AsRef<[Identifier<'a>]>,
    {
        let resource_name = resource_name.as_ref();
        self.statements
            .iter()
            .rev()
            .filter(|statement| statement.applies_to_resource(resource_name))
            .find_map(|statement| statement.configuration.get(key))
    }
}

impl From<Vec<Statement>> for Permissions {
    fn from(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

impl From<Statement> for Permissions {
    fn from(statement: Statement) -> Self {
        Self::from(vec![statement])
    }
}

impl FromIterator<Statement> for Permissions {
    fn from_iter<T: IntoIterator<Item = Statement>>(statements: T) -> Self {
        Self::from(statements.into_iter().collect::<Vec<_>>())
    }
}

impl IntoIterator for Permissions {
    type Item = Statement;

    type IntoIter = std::vec::IntoIter<Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.into_iter()
    }
}

/// Iterator over the statements of a [`Permissions`] that apply to a subject.
/// See [`Permissions::matching`].
pub struct Matching<'s, 'q, 'r> {
    statements: std::slice::Iter<'s, Statement>,
    resource_name: &'q [Identifier<'r>],
    action: &'q ActionName,
}

impl<'s> Iterator for Matching<'s, '_, '_> {
    type Item = &'s Statement;

    fn next(&mut self) -> Option<Self::Item> {
        let (resource_name, action) = (self.resource_name, self.action);
        self.statements
            .find(|statement| statement.applies_to_subject(resource_name, action))
    }
}

impl DoubleEndedIterator for Matching<'_, '_, '_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (resource_name, action) = (self.resource_name, self.action);
        self.statements
            .rfind(|statement| statement.applies_to_subject(resource_name, action))
    }
}
