//! Value matching traits.
//!
//! A matcher represents a class of values for which inclusion can be tested.
//! Statements use them twice: resource patterns are matched segment by
//! segment against a concrete resource name, and action lists are matched
//! against a concrete action name.

use crate::action::ActionName;
use crate::resource::{Identifier, ResourceName};
use crate::statement::ActionNameList;

/// Basic matcher trait. Represents a class of values
/// for which inclusion can be tested.
pub trait Matcher<T: ?Sized> {
    /// Determine if a concrete target matches
    fn test(&self, target: &T) -> bool;
}

/// Convenience constructors for matchers.
pub trait ExtendedMatcher<T>: Matcher<T> {
    /// Match a specific value
    fn match_only(target: T) -> Self;

    /// Match any value (i.e. test is const true)
    fn match_any() -> Self;
}

impl<'p, 't> Matcher<Identifier<'t>> for Identifier<'p> {
    fn test(&self, target: &Identifier<'t>) -> bool {
        use Identifier::*;
        match (self, target) {
            (Any, _) => true,
            (Integer(pattern), Integer(value)) => pattern == value,
            (String(pattern), String(value)) => pattern == value,
            _ => false,
        }
    }
}

impl<'p, 't> Matcher<[Identifier<'t>]> for ResourceName<'p> {
    fn test(&self, target: &[Identifier<'t>]) -> bool {
        match self.segments() {
            // A lone wildcard is the root of every resource, whatever its depth.
            [Identifier::Any] => true,
            pattern => {
                pattern.len() == target.len()
                    && pattern
                        .iter()
                        .zip(target)
                        .all(|(pattern, segment)| pattern.test(segment))
            }
        }
    }
}

impl<'p, 't> Matcher<ResourceName<'t>> for ResourceName<'p> {
    fn test(&self, target: &ResourceName<'t>) -> bool {
        self.test(target.segments())
    }
}

impl Matcher<ActionName> for ActionNameList {
    fn test(&self, target: &ActionName) -> bool {
        match self {
            ActionNameList::All => true,
            ActionNameList::List(names) => names.contains(target),
        }
    }
}

impl ExtendedMatcher<ActionName> for ActionNameList {
    fn match_only(target: ActionName) -> Self {
        ActionNameList::List(vec![target])
    }

    fn match_any() -> Self {
        ActionNameList::All
    }
}
