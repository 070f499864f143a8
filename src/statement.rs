//! Permission statements.
//!
//! A statement pairs resource patterns with a list of actions and an allowed
//! flag, and may carry configuration values for those resources.

use std::borrow::Cow;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::action::{Action, ActionName};
use crate::effect::{ComputedEffect, Effect, SILENT};
use crate::matcher::{ExtendedMatcher, Matcher};
use crate::resource::{Identifier, ResourceName};

/// A statement of permissions. A statement describes whether one or more
/// `actions` should be `allowed` to be taken against `resources`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    /// The list of resources this statement applies to.
    pub resources: Vec<ResourceName<'static>>,
    /// The list of actions this statement applies to.
    pub actions: ActionNameList,
    /// Whether the `actions` should be allowed or disallowed.
    pub allowed: bool,
    /// Named configuration values for `resources`.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub configuration: HashMap<String, Configuration>,
}

impl Statement {
    /// Returns a statement that allows [`ActionNameList::All`] against
    /// [`ResourceName::any()`].
    #[must_use]
    pub fn allow_all() -> Self {
        Self::for_any()
    }

    /// Returns a statement that allows [`ActionNameList::All`] against
    /// [`ResourceName::any()`]. Narrow it with [`Self::allowing`] or
    /// [`Self::denying`].
    #[must_use]
    pub fn for_any() -> Self {
        Self::for_resource(ResourceName::any())
    }

    /// Returns a statement that allows [`ActionNameList::All`] against
    /// `resource`.
    #[must_use]
    pub fn for_resource(resource: ResourceName<'_>) -> Self {
        Self {
            resources: vec![resource.to_owned()],
            actions: ActionNameList::match_any(),
            allowed: true,
            configuration: HashMap::default(),
        }
    }

    /// Adds another resource this statement applies to.
    #[must_use]
    pub fn or_resource(mut self, resource: ResourceName<'_>) -> Self {
        self.resources.push(resource.to_owned());
        self
    }

    /// Allows `actions`.
    #[must_use]
    pub fn allowing<A: Into<ActionNameList>>(mut self, actions: A) -> Self {
        self.actions = actions.into();
        self.allowed = true;
        self
    }

    /// Denies `actions`.
    #[must_use]
    pub fn denying<A: Into<ActionNameList>>(mut self, actions: A) -> Self {
        self.actions = actions.into();
        self.allowed = false;
        self
    }

    /// Sets the configuration value `key` for this statement's resources.
    #[must_use]
    pub fn with<K: Into<String>, V: Into<Configuration>>(mut self, key: K, value: V) -> Self {
        self.configuration.insert(key.into(), value.into());
        self
    }

    /// The effect this statement has when it applies.
    pub fn effect(&self) -> Effect {
        Effect::from(self.allowed)
    }

    /// Determine if any of this statement's resource patterns matches `resource`.
    pub fn applies_to_resource(&self, resource: &[Identifier<'_>]) -> bool {
        self.resources.iter().any(|pattern| pattern.test(resource))
    }

    /// Determine if this statement's action list includes `action`.
    pub fn applies_to_action(&self, action: &ActionName) -> bool {
        self.actions.test(action)
    }

    /// Determine if this statement applies to a resource and action.
    pub fn applies_to_subject(&self, resource: &[Identifier<'_>], action: &ActionName) -> bool {
        self.applies_to_action(action) && self.applies_to_resource(resource)
    }

    /// The statement's effect if it applies to the subject, silence otherwise.
    pub fn apply(&self, resource: &[Identifier<'_>], action: &ActionName) -> ComputedEffect {
        if self.applies_to_subject(resource, action) {
            self.effect().into()
        } else {
            SILENT
        }
    }
}

/// A list of [`ActionName`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionNameList {
    /// A specific list of names.
    List(Vec<ActionName>),
    /// All actions.
    All,
}

impl<T> From<T> for ActionNameList
where
    T: Action,
{
    fn from(action: T) -> Self {
        Self::match_only(action.name())
    }
}

impl<T> From<Vec<T>> for ActionNameList
where
    T: Action,
{
    fn from(actions: Vec<T>) -> Self {
        Self::List(actions.iter().map(Action::name).collect())
    }
}

/// A configured value for a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Configuration {
    /// An unsigned integer configuration value.
    Unsigned(u64),
    /// A signed integer configuration value.
    Signed(i64),
    /// A string configuration value.
    String(String),
}

impl Configuration {
    /// Evaluates the contents of this configuration as an unsigned integer.
    /// Returns None if unable to convert safely.
    #[must_use]
    pub fn to_unsigned(&self) -> Option<u64> {
        match self {
            Configuration::Unsigned(unsigned) => Some(*unsigned),
            Configuration::Signed(signed) => u64::try_from(*signed).ok(),
            Configuration::String(string) => string.parse().ok(),
        }
    }

    /// Evaluates the contents of this configuration as a signed integer.
    /// Returns None if unable to convert safely.
    #[must_use]
    pub fn to_signed(&self) -> Option<i64> {
        match self {
            Configuration::Unsigned(unsigned) => i64::try_from(*unsigned).ok(),
            Configuration::Signed(signed) => Some(*signed),
            Configuration::String(string) => string.parse().ok(),
        }
    }

    /// Returns the contents of this configuration as a string, if it holds
    /// one.
    #[must_use]
    pub fn to_string(&self) -> Option<Cow<'_, str>> {
        match self {
            Configuration::String(string) => Some(Cow::Borrowed(string)),
            Configuration::Unsigned(_) | Configuration::Signed(_) => None,
        }
    }
}

impl From<u64> for Configuration {
    fn from(value: u64) -> Self {
        Self::Unsigned(value)
    }
}

impl From<i64> for Configuration {
    fn from(value: i64) -> Self {
        Self::Signed(value)
    }
}

impl From<String> for Configuration {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<'a> From<&'a str> for Configuration {
    fn from(value: &'a str) -> Self {
        Self::String(value.to_string())
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::effect::{ALLOW, DENY};

    fn subject() -> (ResourceName<'static>, ActionName) {
        (
            ResourceName::named("docs").and("public"),
            ActionName::from("read"),
        )
    }

    #[test]
    fn test_allow_all_applies_everywhere() {
        let statement = Statement::allow_all();
        let (resource, action) = subject();

        assert!(statement.allowed);
        assert_eq!(statement.actions, ActionNameList::All);
        assert_eq!(statement.apply(resource.segments(), &action), ALLOW);
        assert_eq!(statement.apply(&[], &ActionName::default()), ALLOW);
    }

    #[test]
    fn test_apply_deny() {
        let (resource, action) = subject();
        let statement = Statement::for_resource(ResourceName::named("docs").and(Identifier::Any))
            .denying("read");

        let actual = statement.apply(resource.segments(), &action);

        assert_eq!(actual, DENY);
    }

    #[test]
    fn test_unmatched_action_is_silent() {
        let (resource, _) = subject();
        let statement = Statement::for_resource(ResourceName::named("docs").and(Identifier::Any))
            .allowing(vec!["write", "delete"]);

        let actual = statement.apply(resource.segments(), &ActionName::from("read"));

        assert_eq!(actual, SILENT);
    }

    #[test]
    fn test_unmatched_resource_is_silent() {
        let (_, action) = subject();
        let statement = Statement::for_resource(ResourceName::named("docs").and(Identifier::Any));

        let resource = ResourceName::named("users").and("bob");
        assert_eq!(statement.apply(resource.segments(), &action), SILENT);
    }

    #[test]
    fn test_any_resource_pattern_applies() {
        let (resource, action) = subject();
        let statement = Statement::for_resource(ResourceName::named("users"))
            .or_resource(ResourceName::named(Identifier::Any).and("public"));

        assert!(statement.applies_to_resource(resource.segments()));
        assert!(statement.applies_to_resource(ResourceName::named("users").segments()));
        assert_eq!(statement.apply(resource.segments(), &action), ALLOW);
    }

    #[test]
    fn test_with_configuration() {
        let statement = Statement::for_any()
            .with("rate-limit", 500_u64)
            .with("greeting", "hi");

        assert_eq!(
            statement.configuration.get("rate-limit"),
            Some(&Configuration::Unsigned(500))
        );
        assert_eq!(
            statement.configuration.get("greeting"),
            Some(&Configuration::String(String::from("hi")))
        );
    }

    #[test]
    fn test_configuration_conversions() {
        assert_eq!(Configuration::Unsigned(5).to_unsigned(), Some(5));
        assert_eq!(Configuration::Unsigned(5).to_signed(), Some(5));
        assert_eq!(Configuration::Unsigned(u64::MAX).to_signed(), None);
        assert_eq!(Configuration::Signed(-1).to_unsigned(), None);
        assert_eq!(Configuration::Signed(-1).to_signed(), Some(-1));
        assert_eq!(Configuration::from("12").to_unsigned(), Some(12));
        assert_eq!(Configuration::from("abc").to_signed(), None);
        assert_eq!(
            Configuration::from("abc").to_string().as_deref(),
            Some("abc")
        );
        assert_eq!(Configuration::Signed(3).to_string(), None);
    }

    #[test]
    fn test_deserialize_without_configuration() {
        let json = r#"{"resources":[["Any"]],"actions":{"List":[["read"]]},"allowed":false}"#;

        let actual: Statement = serde_json::from_str(json).unwrap();

        assert_eq!(
            actual,
            Statement::for_resource(ResourceName::any()).denying("read")
        );
        assert_eq!(serde_json::to_string(&actual).unwrap(), json);
    }
}
