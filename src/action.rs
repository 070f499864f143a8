//! Actions and their names.

use std::borrow::Cow;
use std::fmt::{Display, Write};

use serde::{Deserialize, Serialize};

/// Something that can be allowed or disallowed. When evaluating permissions
/// only the name of an action matters.
pub trait Action {
    /// The full name of this action.
    fn name(&self) -> ActionName;
}

impl Action for () {
    fn name(&self) -> ActionName {
        ActionName::default()
    }
}

impl Action for ActionName {
    fn name(&self) -> ActionName {
        self.clone()
    }
}

impl Action for str {
    fn name(&self) -> ActionName {
        ActionName::from(self.to_owned())
    }
}

impl Action for String {
    fn name(&self) -> ActionName {
        self.as_str().name()
    }
}

impl<T> Action for &T
where
    T: Action + ?Sized,
{
    fn name(&self) -> ActionName {
        (**self).name()
    }
}

/// A unique name of an action. Nested actions produce one segment per level,
/// e.g. `Post.Read`.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct ActionName(pub Vec<Cow<'static, str>>);

impl ActionName {
    /// Appends another segment, producing the name of a nested action.
    #[must_use]
    pub fn and<S: Into<Cow<'static, str>>>(mut self, segment: S) -> Self {
        self.0.push(segment.into());
        self
    }

    /// The name's segments, outermost first.
    pub fn segments(&self) -> &[Cow<'static, str>] {
        &self.0
    }
}

impl Display for ActionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, name) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_char('.')?;
            }

            name.fmt(f)?;
        }
        Ok(())
    }
}

impl From<&'static str> for ActionName {
    fn from(name: &'static str) -> Self {
        ActionName(vec![Cow::Borrowed(name)])
    }
}

impl From<String> for ActionName {
    fn from(name: String) -> Self {
        ActionName(vec![Cow::Owned(name)])
    }
}
