//! Authorization effects.
//!
//! Every statement carries a definite effect, either `ALLOW` or `DENY`.
//! Evaluating a whole policy might instead result in SILENCE, i.e. no
//! statement applies to the resource and action at all.
//!
//! When several statements apply, the one declared last decides the outcome.
//! If the outcome is silence, the action is implicitly denied.

use std::borrow::Borrow;

/// Definite authorization
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub enum Effect {
    /// Definitely authorized.
    ALLOW,
    /// Definitely not authorized.
    DENY,
}

impl From<bool> for Effect {
    fn from(allowed: bool) -> Self {
        if allowed {
            Effect::ALLOW
        } else {
            Effect::DENY
        }
    }
}

/// Result of evaluating a policy: a definite effect or silence.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub struct ComputedEffect(Option<Effect>);

pub const SILENT: ComputedEffect = ComputedEffect(None);

pub const ALLOW: ComputedEffect = ComputedEffect(Some(Effect::ALLOW));

pub const DENY: ComputedEffect = ComputedEffect(Some(Effect::DENY));

impl ComputedEffect {
    pub fn effect(&self) -> Option<Effect> {
        self.0
    }
}

impl From<Effect> for ComputedEffect {
    fn from(effect: Effect) -> Self {
        match effect {
            Effect::ALLOW => ALLOW,
            Effect::DENY => DENY,
        }
    }
}

impl From<Option<Effect>> for ComputedEffect {
    fn from(effect: Option<Effect>) -> Self {
        ComputedEffect(effect)
    }
}

/// Folds effects in declaration order. Silence is ignored and every definite
/// effect overrides the ones before it.
impl<E> FromIterator<E> for ComputedEffect
where
    E: Borrow<ComputedEffect>,
{
    fn from_iter<T: IntoIterator<Item = E>>(items: T) -> Self {
        items
            .into_iter()
            .fold(SILENT, |acc, effect| match (acc, *effect.borrow()) {
                (x, SILENT) => x,
                (_, x) => x,
            })
    }
}

/// Interpretation of an effect as a final decision.
pub trait Authorized {
    fn authorized(&self) -> bool;
}

impl Authorized for Effect {
    fn authorized(&self) -> bool {
        *self == Effect::ALLOW
    }
}

impl Authorized for ComputedEffect {
    fn authorized(&self) -> bool {
        *self == ALLOW
    }
}

pub trait Silent {
    fn silent(&self) -> bool;
}

impl Silent for Effect {
    fn silent(&self) -> bool {
        false
    }
}

impl Silent for ComputedEffect {
    fn silent(&self) -> bool {
        *self == SILENT
    }
}
