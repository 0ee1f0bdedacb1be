//! Policies deciding which colliding declaration survives.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tree::{Member, MemberKey};

/// Two or more distinct declarations of one member in one namespace.
#[derive(Debug, Clone, Copy)]
pub struct Collision<'a> {
    /// Fully qualified name of the owning namespace.
    pub owner: &'a str,
    /// Identity of the contested member.
    pub key: &'a MemberKey,
    /// Distinct candidates in merge order, each tagged with its provenance.
    pub candidates: &'a [Member],
}

/// Chooses the survivor of a collision.
///
/// Returning `None` drops the member from the namespace entirely. An index
/// outside `candidates` is treated as `None`. Policies that choose by
/// position depend on the merge order: unit registration order, then the
/// skeleton.
pub trait ResolutionPolicy {
    /// Returns the index of the surviving candidate, if any.
    fn select(&self, collision: &Collision<'_>) -> Option<usize>;
}

impl<F> ResolutionPolicy for F
where
    F: Fn(&Collision<'_>) -> Option<usize>,
{
    fn select(&self, collision: &Collision<'_>) -> Option<usize> {
        self(collision)
    }
}

/// Keeps none of the colliding declarations.
#[derive(Debug, Clone, Copy, Default)]
pub struct DropAll;

impl ResolutionPolicy for DropAll {
    fn select(&self, _collision: &Collision<'_>) -> Option<usize> {
        None
    }
}

/// Keeps the declaration contributed first.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepFirst;

impl ResolutionPolicy for KeepFirst {
    fn select(&self, _collision: &Collision<'_>) -> Option<usize> {
        Some(0)
    }
}

/// Keeps the declaration contributed last.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepLast;

impl ResolutionPolicy for KeepLast {
    fn select(&self, collision: &Collision<'_>) -> Option<usize> {
        collision.candidates.len().checked_sub(1)
    }
}

/// Built-in policies selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    /// See [`DropAll`].
    #[default]
    DropAll,
    /// See [`KeepFirst`].
    KeepFirst,
    /// See [`KeepLast`].
    KeepLast,
}

impl PolicyKind {
    /// Configuration spelling of the policy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DropAll => "drop-all",
            Self::KeepFirst => "keep-first",
            Self::KeepLast => "keep-last",
        }
    }
}

impl ResolutionPolicy for PolicyKind {
    fn select(&self, collision: &Collision<'_>) -> Option<usize> {
        match self {
            Self::DropAll => DropAll.select(collision),
            Self::KeepFirst => KeepFirst.select(collision),
            Self::KeepLast => KeepLast.select(collision),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unrecognised policy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown collision policy '{0}'; expected drop-all, keep-first or keep-last")]
pub struct UnknownPolicy(pub String);

impl FromStr for PolicyKind {
    type Err = UnknownPolicy;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "drop-all" => Ok(Self::DropAll),
            "keep-first" => Ok(Self::KeepFirst),
            "keep-last" => Ok(Self::KeepLast),
            other => Err(UnknownPolicy(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("drop-all", PolicyKind::DropAll)]
    #[case("keep-first", PolicyKind::KeepFirst)]
    #[case(" keep-last ", PolicyKind::KeepLast)]
    fn policy_names_parse(#[case] input: &str, #[case] expected: PolicyKind) {
        assert_eq!(input.parse::<PolicyKind>(), Ok(expected));
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let err = "most-specific"
            .parse::<PolicyKind>()
            .expect_err("not a built-in policy");
        assert_eq!(err, UnknownPolicy("most-specific".to_owned()));
    }
}
