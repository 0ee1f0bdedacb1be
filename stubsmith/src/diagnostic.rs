//! Non-fatal conditions observed during a generation run.
//!
//! Diagnostics are for people reading logs. They never influence the
//! rendered text.

use std::fmt;

use crate::tree::{MemberKey, Provenance};

/// A recoverable problem recorded while generating one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A unit failed; its contribution was discarded.
    UnitFailed {
        /// Target class being generated.
        class: String,
        /// Name of the failing unit.
        unit: String,
        /// Rendered error message.
        error: String,
    },
    /// Colliding declarations of one member were dropped.
    CollisionDropped {
        /// Namespace owning the member.
        owner: String,
        /// Identity of the colliding member.
        member: MemberKey,
        /// Contributors whose declarations were dropped, in merge order.
        dropped: Vec<Provenance>,
        /// Contributor whose declaration survived, if any.
        kept: Option<Provenance>,
    },
    /// Contributors disagreed about a class's superclass.
    SuperclassMismatch {
        /// Class whose superclass was contested.
        namespace: String,
        /// Superclass retained in the output.
        kept: String,
        /// Superclass that was ignored.
        ignored: String,
        /// Contributor of the ignored superclass.
        contributor: Provenance,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnitFailed { class, unit, error } => {
                write!(f, "unit `{unit}` failed for {class}: {error}")
            }
            Self::CollisionDropped {
                owner,
                member,
                dropped,
                kept,
            } => {
                let names = dropped
                    .iter()
                    .map(|provenance| format!("`{provenance}`"))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "conflict on {owner}{member}: dropped candidates from {names}")?;
                if let Some(survivor) = kept {
                    write!(f, "; kept `{survivor}`")?;
                }
                Ok(())
            }
            Self::SuperclassMismatch {
                namespace,
                kept,
                ignored,
                contributor,
            } => write!(
                f,
                "superclass conflict on {namespace}: kept {kept}, ignored {ignored} from `{contributor}`"
            ),
        }
    }
}
