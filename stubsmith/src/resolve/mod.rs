//! Merges duplicate namespaces and settles member collisions.
//!
//! Resolution runs in two passes over the accumulated tree:
//!
//! 1. Nodes sharing a fully qualified name merge into one node placed at the
//!    position of the name's last occurrence. Members are concatenated in
//!    contribution order; `extend` and `include` lists are unioned.
//! 2. Within each node, members are grouped by [`MemberKey`]. Identical
//!    declarations collapse silently. Two or more distinct declarations form
//!    a [`Collision`] that the [`ResolutionPolicy`] settles; the losers are
//!    reported as [`Diagnostic::CollisionDropped`].
//!
//! Surviving members keep their relative order, and every node of the result
//! has unique member keys.

mod policy;

use std::collections::HashMap;

pub use policy::{
    Collision, DropAll, KeepFirst, KeepLast, PolicyKind, ResolutionPolicy, UnknownPolicy,
};

use crate::diagnostic::Diagnostic;
use crate::tree::{DeclarationTree, Member, MemberKey, Namespace, NamespaceKind, Provenance};

/// A tree whose node names and per-node member keys are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTree {
    nodes: Vec<Namespace>,
}

impl ResolvedTree {
    /// Nodes in output order.
    #[must_use]
    pub fn nodes(&self) -> &[Namespace] {
        &self.nodes
    }

    /// Looks up a node by fully qualified name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Namespace> {
        self.nodes.iter().find(|node| node.name == name)
    }
}

impl From<ResolvedTree> for DeclarationTree {
    /// Reopens a resolved tree so further contributions can be appended and
    /// resolved again. Nodes keep their own provenance.
    fn from(resolved: ResolvedTree) -> Self {
        let mut tree = Self::new();
        for node in resolved.nodes {
            tree.insert(node);
        }
        tree
    }
}

/// Output of [`resolve`].
#[derive(Debug, Clone)]
pub struct Resolution {
    /// The merged tree.
    pub tree: ResolvedTree,
    /// Collisions and superclass disagreements met along the way.
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolves `tree` with `policy`.
///
/// The function is pure: it performs no I/O and, for a given tree and a
/// deterministic policy, always produces the same result.
pub fn resolve<P>(tree: DeclarationTree, policy: &P) -> Resolution
where
    P: ResolutionPolicy + ?Sized,
{
    let mut diagnostics = Vec::new();
    let mut nodes = Vec::new();
    for group in group_by_name(tree.into_nodes()) {
        let Some(mut node) = merge_group(group, &mut diagnostics) else {
            continue;
        };
        let members = std::mem::take(&mut node.members);
        node.members = resolve_members(&node.name, members, policy, &mut diagnostics);
        nodes.push(node);
    }
    Resolution {
        tree: ResolvedTree { nodes },
        diagnostics,
    }
}

/// Groups nodes by name, ordering groups by their last occurrence.
fn group_by_name(nodes: Vec<Namespace>) -> Vec<Vec<Namespace>> {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(usize, Vec<Namespace>)> = Vec::new();
    for (position, node) in nodes.into_iter().enumerate() {
        match slots.get(&node.name).copied() {
            Some(slot) => {
                if let Some((last, group)) = groups.get_mut(slot) {
                    *last = position;
                    group.push(node);
                }
            }
            None => {
                slots.insert(node.name.clone(), groups.len());
                groups.push((position, vec![node]));
            }
        }
    }
    groups.sort_by_key(|(last, _)| *last);
    groups.into_iter().map(|(_, group)| group).collect()
}

fn merge_group(group: Vec<Namespace>, diagnostics: &mut Vec<Diagnostic>) -> Option<Namespace> {
    let mut nodes = group.into_iter();
    let mut merged = nodes.next()?;
    let mut superclass_source = merged
        .superclass()
        .map(|_| merged.provenance.clone());
    for node in nodes {
        let Namespace {
            kind,
            extends,
            includes,
            members,
            provenance,
            ..
        } = node;
        if let NamespaceKind::Class { superclass } = kind {
            merge_superclass(
                &mut merged,
                superclass,
                &provenance,
                &mut superclass_source,
                diagnostics,
            );
        }
        for module in extends {
            crate::tree::push_unique(&mut merged.extends, module);
        }
        for module in includes {
            crate::tree::push_unique(&mut merged.includes, module);
        }
        merged.members.extend(members);
    }
    Some(merged)
}

/// Folds an incoming class declaration into `merged`.
///
/// A module absorbed by a class becomes a class. The skeleton's superclass
/// is authoritative; otherwise the first declared superclass wins.
fn merge_superclass(
    merged: &mut Namespace,
    incoming: Option<String>,
    contributor: &Provenance,
    source: &mut Option<Provenance>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let current = merged.superclass().map(str::to_owned);
    let superclass = match (current, incoming) {
        (current, None) => current,
        (None, Some(candidate)) => {
            *source = Some(contributor.clone());
            Some(candidate)
        }
        (Some(current), Some(candidate)) if current == candidate => Some(current),
        (Some(current), Some(candidate)) if *contributor == Provenance::Skeleton => {
            let previous = source
                .replace(Provenance::Skeleton)
                .unwrap_or(Provenance::Anonymous);
            diagnostics.push(Diagnostic::SuperclassMismatch {
                namespace: merged.name.clone(),
                kept: candidate.clone(),
                ignored: current,
                contributor: previous,
            });
            Some(candidate)
        }
        (Some(current), Some(candidate)) => {
            diagnostics.push(Diagnostic::SuperclassMismatch {
                namespace: merged.name.clone(),
                kept: current.clone(),
                ignored: candidate,
                contributor: contributor.clone(),
            });
            Some(current)
        }
    };
    merged.kind = NamespaceKind::Class { superclass };
}

fn resolve_members<P>(
    owner: &str,
    members: Vec<Member>,
    policy: &P,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<Member>
where
    P: ResolutionPolicy + ?Sized,
{
    let mut slots: HashMap<MemberKey, usize> = HashMap::new();
    let mut groups: Vec<(MemberKey, Vec<Member>)> = Vec::new();
    for member in members {
        let key = member.key();
        match slots.get(&key).copied() {
            Some(slot) => {
                let Some((_, group)) = groups.get_mut(slot) else {
                    continue;
                };
                let is_repeat = group
                    .iter()
                    .any(|existing| existing.declaration == member.declaration);
                if !is_repeat {
                    group.push(member);
                }
            }
            None => {
                slots.insert(key.clone(), groups.len());
                groups.push((key, vec![member]));
            }
        }
    }

    let mut resolved = Vec::with_capacity(groups.len());
    for (key, candidates) in groups {
        if candidates.len() == 1 {
            resolved.extend(candidates);
            continue;
        }
        let choice = policy
            .select(&Collision {
                owner,
                key: &key,
                candidates: &candidates,
            })
            .filter(|&index| index < candidates.len());
        let mut kept = None;
        let mut dropped = Vec::new();
        for (index, candidate) in candidates.into_iter().enumerate() {
            if choice == Some(index) {
                kept = Some(candidate);
            } else {
                dropped.push(candidate.provenance);
            }
        }
        diagnostics.push(Diagnostic::CollisionDropped {
            owner: owner.to_owned(),
            member: key,
            dropped,
            kept: kept.as_ref().map(|member| member.provenance.clone()),
        });
        resolved.extend(kept);
    }
    resolved
}
