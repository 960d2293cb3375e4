//! Troupe - a collection of actors indexed by kind
//!
//! Used for the environment's observation sets and for belief memory. Members
//! are keyed by kind and then by id, so adding a member that is already
//! present replaces it and one id can never appear twice.

use std::collections::BTreeMap;

use ordered_float::OrderedFloat;

use crate::core::types::ActorId;
use crate::entity::actor::ActorKind;
use crate::spatial::Positioned;

/// Anything that can be kept in a troupe
pub trait Member: Positioned {
    fn id(&self) -> ActorId;
    fn kind(&self) -> ActorKind;
}

#[derive(Debug, Clone)]
pub struct Troupe<T: Member> {
    members: BTreeMap<ActorKind, BTreeMap<ActorId, T>>,
}

impl<T: Member> Default for Troupe<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Member> Troupe<T> {
    pub fn new() -> Self {
        Self { members: BTreeMap::new() }
    }

    /// Add a member, replacing any existing member with the same id
    pub fn add(&mut self, member: T) {
        self.members
            .entry(member.kind())
            .or_default()
            .insert(member.id(), member);
    }

    /// Remove a member that is known to be present
    ///
    /// # Panics
    /// If the member is not in the troupe.
    pub fn remove(&mut self, kind: ActorKind, id: ActorId) -> T {
        match self.discard(kind, id) {
            Some(member) => member,
            None => panic!("{}-{} is not a member of the troupe", kind, id),
        }
    }

    /// Remove a member if present
    pub fn discard(&mut self, kind: ActorKind, id: ActorId) -> Option<T> {
        let bucket = self.members.get_mut(&kind)?;
        let removed = bucket.remove(&id);
        if bucket.is_empty() {
            self.members.remove(&kind);
        }
        removed
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn contains(&self, kind: ActorKind, id: ActorId) -> bool {
        self.members.get(&kind).is_some_and(|bucket| bucket.contains_key(&id))
    }

    /// Members of exactly this kind, in id order
    pub fn find(&self, kind: ActorKind) -> Vec<&T> {
        self.members
            .get(&kind)
            .map(|bucket| bucket.values().collect())
            .unwrap_or_default()
    }

    pub fn find_where(&self, kind: ActorKind, condition: impl Fn(&T) -> bool) -> Vec<&T> {
        self.iter_kind(kind).filter(|member| condition(member)).collect()
    }

    pub fn find_id(&self, kind: ActorKind, id: ActorId) -> Option<&T> {
        self.members.get(&kind)?.get(&id)
    }

    /// Member with the smallest key; ties go to the lowest id
    pub fn find_min<K: Ord>(&self, kind: ActorKind, key: impl Fn(&T) -> K) -> Option<&T> {
        self.iter_kind(kind).min_by_key(|member| key(member))
    }

    /// Member with the largest key; ties go to the lowest id
    pub fn find_max<K: Ord>(&self, kind: ActorKind, key: impl Fn(&T) -> K) -> Option<&T> {
        self.iter_kind(kind)
            .map(|member| (key(member), member))
            .reduce(|best, next| if next.0 > best.0 { next } else { best })
            .map(|(_, member)| member)
    }

    /// Member of `kind` closest to `reference`
    pub fn find_closest(&self, reference: &impl Positioned, kind: ActorKind) -> Option<&T> {
        let origin = reference.position();
        self.find_min(kind, |member| OrderedFloat(origin.distance(&member.position())))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.members.values().flat_map(|bucket| bucket.values())
    }

    pub fn kinds(&self) -> impl Iterator<Item = ActorKind> + '_ {
        self.members.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.members.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn iter_kind(&self, kind: ActorKind) -> impl Iterator<Item = &T> {
        self.members.get(&kind).into_iter().flat_map(|bucket| bucket.values())
    }
}

impl<T: Member> FromIterator<T> for Troupe<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut troupe = Troupe::new();
        for member in iter {
            troupe.add(member);
        }
        troupe
    }
}
