//! The set of influencers picked for a campaign, shared by every list view
//! of a discovery session.
//!
//! Every transition is a pure function returning a new set; whoever owns the
//! session keeps the returned value as the current selection.

use std::collections::HashSet;

use crate::domain::InfluencerId;

/// Insertion-ordered set of selected ids. Duplicates are collapsed on
/// construction, including when deserialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "Vec<InfluencerId>", into = "Vec<InfluencerId>")]
pub struct SelectionSet {
    ids: Vec<InfluencerId>,
    // Mirrors `ids` for constant-time membership checks.
    index: HashSet<InfluencerId>,
}

/// One user gesture on a list view.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectionAction {
    Add { id: InfluencerId },
    Remove { id: InfluencerId },
    /// The "select all" checkbox of a filtered list: `ids` are the rows
    /// currently visible.
    SetAll { ids: Vec<InfluencerId>, checked: bool },
    Clear,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, id: InfluencerId) -> Self {
        if self.contains(&id) {
            return self.clone();
        }
        let mut next = self.clone();
        next.insert(id);
        next
    }

    pub fn remove(&self, id: &InfluencerId) -> Self {
        if !self.contains(id) {
            return self.clone();
        }
        self.retain(|s| s != id)
    }

    /// Union with `ids` when `checked`, difference otherwise. Selections that
    /// are not among `ids` are always kept.
    pub fn set_all(&self, ids: &[InfluencerId], checked: bool) -> Self {
        if checked {
            let mut next = self.clone();
            next.extend(ids.iter().cloned());
            next
        } else {
            let visible: HashSet<&InfluencerId> = ids.iter().collect();
            self.retain(|id| !visible.contains(id))
        }
    }

    pub fn clear(&self) -> Self {
        Self::new()
    }

    /// How many of `ids` are selected.
    pub fn count<'a>(&self, ids: impl IntoIterator<Item = &'a InfluencerId>) -> usize {
        ids.into_iter().filter(|id| self.contains(id)).count()
    }

    pub fn apply(&self, action: SelectionAction) -> Self {
        match action {
            SelectionAction::Add { id } => self.add(id),
            SelectionAction::Remove { id } => self.remove(&id),
            SelectionAction::SetAll { ids, checked } => self.set_all(&ids, checked),
            SelectionAction::Clear => self.clear(),
        }
    }

    pub fn contains(&self, id: &InfluencerId) -> bool {
        self.index.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InfluencerId> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn insert(&mut self, id: InfluencerId) {
        if self.index.insert(id.clone()) {
            self.ids.push(id);
        }
    }

    fn retain(&self, mut keep: impl FnMut(&InfluencerId) -> bool) -> Self {
        self.ids.iter().filter(|id| keep(id)).cloned().collect()
    }
}

impl Extend<InfluencerId> for SelectionSet {
    fn extend<T: IntoIterator<Item = InfluencerId>>(&mut self, iter: T) {
        for id in iter {
            self.insert(id);
        }
    }
}

impl From<Vec<InfluencerId>> for SelectionSet {
    fn from(ids: Vec<InfluencerId>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<SelectionSet> for Vec<InfluencerId> {
    fn from(set: SelectionSet) -> Self {
        set.ids
    }
}

impl FromIterator<InfluencerId> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = InfluencerId>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
