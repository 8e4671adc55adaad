use std::collections::{btree_map, BTreeMap, BTreeSet};

/// Accepted answer phrasings extracted from marking schemes.
///
/// Keys are lowercase; variants keep the casing they were written with.
/// Built once per run, then only read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerVariations {
    groups: BTreeMap<String, BTreeSet<String>>,
}

impl AnswerVariations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a set of interchangeable variants: each member's lowercase
    /// form becomes a key for the whole group.
    pub fn insert_group<I, S>(&mut self, variants: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let group: BTreeSet<String> = variants
            .into_iter()
            .map(Into::into)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect();

        for variant in &group {
            self.groups
                .entry(variant.to_lowercase())
                .or_default()
                .extend(group.iter().cloned());
        }
    }

    pub fn get(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.groups.get(&key.to_lowercase())
    }

    /// Union of the groups registered under any of `keys`.
    pub fn lookup<'a, I>(&self, keys: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut found = BTreeSet::new();
        for key in keys {
            if let Some(group) = self.get(key) {
                found.extend(group.iter().cloned());
            }
        }
        found
    }

    /// Union another map into this one.
    pub fn merge(&mut self, other: AnswerVariations) {
        for (key, group) in other.groups {
            self.groups.entry(key).or_default().extend(group);
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, BTreeSet<String>> {
        self.groups.iter()
    }
}
