use super::ProfileStore;
use crate::error::{MatchingError, Result};
use crate::models::Profile;
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::collections::HashSet;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;
use uuid::Uuid;

/// In-memory profile store, safe to share across tasks.
///
/// Backs local runs and tests; can be seeded from a JSON array of profiles.
/// Listings come back in insertion order, like a document collection scan.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: DashMap<Uuid, StoredProfile>,
    likes: DashMap<Uuid, HashSet<Uuid>>,
    next_seq: AtomicU64,
}

#[derive(Debug)]
struct StoredProfile {
    seq: u64,
    profile: Profile,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profiles(profiles: impl IntoIterator<Item = Profile>) -> Self {
        let store = Self::new();
        for profile in profiles {
            store.insert(profile);
        }
        store
    }

    /// Load a JSON array of profiles from disk.
    pub fn from_snapshot(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let profiles: Vec<Profile> = serde_json::from_str(&raw)?;
        let count = profiles.len();
        let store = Self::with_profiles(profiles);

        info!(path = %path.display(), profiles = count, "Loaded profile snapshot");
        Ok(store)
    }

    /// Insert or replace a profile, returning the previous version.
    ///
    /// A replaced profile keeps its original position.
    pub fn insert(&self, profile: Profile) -> Option<Profile> {
        match self.profiles.entry(profile.id) {
            Entry::Occupied(mut entry) => {
                Some(std::mem::replace(&mut entry.get_mut().profile, profile))
            }
            Entry::Vacant(entry) => {
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                entry.insert(StoredProfile { seq, profile });
                None
            }
        }
    }

    pub fn record_like(&self, liker: Uuid, liked: Uuid) -> Result<()> {
        if liker == liked {
            return Err(MatchingError::InvalidInput(
                "a profile cannot like itself".to_string(),
            ));
        }
        self.likes.entry(liker).or_default().insert(liked);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    fn ordered(&self, skip: Option<Uuid>) -> Vec<Profile> {
        let mut rows: Vec<(u64, Profile)> = self
            .profiles
            .iter()
            .filter(|entry| Some(*entry.key()) != skip)
            .map(|entry| (entry.seq, entry.profile.clone()))
            .collect();
        rows.sort_unstable_by_key(|(seq, _)| *seq);
        rows.into_iter().map(|(_, profile)| profile).collect()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get_profile(&self, id: Uuid) -> Result<Option<Profile>> {
        Ok(self.profiles.get(&id).map(|entry| entry.profile.clone()))
    }

    async fn profiles_except(&self, id: Uuid) -> Result<Vec<Profile>> {
        Ok(self.ordered(Some(id)))
    }

    async fn liked_by(&self, liker: Uuid) -> Result<HashSet<Uuid>> {
        Ok(self
            .likes
            .get(&liker)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    async fn all_profiles(&self) -> Result<Vec<Profile>> {
        Ok(self.ordered(None))
    }

    async fn update_completeness(&self, id: Uuid, completeness: u8) -> Result<()> {
        let mut entry = self
            .profiles
            .get_mut(&id)
            .ok_or(MatchingError::ProfileNotFound(id))?;
        entry.profile.completeness = completeness;
        Ok(())
    }
}
