// ============================================
// Profile Store
// ============================================
//
// Data-access seam for the document store that owns user records.
// Matching only needs key lookups and whole-collection reads; query
// planning and persistence belong to the implementation.

pub mod memory;

pub use memory::InMemoryProfileStore;

use crate::error::Result;
use crate::models::Profile;
use async_trait::async_trait;
use std::collections::HashSet;
use uuid::Uuid;

#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch a single profile by id
    async fn get_profile(&self, id: Uuid) -> Result<Option<Profile>>;

    /// Every profile except `id`
    async fn profiles_except(&self, id: Uuid) -> Result<Vec<Profile>>;

    /// Ids of the profiles `liker` has already liked
    async fn liked_by(&self, liker: Uuid) -> Result<HashSet<Uuid>>;

    /// Every stored profile
    async fn all_profiles(&self) -> Result<Vec<Profile>>;

    /// Overwrite the cached completeness value of a profile
    async fn update_completeness(&self, id: Uuid, completeness: u8) -> Result<()>;
}
