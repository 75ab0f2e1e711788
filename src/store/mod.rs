//! In-memory profile store.
//!
//! Holds every current player profile in load order. Lookups are linear
//! scans by name or id; projections are computed from the live contents on
//! every call, so they always reflect prior inserts, updates and removals.
//!
//! The store itself is not synchronized. Request handlers share it as a
//! [`SharedProfileStore`] and take the read or write guard per operation.

use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::ingest::blank_profile;
use crate::models::{Bio, PlayerId, PlayerProfile, ProjectedEntry, Section};

/// Store shared across request handlers.
pub type SharedProfileStore = Arc<RwLock<ProfileStore>>;

/// Errors from store mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("No player with id {0}")]
    NotFound(PlayerId),

    #[error("Cannot assign a player id: the store is empty")]
    EmptyStore,

    #[error("Cannot assign a player id: {0} is the largest id available")]
    IdExhausted(PlayerId),
}

/// Bio fields supplied by a caller. The id is chosen by the store on
/// insert and by the caller on update.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BioFields {
    pub name: String,
    pub position: String,
    pub age: u32,
    pub team: String,
}

impl BioFields {
    fn into_bio(self, player_id: PlayerId) -> Bio {
        Bio {
            name: self.name,
            player_id,
            position: self.position,
            age: self.age,
            team: self.team,
        }
    }
}

/// Ordered collection of player profiles.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    profiles: Vec<PlayerProfile>,
}

impl ProfileStore {
    pub fn new(profiles: Vec<PlayerProfile>) -> Self {
        Self { profiles }
    }

    /// Wrap this store for sharing across handlers.
    pub fn into_shared(self) -> SharedProfileStore {
        Arc::new(RwLock::new(self))
    }

    pub fn all(&self) -> &[PlayerProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// First profile whose name matches `"{first_name} {surname}"`, ignoring case.
    pub fn find_by_name(&self, first_name: &str, surname: &str) -> Option<&PlayerProfile> {
        let found = self
            .profiles
            .iter()
            .find(|p| p.matches_name(first_name, surname));
        if found.is_none() {
            debug!("No profile for {} {}", first_name, surname);
        }
        found
    }

    /// First profile whose bio carries `id`.
    pub fn find_by_id(&self, id: PlayerId) -> Option<&PlayerProfile> {
        self.profiles.iter().find(|p| p.bio.player_id == id)
    }

    /// Remove every profile matching the name. Returns how many were removed.
    pub fn remove_by_name(&mut self, first_name: &str, surname: &str) -> usize {
        let before = self.profiles.len();
        self.profiles
            .retain(|p| !p.matches_name(first_name, surname));
        let removed = before - self.profiles.len();

        info!(
            "Removed {} profile(s) for {} {}",
            removed, first_name, surname
        );
        removed
    }

    /// Highest player id currently in the store.
    pub fn max_id(&self) -> Option<PlayerId> {
        self.profiles.iter().map(|p| p.bio.player_id).max()
    }

    /// Append a new player with the next free id.
    ///
    /// Fails on an empty store, where there is no maximum id to follow, and
    /// when the maximum id has no successor.
    pub fn insert(&mut self, fields: BioFields) -> Result<Bio, StoreError> {
        let max_id = self.max_id().ok_or(StoreError::EmptyStore)?;
        let player_id = max_id.next().ok_or(StoreError::IdExhausted(max_id))?;

        let bio = fields.into_bio(player_id);
        self.profiles.push(blank_profile(bio.clone()));

        info!("Inserted {} with id {}", bio.name, bio.player_id);
        Ok(bio)
    }

    /// Replace the bio of the player with `id`.
    ///
    /// The updated profile moves to the end of the store. Season stats are
    /// kept; the profile's key name follows the new bio name.
    pub fn update(&mut self, id: PlayerId, fields: BioFields) -> Result<Bio, StoreError> {
        let index = self
            .profiles
            .iter()
            .position(|p| p.bio.player_id == id)
            .ok_or(StoreError::NotFound(id))?;

        let mut profile = self.profiles.remove(index);
        profile.bio = fields.into_bio(id);
        profile.name = profile.bio.name.clone();

        let bio = profile.bio.clone();
        self.profiles.push(profile);

        info!("Updated bio for id {} ({})", id, bio.name);
        Ok(bio)
    }

    /// One section of every profile, in store order.
    pub fn project(&self, section: Section) -> Vec<ProjectedEntry> {
        self.profiles
            .iter()
            .map(|p| ProjectedEntry {
                name: p.name.clone(),
                section: p.section(section),
            })
            .collect()
    }

    /// Every bio, in store order.
    pub fn bios(&self) -> Vec<Bio> {
        self.profiles.iter().map(|p| p.bio.clone()).collect()
    }
}
