//! In-memory player registry.
//!
//! Holds one [`Player`] record per name behind an async lock. The transport
//! layer fetches, runs the scoring engine, and persists through this store;
//! the engine never calls it. [`PlayerStore::update`] runs a closure under
//! the write lock, so the fetch-validate-apply-persist sequence is atomic
//! per player and no cross-player coordination is ever needed.

use std::collections::HashMap;

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::game::entities::{GameState, Player, PlayerId};

/// Default cap on concurrently tracked players.
pub const DEFAULT_MAX_PLAYERS: usize = 256;

/// Errors that can occur during store operations.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum StoreError {
    #[error("player already exists")]
    PlayerAlreadyExists,
    #[error("player does not exist")]
    PlayerNotFound,
    #[error("player limit reached")]
    CapacityReached,
}

/// Registry of player records indexed by name.
pub struct PlayerStore {
    players: RwLock<HashMap<String, Player>>,
    next_player_id: RwLock<PlayerId>,
    max_players: usize,
}

impl Default for PlayerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerStore {
    #[must_use]
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_MAX_PLAYERS)
    }

    /// A store that refuses new players beyond `max_players`.
    #[must_use]
    pub fn with_limit(max_players: usize) -> Self {
        Self {
            players: RwLock::new(HashMap::new()),
            next_player_id: RwLock::new(1),
            max_players,
        }
    }

    /// Create a player with a fresh, empty game.
    pub async fn create(&self, name: &str) -> Result<Player, StoreError> {
        let mut players = self.players.write().await;
        if players.contains_key(name) {
            return Err(StoreError::PlayerAlreadyExists);
        }
        if players.len() >= self.max_players {
            return Err(StoreError::CapacityReached);
        }

        let mut next_id = self.next_player_id.write().await;
        let id = *next_id;
        *next_id += 1;
        drop(next_id);

        let player = Player {
            id,
            name: name.to_string(),
            game: GameState::new(),
        };
        players.insert(name.to_string(), player.clone());
        info!("created player {name} with id {id}");
        Ok(player)
    }

    /// Fetch a snapshot of a player record.
    pub async fn get(&self, name: &str) -> Result<Player, StoreError> {
        self.players
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or(StoreError::PlayerNotFound)
    }

    /// Snapshot of all player records, in creation order.
    pub async fn list(&self) -> Vec<Player> {
        let players = self.players.read().await;
        let mut all: Vec<Player> = players.values().cloned().collect();
        all.sort_by_key(|player| player.id);
        all
    }

    /// Run `f` against a player record under the write lock.
    pub async fn update<F, T>(&self, name: &str, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Player) -> T,
    {
        let mut players = self.players.write().await;
        let player = players.get_mut(name).ok_or(StoreError::PlayerNotFound)?;
        Ok(f(player))
    }

    /// Remove a player record.
    pub async fn delete(&self, name: &str) -> Result<(), StoreError> {
        let removed = self.players.write().await.remove(name);
        match removed {
            Some(player) => {
                info!("deleted player {name} with id {}", player.id);
                Ok(())
            }
            None => Err(StoreError::PlayerNotFound),
        }
    }

    /// Number of tracked players.
    pub async fn player_count(&self) -> usize {
        self.players.read().await.len()
    }
}
