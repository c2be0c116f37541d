//! Error types for the player feed

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Player not found: {player_id}")]
    PlayerNotFound { player_id: String },

    #[error("Feed parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
