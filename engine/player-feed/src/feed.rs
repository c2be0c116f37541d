use crate::error::FeedError;
use crate::types::Player;
use tracing::info;

/// Ordered collection of player records.
///
/// Feed order is significant: the ranking engine breaks metric ties by the
/// position a record holds here, so the feed never reorders on ingest.
#[derive(Debug, Clone, Default)]
pub struct PlayerFeed {
    players: Vec<Player>,
}

impl PlayerFeed {
    /// Create a feed from in-memory records, preserving their order
    pub fn from_players(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// Parse a feed from its JSON document form
    pub fn from_json(json: &str) -> Result<Self, FeedError> {
        let players: Vec<Player> = serde_json::from_str(json)?;
        info!("Loaded {} players from feed document", players.len());
        Ok(Self { players })
    }

    /// All records in feed order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a single player by feed id
    pub fn get(&self, player_id: &str) -> Result<&Player, FeedError> {
        self.players.iter().find(|p| p.id == player_id).ok_or_else(|| {
            FeedError::PlayerNotFound { player_id: player_id.to_string() }
        })
    }

    /// Case-insensitive partial name search, preserving feed order
    pub fn search(&self, query: &str) -> Vec<&Player> {
        let query_lower = query.to_lowercase();
        self.players.iter().filter(|p| p.name.to_lowercase().contains(&query_lower)).collect()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_players;

    #[test]
    fn test_feed_preserves_order() {
        let players = sample_players();
        let ids: Vec<String> = players.iter().map(|p| p.id.clone()).collect();

        let feed = PlayerFeed::from_players(players);
        let feed_ids: Vec<&str> = feed.players().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(feed_ids, ids.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_get_by_id() {
        let feed = PlayerFeed::from_players(sample_players());

        let player = feed.get("1").unwrap();
        assert_eq!(player.name, "A'ja Wilson");

        let missing = feed.get("999");
        assert!(matches!(missing, Err(FeedError::PlayerNotFound { .. })));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let feed = PlayerFeed::from_players(sample_players());

        let results = feed.search("caitlin");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Caitlin Clark");

        let results = feed.search("STEWART");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Breanna Stewart");
    }

    #[test]
    fn test_from_json_round_trip() {
        let players = sample_players();
        let json = serde_json::to_string(&players).unwrap();

        let feed = PlayerFeed::from_json(&json).unwrap();
        assert_eq!(feed.len(), players.len());
        assert_eq!(feed.players()[0], players[0]);
    }

    #[test]
    fn test_from_json_rejects_malformed_document() {
        assert!(matches!(PlayerFeed::from_json("not json"), Err(FeedError::Parse(_))));
    }
}
