use tracing::log;

use crate::{models_external::match_rsp::MatchRsp, rest_client::FaceitClient};

pub const UNKNOWN_TEAM: &str = "Failed to get Team Name";
pub const UNKNOWN_MAP: &str = "Failed to get Map Name";

const GAME: &str = "ow2";

impl MatchRsp {
    pub fn get_team_name(&self, faction_id: &str) -> &str {
        self.teams.iter()
            .find(|e| e.faction_id == faction_id)
            .map(|e| e.name.as_str())
            .unwrap_or(UNKNOWN_TEAM)
    }

    pub fn get_map_name(&self, map_id: &str) -> &str {
        self.get_map_entities().iter()
            .find(|e| e.game_map_id == map_id)
            .map(|e| e.name.as_str())
            .unwrap_or(UNKNOWN_MAP)
    }

    pub fn get_roster_name(&self, player_id: &str) -> Option<&str> {
        self.teams.iter()
            .flat_map(|e| e.roster.iter())
            .find(|e| e.player_id == player_id)
            .map(|e| e.game_player_name.as_str())
    }
}

pub struct LookupService;
impl LookupService {
    /// Roster name when the player is registered for either team, otherwise
    /// one player-details call. Nothing is cached between calls.
    pub async fn get_player_name(client: &FaceitClient, game: &MatchRsp, player_id: &str) -> anyhow::Result<String> {
        if let Some(name) = game.get_roster_name(player_id) {
            return Ok(name.to_string());
        }
        log::info!("[LOOKUP] {player_id} not in roster, fetching player details");
        let details = client.get_player(player_id).await?;
        Ok(details.get_game_player_name(GAME).to_string())
    }
}
