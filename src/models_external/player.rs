use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PlayerRsp {
    #[serde(default)]
    pub player_id: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub games: HashMap<String, PlayerGame>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PlayerGame {
    #[serde(default)]
    pub game_player_id: String,
    #[serde(default)]
    pub game_player_name: String,
}

impl PlayerRsp {
    /// In-game name for `game`, or the FACEIT nickname when the player
    /// has no profile for it.
    pub fn get_game_player_name(&self, game: &str) -> &str {
        self.games.get(game)
            .map(|e| e.game_player_name.as_str())
            .filter(|e| !e.is_empty())
            .unwrap_or(self.nickname.as_str())
    }
}
