/*
type MatchStats = {
    rounds: {
        round_stats: { Map: string, Winner: string, 'OW2 Mode': string, 'Score Summary': string },
        teams: {
            team_id: string,
            players: { player_id: string, nickname: string, player_stats: Record<string, string | number> }[],
        }[],
    }[],
}
 */

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::StringOrNum;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct MatchStatsRsp {
    #[serde(default)]
    pub rounds: Vec<Round>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Round {
    pub round_stats: RoundStats,
    #[serde(default)]
    pub teams: Vec<RoundTeam>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RoundStats {
    #[serde(rename = "Map", default)]
    pub map: String,
    #[serde(rename = "Winner", default)]
    pub winner: String,
    #[serde(rename = "OW2 Mode", default)]
    pub mode: String,
    #[serde(rename = "Score Summary", default)]
    pub score_summary: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RoundTeam {
    pub team_id: String,
    #[serde(default)]
    pub players: Vec<RoundPlayer>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RoundPlayer {
    pub player_id: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub player_stats: HashMap<String, StringOrNum>,
}
