use std::collections::HashMap;

use anyhow::anyhow;

use crate::{
    lookup_service::LookupService,
    models::StringOrNum,
    models_external::{match_rsp::MatchRsp, match_stats::{MatchStatsRsp, RoundTeam}},
    rest_client::FaceitClient,
};

/// Scoreboard order: Tank, Damage, Support. Anything else goes last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Role {
    Tank,
    Damage,
    Support,
    Other,
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value {
            "Tank" => Role::Tank,
            "Damage" => Role::Damage,
            "Support" => Role::Support,
            _ => Role::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlayer {
    pub name: String,
    pub stats: HashMap<String, StringOrNum>,
}

impl ResolvedPlayer {
    pub fn get_role(&self) -> Role {
        self.stats.get("Role")
            .map(|e| Role::from(e.to_str().as_str()))
            .unwrap_or(Role::Other)
    }

    pub fn get_stat(&self, key: &str) -> String {
        self.stats.get(key)
            .map(|e| e.to_str())
            .unwrap_or_else(|| "-".to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamScoreboard {
    pub name: String,
    pub players: Vec<ResolvedPlayer>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapScoreboard {
    pub mode: String,
    pub map_name: String,
    pub winner: String,
    pub score_summary: String,
    pub teams: Vec<TeamScoreboard>,
}

pub struct ScoreboardService;
impl ScoreboardService {
    pub async fn build(client: &FaceitClient, game: &MatchRsp, stats: &MatchStatsRsp) -> anyhow::Result<Vec<MapScoreboard>> {
        let mut boards = Vec::with_capacity(stats.rounds.len());
        for round in &stats.rounds {
            let mut teams = Vec::with_capacity(round.teams.len());
            for team in &round.teams {
                teams.push(TeamScoreboard {
                    name: game.get_team_name(&team.team_id).to_string(),
                    players: ScoreboardService::resolve_team(client, game, team).await?,
                });
            }
            boards.push(MapScoreboard {
                mode: round.round_stats.mode.clone(),
                map_name: game.get_map_name(&round.round_stats.map).to_string(),
                winner: game.get_team_name(&round.round_stats.winner).to_string(),
                score_summary: round.round_stats.score_summary.clone(),
                teams,
            });
        }
        Ok(boards)
    }

    pub async fn get_team_stats(
        client: &FaceitClient,
        game: &MatchRsp,
        stats: &MatchStatsRsp,
        map_index: usize,
        team_index: usize,
    ) -> anyhow::Result<Vec<ResolvedPlayer>> {
        let team = stats.rounds.get(map_index)
            .and_then(|e| e.teams.get(team_index))
            .ok_or_else(|| anyhow!("No team {team_index} on map {map_index}"))?;
        ScoreboardService::resolve_team(client, game, team).await
    }

    async fn resolve_team(client: &FaceitClient, game: &MatchRsp, team: &RoundTeam) -> anyhow::Result<Vec<ResolvedPlayer>> {
        let mut players = Vec::with_capacity(team.players.len());
        for p in &team.players {
            players.push(ResolvedPlayer {
                name: LookupService::get_player_name(client, game, &p.player_id).await?,
                stats: p.player_stats.clone(),
            });
        }
        ScoreboardService::sort(&mut players);
        Ok(players)
    }

    pub fn sort(players: &mut [ResolvedPlayer]) {
        players.sort_by(|a, b| {
            a.get_role().cmp(&b.get_role())
                .then_with(|| a.name.cmp(&b.name))
        });
    }
}
