/*
type Match = {
    match_id: string,
    competition_name: string,
    faceit_url: string,            // contains a {lang} placeholder
    teams: { faction1: Faction, faction2: Faction },
    results: { winner: string, score: { faction1: number, faction2: number } },
    voting?: { map: { entities: MapEntity[], pick: string[] } },
    detailed_results: { winner: string, factions: { faction1: { score: number }, faction2: { score: number } } }[],
}
 */

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MatchRsp {
    #[serde(default)]
    pub match_id: String,
    #[serde(default)]
    pub competition_name: String,
    #[serde(default)]
    pub faceit_url: String,
    pub teams: Teams,
    #[serde(default)]
    pub results: MatchResults,
    #[serde(default)]
    pub voting: Option<Voting>,
    #[serde(default)]
    pub detailed_results: Vec<DetailedResult>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Teams {
    pub faction1: Faction,
    pub faction2: Faction,
}

impl Teams {
    pub fn iter(&self) -> impl Iterator<Item = &Faction> {
        [&self.faction1, &self.faction2].into_iter()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Faction {
    pub faction_id: String,
    pub name: String,
    #[serde(default)]
    pub roster: Vec<RosterPlayer>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RosterPlayer {
    pub player_id: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub game_player_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct MatchResults {
    #[serde(default)]
    pub winner: String,
    #[serde(default)]
    pub score: FactionScore,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct FactionScore {
    #[serde(default)]
    pub faction1: i32,
    #[serde(default)]
    pub faction2: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Voting {
    #[serde(default)]
    pub map: Option<MapVoting>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct MapVoting {
    #[serde(default)]
    pub entities: Vec<MapEntity>,
    #[serde(default)]
    pub pick: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MapEntity {
    pub game_map_id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DetailedResult {
    #[serde(default)]
    pub winner: String,
    pub factions: DetailedFactions,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DetailedFactions {
    pub faction1: DetailedScore,
    pub faction2: DetailedScore,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DetailedScore {
    #[serde(default)]
    pub score: i32,
}

impl MatchRsp {
    pub fn get_map_entities(&self) -> &[MapEntity] {
        self.voting.as_ref()
            .and_then(|e| e.map.as_ref())
            .map(|e| e.entities.as_slice())
            .unwrap_or_default()
    }

    pub fn get_picked_maps(&self) -> &[String] {
        self.voting.as_ref()
            .and_then(|e| e.map.as_ref())
            .map(|e| e.pick.as_slice())
            .unwrap_or_default()
    }
}
