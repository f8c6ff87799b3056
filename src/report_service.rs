use std::fmt::{Display, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::log;

use crate::{
    lookup_service::UNKNOWN_MAP,
    models_external::match_rsp::MatchRsp,
    rest_client::FaceitClient,
    scoreboard_service::{MapScoreboard, ScoreboardService, TeamScoreboard},
};

const STATS_HEADER: &str = "|E|A|D|K/D|DMG|H|MIT|";
const STATS_ALIGN: &str = "--:|:--:|:--:|:--:|:--:|:--:|:--:|:--:";
const STAT_KEYS: [&str; 7] = [
    "Eliminations",
    "Assists",
    "Deaths",
    "K/D Ratio",
    "Damage Dealt",
    "Healing Done",
    "Damage Mitigated",
];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub body: String,
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.title, self.body)
    }
}

impl Report {
    pub fn get_file_name(&self) -> String {
        format!("{}.md", sanitize_file_name(&self.title))
    }
}

pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect()
}

pub fn generate_title(game: &MatchRsp) -> String {
    format!("{} vs. {} / {} / Post-Match Discussion",
        game.teams.faction1.name,
        game.teams.faction2.name,
        game.competition_name
    )
}

pub fn generate_header(game: &MatchRsp, lang: &str) -> String {
    let score = &game.results.score;
    format!("###{}\n[FACEIT Match Overview]({})\n\n---\n###{} {}-{} {}\n---\n",
        game.competition_name,
        game.faceit_url.replace("{lang}", lang),
        game.teams.faction1.name,
        score.faction1,
        score.faction2,
        game.teams.faction2.name,
    )
}

/// Map names follow the pick order of the map vote; `detailed_results`
/// is in the order the maps were played.
pub fn generate_map_scores(game: &MatchRsp) -> String {
    let score = &game.results.score;
    let mut table = format!("|{}|{}-{}|{}|\n|--:|:--:|:--|\n",
        game.teams.faction1.name,
        score.faction1,
        score.faction2,
        game.teams.faction2.name,
    );

    let picked_maps = game.get_picked_maps();
    for (i, result) in game.detailed_results.iter().enumerate() {
        let map_name = picked_maps.get(i)
            .map(|e| game.get_map_name(e))
            .unwrap_or(UNKNOWN_MAP);
        _ = writeln!(table, "|{}|{}|{}|",
            result.factions.faction1.score,
            map_name,
            result.factions.faction2.score,
        );
    }
    table
}

fn generate_team_scoreboard(team: &TeamScoreboard) -> String {
    let mut out = format!("{}{STATS_HEADER}\n{STATS_ALIGN}\n", team.name);
    for p in &team.players {
        out.push_str(&p.name);
        out.push('|');
        for key in STAT_KEYS {
            out.push_str(&p.get_stat(key));
            out.push('|');
        }
        out.push('\n');
    }
    out
}

pub fn generate_map_scoreboards(boards: &[MapScoreboard]) -> String {
    let mut out = String::new();
    for (i, board) in boards.iter().enumerate() {
        _ = write!(out, "###MAP {}: {} - {}  \n**Winner: {}** - {}\n\n",
            i + 1,
            board.mode,
            board.map_name,
            board.winner,
            board.score_summary,
        );
        let teams: Vec<String> = board.teams.iter().map(generate_team_scoreboard).collect();
        out.push_str(&teams.join("\n\n"));
        out.push_str("---\n");
    }
    out
}

pub struct ReportService;
impl ReportService {
    pub async fn generate(client: &FaceitClient, match_id: &str, lang: &str) -> anyhow::Result<Report> {
        let before = Instant::now();
        let game = client.get_match(match_id).await
            .with_context(|| format!("Failed to fetch match {match_id}"))?;
        let stats = client.get_match_stats(match_id).await
            .with_context(|| format!("Failed to fetch stats for {match_id}"))?;
        let boards = ScoreboardService::build(client, &game, &stats).await?;

        let report = ReportService::render(&game, &boards, lang);
        log::info!("[REPORT] Generated {} {:.2?}", report.title, before.elapsed());
        Ok(report)
    }

    pub fn render(game: &MatchRsp, boards: &[MapScoreboard], lang: &str) -> Report {
        let mut body = generate_header(game, lang);
        body.push_str(&generate_map_scores(game));
        body.push('\n');
        body.push_str(&generate_map_scoreboards(boards));
        Report { title: generate_title(game), body }
    }

    pub fn write(report: &Report, dir: &Path) -> anyhow::Result<PathBuf> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        let path = dir.join(report.get_file_name());
        std::fs::write(&path, &report.body)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("[REPORT] Wrote {}", path.display());
        Ok(path)
    }
}
