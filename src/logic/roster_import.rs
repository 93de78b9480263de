//! Roster import from CSV (`name,gender,grade,rating,division,level`).

use crate::models::{Division, Gender, Player, TeamId, TeamLevel, Tournament, TournamentError};
use serde::Deserialize;
use std::io;
use std::str::FromStr;

#[derive(Debug, Deserialize)]
struct RosterRow {
    name: String,
    #[serde(default)]
    gender: Option<String>,
    #[serde(default)]
    grade: Option<String>,
    #[serde(default)]
    rating: Option<String>,
    #[serde(default)]
    division: Option<String>,
    #[serde(default)]
    level: Option<String>,
}

/// Parse players from CSV with a header row. Only `name` is required.
///
/// Errors name the 1-based data row that failed.
pub fn import_roster<R: io::Read>(reader: R) -> Result<Vec<Player>, TournamentError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut players = Vec::new();
    for (i, row) in rdr.deserialize::<RosterRow>().enumerate() {
        let row_no = i + 1;
        let row = row.map_err(|e| TournamentError::RosterImport {
            row: row_no,
            reason: e.to_string(),
        })?;
        let player = player_from_row(row).map_err(|e| TournamentError::RosterImport {
            row: row_no,
            reason: e.to_string(),
        })?;
        players.push(player);
    }
    log::debug!("Imported {} players from CSV", players.len());
    Ok(players)
}

pub fn import_roster_str(csv: &str) -> Result<Vec<Player>, TournamentError> {
    import_roster(csv.as_bytes())
}

/// Import a CSV roster into one team. All rows must parse before any player is added.
pub fn import_team_roster(
    tournament: &mut Tournament,
    team_id: TeamId,
    csv: &str,
) -> Result<usize, TournamentError> {
    let players = import_roster_str(csv)?;
    let team = tournament
        .team_mut(team_id)
        .ok_or(TournamentError::TeamNotFound(team_id))?;
    let mut staged = team.clone();
    for p in players {
        staged.add_player(p)?;
    }
    let added = staged.players.len() - team.players.len();
    *team = staged;
    log::info!("Added {added} players to team {team_id}");
    Ok(added)
}

fn player_from_row(row: RosterRow) -> Result<Player, TournamentError> {
    let mut player = Player::new(row.name);
    player.gender = parse_opt::<Gender>(row.gender)?;
    player.division_preference = parse_opt::<Division>(row.division)?;
    player.level = parse_opt::<TeamLevel>(row.level)?;
    player.grade = non_empty(row.grade)
        .map(|g| {
            g.parse::<u8>().map_err(|_| TournamentError::InvalidEntity {
                entity: "player",
                field: "grade",
                reason: format!("'{g}' is not a grade"),
            })
        })
        .transpose()?;
    player.rating = non_empty(row.rating)
        .map(|r| {
            r.parse::<f64>().map_err(|_| TournamentError::InvalidEntity {
                entity: "player",
                field: "rating",
                reason: format!("'{r}' is not a number"),
            })
        })
        .transpose()?;
    player.validate()?;
    Ok(player)
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}

fn parse_opt<T>(field: Option<String>) -> Result<Option<T>, TournamentError>
where
    T: FromStr<Err = TournamentError>,
{
    non_empty(field).map(|s| s.parse()).transpose()
}
