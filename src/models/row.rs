//! Raw season statistics rows, as read from the season file.

use serde::Deserialize;

/// One player-season observation.
///
/// Field names follow the column headers of the season file. Counting
/// columns are whole numbers; percentage columns may be blank when the
/// player had no attempts.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SeasonRow {
    pub player: String,
    pub rank: u32,
    pub position: String,
    pub age: u32,
    pub team: String,

    pub games: u32,
    pub mins_played: u32,

    #[serde(rename = "FG")]
    pub field_goals: u32,
    #[serde(rename = "FGA")]
    pub field_goal_attempts: u32,
    #[serde(rename = "FG%")]
    pub field_goal_pct: Option<f64>,

    #[serde(rename = "3P")]
    pub three_pointers: u32,
    #[serde(rename = "3PA")]
    pub three_point_attempts: u32,
    #[serde(rename = "3P%")]
    pub three_point_pct: Option<f64>,

    #[serde(rename = "2P")]
    pub two_pointers: u32,
    #[serde(rename = "2PA")]
    pub two_point_attempts: u32,
    #[serde(rename = "2P%")]
    pub two_point_pct: Option<f64>,

    #[serde(rename = "eFG%")]
    pub effective_fg_pct: Option<f64>,

    #[serde(rename = "FT")]
    pub free_throws: u32,
    #[serde(rename = "FTA")]
    pub free_throw_attempts: u32,
    #[serde(rename = "FT%")]
    pub free_throw_pct: Option<f64>,

    #[serde(rename = "ORB")]
    pub offensive_rebounds: u32,
    #[serde(rename = "DRB")]
    pub defensive_rebounds: u32,
    #[serde(rename = "TRB")]
    pub total_rebounds: u32,

    #[serde(rename = "AST")]
    pub assists: u32,
    #[serde(rename = "STL")]
    pub steals: u32,
    #[serde(rename = "BLK")]
    pub blocks: u32,
    #[serde(rename = "TOV")]
    pub turnovers: u32,

    pub fouls: u32,
    pub points: u32,
}
