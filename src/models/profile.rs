//! Player profile model: bio, offensive and defensive sections.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::PlayerId;

/// A player's complete season overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Key name, always equal to `bio.name`
    pub name: String,
    pub bio: Bio,
    pub offense: Offense,
    pub defense: Defense,
}

impl PlayerProfile {
    /// Whether `"{first_name} {surname}"` names this player, ignoring case.
    pub fn matches_name(&self, first_name: &str, surname: &str) -> bool {
        let requested = format!("{} {}", first_name, surname);
        self.name.to_lowercase() == requested.to_lowercase()
    }

    /// Clone out a single section.
    pub fn section(&self, section: Section) -> SectionData {
        match section {
            Section::Bio => SectionData::Bio(self.bio.clone()),
            Section::Offense => SectionData::Offense(self.offense.clone()),
            Section::Defense => SectionData::Defense(self.defense.clone()),
        }
    }
}

/// Biographical details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bio {
    pub name: String,
    pub player_id: PlayerId,
    pub position: String,
    pub age: u32,
    pub team: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Appearances {
    pub games_played: u32,
    pub mins_played: u32,
}

/// Offensive season stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offense {
    pub appearances: Appearances,
    pub total_points: u32,
    pub points_per_game: Option<f64>,
    pub field_goals: FieldGoals,
    #[serde(rename = "3_pointers")]
    pub three_pointers: ThreePointers,
    #[serde(rename = "2_pointers")]
    pub two_pointers: TwoPointers,
    pub effective_field_goal_percentage: Option<f64>,
    pub free_throws: FreeThrows,
    pub assists: Assists,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldGoals {
    #[serde(rename = "field_goal_attempts")]
    pub attempts: u32,
    #[serde(rename = "field_goals")]
    pub made: u32,
    #[serde(rename = "field_goal_percentage")]
    pub percentage: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThreePointers {
    #[serde(rename = "3_point_attempts")]
    pub attempts: u32,
    #[serde(rename = "3_point_shots_made")]
    pub made: u32,
    #[serde(rename = "3_point_percentage")]
    pub percentage: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoPointers {
    #[serde(rename = "2_point_attempts")]
    pub attempts: u32,
    #[serde(rename = "2_point_shots_made")]
    pub made: u32,
    #[serde(rename = "2_point_percentage")]
    pub percentage: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FreeThrows {
    #[serde(rename = "free_throw_attempts")]
    pub attempts: u32,
    #[serde(rename = "free_throws_made")]
    pub made: u32,
    #[serde(rename = "free_throws_percentage")]
    pub percentage: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assists {
    pub total_assists: u32,
    pub assists_per_game: Option<f64>,
}

/// Defensive season stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defense {
    pub appearances: Appearances,
    pub rebounding: Rebounding,
    pub steals: Steals,
    pub blocks: Blocks,
    pub turnovers: Turnovers,
    pub fouls: Fouls,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rebounding {
    pub total_rebounds: u32,
    pub offensive_rebounds: u32,
    pub offensive_rebounds_per_game: Option<f64>,
    pub defensive_rebounds: u32,
    pub defensive_rebounds_per_game: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Steals {
    pub steals: u32,
    pub steals_per_game: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Blocks {
    pub blocks: u32,
    pub blocks_per_game: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Turnovers {
    pub turnovers: u32,
    pub turnovers_per_game: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fouls {
    pub fouls: u32,
    pub fouls_per_game: Option<f64>,
}

/// One of the three profile sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Bio,
    Offense,
    Defense,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Bio => write!(f, "bio"),
            Section::Offense => write!(f, "offense"),
            Section::Defense => write!(f, "defense"),
        }
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bio" => Ok(Section::Bio),
            "offense" => Ok(Section::Offense),
            "defense" => Ok(Section::Defense),
            other => Err(format!(
                "unknown section '{}', expected bio, offense or defense",
                other
            )),
        }
    }
}

/// The contents of a single section, tagged by section name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionData {
    Bio(Bio),
    Offense(Offense),
    Defense(Defense),
}

/// A player's name paired with one section of their profile.
///
/// Serializes as `{"name": "...", "<section>": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedEntry {
    pub name: String,
    #[serde(flatten)]
    pub section: SectionData,
}
