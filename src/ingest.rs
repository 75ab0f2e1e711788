//! Profile building pipeline.
//!
//! Turns raw season rows into nested player profiles. Runs once at
//! startup: season file → rows → profiles, preserving file order.

use std::path::Path;

use tracing::info;

use crate::calculate::per_game;
use crate::models::{
    Appearances, Assists, Bio, Blocks, Defense, FieldGoals, Fouls, FreeThrows, Offense,
    PlayerProfile, Rebounding, SeasonRow, Steals, ThreePointers, Turnovers, TwoPointers,
};
use crate::storage::{load_season_rows, StorageError};

/// Build a complete profile from one season row.
pub fn build_profile(row: &SeasonRow) -> PlayerProfile {
    PlayerProfile {
        name: row.player.clone(),
        bio: build_bio(row),
        offense: build_offense(row),
        defense: build_defense(row),
    }
}

/// Build profiles for every row, in row order.
pub fn player_profiles(rows: &[SeasonRow]) -> Vec<PlayerProfile> {
    rows.iter().map(build_profile).collect()
}

/// Load the season file and build the initial profile set.
pub fn load_profiles(path: &Path) -> Result<Vec<PlayerProfile>, StorageError> {
    let rows = load_season_rows(path)?;
    let profiles = player_profiles(&rows);
    info!("Built {} player profiles", profiles.len());
    Ok(profiles)
}

/// Build a profile for a player with a bio but no recorded games.
///
/// All counting stats are zero, so per-game values and percentages are
/// absent.
pub fn blank_profile(bio: Bio) -> PlayerProfile {
    let row = SeasonRow {
        player: bio.name.clone(),
        rank: bio.player_id.get(),
        position: bio.position.clone(),
        age: bio.age,
        team: bio.team.clone(),
        ..Default::default()
    };
    let mut profile = build_profile(&row);
    profile.bio = bio;
    profile
}

fn build_bio(row: &SeasonRow) -> Bio {
    Bio {
        name: row.player.clone(),
        player_id: row.rank.into(),
        position: row.position.clone(),
        age: row.age,
        team: row.team.clone(),
    }
}

fn appearances(row: &SeasonRow) -> Appearances {
    Appearances {
        games_played: row.games,
        mins_played: row.mins_played,
    }
}

fn build_offense(row: &SeasonRow) -> Offense {
    let games = row.games;

    // Shooting percentages come straight from the row, never recomputed
    Offense {
        appearances: appearances(row),
        total_points: row.points,
        points_per_game: per_game(row.points, games),
        field_goals: FieldGoals {
            attempts: row.field_goal_attempts,
            made: row.field_goals,
            percentage: row.field_goal_pct,
        },
        three_pointers: ThreePointers {
            attempts: row.three_point_attempts,
            made: row.three_pointers,
            percentage: row.three_point_pct,
        },
        two_pointers: TwoPointers {
            attempts: row.two_point_attempts,
            made: row.two_pointers,
            percentage: row.two_point_pct,
        },
        effective_field_goal_percentage: row.effective_fg_pct,
        free_throws: FreeThrows {
            attempts: row.free_throw_attempts,
            made: row.free_throws,
            percentage: row.free_throw_pct,
        },
        assists: Assists {
            total_assists: row.assists,
            assists_per_game: per_game(row.assists, games),
        },
    }
}

fn build_defense(row: &SeasonRow) -> Defense {
    let games = row.games;

    Defense {
        appearances: appearances(row),
        rebounding: Rebounding {
            total_rebounds: row.total_rebounds,
            offensive_rebounds: row.offensive_rebounds,
            offensive_rebounds_per_game: per_game(row.offensive_rebounds, games),
            defensive_rebounds: row.defensive_rebounds,
            defensive_rebounds_per_game: per_game(row.defensive_rebounds, games),
        },
        steals: Steals {
            steals: row.steals,
            steals_per_game: per_game(row.steals, games),
        },
        blocks: Blocks {
            blocks: row.blocks,
            blocks_per_game: per_game(row.blocks, games),
        },
        turnovers: Turnovers {
            turnovers: row.turnovers,
            turnovers_per_game: per_game(row.turnovers, games),
        },
        fouls: Fouls {
            fouls: row.fouls,
            fouls_per_game: per_game(row.fouls, games),
        },
    }
}

/// Row with round-number stats for tests.
#[cfg(test)]
pub(crate) fn sample_row(player: &str, rank: u32, games: u32) -> SeasonRow {
    SeasonRow {
        player: player.to_string(),
        rank,
        position: "SG".to_string(),
        age: 25,
        team: "BOS".to_string(),
        games,
        mins_played: games * 30,
        field_goals: 80,
        field_goal_attempts: 160,
        field_goal_pct: Some(0.5),
        three_pointers: 20,
        three_point_attempts: 50,
        three_point_pct: Some(0.4),
        two_pointers: 60,
        two_point_attempts: 110,
        two_point_pct: Some(0.545),
        effective_fg_pct: Some(0.563),
        free_throws: 20,
        free_throw_attempts: 25,
        free_throw_pct: Some(0.8),
        offensive_rebounds: 5,
        defensive_rebounds: 30,
        total_rebounds: 35,
        assists: 50,
        steals: 8,
        blocks: 2,
        turnovers: 12,
        fouls: 20,
        points: 200,
    }
}
