use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::config::DeleteMode;
use crate::models::{Bio, Defense, Offense, PlayerId, PlayerProfile, ProjectedEntry, Section};
use crate::store::BioFields;

/// Optional `first_name`/`surname` pair narrowing a request to one player.
#[derive(Debug, Default, Deserialize)]
pub struct NameParams {
    pub first_name: Option<String>,
    pub surname: Option<String>,
}

impl NameParams {
    /// Both names, neither, or a bad request when only one is given.
    pub fn name(&self) -> Result<Option<(&str, &str)>, ApiError> {
        match (self.first_name.as_deref(), self.surname.as_deref()) {
            (Some(first), Some(last)) => Ok(Some((first, last))),
            (None, None) => Ok(None),
            (Some(_), None) => Err(ApiError::BadRequest("surname is required".to_string())),
            (None, Some(_)) => Err(ApiError::BadRequest("first_name is required".to_string())),
        }
    }

    fn require_name(&self) -> Result<(&str, &str), ApiError> {
        self.name()?.ok_or_else(|| {
            ApiError::BadRequest("first_name and surname are required".to_string())
        })
    }
}

/// Either a single player's data or the listing for every player.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PlayerLookup<One, Many> {
    One(One),
    Many(Vec<Many>),
}

fn player_not_found(first_name: &str, surname: &str) -> ApiError {
    ApiError::NotFound(format!("Player not found: {} {}", first_name, surname))
}

pub async fn list_players(
    State(state): State<AppState>,
    Query(params): Query<NameParams>,
) -> Result<Json<PlayerLookup<PlayerProfile, PlayerProfile>>, ApiError> {
    let store = state.store.read().await;

    match params.name()? {
        Some((first, last)) => store
            .find_by_name(first, last)
            .cloned()
            .map(|p| Json(PlayerLookup::One(p)))
            .ok_or_else(|| player_not_found(first, last)),
        None => Ok(Json(PlayerLookup::Many(store.all().to_vec()))),
    }
}

pub async fn get_bios(
    State(state): State<AppState>,
    Query(params): Query<NameParams>,
) -> Result<Json<PlayerLookup<Bio, Bio>>, ApiError> {
    let store = state.store.read().await;

    match params.name()? {
        Some((first, last)) => store
            .find_by_name(first, last)
            .map(|p| Json(PlayerLookup::One(p.bio.clone())))
            .ok_or_else(|| player_not_found(first, last)),
        None => Ok(Json(PlayerLookup::Many(store.bios()))),
    }
}

pub async fn get_offense(
    State(state): State<AppState>,
    Query(params): Query<NameParams>,
) -> Result<Json<PlayerLookup<Offense, ProjectedEntry>>, ApiError> {
    section_lookup(&state, &params, Section::Offense, |p| p.offense.clone()).await
}

pub async fn get_defense(
    State(state): State<AppState>,
    Query(params): Query<NameParams>,
) -> Result<Json<PlayerLookup<Defense, ProjectedEntry>>, ApiError> {
    section_lookup(&state, &params, Section::Defense, |p| p.defense.clone()).await
}

/// One player's section by name, or the section for every player.
async fn section_lookup<T>(
    state: &AppState,
    params: &NameParams,
    section: Section,
    pick: fn(&PlayerProfile) -> T,
) -> Result<Json<PlayerLookup<T, ProjectedEntry>>, ApiError> {
    let store = state.store.read().await;

    match params.name()? {
        Some((first, last)) => store
            .find_by_name(first, last)
            .map(|p| Json(PlayerLookup::One(pick(p))))
            .ok_or_else(|| player_not_found(first, last)),
        None => Ok(Json(PlayerLookup::Many(store.project(section)))),
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub removed: usize,
}

fn deleted_message(first_name: &str, surname: &str) -> String {
    format!(
        "{} {}'s stats for the 22/23 season have been deleted!",
        first_name, surname
    )
}

pub async fn delete_players(
    State(state): State<AppState>,
    Query(params): Query<NameParams>,
) -> Result<Response, ApiError> {
    let (first, last) = params.require_name()?;
    let removed = state.store.write().await.remove_by_name(first, last);
    let message = deleted_message(first, last);

    match state.config.store.delete_mode {
        DeleteMode::Lenient => Ok(Json(message).into_response()),
        DeleteMode::Counted if removed == 0 => Err(player_not_found(first, last)),
        DeleteMode::Counted => Ok(Json(DeleteResponse { message, removed }).into_response()),
    }
}

/// Body of a bio update. The id selects the player to change.
#[derive(Debug, Deserialize)]
pub struct UpdateBioRequest {
    pub player_id: PlayerId,
    #[serde(flatten)]
    pub fields: BioFields,
}

fn require_text(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::BadRequest(format!("{} must not be empty", field)));
    }
    Ok(())
}

fn validate_bio_fields(name: &str, position: &str, team: &str) -> Result<(), ApiError> {
    require_text("name", name)?;
    require_text("position", position)?;
    require_text("team", team)
}

pub async fn create_bio(
    State(state): State<AppState>,
    Json(body): Json<BioFields>,
) -> Result<(StatusCode, Json<Bio>), ApiError> {
    validate_bio_fields(&body.name, &body.position, &body.team)?;

    let bio = state.store.write().await.insert(body)?;
    Ok((StatusCode::CREATED, Json(bio)))
}

pub async fn update_bio(
    State(state): State<AppState>,
    Json(body): Json<UpdateBioRequest>,
) -> Result<Json<Bio>, ApiError> {
    let fields = body.fields;
    validate_bio_fields(&fields.name, &fields.position, &fields.team)?;

    let bio = state.store.write().await.update(body.player_id, fields)?;
    Ok(Json(bio))
}
