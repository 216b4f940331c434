use axum::{extract::State, response::Html, Json};
use log::debug;

use crate::{
    core::{geo::LatLng, map::Map},
    data::location::PhotoLocation,
    rendering::page::render_page,
    server::{error::ServerResult, AppState},
};

/// Map page with a marker per stored picture.
pub async fn index(State(state): State<AppState>) -> ServerResult<Html<String>> {
    let locations = load_locations(&state).await?;

    let mut map = Map::from_config(&state.map)?;
    if state.map.center_on_locations {
        if let Some(center) = LatLng::average(locations.iter().map(PhotoLocation::position)) {
            map.set_view(center, map.zoom());
        }
    }
    map.add_markers(&locations)?;

    Ok(Html(render_page(&map)?))
}

/// Stored locations as JSON.
pub async fn locations(State(state): State<AppState>) -> ServerResult<Json<Vec<PhotoLocation>>> {
    Ok(Json(load_locations(&state).await?))
}

async fn load_locations(state: &AppState) -> ServerResult<Vec<PhotoLocation>> {
    let rows = state.db.select_all().await?;
    debug!("Loaded {} locations", rows.len());
    Ok(rows.iter().map(PhotoLocation::from).collect())
}
