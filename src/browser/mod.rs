use anyhow::{Context, Result};

use crate::geo::Coordinate;

/// Build an OpenStreetMap URL centered on a coordinate
pub fn osm_url(coord: Coordinate) -> String {
    format!(
        "https://www.openstreetmap.org/?mlat={lat}&mlon={lng}#map=14/{lat}/{lng}",
        lat = coord.lat,
        lng = coord.lng
    )
}

/// Open a coordinate on OpenStreetMap in the user's default browser
///
/// # Errors
/// Returns error if browser cannot be opened (e.g., no browser available)
pub fn open_location(coord: Coordinate) -> Result<()> {
    let url = osm_url(coord);
    webbrowser::open(&url).with_context(|| format!("Failed to open browser for URL: {}", url))?;
    Ok(())
}
