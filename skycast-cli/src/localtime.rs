//! Local-time helpers for presenting an observation in the queried place.
//!
//! The zone is a solar approximation: longitude divided by 15°, rounded to
//! the nearest whole hour, labeled `UTC±HH:MM`. Political timezone borders
//! need a boundary dataset; wall-clock minutes do not.

use chrono::{DateTime, FixedOffset, Utc};
use skycast_core::Coordinates;

/// Sunrise and sunset shifted into the queried place's local clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunTimes {
    pub sunrise: DateTime<FixedOffset>,
    pub sunset: DateTime<FixedOffset>,
}

/// Resolve a zone label and the current local wall-clock time for the
/// coordinates. `None` when no offset can be derived.
pub fn resolve_timezone(coordinates: Coordinates) -> Option<(String, String)> {
    let offset = solar_offset(coordinates)?;
    let local_time = Utc::now().with_timezone(&offset).format("%H:%M").to_string();

    Some((format!("UTC{offset}"), local_time))
}

/// Shift UTC sunrise/sunset instants into the local clock at `coordinates`.
pub fn localize_sun_times(
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
    coordinates: Coordinates,
) -> Option<SunTimes> {
    let offset = solar_offset(coordinates)?;

    Some(SunTimes {
        sunrise: sunrise.with_timezone(&offset),
        sunset: sunset.with_timezone(&offset),
    })
}

fn solar_offset(coordinates: Coordinates) -> Option<FixedOffset> {
    let hours = (coordinates.longitude / 15.0).round() as i32;
    FixedOffset::east_opt(hours * 3600)
}
