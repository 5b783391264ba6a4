use crate::*;

use serde::{Deserialize, Serialize};

pub const DEFAULT_IMAGE_ID: &str = "clickable-image";
pub const DEFAULT_X_FIELD_ID: &str = "id_x_coord";
pub const DEFAULT_Y_FIELD_ID: &str = "id_y_coord";
pub const DEFAULT_DECIMALS: usize = 2;

/// Decides what happens when the image is clicked while its bounding rectangle has no area (for
/// instance because it is hidden or its source failed to load).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateGeometry {
    /// Leave the coordinate fields untouched
    Skip,
    /// Write whatever the division produced, typically `NaN` or `Infinity`
    Write,
}

impl Default for DegenerateGeometry {
    fn default() -> Self {
        DegenerateGeometry::Skip
    }
}

/// The configuration of a `ClickCoordinateMapper`: which elements it uses and how it formats the
/// coordinates.
///
/// All fields have defaults that match the station form of the dashboard, so an empty JSON object
/// is a valid configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapperConfig {
    /// The id of the image whose clicks should be mapped
    pub image_id: String,
    /// The id of the input that receives the x percentage
    pub x_field_id: String,
    /// The id of the input that receives the y percentage
    pub y_field_id: String,
    /// The number of digits after the decimal point
    pub decimals: usize,
    pub degenerate_geometry: DegenerateGeometry,
    /// The id of an element that should be moved to every clicked position, if any
    pub marker_id: Option<String>,
}

impl MapperConfig {
    /// Parses a configuration from JSON. Missing keys get their default value, but unknown keys
    /// are rejected (they are most likely typos), and so are more than `MAX_FIXED_DIGITS`
    /// decimals.
    pub fn from_json(json: &str) -> Result<Self, CoordinateError> {
        let config: Self = serde_json::from_str(json)?;
        if config.decimals > MAX_FIXED_DIGITS {
            return Err(CoordinateError::TooManyDecimals(config.decimals));
        }
        Ok(config)
    }

    pub fn with_marker(mut self, marker_id: &str) -> Self {
        self.marker_id = Some(marker_id.to_owned());
        self
    }
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            image_id: DEFAULT_IMAGE_ID.to_owned(),
            x_field_id: DEFAULT_X_FIELD_ID.to_owned(),
            y_field_id: DEFAULT_Y_FIELD_ID.to_owned(),
            decimals: DEFAULT_DECIMALS,
            degenerate_geometry: DegenerateGeometry::default(),
            marker_id: None,
        }
    }
}
