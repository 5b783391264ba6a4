use crate::*;

/// Represents a click position relative to the bounding rectangle of an element, expressed as
/// percentages of the width and height of that element.
///
/// The point (0.0, 0.0) represents the top-left corner of the element and the point
/// (100.0, 100.0) represents the bottom-right corner of the element. This makes the coordinates
/// independent of the size at which the element happened to be rendered.
///
/// Clicks outside the element (or an element with an empty bounding rectangle) can yield values
/// outside [0, 100] or even non-finite values: no clamping is done.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PercentPoint {
    x: f64,
    y: f64,
}

impl PercentPoint {
    /// Constructs a new `PercentPoint` with the given `x` and `y` percentages
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Computes where the `client_point` lies relative to `rect`:
    ///
    /// `x = (client_x - left) / width * 100` and `y = (client_y - top) / height * 100`
    ///
    /// No rounding is done here; that happens in `format`.
    pub fn from_click(client_point: Point, rect: BoundingRect) -> Self {
        Self {
            x: (client_point.get_x() - rect.get_left()) / rect.get_width() * 100.0,
            y: (client_point.get_y() - rect.get_top()) / rect.get_height() * 100.0,
        }
    }

    /// Gets the (relative) x coordinate of this `PercentPoint`.
    /// A value of 0.0 indicates the left bound of the element and a value of 100.0 indicates the
    /// right bound.
    pub fn get_x(&self) -> f64 {
        self.x
    }

    /// Gets the (relative) y coordinate of this `PercentPoint`.
    /// A value of 0.0 indicates the top bound of the element and a value of 100.0 indicates the
    /// bottom bound.
    pub fn get_y(&self) -> f64 {
        self.y
    }

    /// Checks whether both coordinates are within [0, 100]
    pub fn is_within_bounds(&self) -> bool {
        (0.0..=100.0).contains(&self.x) && (0.0..=100.0).contains(&self.y)
    }

    /// The inverse of `from_click`: computes the viewport position that corresponds to this point
    /// when the element has the given bounding `rect`.
    pub fn to_viewport(&self, rect: BoundingRect) -> Point {
        Point::new(
            rect.get_left() + self.x / 100.0 * rect.get_width(),
            rect.get_top() + self.y / 100.0 * rect.get_height(),
        )
    }

    /// Formats both coordinates with exactly `decimals` digits after the decimal point
    pub fn format(&self, decimals: usize) -> FormattedCoordinates {
        FormattedCoordinates {
            x: to_fixed(self.x, decimals),
            y: to_fixed(self.y, decimals),
        }
    }

    /// Parses the text of the two coordinate fields back into a `PercentPoint`. Surrounding
    /// whitespace is ignored.
    pub fn parse(x: &str, y: &str) -> Result<Self, CoordinateError> {
        Ok(Self {
            x: parse_coordinate("x", x)?,
            y: parse_coordinate("y", y)?,
        })
    }
}

fn parse_coordinate(field: &'static str, text: &str) -> Result<f64, CoordinateError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| CoordinateError::InvalidFieldValue {
            field,
            value: text.to_owned(),
        })
}

/// The textual form of a `PercentPoint`, as it is written into the coordinate fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormattedCoordinates {
    pub x: String,
    pub y: String,
}
