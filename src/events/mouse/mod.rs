mod point;

pub use point::*;

use crate::*;

/// This event indicates that the user clicked on the image whose clicks are being mapped.
///
/// The position of the click is relative to the *viewport* (like the `clientX` and `clientY`
/// properties of DOM mouse events), not relative to the image. Use `PercentPoint::from_click` to
/// convert it to a position relative to the image.
///
/// Only the *wrapper* (or a `MemoryPage` in tests) should construct these events.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClickEvent {
    client_point: Point,
}

impl ClickEvent {
    /// Constructs a new `ClickEvent` at the given viewport-relative position
    pub fn new(client_point: Point) -> Self {
        Self { client_point }
    }

    /// Constructs a new `ClickEvent` from the `clientX` and `clientY` of a DOM mouse event
    pub fn at(client_x: f64, client_y: f64) -> Self {
        Self::new(Point::new(client_x, client_y))
    }

    /// Gets the position of the mouse cursor at the moment of the click, relative to the top-left
    /// corner of the viewport
    pub fn get_client_point(&self) -> Point {
        self.client_point
    }
}
