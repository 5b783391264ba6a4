/// A position in the viewport, in CSS pixels.
///
/// The point `(0.0, 0.0)` is the top-left corner of the *viewport* (the visible part of the
/// browser window) and the y-coordinate grows downwards. This matches the `clientX` and `clientY`
/// properties of DOM mouse events and the rectangles returned by `getBoundingClientRect`, so the
/// scroll position of the page doesn't matter. Coordinates can be fractional on zoomed pages and
/// high density displays.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn get_x(&self) -> f64 {
        self.x
    }

    pub fn get_y(&self) -> f64 {
        self.y
    }
}
