/// The rendered position and size of an element, in viewport coordinates. This is what
/// `getBoundingClientRect` returns in browsers.
///
/// The bounding rectangle of an element changes whenever the window is resized, the page is
/// scrolled or the layout shifts. It should therefore be queried right before it is needed rather
/// than being stored.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingRect {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl BoundingRect {
    /// Constructs a new `BoundingRect` with the given left and top coordinates (in pixels from the
    /// left and top of the viewport) and the given width and height.
    ///
    /// This doesn't panic on a zero size: elements that are not rendered (for instance because of
    /// `display: none`) really do have an empty bounding rectangle. Use `is_degenerate` to detect
    /// this.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Gets the x-coordinate of the left edge of this rectangle
    pub fn get_left(&self) -> f64 {
        self.left
    }

    /// Gets the y-coordinate of the top edge of this rectangle
    pub fn get_top(&self) -> f64 {
        self.top
    }

    pub fn get_width(&self) -> f64 {
        self.width
    }

    pub fn get_height(&self) -> f64 {
        self.height
    }

    /// Checks whether relative coordinates within this rectangle are meaningless. This is the case
    /// if the width or height is not a positive finite number: dividing by it would yield an
    /// infinite or NaN result.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.width > 0.0 && self.height.is_finite() && self.height > 0.0)
    }
}
