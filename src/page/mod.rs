mod memory;

pub use memory::*;

use crate::*;

/// The part of the page (document) that a `ClickCoordinateMapper` interacts with.
///
/// The mapper knows nothing about the environment that implements this trait: it could be a real
/// browser document (see the *wrapper*) or a `MemoryPage` in a unit test. This makes it possible
/// to test all the mapping behavior without any kind of browser environment.
///
/// ### Handles
/// Implementations should be cheap handles to shared state (like `web_sys::Document` or an
/// `Rc`), because the mapper clones the page into every click listener it registers.
pub trait Page: Clone + 'static {
    type Image: ClickTarget;
    type Field: OutputField;
    type Marker: MarkerElement;

    /// Finds the element with the given id that can be clicked, or returns `None` if the page
    /// doesn't contain such an element
    fn find_image(&self, id: &str) -> Option<Self::Image>;

    /// Finds the input field with the given id, or returns `None` if the page doesn't contain it
    fn find_field(&self, id: &str) -> Option<Self::Field>;

    /// Finds the marker element with the given id, or returns `None` if the page doesn't contain it
    fn find_marker(&self, id: &str) -> Option<Self::Marker>;
}

/// An element that can be clicked, typically an image.
pub trait ClickTarget: Clone + 'static {
    /// Queries the current bounding rectangle of this element. Implementations must not cache
    /// this, because it changes when the window is resized or the layout shifts.
    fn bounding_rect(&self) -> BoundingRect;

    /// Registers `handler` such that it will be called whenever this element is clicked. Every
    /// call registers an additional handler: handlers are never replaced.
    fn listen_for_clicks(&self, handler: Box<dyn FnMut(ClickEvent)>);
}

/// An input field whose value can be read and overwritten.
pub trait OutputField {
    fn get_value(&self) -> String;

    fn set_value(&self, value: &str);
}

/// An absolutely positioned element that can be moved to a position relative to its container.
pub trait MarkerElement {
    /// Sets the CSS `left` and `top` properties of this element to the given values (like "37.50%")
    fn set_offsets(&self, left: &str, top: &str);
}
