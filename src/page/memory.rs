use crate::*;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

type ClickHandler = Box<dyn FnMut(ClickEvent)>;

struct ImageState {
    rect: BoundingRect,
    handlers: Vec<ClickHandler>,
}

#[derive(Default)]
struct PageState {
    images: HashMap<String, ImageState>,
    fields: HashMap<String, String>,
    markers: HashMap<String, (String, String)>,
}

/// A `Page` that lives entirely in memory. It is meant for unit tests and for hosts that want to
/// run the mapping logic outside a browser.
///
/// Clones of a `MemoryPage` share the same elements, just like clones of a `web_sys::Document`
/// refer to the same document.
#[derive(Clone, Default)]
pub struct MemoryPage {
    state: Rc<RefCell<PageState>>,
}

impl MemoryPage {
    /// Constructs a new empty `MemoryPage`
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an image with the given id and bounding rectangle. If the page already had an image
    /// with this id, it will be replaced (including its click listeners).
    pub fn add_image(&self, id: &str, rect: BoundingRect) {
        self.state.borrow_mut().images.insert(
            id.to_owned(),
            ImageState {
                rect,
                handlers: Vec::new(),
            },
        );
    }

    /// Changes the bounding rectangle of an existing image, as if the window was resized. Returns
    /// false if there is no image with the given id.
    pub fn set_image_rect(&self, id: &str, rect: BoundingRect) -> bool {
        match self.state.borrow_mut().images.get_mut(id) {
            Some(image) => {
                image.rect = rect;
                true
            }
            None => false,
        }
    }

    pub fn remove_image(&self, id: &str) {
        self.state.borrow_mut().images.remove(id);
    }

    /// Adds an input field with the given id and initial value
    pub fn add_field(&self, id: &str, value: &str) {
        self.state
            .borrow_mut()
            .fields
            .insert(id.to_owned(), value.to_owned());
    }

    pub fn remove_field(&self, id: &str) {
        self.state.borrow_mut().fields.remove(id);
    }

    /// Adds a marker element with the given id. Its offsets will initially be empty strings.
    pub fn add_marker(&self, id: &str) {
        self.state
            .borrow_mut()
            .markers
            .insert(id.to_owned(), (String::new(), String::new()));
    }

    /// Gets the current value of the field with the given id, or `None` if there is no such field
    pub fn get_field_value(&self, id: &str) -> Option<String> {
        self.state.borrow().fields.get(id).cloned()
    }

    /// Gets the (left, top) offsets of the marker with the given id, or `None` if there is no such
    /// marker
    pub fn get_marker_offsets(&self, id: &str) -> Option<(String, String)> {
        self.state.borrow().markers.get(id).cloned()
    }

    /// Gets the number of click listeners that are registered on the image with the given id
    pub fn get_listener_count(&self, image_id: &str) -> usize {
        self.state
            .borrow()
            .images
            .get(image_id)
            .map_or(0, |image| image.handlers.len())
    }

    /// Pretends that the user clicked on the image with the given id, at the given viewport
    /// position. All click listeners of that image will be called, in the order in which they
    /// were registered.
    ///
    /// Returns the number of listeners that were called. This will be 0 if there is no image with
    /// the given id.
    pub fn simulate_click(&self, image_id: &str, client_x: f64, client_y: f64) -> usize {
        // The handlers are taken out of the state, so that they can use the page while running
        let mut handlers = match self.state.borrow_mut().images.get_mut(image_id) {
            Some(image) => std::mem::take(&mut image.handlers),
            None => return 0,
        };

        let event = ClickEvent::at(client_x, client_y);
        for handler in handlers.iter_mut() {
            handler(event);
        }
        let num_called = handlers.len();

        // Put them back, in front of any handlers that were registered during the dispatch
        if let Some(image) = self.state.borrow_mut().images.get_mut(image_id) {
            handlers.append(&mut image.handlers);
            image.handlers = handlers;
        }
        num_called
    }
}

impl Page for MemoryPage {
    type Image = MemoryImage;
    type Field = MemoryField;
    type Marker = MemoryMarker;

    fn find_image(&self, id: &str) -> Option<MemoryImage> {
        if self.state.borrow().images.contains_key(id) {
            Some(MemoryImage {
                state: Rc::clone(&self.state),
                id: id.to_owned(),
            })
        } else {
            None
        }
    }

    fn find_field(&self, id: &str) -> Option<MemoryField> {
        if self.state.borrow().fields.contains_key(id) {
            Some(MemoryField {
                state: Rc::clone(&self.state),
                id: id.to_owned(),
            })
        } else {
            None
        }
    }

    fn find_marker(&self, id: &str) -> Option<MemoryMarker> {
        if self.state.borrow().markers.contains_key(id) {
            Some(MemoryMarker {
                state: Rc::clone(&self.state),
                id: id.to_owned(),
            })
        } else {
            None
        }
    }
}

/// The `ClickTarget` of a `MemoryPage`
#[derive(Clone)]
pub struct MemoryImage {
    state: Rc<RefCell<PageState>>,
    id: String,
}

impl ClickTarget for MemoryImage {
    fn bounding_rect(&self) -> BoundingRect {
        // Like detached DOM elements, removed images have an empty rectangle
        self.state
            .borrow()
            .images
            .get(&self.id)
            .map_or(BoundingRect::new(0.0, 0.0, 0.0, 0.0), |image| image.rect)
    }

    fn listen_for_clicks(&self, handler: Box<dyn FnMut(ClickEvent)>) {
        if let Some(image) = self.state.borrow_mut().images.get_mut(&self.id) {
            image.handlers.push(handler);
        }
    }
}

/// The `OutputField` of a `MemoryPage`
pub struct MemoryField {
    state: Rc<RefCell<PageState>>,
    id: String,
}

impl OutputField for MemoryField {
    fn get_value(&self) -> String {
        self.state
            .borrow()
            .fields
            .get(&self.id)
            .cloned()
            .unwrap_or_default()
    }

    fn set_value(&self, value: &str) {
        if let Some(field) = self.state.borrow_mut().fields.get_mut(&self.id) {
            *field = value.to_owned();
        }
    }
}

/// The `MarkerElement` of a `MemoryPage`
pub struct MemoryMarker {
    state: Rc<RefCell<PageState>>,
    id: String,
}

impl MarkerElement for MemoryMarker {
    fn set_offsets(&self, left: &str, top: &str) {
        if let Some(offsets) = self.state.borrow_mut().markers.get_mut(&self.id) {
            *offsets = (left.to_owned(), top.to_owned());
        }
    }
}
