use crate::*;

use std::sync::Once;

use log::{info, warn, Level};

use js_sys::Reflect;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use web_sys::{window, Document, Element, HtmlElement, HtmlInputElement, MouseEvent};

/// A `Page` backed by a real browser document
#[derive(Clone)]
pub struct WebPage {
    document: Document,
}

impl WebPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Gets the document of the current window, or `None` if this is not running in a browser
    /// window (for instance in a web worker)
    pub fn current() -> Option<Self> {
        window()?.document().map(Self::new)
    }

    /// Checks whether the browser is still parsing the document
    pub fn is_loading(&self) -> bool {
        self.document.ready_state() == "loading"
    }
}

impl Page for WebPage {
    type Image = Element;
    type Field = HtmlInputElement;
    type Marker = HtmlElement;

    fn find_image(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn find_field(&self, id: &str) -> Option<HtmlInputElement> {
        self.document
            .get_element_by_id(id)?
            .dyn_into::<HtmlInputElement>()
            .ok()
    }

    fn find_marker(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}

impl ClickTarget for Element {
    fn bounding_rect(&self) -> BoundingRect {
        let rect = self.get_bounding_client_rect();
        BoundingRect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }

    fn listen_for_clicks(&self, mut handler: Box<dyn FnMut(ClickEvent)>) {
        let click_closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            handler(ClickEvent::at(
                client_coordinate(&event, "clientX", event.client_x()),
                client_coordinate(&event, "clientY", event.client_y()),
            ));
        }) as Box<dyn FnMut(MouseEvent)>);

        if let Err(error) = self
            .add_event_listener_with_callback("click", click_closure.as_ref().unchecked_ref())
        {
            warn!("Failed to add click listener to {:?}: {:?}", self.id(), error);
        }

        // The listener must stay alive as long as the element, so the closure is leaked
        click_closure.forget();
    }
}

/// Reads `clientX` or `clientY` as a double. The `client_x` and `client_y` getters of `MouseEvent`
/// return whole pixels, but browsers report fractional positions on zoomed pages and high density
/// displays. The truncated `fallback` is only used if the property can't be read as a number.
fn client_coordinate(event: &MouseEvent, property: &str, fallback: i32) -> f64 {
    let target: &JsValue = event.as_ref();
    Reflect::get(target, &JsValue::from_str(property))
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(fallback as f64)
}

impl OutputField for HtmlInputElement {
    fn get_value(&self) -> String {
        HtmlInputElement::value(self)
    }

    fn set_value(&self, value: &str) {
        HtmlInputElement::set_value(self, value)
    }
}

impl MarkerElement for HtmlElement {
    fn set_offsets(&self, left: &str, top: &str) {
        let style = self.style();
        for (property, value) in &[("left", left), ("top", top)] {
            if let Err(error) = style.set_property(property, value) {
                warn!("Failed to set {} of {:?} to {}: {:?}", property, self.id(), value, error);
            }
        }
    }
}

fn start_logging() {
    static START_LOGGING: Once = Once::new();
    START_LOGGING.call_once(|| {
        console_error_panic_hook::set_once();
        // This fails if the host page already installed a logger, which is fine
        if console_log::init_with_level(Level::Debug).is_err() {
            warn!("A logger was already installed");
        }
    });
}

fn start(mapper: ClickCoordinateMapper) -> bool {
    start_logging();
    match WebPage::current() {
        Some(page) => mapper.initialize(&page),
        None => {
            warn!("There is no document to map clicks in");
            false
        }
    }
}

fn to_js_error(error: CoordinateError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// Starts mapping clicks on the `clickable-image` into the `id_x_coord` and `id_y_coord` fields.
/// Returns false if the page doesn't contain the image.
///
/// The page should call this exactly once, after the document has been parsed.
#[wasm_bindgen]
pub fn initialize() -> bool {
    start(ClickCoordinateMapper::default())
}

/// Like `initialize`, but with a JSON configuration (see `MapperConfig`). Throws if the
/// configuration is invalid.
#[wasm_bindgen]
pub fn initialize_with_config(config: &str) -> Result<bool, JsValue> {
    let config = MapperConfig::from_json(config).map_err(to_js_error)?;
    Ok(start(ClickCoordinateMapper::new(config)))
}

/// Calls `initialize` as soon as the document has been parsed: immediately if that already
/// happened, or else once the `DOMContentLoaded` event fires.
#[wasm_bindgen]
pub fn initialize_when_ready() {
    start_logging();
    let page = match WebPage::current() {
        Some(page) => page,
        None => {
            warn!("There is no document to map clicks in");
            return;
        }
    };

    if !page.is_loading() {
        initialize();
        return;
    }

    let ready_closure = Closure::once_into_js(move || {
        initialize();
    });
    if let Err(error) = page
        .document
        .add_event_listener_with_callback("DOMContentLoaded", ready_closure.unchecked_ref())
    {
        warn!("Failed to wait for DOMContentLoaded: {:?}", error);
    } else {
        info!("Waiting for the document to be parsed");
    }
}

/// Moves the marker with the given id to the position (`x`%, `y`%) of its container. Returns
/// false if there is no such marker.
#[wasm_bindgen]
pub fn place_marker(marker_id: &str, x: f64, y: f64) -> bool {
    start_logging();
    match WebPage::current() {
        Some(page) => {
            ClickCoordinateMapper::default().place_marker(&page, marker_id, PercentPoint::new(x, y))
        }
        None => false,
    }
}

/// Moves the marker with the given id to the coordinates that are currently in the coordinate
/// fields, or to the top-left corner if the fields are empty. Throws if a field contains something
/// that is not a number.
#[wasm_bindgen]
pub fn preview_marker(marker_id: &str) -> Result<bool, JsValue> {
    start_logging();
    let page = match WebPage::current() {
        Some(page) => page,
        None => return Ok(false),
    };

    let mapper = ClickCoordinateMapper::default();
    let point = mapper
        .current_coordinates(&page)
        .map_err(to_js_error)?
        .unwrap_or_default();
    Ok(mapper.place_marker(&page, marker_id, point))
}
