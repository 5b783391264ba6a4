use crate::*;

use log::{debug, info, warn};

/// What happened when the mapped image was clicked
#[derive(Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    /// Both coordinate fields were overwritten with these values
    Written(FormattedCoordinates),
    /// At least one of the coordinate fields is missing, so neither of them was written
    MissingFields,
    /// The image has no area and `DegenerateGeometry::Skip` is configured, so nothing was written
    DegenerateGeometry,
}

/// The `ClickCoordinateMapper` converts clicks on an image to the position of the click within
/// that image, expressed as percentages of the width and height of the image. It writes these
/// percentages into two input fields, so that they are submitted together with the form that
/// contains them.
///
/// The mapper knows nothing about the *wrapper*: it only uses the `Page` trait. This has the
/// interesting implication that all of its behavior can be tested with regular unit tests, using
/// a `MemoryPage`.
///
/// ### Missing elements
/// Pages that don't contain the image are perfectly normal (the image is only shown when there is
/// one to show), so `initialize` silently does nothing on such pages. Similarly, clicks are
/// ignored when one of the coordinate fields is missing. Both situations are observable through
/// the return values.
#[derive(Clone, Debug, Default)]
pub struct ClickCoordinateMapper {
    config: MapperConfig,
}

impl ClickCoordinateMapper {
    pub fn new(config: MapperConfig) -> Self {
        Self { config }
    }

    pub fn get_config(&self) -> &MapperConfig {
        &self.config
    }

    /// Looks up the image and starts listening for clicks on it.
    ///
    /// Returns true if the image was found (and a click listener was registered), and false if
    /// the page doesn't contain the image. In the latter case, nothing happens at all.
    ///
    /// ### Calling multiple times
    /// Every successful call registers another listener, so every click would then be handled
    /// multiple times. The host should call this exactly once, after the document has been
    /// parsed.
    pub fn initialize<P: Page>(&self, page: &P) -> bool {
        let image = match page.find_image(&self.config.image_id) {
            Some(image) => image,
            None => {
                debug!(
                    "There is no element with id {:?}, so clicks won't be mapped",
                    self.config.image_id
                );
                return false;
            }
        };

        // Note: These are clones of handles rather than clones of the page or image
        let mapper = self.clone();
        let handler_page = page.clone();
        let handler_image = image.clone();
        image.listen_for_clicks(Box::new(move |event| {
            mapper.on_click(&handler_page, &handler_image, event);
        }));

        info!("Mapping clicks on {:?}", self.config.image_id);
        true
    }

    /// Handles a click on the `image`: computes the position of the click relative to the
    /// current bounding rectangle of the image and writes it into both coordinate fields.
    ///
    /// The bounding rectangle is queried during every call, so resizing the window or scrolling
    /// between two clicks is no problem.
    pub fn on_click<P: Page>(&self, page: &P, image: &P::Image, event: ClickEvent) -> ClickOutcome {
        let rect = image.bounding_rect();
        let degenerate = rect.is_degenerate();
        if degenerate && self.config.degenerate_geometry == DegenerateGeometry::Skip {
            warn!(
                "Ignoring click on {:?} because its bounding rectangle {:?} has no area",
                self.config.image_id, rect
            );
            return ClickOutcome::DegenerateGeometry;
        }

        let point = PercentPoint::from_click(event.get_client_point(), rect);

        // Either both fields are written, or neither
        let (x_field, y_field) = match (
            page.find_field(&self.config.x_field_id),
            page.find_field(&self.config.y_field_id),
        ) {
            (Some(x_field), Some(y_field)) => (x_field, y_field),
            _ => {
                debug!(
                    "Not writing {:?} because field {:?} or {:?} is missing",
                    point, self.config.x_field_id, self.config.y_field_id
                );
                return ClickOutcome::MissingFields;
            }
        };

        let coordinates = point.format(self.config.decimals);
        x_field.set_value(&coordinates.x);
        y_field.set_value(&coordinates.y);

        if !degenerate {
            if let Some(marker_id) = &self.config.marker_id {
                self.place_marker(page, marker_id, point);
            }
        }

        ClickOutcome::Written(coordinates)
    }

    /// Reads the coordinates that are currently in the coordinate fields. This is typically used
    /// to show where a station was placed before.
    ///
    /// Returns `Ok(None)` if a field is missing or both fields are empty, and an error if a field
    /// contains something that is not a number.
    pub fn current_coordinates<P: Page>(
        &self,
        page: &P,
    ) -> Result<Option<PercentPoint>, CoordinateError> {
        let (x, y) = match (
            page.find_field(&self.config.x_field_id),
            page.find_field(&self.config.y_field_id),
        ) {
            (Some(x_field), Some(y_field)) => (x_field.get_value(), y_field.get_value()),
            _ => return Ok(None),
        };

        if x.trim().is_empty() && y.trim().is_empty() {
            return Ok(None);
        }
        PercentPoint::parse(&x, &y).map(Some)
    }

    /// Moves the marker with the given id to `point`, by setting its CSS `left` and `top` to the
    /// percentages of `point`. The marker should be absolutely positioned inside a container that
    /// has the same size as the image.
    ///
    /// Returns false if the page doesn't contain the marker.
    pub fn place_marker<P: Page>(&self, page: &P, marker_id: &str, point: PercentPoint) -> bool {
        match page.find_marker(marker_id) {
            Some(marker) => {
                let coordinates = point.format(self.config.decimals);
                marker.set_offsets(
                    &format!("{}%", coordinates.x),
                    &format!("{}%", coordinates.y),
                );
                true
            }
            None => {
                debug!("There is no marker with id {:?}", marker_id);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use crate::*;

    const IMAGE: &str = "clickable-image";
    const X_FIELD: &str = "id_x_coord";
    const Y_FIELD: &str = "id_y_coord";

    fn station_form() -> MemoryPage {
        let page = MemoryPage::new();
        page.add_image(IMAGE, BoundingRect::new(100.0, 50.0, 200.0, 100.0));
        page.add_field(X_FIELD, "");
        page.add_field(Y_FIELD, "");
        page
    }

    fn field_values(page: &MemoryPage) -> (String, String) {
        (
            page.get_field_value(X_FIELD).unwrap_or_default(),
            page.get_field_value(Y_FIELD).unwrap_or_default(),
        )
    }

    fn strings(x: &str, y: &str) -> (String, String) {
        (x.to_owned(), y.to_owned())
    }

    #[test]
    fn test_initialize() {
        let page = station_form();
        let mapper = ClickCoordinateMapper::default();

        assert!(mapper.initialize(&page));
        assert_eq!(1, page.get_listener_count(IMAGE));
    }

    #[test]
    fn test_initialize_without_image() {
        let page = MemoryPage::new();
        page.add_field(X_FIELD, "1");
        page.add_field(Y_FIELD, "2");

        assert!(!ClickCoordinateMapper::default().initialize(&page));
        assert_eq!(strings("1", "2"), field_values(&page));
    }

    #[test]
    fn test_initialize_twice() {
        let page = station_form();
        let mapper = ClickCoordinateMapper::default();
        assert!(mapper.initialize(&page));
        assert!(mapper.initialize(&page));
        assert_eq!(2, page.get_listener_count(IMAGE));
        assert_eq!(2, page.simulate_click(IMAGE, 150.0, 75.0));
        assert_eq!(strings("25.00", "25.00"), field_values(&page));
    }

    #[test]
    fn test_click() {
        let page = station_form();
        ClickCoordinateMapper::default().initialize(&page);

        assert_eq!(1, page.simulate_click(IMAGE, 150.0, 75.0));
        assert_eq!(strings("25.00", "25.00"), field_values(&page));

        page.simulate_click(IMAGE, 100.0, 50.0);
        assert_eq!(strings("0.00", "0.00"), field_values(&page));

        page.simulate_click(IMAGE, 300.0, 150.0);
        assert_eq!(strings("100.00", "100.00"), field_values(&page));

        page.simulate_click(IMAGE, 200.0, 100.0);
        assert_eq!(strings("50.00", "50.00"), field_values(&page));
    }

    #[test]
    fn test_fractional_click() {
        let page = station_form();
        ClickCoordinateMapper::default().initialize(&page);

        page.simulate_click(IMAGE, 150.6, 75.5);
        assert_eq!(strings("25.30", "25.50"), field_values(&page));
    }

    #[test]
    fn test_click_rounding() {
        let page = MemoryPage::new();
        page.add_image(IMAGE, BoundingRect::new(0.0, 0.0, 300.0, 300.0));
        page.add_field(X_FIELD, "");
        page.add_field(Y_FIELD, "");
        ClickCoordinateMapper::default().initialize(&page);

        page.simulate_click(IMAGE, 100.0, 200.0);
        assert_eq!(strings("33.33", "66.67"), field_values(&page));
    }

    #[test]
    fn test_on_click_outcome() {
        let page = station_form();
        let mapper = ClickCoordinateMapper::default();
        let image = page.find_image(IMAGE).unwrap();

        let outcome = mapper.on_click(&page, &image, ClickEvent::at(175.0, 60.0));
        assert_eq!(
            ClickOutcome::Written(FormattedCoordinates {
                x: String::from("37.50"),
                y: String::from("10.00"),
            }),
            outcome
        );
    }

    #[test]
    fn test_rect_is_queried_on_every_click() {
        let page = station_form();
        ClickCoordinateMapper::default().initialize(&page);

        page.set_image_rect(IMAGE, BoundingRect::new(0.0, 0.0, 400.0, 200.0));
        page.simulate_click(IMAGE, 100.0, 50.0);
        assert_eq!(strings("25.00", "25.00"), field_values(&page));
    }

    #[test]
    fn test_click_outside_image() {
        let page = station_form();
        ClickCoordinateMapper::default().initialize(&page);

        page.simulate_click(IMAGE, 50.0, 200.0);
        assert_eq!(strings("-25.00", "150.00"), field_values(&page));
    }

    #[test]
    fn test_missing_one_field() {
        for missing in &[X_FIELD, Y_FIELD] {
            let page = station_form();
            page.add_field(X_FIELD, "1.00");
            page.add_field(Y_FIELD, "2.00");
            page.remove_field(missing);
            let mapper = ClickCoordinateMapper::default();
            mapper.initialize(&page);

            assert_eq!(1, page.simulate_click(IMAGE, 150.0, 75.0));
            let image = page.find_image(IMAGE).unwrap();
            assert_eq!(
                ClickOutcome::MissingFields,
                mapper.on_click(&page, &image, ClickEvent::at(150.0, 75.0))
            );

            if *missing == X_FIELD {
                assert_eq!(Some(String::from("2.00")), page.get_field_value(Y_FIELD));
            } else {
                assert_eq!(Some(String::from("1.00")), page.get_field_value(X_FIELD));
            }
        }
    }

    #[test]
    fn test_degenerate_geometry_skip() {
        let page = station_form();
        page.add_field(X_FIELD, "12.00");
        page.add_field(Y_FIELD, "34.00");
        page.set_image_rect(IMAGE, BoundingRect::new(100.0, 50.0, 0.0, 100.0));
        let mapper = ClickCoordinateMapper::default();
        let image = page.find_image(IMAGE).unwrap();

        assert_eq!(
            ClickOutcome::DegenerateGeometry,
            mapper.on_click(&page, &image, ClickEvent::at(150.0, 75.0))
        );
        assert_eq!(strings("12.00", "34.00"), field_values(&page));
    }

    #[test]
    fn test_degenerate_geometry_write() {
        let page = station_form();
        let config = MapperConfig {
            degenerate_geometry: DegenerateGeometry::Write,
            ..MapperConfig::default()
        };
        ClickCoordinateMapper::new(config).initialize(&page);

        page.set_image_rect(IMAGE, BoundingRect::new(100.0, 50.0, 0.0, 0.0));
        page.simulate_click(IMAGE, 150.0, 50.0);
        assert_eq!(strings("Infinity", "NaN"), field_values(&page));
    }

    #[test]
    fn test_custom_config() {
        let page = MemoryPage::new();
        page.add_image("floor-plan", BoundingRect::new(0.0, 0.0, 300.0, 300.0));
        page.add_field("x", "");
        page.add_field("y", "");
        let config = MapperConfig::from_json(
            r#"{"image_id": "floor-plan", "x_field_id": "x", "y_field_id": "y", "decimals": 1}"#,
        )
        .unwrap();
        let mapper = ClickCoordinateMapper::new(config);

        assert!(mapper.initialize(&page));
        page.simulate_click("floor-plan", 100.0, 200.0);
        assert_eq!(Some(String::from("33.3")), page.get_field_value("x"));
        assert_eq!(Some(String::from("66.7")), page.get_field_value("y"));
    }

    #[test]
    fn test_marker_follows_clicks() {
        let page = station_form();
        page.add_marker("station-pin");
        ClickCoordinateMapper::new(MapperConfig::default().with_marker("station-pin"))
            .initialize(&page);

        page.simulate_click(IMAGE, 175.0, 60.0);
        assert_eq!(
            Some((String::from("37.50%"), String::from("10.00%"))),
            page.get_marker_offsets("station-pin")
        );
    }

    #[test]
    fn test_marker_stays_on_degenerate_geometry() {
        let page = station_form();
        page.add_marker("station-pin");
        let config = MapperConfig {
            degenerate_geometry: DegenerateGeometry::Write,
            ..MapperConfig::default().with_marker("station-pin")
        };
        ClickCoordinateMapper::new(config).initialize(&page);

        page.set_image_rect(IMAGE, BoundingRect::new(0.0, 0.0, 0.0, 0.0));
        page.simulate_click(IMAGE, 10.0, 10.0);
        assert_eq!(
            Some((String::new(), String::new())),
            page.get_marker_offsets("station-pin")
        );
    }

    #[test]
    fn test_place_marker() {
        let page = station_form();
        page.add_marker("station-pin");
        let mapper = ClickCoordinateMapper::default();

        assert!(mapper.place_marker(&page, "station-pin", PercentPoint::new(12.3456, 99.0)));
        assert_eq!(
            Some((String::from("12.35%"), String::from("99.00%"))),
            page.get_marker_offsets("station-pin")
        );
        assert!(!mapper.place_marker(&page, "other-pin", PercentPoint::new(1.0, 2.0)));
    }

    #[test]
    fn test_current_coordinates() {
        let page = station_form();
        let mapper = ClickCoordinateMapper::default();
        assert!(mapper.current_coordinates(&page).unwrap().is_none());

        mapper.initialize(&page);
        page.simulate_click(IMAGE, 175.0, 60.0);
        assert_eq!(
            Some(PercentPoint::new(37.5, 10.0)),
            mapper.current_coordinates(&page).unwrap()
        );

        page.add_field(Y_FIELD, "");
        assert!(matches!(
            mapper.current_coordinates(&page),
            Err(CoordinateError::InvalidFieldValue { field: "y", .. })
        ));

        page.remove_field(X_FIELD);
        assert!(mapper.current_coordinates(&page).unwrap().is_none());
    }
}
