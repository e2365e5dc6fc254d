//! Event list filtering and the facets that drive the filter controls.
//! Pure functions over a fetched list; no side effects, easy to test.

use std::collections::BTreeSet;

use crate::models::Event;

/// Price ceiling offered when there are no events to derive one from.
pub const DEFAULT_MAX_PRICE: f64 = 1000.0;

/// Filterable attributes derived from the whole fetched list.
#[derive(Clone, Debug, PartialEq)]
pub struct Facets {
    /// Distinct locations, ascending.
    pub locations: Vec<String>,
    /// Highest price in the list (free counts as 0), or [`DEFAULT_MAX_PRICE`] when empty.
    pub max_price: f64,
}

impl Facets {
    /// Right end of a whole-step price slider.
    pub fn slider_max(&self) -> f64 {
        self.max_price.ceil()
    }
}

pub fn derive_facets(events: &[Event]) -> Facets {
    let locations: BTreeSet<&str> = events.iter().map(|e| e.location.as_str()).collect();
    let max_price = events
        .iter()
        .map(Event::effective_price)
        .fold(None, |acc: Option<f64>, p| Some(acc.map_or(p, |m| m.max(p))))
        .unwrap_or(DEFAULT_MAX_PRICE);
    Facets {
        locations: locations.into_iter().map(String::from).collect(),
        max_price,
    }
}

/// Current filter selections of the event list page.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterState {
    pub search_text: String,
    /// Empty means "any location".
    pub selected_locations: BTreeSet<String>,
    pub max_price: f64,
}

impl FilterState {
    /// No text, no locations, threshold at the facet maximum: matches every event.
    pub fn cleared(facets: &Facets) -> Self {
        Self {
            search_text: String::new(),
            selected_locations: BTreeSet::new(),
            max_price: facets.max_price,
        }
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn toggle_location(&mut self, location: &str) {
        if !self.selected_locations.remove(location) {
            self.selected_locations.insert(location.to_string());
        }
    }

    pub fn set_max_price(&mut self, max_price: f64) {
        self.max_price = max_price.max(0.0);
    }

    /// Threshold picked on a whole-step slider. The right end means the exact
    /// facet maximum, so a fractional top price stays reachable.
    pub fn set_max_price_from_slider(&mut self, value: f64, facets: &Facets) {
        if value >= facets.slider_max() {
            self.max_price = facets.max_price;
        } else {
            self.set_max_price(value);
        }
    }

    /// True when any control deviates from [`FilterState::cleared`].
    pub fn is_narrowing(&self, facets: &Facets) -> bool {
        !self.search_text.is_empty()
            || !self.selected_locations.is_empty()
            || self.max_price < facets.max_price
    }

    pub fn matches(&self, event: &Event) -> bool {
        self.matches_text(event) && self.matches_location(event) && self.matches_price(event)
    }

    fn matches_text(&self, event: &Event) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        [&event.title, &event.description, &event.location]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_location(&self, event: &Event) -> bool {
        self.selected_locations.is_empty() || self.selected_locations.contains(&event.location)
    }

    fn matches_price(&self, event: &Event) -> bool {
        event.effective_price() <= self.max_price
    }
}

/// Events matching `filter`, in input order.
pub fn filter_events(events: &[Event], filter: &FilterState) -> Vec<Event> {
    events.iter().filter(|e| filter.matches(e)).cloned().collect()
}

/// A fetched event list together with its facets.
/// Facets are computed once per list, not per filter change.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    events: Vec<Event>,
    facets: Facets,
}

impl Catalog {
    pub fn new(events: Vec<Event>) -> Self {
        let facets = derive_facets(&events);
        Self { events, facets }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn cleared_filter(&self) -> FilterState {
        FilterState::cleared(&self.facets)
    }

    pub fn visible(&self, filter: &FilterState) -> Vec<Event> {
        filter_events(&self.events, filter)
    }

    pub fn find(&self, id: crate::ids::EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }
}
