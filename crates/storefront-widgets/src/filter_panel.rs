//! Listing sidebar state: selected tags and the price slider.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use storefront_catalog::money::Currency;
use storefront_catalog::views::{FilterCriteria, PriceRange};

/// Option groups shown in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterGroup {
    Category,
    Features,
    Rating,
}

const CATEGORY_OPTIONS: &[&str] = &["Headphones", "Earbuds", "Speakers", "Accessories"];
const FEATURE_OPTIONS: &[&str] = &["Noise Cancelling", "Wireless", "Built-in Mic", "Water Resistant"];
const RATING_OPTIONS: &[&str] = &["4★ & above", "3★ & above", "2★ & above", "1★ & above"];

impl FilterGroup {
    pub const ALL: [FilterGroup; 3] = [
        FilterGroup::Category,
        FilterGroup::Features,
        FilterGroup::Rating,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            FilterGroup::Category => "Category",
            FilterGroup::Features => "Features",
            FilterGroup::Rating => "Rating",
        }
    }

    /// Checkbox labels, in display order.
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            FilterGroup::Category => CATEGORY_OPTIONS,
            FilterGroup::Features => FEATURE_OPTIONS,
            FilterGroup::Rating => RATING_OPTIONS,
        }
    }

    /// Group that offers `tag`, if any.
    pub fn of(tag: &str) -> Option<FilterGroup> {
        Self::ALL.into_iter().find(|g| g.options().contains(&tag))
    }
}

/// Threshold encoded in a rating label such as `"4★ & above"`.
pub fn rating_threshold(label: &str) -> Option<f64> {
    let digits: String = label.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<u8>().ok().map(f64::from)
}

/// Price slider bounds, in whole currency units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceSlider {
    #[serde(default = "default_price_max")]
    pub price_max: i64,
    #[serde(default = "default_price_step")]
    pub price_step: i64,
}

fn default_price_max() -> i64 {
    500
}

fn default_price_step() -> i64 {
    10
}

impl Default for PriceSlider {
    fn default() -> Self {
        Self {
            price_max: default_price_max(),
            price_step: default_price_step(),
        }
    }
}

impl PriceSlider {
    /// Clamp into `0..=price_max` and snap to the nearest step.
    pub fn snap(&self, value: i64) -> i64 {
        let value = value.clamp(0, self.price_max);
        if self.price_step <= 1 {
            return value;
        }
        let snapped = (value + self.price_step / 2) / self.price_step * self.price_step;
        snapped.min(self.price_max)
    }

    pub fn full_range(&self) -> (i64, i64) {
        (0, self.price_max)
    }
}

/// Sidebar state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterPanel {
    slider: PriceSlider,
    currency: Currency,
    price: (i64, i64),
    selected: HashSet<String>,
}

impl Default for FilterPanel {
    fn default() -> Self {
        Self::new(PriceSlider::default(), Currency::default())
    }
}

impl FilterPanel {
    pub fn new(slider: PriceSlider, currency: Currency) -> Self {
        Self {
            slider,
            currency,
            price: slider.full_range(),
            selected: HashSet::new(),
        }
    }

    pub fn slider(&self) -> PriceSlider {
        self.slider
    }

    /// Flip a tag's membership. Returns whether it is now selected.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if self.selected.remove(tag) {
            false
        } else {
            self.selected.insert(tag.to_string());
            true
        }
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected.contains(tag)
    }

    pub fn selected(&self) -> &HashSet<String> {
        &self.selected
    }

    /// Selected tags of one group, in display order.
    pub fn selected_in(&self, group: FilterGroup) -> Vec<&'static str> {
        group
            .options()
            .iter()
            .copied()
            .filter(|opt| self.selected.contains(*opt))
            .collect()
    }

    /// Set both slider handles. Values are snapped and ordered.
    pub fn set_price_range(&mut self, min: i64, max: i64) {
        let (a, b) = (self.slider.snap(min), self.slider.snap(max));
        self.price = (a.min(b), a.max(b));
    }

    pub fn price_range(&self) -> (i64, i64) {
        self.price
    }

    /// Reset tags and price to their defaults.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.price = self.slider.full_range();
    }

    pub fn is_default(&self) -> bool {
        self.selected.is_empty() && self.price == self.slider.full_range()
    }

    /// Lowest selected rating threshold, or 0 when none is selected.
    pub fn min_rating(&self) -> f64 {
        self.selected_in(FilterGroup::Rating)
            .into_iter()
            .filter_map(rating_threshold)
            .reduce(f64::min)
            .unwrap_or(0.0)
    }

    /// Criteria for the listing. Tags outside every group are ignored.
    pub fn to_criteria(&self) -> FilterCriteria {
        let (min, max) = self.price;
        FilterCriteria::new(PriceRange::from_major(min, max, self.currency))
            .with_categories(self.selected_in(FilterGroup::Category))
            .with_features(self.selected_in(FilterGroup::Features))
            .with_min_rating(self.min_rating())
    }
}
