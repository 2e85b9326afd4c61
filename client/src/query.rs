//! Optional filter set and query-string encoding.
//!
//! # Design
//! One `Option` field per filter; only set filters emit a query pair, so a
//! default never leaks into the request as if the caller had asked for it.
//! The service spells keys without underscores (`min_cost` → `mincost`),
//! and the encoder collapses them. Category filters forward raw strings
//! unvalidated — the service is lenient on the request side; only
//! responses are validated against the known tag set.

use crate::types::ActivityCategory;

/// Category constraint for a query: a known category, or a raw tag string
/// forwarded as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryFilter {
    Known(ActivityCategory),
    Raw(String),
}

impl CategoryFilter {
    fn as_param(&self) -> &str {
        match self {
            CategoryFilter::Known(category) => category.as_tag(),
            CategoryFilter::Raw(tag) => tag,
        }
    }
}

impl From<ActivityCategory> for CategoryFilter {
    fn from(category: ActivityCategory) -> Self {
        CategoryFilter::Known(category)
    }
}

impl From<&str> for CategoryFilter {
    fn from(tag: &str) -> Self {
        CategoryFilter::Raw(tag.to_string())
    }
}

impl From<String> for CategoryFilter {
    fn from(tag: String) -> Self {
        CategoryFilter::Raw(tag)
    }
}

/// Set of optional filters narrowing the service's selection.
///
/// All filters are independent; an empty query asks for an unconstrained
/// random activity. Range bounds are inclusive and the caller is expected
/// to keep `min <= max`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityQuery {
    id: Option<i64>,
    category: Option<CategoryFilter>,
    participants: Option<u32>,
    cost: Option<f64>,
    min_cost: Option<f64>,
    max_cost: Option<f64>,
    accessibility: Option<f64>,
    min_accessibility: Option<f64>,
    max_accessibility: Option<f64>,
}

impl ActivityQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn participants(mut self, participants: u32) -> Self {
        self.participants = Some(participants);
        self
    }

    pub fn cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn min_cost(mut self, min_cost: f64) -> Self {
        self.min_cost = Some(min_cost);
        self
    }

    pub fn max_cost(mut self, max_cost: f64) -> Self {
        self.max_cost = Some(max_cost);
        self
    }

    pub fn accessibility(mut self, accessibility: f64) -> Self {
        self.accessibility = Some(accessibility);
        self
    }

    pub fn min_accessibility(mut self, min_accessibility: f64) -> Self {
        self.min_accessibility = Some(min_accessibility);
        self
    }

    pub fn max_accessibility(mut self, max_accessibility: f64) -> Self {
        self.max_accessibility = Some(max_accessibility);
        self
    }

    /// Encode the set filters as `key=value` pairs joined with `&`.
    ///
    /// Unset filters emit nothing; an empty filter set encodes to the
    /// empty string. Values are plain numerics and tags, so no URL
    /// escaping is applied.
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::new();
        if let Some(id) = self.id {
            pairs.push(format!("id={id}"));
        }
        if let Some(category) = &self.category {
            pairs.push(format!("category={}", category.as_param()));
        }
        if let Some(participants) = self.participants {
            pairs.push(format!("participants={participants}"));
        }
        if let Some(cost) = self.cost {
            pairs.push(format!("cost={cost}"));
        }
        if let Some(min_cost) = self.min_cost {
            pairs.push(format!("mincost={min_cost}"));
        }
        if let Some(max_cost) = self.max_cost {
            pairs.push(format!("maxcost={max_cost}"));
        }
        if let Some(accessibility) = self.accessibility {
            pairs.push(format!("accessibility={accessibility}"));
        }
        if let Some(min_accessibility) = self.min_accessibility {
            pairs.push(format!("minaccessibility={min_accessibility}"));
        }
        if let Some(max_accessibility) = self.max_accessibility {
            pairs.push(format!("maxaccessibility={max_accessibility}"));
        }
        pairs.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_encodes_to_empty_string() {
        assert_eq!(ActivityQuery::new().to_query_string(), "");
    }

    #[test]
    fn single_filters_use_collapsed_key_spelling() {
        assert_eq!(ActivityQuery::new().id(3943506).to_query_string(), "id=3943506");
        assert_eq!(
            ActivityQuery::new().participants(2).to_query_string(),
            "participants=2"
        );
        assert_eq!(
            ActivityQuery::new().min_cost(0.2).to_query_string(),
            "mincost=0.2"
        );
        assert_eq!(
            ActivityQuery::new().max_accessibility(0.9).to_query_string(),
            "maxaccessibility=0.9"
        );
    }

    #[test]
    fn cost_range_orders_min_before_max() {
        let query = ActivityQuery::new().min_cost(0.1).max_cost(0.5);
        assert_eq!(query.to_query_string(), "mincost=0.1&maxcost=0.5");
    }

    #[test]
    fn accessibility_range_orders_min_before_max() {
        let query = ActivityQuery::new().min_accessibility(0.0).max_accessibility(0.5);
        assert_eq!(
            query.to_query_string(),
            "minaccessibility=0&maxaccessibility=0.5"
        );
    }

    #[test]
    fn known_category_uses_its_tag() {
        let query = ActivityQuery::new().category(ActivityCategory::Recreational);
        assert_eq!(query.to_query_string(), "category=recreational");
    }

    #[test]
    fn raw_category_passes_through_unvalidated() {
        let query = ActivityQuery::new().category("underwater basket weaving");
        assert_eq!(
            query.to_query_string(),
            "category=underwater basket weaving"
        );
    }

    #[test]
    fn all_filters_emit_one_pair_each_in_declaration_order() {
        let query = ActivityQuery::new()
            .id(1000000)
            .category(ActivityCategory::Social)
            .participants(4)
            .cost(0.3)
            .min_cost(0.1)
            .max_cost(0.5)
            .accessibility(0.25)
            .min_accessibility(0.0)
            .max_accessibility(1.0);
        assert_eq!(
            query.to_query_string(),
            "id=1000000&category=social&participants=4&cost=0.3&mincost=0.1&maxcost=0.5\
             &accessibility=0.25&minaccessibility=0&maxaccessibility=1"
        );
    }

    #[test]
    fn unset_filters_emit_nothing() {
        let query = ActivityQuery::new().cost(0.0).participants(1);
        let encoded = query.to_query_string();
        assert_eq!(encoded, "participants=1&cost=0");
        assert!(!encoded.contains("id="));
        assert!(!encoded.contains("category="));
        assert!(!encoded.contains("mincost="));
    }
}
