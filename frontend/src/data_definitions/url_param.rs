//! Query-string route parameter.

use std::fmt::Display;

use common::query::PageQuery;
use dioxus::prelude::*;

/// The whole query string of a route, parsed into a [`PageQuery`].
///
/// A malformed `filters` value is logged and dropped so the page still renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryParams(pub PageQuery);

impl From<PageQuery> for QueryParams {
    fn from(value: PageQuery) -> Self {
        QueryParams(value)
    }
}

// Display the state in a way that can be parsed by FromQuery
impl Display for QueryParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_query_string())
    }
}

impl FromQuery for QueryParams {
    fn from_query(query: &str) -> Self {
        match PageQuery::from_query_string(query) {
            Ok(parsed) => QueryParams(parsed),
            Err(e) => {
                dioxus::logger::tracing::warn!("ignoring malformed query {query:?}: {e}");
                let without_filters = query
                    .trim_start_matches('?')
                    .split('&')
                    .filter(|pair| pair.split('=').next() != Some(common::query::KEY_FILTERS))
                    .collect::<Vec<_>>()
                    .join("&");
                QueryParams(PageQuery::from_query_string(&without_filters).unwrap_or_default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::filters::{FilterField, Predicate};
    use common::query::make_filter_query;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_parses_back() {
        let mut query = make_filter_query([Predicate::new(FilterField::PrimarySite, "Lung")]);
        query.bio_id = Some("sample-1".to_string());
        let text = QueryParams(query.clone()).to_string();
        assert_eq!(QueryParams::from_query(&text), QueryParams(query));
    }

    #[test]
    fn bad_filters_keep_other_keys() {
        let parsed = QueryParams::from_query("filters=%%%&bioId=s1");
        assert_eq!(parsed.0.filters, None);
        assert_eq!(parsed.0.bio_id.as_deref(), Some("s1"));
    }
}
