//! Request body builders for the ReliefWeb search API
//!
//! The v1 API takes a POST body with a full-text `query`, a `filter` tree of
//! field conditions, and a `fields.include` projection. These builders
//! assemble the exact payload shapes the API expects for the `reports` and
//! `disasters` endpoints.

use chrono::NaiveDate;
use serde_json::{Value, json};

/// Fields requested for report search results
const REPORT_FIELDS: &[&str] = &[
    "title",
    "body",
    "url",
    "source",
    "date",
    "format",
    "status",
    "primary_country",
    "id",
];

/// Fields requested for disaster search results
const DISASTER_FIELDS: &[&str] = &["name", "date", "url", "id", "status", "glide", "country"];

/// Convert a `YYYY-MM-DD` date string to ISO 8601 with a UTC offset.
///
/// Strings that are not in the expected format pass through unchanged, so
/// callers may also supply an already-formatted timestamp.
pub fn to_iso8601(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => format!("{}T00:00:00+00:00", parsed.format("%Y-%m-%d")),
        Err(_) => date.to_string(),
    }
}

/// Query builder for the `reports` endpoint
#[derive(Debug, Clone, Default)]
pub struct ReportsQuery {
    /// Full-text search keyword
    pub keyword: String,
    /// Start of the `date.created` filter range (`YYYY-MM-DD`)
    pub date_from: Option<String>,
    /// End of the `date.created` filter range (`YYYY-MM-DD`)
    pub date_to: Option<String>,
    /// Filter by disaster ID
    pub disaster_id: Option<String>,
    /// Filter by report format name (e.g. "Situation Report")
    pub format_name: Option<String>,
    /// Sort order (e.g. "date.created:desc")
    pub sort: Option<String>,
    /// Requested result count; see [`ReportsQuery::to_body`]
    pub limit: u32,
    /// Pagination offset
    pub offset: u32,
}

impl ReportsQuery {
    /// Create a query for the given keyword
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            limit: 1,
            ..Self::default()
        }
    }

    /// Filter by creation date range (`YYYY-MM-DD` on both ends)
    pub fn date_range(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.date_from = Some(from.into());
        self.date_to = Some(to.into());
        self
    }

    /// Filter by disaster ID
    pub fn disaster_id(mut self, id: impl Into<String>) -> Self {
        self.disaster_id = Some(id.into());
        self
    }

    /// Filter by report format name
    pub fn format_name(mut self, format: impl Into<String>) -> Self {
        self.format_name = Some(format.into());
        self
    }

    /// Set the sort order
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Set the pagination offset
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// The endpoint this query targets
    pub fn endpoint(&self) -> &'static str {
        "reports"
    }

    /// Assemble the POST body for this query.
    ///
    /// The emitted `limit` is pinned to 1 regardless of the requested value;
    /// report bodies are large and the upstream payloads were always built
    /// with a single result.
    pub fn to_body(&self, appname: &str) -> Value {
        let mut conditions = Vec::new();
        if let (Some(from), Some(to)) = (&self.date_from, &self.date_to) {
            conditions.push(json!({
                "field": "date.created",
                "value": {"from": to_iso8601(from), "to": to_iso8601(to)},
            }));
        }
        if let Some(id) = &self.disaster_id {
            conditions.push(json!({"field": "disaster.id", "value": id}));
        }
        if let Some(format) = &self.format_name {
            conditions.push(json!({"field": "format.name", "value": format}));
        }

        let mut body = json!({
            "appname": appname,
            "query": {"value": self.keyword, "operator": "AND"},
            "filter": {"conditions": conditions},
            "limit": 1,
            "offset": self.offset,
            "fields": {"include": REPORT_FIELDS},
            "preset": "latest",
            "profile": "list",
        });
        if let Some(sort) = &self.sort {
            body["sort"] = json!([sort]);
        }
        body
    }
}

/// Query builder for the `disasters` endpoint
#[derive(Debug, Clone)]
pub struct DisastersQuery {
    /// Full-text search keyword
    pub keyword: String,
    /// Start of the `date.event` filter range (`YYYY-MM-DD`)
    pub date_from: Option<String>,
    /// End of the `date.event` filter range (`YYYY-MM-DD`)
    pub date_to: Option<String>,
    /// Filter by disaster status (e.g. "ongoing")
    pub status: Option<String>,
    /// Filter by country name
    pub country: Option<String>,
    /// Filter by disaster type name (e.g. "Flood")
    pub disaster_type: Option<String>,
    /// Filter by disaster ID
    pub id: Option<String>,
    /// Sort order (e.g. "date.event:desc")
    pub sort: Option<String>,
    /// Maximum result count
    pub limit: u32,
    /// Pagination offset
    pub offset: u32,
    /// Include the long-form `description` field in results
    pub detailed: bool,
}

impl Default for DisastersQuery {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            date_from: None,
            date_to: None,
            status: None,
            country: None,
            disaster_type: None,
            id: None,
            sort: None,
            limit: 20,
            offset: 0,
            detailed: false,
        }
    }
}

impl DisastersQuery {
    /// Create a query for the given keyword
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            ..Self::default()
        }
    }

    /// Filter by event date range (`YYYY-MM-DD` on both ends)
    pub fn date_range(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.date_from = Some(from.into());
        self.date_to = Some(to.into());
        self
    }

    /// Filter by disaster status
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Filter by country name
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Filter by disaster type name
    pub fn disaster_type(mut self, disaster_type: impl Into<String>) -> Self {
        self.disaster_type = Some(disaster_type.into());
        self
    }

    /// Filter by disaster ID
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the sort order
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Set the maximum result count
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set the pagination offset
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Include the long-form description in results
    pub fn detailed(mut self, detailed: bool) -> Self {
        self.detailed = detailed;
        self
    }

    /// The endpoint this query targets
    pub fn endpoint(&self) -> &'static str {
        "disasters"
    }

    /// Assemble the POST body for this query
    pub fn to_body(&self, appname: &str) -> Value {
        let mut conditions = Vec::new();
        if let (Some(from), Some(to)) = (&self.date_from, &self.date_to) {
            conditions.push(json!({
                "field": "date.event",
                "value": {"from": to_iso8601(from), "to": to_iso8601(to)},
            }));
        }
        if let Some(status) = &self.status {
            conditions.push(json!({"field": "status", "value": status}));
        }
        if let Some(country) = &self.country {
            conditions.push(json!({"field": "country.name", "value": country}));
        }
        if let Some(disaster_type) = &self.disaster_type {
            conditions.push(json!({"field": "type.name", "value": disaster_type}));
        }
        if let Some(id) = &self.id {
            conditions.push(json!({"field": "id", "value": id}));
        }

        let mut fields: Vec<&str> = DISASTER_FIELDS.to_vec();
        if self.detailed {
            fields.push("description");
        }

        let mut body = json!({
            "appname": appname,
            "query": {"value": self.keyword},
            "filter": {"operator": "AND", "conditions": conditions},
            "limit": self.limit,
            "offset": self.offset,
            "fields": {"include": fields},
        });
        if let Some(sort) = &self.sort {
            body["sort"] = json!([sort]);
        }
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_iso8601() {
        assert_eq!(to_iso8601("2022-01-01"), "2022-01-01T00:00:00+00:00");
        // Already-formatted and malformed strings pass through unchanged
        assert_eq!(
            to_iso8601("2022-01-01T12:00:00+00:00"),
            "2022-01-01T12:00:00+00:00"
        );
        assert_eq!(to_iso8601("not a date"), "not a date");
    }

    #[test]
    fn test_reports_body_defaults() {
        let body = ReportsQuery::new("sudan crises").to_body("reliefwatch");

        assert_eq!(body["appname"], "reliefwatch");
        assert_eq!(body["query"]["value"], "sudan crises");
        assert_eq!(body["query"]["operator"], "AND");
        assert_eq!(body["filter"]["conditions"].as_array().unwrap().len(), 0);
        assert_eq!(body["limit"], 1);
        assert_eq!(body["offset"], 0);
        assert_eq!(body["preset"], "latest");
        assert_eq!(body["profile"], "list");
        assert!(body.get("sort").is_none());
        let include = body["fields"]["include"].as_array().unwrap();
        assert!(include.contains(&serde_json::json!("primary_country")));
    }

    #[test]
    fn test_reports_body_filters() {
        let body = ReportsQuery::new("earthquake")
            .date_range("2023-01-01", "2025-01-01")
            .disaster_id("51275")
            .format_name("Situation Report")
            .sort("date.created:desc")
            .to_body("reliefwatch");

        let conditions = body["filter"]["conditions"].as_array().unwrap();
        assert_eq!(conditions.len(), 3);
        assert_eq!(conditions[0]["field"], "date.created");
        assert_eq!(conditions[0]["value"]["from"], "2023-01-01T00:00:00+00:00");
        assert_eq!(conditions[0]["value"]["to"], "2025-01-01T00:00:00+00:00");
        assert_eq!(conditions[1]["field"], "disaster.id");
        assert_eq!(conditions[2]["field"], "format.name");
        assert_eq!(conditions[2]["value"], "Situation Report");
        assert_eq!(body["sort"], serde_json::json!(["date.created:desc"]));
    }

    #[test]
    fn test_reports_limit_pinned_to_one() {
        let mut query = ReportsQuery::new("flood");
        query.limit = 25;
        assert_eq!(query.to_body("reliefwatch")["limit"], 1);
    }

    #[test]
    fn test_disasters_body() {
        let body = DisastersQuery::new("avalanche")
            .status("ongoing")
            .country("Nepal")
            .disaster_type("Snow Avalanche")
            .limit(5)
            .to_body("reliefwatch");

        assert_eq!(body["query"]["value"], "avalanche");
        assert!(body["query"].get("operator").is_none());
        assert_eq!(body["filter"]["operator"], "AND");
        let conditions = body["filter"]["conditions"].as_array().unwrap();
        assert_eq!(conditions.len(), 3);
        assert_eq!(conditions[0]["field"], "status");
        assert_eq!(conditions[1]["field"], "country.name");
        assert_eq!(conditions[2]["field"], "type.name");
        assert_eq!(body["limit"], 5);
        assert!(body.get("preset").is_none());
    }

    #[test]
    fn test_disasters_detailed_fields() {
        let plain = DisastersQuery::new("").to_body("reliefwatch");
        let detailed = DisastersQuery::new("").detailed(true).to_body("reliefwatch");

        let plain_fields = plain["fields"]["include"].as_array().unwrap();
        let detailed_fields = detailed["fields"]["include"].as_array().unwrap();
        assert!(!plain_fields.contains(&serde_json::json!("description")));
        assert!(detailed_fields.contains(&serde_json::json!("description")));
        assert_eq!(detailed_fields.len(), plain_fields.len() + 1);
    }
}
