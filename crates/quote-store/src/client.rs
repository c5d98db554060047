//! # Table Client
//!
//! The single HTTP code path to the remote tabular store.
//!
//! ## Request Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  {api_url}/{base_id}/{table}[/{record_id}]                              │
//! │  Authorization: Bearer <api key>                                        │
//! │                                                                         │
//! │  list    GET    …/{table}?fields[]=…&sort[0][field]=…&offset=…          │
//! │  get     GET    …/{table}/{record_id}                                   │
//! │  create  POST   …/{table}            {"fields": {…}}                    │
//! │  update  PATCH  …/{table}/{record_id} {"fields": {…}}                   │
//! │                                                                         │
//! │  non-2xx ──► StoreError::Api { status, message: error.message }         │
//! │  404 on get/update ──► StoreError::NotFound                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Paging
//! A list response carries at most one page of records plus an `offset`
//! token while more remain. [`TableClient::list`] follows the token until
//! it disappears or `max_records` is reached.

use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};

// =============================================================================
// Records
// =============================================================================

/// A stored record: opaque id plus a bag of named fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub fields: Map<String, Value>,

    #[serde(default, rename = "createdTime", skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
}

impl Record {
    /// Non-blank text in `field`. Numbers are rendered as text.
    pub fn text(&self, field: &str) -> Option<String> {
        match self.fields.get(field)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// First non-blank text among `fields`, in order.
    pub fn first_text(&self, fields: &[&str]) -> Option<String> {
        fields.iter().find_map(|f| self.text(f))
    }

    /// Numeric value in `field`; numeric strings are accepted.
    pub fn number(&self, field: &str) -> Option<f64> {
        let value = match self.fields.get(field)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        value.filter(|n| n.is_finite())
    }
}

#[derive(Debug, Deserialize)]
struct ListPage {
    #[serde(default)]
    records: Vec<Record>,
    #[serde(default)]
    offset: Option<String>,
}

#[derive(Serialize)]
struct FieldsBody<'a, T: Serialize + ?Sized> {
    fields: &'a T,
}

// =============================================================================
// List Query
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Options for [`TableClient::list`].
///
/// ## Example
/// ```rust
/// use quote_store::client::{ListQuery, SortDirection};
///
/// let latest = ListQuery::new()
///     .field("Quotation ID")
///     .sort("Quotation ID", SortDirection::Desc)
///     .max_records(1);
/// assert_eq!(latest.max_records, Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub fields: Vec<String>,
    pub sort: Vec<(String, SortDirection)>,
    pub max_records: Option<u32>,
}

impl ListQuery {
    pub fn new() -> Self {
        ListQuery::default()
    }

    /// Only return `name` (repeatable).
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(name.into());
        self
    }

    pub fn sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort.push((field.into(), direction));
        self
    }

    pub fn max_records(mut self, max: u32) -> Self {
        self.max_records = Some(max);
        self
    }

    fn params(&self, offset: Option<&str>) -> Vec<(String, String)> {
        let mut params = Vec::new();
        for field in &self.fields {
            params.push(("fields[]".to_string(), field.clone()));
        }
        for (i, (field, direction)) in self.sort.iter().enumerate() {
            params.push((format!("sort[{}][field]", i), field.clone()));
            params.push((format!("sort[{}][direction]", i), direction.as_str().to_string()));
        }
        if let Some(max) = self.max_records {
            params.push(("maxRecords".to_string(), max.to_string()));
        }
        if let Some(offset) = offset {
            params.push(("offset".to_string(), offset.to_string()));
        }
        params
    }
}

// =============================================================================
// Client
// =============================================================================

/// HTTP client bound to one base of the remote store.
#[derive(Debug, Clone)]
pub struct TableClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: Secret<String>,
}

impl TableClient {
    /// Creates a client from configuration.
    ///
    /// ## Errors
    /// `InvalidConfiguration` when the API URL can't carry a path, or the
    /// HTTP client can't be built.
    pub fn new(config: &StoreConfig) -> StoreResult<Self> {
        let invalid_url = |reason: String| StoreError::InvalidConfiguration {
            name: "AIRTABLE_API_URL".to_string(),
            reason,
        };

        let mut base_url = Url::parse(config.api_url.trim()).map_err(|e| invalid_url(e.to_string()))?;
        base_url
            .path_segments_mut()
            .map_err(|_| invalid_url("URL cannot be a base".to_string()))?
            .pop_if_empty()
            .push(&config.base_id);

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| StoreError::InvalidConfiguration {
                name: "http client".to_string(),
                reason: e.to_string(),
            })?;

        Ok(TableClient {
            http,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    /// `{api_url}/{base_id}/{segments…}` with each segment percent-encoded.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.extend(segments);
        }
        url
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        self.http
            .request(method, self.url(segments))
            .bearer_auth(self.api_key.expose_secret())
    }

    /// Lists records in `table`, following pages.
    pub async fn list(&self, table: &str, query: &ListQuery) -> StoreResult<Vec<Record>> {
        let mut records = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            debug!(table = %table, offset = ?offset, "Listing records");

            let response = self
                .request(Method::GET, &[table])
                .query(&query.params(offset.as_deref()))
                .send()
                .await?;
            let page: ListPage = check(response, table, None).await?.json().await?;

            records.extend(page.records);

            if let Some(max) = query.max_records {
                if records.len() >= max as usize {
                    records.truncate(max as usize);
                    break;
                }
            }

            match page.offset {
                Some(next) if !next.is_empty() => offset = Some(next),
                _ => break,
            }
        }

        debug!(table = %table, count = records.len(), "Listed records");
        Ok(records)
    }

    /// Fetches one record.
    pub async fn get(&self, table: &str, record_id: &str) -> StoreResult<Record> {
        debug!(table = %table, record_id = %record_id, "Fetching record");

        let response = self
            .request(Method::GET, &[table, record_id])
            .send()
            .await?;
        Ok(check(response, table, Some(record_id)).await?.json().await?)
    }

    /// Creates a record from `fields` and returns it with its new id.
    ///
    /// ## Errors
    /// `MissingRecordId` when the store answers without an id.
    pub async fn create<T>(&self, table: &str, fields: &T) -> StoreResult<Record>
    where
        T: Serialize + ?Sized,
    {
        debug!(table = %table, "Creating record");

        let response = self
            .request(Method::POST, &[table])
            .json(&FieldsBody { fields })
            .send()
            .await?;
        let record: Record = check(response, table, None).await?.json().await?;

        if record.id.trim().is_empty() {
            return Err(StoreError::MissingRecordId {
                table: table.to_string(),
            });
        }

        Ok(record)
    }

    /// Updates only the given `fields` of a record.
    pub async fn update<T>(&self, table: &str, record_id: &str, fields: &T) -> StoreResult<Record>
    where
        T: Serialize + ?Sized,
    {
        debug!(table = %table, record_id = %record_id, "Updating record");

        let response = self
            .request(Method::PATCH, &[table, record_id])
            .json(&FieldsBody { fields })
            .send()
            .await?;
        Ok(check(response, table, Some(record_id)).await?.json().await?)
    }
}

/// Passes 2xx responses through; turns everything else into an error
/// carrying the store's own message when it sent one.
async fn check(response: Response, table: &str, record_id: Option<&str>) -> StoreResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::NOT_FOUND {
        if let Some(id) = record_id {
            return Err(StoreError::not_found(table, id));
        }
    }

    let body = response.text().await.unwrap_or_default();
    Err(StoreError::Api {
        status: status.as_u16(),
        message: error_message(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        }),
    })
}

/// Reads `{"error": {"message": …}}` or `{"error": "CODE"}`.
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("error")? {
        Value::String(code) => Some(code.clone()),
        Value::Object(err) => err
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| err.get("type").and_then(Value::as_str))
            .map(str::to_string),
        _ => None,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(fields: Value) -> Record {
        Record {
            id: "rec1".to_string(),
            fields: fields.as_object().cloned().unwrap_or_default(),
            created_time: None,
        }
    }

    #[test]
    fn test_record_accessors() {
        let r = record(json!({
            "Name": "  Asha ",
            "Blank": "   ",
            "Price": 120.5,
            "PriceText": "99",
            "Bad": "n/a",
            "Links": ["recA"]
        }));

        assert_eq!(r.text("Name").as_deref(), Some("Asha"));
        assert_eq!(r.text("Blank"), None);
        assert_eq!(r.text("Links"), None);
        assert_eq!(r.text("Price").as_deref(), Some("120.5"));
        assert_eq!(r.first_text(&["Missing", "Blank", "Name"]).as_deref(), Some("Asha"));
        assert_eq!(r.number("Price"), Some(120.5));
        assert_eq!(r.number("PriceText"), Some(99.0));
        assert_eq!(r.number("Bad"), None);
        assert_eq!(r.number("Missing"), None);
    }

    #[test]
    fn test_query_params() {
        let params = ListQuery::new()
            .field("Quotation ID")
            .sort("Quotation ID", SortDirection::Desc)
            .max_records(1)
            .params(Some("itr2"));

        assert_eq!(
            params,
            vec![
                ("fields[]".to_string(), "Quotation ID".to_string()),
                ("sort[0][field]".to_string(), "Quotation ID".to_string()),
                ("sort[0][direction]".to_string(), "desc".to_string()),
                ("maxRecords".to_string(), "1".to_string()),
                ("offset".to_string(), "itr2".to_string()),
            ]
        );
    }

    #[test]
    fn test_error_message_shapes() {
        assert_eq!(
            error_message(r#"{"error":{"type":"INVALID_REQUEST","message":"Unknown field"}}"#)
                .as_deref(),
            Some("Unknown field")
        );
        assert_eq!(
            error_message(r#"{"error":"NOT_FOUND"}"#).as_deref(),
            Some("NOT_FOUND")
        );
        assert_eq!(error_message("<html>"), None);
    }

    #[test]
    fn test_urls_are_encoded() {
        let config = StoreConfig::new("appBase", "key").api_url("https://example.test/v0/");
        let client = TableClient::new(&config).unwrap();
        assert_eq!(
            client.url(&["Sales Team", "rec1"]).as_str(),
            "https://example.test/v0/appBase/Sales%20Team/rec1"
        );
    }

    #[test]
    fn test_rejects_unusable_url() {
        let config = StoreConfig::new("appBase", "key").api_url("not a url");
        assert!(matches!(
            TableClient::new(&config),
            Err(StoreError::InvalidConfiguration { .. })
        ));
    }
}
