//! # Quotation Repository
//!
//! Quotation numbering, record creation and document attachment.
//!
//! ## Numbering
//! ```text
//! GET …/Quotations?maxRecords=1
//!                 &sort[0][field]=Quotation ID&sort[0][direction]=desc
//!                 &fields[]=Quotation ID
//!      │
//!      ├── no records ───────────────► Q-00001
//!      └── "Q-00041" ──► next_after ─► Q-00042
//! ```
//!
//! Numbering reads the highest stored id and adds one. Two desks saving at
//! the same moment can both get the same number; the store does not enforce
//! uniqueness.
//!
//! The sort is on text. Once `Q-100000` exists, `"Q-99999"` still sorts
//! highest and every later save is offered `Q-100000` again.

use quote_core::quotation::{AttachmentFields, QuotationId, QuotationRecord};
use tracing::{debug, info};

use crate::client::{ListQuery, Record, SortDirection, TableClient};
use crate::error::StoreResult;

pub const FIELD_QUOTATION_ID: &str = "Quotation ID";
pub const FIELD_DOCUMENT: &str = "Quotation";

#[derive(Debug, Clone)]
pub struct QuotationRepository {
    client: TableClient,
    table: String,
}

impl QuotationRepository {
    pub fn new(client: TableClient, table: String) -> Self {
        QuotationRepository { client, table }
    }

    /// The highest stored quotation number, as stored.
    pub async fn latest_id(&self) -> StoreResult<Option<String>> {
        let query = ListQuery::new()
            .field(FIELD_QUOTATION_ID)
            .sort(FIELD_QUOTATION_ID, SortDirection::Desc)
            .max_records(1);

        let records = self.client.list(&self.table, &query).await?;
        Ok(records.first().and_then(|r| r.text(FIELD_QUOTATION_ID)))
    }

    /// The number the next quotation should get.
    pub async fn next_id(&self) -> StoreResult<QuotationId> {
        let latest = self.latest_id().await?;
        let next = QuotationId::next_after(latest.as_deref());

        debug!(latest = ?latest, next = %next, "Assigned quotation number");
        Ok(next)
    }

    /// Stores a new quotation and returns its record id.
    pub async fn create(&self, record: &QuotationRecord) -> StoreResult<String> {
        let created = self.client.create(&self.table, record).await?;

        info!(
            record_id = %created.id,
            quotation_id = %record.quotation_id,
            total_cost = record.total_cost.value(),
            "Quotation record created"
        );
        Ok(created.id)
    }

    /// Links the rendered document to a quotation record.
    pub async fn attach_document(
        &self,
        record_id: &str,
        attachment: &AttachmentFields,
    ) -> StoreResult<()> {
        self.client.update(&self.table, record_id, attachment).await?;

        info!(record_id = %record_id, "Quotation document attached");
        Ok(())
    }

    /// Fetches a quotation record.
    pub async fn get(&self, record_id: &str) -> StoreResult<Record> {
        self.client.get(&self.table, record_id).await
    }

    /// Whether the stored record lists at least one attached document.
    /// A record the store no longer has carries none.
    pub async fn has_document(&self, record_id: &str) -> StoreResult<bool> {
        let record = match self.get(record_id).await {
            Ok(record) => record,
            Err(err) if err.is_not_found() => return Ok(false),
            Err(err) => return Err(err),
        };
        Ok(record
            .fields
            .get(FIELD_DOCUMENT)
            .and_then(|v| v.as_array())
            .is_some_and(|docs| !docs.is_empty()))
    }
}
