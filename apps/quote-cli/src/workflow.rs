//! # Save Workflow
//!
//! Turns a prepared draft into a stored quotation with its document attached.
//!
//! ## Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  draft.to_record(totals)   "Created By" missing? ──► error, no I/O      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  QuotationStore::create_quotation ──► record id (missing ──► error)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  QuotationStore::update_shipping_address   failure ──► warn, continue   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DocumentRenderer::render ──► ArtifactStore::store ──► URL              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  QuotationStore::attach_document {"Quotation": [{url, filename}]}       │
//! │       │                               failure ──► error                 │
//! │       ▼                                                                 │
//! │  QuotationStore::has_document        (check only, never fails the save) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failure after the record is created leaves the record in place without
//! a document. Nothing is rolled back.

use async_trait::async_trait;
use chrono::NaiveDate;
use quote_core::address::ShippingAddress;
use quote_core::document::QuotationDocument;
use quote_core::quotation::{AttachmentFields, QuotationDates, QuotationId, QuotationRecord};
use quote_core::{Client, Product, QuotationDraft, TotalsResult};
use quote_store::{Store, StoreResult};
use tracing::{debug, info, warn};

use crate::error::AppError;

// =============================================================================
// Collaborators
// =============================================================================

/// Persistence for quotation records.
#[async_trait]
pub trait QuotationStore: Send + Sync {
    /// The number the next quotation should get.
    async fn next_quotation_id(&self) -> StoreResult<QuotationId>;

    /// Stores the record and returns its id.
    async fn create_quotation(&self, record: &QuotationRecord) -> StoreResult<String>;

    async fn update_shipping_address(
        &self,
        client_id: &str,
        address: &ShippingAddress,
    ) -> StoreResult<()>;

    async fn attach_document(&self, record_id: &str, attachment: &AttachmentFields)
        -> StoreResult<()>;

    async fn has_document(&self, record_id: &str) -> StoreResult<bool>;
}

/// A rendered document, ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedArtifact {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Lays a quotation document out into a binary artifact.
pub trait DocumentRenderer: Send + Sync {
    fn render(&self, document: &QuotationDocument) -> Result<RenderedArtifact, AppError>;
}

/// Keeps rendered artifacts and hands back a URL for each.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Stores `artifact` as `quotations/<filename>` and returns its URL.
    async fn store(&self, filename: &str, artifact: &RenderedArtifact) -> Result<String, AppError>;
}

#[async_trait]
impl QuotationStore for Store {
    async fn next_quotation_id(&self) -> StoreResult<QuotationId> {
        self.quotations().next_id().await
    }

    async fn create_quotation(&self, record: &QuotationRecord) -> StoreResult<String> {
        self.quotations().create(record).await
    }

    async fn update_shipping_address(
        &self,
        client_id: &str,
        address: &ShippingAddress,
    ) -> StoreResult<()> {
        self.clients().update_shipping_address(client_id, address).await
    }

    async fn attach_document(
        &self,
        record_id: &str,
        attachment: &AttachmentFields,
    ) -> StoreResult<()> {
        self.quotations().attach_document(record_id, attachment).await
    }

    async fn has_document(&self, record_id: &str) -> StoreResult<bool> {
        self.quotations().has_document(record_id).await
    }
}

// =============================================================================
// Workflow
// =============================================================================

/// What a successful save produced.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalizedQuotation {
    pub record_id: String,
    pub quotation_id: String,
    pub url: String,
    pub filename: String,
    pub totals: TotalsResult,
}

/// Fills in a missing quotation number (next from the store) and missing
/// dates (`today`, valid for `validity_days`).
pub async fn prepare_draft<S>(
    store: &S,
    draft: &mut QuotationDraft,
    today: NaiveDate,
    validity_days: u32,
) -> Result<(), AppError>
where
    S: QuotationStore + ?Sized,
{
    if draft.id.is_none() {
        draft.id = Some(store.next_quotation_id().await?);
    }
    if draft.dates.is_none() {
        draft.dates = Some(QuotationDates::starting(today, validity_days));
    }
    Ok(())
}

/// Saves `draft`: record, shipping address, document, attachment.
///
/// `client` and `catalog` only feed the printed document (bill-to block and
/// product names).
pub async fn finalize_quotation<S, R, A>(
    store: &S,
    renderer: &R,
    artifacts: &A,
    draft: &QuotationDraft,
    client: Option<&Client>,
    catalog: &[Product],
) -> Result<FinalizedQuotation, AppError>
where
    S: QuotationStore + ?Sized,
    R: DocumentRenderer + ?Sized,
    A: ArtifactStore + ?Sized,
{
    let totals = draft.totals();
    let record = draft.to_record(&totals)?;

    info!(
        quotation_id = %record.quotation_id,
        lines = draft.lines.len(),
        grand_total = totals.grand_total.value(),
        "Saving quotation"
    );

    let record_id = store.create_quotation(&record).await?;

    if let Some(client_id) = draft.client() {
        if let Err(error) = store.update_shipping_address(client_id, &draft.ship_to).await {
            warn!(client_id = %client_id, %error, "Failed to update client shipping address");
        }
    }

    let document = QuotationDocument::build(draft, client, catalog, &totals);
    let filename = document.filename();
    let artifact = renderer.render(&document)?;
    let url = artifacts.store(&filename, &artifact).await?;

    debug!(filename = %filename, url = %url, "Document stored");

    store
        .attach_document(&record_id, &AttachmentFields::single(&url, &filename))
        .await?;

    match store.has_document(&record_id).await {
        Ok(true) => debug!(record_id = %record_id, "Attachment confirmed"),
        Ok(false) => warn!(record_id = %record_id, "Attachment not visible on record yet"),
        Err(error) => warn!(record_id = %record_id, %error, "Could not confirm attachment"),
    }

    info!(record_id = %record_id, url = %url, "Quotation saved");

    Ok(FinalizedQuotation {
        record_id,
        quotation_id: record.quotation_id,
        url,
        filename,
        totals,
    })
}
