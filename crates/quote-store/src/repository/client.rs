//! # Client Repository
//!
//! Clients the quotation is billed to.
//!
//! ## Key Operations
//! - List clients for the picker
//! - Create a client (stamped with a `CL-<millis>` code)
//! - Write back the shipping address edited on a quotation

use chrono::{DateTime, Utc};
use quote_core::address::ShippingAddress;
use quote_core::validation::validate_client_name;
use quote_core::{Client, NewClient};
use serde::Serialize;
use tracing::{debug, info};

use crate::client::{ListQuery, Record, TableClient};
use crate::error::StoreResult;

pub const FIELD_NAME: &str = "Client Name";
pub const FIELD_CONTACT: &str = "Contact Details";
pub const FIELD_CITY: &str = "City";
pub const FIELD_TYPE: &str = "Client Type";
pub const FIELD_GST_NUMBER: &str = "GST Number";
pub const FIELD_SHIPPING_ADDRESS: &str = "Shipping Address";

#[derive(Serialize)]
struct ShippingAddressPatch {
    #[serde(rename = "Shipping Address")]
    shipping_address: String,
}

#[derive(Debug, Clone)]
pub struct ClientRepository {
    client: TableClient,
    table: String,
}

impl ClientRepository {
    pub fn new(client: TableClient, table: String) -> Self {
        ClientRepository { client, table }
    }

    pub async fn list(&self) -> StoreResult<Vec<Client>> {
        let records = self.client.list(&self.table, &ListQuery::new()).await?;
        let clients: Vec<Client> = records.iter().map(client_from_record).collect();

        debug!(count = clients.len(), "Loaded clients");
        Ok(clients)
    }

    /// Creates a client record.
    ///
    /// ## Errors
    /// `Validation` for a blank or over-long name, before any request.
    pub async fn create(&self, new_client: NewClient, now: DateTime<Utc>) -> StoreResult<Client> {
        validate_client_name(&new_client.name)?;

        let fields = new_client.into_fields(now);
        let record = self.client.create(&self.table, &fields).await?;

        info!(record_id = %record.id, code = %fields.client_code, "Client created");

        // Use what was sent for anything the store didn't echo back.
        let mut client = client_from_record(&record);
        if client.name.is_empty() {
            client.name = fields.name;
        }
        Ok(client)
    }

    /// Replaces a client's stored shipping address.
    pub async fn update_shipping_address(
        &self,
        client_id: &str,
        address: &ShippingAddress,
    ) -> StoreResult<()> {
        let patch = ShippingAddressPatch {
            shipping_address: address.to_field_value(),
        };
        self.client.update(&self.table, client_id, &patch).await?;

        debug!(client_id = %client_id, "Shipping address updated");
        Ok(())
    }
}

pub fn client_from_record(record: &Record) -> Client {
    let text = |field: &str| record.text(field).unwrap_or_default();

    Client {
        id: record.id.clone(),
        name: text(FIELD_NAME),
        contact_details: text(FIELD_CONTACT),
        city: text(FIELD_CITY),
        client_type: text(FIELD_TYPE),
        gst_number: text(FIELD_GST_NUMBER),
        shipping_address: text(FIELD_SHIPPING_ADDRESS),
    }
}
