//! # Team Repository
//!
//! Team members who can be recorded as a quotation's creator. Team tables
//! name the column differently from base to base, so the name is taken from
//! the first of "Name", "Employee Name" or "Full Name" that has a value.

use quote_core::TeamMember;
use tracing::debug;

use crate::client::{ListQuery, Record, TableClient};
use crate::error::StoreResult;

pub const NAME_FIELDS: [&str; 3] = ["Name", "Employee Name", "Full Name"];

#[derive(Debug, Clone)]
pub struct TeamRepository {
    client: TableClient,
    table: String,
}

impl TeamRepository {
    pub fn new(client: TableClient, table: String) -> Self {
        TeamRepository { client, table }
    }

    /// Team members with a name. Nameless records are skipped.
    pub async fn list(&self) -> StoreResult<Vec<TeamMember>> {
        let records = self.client.list(&self.table, &ListQuery::new()).await?;
        let members: Vec<TeamMember> = records.iter().filter_map(member_from_record).collect();

        debug!(
            count = members.len(),
            skipped = records.len() - members.len(),
            "Loaded team"
        );
        Ok(members)
    }
}

pub fn member_from_record(record: &Record) -> Option<TeamMember> {
    record.first_text(&NAME_FIELDS).map(|name| TeamMember {
        id: record.id.clone(),
        name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(fields: serde_json::Value) -> Record {
        serde_json::from_value(json!({"id": "recT1", "fields": fields})).unwrap()
    }

    #[test]
    fn test_name_fallbacks() {
        let member = member_from_record(&record(json!({"Employee Name": "Ravi"}))).unwrap();
        assert_eq!(member.name, "Ravi");
        assert_eq!(member.id, "recT1");

        let member =
            member_from_record(&record(json!({"Name": "  ", "Full Name": "Asha Rao"}))).unwrap();
        assert_eq!(member.name, "Asha Rao");
    }

    #[test]
    fn test_nameless_record_skipped() {
        assert_eq!(member_from_record(&record(json!({"Role": "Sales"}))), None);
    }
}
