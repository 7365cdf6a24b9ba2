//! Lead records and the static column layout
//!
//! A `Lead` is one row of the grid. Columns are fixed at compile time and
//! map a display position to a `LeadField`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a lead, assigned by the remote store
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadId(String);

impl LeadId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mint a fresh random identifier
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LeadId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Editable string fields of a lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadField {
    CompanyName,
    Website,
    Description,
    CompanyAddress,
    CompanyLinkedin,
    CompanyEmail,
    #[serde(rename = "company_email_2")]
    CompanyEmail2,
    CompanyFacebook,
    CompanyInstagram,
    CompanyTwitter,
    CompanyPhone,
    #[serde(rename = "company_phone_2")]
    CompanyPhone2,
}

impl LeadField {
    /// Column name in the remote store
    pub fn key(self) -> &'static str {
        match self {
            LeadField::CompanyName => "company_name",
            LeadField::Website => "website",
            LeadField::Description => "description",
            LeadField::CompanyAddress => "company_address",
            LeadField::CompanyLinkedin => "company_linkedin",
            LeadField::CompanyEmail => "company_email",
            LeadField::CompanyEmail2 => "company_email_2",
            LeadField::CompanyFacebook => "company_facebook",
            LeadField::CompanyInstagram => "company_instagram",
            LeadField::CompanyTwitter => "company_twitter",
            LeadField::CompanyPhone => "company_phone",
            LeadField::CompanyPhone2 => "company_phone_2",
        }
    }
}

/// Semantic type of a column, drives link rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Url,
    Email,
    Phone,
}

/// Icon shown next to a column label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnIcon {
    Link,
    Mail,
    Phone,
    Facebook,
    Instagram,
    Twitter,
}

/// Static description of a displayed column
#[derive(Debug, Clone, Copy)]
pub struct ColumnDef {
    pub field: LeadField,
    pub label: &'static str,
    pub field_type: FieldType,
    pub icon: Option<ColumnIcon>,
}

const fn column(
    field: LeadField,
    label: &'static str,
    field_type: FieldType,
    icon: Option<ColumnIcon>,
) -> ColumnDef {
    ColumnDef {
        field,
        label,
        field_type,
        icon,
    }
}

/// Displayed columns in order. `website` is stored but not shown.
pub static COLUMNS: &[ColumnDef] = &[
    column(LeadField::CompanyName, "Company", FieldType::Text, None),
    column(LeadField::CompanyAddress, "Address", FieldType::Text, None),
    column(LeadField::Description, "Description", FieldType::Text, None),
    column(
        LeadField::CompanyLinkedin,
        "LinkedIn",
        FieldType::Url,
        Some(ColumnIcon::Link),
    ),
    column(
        LeadField::CompanyEmail,
        "Email",
        FieldType::Email,
        Some(ColumnIcon::Mail),
    ),
    column(
        LeadField::CompanyEmail2,
        "Email 2",
        FieldType::Email,
        Some(ColumnIcon::Mail),
    ),
    column(
        LeadField::CompanyFacebook,
        "Facebook",
        FieldType::Url,
        Some(ColumnIcon::Facebook),
    ),
    column(
        LeadField::CompanyInstagram,
        "Instagram",
        FieldType::Url,
        Some(ColumnIcon::Instagram),
    ),
    column(
        LeadField::CompanyTwitter,
        "Twitter",
        FieldType::Url,
        Some(ColumnIcon::Twitter),
    ),
    column(
        LeadField::CompanyPhone,
        "Phone",
        FieldType::Phone,
        Some(ColumnIcon::Phone),
    ),
    column(
        LeadField::CompanyPhone2,
        "Phone 2",
        FieldType::Phone,
        Some(ColumnIcon::Phone),
    ),
];

/// Number of displayed columns
pub fn column_count() -> usize {
    COLUMNS.len()
}

/// Column definition at a display index
pub fn column_at(index: usize) -> Option<&'static ColumnDef> {
    COLUMNS.get(index)
}

/// One lead record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: LeadId,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub company_address: String,
    #[serde(default)]
    pub company_linkedin: String,
    #[serde(default)]
    pub company_email: String,
    #[serde(default)]
    pub company_email_2: String,
    #[serde(default)]
    pub company_facebook: String,
    #[serde(default)]
    pub company_instagram: String,
    #[serde(default)]
    pub company_twitter: String,
    #[serde(default)]
    pub company_phone: String,
    #[serde(default)]
    pub company_phone_2: String,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Lead {
    /// Create a lead with empty fields, created and updated at `created_at`
    pub fn new(id: LeadId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            company_name: String::new(),
            website: String::new(),
            description: String::new(),
            company_address: String::new(),
            company_linkedin: String::new(),
            company_email: String::new(),
            company_email_2: String::new(),
            company_facebook: String::new(),
            company_instagram: String::new(),
            company_twitter: String::new(),
            company_phone: String::new(),
            company_phone_2: String::new(),
            created_at,
            last_updated: created_at,
        }
    }

    /// Builder-style field setter
    pub fn with(mut self, field: LeadField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::CompanyName => &self.company_name,
            LeadField::Website => &self.website,
            LeadField::Description => &self.description,
            LeadField::CompanyAddress => &self.company_address,
            LeadField::CompanyLinkedin => &self.company_linkedin,
            LeadField::CompanyEmail => &self.company_email,
            LeadField::CompanyEmail2 => &self.company_email_2,
            LeadField::CompanyFacebook => &self.company_facebook,
            LeadField::CompanyInstagram => &self.company_instagram,
            LeadField::CompanyTwitter => &self.company_twitter,
            LeadField::CompanyPhone => &self.company_phone,
            LeadField::CompanyPhone2 => &self.company_phone_2,
        }
    }

    pub fn set(&mut self, field: LeadField, value: impl Into<String>) {
        let slot = match field {
            LeadField::CompanyName => &mut self.company_name,
            LeadField::Website => &mut self.website,
            LeadField::Description => &mut self.description,
            LeadField::CompanyAddress => &mut self.company_address,
            LeadField::CompanyLinkedin => &mut self.company_linkedin,
            LeadField::CompanyEmail => &mut self.company_email,
            LeadField::CompanyEmail2 => &mut self.company_email_2,
            LeadField::CompanyFacebook => &mut self.company_facebook,
            LeadField::CompanyInstagram => &mut self.company_instagram,
            LeadField::CompanyTwitter => &mut self.company_twitter,
            LeadField::CompanyPhone => &mut self.company_phone,
            LeadField::CompanyPhone2 => &mut self.company_phone_2,
        };
        *slot = value.into();
    }

    /// Value shown in the cell at display column `col`
    pub fn cell(&self, col: usize) -> &str {
        column_at(col).map(|c| self.get(c.field)).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_columns_layout() {
        assert_eq!(column_count(), 11);
        assert_eq!(COLUMNS[0].label, "Company");
        assert_eq!(COLUMNS[3].field_type, FieldType::Url);
        assert_eq!(COLUMNS[10].field, LeadField::CompanyPhone2);
        assert!(COLUMNS.iter().all(|c| c.field != LeadField::Website));
        assert!(column_at(11).is_none());
    }

    #[test]
    fn test_lead_get_set() {
        let mut lead = Lead::new(LeadId::new("a"), ts(0));
        lead.set(LeadField::CompanyEmail2, "x@y.z");
        assert_eq!(lead.get(LeadField::CompanyEmail2), "x@y.z");
        assert_eq!(lead.cell(5), "x@y.z");
        assert_eq!(lead.cell(99), "");
    }

    #[test]
    fn test_lead_deserialize_missing_fields() {
        let json = r#"{
            "id": "lead-1",
            "company_name": "Acme",
            "created_at": "2024-01-02T03:04:05Z",
            "last_updated": "2024-01-02T03:04:05Z"
        }"#;
        let lead: Lead = serde_json::from_str(json).unwrap();
        assert_eq!(lead.id.as_str(), "lead-1");
        assert_eq!(lead.company_name, "Acme");
        assert_eq!(lead.company_phone, "");
    }

    #[test]
    fn test_field_keys_match_serde_names() {
        let lead = Lead::new(LeadId::new("a"), ts(0)).with(LeadField::CompanyEmail2, "e");
        let value = serde_json::to_value(&lead).unwrap();
        assert_eq!(value[LeadField::CompanyEmail2.key()], "e");
    }
}
