//! Record schemas: patient basic info, medical records, and history results.
//!
//! Field names on the wire are fixed: `identity`, `name`, `mobile` for
//! basic info and `identity`, `sickName`, `drugName` for medical records.

use serde::{Deserialize, Deserializer, Serialize};

use crate::codec::Record;

/// Patient basic information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicInfo {
    pub identity: String,
    pub name: String,
    pub mobile: String,
}

impl BasicInfo {
    pub fn new(identity: &str, name: &str, mobile: &str) -> Self {
        Self {
            identity: identity.to_owned(),
            name: name.to_owned(),
            mobile: mobile.to_owned(),
        }
    }
}

impl Record for BasicInfo {
    const KIND: &'static str = "BasicInfo";
}

/// A single medical record: diagnosis plus prescribed drugs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicalRecord {
    pub identity: String,
    #[serde(rename = "sickName")]
    pub sick_name: String,
    /// Prescribed drugs, in prescription order.
    #[serde(
        rename = "drugName",
        alias = "drugNames",
        deserialize_with = "null_as_empty"
    )]
    pub drug_names: Vec<String>,
}

impl MedicalRecord {
    pub fn new(identity: &str, sick_name: &str, drug_names: Vec<String>) -> Self {
        Self {
            identity: identity.to_owned(),
            sick_name: sick_name.to_owned(),
            drug_names,
        }
    }
}

impl Record for MedicalRecord {
    const KIND: &'static str = "MedicalRecord";
}

/// Every stored version of a medical record key, in store order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryResult {
    #[serde(rename = "recordInfos")]
    pub record_infos: Vec<MedicalRecord>,
}

impl HistoryResult {
    pub fn len(&self) -> usize {
        self.record_infos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record_infos.is_empty()
    }

    /// The most recent version, if any.
    pub fn latest(&self) -> Option<&MedicalRecord> {
        self.record_infos.last()
    }
}

impl From<Vec<MedicalRecord>> for HistoryResult {
    fn from(record_infos: Vec<MedicalRecord>) -> Self {
        Self { record_infos }
    }
}

/// Older writers encode an absent drug list as `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
