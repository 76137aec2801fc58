use serde::{Deserialize, Serialize};

pub const INITIAL_PRIORITY_LEVEL: &str = "Standard";
pub const INITIAL_CASE_TYPE: &str = "Online Fraud/Scam";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum CaseStatus {
    #[default]
    #[serde(rename = "Evidence Collection")]
    EvidenceCollection,
}

/// Contents of `case_info.json`. Written once at scaffold time; later edits are
/// made by hand or by other tooling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaseInfo {
    pub case_id: String,
    pub created_date: String,
    pub user_initials: String,
    pub status: CaseStatus,
    pub last_updated: String,
    pub evidence_count: u64,
    pub priority_level: String,
    pub case_type: String,
}

impl CaseInfo {
    pub fn new(case_id: &str, user_initials: &str, timestamp: &str) -> Self {
        Self {
            case_id: case_id.to_string(),
            created_date: timestamp.to_string(),
            user_initials: user_initials.to_string(),
            status: CaseStatus::EvidenceCollection,
            last_updated: timestamp.to_string(),
            evidence_count: 0,
            priority_level: INITIAL_PRIORITY_LEVEL.to_string(),
            case_type: INITIAL_CASE_TYPE.to_string(),
        }
    }
}

/// One row of `evidence_log.csv`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvidenceLogEntry {
    pub date_collected: String,
    pub evidence_type: String,
    pub file_name: String,
    pub description: String,
    pub source: String,
    pub importance_level: String,
    pub file_size: String,
    pub notes: String,
}

impl EvidenceLogEntry {
    /// The worked example shipped in every fresh log.
    pub fn example() -> Self {
        Self {
            date_collected: "2024-01-15".to_string(),
            evidence_type: "WhatsApp".to_string(),
            file_name: "2024-01-15_WhatsApp_Initial_Contact.txt".to_string(),
            description: "First conversation with scammer".to_string(),
            source: "WhatsApp Export".to_string(),
            importance_level: "Critical".to_string(),
            file_size: "156KB".to_string(),
            notes: "Contains first promises and hook".to_string(),
        }
    }
}
