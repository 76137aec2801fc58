use crate::error::CoreResult;

use super::layout::{FolderContents, FolderSpec};
use super::model::{CaseInfo, EvidenceLogEntry};

pub const EVIDENCE_LOG_COLUMNS: [&str; 8] = [
    "Date_Collected",
    "Evidence_Type",
    "File_Name",
    "Description",
    "Source",
    "Importance_Level",
    "File_Size",
    "Notes",
];

pub fn render_folder_readme(spec: &FolderSpec) -> String {
    let mut out = format!("# {}\n\n{}\n\n", spec.name, spec.description);
    match spec.contents {
        FolderContents::Subfolders(names) => {
            out.push_str("## Subfolders:\n");
            for name in names {
                out.push_str(&format!("- `{}/`\n", name));
            }
        }
        FolderContents::StandardFiles(names) => {
            out.push_str("## Standard Files:\n");
            for name in names {
                out.push_str(&format!("- `{}`\n", name));
            }
        }
    }
    out
}

pub fn render_evidence_log_csv(entries: &[EvidenceLogEntry]) -> CoreResult<String> {
    let mut wtr = csv::WriterBuilder::new().from_writer(vec![]);
    wtr.write_record(EVIDENCE_LOG_COLUMNS)?;
    for e in entries {
        wtr.write_record([
            &e.date_collected,
            &e.evidence_type,
            &e.file_name,
            &e.description,
            &e.source,
            &e.importance_level,
            &e.file_size,
            &e.notes,
        ])?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).replace("\r\n", "\n"))
}

/// Two-space indented JSON in field declaration order, no trailing newline.
pub fn render_case_info_json(info: &CaseInfo) -> CoreResult<String> {
    Ok(serde_json::to_string_pretty(info)?)
}
