use crate::error::{CoreError, CoreResult};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

pub const DEFAULT_USER_INITIALS: &str = "USER";

/// Local wall-clock time, or UTC when the local offset cannot be determined
/// (e.g. a multi-threaded process on some unix targets).
pub fn now_local() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

pub fn iso_timestamp(ts: OffsetDateTime) -> CoreResult<String> {
    ts.format(&Rfc3339)
        .map_err(|e| CoreError::InvalidInput(format!("timestamp not representable: {}", e)))
}

/// `CASE_<YYYYMMDD_HHMMSS>`. Two calls within the same second collide.
pub fn synthesize_case_id(ts: OffsetDateTime) -> String {
    format!(
        "CASE_{:04}{:02}{:02}_{:02}{:02}{:02}",
        ts.year(),
        u8::from(ts.month()),
        ts.day(),
        ts.hour(),
        ts.minute(),
        ts.second()
    )
}

/// An absent or empty case id is synthesized from `ts`.
pub fn resolve_case_id(case_id: Option<&str>, ts: OffsetDateTime) -> String {
    match case_id {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => synthesize_case_id(ts),
    }
}

pub fn resolve_user_initials(user_initials: Option<&str>) -> String {
    user_initials.unwrap_or(DEFAULT_USER_INITIALS).to_string()
}

/// Rejects values that would not name exactly one directory component.
pub fn validate_component(label: &str, value: &str) -> CoreResult<()> {
    if value == "." || value == ".." {
        return Err(CoreError::InvalidInput(format!(
            "{} cannot be '{}'",
            label, value
        )));
    }
    if let Some(c) = value.chars().find(|c| matches!(c, '/' | '\\' | '\0')) {
        return Err(CoreError::InvalidInput(format!(
            "{} contains forbidden character {:?}",
            label, c
        )));
    }
    Ok(())
}

pub fn case_root_name(case_id: &str, user_initials: &str) -> String {
    format!("Case_{}_{}", case_id, user_initials)
}
