//! Built-in bodies for the standard files placed under the timeline and analysis
//! folders. Downstream tooling matches on the headings, checklist items and
//! table columns, so the embedded files must not be reformatted.

use std::borrow::Cow;

pub const NAMING_GUIDE: &str = include_str!("templates/FILE_NAMING_GUIDE.txt");

const CATALOG: &[(&str, &str)] = &[
    ("timeline.md", include_str!("templates/timeline.md")),
    ("case_summary.md", include_str!("templates/case_summary.md")),
    ("key_dates.txt", include_str!("templates/key_dates.txt")),
    (
        "sequence_of_events.md",
        include_str!("templates/sequence_of_events.md"),
    ),
    ("modus_operandi.md", include_str!("templates/modus_operandi.md")),
    (
        "financial_impact.md",
        include_str!("templates/financial_impact.md"),
    ),
    (
        "evidence_checklist.md",
        include_str!("templates/evidence_checklist.md"),
    ),
];

pub fn has_bespoke_template(filename: &str) -> bool {
    CATALOG.iter().any(|(name, _)| *name == filename)
}

/// Template body for `filename`, or a generic placeholder for names the catalog
/// does not know.
pub fn template_for(filename: &str) -> Cow<'static, str> {
    match CATALOG.iter().find(|(name, _)| *name == filename) {
        Some((_, body)) => Cow::Borrowed(body),
        None => Cow::Owned(format!(
            "# {}\n\nTemplate content for {}",
            filename, filename
        )),
    }
}
