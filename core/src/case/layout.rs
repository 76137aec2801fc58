/// What a top-level case folder holds besides its README.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderContents {
    Subfolders(&'static [&'static str]),
    StandardFiles(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FolderSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub contents: FolderContents,
}

pub const CASE_INFO_FILE: &str = "case_info.json";
pub const EVIDENCE_LOG_FILE: &str = "evidence_log.csv";
pub const NAMING_GUIDE_FILE: &str = "FILE_NAMING_GUIDE.txt";
pub const README_FILE: &str = "README.md";

/// Top-level folders in creation order.
pub const CASE_FOLDERS: &[FolderSpec] = &[
    FolderSpec {
        name: "01_Communications",
        description: "All messages, emails, calls, and social media interactions",
        contents: FolderContents::Subfolders(&[
            "WhatsApp",
            "Email",
            "Phone_Calls",
            "Social_Media",
            "Other",
        ]),
    },
    FolderSpec {
        name: "02_Financial_Evidence",
        description: "Bank statements, transaction records, crypto exchange data",
        contents: FolderContents::Subfolders(&[
            "Bank_Statements",
            "Crypto_Exchanges",
            "Transfer_Services",
            "Receipts",
        ]),
    },
    FolderSpec {
        name: "03_Documents",
        description: "Contracts, agreements, fake IDs, official papers",
        contents: FolderContents::Subfolders(&[
            "Contracts",
            "Identity_Documents",
            "Websites",
            "Screenshots",
        ]),
    },
    FolderSpec {
        name: "04_Technical_Evidence",
        description: "Remote access logs, software installations, system evidence",
        contents: FolderContents::Subfolders(&[
            "Remote_Access_Logs",
            "System_Logs",
            "Installed_Software",
            "Network_Activity",
        ]),
    },
    FolderSpec {
        name: "05_Timeline",
        description: "Chronological organization of events",
        contents: FolderContents::StandardFiles(&[
            "timeline.md",
            "key_dates.txt",
            "sequence_of_events.md",
        ]),
    },
    FolderSpec {
        name: "06_Analysis",
        description: "Case summary, modus operandi analysis, impact assessment",
        contents: FolderContents::StandardFiles(&[
            "case_summary.md",
            "modus_operandi.md",
            "financial_impact.md",
            "evidence_checklist.md",
        ]),
    },
];

pub fn folder(name: &str) -> Option<&'static FolderSpec> {
    CASE_FOLDERS.iter().find(|f| f.name == name)
}
