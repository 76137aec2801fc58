use crate::config::{ScaffoldConfig, WritePolicy};
use crate::error::{CoreError, CoreResult};
use std::fs;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use super::case_id::{
    case_root_name, iso_timestamp, now_local, resolve_case_id, resolve_user_initials,
    validate_component,
};
use super::layout::{
    FolderContents, CASE_FOLDERS, CASE_INFO_FILE, EVIDENCE_LOG_FILE, NAMING_GUIDE_FILE,
    README_FILE,
};
use super::model::{CaseInfo, EvidenceLogEntry};
use super::render::{render_case_info_json, render_evidence_log_csv, render_folder_readme};
use super::templates::{template_for, NAMING_GUIDE};

/// Everything one scaffold run touched, in the order it happened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub case_id: String,
    pub user_initials: String,
    pub root: PathBuf,
    pub created_dirs: Vec<PathBuf>,
    pub written_files: Vec<PathBuf>,
    pub skipped_files: Vec<PathBuf>,
}

pub struct CaseDirectoryBuilder {
    base_dir: PathBuf,
    write_policy: WritePolicy,
}

impl CaseDirectoryBuilder {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            write_policy: WritePolicy::default(),
        }
    }

    pub fn from_config(cfg: &ScaffoldConfig) -> Self {
        Self::new(cfg.base_dir.clone()).with_write_policy(cfg.write_policy)
    }

    pub fn with_write_policy(mut self, policy: WritePolicy) -> Self {
        self.write_policy = policy;
        self
    }

    pub fn build(
        &self,
        case_id: Option<&str>,
        user_initials: Option<&str>,
    ) -> CoreResult<ScaffoldReport> {
        self.build_at(case_id, user_initials, now_local())
    }

    /// Scaffolds the case tree using `now` for the synthesized id and the
    /// `case_info.json` timestamps. Nothing is rolled back on failure.
    pub fn build_at(
        &self,
        case_id: Option<&str>,
        user_initials: Option<&str>,
        now: OffsetDateTime,
    ) -> CoreResult<ScaffoldReport> {
        let case_id = resolve_case_id(case_id, now);
        let user_initials = resolve_user_initials(user_initials);
        validate_component("case_id", &case_id)?;
        validate_component("user_initials", &user_initials)?;
        let timestamp = iso_timestamp(now)?;

        let root = case_root(&self.base_dir, &case_root_name(&case_id, &user_initials));
        info!(
            case_id = %case_id,
            root = %root.display(),
            policy = ?self.write_policy,
            "scaffolding case directory"
        );

        let mut report = ScaffoldReport {
            case_id: case_id.clone(),
            user_initials: user_initials.clone(),
            root: root.clone(),
            ..ScaffoldReport::default()
        };
        ensure_dir(&root, &mut report)?;

        for spec in CASE_FOLDERS {
            let folder = root.join(spec.name);
            ensure_dir(&folder, &mut report)?;
            match spec.contents {
                FolderContents::Subfolders(names) => {
                    for name in names {
                        ensure_dir(&folder.join(name), &mut report)?;
                    }
                }
                FolderContents::StandardFiles(names) => {
                    for name in names {
                        self.write_file(&folder.join(name), &template_for(name), &mut report)?;
                    }
                }
            }
            self.write_file(
                &folder.join(README_FILE),
                &render_folder_readme(spec),
                &mut report,
            )?;
            info!(folder = spec.name, "folder ready");
        }

        self.write_file(
            &root.join(EVIDENCE_LOG_FILE),
            &render_evidence_log_csv(&[EvidenceLogEntry::example()])?,
            &mut report,
        )?;
        self.write_file(&root.join(NAMING_GUIDE_FILE), NAMING_GUIDE, &mut report)?;

        // Written last: its presence marks a run that got all the way through.
        let info = CaseInfo::new(&case_id, &user_initials, &timestamp);
        self.write_file(
            &root.join(CASE_INFO_FILE),
            &render_case_info_json(&info)?,
            &mut report,
        )?;

        info!(
            dirs = report.created_dirs.len(),
            written = report.written_files.len(),
            skipped = report.skipped_files.len(),
            "case directory complete"
        );
        Ok(report)
    }

    fn write_file(
        &self,
        path: &Path,
        content: &str,
        report: &mut ScaffoldReport,
    ) -> CoreResult<()> {
        if self.write_policy == WritePolicy::PreserveExisting && is_non_empty_file(path) {
            warn!(path = %path.display(), "keeping existing file");
            report.skipped_files.push(path.to_path_buf());
            return Ok(());
        }
        fs::write(path, content).map_err(|e| CoreError::io(path, e))?;
        debug!(path = %path.display(), bytes = content.len(), "wrote file");
        report.written_files.push(path.to_path_buf());
        Ok(())
    }
}

/// Convenience wrapper: scaffold under `base_dir` and return the case root.
pub fn create_case_directory(
    base_dir: &Path,
    case_id: Option<&str>,
    user_initials: Option<&str>,
    write_policy: WritePolicy,
) -> CoreResult<PathBuf> {
    let report = CaseDirectoryBuilder::new(base_dir)
        .with_write_policy(write_policy)
        .build(case_id, user_initials)?;
    Ok(report.root)
}

fn case_root(base_dir: &Path, name: &str) -> PathBuf {
    if base_dir.as_os_str().is_empty() || base_dir == Path::new(".") {
        PathBuf::from(name)
    } else {
        base_dir.join(name)
    }
}

fn ensure_dir(path: &Path, report: &mut ScaffoldReport) -> CoreResult<()> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|e| CoreError::io(path, e))?;
    report.created_dirs.push(path.to_path_buf());
    Ok(())
}

fn is_non_empty_file(path: &Path) -> bool {
    fs::metadata(path)
        .map(|m| m.is_file() && m.len() > 0)
        .unwrap_or(false)
}
