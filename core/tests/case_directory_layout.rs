use case_core::case::layout::{FolderContents, CASE_FOLDERS};
use case_core::{CaseDirectoryBuilder, WritePolicy};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use time::macros::datetime;
use walkdir::WalkDir;

fn relative_entries(root: &Path) -> BTreeSet<String> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|e| e.unwrap())
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap();
            let mut s = rel.to_string_lossy().replace('\\', "/");
            if e.file_type().is_dir() {
                s.push('/');
            }
            s
        })
        .collect()
}

#[test]
fn end_to_end_test01_ab() {
    let temp = tempfile::tempdir().unwrap();
    let report = CaseDirectoryBuilder::new(temp.path())
        .build(Some("TEST01"), Some("AB"))
        .unwrap();

    let root = temp.path().join("Case_TEST01_AB");
    assert_eq!(report.root, root);
    assert!(root.is_dir());

    let timeline = fs::read_to_string(root.join("05_Timeline/timeline.md")).unwrap();
    assert!(timeline.contains("# Case Timeline"));

    let info = fs::read_to_string(root.join("case_info.json")).unwrap();
    assert!(info.contains("\"case_id\": \"TEST01\""));
}

#[test]
fn tree_matches_fixed_layout_exactly() {
    let temp = tempfile::tempdir().unwrap();
    let report = CaseDirectoryBuilder::new(temp.path())
        .build(Some("C1"), Some("ZZ"))
        .unwrap();

    let mut expected = BTreeSet::new();
    for root_file in ["case_info.json", "evidence_log.csv", "FILE_NAMING_GUIDE.txt"] {
        expected.insert(root_file.to_string());
    }
    for spec in CASE_FOLDERS {
        expected.insert(format!("{}/", spec.name));
        expected.insert(format!("{}/README.md", spec.name));
        match spec.contents {
            FolderContents::Subfolders(names) => {
                for n in names {
                    expected.insert(format!("{}/{}/", spec.name, n));
                }
            }
            FolderContents::StandardFiles(names) => {
                for n in names {
                    expected.insert(format!("{}/{}", spec.name, n));
                }
            }
        }
    }

    let actual = relative_entries(&report.root);
    assert_eq!(actual, expected);
    assert_eq!(actual.len(), 39);
    // Root plus 6 top-level folders plus 17 subfolders.
    assert_eq!(report.created_dirs.len(), 24);
    assert_eq!(report.written_files.len(), 16);
    assert!(report.skipped_files.is_empty());
}

#[test]
fn readmes_list_configured_children_in_order() {
    let temp = tempfile::tempdir().unwrap();
    let report = CaseDirectoryBuilder::new(temp.path())
        .build(Some("C2"), None)
        .unwrap();
    assert!(report.root.ends_with("Case_C2_USER"));

    for spec in CASE_FOLDERS {
        let readme = fs::read_to_string(report.root.join(spec.name).join("README.md")).unwrap();
        let lines: Vec<&str> = readme.lines().collect();
        assert_eq!(lines[0], format!("# {}", spec.name));
        assert_eq!(lines[2], spec.description);

        let bullets: Vec<String> = lines
            .iter()
            .filter(|l| l.starts_with("- `"))
            .map(|l| l.to_string())
            .collect();
        let expected: Vec<String> = match spec.contents {
            FolderContents::Subfolders(names) => {
                assert_eq!(lines[4], "## Subfolders:");
                names.iter().map(|n| format!("- `{}/`", n)).collect()
            }
            FolderContents::StandardFiles(names) => {
                assert_eq!(lines[4], "## Standard Files:");
                names.iter().map(|n| format!("- `{}`", n)).collect()
            }
        };
        assert_eq!(bullets, expected);
    }
}

#[test]
fn evidence_log_has_header_and_one_example_row() {
    let temp = tempfile::tempdir().unwrap();
    let report = CaseDirectoryBuilder::new(temp.path())
        .build(Some("C3"), Some("AB"))
        .unwrap();

    let csv = fs::read_to_string(report.root.join("evidence_log.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "Date_Collected,Evidence_Type,File_Name,Description,Source,Importance_Level,File_Size,Notes"
    );
    assert!(lines[1].starts_with("2024-01-15,WhatsApp,"));
}

#[test]
fn missing_case_id_is_synthesized_from_clock() {
    let temp = tempfile::tempdir().unwrap();
    let report = CaseDirectoryBuilder::new(temp.path())
        .build_at(None, None, datetime!(2024-03-09 14:05:06 UTC))
        .unwrap();
    assert_eq!(report.case_id, "CASE_20240309_140506");
    assert!(temp.path().join("Case_CASE_20240309_140506_USER").is_dir());
}

#[test]
fn base_dir_is_created_when_missing() {
    let temp = tempfile::tempdir().unwrap();
    let base = temp.path().join("nested").join("cases");
    let report = CaseDirectoryBuilder::new(&base)
        .with_write_policy(WritePolicy::Overwrite)
        .build(Some("N1"), Some("AB"))
        .unwrap();
    assert_eq!(report.root, base.join("Case_N1_AB"));
    assert!(report.root.join("case_info.json").is_file());
}
