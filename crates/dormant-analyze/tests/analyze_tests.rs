use dormant_analyze::{
    CleanupParams, DuplicatesParams, ExtensionsParams, LargeParams, NO_EXTENSION,
    RarelyUsedParams, Report, ReportBody, ReportEngine, ReportMode, ReportParams, ScanConfig,
    scan, scan_with_config,
};
use filetime::FileTime;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use strum::IntoEnumIterator;
use tempfile::TempDir;

const DAY: u64 = 24 * 60 * 60;
const MB: u64 = 1024 * 1024;

/// Create a file of `size` bytes whose last access was `idle_days` ago.
fn make_file(root: &Path, rel: &str, size: u64, idle_days: u64) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::File::create(&path).unwrap().set_len(size).unwrap();

    let accessed = SystemTime::now() - Duration::from_secs(idle_days * DAY);
    filetime::set_file_atime(&path, FileTime::from_system_time(accessed)).unwrap();
    path
}

fn body(report: Report) -> ReportBody {
    match report {
        Report::Success(body) => body,
        Report::Error(e) => panic!("unexpected error report: {}", e.error),
    }
}

fn rarely_used(root: &Path, params: RarelyUsedParams) -> dormant_analyze::RarelyUsedReport {
    match body(scan(root, &ReportParams::RarelyUsed(params))) {
        ReportBody::RarelyUsed(r) => r,
        other => panic!("wrong body: {other:?}"),
    }
}

fn stats(root: &Path) -> dormant_analyze::AgeStatsReport {
    match body(scan(root, &ReportParams::Stats)) {
        ReportBody::Stats(r) => r,
        other => panic!("wrong body: {other:?}"),
    }
}

fn duplicates(root: &Path, params: DuplicatesParams) -> dormant_analyze::DuplicateReport {
    match body(scan(root, &ReportParams::Duplicates(params))) {
        ReportBody::Duplicates(r) => r,
        other => panic!("wrong body: {other:?}"),
    }
}

fn large(root: &Path, params: LargeParams) -> dormant_analyze::LargeFilesReport {
    match body(scan(root, &ReportParams::Large(params))) {
        ReportBody::Large(r) => r,
        other => panic!("wrong body: {other:?}"),
    }
}

fn extensions(root: &Path, params: ExtensionsParams) -> dormant_analyze::ExtensionReport {
    match body(scan(root, &ReportParams::Extensions(params))) {
        ReportBody::Extensions(r) => r,
        other => panic!("wrong body: {other:?}"),
    }
}

fn cleanup(root: &Path, params: CleanupParams) -> dormant_analyze::CleanupReport {
    match body(scan(root, &ReportParams::Cleanup(params))) {
        ReportBody::Cleanup(r) => r,
        other => panic!("wrong body: {other:?}"),
    }
}

#[test]
fn test_scenario_old_new_and_hidden() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    make_file(root, "a.txt", 500, 200);
    make_file(root, "b.txt", 500, 1);
    make_file(root, ".c.txt", 500, 400);

    let report = rarely_used(root, RarelyUsedParams::default());
    let paths: Vec<_> = report.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, ["a.txt"]);
    assert_eq!(report.total_rarely_used, 1);
    assert_eq!(report.threshold_days, 90);
    assert_eq!(report.files[0].days_since_access, 200);
    assert_eq!(report.files[0].size_kb, 0.49);

    assert_eq!(stats(root).total_files, 2);

    // Same size, different names: not duplicates.
    let dups = duplicates(root, DuplicatesParams::default());
    assert!(!dups.has_duplicates());
    assert_eq!(dups.total_duplicate_groups, 0);
}

#[test]
fn test_duplicate_small_file_rounds_to_zero() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    make_file(root, "dir1/x.bin", 2048, 0);
    make_file(root, "dir2/x.bin", 2048, 0);
    make_file(root, "dir2/y.bin", 2048, 0);

    let report = duplicates(root, DuplicatesParams::default());

    assert_eq!(report.total_duplicate_groups, 1);
    let group = &report.duplicates[0];
    assert_eq!(group.filename, "x.bin");
    assert_eq!(group.count, 2);
    assert_eq!(group.size_kb, 2.0);
    assert_eq!(group.wasted_space_mb, 0.0);
    assert_eq!(report.total_wasted_space_mb, 0.0);

    let locations: Vec<_> = group.locations.iter().map(|l| l.path.as_str()).collect();
    assert_eq!(locations, ["dir1/x.bin", "dir2/x.bin"]);
}

#[test]
fn test_duplicates_sorted_by_wasted_space() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    for dir in ["a", "b", "c"] {
        make_file(root, &format!("{dir}/small.dat"), MB, 0);
    }
    for dir in ["a", "b"] {
        make_file(root, &format!("{dir}/big.dat"), 3 * MB, 0);
    }
    // Same name, different size: never grouped.
    make_file(root, "c/big.dat", 2 * MB, 0);

    let report = duplicates(root, DuplicatesParams::default());

    assert_eq!(report.total_duplicate_groups, 2);
    assert_eq!(report.duplicates[0].filename, "big.dat");
    assert_eq!(report.duplicates[0].wasted_space_mb, 3.0);
    assert_eq!(report.duplicates[1].filename, "small.dat");
    assert_eq!(report.duplicates[1].count, 3);
    assert_eq!(report.duplicates[1].wasted_space_mb, 2.0);
    assert_eq!(report.total_wasted_space_mb, 5.0);
}

#[test]
fn test_duplicates_min_size_filter() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    make_file(root, "a/tiny.txt", 100, 0);
    make_file(root, "b/tiny.txt", 100, 0);
    make_file(root, "a/bigger.txt", 4096, 0);
    make_file(root, "b/bigger.txt", 4096, 0);

    let report = duplicates(root, DuplicatesParams { min_size_kb: 1 });

    assert_eq!(report.min_size_kb, 1);
    assert_eq!(report.total_duplicate_groups, 1);
    assert_eq!(report.duplicates[0].filename, "bigger.txt");
}

#[test]
fn test_hidden_directories_are_never_reported() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    make_file(root, ".cache/huge.iso", 50 * MB, 500);
    make_file(root, ".cache/nested/also.iso", 50 * MB, 500);
    make_file(root, "visible.txt", 10, 0);

    let big = large(root, LargeParams::builder().min_size_mb(0u64).build().unwrap());
    assert_eq!(big.total_large_files, 1);
    assert_eq!(big.files[0].filename, "visible.txt");

    let clean = cleanup(root, CleanupParams::default());
    assert_eq!(clean.total_suggestions, 0);

    assert_eq!(stats(root).total_files, 1);
}

#[test]
fn test_rarely_used_sorted_and_capped() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    make_file(root, "old.txt", 10, 100);
    make_file(root, "older.txt", 10, 300);
    make_file(root, "oldest.txt", 10, 1000);
    make_file(root, "fresh.txt", 10, 5);

    let params = RarelyUsedParams::builder().max_results(2usize).build().unwrap();
    let report = rarely_used(root, params);

    assert_eq!(report.total_rarely_used, 3);
    assert_eq!(report.files.len(), 2);
    assert_eq!(report.files[0].path, "oldest.txt");
    assert_eq!(report.files[1].path, "older.txt");
    assert!(report.files[0].days_since_access >= report.files[1].days_since_access);
}

#[test]
fn test_rarely_used_min_size() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    make_file(root, "small.log", 512, 120);
    make_file(root, "big.log", 8 * 1024, 120);

    let filtered = rarely_used(
        root,
        RarelyUsedParams::builder().min_size_kb(4u64).build().unwrap(),
    );
    assert_eq!(filtered.total_rarely_used, 1);
    assert_eq!(filtered.files[0].path, "big.log");
    assert_eq!(filtered.min_size_kb, Some(4));

    // Zero means no minimum at all.
    let unfiltered = rarely_used(
        root,
        RarelyUsedParams::builder().min_size_kb(0u64).build().unwrap(),
    );
    assert_eq!(unfiltered.total_rarely_used, 2);
}

#[test]
fn test_stats_bands_sum_to_total() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    make_file(root, "a", MB, 1);
    make_file(root, "sub/b", MB, 60);
    make_file(root, "sub/c", MB, 200);
    make_file(root, "sub/deeper/d", MB, 800);
    make_file(root, "sub/deeper/e", MB, 900);

    let report = stats(root);

    assert_eq!(report.total_files, 5);
    assert_eq!(report.banded_files(), report.total_files);
    assert_eq!(report.total_size_mb, 5.0);
    assert_eq!(report.accessed_last_30_days, 1);
    assert_eq!(report.accessed_last_90_days, 1);
    assert_eq!(report.accessed_last_year, 1);
    assert_eq!(report.older_than_year, 2);
}

#[test]
fn test_large_sorted_filtered_and_capped() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    make_file(root, "one.bin", MB, 0);
    make_file(root, "three.bin", 3 * MB, 0);
    make_file(root, "two.bin", 2 * MB, 0);
    make_file(root, "tiny.bin", MB - 1, 0);

    let params = LargeParams::builder()
        .min_size_mb(1u64)
        .max_results(2usize)
        .build()
        .unwrap();
    let report = large(root, params);

    assert_eq!(report.total_large_files, 3);
    assert_eq!(report.total_size_gb, 0.01);
    let names: Vec<_> = report.files.iter().map(|f| f.filename.as_str()).collect();
    assert_eq!(names, ["three.bin", "two.bin"]);
    assert_eq!(report.files[0].size_mb, 3.0);
}

#[test]
fn test_extensions_grouping() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    make_file(root, "a.TXT", 3 * MB, 0);
    make_file(root, "docs/b.txt", MB, 0);
    make_file(root, "main.rs", MB, 0);
    make_file(root, "Makefile", 512 * 1024, 0);
    make_file(root, "archive.tar.gz", 100, 0);

    let report = extensions(root, ExtensionsParams::default());

    assert_eq!(report.total_extensions, 4);
    let txt = &report.extensions[0];
    assert_eq!(txt.extension, ".txt");
    assert_eq!(txt.count, 2);
    assert_eq!(txt.total_size_mb, 4.0);
    assert_eq!(txt.avg_size_mb, 2.0);

    assert!(report.extensions.iter().any(|e| e.extension == ".gz"));
    let none = report
        .extensions
        .iter()
        .find(|e| e.extension == NO_EXTENSION)
        .unwrap();
    assert_eq!(none.total_size_mb, 0.5);

    let top = extensions(root, ExtensionsParams { top_n: 2 });
    assert_eq!(top.total_extensions, 4);
    let names: Vec<_> = top.extensions.iter().map(|e| e.extension.as_str()).collect();
    assert_eq!(names, [".txt", ".rs"]);
}

#[test]
fn test_cleanup_requires_age_and_size() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    make_file(root, "old_big.iso", 2 * MB, 400);
    make_file(root, "new_big.iso", 2 * MB, 10);
    make_file(root, "old_small.txt", 1024, 400);

    let report = cleanup(root, CleanupParams::default());

    assert_eq!(
        report.criteria,
        "Not accessed in 180 days and larger than 1MB"
    );
    assert_eq!(report.total_suggestions, 1);
    let suggestion = &report.suggestions[0];
    assert_eq!(suggestion.path, "old_big.iso");
    assert_eq!(suggestion.days_since_access, 400);
    assert_eq!(suggestion.reason, "Not accessed for 400 days and 2.0MB");
    assert_eq!(report.potential_space_savings_gb, 0.0);
}

#[test]
fn test_cleanup_caps_at_one_hundred() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    for i in 0..105 {
        make_file(root, &format!("f{i:03}.bin"), MB + i, 365);
    }

    let report = cleanup(root, CleanupParams::default());

    assert_eq!(report.total_suggestions, 105);
    assert_eq!(report.suggestions.len(), dormant_analyze::CLEANUP_MAX_RESULTS);
    assert_eq!(report.suggestions[0].path, "f104.bin");
}

#[test]
fn test_empty_directory_every_mode() {
    let temp = TempDir::new().unwrap();

    for mode in ReportMode::iter() {
        let report = scan(temp.path(), &ReportParams::defaults(mode));
        let body = body(report);
        assert_eq!(body.mode(), mode);

        match body {
            ReportBody::RarelyUsed(r) => {
                assert_eq!(r.total_rarely_used, 0);
                assert!(r.files.is_empty());
            }
            ReportBody::Stats(r) => {
                assert_eq!(r.total_files, 0);
                assert_eq!(r.total_size_mb, 0.0);
            }
            ReportBody::Duplicates(r) => assert_eq!(r.total_duplicate_groups, 0),
            ReportBody::Large(r) => assert!(r.files.is_empty()),
            ReportBody::Extensions(r) => assert_eq!(r.total_extensions, 0),
            ReportBody::Cleanup(r) => assert!(r.suggestions.is_empty()),
        }
    }
}

#[test]
fn test_missing_root_is_error_report() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("does-not-exist");

    let report = scan(&missing, &ReportParams::Stats);

    assert!(report.is_error());
    let json = serde_json::to_value(&report).unwrap();
    let message = json["error"].as_str().unwrap();
    assert!(message.starts_with("Directory does not exist: "));
    assert!(message.contains("does-not-exist"));
    assert_eq!(json.as_object().unwrap().len(), 1);
}

#[test]
fn test_file_root_is_error_report() {
    let temp = TempDir::new().unwrap();
    let file = make_file(temp.path(), "plain.txt", 10, 0);

    for mode in ReportMode::iter() {
        let report = scan(&file, &ReportParams::defaults(mode));
        assert!(report
            .error_message()
            .unwrap()
            .starts_with("Path is not a directory: "));
    }
}

#[test]
fn test_repeat_scans_are_identical_and_read_only() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let a = make_file(root, "x/dup.bin", 4096, 30);
    make_file(root, "y/dup.bin", 4096, 30);
    make_file(root, "z/other.bin", 10, 30);

    let before = fs::metadata(&a).unwrap();

    let engine = ReportEngine::new();
    let params = ReportParams::defaults(ReportMode::Duplicates);
    let first = engine.run(root, &params);
    let second = engine.run(root, &params);
    assert_eq!(first, second);

    assert_eq!(
        engine.run(root, &ReportParams::Stats),
        engine.run(root, &ReportParams::Stats)
    );

    let after = fs::metadata(&a).unwrap();
    assert_eq!(before.len(), after.len());
    assert_eq!(before.modified().unwrap(), after.modified().unwrap());
}

#[test]
fn test_parallel_config_matches_serial() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    for dir in ["a", "b", "c", "d"] {
        make_file(root, &format!("{dir}/same.bin"), 4096, 10);
        make_file(root, &format!("{dir}/{dir}.log"), 100, 10);
    }

    let config = ScanConfig::builder()
        .root(root)
        .threads(4usize)
        .build()
        .unwrap();
    let params = ReportParams::defaults(ReportMode::Duplicates);

    assert_eq!(scan_with_config(&config, &params), scan(root, &params));
}

#[test]
fn test_json_shape_rarely_used() {
    let temp = TempDir::new().unwrap();
    make_file(temp.path(), "stale.txt", 2048, 120);

    let report = scan(temp.path(), &ReportParams::defaults(ReportMode::RarelyUsed));
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["threshold_days"], 90);
    assert_eq!(json["total_rarely_used"], 1);
    assert!(json["min_size_kb"].is_null());
    let file = &json["files"][0];
    for key in [
        "path",
        "full_path",
        "last_accessed",
        "days_since_access",
        "size_kb",
        "size_mb",
    ] {
        assert!(file.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(file["size_kb"], 2.0);
}
