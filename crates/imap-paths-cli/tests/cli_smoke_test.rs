use std::fs;

use tempfile::tempdir;

use imap_paths::ImapPathsError;
use imap_paths_cli::{Args, run};

fn args(files: &[&str], output: String) -> Args {
    Args {
        files: files.iter().map(|file| file.to_string()).collect(),
        data_dir: Some("/data".to_string()),
        config: None,
        collection: false,
        json: false,
        output: Some(output),
        log_level: "off".to_string(),
    }
}

#[test]
fn smoke_test_canonical_paths() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("paths.txt");

    let args = args(
        &[
            "imap_mag_l1a_burst_20210101_v001.cdf",
            "imap_mag_l1b-cal_20250101_v001.cdf",
            "naif0012.tls",
        ],
        output.to_string_lossy().into_owned(),
    );
    run(&args).expect("valid filenames should be accepted");

    let report = fs::read_to_string(&output).unwrap();
    let lines: Vec<_> = report.lines().collect();
    assert_eq!(
        lines,
        [
            "/data/imap/mag/l1a/2021/01/imap_mag_l1a_burst_20210101_v001.cdf",
            "/data/imap/ancillary/mag/imap_mag_l1b-cal_20250101_v001.cdf",
            "/data/spice/lsk/naif0012.tls",
        ]
    );
}

#[test]
fn smoke_test_collection_report() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("collection.txt");

    let mut args = args(
        &[
            "imap_mag_l1b-cal_20250101_v001.cdf",
            "imap_mag_l1b-cal_20250103_20250104_v002.cdf",
            "imap_glows_l1a_hist_20250202_v001.cdf",
        ],
        output.to_string_lossy().into_owned(),
    );
    args.collection = true;
    run(&args).expect("valid filenames should be grouped");

    let report = fs::read_to_string(&output).unwrap();
    let lines: Vec<_> = report.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("ANCILLARY_FILE mag ancillary l1b-cal:"));
    assert!(lines[1].starts_with("SCIENCE_FILE glows l1a hist:"));
    assert_eq!(lines[2], "time range: 2025-01-01 to 2025-02-02");
}

#[test]
fn smoke_test_json_report() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("collection.json");

    let mut args = args(
        &["naif0012.tls", "imap_swapi_l2_sci_20250101_v003.cdf"],
        output.to_string_lossy().into_owned(),
    );
    args.json = true;
    run(&args).expect("valid filenames should be serialized");

    let report = fs::read_to_string(&output).unwrap();
    assert_eq!(
        report.trim_end(),
        r#"["naif0012.tls","imap_swapi_l2_sci_20250101_v003.cdf"]"#
    );
}

#[test]
fn smoke_test_rejects_unknown_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("paths.txt");

    let args = args(
        &["imap_mag_l1a_burst_20210101_v001.cdf", "test.txt"],
        output.to_string_lossy().into_owned(),
    );
    let err = run(&args).unwrap_err();

    assert!(matches!(err, ImapPathsError::Parse { ref src, .. } if src == "test.txt"));
    assert!(!output.exists(), "no report is written on failure");
}
