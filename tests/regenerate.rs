use beatpack::{JobConfig, Mode, OutputFormat, Preset, inspect, run_job};
use std::fs;
use std::path::Path;
use std::process::Command;

fn write_vectors(path: &Path, lines: &[&str]) {
    let mut text = lines.join("\n");
    text.push('\n');
    fs::write(path, text).unwrap();
}

fn flat_job(dir: &Path, width: usize) -> JobConfig {
    JobConfig {
        mode: Mode::Flat,
        width,
        inputs: vec![dir.join("ref_vec.txt"), dir.join("cmp_vec.txt")],
        output: dir.join("test_vectors.dat"),
        format: OutputFormat::Lines,
    }
}

#[test]
fn test_flat_merges_reference_and_comparison_sets() {
    let dir = tempfile::tempdir().unwrap();
    write_vectors(&dir.path().join("ref_vec.txt"), &["abcd", "efgh"]);
    write_vectors(&dir.path().join("cmp_vec.txt"), &["ijkl"]);

    let report = run_job(&flat_job(dir.path(), 4)).unwrap();

    assert_eq!(report.records_written, 3);
    assert_eq!(
        fs::read_to_string(dir.path().join("test_vectors.dat")).unwrap(),
        "abcd\nefgh\nijkl\n"
    );
}

#[test]
fn test_flat_keeps_partial_tail() {
    let dir = tempfile::tempdir().unwrap();
    write_vectors(&dir.path().join("ref_vec.txt"), &["abc"]);
    write_vectors(&dir.path().join("cmp_vec.txt"), &["de"]);

    run_job(&flat_job(dir.path(), 4)).unwrap();
    assert_eq!(
        fs::read_to_string(dir.path().join("test_vectors.dat")).unwrap(),
        "abcd\ne\n"
    );
}

#[test]
fn test_window_preset_on_real_widths() {
    let dir = tempfile::tempdir().unwrap();
    let vectors = [
        "00112233445566778899aabbccddeeff",
        "0123456789abcdef0123456789abcdef",
        "ffeeddccbbaa99887766554433221100",
    ];
    write_vectors(&dir.path().join("ref_vec.txt"), &vectors);

    let mut job = Preset::Window.config();
    job.inputs = vec![dir.path().join("ref_vec.txt")];
    job.output = dir.path().join("test_vectors.dat");

    let report = run_job(&job).unwrap();
    assert_eq!(report.records_written, 4);
    assert_eq!(report.dropped_tail, 0);

    let written = fs::read_to_string(&job.output).unwrap();
    let beats: Vec<&str> = written.lines().collect();
    assert!(beats.iter().all(|beat| beat.len() == 24));
    assert_eq!(beats.concat(), vectors.concat());
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    write_vectors(&dir.path().join("ref_vec.txt"), &["12345678", "ABCDEFGH"]);
    write_vectors(&dir.path().join("cmp_vec.txt"), &["abcdefgh"]);
    let job = flat_job(dir.path(), 5);

    run_job(&job).unwrap();
    let first = fs::read(&job.output).unwrap();
    run_job(&job).unwrap();
    assert_eq!(fs::read(&job.output).unwrap(), first);
}

#[test]
fn test_missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    write_vectors(&dir.path().join("ref_vec.txt"), &["abcd"]);

    let job = flat_job(dir.path(), 4);
    let err = run_job(&job).unwrap_err();

    assert!(format!("{:#}", err).contains("cmp_vec.txt"));
    assert!(!job.output.exists());
}

#[test]
fn test_empty_input_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("ref_vec.txt"), "").unwrap();
    write_vectors(&dir.path().join("cmp_vec.txt"), &["abcd"]);

    let err = run_job(&flat_job(dir.path(), 4)).unwrap_err();
    assert!(format!("{:#}", err).contains("no records"));
}

#[test]
fn test_inspect_reports_sources() {
    let dir = tempfile::tempdir().unwrap();
    write_vectors(&dir.path().join("ref_vec.txt"), &["abcd", "efgh"]);
    write_vectors(&dir.path().join("cmp_vec.txt"), &["ijkl"]);

    let job = flat_job(dir.path(), 4);
    let report = inspect(&job.inputs, Mode::Flat, 4).unwrap();

    assert_eq!(report.record_count, 3);
    assert_eq!(report.projected_records, 3);
    assert_eq!(report.sources.len(), 2);
    assert_eq!(report.sources[1].records, 1);
    assert!(!job.output.exists());
}

#[test]
fn test_cli_run_with_stimulus_format() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ref_vec.txt");
    let output = dir.path().join("stimulus.v");
    write_vectors(&input, &["12345678", "ABCDEFGH"]);

    let status = Command::new(env!("CARGO_BIN_EXE_beatpack"))
        .arg("run")
        .args(["--width", "8", "--format", "stimulus"])
        .arg("--output")
        .arg(&output)
        .arg(&input)
        .status()
        .unwrap();

    assert!(status.success());
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "f_din <= 'h12345678;\n#CLK_PERIOD;\nf_din <= 'hABCDEFGH;\n#CLK_PERIOD;\n"
    );
}

#[test]
fn test_cli_fails_on_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.dat");

    let status = Command::new(env!("CARGO_BIN_EXE_beatpack"))
        .arg("run")
        .arg("--output")
        .arg(&output)
        .arg(dir.path().join("missing.txt"))
        .status()
        .unwrap();

    assert!(!status.success());
    assert!(!output.exists());
}
