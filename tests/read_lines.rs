use fastlines::{ReadError, read_all_lines, try_read_all_lines};
use rstest::rstest;
use std::fs;

#[rstest]
#[case("a\nb\nc\n", &["a", "b", "c"])]
#[case("a\nb\nc", &["a", "b", "c"])]
#[case("", &[])]
fn reads_lines_without_terminators(#[case] content: &str, #[case] expected: &[&str]) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("daily_report.csv");
    fs::write(&path, content).unwrap();

    let lines = read_all_lines(&path);
    assert_eq!(lines.iter().collect::<Vec<_>>(), expected);
    assert_eq!(try_read_all_lines(&path).unwrap(), lines);
}

#[test]
fn nonexistent_path_gives_empty_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("csse_covid_19_daily_reports");

    assert!(read_all_lines(&path).is_empty());
    assert!(matches!(
        try_read_all_lines(&path),
        Err(ReadError::Open { .. })
    ));
}

#[test]
fn lines_keep_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("numbers.txt");
    let content: String = (0..2500).map(|i| format!("{i:05}\n")).collect();
    fs::write(&path, content).unwrap();

    let lines = read_all_lines(&path).into_vec();
    assert_eq!(lines.len(), 2500);
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(line, &format!("{i:05}"));
    }
}

#[test]
fn latin1_lines_do_not_cut_the_file_short() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("daily_report.csv");
    fs::write(&path, b"Province,Country\nCura\xE7ao,Netherlands\nHubei,China\n").unwrap();

    let lines = read_all_lines(&path);
    assert_eq!(lines.line_count(), 3);
    assert_eq!(lines.line_text(2), "Hubei,China");
    assert!(matches!(
        try_read_all_lines(&path),
        Err(ReadError::InvalidEncoding { line: 2, .. })
    ));
}
