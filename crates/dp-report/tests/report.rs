//! Rendering of real profiles in every output format.

use chrono::NaiveDate;
use dp_core::{ProfileOptions, profile_table};
use dp_model::{Column, ColumnValues, Table, TableProfile};
use dp_report::{ReportError, ReportFormat, ReportOptions, render_report, write_report};

fn text(values: &[Option<&str>]) -> ColumnValues {
    ColumnValues::Text(values.iter().map(|v| v.map(str::to_string)).collect())
}

fn profile() -> TableProfile {
    let table = Table::new(vec![
        Column::new(
            "Survived",
            ColumnValues::Integer(vec![Some(0), Some(1), Some(1), Some(1), Some(0), Some(0)]),
        ),
        Column::new(
            "Sex",
            text(&[
                Some("male"),
                Some("female"),
                Some("female"),
                Some("female"),
                Some("male"),
                Some("male"),
            ]),
        ),
        Column::new(
            "Fare",
            ColumnValues::Float(vec![
                Some(7.25),
                Some(71.2833),
                Some(7.925),
                Some(53.1),
                Some(8.05),
                None,
            ]),
        ),
        Column::new(
            "Embarked",
            text(&[Some("S"), Some("C"), Some("S"), Some("S"), Some("Q"), None]),
        ),
    ])
    .unwrap();
    profile_table(&table, &ProfileOptions::default()).unwrap()
}

fn options() -> ReportOptions {
    ReportOptions::default().with_generated_on(NaiveDate::from_ymd_opt(2018, 8, 7).unwrap())
}

#[test]
fn text_report_has_every_section_in_order() {
    let report = render_report(&profile(), ReportFormat::Text, &options()).unwrap();

    let sections = [
        " Beginning of report ",
        "Tuesday, Aug 07, 2018",
        " Table Statistics ",
        " Variable Summary ",
        " Variable Statistics ",
        "Binary variables:",
        "Interval variables:",
        "Nominal variables:",
        " Confusion Matrix ",
        "row:Survived - col:Sex",
        " End of report ",
    ];
    let mut cursor = 0;
    for section in sections {
        let found = report[cursor..]
            .find(section)
            .unwrap_or_else(|| panic!("missing or out of order: {section}"));
        cursor += found + section.len();
    }

    assert!(report.contains("n_Binary_var"));
    assert!(report.contains("p_value1"));
    assert!(report.contains("coeff_of_var"));
    assert!(report.contains("2nd_freq_value"));
    assert!(!report.contains('\u{1b}'));
}

#[test]
fn markdown_and_html_share_the_layout() {
    let profile = profile();
    let markdown = render_report(&profile, ReportFormat::Markdown, &options()).unwrap();
    assert!(markdown.contains("| n_row"));
    assert!(markdown.contains("\n\nNominal variables:"));

    let html = render_report(&profile, ReportFormat::Html, &options()).unwrap();
    assert!(html.contains("<h2>Confusion Matrix</h2>"));
    assert!(html.contains("<th>n_row</th>"));
    assert!(html.contains("<td>6</td>"));
}

#[test]
fn json_report_serializes_the_profile() {
    let report = render_report(&profile(), ReportFormat::Json, &options()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&report).unwrap();

    assert_eq!(value["table_stats"]["n_row"], 6);
    assert_eq!(value["var_summary"].as_array().unwrap().len(), 4);
    assert_eq!(value["conf_matrix"][0]["row_variable"], "Survived");
}

#[test]
fn var_per_row_splits_statistics_tables() {
    let profile = profile();
    let wide = render_report(&profile, ReportFormat::Html, &options()).unwrap();
    let narrow = render_report(
        &profile,
        ReportFormat::Html,
        &options().with_var_per_row(1),
    )
    .unwrap();

    let tables = |html: &str| html.matches("<table").count();
    // Binary has two variables, every other group one
    assert_eq!(tables(&narrow), tables(&wide) + 1);
}

#[test]
fn write_report_picks_format_from_extension() {
    let dir = tempfile::tempdir().unwrap();
    let profile = profile();

    let path = dir.path().join("report_titanic.md");
    let format = write_report(&profile, &path, &options()).unwrap();
    assert_eq!(format, ReportFormat::Markdown);
    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.contains(" End of report "));

    let err = write_report(&profile, dir.path().join("report.pdf"), &options()).unwrap_err();
    assert!(matches!(err, ReportError::UnsupportedExtension { .. }));

    let missing_dir = dir.path().join("missing").join("report.txt");
    let err = write_report(&profile, missing_dir, &options()).unwrap_err();
    assert!(matches!(err, ReportError::Io { .. }));
}
