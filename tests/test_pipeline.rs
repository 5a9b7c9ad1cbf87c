//! End-to-end tests for the analysis pipeline

mod common;

use approx::assert_abs_diff_eq;
use common::{generated_table, init_tracing};
use tabstat::{analyze, analyze_dataset, ingest, AnalysisConfig, IngestOptions, ParseError};

fn run(text: &str) -> tabstat::Result<tabstat::Analysis> {
    analyze(text, None, &IngestOptions::default(), &AnalysisConfig::default())
}

#[test]
fn test_two_group_example() -> anyhow::Result<()> {
    init_tracing();
    let analysis = run("group,value\nA,10\nA,12\nB,20\nB,22\n")?;
    let summary = &analysis.summary;

    let value = summary.numeric_profile("value").expect("numeric profile");
    assert_eq!(value.count, 4);
    assert_abs_diff_eq!(value.mean.unwrap(), 16.0);

    let two_sample: Vec<_> = summary.two_sample_results().collect();
    assert_eq!(two_sample.len(), 1);
    assert_eq!(two_sample[0].group1, "A");
    assert_eq!(two_sample[0].group2, "B");
    assert_eq!(two_sample[0].numeric_column, "value");
    assert_eq!(summary.multi_sample_results().count(), 0);

    // Only one numeric column and too few values for a mean test
    assert!(summary.correlations().is_empty());
    assert!(summary.mean_tests().is_empty());
    Ok(())
}

#[test]
fn test_constant_column_never_gets_p_value() -> anyhow::Result<()> {
    init_tracing();
    let mut text = String::from("flat,x\n");
    for i in 0..50 {
        text.push_str(&format!("3.5,{}\n", i % 9));
    }
    let summary = run(&text)?.summary;

    let correlation = summary.correlation("flat", "x").expect("pair is reported");
    assert_eq!(correlation.p_value, None);
    assert!(summary.mean_test("flat").is_none());
    assert!(summary.mean_test("x").is_some());

    let json = summary.to_json()?;
    assert!(json["correlations"][0]["p_value"].is_null());
    Ok(())
}

#[test]
fn test_generated_table_counts() -> anyhow::Result<()> {
    init_tracing();
    let analysis = run(&generated_table(200, 4, 7))?;
    let summary = &analysis.summary;

    assert_eq!(analysis.overview.row_count, 200);
    assert_eq!(analysis.overview.column_count, 5);
    assert_eq!(analysis.overview.sample_rows.len(), 5);
    assert_eq!(summary.descriptive().len(), 5);
    assert_eq!(summary.correlations().len(), 6);
    assert_eq!(summary.multi_sample_results().count(), 4);
    assert!(summary
        .multi_sample_results()
        .all(|m| m.group_means.len() == 4));
    assert_eq!(summary.mean_tests().len(), 4);
    for test in summary.mean_tests() {
        assert!(test.p_value < 0.05, "means near 50 are far from zero");
    }
    Ok(())
}

#[test]
fn test_repeat_runs_are_identical() -> anyhow::Result<()> {
    init_tracing();
    let text = generated_table(120, 3, 11);
    let first = run(&text)?;
    let second = run(&text)?;
    assert_eq!(first, second);
    assert_eq!(first.to_json()?.to_string(), second.to_json()?.to_string());
    Ok(())
}

#[test]
fn test_parallel_flag_does_not_change_results() -> anyhow::Result<()> {
    init_tracing();
    let dataset = ingest(&generated_table(150, 5, 3))?;
    let sequential = analyze_dataset(&dataset, &AnalysisConfig::default())?;
    let parallel = analyze_dataset(&dataset, &AnalysisConfig::default().with_parallel(true))?;
    assert_eq!(sequential, parallel);
    Ok(())
}

#[test]
fn test_tab_separated_input() -> anyhow::Result<()> {
    let analysis = run("team\tscore\nred\t1\nred\t2\nblue\t8\nblue\t9\ngreen\t4\ngreen\t6\n")?;
    let multi: Vec<_> = analysis.summary.multi_sample_results().collect();
    assert_eq!(multi.len(), 1);
    assert_eq!(multi[0].categorical_column, "team");
    assert_eq!(multi[0].group_mean("blue"), Some(8.5));
    Ok(())
}

#[test]
fn test_messy_input_recovers() -> anyhow::Result<()> {
    let text = "Unnamed: 0,a,b\n0,1,2\n1,2,4,99\n2,3,5\n3,,7\n4,5\n";
    let analysis = run(text)?;
    assert_eq!(analysis.overview.column_count, 2);
    assert_eq!(analysis.overview.row_count, 4);
    assert_eq!(analysis.summary.numeric_profile("a").unwrap().count, 3);
    Ok(())
}

#[test]
fn test_hard_failures_surface() {
    for (text, expected) in [
        ("", ParseError::EmptyInput),
        ("a,b\n", ParseError::NoRows),
        ("a,b\nNA,\n", ParseError::AllMissing),
    ] {
        match run(text) {
            Err(tabstat::Error::Parse(err)) => assert_eq!(err, expected),
            other => panic!("{text:?}: expected {expected:?}, got {other:?}"),
        }
    }
}
