//! End-to-end analysis: raw text in, summary out

use crate::summary::{StatisticalSummary, SummaryAssembler};
use serde::{Deserialize, Serialize};
use tabstat_core::{classify, AnalysisConfig, Dataset, Result};
use tabstat_describe::{DatasetOverview, DescriptiveProfiler};
use tabstat_hypothesis::{
    CorrelationAnalyzer, GroupComparisonEngine, LargeSampleMeanTester, PairwiseAnalyzer,
};
use tabstat_ingest::{IngestOptions, TableIngestor};
use tracing::{debug, instrument};

/// Result of analysing one table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Free-text question supplied with the table, passed through untouched
    pub question: Option<String>,
    pub overview: DatasetOverview,
    pub summary: StatisticalSummary,
}

impl Analysis {
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Ingest `text` and run every analysis stage
///
/// Fails only when the configuration is invalid or the text is not a
/// table. Tests whose preconditions fail are left out of the summary.
#[instrument(skip_all, fields(bytes = text.len()))]
pub fn analyze(
    text: &str,
    question: Option<&str>,
    options: &IngestOptions,
    config: &AnalysisConfig,
) -> Result<Analysis> {
    config.validate()?;
    let dataset = TableIngestor::with_options(options.clone()).ingest(text)?;
    let overview = DatasetOverview::from_dataset(&dataset, options.sample_rows);
    let summary = analyze_dataset(&dataset, config)?;
    Ok(Analysis {
        question: question.map(str::to_string),
        overview,
        summary,
    })
}

/// Run the statistics on an already-ingested dataset
#[instrument(skip_all, fields(rows = dataset.row_count(), columns = dataset.column_count()))]
pub fn analyze_dataset(dataset: &Dataset, config: &AnalysisConfig) -> Result<StatisticalSummary> {
    config.validate()?;
    let partition = classify(dataset);
    debug!(
        numeric = partition.numeric.len(),
        categorical = partition.categorical.len(),
        "columns classified"
    );

    let descriptive = DescriptiveProfiler::new().profile(dataset);
    let correlations =
        CorrelationAnalyzer::from_config(config).analyze_all(dataset, &partition, config.parallel);
    let group_comparisons = GroupComparisonEngine::from_config(config).analyze_all(
        dataset,
        &partition,
        config.parallel,
    );
    let mean_tests = LargeSampleMeanTester::from_config(config).test_all(dataset);

    let summary = SummaryAssembler::new()
        .with_descriptive(descriptive)
        .with_correlations(correlations)
        .with_group_comparisons(group_comparisons)
        .with_mean_tests(mean_tests)
        .assemble();

    debug!(
        correlations = summary.correlations().len(),
        group_comparisons = summary.group_comparisons().len(),
        mean_tests = summary.mean_tests().len(),
        "analysis finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabstat_core::{Error, ParseError};

    #[test]
    fn test_question_passed_through() {
        let analysis = analyze(
            "a,b\n1,2\n2,5\n",
            Some("Is a related to b?"),
            &IngestOptions::default(),
            &AnalysisConfig::default(),
        )
        .unwrap();
        assert_eq!(analysis.question.as_deref(), Some("Is a related to b?"));
        assert_eq!(analysis.overview.row_count, 2);
    }

    #[test]
    fn test_parse_error_surfaces() {
        let err = analyze("", None, &IngestOptions::default(), &AnalysisConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError::EmptyInput)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AnalysisConfig::default().with_significance_level(1.5);
        let err = analyze("a\n1\n", None, &IngestOptions::default(), &config).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }
}
