//! # tabstat
//!
//! Reproducible statistical summaries of messy delimited tables.
//!
//! Raw CSV or TSV text goes through a fixed pipeline:
//!
//! 1. [`TableIngestor`] parses the text into a typed [`Dataset`]
//! 2. [`classify`] splits columns into numeric and categorical
//! 3. [`DescriptiveProfiler`], [`CorrelationAnalyzer`],
//!    [`GroupComparisonEngine`] and [`LargeSampleMeanTester`] run
//!    independently
//! 4. [`SummaryAssembler`] gathers their output into a [`StatisticalSummary`]
//!
//! Unparseable input is an [`Error`]. A test whose preconditions are not met
//! (too few observations, zero variance, too many groups) is simply absent
//! from the summary.
//!
//! ## Example
//!
//! ```rust
//! use tabstat::{analyze, AnalysisConfig, IngestOptions};
//!
//! let text = "group,value\nA,10\nA,12\nB,20\nB,22\n";
//! let analysis = analyze(text, None, &IngestOptions::default(), &AnalysisConfig::default())?;
//!
//! let summary = &analysis.summary;
//! assert_eq!(summary.numeric_profile("value").unwrap().mean, Some(16.0));
//!
//! let test = summary.two_sample_results().next().unwrap();
//! assert_eq!((test.group1.as_str(), test.group2.as_str()), ("A", "B"));
//! # Ok::<(), tabstat::Error>(())
//! ```
//!
//! ## Features
//!
//! - `parallel`: pairwise tests run on the rayon pool when
//!   [`AnalysisConfig::parallel`] is set

mod pipeline;
mod summary;

pub use pipeline::{analyze, analyze_dataset, Analysis};
pub use summary::{StatisticalSummary, SummaryAssembler};

// Re-export the member crates' public surface
pub use tabstat_core::{
    classify, AnalysisConfig, Cell, Column, ColumnData, ColumnKind, ColumnPartition, Dataset,
    Error, ParseError, Result, SkipReason, HYPOTHESIZED_MEAN,
};
pub use tabstat_describe::{
    CategoricalStats, ColumnOverview, ColumnProfile, DatasetOverview, DescriptiveProfiler,
    DescriptiveStats, ProfileStats,
};
pub use tabstat_hypothesis::{
    CorrelationAnalyzer, CorrelationResult, CorrelationStrength, GroupComparisonEngine,
    GroupComparisonResult, GroupMean, LargeSampleMeanTester, MeanTestResult, MultiSampleResult,
    PairwiseAnalyzer, TwoSampleResult,
};
pub use tabstat_ingest::{ingest, IngestOptions, TableIngestor};
