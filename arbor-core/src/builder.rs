//! Builder utilities for configuring graph analysis.
//!
//! Exposes the execution strategy and cross-check policy selection surface
//! and the validation run before constructing [`Analyzer`] instances.

use crate::{Result, analyzer::Analyzer, error::ArborError};

/// Indicates how [`Analyzer::analyze_batch`] schedules independent graphs.
///
/// `Auto` resolves deterministically: it fans graphs out over the rayon
/// thread pool when the `parallel` feature is compiled in and runs them one
/// after another otherwise.
///
/// # Examples
/// ```
/// use arbor_core::ExecutionStrategy;
///
/// let strategy = ExecutionStrategy::Auto;
/// assert!(matches!(strategy, ExecutionStrategy::Auto));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Allow the library to select a scheduler automatically.
    Auto,
    /// Analyse graphs one at a time on the calling thread.
    Sequential,
    /// Analyse graphs concurrently on the rayon thread pool.
    Parallel,
}

impl ExecutionStrategy {
    /// Returns `true` when batches run on the rayon thread pool.
    #[must_use]
    pub const fn is_parallel(self) -> bool {
        match self {
            Self::Auto => cfg!(feature = "parallel"),
            Self::Sequential => false,
            Self::Parallel => true,
        }
    }
}

/// Decides what happens when both engines span a graph but disagree on the
/// total weight.
///
/// # Examples
/// ```
/// use arbor_core::CrossCheckPolicy;
///
/// assert_eq!(CrossCheckPolicy::default(), CrossCheckPolicy::Strict);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CrossCheckPolicy {
    /// Fail the analysis with [`ArborError::WeightMismatch`].
    #[default]
    Strict,
    /// Log the mismatch at error level and keep it in the report.
    Report,
}

/// Configures and constructs [`Analyzer`] instances.
///
/// # Examples
/// ```
/// use arbor_core::{AnalyzerBuilder, CrossCheckPolicy, ExecutionStrategy};
///
/// let analyzer = AnalyzerBuilder::new()
///     .with_execution_strategy(ExecutionStrategy::Sequential)
///     .with_cross_check(CrossCheckPolicy::Report)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(analyzer.execution_strategy(), ExecutionStrategy::Sequential);
/// assert_eq!(analyzer.cross_check(), CrossCheckPolicy::Report);
/// ```
#[derive(Debug, Clone)]
pub struct AnalyzerBuilder {
    execution_strategy: ExecutionStrategy,
    cross_check: CrossCheckPolicy,
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self {
            execution_strategy: ExecutionStrategy::Auto,
            cross_check: CrossCheckPolicy::Strict,
        }
    }
}

impl AnalyzerBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{AnalyzerBuilder, CrossCheckPolicy, ExecutionStrategy};
    ///
    /// let builder = AnalyzerBuilder::new();
    /// assert_eq!(builder.execution_strategy(), ExecutionStrategy::Auto);
    /// assert_eq!(builder.cross_check(), CrossCheckPolicy::Strict);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the execution strategy used for batches.
    #[must_use]
    pub const fn with_execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution_strategy = strategy;
        self
    }

    /// Returns the currently configured execution strategy.
    #[must_use]
    pub const fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Sets the cross-check policy applied to every analysed graph.
    #[must_use]
    pub const fn with_cross_check(mut self, policy: CrossCheckPolicy) -> Self {
        self.cross_check = policy;
        self
    }

    /// Returns the currently configured cross-check policy.
    #[must_use]
    pub const fn cross_check(&self) -> CrossCheckPolicy {
        self.cross_check
    }

    /// Validates the configuration and constructs an [`Analyzer`].
    ///
    /// # Errors
    /// Returns [`ArborError::BackendUnavailable`] when
    /// [`ExecutionStrategy::Parallel`] is requested but the `parallel`
    /// feature is not compiled in.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::AnalyzerBuilder;
    ///
    /// let analyzer = AnalyzerBuilder::new().build().expect("configuration is valid");
    /// assert_eq!(analyzer.cross_check(), arbor_core::CrossCheckPolicy::Strict);
    /// ```
    pub fn build(self) -> Result<Analyzer> {
        if self.execution_strategy == ExecutionStrategy::Parallel && !cfg!(feature = "parallel") {
            return Err(ArborError::BackendUnavailable {
                requested: self.execution_strategy,
            });
        }
        Ok(Analyzer::new(self.execution_strategy, self.cross_check))
    }
}
