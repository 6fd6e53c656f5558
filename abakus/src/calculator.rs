use crate::{
    history::SharedHistory, CalculationRecord, CalculatorConfig, Error, Operation, Strictness,
};

/// Performs calculations and records each successful one in its history.
///
/// Clones share the same history.
///
/// ```
/// use abakus::Calculator;
///
/// let calculator = Calculator::new();
/// assert_eq!(calculator.perform("divide", 20.0, 4.0), Ok(5.0));
///
/// let last = calculator.last().unwrap();
/// assert_eq!(last.operation().name(), "divide");
/// assert_eq!(last.result(), 5.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    history: SharedHistory,
    strictness: Strictness,
}

impl Calculator {
    /// Create a new lenient calculator with an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new calculator with an empty history from a `config`.
    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        Self::with_history(SharedHistory::new(), config.strictness)
    }

    /// Create a new calculator appending to an existing `history`.
    #[must_use]
    pub const fn with_history(history: SharedHistory, strictness: Strictness) -> Self {
        Self {
            history,
            strictness,
        }
    }

    /// Create a new lenient calculator appending to the process-wide history.
    #[must_use]
    pub fn global() -> Self {
        Self::with_history(SharedHistory::global(), Strictness::Lenient)
    }

    /// The strictness used to check operands.
    #[must_use]
    pub const fn strictness(&self) -> Strictness {
        self.strictness
    }

    /// The history this calculator appends to.
    #[must_use]
    pub const fn history(&self) -> &SharedHistory {
        &self.history
    }

    /// Resolve `operation` by name and perform it on `a` and `b`.
    ///
    /// The history only changes when the calculation succeeds.
    pub fn perform(&self, operation: &str, a: f64, b: f64) -> Result<f64, Error> {
        let operation = operation.parse::<Operation>().map_err(|err| {
            log::warn!("Rejected calculation: {}.", err);
            err
        })?;
        self.perform_operation(operation, a, b)
    }

    /// Perform an already resolved `operation` on `a` and `b`.
    pub fn perform_operation(&self, operation: Operation, a: f64, b: f64) -> Result<f64, Error> {
        let result = self
            .strictness
            .check(a, b)
            .and_then(|()| operation.apply(a, b))
            .map_err(|err| {
                log::warn!("Rejected calculation {} {} {}: {}.", operation, a, b, err);
                err
            })?;

        let record = CalculationRecord::new(operation, a, b, result);
        log::debug!("Calculated {}.", record);
        self.history.append(record);
        Ok(result)
    }

    /// Return the most recent successful calculation.
    #[must_use]
    pub fn last(&self) -> Option<CalculationRecord> {
        self.history.last()
    }

    /// Drop the whole history.
    pub fn clear_history(&self) {
        self.history.clear();
    }
}
