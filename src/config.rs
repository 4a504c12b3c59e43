use std::time::Duration;

/// Wall-clock time a single function call may take by default.
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(5);

/// Settings fixed when a [`Calculator`](crate::Calculator) is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Maximum wall-clock duration of one function invocation.
    pub time_budget: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self { time_budget: DEFAULT_TIME_BUDGET }
    }
}

impl Config {
    /// Returns a copy with a different time budget.
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    ///
    /// use ratcalc::Config;
    ///
    /// let config = Config::default().with_time_budget(Duration::from_millis(250));
    /// assert_eq!(config.time_budget, Duration::from_millis(250));
    /// ```
    #[must_use]
    pub const fn with_time_budget(mut self, time_budget: Duration) -> Self {
        self.time_budget = time_budget;
        self
    }
}
