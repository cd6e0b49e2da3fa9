use cadence_core::{
    CadenceConfig, CadenceError, KeyOrder, Point, RawOptions, RawPoint, ResampleOptions,
    ResultPoint, WeekStart,
};

/// Resampling service holding the configuration every request runs under.
///
/// Built once through [`CadenceBuilder`] and never mutated afterwards, so a
/// single instance can be shared by reference (or behind an `Arc`) across
/// threads without synchronization.
#[derive(Debug, Clone, Default)]
pub struct Cadence {
    pub(crate) cfg: CadenceConfig,
}

/// Builder for constructing a `Cadence` service with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct CadenceBuilder {
    cfg: CadenceConfig,
}

impl CadenceBuilder {
    /// Create a new builder with the default configuration.
    ///
    /// Defaults: ISO weeks (Monday start, `weekEnd` on Sunday) and output in
    /// first-seen order of period keys.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cfg: CadenceConfig::default(),
        }
    }

    /// Select the first day of the week used by `weekEnd`.
    ///
    /// - `Monday`: weeks end on Sunday.
    /// - `Sunday`: weeks end on Saturday.
    #[must_use]
    pub const fn week_start(mut self, week_start: WeekStart) -> Self {
        self.cfg.week_start = week_start;
        self
    }

    /// Select the order of resampled periods in the output.
    ///
    /// - `FirstSeen`: the order in which each period first appears in the input.
    /// - `Chronological`: ascending by period end date, at the cost of a sort.
    #[must_use]
    pub const fn key_order(mut self, order: KeyOrder) -> Self {
        self.cfg.key_order = order;
        self
    }

    /// Replace the whole configuration, e.g. one loaded from a file.
    #[must_use]
    pub const fn config(mut self, cfg: CadenceConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the `Cadence` service.
    #[must_use]
    pub const fn build(self) -> Cadence {
        Cadence { cfg: self.cfg }
    }
}

impl Cadence {
    /// Start building a new `Cadence` instance.
    ///
    /// ```
    /// use cadence::{Cadence, KeyOrder, WeekStart};
    ///
    /// let cadence = Cadence::builder()
    ///     .week_start(WeekStart::Sunday)
    ///     .key_order(KeyOrder::Chronological)
    ///     .build();
    /// assert_eq!(cadence.config().week_start, WeekStart::Sunday);
    /// ```
    #[must_use]
    pub fn builder() -> CadenceBuilder {
        CadenceBuilder::new()
    }

    /// Configuration this service runs under.
    #[must_use]
    pub const fn config(&self) -> &CadenceConfig {
        &self.cfg
    }

    /// Validate caller-supplied options without touching any data.
    ///
    /// # Errors
    /// Returns `InvalidParameter` naming the first bad option.
    pub fn validate(&self, options: &RawOptions) -> Result<ResampleOptions, CadenceError> {
        cadence_core::validate(options)
    }

    /// Resample a raw series: validate options, normalize, resample.
    ///
    /// The first failure aborts the call and is returned as-is.
    ///
    /// # Errors
    /// - `InvalidParameter` for a missing or unknown frequency/function.
    /// - `InvalidDate` / `InvalidValue` for the first malformed entry.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "cadence::core::resample_series",
            skip(self, raw, options),
            fields(
                points = raw.len(),
                frequency = ?options.resample_frequency,
                function = ?options.resample_function,
            ),
            err,
        )
    )]
    pub fn resample_series(
        &self,
        raw: &[RawPoint],
        options: &RawOptions,
    ) -> Result<Vec<ResultPoint>, CadenceError> {
        cadence_core::resample_series(raw, options, &self.cfg)
    }

    /// Resample a JSON body of `[dateText, value]` pairs.
    ///
    /// # Errors
    /// As [`Cadence::resample_series`], plus `InvalidBody` when the body is not
    /// a JSON array of pairs. Options are checked before the body is parsed.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "cadence::core::resample_json",
            skip(self, body, options),
            fields(body_len = body.len()),
            err,
        )
    )]
    pub fn resample_json(
        &self,
        body: &str,
        options: &RawOptions,
    ) -> Result<Vec<ResultPoint>, CadenceError> {
        cadence_core::resample_json(body, options, &self.cfg)
    }

    /// Resample already validated points with typed options.
    #[must_use]
    pub fn resample_points(&self, points: &[Point], options: ResampleOptions) -> Vec<ResultPoint> {
        cadence_core::resample(points, options.frequency, options.function, &self.cfg)
    }
}
