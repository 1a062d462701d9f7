//! Configuration for building an algebra.

/// Configuration for an Orlik-Solomon algebra.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlgebraConfig<E> {
    /// Total order on the ground set (`None` = natural order of `E`).
    pub ordering: Option<Vec<E>>,
    /// Prefix printed before each basis index.
    pub prefix: String,
    /// Minimum basis size at which the multiplication table uses rayon.
    pub parallel_threshold: usize,
}

impl<E> Default for AlgebraConfig<E> {
    fn default() -> Self {
        Self {
            ordering: None,
            prefix: "OS".to_string(),
            parallel_threshold: 64,
        }
    }
}

impl<E> AlgebraConfig<E> {
    /// Uses `ordering` as the total order on the ground set.
    #[must_use]
    pub fn with_ordering(mut self, ordering: Vec<E>) -> Self {
        self.ordering = Some(ordering);
        self
    }

    /// Sets the basis index prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the parallel threshold.
    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}
