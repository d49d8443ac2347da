//! Running maximum with a deterministic tie-break

/// Best candidate seen so far and its match count
///
/// Higher counts win; equal counts go to the smaller candidate, so the reduced
/// result does not depend on which worker finished first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Best<C> {
    candidate: Option<C>,
    count: usize,
}

impl<C> Default for Best<C> {
    fn default() -> Self {
        Self {
            candidate: None,
            count: 0,
        }
    }
}

impl<C: Ord> Best<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `candidate` if it beats the current best
    ///
    /// # Examples
    /// ```
    /// use letter_combinations::search::Best;
    ///
    /// let mut best = Best::new();
    /// best.offer("then", 6);
    /// best.offer("hen", 4);
    /// best.offer("athen", 6);
    /// assert_eq!(best.candidate(), Some(&"athen"));
    /// assert_eq!(best.count(), 6);
    /// ```
    pub fn offer(&mut self, candidate: C, count: usize) {
        if self.beaten_by(&candidate, count) {
            self.candidate = Some(candidate);
            self.count = count;
        }
    }

    /// Combine with another partial result
    pub fn merge(&mut self, other: Self) {
        if let Some(candidate) = other.candidate {
            self.offer(candidate, other.count);
        }
    }

    fn beaten_by(&self, candidate: &C, count: usize) -> bool {
        match &self.candidate {
            None => true,
            Some(current) => count > self.count || (count == self.count && candidate < current),
        }
    }

    #[inline]
    #[must_use]
    pub const fn candidate(&self) -> Option<&C> {
        self.candidate.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// True when nothing was offered
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.candidate.is_none()
    }

    #[must_use]
    pub fn into_inner(self) -> Option<(C, usize)> {
        let count = self.count;
        self.candidate.map(|candidate| (candidate, count))
    }
}
