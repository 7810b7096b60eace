//! Reading-interval domain computation.
//!
//! The set of reading intervals a user may pick depends on which transmitter
//! family is active: either the preferred transmitter, or, when no
//! preference is set, the family of the currently connected transmitter.
//! This is kept as a pure function so it can be tested without any UI or
//! controller in the loop.

use core::fmt;

use glucowear_types::TransmitterType;

/// An inclusive range of reading intervals, in minutes, with a stride.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalDomain {
    /// Lowest allowed interval in minutes.
    pub lower: u32,
    /// Highest allowed interval in minutes.
    pub upper: u32,
    /// Stride between allowed values.
    pub step: u32,
}

impl IntervalDomain {
    /// Create a domain from bounds and stride.
    ///
    /// # Panics
    ///
    /// Panics if `step` is 0; a zero stride enumerates nothing.
    #[must_use]
    pub fn new(lower: u32, upper: u32, step: u32) -> Self {
        assert!(step > 0, "interval stride must be nonzero");
        Self { lower, upper, step }
    }

    /// Enumerate the allowed interval values.
    ///
    /// # Examples
    ///
    /// ```
    /// use glucowear_core::IntervalDomain;
    ///
    /// assert_eq!(IntervalDomain::new(1, 5, 2).values(), vec![1, 3, 5]);
    /// assert_eq!(IntervalDomain::new(5, 5, 1).values(), vec![5]);
    /// ```
    #[must_use]
    pub fn values(&self) -> Vec<u32> {
        (self.lower..=self.upper).step_by(self.step as usize).collect()
    }

    /// Check whether an interval is a member of this domain.
    #[must_use]
    pub fn contains(&self, minutes: u32) -> bool {
        minutes >= self.lower
            && minutes <= self.upper
            && (minutes - self.lower) % self.step == 0
    }
}

impl fmt::Display for IntervalDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.step == 1 {
            write!(f, "{}-{} min", self.lower, self.upper)
        } else {
            write!(f, "{}-{} min by {}", self.lower, self.upper, self.step)
        }
    }
}

/// Compute the reading-interval domain for the active transmitter.
///
/// The effective family is `preferred`; when `preferred` is
/// [`TransmitterType::None`], the connected transmitter's family (if any)
/// decides instead. Per family:
///
/// - BLU reads on a fixed 5 minute cycle: `{5}`
/// - MiaoMiao supports 1-5 minutes in steps of 2: `{1, 3, 5}`
/// - Abbott direct connections are fixed at 1 minute: `{1}`
/// - anything else: `{1..=15}` in 1 minute steps
///
/// # Examples
///
/// ```
/// use glucowear_core::reading_interval_domain;
/// use glucowear_types::TransmitterType;
///
/// let domain = reading_interval_domain(TransmitterType::MiaoMiao, None);
/// assert_eq!(domain.values(), vec![1, 3, 5]);
///
/// // With no preference, the connected transmitter decides.
/// let domain = reading_interval_domain(TransmitterType::None, Some(TransmitterType::Blu));
/// assert_eq!(domain.values(), vec![5]);
/// ```
#[must_use]
pub fn reading_interval_domain(
    preferred: TransmitterType,
    connected: Option<TransmitterType>,
) -> IntervalDomain {
    let matches = |family: TransmitterType| {
        preferred == family
            || (preferred == TransmitterType::None && connected == Some(family))
    };

    let (lower, upper) = if matches(TransmitterType::Blu) {
        (5, 5)
    } else if matches(TransmitterType::MiaoMiao) {
        (1, 5)
    } else if matches(TransmitterType::Abbott) {
        (1, 1)
    } else {
        (1, 15)
    };
    let step = if matches(TransmitterType::MiaoMiao) { 2 } else { 1 };

    IntervalDomain::new(lower, upper, step)
}
