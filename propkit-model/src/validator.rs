use std::fmt;

type Check<K> = Box<dyn Fn(&K) -> bool + Send + Sync>;

/// A predicate over candidate values, paired with a human-readable rule.
///
/// The rule text is what a rejected write reports, e.g. `within [-10, 10]`.
pub struct Validator<K> {
    rule: String,
    check: Check<K>,
}

impl<K> Validator<K> {
    /// Creates a validator from an arbitrary predicate.
    pub fn new<F>(rule: impl Into<String>, check: F) -> Self
    where
        F: Fn(&K) -> bool + Send + Sync + 'static,
    {
        Self {
            rule: rule.into(),
            check: Box::new(check),
        }
    }

    /// Returns the rule description.
    #[must_use]
    pub fn rule(&self) -> &str {
        &self.rule
    }

    /// Returns true if `value` satisfies the predicate.
    #[must_use]
    pub fn accepts(&self, value: &K) -> bool {
        (self.check)(value)
    }
}

impl<K> Validator<K>
where
    K: PartialOrd + fmt::Display + Send + Sync + 'static,
{
    /// Inclusive range check: `min <= v <= max`.
    ///
    /// Values that are unordered with respect to the bounds (a float NaN)
    /// are rejected.
    pub fn range(min: K, max: K) -> Self {
        let rule = format!("within [{min}, {max}]");
        Self::new(rule, move |v: &K| *v >= min && *v <= max)
    }
}

impl Validator<String> {
    /// Bounds text length, counted in characters rather than bytes.
    pub fn max_chars(max: usize) -> Self {
        Self::new(format!("at most {max} characters"), move |s: &String| {
            s.chars().count() <= max
        })
    }
}

impl<K> fmt::Debug for Validator<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator").field("rule", &self.rule).finish()
    }
}
