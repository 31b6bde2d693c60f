/// What to do with a latch whose reset literal is neither `0` nor `1`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum ResetPolicy {
    /// Fail with [`Error::UnsupportedResetEncoding`][crate::error::Error::UnsupportedResetEncoding].
    #[default]
    Reject,
    /// Leave the latch unconstrained in the initial state and record a diagnostic.
    Unconstrained,
}

/// Policy switches for [`TransitionSystem::from_aig`][crate::transys::TransitionSystem::from_aig].
///
/// # Examples
///
/// ```
/// use aig_transys::config::{ResetPolicy, TranslateConfig};
///
/// let config = TranslateConfig {
///     outputs_as_bad: false,
///     reset_policy: ResetPolicy::Unconstrained,
/// };
/// assert_ne!(config, TranslateConfig::default());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TranslateConfig {
    /// Treat every circuit output as an additional bad-state property (default: true).
    ///
    /// Older benchmarks encode the property as an output; the resulting entries are placed
    /// before explicit bad literals and tagged with their origin.
    pub outputs_as_bad: bool,
    /// Handling of non-constant reset values (default: [`ResetPolicy::Reject`]).
    pub reset_policy: ResetPolicy,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            outputs_as_bad: true,
            reset_policy: ResetPolicy::Reject,
        }
    }
}
