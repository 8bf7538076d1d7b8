/// Everything that can go wrong before the numeric pipeline runs.
///
/// The computation itself is deterministic and side-effect-free, so there are
/// no transient failures to retry: every variant is a terminal configuration
/// mistake surfaced before any array work starts.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A parameter is outside its valid range.
    #[error("invalid `{field}`: {reason}")]
    Configuration { field: &'static str, reason: String },

    /// An input series does not match the declared `n_days × steps_per_day` shape.
    #[error("the {series} series has {actual} samples, expected {expected}")]
    SeriesShape { series: &'static str, expected: usize, actual: usize },

    /// The parameter file is not valid TOML for [`crate::Params`].
    #[error("failed to parse the parameter file")]
    ParseParams(#[from] toml::de::Error),
}

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
