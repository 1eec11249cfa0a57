use thiserror::Error;

/// `SimulationError` enumerates all possible errors returned by pollsim
#[derive(Error, Debug)]
pub enum SimulationError {
    /// Represents an invalid precinct configuration encountered at construction
    #[error("an invalid precinct configuration was supplied: {0}")]
    InvalidPrecinctConfiguration(&'static str),

    /// Represents a booth scheduler constructed without any booths
    #[error("a precinct requires at least one voting booth")]
    NoBooths,

    /// Represents a voter assigned to a booth while every booth was occupied
    #[error("a voter was assigned to a booth while every booth was occupied")]
    SaturatedBooths,

    /// Represents a booth reclaim requested while no booth was occupied
    #[error("a booth reclaim was requested while no booth was occupied")]
    IdleBooths,

    /// Represents a simulated day that admitted no voters, leaving its mean
    /// wait undefined
    #[error("a simulated day admitted no voters, so its mean wait is undefined")]
    EmptyTrial,

    /// Represents a statistic requested over an empty sample
    #[error("a statistic was requested over an empty sample")]
    EmptySample,

    /// Represents a failed conversion to num-traits Float
    #[error("failed to convert to a Float value")]
    FloatConvError,

    /// Transparent serde_json errors
    #[error(transparent)]
    JSONError(#[from] serde_json::error::Error),

    /// Transparent serde_yaml errors
    #[error(transparent)]
    YAMLError(#[from] serde_yaml::Error),

    /// Transparent Exponential distribution errors
    #[error(transparent)]
    ExpError(#[from] rand_distr::ExpError),
}
