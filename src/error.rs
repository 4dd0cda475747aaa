use thiserror::Error;

/// Top-level error type for hexwall layout computations.
#[derive(Debug, Error)]
pub enum HexwallError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Outline(#[from] OutlineError),
}

/// Degenerate input handed to a planar geometry routine.
///
/// These are caller contract violations. A query that simply has no
/// answer (a line missing a circle) is never reported through this type.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("circle radius must be positive, got {radius}")]
    NonPositiveRadius { radius: f64 },

    #[error("segment endpoints coincide")]
    ZeroLengthSegment,

    #[error("lines are parallel")]
    ParallelLines,
}

/// Errors raised while laying out a part outline.
#[derive(Debug, Error, PartialEq)]
pub enum OutlineError {
    #[error("an outline needs at least 2 arms, got {count}")]
    TooFewArms { count: usize },

    #[error("edge of arm at {angle_deg} degrees does not reach the hub")]
    ArmMissesHub { angle_deg: f64 },

    #[error("edges of arms at {first_deg} and {second_deg} degrees do not meet")]
    EdgesDoNotMeet { first_deg: f64, second_deg: f64 },

    #[error("invalid dimension {name} = {value}")]
    InvalidDimension { name: &'static str, value: f64 },
}

/// Convenience type alias for results using [`HexwallError`].
pub type Result<T> = std::result::Result<T, HexwallError>;
