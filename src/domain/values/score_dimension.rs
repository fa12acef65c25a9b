use std::fmt;
use std::str::FromStr;

/// One axis of the snowflake, in the order the API reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreDimension {
    Value,
    Future,
    Past,
    Health,
    Income,
}

impl ScoreDimension {
    pub const ALL: [ScoreDimension; 5] = [
        ScoreDimension::Value,
        ScoreDimension::Future,
        ScoreDimension::Past,
        ScoreDimension::Health,
        ScoreDimension::Income,
    ];

    /// Position of this dimension in the `snowflakeScores` array.
    pub fn index(self) -> usize {
        match self {
            ScoreDimension::Value => 0,
            ScoreDimension::Future => 1,
            ScoreDimension::Past => 2,
            ScoreDimension::Health => 3,
            ScoreDimension::Income => 4,
        }
    }
}

impl fmt::Display for ScoreDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreDimension::Value => write!(f, "value"),
            ScoreDimension::Future => write!(f, "future"),
            ScoreDimension::Past => write!(f, "past"),
            ScoreDimension::Health => write!(f, "health"),
            ScoreDimension::Income => write!(f, "income"),
        }
    }
}

impl FromStr for ScoreDimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "value" => Ok(ScoreDimension::Value),
            "future" => Ok(ScoreDimension::Future),
            "past" => Ok(ScoreDimension::Past),
            "health" => Ok(ScoreDimension::Health),
            "income" => Ok(ScoreDimension::Income),
            _ => Err(format!("Unknown score dimension: {s}")),
        }
    }
}
