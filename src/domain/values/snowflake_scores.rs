use crate::domain::error::FieldError;
use crate::domain::values::score_dimension::ScoreDimension;
use serde::{Deserialize, Serialize};

pub const SCORES_FIELD: &str = "snowflakeScores";

/// The score array as reported by the API, in API order.
///
/// The API normally reports five scores, but whatever length it sends is
/// kept; a short array only fails when a missing dimension is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnowflakeScores(Vec<i64>);

impl SnowflakeScores {
    pub fn new(scores: Vec<i64>) -> Self {
        Self(scores)
    }

    /// Parse the raw `snowflakeScores` value element by element.
    /// Every element must be a JSON integer.
    pub fn parse(raw: &serde_json::Value) -> Result<Self, FieldError> {
        let array = raw.as_array().ok_or(FieldError::TypeMismatch {
            field: SCORES_FIELD,
            expected: "an array",
        })?;

        let mut scores = Vec::with_capacity(array.len());
        for element in array {
            let score = element.as_i64().ok_or(FieldError::TypeMismatch {
                field: SCORES_FIELD,
                expected: "an array of integers",
            })?;
            scores.push(score);
        }
        Ok(Self(scores))
    }

    pub fn get(&self, dimension: ScoreDimension) -> Result<i64, FieldError> {
        let index = dimension.index();
        self.0.get(index).copied().ok_or(FieldError::OutOfRange {
            field: SCORES_FIELD,
            index,
            len: self.0.len(),
        })
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    /// Named pairs for every dimension the array actually covers.
    pub fn named(&self) -> Vec<(ScoreDimension, i64)> {
        ScoreDimension::ALL
            .iter()
            .filter_map(|d| self.get(*d).ok().map(|s| (*d, s)))
            .collect()
    }
}
