use serde::{Deserialize, Serialize};

pub type Score = u8;

/// One sub-score and the shortfalls that kept it from 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub score: Score,
    pub insights: Vec<String>,
}

impl CategoryScore {
    /// Rounds the summed points and clamps them into 0..=100.
    pub fn from_points(points: f64, insights: Vec<String>) -> Self {
        let score = if points.is_nan() {
            0
        } else {
            points.round().clamp(0.0, 100.0) as Score
        };
        Self { score, insights }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub local: CategoryScore,
    pub onsite: CategoryScore,
    pub combined: Score,
}

impl ScoreResult {
    pub fn new(local: CategoryScore, onsite: CategoryScore) -> Self {
        let combined = combine(local.score, onsite.score);
        Self {
            local,
            onsite,
            combined,
        }
    }

    pub fn has_shortfalls(&self) -> bool {
        !self.local.insights.is_empty() || !self.onsite.insights.is_empty()
    }
}

/// Unweighted mean of the two sub-scores, halves rounding up.
pub fn combine(local: Score, onsite: Score) -> Score {
    ((u16::from(local) + u16::from(onsite) + 1) / 2) as Score
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Strong,
    Fair,
    Weak,
}

impl ScoreBand {
    pub fn from_score(score: Score) -> Self {
        match score {
            80.. => ScoreBand::Strong,
            50..=79 => ScoreBand::Fair,
            _ => ScoreBand::Weak,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Strong => "Strong",
            ScoreBand::Fair => "Fair",
            ScoreBand::Weak => "Needs work",
        }
    }
}
