use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter grade derived from a fitness percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rating {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Rating {
    /// Ratings from best to worst
    pub const DESCENDING: [Rating; 6] = [
        Rating::A,
        Rating::B,
        Rating::C,
        Rating::D,
        Rating::E,
        Rating::F,
    ];

    /// Smallest percentage that still earns this rating
    pub fn lower_bound(&self) -> f64 {
        match self {
            Rating::A => 95.0,
            Rating::B => 90.0,
            Rating::C => 80.0,
            Rating::D => 50.0,
            Rating::E => 20.0,
            Rating::F => 0.0,
        }
    }

    /// First rating whose lower bound the percentage reaches.
    /// Anything below zero (or NaN) is an F.
    pub fn from_percentage(percentage: f64) -> Self {
        Self::DESCENDING
            .into_iter()
            .find(|rating| percentage >= rating.lower_bound())
            .unwrap_or(Rating::F)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Rating::A => "A",
            Rating::B => "B",
            Rating::C => "C",
            Rating::D => "D",
            Rating::E => "E",
            Rating::F => "F",
        };
        f.write_str(letter)
    }
}
