/// Qualitative feedback bucket chosen from the score percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Excellent,
    Good,
    Encourage,
}

impl Tier {
    const EXCELLENT_THRESHOLD: u32 = 80;
    const GOOD_THRESHOLD: u32 = 50;

    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= Self::EXCELLENT_THRESHOLD {
            Tier::Excellent
        } else if percentage >= Self::GOOD_THRESHOLD {
            Tier::Good
        } else {
            Tier::Encourage
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Excellent => "excellent",
            Tier::Good => "good",
            Tier::Encourage => "encourage",
        }
    }

    /// User-facing message shown on the results screen.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent work! Keep it up!",
            Tier::Good => "Good effort! Practice makes perfect.",
            Tier::Encourage => "Keep studying! You'll get there.",
        }
    }
}

/// Final (or running) score of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSummary {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub tier: Tier,
}

impl ScoreSummary {
    #[must_use]
    pub fn new(score: usize, total: usize) -> Self {
        let percentage = round_half_up_percentage(score, total);
        Self {
            score,
            total,
            percentage,
            tier: Tier::from_percentage(percentage),
        }
    }

    #[must_use]
    pub fn score_text(&self) -> String {
        format!("{} / {}", self.score, self.total)
    }

    #[must_use]
    pub fn percentage_text(&self) -> String {
        format!("{}%", self.percentage)
    }
}

/// `score / total * 100`, rounded half up; 0 when `total` is 0.
fn round_half_up_percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    // Integer form of floor(score * 100 / total + 0.5).
    let score = score as u128;
    let total = total as u128;
    let rounded = (score * 200 + total) / (total * 2);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}
