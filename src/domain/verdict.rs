//! Review verdicts reported by the API.

/// Outcome of a homework review.
///
/// The API reports it as a lowercase status string; only these three
/// statuses are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Reviewer accepted the work.
    Approved,
    /// Reviewer picked the work up.
    Reviewing,
    /// Reviewer left remarks.
    Rejected,
}

impl Verdict {
    /// Every known verdict, in table order.
    pub const ALL: [Self; 3] = [Self::Approved, Self::Reviewing, Self::Rejected];

    /// Look up a verdict by its API status key.
    #[must_use]
    pub fn from_status(status: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.status() == status)
    }

    /// Status key as it appears in the API response.
    #[must_use]
    pub const fn status(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable verdict sent to the chat.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}
