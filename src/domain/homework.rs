use super::Verdict;

/// A homework record that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Homework {
    name: String,
    verdict: Verdict,
}

impl Homework {
    pub fn new(name: impl Into<String>, verdict: Verdict) -> Self {
        Self {
            name: name.into(),
            verdict,
        }
    }

    /// Chat message announcing this record's status.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Изменился статус проверки работы \"{}\". {}",
            self.name,
            self.verdict.text()
        )
    }
}
