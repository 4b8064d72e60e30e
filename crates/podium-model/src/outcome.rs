use serde::{Deserialize, Serialize};

/// Result of attempting to import one event group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOutcome {
    pub event_key: String,
    pub ok: bool,
    pub message: String,
}

impl ImportOutcome {
    pub fn imported(event_key: impl Into<String>, count: usize) -> Self {
        Self {
            event_key: event_key.into(),
            ok: true,
            message: format!("Imported {count} placements"),
        }
    }

    pub fn failed(event_key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            event_key: event_key.into(),
            ok: false,
            message: message.into(),
        }
    }
}

/// Ordered outcomes of one import run, one entry per group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportLog {
    pub outcomes: Vec<ImportOutcome>,
}

impl ImportLog {
    pub fn push(&mut self, outcome: ImportOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn imported_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.ok).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.ok).count()
    }

    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImportOutcome> {
        self.outcomes.iter()
    }
}

impl<'a> IntoIterator for &'a ImportLog {
    type Item = &'a ImportOutcome;
    type IntoIter = std::slice::Iter<'a, ImportOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}
