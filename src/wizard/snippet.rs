// src/wizard/snippet.rs
use serde::{Deserialize, Serialize};

use super::WizardStep;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub step: WizardStep,
    pub text: String,
}

/// Ordered, step-keyed fragments. Rendering joins them with a blank line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    #[serde(default)]
    fragments: Vec<Fragment>,
}

impl Snippet {
    /// Sets the fragment for `step`, replacing any previous one.
    pub fn replace(&mut self, step: WizardStep, text: String) {
        match self.fragments.binary_search_by(|f| f.step.cmp(&step)) {
            Ok(index) => self.fragments[index].text = text,
            Err(index) => self.fragments.insert(index, Fragment { step, text }),
        }
    }

    pub fn get(&self, step: WizardStep) -> Option<&str> {
        self.fragments
            .iter()
            .find(|f| f.step == step)
            .map(|f| f.text.as_str())
    }

    pub fn contains(&self, step: WizardStep) -> bool {
        self.get(step).is_some()
    }

    /// Drops every fragment belonging to a step after `step`.
    pub fn invalidate_after(&mut self, step: WizardStep) -> usize {
        let before = self.fragments.len();
        self.fragments.retain(|f| f.step <= step);
        before - self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn render(&self) -> String {
        self.fragments
            .iter()
            .map(|f| f.text.trim_end())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
