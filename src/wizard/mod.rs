// src/wizard/mod.rs
//! The wagmi config builder: provider → chains → API key.
//!
//! Selections live in one typed record and the generated code is kept as
//! step-keyed fragments, so re-running a step replaces its own fragment.

pub mod fragments;
pub mod selection;
pub mod snippet;

use serde::{Deserialize, Serialize};

use crate::i18n::Text;
use selection::{Chain, NetworkType, Provider, WizardSelection};
use snippet::Snippet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Provider,
    Chains,
    ApiKey,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [WizardStep::Provider, WizardStep::Chains, WizardStep::ApiKey];

    pub fn number(self) -> usize {
        match self {
            WizardStep::Provider => 1,
            WizardStep::Chains => 2,
            WizardStep::ApiKey => 3,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            WizardStep::Provider => "/builder/provider",
            WizardStep::Chains => "/builder/chainconfig",
            WizardStep::ApiKey => "/builder/apikey",
        }
    }

    pub fn title(self) -> Text {
        match self {
            WizardStep::Provider => Text::new("Choose a provider", "Chagua mtoa huduma"),
            WizardStep::Chains => Text::new("Choose chains", "Chagua minyororo"),
            WizardStep::ApiKey => Text::new("Confirm your API key", "Thibitisha ufunguo wa API"),
        }
    }

    pub fn next(self) -> Option<WizardStep> {
        match self {
            WizardStep::Provider => Some(WizardStep::Chains),
            WizardStep::Chains => Some(WizardStep::ApiKey),
            WizardStep::ApiKey => None,
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title().en)
    }
}

/// A single step's input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Provider(Provider),
    Chains { chains: Vec<Chain>, network: NetworkType },
    ApiKeyConfirmed(bool),
}

impl Selection {
    pub fn step(&self) -> WizardStep {
        match self {
            Selection::Provider(_) => WizardStep::Provider,
            Selection::Chains { .. } => WizardStep::Chains,
            Selection::ApiKeyConfirmed(_) => WizardStep::ApiKey,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("step \"{0}\" has no selection yet")]
    MissingSelection(WizardStep),
    #[error("the {} API key has not been confirmed", .0.display_name())]
    ApiKeyNotConfirmed(Provider),
}

impl WizardError {
    /// Where the visitor should go to fix this.
    pub fn step(&self) -> WizardStep {
        match self {
            WizardError::MissingSelection(step) => *step,
            WizardError::ApiKeyNotConfirmed(_) => WizardStep::ApiKey,
        }
    }
}

/// Persisted wizard progress: selections plus generated fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    #[serde(default)]
    pub selection: WizardSelection,
    #[serde(default)]
    pub snippet: Snippet,
}

impl WizardState {
    /// Stores a step's selection, overwriting the previous one. A changed
    /// selection drops the fragments of every later step.
    pub fn record_selection(&mut self, selection: Selection) {
        let step = selection.step();
        let current = &mut self.selection;

        let changed = match selection {
            Selection::Provider(provider) => {
                let changed = current.provider != Some(provider);
                if changed {
                    current.api_key_confirmed = false;
                }
                current.provider = Some(provider);
                changed
            }
            Selection::Chains { chains, network } => {
                let mut unique: Vec<Chain> = Vec::with_capacity(chains.len());
                for chain in chains {
                    if !unique.contains(&chain) {
                        unique.push(chain);
                    }
                }
                let changed = current.chains != unique || current.network != Some(network);
                current.chains = unique;
                current.network = Some(network);
                changed
            }
            Selection::ApiKeyConfirmed(confirmed) => {
                let changed = current.api_key_confirmed != confirmed;
                current.api_key_confirmed = confirmed;
                changed
            }
        };

        if changed {
            let dropped = self.snippet.invalidate_after(step);
            if dropped > 0 {
                tracing::debug!("Selection for {} changed, dropped {} later fragment(s)", step, dropped);
            }
        }
    }

    /// Regenerates the fragment for `step` from the current selections and
    /// returns the full rendered snippet.
    pub fn build_snippet(&mut self, step: WizardStep) -> Result<String, WizardError> {
        let text = fragments::render(step, &self.selection)?;
        self.snippet.replace(step, text);
        Ok(self.snippet.render())
    }

    pub fn is_built(&self, step: WizardStep) -> bool {
        self.snippet.contains(step)
    }

    /// First step without a fragment, or `None` once the snippet is complete.
    pub fn next_step(&self) -> Option<WizardStep> {
        WizardStep::ALL.into_iter().find(|step| !self.is_built(*step))
    }

    pub fn is_complete(&self) -> bool {
        self.next_step().is_none()
    }
}
