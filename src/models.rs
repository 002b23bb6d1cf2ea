// src/models.rs
use crate::i18n::Text;

pub const MAX_DISPLAY_NAME_LEN: usize = 64;
pub const MAX_CONTACT_NAME_LEN: usize = 100;
pub const MAX_MESSAGE_LEN: usize = 5000;

// Static content records

/// A titled block of lesson text. Bodies are markdown.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub icon: &'static str,
    pub title: Text,
    pub body: Text,
}

#[derive(Debug, Clone, Copy)]
pub struct Track {
    pub icon: &'static str,
    pub title: Text,
    pub description: Text,
    pub href: &'static str,
    pub available: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct FlipCard {
    pub front: Text,
    pub back: Text,
}

#[derive(Debug, Clone, Copy)]
pub struct QuizQuestion {
    pub prompt: Text,
    pub options: &'static [Text],
    pub answer: usize,
    pub explanation: Text,
}

#[derive(Debug, Clone, Copy)]
pub struct Wallet {
    pub name: &'static str,
    pub icon: &'static str,
    pub kind: Text,
    pub platforms: &'static str,
    pub strengths: Text,
    pub download_url: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Podcast {
    pub title: &'static str,
    pub host: &'static str,
    pub summary: Text,
    pub url: &'static str,
    pub published: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Article {
    pub title: Text,
    pub author: &'static str,
    pub summary: Text,
    pub url: &'static str,
    pub published: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Community {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: Text,
    pub url: &'static str,
}

/// Grading result for one quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome {
    pub chosen: Option<usize>,
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizReport {
    pub outcomes: Vec<QuizOutcome>,
    pub score: usize,
    pub answered: usize,
}

impl QuizReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_complete(&self) -> bool {
        self.answered == self.total()
    }
}
