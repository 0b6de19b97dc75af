//! Conversation context: the current topic label and the bounded input log.
//!
//! The label is recomputed from each turn's keywords alone; nothing carries
//! over from earlier turns except through the history.

use std::collections::VecDeque;

/// Maximum number of user inputs kept in the history.
pub const HISTORY_CAPACITY: usize = 10;

// ── ContextLabel ─────────────────────────────────────────────────────────

/// The inferred topic of the latest turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ContextLabel {
    /// No recognized topic.
    #[default]
    None,
    Greeting,
    ProgrammingHelp,
    Learning,
}

const PROGRAMMING_WORDS: &[&str] = &["programming", "code", "java", "python"];
const LEARNING_WORDS: &[&str] = &["learn", "study", "education"];
const GREETING_WORDS: &[&str] = &["hello", "hi", "hey"];

impl ContextLabel {
    /// Infer the label for one turn. Categories are checked in priority
    /// order: programming, then learning, then greeting.
    pub fn from_keywords<S: AsRef<str>>(keywords: &[S]) -> Self {
        let mentions = |words: &[&str]| {
            keywords
                .iter()
                .any(|k| words.contains(&k.as_ref()))
        };
        if mentions(PROGRAMMING_WORDS) {
            Self::ProgrammingHelp
        } else if mentions(LEARNING_WORDS) {
            Self::Learning
        } else if mentions(GREETING_WORDS) {
            Self::Greeting
        } else {
            Self::None
        }
    }

    /// Wire name: `""`, `"greeting"`, `"programming_help"` or `"learning"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Greeting => "greeting",
            Self::ProgrammingHelp => "programming_help",
            Self::Learning => "learning",
        }
    }

    /// Candidate fallback replies for this label. Empty for [`ContextLabel::None`].
    pub fn candidates(&self) -> &'static [&'static str] {
        match self {
            Self::None => &[],
            Self::Greeting => &[
                "Hello! How can I help you today?",
                "Hi there! What would you like to know?",
                "Hey! I'm here to assist you with any questions.",
            ],
            Self::ProgrammingHelp => &[
                "I'd be happy to help with programming! What specific issue are you facing?",
                "Programming can be challenging. Let me know what you're working on!",
                "I love helping with code! What language or problem are you dealing with?",
            ],
            Self::Learning => &[
                "Learning is a wonderful journey! What topic interests you most?",
                "I'm always learning too! What would you like to explore?",
                "Knowledge is power! What area would you like to dive into?",
            ],
        }
    }
}

impl std::fmt::Display for ContextLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ConversationHistory ──────────────────────────────────────────────────

/// FIFO log of raw user inputs, capped at [`HISTORY_CAPACITY`].
#[derive(Debug, Clone, Default)]
pub struct ConversationHistory {
    turns: VecDeque<String>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self {
            turns: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Record an input, evicting the oldest when over capacity.
    pub fn push(&mut self, input: impl Into<String>) {
        self.turns.push_back(input.into());
        while self.turns.len() > HISTORY_CAPACITY {
            self.turns.pop_front();
        }
    }

    /// The input before the most recent one.
    pub fn previous(&self) -> Option<&str> {
        let len = self.turns.len();
        if len < 2 {
            return None;
        }
        self.turns.get(len - 2).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.turns.iter().map(String::as_str)
    }

    /// Owned copy, oldest first.
    pub fn snapshot(&self) -> Vec<String> {
        self.turns.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
