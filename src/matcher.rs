//! Staged response selection.
//!
//! Stages run in a fixed order and the first one that produces a reply wins:
//!
//! 1. exact phrase match
//! 2. keyword containment (either direction) against lexicon phrases
//! 3. whole-input containment (either direction) against lexicon phrases
//! 4. a random reply for the current context label
//! 5. a frequency-based fallback, which always produces something
//!
//! Stages 2 and 3 are ordered scans over the lexicon's insertion order.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::context::{ContextLabel, ConversationHistory};
use crate::frequency::KeywordFrequency;
use crate::lexicon::Lexicon;

/// Reply when no keyword survives extraction.
pub const REPHRASE_REPLY: &str = "I'm sorry, I don't understand that. Please try asking in a different way or type 'help' to see what I can do!";

/// Reply when nothing at all applies.
pub const UNTRAINED_REPLY: &str = "I'm sorry, I don't understand that yet. You can teach me by saying 'train: [question] | [answer]' or type 'help' to see what I can do!";

/// Which stage produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStage {
    Exact,
    Keyword,
    Substring,
    Context,
    Frequency,
    Introduction,
    Rephrase,
    Untrained,
}

impl std::fmt::Display for MatchStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Exact => "exact",
            Self::Keyword => "keyword",
            Self::Substring => "substring",
            Self::Context => "context",
            Self::Frequency => "frequency",
            Self::Introduction => "introduction",
            Self::Rephrase => "rephrase",
            Self::Untrained => "untrained",
        };
        f.write_str(name)
    }
}

/// A chosen reply and the stage that chose it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub stage: MatchStage,
    pub reply: String,
}

impl Selection {
    fn new(stage: MatchStage, reply: impl Into<String>) -> Self {
        Self {
            stage,
            reply: reply.into(),
        }
    }
}

/// Everything one turn's selection reads.
///
/// `frequency` and `history` must already include the current turn.
pub struct MatchInput<'a> {
    pub normalized: &'a str,
    pub keywords: &'a [String],
    pub lexicon: &'a Lexicon,
    pub context: ContextLabel,
    pub frequency: &'a KeywordFrequency,
    pub history: &'a ConversationHistory,
    pub bot_name: &'a str,
}

/// Run the stages in order and return the first reply produced.
pub fn select<R: Rng + ?Sized>(input: &MatchInput<'_>, rng: &mut R) -> Selection {
    if let Some(reply) = input.lexicon.lookup(input.normalized) {
        return Selection::new(MatchStage::Exact, reply);
    }
    if let Some(reply) = keyword_containment(input.lexicon, input.keywords) {
        return Selection::new(MatchStage::Keyword, reply);
    }
    if let Some(reply) = input_containment(input.lexicon, input.normalized) {
        return Selection::new(MatchStage::Substring, reply);
    }
    if let Some(reply) = context_reply(input.context, rng) {
        return Selection::new(MatchStage::Context, reply);
    }
    fallback(input)
}

/// First entry whose phrase contains a keyword, or is contained in one.
/// The keyword loop is outermost, so earlier keywords dominate.
pub fn keyword_containment<'l>(lexicon: &'l Lexicon, keywords: &[String]) -> Option<&'l str> {
    keywords.iter().find_map(|keyword| {
        lexicon
            .entries()
            .find(|(phrase, _)| phrase.contains(keyword.as_str()) || keyword.contains(phrase))
            .map(|(_, reply)| reply)
    })
}

/// First entry whose phrase is contained in the input, or contains it.
pub fn input_containment<'l>(lexicon: &'l Lexicon, normalized: &str) -> Option<&'l str> {
    lexicon
        .entries()
        .find(|(phrase, _)| normalized.contains(phrase) || phrase.contains(normalized))
        .map(|(_, reply)| reply)
}

/// Uniform random pick among the label's candidates.
pub fn context_reply<R: Rng + ?Sized>(label: ContextLabel, rng: &mut R) -> Option<&'static str> {
    label.candidates().choose(rng).copied()
}

fn fallback(input: &MatchInput<'_>) -> Selection {
    if input.keywords.is_empty() {
        return Selection::new(MatchStage::Rephrase, REPHRASE_REPLY);
    }

    // Counts already include this turn, so any extracted keyword has at
    // least 1 and this branch is normally taken.
    if let Some((keyword, _)) = input.frequency.most_frequent(input.keywords) {
        return Selection::new(
            MatchStage::Frequency,
            format!(
                "I see you're interested in '{keyword}'. Could you tell me more about what you'd like to know?"
            ),
        );
    }

    if input
        .history
        .previous()
        .is_some_and(|prev| prev.to_lowercase().contains("name"))
    {
        return Selection::new(
            MatchStage::Introduction,
            format!(
                "I'm {}. What would you like to know about me?",
                input.bot_name
            ),
        );
    }

    Selection::new(MatchStage::Untrained, UNTRAINED_REPLY)
}
