//! Engine facade: top-level API for the rulebot system.
//!
//! The `Engine` owns the lexicon, the training store, and all per-session
//! state (history, keyword counts, context label). Its chat operations never
//! fail: blank input gets a canned prompt, persistence problems are logged,
//! and malformed training commands are ignored.

use std::collections::HashMap;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::command::parse_training_command;
use crate::config::EngineConfig;
use crate::context::{ContextLabel, ConversationHistory};
use crate::frequency::KeywordFrequency;
use crate::keywords::{keywords_of, normalize};
use crate::lexicon::Lexicon;
use crate::matcher::{self, MatchInput};
use crate::stats::ChatStats;
use crate::store::{TrainingRecord, TrainingStore};

/// Reply to empty or whitespace-only input.
pub const EMPTY_INPUT_REPLY: &str = "Please say something! I'm here to chat with you.";

/// The rulebot response engine.
///
/// Single-caller: every operation takes `&mut self` and runs to completion.
pub struct Engine {
    config: EngineConfig,
    lexicon: Lexicon,
    store: Option<TrainingStore>,
    frequency: KeywordFrequency,
    history: ConversationHistory,
    context: ContextLabel,
    rng: StdRng,
}

impl Engine {
    /// Create an engine: built-in responses first, then the training file
    /// overlaid in line order.
    ///
    /// An unreadable training file is logged and the engine starts with the
    /// built-ins only.
    pub fn new(config: EngineConfig) -> Self {
        let mut lexicon = Lexicon::with_builtins(&config.bot_name);
        let store = config
            .training_file
            .as_ref()
            .map(|path| TrainingStore::new(path.clone()));

        let mut loaded = 0;
        if let Some(store) = &store {
            match store.load_all() {
                Ok(records) => {
                    loaded = records.len();
                    for record in records {
                        lexicon.insert(record.question, record.answer);
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "training data unavailable, using built-in responses only");
                }
            }
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        tracing::info!(
            builtins = Lexicon::builtin_count(),
            loaded,
            entries = lexicon.len(),
            file = ?store.as_ref().map(|s| s.path().display().to_string()),
            "initialized rulebot engine"
        );

        Self {
            config,
            lexicon,
            store,
            frequency: KeywordFrequency::new(),
            history: ConversationHistory::new(),
            context: ContextLabel::None,
            rng,
        }
    }

    /// Produce a reply for one user input.
    ///
    /// The input is logged to the history and its keywords are counted
    /// before matching. The context label is recomputed afterwards, so the
    /// label consulted by the context fallback is the previous turn's.
    pub fn get_response(&mut self, input: &str) -> String {
        if input.trim().is_empty() {
            return EMPTY_INPUT_REPLY.to_string();
        }

        self.history.push(input);
        let normalized = normalize(input);
        let keywords = keywords_of(&normalized);
        self.frequency.record(&keywords);

        let selection = matcher::select(
            &MatchInput {
                normalized: &normalized,
                keywords: &keywords,
                lexicon: &self.lexicon,
                context: self.context,
                frequency: &self.frequency,
                history: &self.history,
                bot_name: &self.config.bot_name,
            },
            &mut self.rng,
        );

        let next = ContextLabel::from_keywords(keywords.as_slice());
        if next != self.context {
            tracing::debug!(from = %self.context, to = %next, "context changed");
        }
        self.context = next;

        tracing::debug!(stage = %selection.stage, keywords = keywords.len(), "selected response");
        selection.reply
    }

    /// Teach the engine a question/answer pair.
    ///
    /// The question is lowercased and trimmed, the answer trimmed. The pair
    /// takes effect immediately; a failure to append it to the training file
    /// is logged and does not undo it. Pairs containing `|` or a line break
    /// are not written at all. Pairs with a blank side are ignored.
    pub fn train(&mut self, question: &str, answer: &str) {
        let Some(record) = TrainingRecord::new(question, answer) else {
            tracing::warn!("ignoring training pair with a blank question or answer");
            return;
        };
        let replaced = self
            .lexicon
            .insert(record.question.clone(), record.answer.clone());
        tracing::info!(question = %record.question, replaced = replaced.is_some(), "learned response");

        if let Some(store) = &self.store {
            // A separator or line break would split the record on reload.
            if !record.is_reloadable() {
                tracing::warn!(
                    question = %record.question,
                    "training pair contains a separator or line break, kept for this session only"
                );
            } else if let Err(e) = store.append(&record) {
                tracing::warn!(error = %e, "could not save training data");
            }
        }
    }

    /// Handle `train: question | answer`. Anything else, including a
    /// command without exactly one `|`, is ignored.
    pub fn process_training_command(&mut self, text: &str) {
        if let Some((question, answer)) = parse_training_command(text) {
            self.train(&question, &answer);
        }
    }

    /// Snapshot of keyword counts.
    pub fn keyword_frequency(&self) -> HashMap<String, u32> {
        self.frequency.snapshot()
    }

    /// Snapshot of the recent inputs, oldest first.
    pub fn conversation_history(&self) -> Vec<String> {
        self.history.snapshot()
    }

    /// Summary report of the session.
    pub fn stats(&self) -> ChatStats {
        ChatStats::collect(&self.history, &self.frequency)
    }

    /// Clear the context label and history. Keyword counts and learned
    /// responses are kept.
    pub fn reset_context(&mut self) {
        self.context = ContextLabel::None;
        self.history.clear();
        tracing::debug!("context reset");
    }

    /// Current context label.
    pub fn context(&self) -> ContextLabel {
        self.context
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
