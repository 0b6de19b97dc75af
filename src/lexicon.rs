//! Response lexicon: the phrase → reply table plus the stop-word set.
//!
//! Entries keep insertion order. Every matching stage scans them in that
//! order and the first hit wins, so the order of the built-in table and of
//! the training file is observable behavior.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Common English function words ignored by keyword extraction.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is",
    "it", "its", "of", "on", "that", "the", "to", "was", "will", "with", "this", "but", "they",
    "have", "had", "what", "said", "each", "which", "she", "do", "how", "their", "if", "up",
    "out", "many", "then", "them", "these", "so", "some", "her", "would", "make", "like",
    "into", "him", "time", "two", "more", "go", "no", "way", "could", "my", "than", "first",
    "been", "call", "who", "now", "find", "long", "down", "day", "did", "get", "come", "made",
    "may", "part",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// Whether `word` is in the fixed stop-word set.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// Placeholder replaced with the configured bot name in built-in replies.
const BOT_NAME_SLOT: &str = "{bot}";

/// Built-in phrase → reply pairs, in matching order.
const BUILTIN_RESPONSES: &[(&str, &str)] = &[
    ("hello", "Hello there! How can I assist you today?"),
    ("hi", "Hi! Nice to meet you. How can I help?"),
    ("hey", "Hey! What can I do for you today?"),
    ("how are you", "I'm a bot, but I'm running perfectly! Thanks for asking."),
    ("how are you doing", "I'm doing great! Ready to help you with anything."),
    ("what's up", "Not much, just here to chat and help you out!"),
    ("name", "You can call me {bot}."),
    ("what's your name", "My name is {bot}. Nice to meet you!"),
    ("who are you", "I'm {bot}, your friendly AI assistant."),
    ("bye", "Goodbye! Have a great day."),
    ("goodbye", "See you later! Take care!"),
    ("see you", "See you! Come back anytime!"),
    (
        "help",
        "You can ask me about my name, how I am, or just say hello. I'll do my best to answer!",
    ),
    (
        "what can you do",
        "I can chat with you, answer basic questions, and help you with simple tasks. Just ask me anything!",
    ),
    ("thanks", "You're welcome! Is there anything else I can help you with?"),
    ("thank you", "You're very welcome! Feel free to ask me more questions."),
    (
        "weather",
        "I'm sorry, I don't have access to real-time weather data. You might want to check a weather app or website.",
    ),
    (
        "time",
        "I don't have access to real-time clock data, but I hope you're having a great day!",
    ),
    ("joke", "Why don't scientists trust atoms? Because they make up everything! 😄"),
    (
        "funny",
        "I try my best to be entertaining! Did you know that programmers prefer dark mode because light attracts bugs?",
    ),
    ("love", "That's very kind of you! I'm designed to be helpful and friendly."),
    ("hate", "I'm sorry to hear that. I'm here to help and make our conversation pleasant."),
    ("sorry", "No worries at all! We all make mistakes. How can I help you?"),
    ("okay", "Great! What would you like to talk about?"),
    ("yes", "Excellent! What can I help you with?"),
    ("no", "No problem! Let me know if you change your mind."),
    ("programming", "I love programming! What language are you working with?"),
    (
        "java",
        "Java is a great programming language! It's object-oriented and platform-independent.",
    ),
    (
        "python",
        "Python is excellent for beginners and has great libraries for AI and data science!",
    ),
    (
        "javascript",
        "JavaScript is perfect for web development and creating interactive websites!",
    ),
    (
        "algorithm",
        "Algorithms are fascinating! They're like recipes for solving problems efficiently.",
    ),
    (
        "database",
        "Databases are essential for storing and managing data. SQL is a great place to start!",
    ),
    (
        "machine learning",
        "Machine learning is amazing! It allows computers to learn from data and make predictions.",
    ),
    (
        "artificial intelligence",
        "AI is transforming our world! It includes machine learning, natural language processing, and more.",
    ),
    (
        "neural network",
        "Neural networks are inspired by the human brain and are great for pattern recognition!",
    ),
    (
        "data science",
        "Data science combines statistics, programming, and domain knowledge to extract insights from data.",
    ),
];

/// Lowercase and trim a question into its lexicon key form.
pub fn phrase_key(question: &str) -> String {
    question.trim().to_lowercase()
}

/// Insertion-ordered phrase → reply table.
///
/// Overwriting an existing phrase replaces the reply in place, so the entry
/// keeps its original scan position.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl Lexicon {
    /// An empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// A lexicon seeded with the built-in responses, with `bot_name`
    /// substituted into the replies that mention it.
    pub fn with_builtins(bot_name: &str) -> Self {
        let mut lexicon = Self::new();
        for (phrase, reply) in BUILTIN_RESPONSES {
            lexicon.insert(*phrase, reply.replace(BOT_NAME_SLOT, bot_name));
        }
        lexicon
    }

    /// Number of built-in entries.
    pub fn builtin_count() -> usize {
        BUILTIN_RESPONSES.len()
    }

    /// Look up the reply for an exact phrase.
    pub fn lookup(&self, phrase: &str) -> Option<&str> {
        self.index
            .get(phrase)
            .map(|&i| self.entries[i].1.as_str())
    }

    /// Insert or overwrite a phrase. Returns the previous reply, if any.
    pub fn insert(&mut self, phrase: impl Into<String>, reply: impl Into<String>) -> Option<String> {
        let phrase = phrase.into();
        let reply = reply.into();
        if let Some(&i) = self.index.get(&phrase) {
            return Some(std::mem::replace(&mut self.entries[i].1, reply));
        }
        self.index.insert(phrase.clone(), self.entries.len());
        self.entries.push((phrase, reply));
        None
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, r)| (p.as_str(), r.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
