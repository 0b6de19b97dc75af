//! Session statistics report.

use serde::Serialize;

use crate::context::ConversationHistory;
use crate::frequency::KeywordFrequency;

/// Keywords listed in the report.
pub const TOP_KEYWORDS: usize = 10;

/// Recent history entries listed in the report.
pub const RECENT_MESSAGES: usize = 5;

/// A point-in-time summary of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatStats {
    /// Inputs currently held in the history.
    pub total_messages: usize,
    /// Distinct keywords counted this session.
    pub unique_keywords: usize,
    /// Most frequent keywords, highest first.
    pub top_keywords: Vec<(String, u32)>,
    /// Latest inputs with their 1-based position in the history.
    pub recent: Vec<(usize, String)>,
}

impl ChatStats {
    pub fn collect(history: &ConversationHistory, frequency: &KeywordFrequency) -> Self {
        let start = history.len().saturating_sub(RECENT_MESSAGES);
        let recent = history
            .iter()
            .enumerate()
            .skip(start)
            .map(|(i, text)| (i + 1, text.to_string()))
            .collect();

        Self {
            total_messages: history.len(),
            unique_keywords: frequency.len(),
            top_keywords: frequency.top(TOP_KEYWORDS),
            recent,
        }
    }
}

impl std::fmt::Display for ChatStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== CHAT STATISTICS ===")?;
        writeln!(f)?;
        writeln!(f, "Total Messages: {}", self.total_messages)?;
        writeln!(f, "Unique Keywords: {}", self.unique_keywords)?;
        writeln!(f)?;
        writeln!(f, "=== TOP KEYWORDS ===")?;
        for (keyword, count) in &self.top_keywords {
            writeln!(f, "{keyword}: {count}")?;
        }
        writeln!(f)?;
        writeln!(f, "=== RECENT CONVERSATION ===")?;
        for (pos, text) in &self.recent {
            writeln!(f, "{pos}. {text}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_keeps_last_five_with_positions() {
        let mut history = ConversationHistory::new();
        for i in 1..=7 {
            history.push(format!("m{i}"));
        }
        let stats = ChatStats::collect(&history, &KeywordFrequency::new());
        assert_eq!(stats.total_messages, 7);
        assert_eq!(stats.recent.first(), Some(&(3, "m3".to_string())));
        assert_eq!(stats.recent.last(), Some(&(7, "m7".to_string())));
        assert_eq!(stats.recent.len(), RECENT_MESSAGES);
    }

    #[test]
    fn report_sections() {
        let mut history = ConversationHistory::new();
        history.push("python rocks");
        let mut frequency = KeywordFrequency::new();
        frequency.record(&["python", "rocks"]);

        let text = ChatStats::collect(&history, &frequency).to_string();
        assert!(text.contains("Total Messages: 1"));
        assert!(text.contains("Unique Keywords: 2"));
        assert!(text.contains("=== TOP KEYWORDS ===\npython: 1\nrocks: 1\n"));
        assert!(text.contains("1. python rocks"));
    }

    #[test]
    fn serializes_to_json() {
        let stats = ChatStats::collect(&ConversationHistory::new(), &KeywordFrequency::new());
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["total_messages"], 0);
        assert!(json["top_keywords"].as_array().unwrap().is_empty());
    }
}
