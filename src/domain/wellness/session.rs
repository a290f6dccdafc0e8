//! Per-user session aggregate.

use super::{EmotionRecord, JournalRecord, SuggestionRecord};
use crate::domain::foundation::{Timestamp, UserId};

/// Everything remembered about one user for the lifetime of the process.
///
/// The three sequences only grow: records can be appended and read, never
/// replaced or removed.
#[derive(Debug, Clone)]
pub struct UserSession {
    user_id: UserId,
    emotions: Vec<EmotionRecord>,
    suggestions: Vec<SuggestionRecord>,
    journal_entries: Vec<JournalRecord>,
}

impl UserSession {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            emotions: Vec::new(),
            suggestions: Vec::new(),
            journal_entries: Vec::new(),
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn emotions(&self) -> &[EmotionRecord] {
        &self.emotions
    }

    pub fn suggestions(&self) -> &[SuggestionRecord] {
        &self.suggestions
    }

    pub fn journal_entries(&self) -> &[JournalRecord] {
        &self.journal_entries
    }

    pub fn append_emotion(&mut self, record: EmotionRecord) {
        self.emotions.push(record);
    }

    pub fn append_suggestion(&mut self, record: SuggestionRecord) {
        self.suggestions.push(record);
    }

    /// Appends a journal entry and returns the new number of entries.
    pub fn append_journal(&mut self, record: JournalRecord) -> usize {
        self.journal_entries.push(record);
        self.journal_entries.len()
    }

    /// Emotions logged at or after `since`, oldest first.
    pub fn emotions_since(&self, since: &Timestamp) -> Vec<EmotionRecord> {
        self.emotions
            .iter()
            .filter(|e| !e.timestamp().is_before(since))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::wellness::{Emotion, Intensity};

    fn record_at(ts: Timestamp, emotion: Emotion) -> EmotionRecord {
        EmotionRecord::at(ts, emotion, Intensity::new(4).unwrap(), "note", vec![])
    }

    #[test]
    fn appends_preserve_insertion_order() {
        let mut session = UserSession::new(UserId::new("u1").unwrap());
        session.append_emotion(record_at(Timestamp::now(), Emotion::Sad));
        session.append_emotion(record_at(Timestamp::now(), Emotion::Happy));

        let names: Vec<_> = session.emotions().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec![Emotion::Sad, Emotion::Happy]);
    }

    #[test]
    fn append_journal_returns_running_count() {
        let mut session = UserSession::new(UserId::new("u1").unwrap());
        let mood = Intensity::MIDPOINT;

        assert_eq!(session.append_journal(JournalRecord::new("a", mood, mood, "x")), 1);
        assert_eq!(session.append_journal(JournalRecord::new("b", mood, mood, "y")), 2);
    }

    #[test]
    fn emotions_since_filters_old_records() {
        let mut session = UserSession::new(UserId::new("u1").unwrap());
        let now = Timestamp::now();
        session.append_emotion(record_at(now.minus_days(10), Emotion::Angry));
        session.append_emotion(record_at(now.minus_days(1), Emotion::Calm));

        let recent = session.emotions_since(&now.minus_days(7));
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].name(), Emotion::Calm);
    }
}
