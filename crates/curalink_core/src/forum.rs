//! crates/curalink_core/src/forum.rs
//!
//! An in-memory discussion board.
//!
//! The patient board files every thread under a `ForumCategory`; the researcher
//! board keeps a flat list of topics. Both are the same `ForumStore`, the
//! difference is only whether threads carry a category. Replies are appended in
//! arrival order and never reordered or removed.

use chrono::Utc;
use uuid::Uuid;

use crate::catalog;
use crate::domain::{Entry, ForumCategory, Thread};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ForumError {
    #[error("no thread at index {index} (board has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Default)]
pub struct ForumStore {
    threads: Vec<Thread>,
}

impl ForumStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The patient board with its seed questions.
    pub fn seeded_patient_board() -> Self {
        let mut store = Self::new();
        for (category, question, entries) in catalog::patient_forum_seed() {
            store.push(question.to_string(), None, Some(category), entries);
        }
        store
    }

    /// The researcher board with its seed topics.
    pub fn seeded_researcher_board() -> Self {
        let mut store = Self::new();
        for (topic, author, entries) in catalog::researcher_forum_seed() {
            store.push(topic.to_string(), Some(author.to_string()), None, entries);
        }
        store
    }

    fn push(
        &mut self,
        title: String,
        author: Option<String>,
        category: Option<ForumCategory>,
        entries: Vec<Entry>,
    ) -> &Thread {
        self.threads.push(Thread {
            id: Uuid::new_v4(),
            title,
            author,
            category,
            posted_at: Utc::now(),
            entries,
        });
        let last = self.threads.len() - 1;
        &self.threads[last]
    }

    /// Opens a question under `category`. Blank text is ignored and yields `None`.
    pub fn post_question(&mut self, category: ForumCategory, question: &str) -> Option<&Thread> {
        if question.trim().is_empty() {
            return None;
        }
        Some(self.push(question.to_string(), None, Some(category), Vec::new()))
    }

    /// Opens an uncategorised topic. Blank text is ignored and yields `None`.
    pub fn post_topic(&mut self, topic: &str, author: Option<&str>) -> Option<&Thread> {
        if topic.trim().is_empty() {
            return None;
        }
        Some(self.push(topic.to_string(), author.map(str::to_string), None, Vec::new()))
    }

    /// Appends a reply to the thread at `index`.
    ///
    /// An out-of-range index is an error even when the text is blank; blank text
    /// on a valid thread is ignored and yields `Ok(None)`.
    pub fn add_reply(
        &mut self,
        index: usize,
        user: Option<&str>,
        text: &str,
    ) -> Result<Option<&Thread>, ForumError> {
        let len = self.threads.len();
        let thread = self
            .threads
            .get_mut(index)
            .ok_or(ForumError::IndexOutOfRange { index, len })?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        thread.entries.push(Entry {
            user: user.map(str::to_string),
            text: text.to_string(),
        });
        Ok(Some(&*thread))
    }

    /// Every thread in posting order.
    pub fn threads(&self) -> &[Thread] {
        &self.threads
    }

    /// The threads filed under `category`, in posting order.
    pub fn threads_in(&self, category: ForumCategory) -> Vec<&Thread> {
        self.threads
            .iter()
            .filter(|t| t.category == Some(category))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.threads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.threads.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_questions_are_ignored() {
        let mut board = ForumStore::seeded_patient_board();
        let before = board.threads_in(ForumCategory::CancerResearch).len();

        assert!(board.post_question(ForumCategory::CancerResearch, "").is_none());
        assert!(board.post_question(ForumCategory::CancerResearch, "   ").is_none());

        assert_eq!(board.threads_in(ForumCategory::CancerResearch).len(), before);
    }

    #[test]
    fn questions_land_in_their_category_only() {
        let mut board = ForumStore::seeded_patient_board();
        board
            .post_question(ForumCategory::ClinicalTrialsInsights, "Can I leave a trial early?")
            .unwrap();

        let insights = board.threads_in(ForumCategory::ClinicalTrialsInsights);
        assert_eq!(insights.len(), 2);
        assert_eq!(insights[1].title, "Can I leave a trial early?");
        assert!(insights[1].entries.is_empty());
        assert_eq!(board.threads_in(ForumCategory::CancerResearch).len(), 1);
    }

    #[test]
    fn reply_is_appended_after_existing_ones() {
        let mut board = ForumStore::seeded_researcher_board();
        assert_eq!(board.len(), 1);

        let thread = board.add_reply(0, None, "Interesting!").unwrap().unwrap();
        let texts: Vec<&str> = thread.entries.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(
            texts,
            ["Promising results in clinical prediction models!", "Interesting!"]
        );
    }

    #[test]
    fn reply_out_of_range_is_an_error() {
        let mut board = ForumStore::seeded_researcher_board();
        assert_eq!(
            board.add_reply(5, None, "x").unwrap_err(),
            ForumError::IndexOutOfRange { index: 5, len: 1 }
        );
        assert_eq!(
            board.add_reply(1, None, "").unwrap_err(),
            ForumError::IndexOutOfRange { index: 1, len: 1 }
        );
    }

    #[test]
    fn blank_reply_is_ignored() {
        let mut board = ForumStore::seeded_researcher_board();
        assert!(board.add_reply(0, None, "  ").unwrap().is_none());
        assert_eq!(board.threads()[0].entries.len(), 1);
    }

    #[test]
    fn topics_keep_their_author_and_no_category() {
        let mut board = ForumStore::seeded_researcher_board();
        assert!(board.post_topic("\n", Some("Dr. Who")).is_none());

        let topic = board.post_topic("CRISPR screening", Some("Dr. Kavya Mehta")).unwrap();
        assert_eq!(topic.author.as_deref(), Some("Dr. Kavya Mehta"));
        assert!(topic.category.is_none());
        assert_eq!(board.len(), 2);
    }
}
