//! In-memory quiz state shared between tasks.
//!
//! Holds the full question pool, the questions picked for the active
//! session and the level of that selection. All mutation goes through the
//! setters below; every mutation bumps a revision published on a watch
//! channel so views can re-render.

use std::collections::BTreeSet;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;
use tokio::sync::watch;

use crate::store::question::{questions_from_value, Level, Question};

/// Plain snapshot of the store fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuizState {
    /// Full question pool, in the order received.
    pub quiz_data: Vec<Question>,
    /// Questions of the active session, if any.
    pub selected_quiz: Option<Vec<Question>>,
    /// Level of the first selected question.
    pub current_level: Option<Level>,
}

impl QuizState {
    fn questions_by_level(&self, level: &Level) -> Vec<Question> {
        self.quiz_data
            .iter()
            .filter(|q| q.is_level(level))
            .cloned()
            .collect()
    }
}

/// Thread-safe quiz store handle.
///
/// Clones share the same state.
#[derive(Clone)]
pub struct QuizStore {
    inner: Arc<RwLock<QuizState>>,
    revision: Arc<watch::Sender<u64>>,
}

impl QuizStore {
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            inner: Arc::new(RwLock::new(QuizState::default())),
            revision: Arc::new(revision),
        }
    }

    // -- Views ----------------------------------------------------------------

    /// Questions whose level equals `level`, in pool order.
    pub fn get_questions_by_level(&self, level: &Level) -> Vec<Question> {
        self.inner.read().questions_by_level(level)
    }

    pub fn get_question_count_by_level(&self, level: &Level) -> usize {
        self.inner
            .read()
            .quiz_data
            .iter()
            .filter(|q| q.is_level(level))
            .count()
    }

    /// Distinct levels present in the pool, ascending.
    ///
    /// Questions without a level are ignored.
    pub fn available_levels(&self) -> Vec<Level> {
        let state = self.inner.read();
        let levels: BTreeSet<&Level> = state
            .quiz_data
            .iter()
            .filter_map(Question::level)
            .collect();
        levels.into_iter().cloned().collect()
    }

    pub fn quiz_data(&self) -> Vec<Question> {
        self.inner.read().quiz_data.clone()
    }

    pub fn selected_quiz(&self) -> Option<Vec<Question>> {
        self.inner.read().selected_quiz.clone()
    }

    pub fn current_level(&self) -> Option<Level> {
        self.inner.read().current_level.clone()
    }

    /// Consistent copy of all three fields.
    pub fn snapshot(&self) -> QuizState {
        self.inner.read().clone()
    }

    /// Same result as [`get_questions_by_level`](Self::get_questions_by_level),
    /// with a trace of the match count. Does not touch the state.
    pub fn get_quiz_by_level(&self, level: &Level) -> Vec<Question> {
        let questions = self.inner.read().questions_by_level(level);
        tracing::info!(quiz_level = %level, count = questions.len(), "Found questions for level");
        questions
    }

    // -- Mutations ------------------------------------------------------------

    /// Replaces the question pool.
    pub fn set_quiz_data(&self, data: Vec<Question>) {
        let count = data.len();
        self.inner.write().quiz_data = data;
        tracing::debug!(questions = count, "Quiz data set in store");
        self.bump();
    }

    /// Replaces the question pool from raw JSON. Anything but an array
    /// empties the pool.
    pub fn set_quiz_data_value(&self, data: Value) {
        self.set_quiz_data(questions_from_value(data).unwrap_or_default());
    }

    /// Replaces the selection and derives the current level from its first
    /// question.
    pub fn set_selected_quiz(&self, quiz: Vec<Question>) {
        self.replace_selection(Some(quiz));
    }

    /// Replaces the selection from raw JSON. A non-array leaves no selection
    /// and no current level.
    pub fn set_selected_quiz_value(&self, quiz: Value) {
        self.replace_selection(questions_from_value(quiz));
    }

    pub fn clear_selected_quiz(&self) {
        {
            let mut state = self.inner.write();
            state.selected_quiz = None;
            state.current_level = None;
        }
        self.bump();
    }

    /// Resets every field to its initial value.
    pub fn clear_all_data(&self) {
        *self.inner.write() = QuizState::default();
        self.bump();
    }

    // -- Change notification --------------------------------------------------

    /// Receiver notified after every mutation. The value is a revision
    /// counter; read the store for the data itself.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    fn replace_selection(&self, quiz: Option<Vec<Question>>) {
        let (count, level) = {
            let mut state = self.inner.write();
            state.current_level = quiz
                .as_ref()
                .and_then(|qs| qs.first())
                .and_then(|q| q.level().cloned());
            state.selected_quiz = quiz;
            (
                state.selected_quiz.as_ref().map_or(0, Vec::len),
                state.current_level.clone(),
            )
        };

        tracing::debug!(
            questions = count,
            quiz_level = ?level,
            "Selected quiz set"
        );
        self.bump();
    }

    fn bump(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }
}

impl Default for QuizStore {
    fn default() -> Self {
        Self::new()
    }
}
