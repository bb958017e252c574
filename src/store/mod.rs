//! Quiz state management.

mod question;
mod state;

pub use question::{questions_from_value, Level, Question};
pub use state::{QuizState, QuizStore};
