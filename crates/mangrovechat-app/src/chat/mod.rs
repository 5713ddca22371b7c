// Chat domain logic: topic filtering, prompt templates, suggestion
// parsing, history persistence, and export formatting.
pub mod export;
pub mod guard;
pub mod history;
pub mod prompts;
pub mod suggestions;

pub use export::{export_filename, render_export};
pub use guard::{is_on_topic, REFUSAL_MESSAGE};
pub use history::HistoryStore;
pub use prompts::{answer_prompt, suggestion_prompt};
pub use suggestions::parse_suggestions;
