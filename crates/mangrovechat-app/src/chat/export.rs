//! Plain-text export formatting for the chat history.

use chrono::{DateTime, Local};

use mangrovechat_models::ConversationRecord;

/// Render the full history as a downloadable plain-text document: fixed
/// header, one block per record in insertion order, separators between.
pub fn render_export(records: &[ConversationRecord], generated_at: DateTime<Local>) -> String {
    let mut content = String::from("🌿 Chatter Box - Mangrove Forest Chat History\n");
    content.push_str(&format!(
        "Generated: {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    content.push_str(&"=".repeat(60));
    content.push_str("\n\n");

    for (i, record) in records.iter().enumerate() {
        content.push_str(&format!("Question {}: {}\n", i + 1, record.question));
        content.push_str(&format!("Timestamp: {}\n", record.timestamp));
        content.push_str(&format!("Answer:\n{}\n", record.answer));
        content.push_str(&"-".repeat(60));
        content.push_str("\n\n");
    }

    content
}

/// File name for the exported document, stamped with the generation time.
pub fn export_filename(generated_at: DateTime<Local>) -> String {
    format!("mangrove_chat_{}.txt", generated_at.format("%Y%m%d_%H%M%S"))
}
