//! Conversation transcript formatting.
//!
//! Genie takes the conversation as a single block of text. Each turn becomes
//! a `role: content` line and lines are joined with `\n`.

use genie_types::chat::ChatTurnLike;

/// Render chat turns as a newline-joined transcript.
///
/// Accepts any mix of shapes implementing [`ChatTurnLike`] (typed turns,
/// JSON objects, string maps). Missing content renders as an empty string,
/// roles are used verbatim, and an empty sequence yields `""`. There is no
/// trailing newline.
pub fn concat_messages<I>(messages: I) -> String
where
    I: IntoIterator,
    I::Item: ChatTurnLike,
{
    messages
        .into_iter()
        .map(|m| format!("{}: {}", m.role(), m.content().unwrap_or_default()))
        .collect::<Vec<_>>()
        .join("\n")
}
