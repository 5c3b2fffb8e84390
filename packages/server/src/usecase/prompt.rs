//! Prompts sent to the LLM provider by the assistant use cases.

use crate::domain::ChatLine;

pub const ANALYZE_SYSTEM_PROMPT: &str = r#"You are a senior software engineer specialising in code review and debugging.
You will be given a list of chat messages from a collaborative debugging session and the current code being debugged.
Your job is to identify bugs, memory leaks, or logic errors and suggest actionable fixes.

CRITICAL: Your entire response must be valid JSON, no markdown fences, no extra text.
Return exactly this shape:
{
  "analysis": "One paragraph description of the main issue found.",
  "fixes": [
    { "description": "What to fix", "filePath": "path/to/file.ts", "lineNumber": 42 }
  ],
  "confidence": 94
}
confidence is an integer 0-100."#;

pub const DOCS_SYSTEM_PROMPT: &str = "You are a technical writer who creates clear, concise README.md files.
You will be given a project name, chat messages from a debugging session, and code.
Write a professional README.md that covers: project overview, the bug that was found and fixed, setup instructions, and contributors.
Return ONLY the raw markdown, no explanation, no fences around the entire output.";

/// `author: content`, one chat line per row.
pub fn chat_context(lines: &[ChatLine]) -> String {
    lines
        .iter()
        .map(|line| format!("{}: {}", line.author, line.content))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn analyze_prompt(lines: &[ChatLine], current_code: &str) -> String {
    format!(
        "Chat context:\n{}\n\nCurrent code:\n```js\n{}\n```\n\nAnalyse this code and return the JSON as specified.",
        chat_context(lines),
        current_code
    )
}

pub fn docs_prompt(project_name: &str, lines: &[ChatLine], code: &str) -> String {
    format!(
        "Project: {}\n\nDebug session chat:\n{}\n\nFinal code:\n```js\n{}\n```\n\nWrite the README.md now.",
        project_name,
        chat_context(lines),
        code
    )
}

/// Drop a leading ```` ```json ```` and a trailing ```` ``` ```` the model
/// sometimes wraps its JSON in.
pub fn strip_json_fence(raw: &str) -> &str {
    let mut text = raw.trim();
    if text
        .get(..7)
        .is_some_and(|head| head.eq_ignore_ascii_case("```json"))
    {
        text = &text[7..];
    }
    if let Some(stripped) = text.trim_end().strip_suffix("```") {
        text = stripped;
    }
    text.trim()
}
