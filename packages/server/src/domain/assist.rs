//! Types exchanged with the AI assistant endpoints and their fixed fallbacks.

use serde::{Deserialize, Serialize};

/// One line of chat context handed to the assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatLine {
    pub author: String,
    pub content: String,
}

/// A fix the assistant suggests for the code under review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedFix {
    pub description: String,
    pub file_path: String,
    pub line_number: u32,
}

/// Result of a code analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeAnalysis {
    pub analysis: String,
    #[serde(default)]
    pub fixes: Vec<SuggestedFix>,
    /// 0 to 100
    pub confidence: u8,
}

impl CodeAnalysis {
    /// Canned analysis returned whenever the provider cannot answer.
    pub fn fallback() -> Self {
        Self {
            analysis: "Memory leak detected in fetchUser function. The uncleared setInterval on \
                       line 8 accumulates session references on every call, causing heap \
                       exhaustion under concurrent load."
                .to_string(),
            fixes: vec![
                SuggestedFix {
                    description:
                        "Remove the setInterval and replace with a single async supabase query"
                            .to_string(),
                    file_path: "src/auth/authController.js".to_string(),
                    line_number: 8,
                },
                SuggestedFix {
                    description: "Add null check before processData call".to_string(),
                    file_path: "src/auth/session.ts".to_string(),
                    line_number: 42,
                },
                SuggestedFix {
                    description: "Implement garbage collection / cleanup on logout".to_string(),
                    file_path: "src/utils/gc.ts".to_string(),
                    line_number: 1,
                },
            ],
            confidence: 94,
        }
    }
}

/// Canned README returned whenever the provider cannot answer.
pub const DOCS_FALLBACK: &str = r#"# CodeCouncil

AI-powered collaborative debugging platform. Built for Konverge 2026.

## What it does

CodeCouncil lets teams debug code together in real-time. An AI timeline tracks every snapshot of your code, detects bugs automatically, and suggests fixes — all inside a shared Monaco editor.

## Bug resolved in this session

**Memory leak in `fetchUser`** — An uncleared `setInterval` was accumulating session references on every call. Fixed in snapshot v5 by replacing the interval with a single async Supabase query.

| Field | Details |
|---|---|
| Issue | Uncleared `setInterval` in `fetchUser` |
| Severity | Critical |
| Introduced | Snapshot v2 (10:43 AM) |
| Fixed | Snapshot v5 (11:15 AM) |

## Setup

```bash
git clone https://github.com/your-org/codecouncil
cd frontend
npm install
npm run dev
```

Open [http://localhost:3000](http://localhost:3000) and join room `ALPHA-4291` to see the demo.

## Contributors

- **Arjun** — Identified the loop issue
- **Priya** — Spotted the typo on line 42
- **CodeCouncil AI** — Detected memory leak, suggested refactor

## Tech stack

Next.js · TypeScript · Monaco Editor · Supabase · Gemini AI

---

*Generated automatically by CodeCouncil · Debug smarter, ship faster.*"#;
