use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// A generative-model backend.
///
/// Verification and generation are independent, sequential calls. Neither
/// panics: `verify_key` collapses every failure to `false`, and `generate`
/// converts every failure into a displayable error at its own boundary.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Issue a minimal generation request with a fixed trivial prompt.
    /// True iff the call completes with a success status.
    async fn verify_key(&self) -> bool;

    async fn generate(
        &self,
        prompt: &str,
        temperature: f32,
        top_p: f32,
    ) -> Result<GenerateResponse>;
}

/// Raw reply from the generative-model endpoint.
///
/// Every level defaults, so a reply missing any link in the
/// candidates → content → parts → text chain still deserializes; the reply
/// text is then simply empty.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ReplyPart>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReplyPart {
    #[serde(default)]
    pub text: String,
}

impl GenerateResponse {
    /// First candidate's first part's text, or "" when any link is missing.
    pub fn reply_text(&self) -> &str {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .unwrap_or("")
    }

    /// Wrap a plain text reply in the candidate structure.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate {
                content: CandidateContent {
                    parts: vec![ReplyPart { text: text.into() }],
                },
            }],
        }
    }
}

/// Offline client for `--dry-run`: always verifies, returns a canned reply.
pub struct MockModelClient;

impl Default for MockModelClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockModelClient {
    pub fn new() -> Self {
        Self
    }
}

const MOCK_REPLY: &str = r#"Here is a query for the requested validation:

```sql
SELECT COUNT(*) FROM target_table;
```

**Explanation:** Counts the rows in the target table so the total can be compared against the source system.

**Note:** This is a mock reply produced without contacting the API."#;

#[async_trait]
impl ModelClient for MockModelClient {
    async fn verify_key(&self) -> bool {
        true
    }

    async fn generate(
        &self,
        _prompt: &str,
        _temperature: f32,
        _top_p: f32,
    ) -> Result<GenerateResponse> {
        Ok(GenerateResponse::from_text(MOCK_REPLY))
    }
}
