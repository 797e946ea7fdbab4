//! Events produced by the stream relay
//!
//! On the wire each event is one frame: `data: <json>\n\n`, where the JSON
//! object carries a `type` of `reasoning`, `result` or `error`.

use serde::{Deserialize, Serialize};

use super::report::ReportedCandidate;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    /// Live model text, reasoning or answer alike
    Reasoning {
        #[serde(rename = "content")]
        text: String,
    },
    /// Terminal: screened candidates of the single attempt
    Result {
        candidates: Vec<ReportedCandidate>,
        #[serde(rename = "error_msg")]
        error_message: String,
    },
    /// Terminal: the attempt failed somewhere upstream
    Error { message: String },
}

impl StreamEvent {
    pub fn reasoning(text: impl Into<String>) -> Self {
        StreamEvent::Reasoning { text: text.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        StreamEvent::Error {
            message: message.into(),
        }
    }

    /// Result and Error end the sequence
    pub fn is_terminal(&self) -> bool {
        !matches!(self, StreamEvent::Reasoning { .. })
    }

    /// Encode as one `data:` frame
    pub fn to_frame(&self) -> Result<String> {
        Ok(format!("data: {}\n\n", serde_json::to_string(self)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CandidateStatus;

    #[test]
    fn test_reasoning_frame() {
        let frame = StreamEvent::reasoning("思考A").to_frame().unwrap();
        assert_eq!(frame, "data: {\"type\":\"reasoning\",\"content\":\"思考A\"}\n\n");
    }

    #[test]
    fn test_error_frame() {
        let frame = StreamEvent::error("boom").to_frame().unwrap();
        assert_eq!(frame, "data: {\"type\":\"error\",\"message\":\"boom\"}\n\n");
    }

    #[test]
    fn test_result_frame_fields() {
        let event = StreamEvent::Result {
            candidates: vec![ReportedCandidate {
                name: "X".to_string(),
                reason: "r".to_string(),
                status: CandidateStatus::Pass,
                query_url: "https://example.test".to_string(),
            }],
            error_message: String::new(),
        };
        let frame = event.to_frame().unwrap();
        assert!(frame.starts_with("data: "));
        assert!(frame.ends_with("\n\n"));

        let json = frame.trim_start_matches("data: ").trim_end();
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(value["type"], "result");
        assert_eq!(value["error_msg"], "");
        assert_eq!(value["candidates"][0]["name"], "X");
        assert_eq!(value["candidates"][0]["status"], "pass");
        assert_eq!(value["candidates"][0]["query_url"], "https://example.test");
    }

    #[test]
    fn test_frame_escapes_newlines() {
        let frame = StreamEvent::reasoning("a\nb").to_frame().unwrap();
        assert_eq!(frame.matches('\n').count(), 2);
    }

    #[test]
    fn test_is_terminal() {
        assert!(!StreamEvent::reasoning("x").is_terminal());
        assert!(StreamEvent::error("x").is_terminal());
        assert!(
            StreamEvent::Result {
                candidates: vec![],
                error_message: String::new()
            }
            .is_terminal()
        );
    }
}
