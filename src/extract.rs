//! Candidate extraction from raw model output
//!
//! Models wrap the requested JSON list in markdown fences, surround it with
//! prose, or ignore the format entirely. Extraction is best-effort with a
//! fixed fallback and never fails:
//! 1. a ```json fenced `[...]` block, if present
//! 2. otherwise the first bare `[ { ... } ]` shaped substring
//! 3. otherwise (or if parsing fails) one candidate per non-blank line

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::domain::Candidate;

static FENCED_ARRAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:json)?\s*(\[.*?\])\s*```").expect("fenced array pattern is valid")
});

static BARE_ARRAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\[\s*\{.*?\}\s*\]").expect("bare array pattern is valid")
});

/// Shape the model is asked to produce
#[derive(Debug, Deserialize)]
struct RawCandidate {
    name: String,
    #[serde(default)]
    reason: Option<String>,
}

/// Parse raw model text into unscreened candidates
pub fn extract_candidates(raw: &str) -> Vec<Candidate> {
    let text = raw.trim();

    if let Some(source) = locate_json_array(text)
        && let Some(candidates) = parse_json_array(source)
    {
        return candidates;
    }

    log::debug!("No parseable JSON array in model output, splitting lines");
    split_lines(text)
}

/// Pick the JSON source: fenced block first, bare array second
fn locate_json_array(text: &str) -> Option<&str> {
    if let Some(caps) = FENCED_ARRAY.captures(text) {
        return caps.get(1).map(|m| m.as_str());
    }
    BARE_ARRAY.find(text).map(|m| m.as_str())
}

fn parse_json_array(source: &str) -> Option<Vec<Candidate>> {
    match serde_json::from_str::<Vec<RawCandidate>>(source) {
        Ok(raw) => Some(
            raw.into_iter()
                .map(|r| Candidate::new(r.name, r.reason.unwrap_or_default()))
                .collect(),
        ),
        Err(e) => {
            log::debug!("Candidate JSON did not parse: {}", e);
            None
        }
    }
}

/// Degraded mode: every non-blank line is a name
fn split_lines(text: &str) -> Vec<Candidate> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| Candidate::new(line, ""))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CandidateStatus;

    fn names(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_extract_fenced_json_with_prose() {
        let raw = "我先想一想行业特点……\n\n```json\n[{\"name\":\"星辰科技\",\"reason\":\"远大\"},{\"name\":\"智行\",\"reason\":\"智能\"}]\n```\n\n以上是建议。";
        let candidates = extract_candidates(raw);
        assert_eq!(names(&candidates), vec!["星辰科技", "智行"]);
        assert_eq!(candidates[0].reason, "远大");
        assert!(candidates.iter().all(|c| c.status == CandidateStatus::Unknown));
    }

    #[test]
    fn test_extract_untagged_fence() {
        let raw = "```\n[{\"name\":\"A\",\"reason\":\"a\"}]\n```";
        let candidates = extract_candidates(raw);
        assert_eq!(names(&candidates), vec!["A"]);
    }

    #[test]
    fn test_extract_bare_array_in_prose() {
        let raw = "Here you go: [ {\"name\": \"A\", \"reason\": \"a\"}, {\"name\": \"B\"} ] hope it helps";
        let candidates = extract_candidates(raw);
        assert_eq!(names(&candidates), vec!["A", "B"]);
        assert_eq!(candidates[1].reason, "");
    }

    #[test]
    fn test_extract_plain_json() {
        let raw = "  [{\"name\":\"A\",\"reason\":\"a\"}]  ";
        let candidates = extract_candidates(raw);
        assert_eq!(names(&candidates), vec!["A"]);
    }

    #[test]
    fn test_extract_null_reason_defaults_to_empty() {
        let raw = "[{\"name\":\"A\",\"reason\":null}]";
        let candidates = extract_candidates(raw);
        assert_eq!(candidates[0].reason, "");
    }

    #[test]
    fn test_extract_ignores_extra_fields() {
        let raw = "[{\"name\":\"A\",\"reason\":\"a\",\"score\":9}]";
        let candidates = extract_candidates(raw);
        assert_eq!(names(&candidates), vec!["A"]);
    }

    #[test]
    fn test_extract_falls_back_to_lines() {
        let raw = "1. 星辰科技\n\n   2. 智行未来  \n3. 安途\n";
        let candidates = extract_candidates(raw);
        assert_eq!(names(&candidates), vec!["1. 星辰科技", "2. 智行未来", "3. 安途"]);
        assert!(candidates.iter().all(|c| c.reason.is_empty()));
    }

    #[test]
    fn test_extract_missing_name_falls_back_to_lines() {
        let raw = "```json\n[{\"reason\":\"no name\"}]\n```";
        let candidates = extract_candidates(raw);
        assert_eq!(
            names(&candidates),
            vec!["```json", "[{\"reason\":\"no name\"}]", "```"]
        );
    }

    #[test]
    fn test_extract_broken_fenced_json_falls_back_to_lines() {
        let raw = "```json\n[{\"name\":\"A\",}]\n```";
        let candidates = extract_candidates(raw);
        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[1].name, "[{\"name\":\"A\",}]");
    }

    #[test]
    fn test_extract_empty_input() {
        assert!(extract_candidates("").is_empty());
        assert!(extract_candidates("   \n \n").is_empty());
    }

    #[test]
    fn test_extract_empty_fenced_array() {
        let candidates = extract_candidates("```json\n[]\n```");
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_fence_preferred_over_earlier_bare_array() {
        let raw = "例如 [{\"name\":\"示例\"}] 这样。\n```json\n[{\"name\":\"真名\",\"reason\":\"r\"}]\n```";
        let candidates = extract_candidates(raw);
        assert_eq!(names(&candidates), vec!["真名"]);
    }
}
