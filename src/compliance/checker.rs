//! Applies a rule to every candidate of a round and aggregates failures

use crate::domain::{Candidate, CandidateStatus};

use super::rule::{ComplianceRule, ForbiddenToken};

/// Leading text of the aggregated failure message
pub const COMPLIANCE_ERROR_PREFIX: &str = "以下名称包含敏感词或已被注册：";

/// Names that failed in one check, in candidate order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplianceReport {
    pub failed: Vec<String>,
}

impl ComplianceReport {
    pub fn all_passed(&self) -> bool {
        self.failed.is_empty()
    }

    /// Empty when nothing failed, otherwise the prefix and the comma-joined names
    pub fn error_message(&self) -> String {
        if self.failed.is_empty() {
            String::new()
        } else {
            format!("{}{}", COMPLIANCE_ERROR_PREFIX, self.failed.join(", "))
        }
    }
}

/// Screens candidates in place
pub struct ComplianceChecker {
    rule: Box<dyn ComplianceRule>,
}

impl Default for ComplianceChecker {
    fn default() -> Self {
        Self::new(ForbiddenToken::default())
    }
}

impl std::fmt::Debug for ComplianceChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComplianceChecker")
            .field("rule", &self.rule.description())
            .finish()
    }
}

impl ComplianceChecker {
    pub fn new(rule: impl ComplianceRule + 'static) -> Self {
        Self {
            rule: Box::new(rule),
        }
    }

    /// Checker using the forbidden-token rule
    pub fn with_forbidden_token(token: impl Into<String>) -> Self {
        Self::new(ForbiddenToken::new(token))
    }

    /// Set every candidate's status to pass or fail and report the failures
    pub fn screen(&self, candidates: &mut [Candidate]) -> ComplianceReport {
        let mut report = ComplianceReport::default();
        for cand in candidates.iter_mut() {
            if self.rule.violates(&cand.name) {
                cand.status = CandidateStatus::Fail;
                report.failed.push(cand.name.clone());
            } else {
                cand.status = CandidateStatus::Pass;
            }
        }
        report
    }

    /// Screen candidates and return the aggregated error message
    pub fn check(&self, candidates: &mut [Candidate]) -> String {
        let report = self.screen(candidates);
        if !report.all_passed() {
            log::debug!(
                "{} of {} candidates failed {}",
                report.failed.len(),
                candidates.len(),
                self.rule.description()
            );
        }
        report.error_message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch() -> Vec<Candidate> {
        vec![Candidate::new("阿里创新", "x"), Candidate::new("星辰科技", "y")]
    }

    #[test]
    fn test_check_marks_fail_and_pass() {
        let checker = ComplianceChecker::default();
        let mut candidates = batch();

        let message = checker.check(&mut candidates);

        assert_eq!(candidates[0].status, CandidateStatus::Fail);
        assert_eq!(candidates[1].status, CandidateStatus::Pass);
        assert_eq!(message, "以下名称包含敏感词或已被注册：阿里创新");
    }

    #[test]
    fn test_check_all_pass_gives_empty_message() {
        let checker = ComplianceChecker::default();
        let mut candidates = vec![Candidate::new("星辰科技", ""), Candidate::new("智行", "")];
        assert_eq!(checker.check(&mut candidates), "");
        assert!(candidates.iter().all(Candidate::passed));
    }

    #[test]
    fn test_check_joins_failures_in_order() {
        let checker = ComplianceChecker::default();
        let mut candidates = vec![
            Candidate::new("阿里云帆", ""),
            Candidate::new("星辰", ""),
            Candidate::new("小阿里", ""),
        ];
        let message = checker.check(&mut candidates);
        assert_eq!(message, "以下名称包含敏感词或已被注册：阿里云帆, 小阿里");
    }

    #[test]
    fn test_check_is_idempotent() {
        let checker = ComplianceChecker::default();
        let mut candidates = batch();
        let first_message = checker.check(&mut candidates);
        let first = candidates.clone();

        let second_message = checker.check(&mut candidates);

        assert_eq!(candidates, first);
        assert_eq!(first_message, second_message);
    }

    #[test]
    fn test_check_empty_batch() {
        let checker = ComplianceChecker::default();
        let mut candidates: Vec<Candidate> = vec![];
        assert_eq!(checker.check(&mut candidates), "");
    }

    #[test]
    fn test_check_leaves_no_unknown() {
        let checker = ComplianceChecker::with_forbidden_token("Acme");
        let mut candidates = vec![Candidate::new("AcmeX", ""), Candidate::new("Zed", "")];
        checker.check(&mut candidates);
        assert!(candidates.iter().all(|c| c.status.is_checked()));
    }

    #[test]
    fn test_screen_report() {
        let checker = ComplianceChecker::default();
        let mut candidates = batch();
        let report = checker.screen(&mut candidates);
        assert!(!report.all_passed());
        assert_eq!(report.failed, vec!["阿里创新".to_string()]);
    }
}
