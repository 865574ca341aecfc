//! Failure classification
//!
//! DISM reports errors only as free text plus an exit code, so failures are
//! mapped to actionable guidance by substring-matching known hexadecimal
//! status codes. The table is ordered and the first match wins; anything
//! unmatched degrades to the unknown bucket with the raw diagnostic kept
//! verbatim rather than stopping the batch.

use crate::servicer::ServicingOutput;

/// Exit code DISM returns for a package that is already present.
pub const ALREADY_INSTALLED_EXIT_CODE: i32 = 50;

/// Classified failure of one installation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// 0x800f081e: package does not apply to this system
    NotApplicable,
    /// 0x800f0922: servicing stack or component store problem
    ComponentIssue,
    /// 0x80070002: the package file could not be found
    FileNotFound,
    /// 0x80073701: some components could not be installed
    ComponentsMissing,
    /// Exit code 50: the package is already installed
    AlreadyInstalled,
    /// Anything else; the raw diagnostic text is retained
    Unknown { diagnostic: String },
}

/// Ordered signature table; checked before the exit-code rule.
const SIGNATURES: [(&str, FailureKind); 4] = [
    ("0x800f081e", FailureKind::NotApplicable),
    ("0x800f0922", FailureKind::ComponentIssue),
    ("0x80070002", FailureKind::FileNotFound),
    ("0x80073701", FailureKind::ComponentsMissing),
];

impl FailureKind {
    /// Fixed bilingual message shown on the console and written to the run
    /// log.
    pub fn message(&self) -> String {
        match self {
            FailureKind::NotApplicable => {
                "错误: 此补丁不适用于当前系统 | Error: This patch is not applicable to the current system.".to_string()
            }
            FailureKind::ComponentIssue => {
                "错误: 补丁无法安装，可能是系统组件问题 | Error: Patch could not be installed, possible system component issue.".to_string()
            }
            FailureKind::FileNotFound => {
                "错误: 找不到指定文件 | Error: The specified file was not found.".to_string()
            }
            FailureKind::ComponentsMissing => {
                "错误: 某些组件无法安装 | Error: Some components could not be installed.".to_string()
            }
            FailureKind::AlreadyInstalled => {
                "错误: 补丁已安装 | Error: The patch is already installed.".to_string()
            }
            FailureKind::Unknown { diagnostic } => {
                format!("未知错误 | Unknown error: {}", diagnostic)
            }
        }
    }
}

/// Classify one servicing result. `None` means the package installed.
///
/// Pure function over the raw output: deterministic, order-sensitive per
/// the signature table, and testable without spawning a process.
pub fn classify(output: &ServicingOutput) -> Option<FailureKind> {
    if output.success() {
        return None;
    }

    for (signature, kind) in &SIGNATURES {
        if output.diagnostic.contains(signature) {
            return Some(kind.clone());
        }
    }

    if output.exit_code == ALREADY_INSTALLED_EXIT_CODE {
        return Some(FailureKind::AlreadyInstalled);
    }

    Some(FailureKind::Unknown {
        diagnostic: output.diagnostic.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(exit_code: i32, diagnostic: &str) -> ServicingOutput {
        ServicingOutput {
            exit_code,
            diagnostic: diagnostic.to_string(),
        }
    }

    #[test]
    fn test_exit_zero_is_installed() {
        assert_eq!(classify(&failed(0, "ignored text")), None);
    }

    #[test]
    fn test_known_signatures() {
        assert_eq!(
            classify(&failed(1, "Error: 0x800f081e")),
            Some(FailureKind::NotApplicable)
        );
        assert_eq!(
            classify(&failed(1, "Error: 0x800f0922")),
            Some(FailureKind::ComponentIssue)
        );
        assert_eq!(
            classify(&failed(1, "Error: 0x80070002")),
            Some(FailureKind::FileNotFound)
        );
        assert_eq!(
            classify(&failed(1, "Error: 0x80073701")),
            Some(FailureKind::ComponentsMissing)
        );
    }

    #[test]
    fn test_first_match_wins() {
        // Both signatures present; table order decides.
        let output = failed(1, "Error: 0x800f081e and also 0x80070002");
        assert_eq!(classify(&output), Some(FailureKind::NotApplicable));
    }

    #[test]
    fn test_signature_beats_already_installed_exit_code() {
        let output = failed(ALREADY_INSTALLED_EXIT_CODE, "Error: 0x80070002");
        assert_eq!(classify(&output), Some(FailureKind::FileNotFound));
    }

    #[test]
    fn test_already_installed_exit_code() {
        let output = failed(ALREADY_INSTALLED_EXIT_CODE, "package present");
        assert_eq!(classify(&output), Some(FailureKind::AlreadyInstalled));
    }

    #[test]
    fn test_unknown_retains_diagnostic_verbatim() {
        let output = failed(1, "Error: 0xdeadbeef something odd");
        match classify(&output) {
            Some(FailureKind::Unknown { diagnostic }) => {
                assert_eq!(diagnostic, "Error: 0xdeadbeef something odd");
            }
            other => panic!("Expected Unknown, got {:?}", other),
        }
    }

    #[test]
    fn test_messages_are_bilingual() {
        for kind in [
            FailureKind::NotApplicable,
            FailureKind::ComponentIssue,
            FailureKind::FileNotFound,
            FailureKind::ComponentsMissing,
            FailureKind::AlreadyInstalled,
        ] {
            let message = kind.message();
            assert!(message.contains(" | Error: "), "message: {}", message);
        }
    }
}
