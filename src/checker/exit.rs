use std::process::ExitCode;

use anyhow::Error;

/// Exit status for missing routes when strict mode is on.
pub const STRICT_FAILURE_CODE: u8 = 2;

/// Result of a check run that determines the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// Every required route was found, or none were required.
    Complete,
    /// Some routes are missing; only fatal when `strict` is set.
    MissingRoutes { missing: usize, strict: bool },
    /// Marker or routes file precondition failed.
    PreconditionFailed,
}

impl CheckStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Complete => "complete",
            CheckStatus::MissingRoutes { .. } => "missing_routes",
            CheckStatus::PreconditionFailed => "precondition_failed",
        }
    }

    /// Numeric process status: 0 done, 1 precondition failure, 2 strict miss.
    pub const fn code(&self) -> u8 {
        match self {
            CheckStatus::Complete => 0,
            CheckStatus::MissingRoutes { strict: false, .. } => 0,
            CheckStatus::MissingRoutes { strict: true, .. } => STRICT_FAILURE_CODE,
            CheckStatus::PreconditionFailed => 1,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

/// Bundles an unexpected error message with an exit code.
#[derive(Debug)]
pub struct CheckExit {
    message: String,
    exit_code: ExitCode,
}

impl CheckExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:#}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("❌ Error: {}", self.message);
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
