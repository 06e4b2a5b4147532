// src/exit.rs
//! Process exit codes for `fsdlint`.
//!
//! Provides a stable contract for scripts and CI.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum FsdExit {
    /// No error-severity violations.
    Success = 0,
    /// Operational error (I/O, config, query).
    Error = 1,
    /// At least one rule in error mode was violated.
    CheckFailed = 2,
}

impl FsdExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for FsdExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<anyhow::Result<FsdExit>> for FsdExit {
    fn from(res: anyhow::Result<FsdExit>) -> Self {
        match res {
            Ok(exit) => exit,
            Err(e) => {
                eprintln!("error: {e:#}");
                Self::Error
            }
        }
    }
}
