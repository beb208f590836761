//! Host-specific pieces of exit status handling, picked at build time.

use std::process::ExitStatus;

use crate::runner::ExitOutcome;

/// Convert a raw exit status into the uniform outcome reported to the user.
pub fn outcome(status: ExitStatus) -> ExitOutcome {
    ExitOutcome {
        success: status.success(),
        code: status.code(),
        note: imp::termination_note(&status),
    }
}

#[cfg(unix)]
mod imp {
    use std::os::unix::process::ExitStatusExt;
    use std::process::ExitStatus;

    // No exit code on Unix means the child was killed by a signal.
    pub fn termination_note(status: &ExitStatus) -> Option<String> {
        status
            .signal()
            .map(|signal| format!("terminated by signal {signal}"))
    }
}

#[cfg(not(unix))]
mod imp {
    use std::process::ExitStatus;

    pub fn termination_note(_status: &ExitStatus) -> Option<String> {
        None
    }
}
