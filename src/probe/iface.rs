//! Local interface liveness check.

use tokio::process::Command;

/// Marker ifconfig prints for an interface with an active link.
const ACTIVE_MARKER: &str = "status: active";

/// Check whether the named interface currently has an active link.
///
/// Shells out to `ifconfig <name>` and looks for the active-status
/// marker. Fails closed: an execution error, a non-zero exit, empty
/// output, or a missing marker all report the interface as inactive.
pub async fn is_active(name: &str) -> bool {
    let output = match Command::new("ifconfig").arg(name).output().await {
        Ok(output) => output,
        Err(_) => return false,
    };

    if !output.status.success() || output.stdout.is_empty() {
        return false;
    }

    String::from_utf8_lossy(&output.stdout).contains(ACTIVE_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonexistent_interface_is_inactive() {
        // ifconfig exits non-zero for an unknown interface; if the
        // binary itself is missing the check fails closed the same way.
        let active = tokio_test::block_on(is_active("pingwatch-missing0"));
        assert!(!active);
    }
}
