//! ICMP echo probe via the system ping utility.

use std::time::Duration;

use anyhow::{Context, Result};
use tokio::process::Command;

/// Outcome of a single echo probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EchoReply {
    /// Round-trip time in milliseconds.
    Latency(f64),
    /// No reply within the timeout.
    Timeout,
}

/// Send one echo request to `address`, waiting at most `timeout`.
///
/// Runs `ping -c 1` and parses the `time=` field of the reply line.
/// An overrun of the timeout, a non-zero exit, or a reply without a
/// parseable latency all count as [`EchoReply::Timeout`]; only a
/// failure to run the ping process at all is escalated as an error.
pub async fn probe(address: &str, timeout: Duration) -> Result<EchoReply> {
    let mut command = Command::new("ping");
    command.arg("-c").arg("1").arg(address).kill_on_drop(true);

    let output = match tokio::time::timeout(timeout, command.output()).await {
        Ok(result) => {
            result.with_context(|| format!("failed to run ping for {address}"))?
        }
        // The probe overran its budget; kill_on_drop reaps the child.
        Err(_) => return Ok(EchoReply::Timeout),
    };

    if !output.status.success() {
        return Ok(EchoReply::Timeout);
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(parse_latency(&stdout).map_or(EchoReply::Timeout, EchoReply::Latency))
}

/// Extract the round-trip time from a reply line like
/// `64 bytes from 8.8.8.8: icmp_seq=1 ttl=117 time=12.3 ms`.
fn parse_latency(stdout: &str) -> Option<f64> {
    let start = stdout.find("time=")? + "time=".len();
    let rest = &stdout[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(rest.len());
    rest[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_linux_reply() {
        let stdout = "PING 8.8.8.8 (8.8.8.8) 56(84) bytes of data.\n\
                      64 bytes from 8.8.8.8: icmp_seq=1 ttl=117 time=11.9 ms\n\
                      \n\
                      --- 8.8.8.8 ping statistics ---\n\
                      1 packets transmitted, 1 received, 0% packet loss, time 0ms\n\
                      rtt min/avg/max/mdev = 11.911/11.911/11.911/0.000 ms\n";
        assert_eq!(parse_latency(stdout), Some(11.9));
    }

    #[test]
    fn parses_bsd_reply() {
        let stdout = "PING 8.8.8.8 (8.8.8.8): 56 data bytes\n\
                      64 bytes from 8.8.8.8: icmp_seq=0 ttl=117 time=23.456 ms\n\
                      \n\
                      --- 8.8.8.8 ping statistics ---\n\
                      1 packets transmitted, 1 packets received, 0.0% packet loss\n\
                      round-trip min/avg/max/stddev = 23.456/23.456/23.456/0.000 ms\n";
        assert_eq!(parse_latency(stdout), Some(23.456));
    }

    #[test]
    fn reply_without_latency_field_is_none() {
        let stdout = "PING 8.8.8.8 (8.8.8.8) 56(84) bytes of data.\n\
                      1 packets transmitted, 0 received, 100% packet loss, time 0ms\n";
        assert_eq!(parse_latency(stdout), None);
    }

    #[test]
    fn garbage_after_marker_is_none() {
        assert_eq!(parse_latency("time=abc ms"), None);
    }

    #[test]
    fn probe_of_invalid_address_is_timeout() {
        let reply = tokio_test::block_on(probe(
            "pingwatch.invalid.example",
            Duration::from_secs(2),
        ));
        // Name resolution failure makes ping exit non-zero; on hosts
        // without a ping binary the spawn error is escalated instead,
        // so only assert the success shape when the call returned Ok.
        if let Ok(reply) = reply {
            assert_eq!(reply, EchoReply::Timeout);
        }
    }
}
