//! Console formatter for startup banners and configuration reports

use colored::Colorize;
use std::net::SocketAddr;
use sugar_signal_domain::{ConfigIssue, Severity};

/// Formats plain console output (the terminal form draws its own screen)
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Banner printed when the proxy starts listening
    pub fn server_banner(addr: SocketAddr, upstream: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!("\n{}\n", "Sugar Signal proxy".bold().green()));
        output.push_str(&format!("  Listening: http://{}\n", addr));
        output.push_str(&format!("  Predict:   POST http://{}/api/predict\n", addr));
        output.push_str(&format!("  Health:    GET  http://{}/health\n", addr));
        output.push_str(&format!("  Upstream:  {}\n", upstream.cyan()));
        output
    }

    /// One line per configuration issue, coloured by severity
    pub fn format_issues(issues: &[ConfigIssue]) -> String {
        issues
            .iter()
            .map(|issue| {
                let tag = match issue.severity {
                    Severity::Error => "error".red().bold(),
                    Severity::Warning => "warning".yellow().bold(),
                };
                format!("{}: {}: {}", tag, issue.field, issue.message)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Line describing a configuration file location
    pub fn format_source(label: &str, path: &std::path::Path, found: bool) -> String {
        let marker = if found {
            "[FOUND]".green().to_string()
        } else {
            "[     ]".dimmed().to_string()
        };
        format!("  {} {:<8} {}", marker, format!("{}:", label), path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_banner_lists_routes() {
        colored::control::set_override(false);
        let banner =
            ConsoleFormatter::server_banner("127.0.0.1:3000".parse().unwrap(), "http://up/predict");
        assert!(banner.contains("POST http://127.0.0.1:3000/api/predict"));
        assert!(banner.contains("GET  http://127.0.0.1:3000/health"));
        assert!(banner.contains("http://up/predict"));
    }

    #[test]
    fn test_format_issues_one_line_each() {
        colored::control::set_override(false);
        let issues = vec![
            ConfigIssue::error("server.bind", "bad address"),
            ConfigIssue::warning("form.proxy_url", "odd path"),
        ];
        let output = ConsoleFormatter::format_issues(&issues);
        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("error: server.bind: bad address"));
        assert!(output.contains("warning: form.proxy_url: odd path"));
    }

    #[test]
    fn test_format_source() {
        colored::control::set_override(false);
        let line = ConsoleFormatter::format_source(
            "Project",
            std::path::Path::new("sugar-signal.toml"),
            false,
        );
        assert!(line.contains("[     ]"));
        assert!(line.contains("Project:"));
        assert!(line.contains("sugar-signal.toml"));
    }
}
