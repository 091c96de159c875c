//! Output formatting utilities.

use colored::Colorize;
use kc_protocol_wsfed::{RequestSecurityToken, ResponseToken, Uri, WsTrustPayload};

use crate::config::OutputFormat;

/// Prints a success message.
pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Prints an error message.
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Prints a warning message.
pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message);
}

/// Prints an info message.
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Outputs a parsed payload in the specified format.
pub fn output_payload(payload: &WsTrustPayload, format: OutputFormat) -> crate::CliResult<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(payload)?;
            println!("{json}");
        }
        OutputFormat::Summary => {
            let lines = summary_lines(payload);
            if lines.is_empty() {
                info(&format!("{}: no members", payload.root_name()));
            }
            for line in lines {
                println!("{line}");
            }
        }
    }
    Ok(())
}

/// Renders one summary line per request or response in the payload.
#[must_use]
pub fn summary_lines(payload: &WsTrustPayload) -> Vec<String> {
    match payload {
        WsTrustPayload::Response(response) => vec![response_summary(response)],
        WsTrustPayload::ResponseCollection(collection) => {
            collection.iter().map(response_summary).collect()
        }
        WsTrustPayload::Request(request) => vec![request_summary(request)],
        WsTrustPayload::RequestCollection(requests) => {
            requests.iter().map(request_summary).collect()
        }
    }
}

/// Renders a response as a single line.
#[must_use]
pub fn response_summary(response: &ResponseToken) -> String {
    let mut line = format!("RSTR context={}", display_context(&response.context));
    push_uri(&mut line, "token_type", response.token_type.as_ref());
    push_uri(&mut line, "request_type", response.request_type.as_ref());
    if let Some(applies_to) = &response.applies_to {
        line.push_str(&format!(" applies_to={}", applies_to.value()));
    }
    if let Some(lifetime) = &response.lifetime {
        line.push_str(&format!(" expires={}", lifetime.expires.as_str()));
    }
    if let Some(status) = &response.status {
        line.push_str(&format!(" status={}", status.code));
    }
    if response.requested_token_cancelled {
        line.push_str(" cancelled");
    }
    line
}

/// Renders a request as a single line.
#[must_use]
pub fn request_summary(request: &RequestSecurityToken) -> String {
    let mut line = format!("RST context={}", display_context(&request.context));
    push_uri(&mut line, "request_type", request.request_type.as_ref());
    push_uri(&mut line, "token_type", request.token_type.as_ref());
    if let Some(applies_to) = &request.applies_to {
        line.push_str(&format!(" applies_to={}", applies_to.value()));
    }
    if let Some(key_size) = request.key_size {
        line.push_str(&format!(" key_size={key_size}"));
    }
    line
}

fn push_uri(line: &mut String, label: &str, uri: Option<&Uri>) {
    if let Some(uri) = uri {
        line.push_str(&format!(" {label}={}", uri.as_str()));
    }
}

fn display_context(context: &str) -> &str {
    if context.is_empty() {
        "-"
    } else {
        context
    }
}
