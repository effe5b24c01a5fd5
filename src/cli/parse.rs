use wgraph_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a non-empty vertex label
pub fn parse_vertex(s: &str) -> std::result::Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        Err("vertex label must not be empty".to_string())
    } else {
        Ok(trimmed.to_string())
    }
}
