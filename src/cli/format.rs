//! Format output dispatch helpers

/// Dispatch output by format.
///
/// ```rust,ignore
/// output_by_format!(cli.format,
///     json => { print_json(&value)?; },
///     human => { println!("{}", line); }
/// );
/// ```
#[macro_export]
macro_rules! output_by_format {
    ($format:expr, json => $json:block, human => $human:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => $human,
        }
    };
}
