//! Project-wide constants.

/// Default chat model when none is specified.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Default OpenAI-compatible API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Environment variable holding the service credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable overriding the model.
pub const MODEL_ENV: &str = "OPENAI_MODEL";

/// Environment variable overriding the API root.
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";

/// Suffix appended to the source file name for the output file.
pub const UPDATED_SUFFIX: &str = ".updated";

/// Permission bits for the output file on unix.
pub const OUTPUT_MODE: u32 = 0o644;

/// Format a number with comma separators (e.g. 1,234,567).
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}
