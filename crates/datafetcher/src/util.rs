use csv::Writer;
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Client;
use std::{
    fs::{self, File},
    path::Path,
};

/// Output directory for data files
pub const DEFAULT_OUTPUT_DIR: &str = "./data/output";

lazy_static! {
    static ref NEWLINES_AND_SPACES: Regex = Regex::new(r"[\r\n]+\s*").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Fetches a page body as text
///
/// # Arguments
/// * `client` - The [`Client`] to issue the request with
/// * `url` - The URL to fetch
///
/// # Returns
/// Result containing the body text or error message
pub async fn fetch_text(client: &Client, url: &str) -> Result<String, String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| format!("Request to '{url}' failed: {e}"))?;

    if !response.status().is_success() {
        return Err(format!("Request to '{url}' returned {}", response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read body of '{url}': {e}"))
}

/// Collapses line breaks and runs of whitespace into single spaces and trims
/// the result
pub fn normalize_whitespace(text: &str) -> String {
    let collapsed = NEWLINES_AND_SPACES.replace_all(text, " ");
    WHITESPACE.replace_all(&collapsed, " ").trim().to_string()
}

/// Ensures a directory exists, creating it if necessary
///
/// # Arguments
/// * `dir_path` - Path to the directory
///
/// # Returns
/// Result indicating success or detailed error
pub fn ensure_dir(dir_path: &str) -> Result<(), String> {
    let path = Path::new(dir_path);
    if !path.exists() {
        fs::create_dir_all(path)
            .map_err(|e| format!("Failed to create directory '{dir_path}': {e}"))?;
    }

    Ok(())
}

/// Creates a CSV writer for the specified file
///
/// # Arguments
/// * `filename` - Name of the CSV file
/// * `headers` - Column headers for the CSV
///
/// # Returns
/// Result containing the CSV writer or error message
pub fn create_csv_writer(filename: &str, headers: &[&str]) -> Result<Writer<File>, String> {
    ensure_dir(DEFAULT_OUTPUT_DIR)?;

    let path = Path::new(DEFAULT_OUTPUT_DIR).join(filename);
    let file =
        File::create(path).map_err(|e| format!("Failed to create CSV file '{filename}': {e}"))?;

    let mut writer = Writer::from_writer(file);
    writer
        .write_record(headers)
        .map_err(|e| format!("Failed to write CSV headers: {e}"))?;

    Ok(writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(
            normalize_whitespace("  one\r\n   two\n\nthree   four "),
            "one two three four"
        );
        assert_eq!(normalize_whitespace(""), "");
    }
}
