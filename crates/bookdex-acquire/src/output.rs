use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use bookdex_model::RawRecord;

/// Write one raw `;`-joined record per line.
pub fn write_records(records: &[RawRecord], path: &Path) -> Result<()> {
    let mut body = String::new();
    for record in records {
        body.push_str(&record.to_line());
        body.push('\n');
    }
    fs::write(path, &body).with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), lines = records.len(), "Wrote raw records");
    Ok(())
}

/// Save one URL per line.
pub fn save_urls(urls: &[String], path: &Path) -> Result<()> {
    let mut body = String::new();
    for url in urls {
        body.push_str(url);
        body.push('\n');
    }
    fs::write(path, &body).with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), urls = urls.len(), "Saved product URLs");
    Ok(())
}

/// Load URLs, one per line, ignoring blank lines.
///
/// A missing or unreadable file degrades to an empty list with an error
/// log, mirroring the normalizer's source policy.
pub fn load_urls(path: &Path) -> Vec<String> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "URLs file not readable");
            return Vec::new();
        }
    };

    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Write a small provenance file describing the crawl.
pub fn write_provenance(
    base_url: &str,
    url_count: usize,
    record_count: usize,
    path: &Path,
) -> Result<()> {
    let fetched_at = chrono::Utc::now().to_rfc3339();
    let body = format!(
        "# Source\n\n\
         - **Base URL:** {base_url}\n\
         - **Fetched:** {fetched_at}\n\
         - **Product URLs:** {url_count}\n\
         - **Records written:** {record_count}\n"
    );
    fs::write(path, body).with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), "Wrote source provenance");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_url_file_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("urls.txt");
        let urls = vec![
            "http://books.toscrape.com/catalogue/a_1/index.html".to_string(),
            "http://books.toscrape.com/catalogue/b_2/index.html".to_string(),
        ];

        save_urls(&urls, &path).unwrap();
        assert_eq!(load_urls(&path), urls);
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("urls.txt");
        fs::write(&path, "http://a.test/1\n\n  \nhttp://a.test/2\n").unwrap();

        assert_eq!(load_urls(&path), vec!["http://a.test/1", "http://a.test/2"]);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(load_urls(&dir.path().join("nope.txt")).is_empty());
    }

    #[test]
    fn test_write_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books.txt");
        let records = vec![
            RawRecord {
                title: "A".to_string(),
                price: "£1.00".to_string(),
                rating: "One".to_string(),
                availability: "In stock".to_string(),
            },
            RawRecord {
                title: "B".to_string(),
                ..RawRecord::default()
            },
        ];

        write_records(&records, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "A;£1.00;One;In stock\nB;;;\n");
    }

    #[test]
    fn test_provenance_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("source.md");

        write_provenance("http://books.toscrape.com/", 1000, 998, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("http://books.toscrape.com/"));
        assert!(contents.contains("**Product URLs:** 1000"));
        assert!(contents.contains("**Records written:** 998"));
    }
}
