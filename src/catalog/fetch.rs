use std::time::Duration;

use crate::catalog::LoadError;
use crate::state::BookRecord;

/// Whether `source` names an HTTP(S) resource rather than a local file.
pub fn is_remote(source: &str) -> bool {
    let lower = source.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// What: Load and decode the catalog document named by `source`.
///
/// Inputs:
/// - `source`: Filesystem path or `http(s)://` URL
///
/// Output:
/// - The records in document order, or why the load failed.
///
/// Details:
/// - Nothing is cached: every call reads the source afresh.
pub async fn load(source: &str) -> Result<Vec<BookRecord>, LoadError> {
    let body = if is_remote(source) {
        fetch_remote(source.trim()).await?
    } else {
        tokio::fs::read_to_string(source).await?
    };
    let records = decode(&body)?;
    tracing::debug!(source, count = records.len(), "catalog decoded");
    Ok(records)
}

/// What: Decode a catalog document.
///
/// Inputs:
/// - `body`: JSON text holding an array of book records
///
/// Output:
/// - Records in document order; `LoadError::Decode` for anything else.
pub fn decode(body: &str) -> Result<Vec<BookRecord>, LoadError> {
    Ok(serde_json::from_str::<Vec<BookRecord>>(body)?)
}

/// GET `url` and return the body of a successful response.
async fn fetch_remote(url: &str) -> Result<String, LoadError> {
    let client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .user_agent(format!("bookcase/{}", env!("CARGO_PKG_VERSION")))
        .build()?;
    let resp = client.get(url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(LoadError::Status(status.as_u16()));
    }
    Ok(resp.text().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {"titulo": "Vidas Secas", "autor": "Graciliano Ramos", "categoria": "Romance",
         "ano": 1938, "capa": "img/vidas.jpg", "descricao": "Sertão.", "link": "https://a"},
        {"title": "Grande Sertão: Veredas", "author": "João Guimarães Rosa", "category": "Romance",
         "year": "1956", "cover": "img/gsv.jpg", "description": "Riobaldo.", "link": "https://b"}
    ]"#;

    #[test]
    /// What: URL detection accepts http and https in any case
    fn remote_detection() {
        assert!(is_remote("https://example.org/books.json"));
        assert!(is_remote("HTTP://example.org/books.json"));
        assert!(!is_remote("books.json"));
        assert!(!is_remote("/srv/http/books.json"));
    }

    #[test]
    /// What: Decoding keeps document order and mixed schemas
    fn decode_mixed_document() {
        let recs = decode(SAMPLE).expect("decodes");
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].author, "Graciliano Ramos");
        assert_eq!(recs[1].year, 1956);
    }

    #[test]
    /// What: Malformed documents are decode errors
    ///
    /// - Input: Truncated JSON, an object instead of an array, a non-numeric year
    /// - Output: `LoadError::Decode` for each
    fn decode_rejects_malformed() {
        for bad in [
            "[{",
            r#"{"title": "x"}"#,
            r#"[{"title":"x","author":"y","category":"z","year":"soon"}]"#,
        ] {
            assert!(matches!(decode(bad), Err(LoadError::Decode(_))), "{bad}");
        }
    }

    #[tokio::test]
    /// What: Loading from a file path reads and decodes it
    async fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        file.write_all(SAMPLE.as_bytes()).expect("write");
        let path = file.path().to_string_lossy().to_string();
        let recs = load(&path).await.expect("loads");
        assert_eq!(recs[0].title, "Vidas Secas");
    }

    #[tokio::test]
    /// What: A missing file is an IO error
    async fn load_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.json");
        let err = load(&path.to_string_lossy()).await.expect_err("fails");
        assert!(matches!(err, LoadError::Io(_)));
    }
}
