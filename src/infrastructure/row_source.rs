//! Reading signal rows from JSON input

use crate::domain::SignalRow;
use crate::infrastructure::log_messages;
use crate::Result;
use std::path::Path;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, info, instrument, warn};

/// Read a JSON array of rows from any async reader
pub async fn read_rows<R>(mut reader: R) -> Result<Vec<SignalRow>>
where
    R: AsyncRead + Unpin,
{
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer).await?;

    let rows: Vec<SignalRow> = if buffer.trim().is_empty() {
        Vec::new()
    } else {
        serde_json::from_str(&buffer)?
    };

    if rows.is_empty() {
        warn!("{}", log_messages::input::NO_ROWS);
    } else {
        info!(rows = rows.len(), "{}", log_messages::input::ROWS_LOADED);
    }
    Ok(rows)
}

/// Read rows from `path`, or from stdin when no path is given
#[instrument]
pub async fn load_rows(path: Option<&Path>) -> Result<Vec<SignalRow>> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "{}", log_messages::input::READING_FILE);
            let file = tokio::fs::File::open(path).await?;
            read_rows(file).await
        }
        None => {
            debug!("{}", log_messages::input::READING_STDIN);
            read_rows(tokio::io::stdin()).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimeKey;
    use crate::Error;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const ROWS: &str = r#"[
        {"geo_type":"state","geo_value":"pa","source":"fb-survey","signal":"smoothed_cli","time_value":20200401,"value":1.5},
        {"geo_type":"state","geo_value":"pa","source":"fb-survey","signal":"smoothed_cli","time_value":20200402,"value":1.75}
    ]"#;

    #[tokio::test]
    async fn test_read_rows_from_reader() {
        let rows = read_rows(ROWS.as_bytes()).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].time_value, TimeKey::new(20200402));
        assert_eq!(rows[1].value, 1.75);
    }

    #[tokio::test]
    async fn test_blank_input_is_no_rows() {
        let rows = read_rows("  \n".as_bytes()).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_input_is_serialization_error() {
        let err = read_rows("[{\"geo_type\":1}]".as_bytes()).await.unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[tokio::test]
    async fn test_load_rows_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(ROWS.as_bytes()).unwrap();

        let rows = load_rows(Some(file.path())).await.unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let err = load_rows(Some(Path::new("/nonexistent/rows.json")))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
