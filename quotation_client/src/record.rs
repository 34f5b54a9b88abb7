//! Append-only record file of fetched quotations.
//!
//! Each call opens the file in append mode (creating it if absent) and writes one
//! line. There is no locking: concurrent requesters writing the same file may
//! interleave their lines.
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use quotation_common::{Quotation, QuotationError, Result};

/// Append `Dólar: <bid>\n` for `quotation` to the file at `path`.
pub fn append_record(path: &Path, quotation: &Quotation) -> Result<()> {
    let record_err = |source: std::io::Error| QuotationError::Record {
        path: path.to_path_buf(),
        source,
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(record_err)?;
    file.write_all(quotation.record_line().as_bytes())
        .map_err(record_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::temp_path;
    use std::fs;

    #[test]
    fn creates_missing_file() {
        let path = temp_path("created.txt");
        append_record(&path, &Quotation::new(5.25)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Dólar: 5.25\n");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn keeps_existing_content_in_call_order() {
        let path = temp_path("existing.txt");
        fs::write(&path, "Dólar: 4.90\n").unwrap();

        append_record(&path, &Quotation::new(5.1)).unwrap();
        append_record(&path, &Quotation::new(5.257)).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Dólar: 4.90\nDólar: 5.10\nDólar: 5.26\n"
        );
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn unwritable_path_is_a_record_failure() {
        let path = temp_path("no-such-dir").join("cotacao.txt");
        let err = append_record(&path, &Quotation::new(5.0)).unwrap_err();
        assert!(matches!(err, QuotationError::Record { .. }));
    }
}
