//! CSV loader.
//!
//! Reads a delimited file into a [`Table`] of text cells. No type inference:
//! `"42"` and `"true"` stay strings. Cells holding a null marker load as
//! absent unless [`LoadOptions::keep_null_markers`] is set.

use std::path::Path;

use crate::config::{Encoding, LoadOptions};
use crate::error::{InputError, InputResult};
use crate::models::Table;

/// Cell texts read as "no value", matching the NA tokens of common
/// dataframe CSV readers.
pub const NULL_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// True if `value` is a null marker.
pub fn is_null_marker(value: &str) -> bool {
    NULL_MARKERS.contains(&value)
}

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> Encoding {
    let (charset, _confidence, _language) = chardet::detect(bytes);

    match charset.to_lowercase().as_str() {
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => Encoding::Latin1,
        "windows-1252" | "cp1252" => Encoding::Windows1252,
        _ => Encoding::Utf8,
    }
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decode bytes to a string in the given encoding.
///
/// A leading UTF-8 byte-order mark is dropped whatever the encoding.
/// UTF-8 is strict: invalid sequences are an error rather than replaced.
pub fn decode_content(bytes: &[u8], encoding: Encoding) -> InputResult<String> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let encoding = match encoding {
        Encoding::Auto => detect_encoding(bytes),
        other => other,
    };

    match encoding {
        Encoding::Latin1 => Ok(encoding_rs::mem::decode_latin1(bytes).into_owned()),
        Encoding::Windows1252 => Ok(encoding_rs::WINDOWS_1252
            .decode_without_bom_handling(bytes)
            .0
            .into_owned()),
        Encoding::Utf8 | Encoding::Auto => {
            let (text, had_errors) = encoding_rs::UTF_8.decode_without_bom_handling(bytes);
            if had_errors {
                let message = match std::str::from_utf8(bytes) {
                    Err(e) => e.to_string(),
                    Ok(_) => "invalid byte sequence".to_string(),
                };
                return Err(InputError::Encoding {
                    encoding: encoding.label().to_string(),
                    message,
                });
            }
            Ok(text.into_owned())
        }
    }
}

/// Parse decoded CSV text.
pub fn parse_str(content: &str, options: &LoadOptions) -> InputResult<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(false)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(InputError::from_csv)?
        .iter()
        .map(str::to_string)
        .collect();

    if headers.is_empty() || (headers.len() == 1 && headers[0].is_empty()) {
        return Err(InputError::EmptyFile);
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(InputError::from_csv)?;
        let cells = record
            .iter()
            .map(|field| {
                if !options.keep_null_markers && is_null_marker(field) {
                    None
                } else {
                    Some(field.to_string())
                }
            })
            .collect();
        records.push(cells);
    }

    Ok(Table { headers, records })
}

/// Decode and parse raw CSV bytes.
pub fn parse_bytes(bytes: &[u8], options: &LoadOptions) -> InputResult<Table> {
    let content = decode_content(bytes, options.encoding)?;
    parse_str(&content, options)
}

/// Load a CSV file.
///
/// # Example
/// ```ignore
/// let table = load_csv_file("export.csv", &LoadOptions::default())?;
/// println!("{} rows, columns: {}", table.len(), table.headers.join(", "));
/// ```
pub fn load_csv_file<P: AsRef<Path>>(path: P, options: &LoadOptions) -> InputResult<Table> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| InputError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    parse_bytes(&bytes, options)
}
