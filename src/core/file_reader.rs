//! Input file reading
//!
//! Turns a discovered name into the sequence of lines the tokenizers consume.
//! Provides consistent handling for:
//! - Missing files and directories (recoverable `ReadError`)
//! - Non-UTF-8 content (lossy conversion, logged)

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::core::error::ReadError;

/// Lines read from one input file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceLines {
    /// Display name of the source (the file name as discovered)
    pub name: String,

    /// Raw lines, without their line terminators
    pub lines: Vec<String>,

    /// Whether invalid UTF-8 had to be replaced
    pub lossy_conversion: bool,
}

impl SourceLines {
    /// Build a source from in-memory text
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        Self {
            name: name.into(),
            lines: split_lines(text),
            lossy_conversion: false,
        }
    }
}

/// Split text into lines on `\r\n`, `\r` or `\n`.
/// A final terminator does not start an extra line.
fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.find(&['\r', '\n'][..]) {
            Some(end) => {
                lines.push(rest[..end].to_string());
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }

    lines
}

/// Read `root/name` into lines.
///
/// Directories are reported before any open attempt because opening a
/// directory succeeds on some platforms.
pub fn read_source(root: &Path, name: &str) -> Result<SourceLines, ReadError> {
    let path = root.join(name);

    let metadata = fs::metadata(&path).map_err(|e| ReadError::from_io(name, e))?;
    if metadata.is_dir() {
        return Err(ReadError::IsDirectory {
            name: name.to_string(),
        });
    }

    let bytes = read_file_bytes(&path).map_err(|e| ReadError::from_io(name, e))?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(SourceLines::from_text(name, &text)),
        Err(err) => {
            log::warn!(
                "{}: invalid UTF-8, lossy conversion applied (some characters replaced)",
                name
            );
            let text = String::from_utf8_lossy(err.as_bytes()).into_owned();
            let mut source = SourceLines::from_text(name, &text);
            source.lossy_conversion = true;
            Ok(source)
        }
    }
}

fn read_file_bytes(path: &Path) -> std::io::Result<Vec<u8>> {
    let file = fs::File::open(path)?;
    let size = file.metadata().map(|m| m.len() as usize).unwrap_or(0);
    let mut reader = std::io::BufReader::new(file);
    let mut buffer = Vec::with_capacity(size);
    reader.read_to_end(&mut buffer)?;
    Ok(buffer)
}
