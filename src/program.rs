/*!
LS-8 program loader: text source -> memory image.

Format:
- One numeric literal per line, in a configurable base (default binary).
- Text after `#` is a comment.
- Whitespace inside a literal is ignored, so `1000 0010` reads as `10000010`.
- Blank lines and lines that do not parse as a byte in the chosen base are
  skipped.
- At most 256 bytes; one more aborts the load with `LoadError::Overflow`.

```text
10000010 # LDI R0,8
00000000
00001000
01000111 # PRN R0
00000000
00000001 # HLT
```
*/

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::bus::RAM_SIZE;

/// Numeric base used when none is given.
pub const DEFAULT_RADIX: u32 = 2;

/// Built-in program run when no file is supplied: `LDI R0,8; PRN R0; HLT`.
pub const DEFAULT_PROGRAM: [u8; 6] = [
    0b1000_0010, // LDI R0,8
    0b0000_0000,
    0b0000_1000,
    0b0100_0111, // PRN R0
    0b0000_0000,
    0b0000_0001, // HLT
];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unable to find {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("memory overflow: program exceeds {capacity} bytes, load not completed")]
    Overflow { capacity: usize },
    #[error("invalid numeric base {0} (expected 2..=36)")]
    InvalidRadix(u32),
}

/// A parsed memory image, ready for `Bus::load`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    bytes: Vec<u8>,
}

impl Default for Program {
    /// The built-in print8 program.
    fn default() -> Self {
        Self {
            bytes: DEFAULT_PROGRAM.to_vec(),
        }
    }
}

impl Program {
    /// Parse program text in the given base.
    pub fn parse(source: &str, radix: u32) -> Result<Self, LoadError> {
        if !(2..=36).contains(&radix) {
            return Err(LoadError::InvalidRadix(radix));
        }

        let mut bytes = Vec::new();
        for (lineno, line) in source.lines().enumerate() {
            let code = line.split('#').next().unwrap_or("");
            let literal: String = code.chars().filter(|c| !c.is_whitespace()).collect();
            if literal.is_empty() {
                continue;
            }
            match u8::from_str_radix(&literal, radix) {
                Ok(b) => {
                    if bytes.len() == RAM_SIZE {
                        return Err(LoadError::Overflow { capacity: RAM_SIZE });
                    }
                    bytes.push(b);
                }
                Err(e) => {
                    log::warn!("line {}: skipping {literal:?} ({e})", lineno + 1);
                }
            }
        }
        Ok(Self { bytes })
    }

    /// Read and parse a program file. A missing file is `LoadError::NotFound`.
    pub fn from_file(path: impl AsRef<Path>, radix: u32) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound {
                path: path.to_path_buf(),
            },
            _ => LoadError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        let program = Self::parse(&source, radix)?;
        log::debug!("parsed {} byte(s) from {}", program.len(), path.display());
        Ok(program)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
