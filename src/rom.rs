//! Loading ROM images and program binaries from files or raw bytes.
//!
//! The three fixed-size ROM images (BASIC, KERNAL, Character) are raw byte
//! dumps with no header. Program images follow the PRG convention used by
//! C64 loaders: a two-byte little-endian load address followed by the
//! payload to place there.

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use crate::error::LoadError;

/// A loaded program image: where it wants to live in memory, and its
/// bytes.
pub struct ProgramImage {
    pub load_address: u16,
    pub data: Vec<u8>,
}

impl ProgramImage {
    pub fn load_file(path: &Path) -> Result<ProgramImage, LoadError> {
        let mut file = File::open(path)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        ProgramImage::from_bytes(&bytes)
    }

    /// Parses a two-byte little-endian load address header followed by
    /// the program payload.
    pub fn from_bytes(bytes: &[u8]) -> Result<ProgramImage, LoadError> {
        if bytes.len() < 2 {
            return Err(LoadError::Truncated {
                wanted: 2,
                got: bytes.len(),
            });
        }
        let load_address = u16::from_le_bytes([bytes[0], bytes[1]]);
        Ok(ProgramImage {
            load_address,
            data: bytes[2..].to_vec(),
        })
    }
}

/// Reads a raw ROM image from disk and validates it is exactly
/// `expected_size` bytes.
pub fn load_rom_image(path: &Path, expected_size: usize) -> Result<Vec<u8>, LoadError> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    if bytes.len() != expected_size {
        return Err(LoadError::BadSize {
            expected: expected_size,
            actual: bytes.len(),
        });
    }
    Ok(bytes)
}
