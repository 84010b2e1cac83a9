//! Common utilities

use sha1::{Digest, Sha1};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::time::SystemTime;

/// Read size used while hashing (1 MB)
pub const CHUNK_SIZE: usize = 1024 * 1024;

/// Compute the SHA-1 of a file's full content, streamed in fixed-size chunks
pub fn hash_file(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha1::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];

    loop {
        let read = match file.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Compute the SHA-1 of bytes
#[allow(dead_code)]
pub fn hash_bytes(data: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// File modification time in (fractional) seconds since epoch
pub fn mtime_secs(metadata: &std::fs::Metadata) -> io::Result<f64> {
    let mtime = metadata.modified()?;
    let duration = mtime
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default();
    Ok(duration.as_secs_f64())
}

/// Read at most `max_chars` characters from the start of a file.
///
/// Invalid UTF-8 is replaced rather than rejected. Only the bytes needed for
/// `max_chars` characters are read.
pub fn read_prefix(path: &Path, max_chars: usize) -> io::Result<String> {
    let file = File::open(path)?;
    // a char is at most 4 bytes in UTF-8
    let mut bytes = Vec::new();
    file.take((max_chars * 4) as u64).read_to_end(&mut bytes)?;

    let text = String::from_utf8_lossy(&bytes);
    Ok(text.chars().take(max_chars).collect())
}
