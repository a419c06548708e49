//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! allowing the scanner to detect EOF without explicit bounds checking.
//! The total buffer size is rounded up to the next 64-byte boundary, which
//! also provides the padding that `peek()` and `peek2()` read near the end.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel byte plus the two bytes `peek2()` may read past it.
const MIN_PADDING: usize = 3;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer<'src> {
    /// The original text; slices handed out by the cursor borrow from here.
    source: &'src str,
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl<'src> SourceBuffer<'src> {
    /// Create a new sentinel-terminated buffer from source code.
    ///
    /// Sources larger than `u32::MAX` bytes are truncated to that length;
    /// spans are 32-bit.
    pub fn new(source: &'src str) -> Self {
        let source_len = u32::try_from(source.len()).unwrap_or(u32::MAX);
        let content_len = source_len as usize;
        let source = source.get(..content_len).unwrap_or(source);

        let padded_len = (content_len + MIN_PADDING + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Zero-filled, so the sentinel and padding are already in place.
        let mut buf = vec![0u8; padded_len];
        buf[..content_len].copy_from_slice(&source.as_bytes()[..content_len]);

        Self {
            source,
            buf,
            source_len,
        }
    }

    /// Create a [`Cursor`] positioned at byte 0, line 1, column 1.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self.source, &self.buf, self.source_len)
    }
}

#[cfg(test)]
mod tests;
