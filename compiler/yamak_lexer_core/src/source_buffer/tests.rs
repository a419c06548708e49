use super::*;

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.source_len, 0);
    assert_eq!(buf.buf[0], 0);
    assert!(buf.cursor().is_eof());
}

#[test]
fn ascii_source() {
    let buf = SourceBuffer::new("hello");
    assert_eq!(buf.source_len, 5);
    assert_eq!(&buf.buf[..5], b"hello");
    assert_eq!(buf.buf[5], 0);
    assert_eq!(buf.cursor().slice_from(0), "");
}

#[test]
fn utf8_multibyte_source() {
    let source = "x := \u{1F600}";
    let buf = SourceBuffer::new(source);
    assert_eq!(buf.source_len as usize, source.len());
    assert_eq!(&buf.buf[..source.len()], source.as_bytes());
}

#[test]
fn buffer_aligned_to_cache_line() {
    for len in [0, 1, 10, 61, 62, 63, 64, 65, 127, 128, 1000] {
        let source = "x".repeat(len);
        let buf = SourceBuffer::new(&source);
        assert_eq!(
            buf.buf.len() % CACHE_LINE,
            0,
            "buffer not cache-line aligned for source length {len}"
        );
    }
}

#[test]
fn padding_covers_two_byte_lookahead() {
    for len in [0, 61, 62, 63, 64, 125, 126] {
        let source = "x".repeat(len);
        let buf = SourceBuffer::new(&source);
        assert!(
            buf.buf.len() >= len + MIN_PADDING,
            "insufficient padding for source length {len}"
        );
    }
}

#[test]
fn sentinel_and_padding_are_zero() {
    let buf = SourceBuffer::new("abc");
    for &b in &buf.buf[3..] {
        assert_eq!(b, 0, "non-zero byte in sentinel/padding region");
    }
}
