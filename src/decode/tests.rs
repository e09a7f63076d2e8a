use super::*;
use std::fs;

#[test]
fn test_valid_utf8_unchanged() {
    let text = "hello\nwörld 文档\n";
    for mode in [DecodeMode::Lossy, DecodeMode::Strict] {
        assert_eq!(mode.decode(text.as_bytes().to_vec()).unwrap(), text);
    }
}

#[test]
fn test_default_mode_is_lossy() {
    assert_eq!(DecodeMode::default(), DecodeMode::Lossy);
}

#[test]
fn test_lossy_drops_invalid_bytes() {
    let bytes = b"he\xffllo\xfe".to_vec();
    assert_eq!(DecodeMode::Lossy.decode(bytes).unwrap(), "hello");
}

#[test]
fn test_lossy_drops_truncated_multibyte_sequence() {
    // "€" is e2 82 ac; keep only the first two bytes
    let bytes = b"price: \xe2\x82 done".to_vec();
    assert_eq!(DecodeMode::Lossy.decode(bytes).unwrap(), "price:  done");
}

#[test]
fn test_lossy_does_not_insert_replacement_char() {
    let decoded = DecodeMode::Lossy.decode(vec![0x80, b'a', 0xc0]).unwrap();
    assert!(!decoded.contains('\u{FFFD}'));
    assert_eq!(decoded, "a");
}

#[test]
fn test_lossy_all_invalid_is_empty() {
    let decoded = DecodeMode::Lossy.decode(vec![0xff; 16]).unwrap();
    assert!(decoded.is_empty());
}

#[test]
fn test_crlf_and_lone_cr_become_lf() {
    let bytes = b"line1\r\nline2\rline3\n".to_vec();
    for mode in [DecodeMode::Lossy, DecodeMode::Strict] {
        assert_eq!(mode.decode(bytes.clone()).unwrap(), "line1\nline2\nline3\n");
    }
}

#[test]
fn test_bom_is_kept() {
    let bytes = b"\xef\xbb\xbfline1\r\nline2".to_vec();
    assert_eq!(
        DecodeMode::Lossy.decode(bytes).unwrap(),
        "\u{feff}line1\nline2"
    );
}

#[test]
fn test_dropped_byte_between_cr_and_lf() {
    // The pair is joined once the invalid byte is gone
    let bytes = b"a\r\xff\nb".to_vec();
    assert_eq!(DecodeMode::Lossy.decode(bytes).unwrap(), "a\nb");
}

#[test]
fn test_trailing_cr_becomes_lf() {
    assert_eq!(DecodeMode::Strict.decode(b"end\r".to_vec()).unwrap(), "end\n");
}

#[test]
fn test_strict_reports_first_invalid_byte() {
    let err = DecodeMode::Strict.decode(b"abc\xffdef".to_vec()).unwrap_err();
    let DecodeError::InvalidUtf8 { byte, offset } = err;
    assert_eq!(byte, 0xff);
    assert_eq!(offset, 3);
}

#[test]
fn test_strict_error_message() {
    let err = DecodeMode::Strict.decode(vec![b'x', 0x80]).unwrap_err();
    assert_eq!(err.to_string(), "invalid UTF-8 byte 0x80 at offset 1");
}

#[test]
fn test_read_text_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, b"ok\xff").unwrap();

    assert_eq!(read_text(&path, DecodeMode::Lossy).unwrap(), "ok");
    assert!(matches!(
        read_text(&path, DecodeMode::Strict),
        Err(ReadError::Decode(_))
    ));
}

#[test]
fn test_read_text_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = read_text(&dir.path().join("missing.txt"), DecodeMode::Lossy);
    assert!(matches!(result, Err(ReadError::Io(_))));
}

#[test]
fn test_read_text_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = read_text(dir.path(), DecodeMode::Lossy);
    assert!(matches!(result, Err(ReadError::Io(_))));
}
