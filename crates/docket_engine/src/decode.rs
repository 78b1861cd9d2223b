use chardetng::EncodingDetector;
use encoding_rs::Encoding;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPage {
    pub text: String,
    pub encoding: &'static str,
}

/// Decode raw page bytes into UTF-8: BOM -> Content-Type charset -> chardetng.
///
/// Decoding is lossy. The legislature site serves legacy Windows-1252 pages
/// with the occasional stray byte, and a garbled character in one cell must
/// not abort a scrape run.
pub fn decode_page(bytes: &[u8], content_type: Option<&str>) -> DecodedPage {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(label) = content_type.and_then(extract_charset) {
        if let Some(encoding) = Encoding::for_label(label.as_bytes()) {
            return decode_with(bytes, encoding);
        }
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    decode_with(bytes, detector.guess(None, true))
}

fn extract_charset(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .filter_map(|part| {
            let part = part.trim();
            let (key, value) = part.split_at_checked("charset=".len())?;
            if key.eq_ignore_ascii_case("charset=") {
                Some(value.trim_matches([' ', '"', '\''].as_ref()))
            } else {
                None
            }
        })
        .next()
        .map(|label| label.to_string())
}

fn decode_with(bytes: &[u8], encoding: &'static Encoding) -> DecodedPage {
    let (text, used, _had_errors) = encoding.decode(bytes);
    DecodedPage {
        text: text.into_owned(),
        encoding: used.name(),
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_page, extract_charset};

    #[test]
    fn header_charset_wins_without_bom() {
        let bytes = b"caf\xe9"; // windows-1252
        let decoded = decode_page(bytes, Some("text/html; charset=windows-1252"));
        assert_eq!(decoded.text, "café");
    }

    #[test]
    fn utf8_bom_overrides_header() {
        let bytes = b"\xEF\xBB\xBFhello";
        let decoded = decode_page(bytes, Some("text/html; charset=windows-1252"));
        assert_eq!(decoded.text, "hello");
        assert_eq!(decoded.encoding, "UTF-8");
    }

    #[test]
    fn charset_label_is_case_insensitive_and_unquoted() {
        assert_eq!(
            extract_charset("text/html; Charset=\"ISO-8859-1\""),
            Some("ISO-8859-1".to_string())
        );
        assert_eq!(extract_charset("text/html"), None);
    }

    #[test]
    fn undeclared_legacy_bytes_still_decode() {
        let bytes = b"S.B. 12 \x97 water"; // em dash in windows-1252
        let decoded = decode_page(bytes, Some("text/html"));
        assert!(decoded.text.contains("water"));
    }
}
