//! Trademark search lookup URLs
//!
//! The search page parses its `q` parameter as a percent-encoded JSON object,
//! so the bytes must match what it expects exactly: fixed key order, compact
//! separators, non-ASCII escaped as lowercase `\uXXXX`.

use std::io;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

use crate::error::Result;

/// Search page the query object is appended to
pub const LOOKUP_BASE_URL: &str = "https://tm.aliyun.com/channel/search#/search?q=";

/// Everything except `A-Z a-z 0-9 _ . - ~ /` is escaped
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

/// Fixed search parameters; field order is the wire order
#[derive(Debug, Serialize)]
struct SearchQuery<'a> {
    keyword: &'a str,
    #[serde(rename = "searchType")]
    search_type: &'static str,
    #[serde(rename = "pageNum")]
    page_num: u32,
    #[serde(rename = "pageSize")]
    page_size: u32,
    classification: &'static str,
    product: &'static str,
    #[serde(rename = "Status")]
    status: &'static str,
    #[serde(rename = "ApplyYear")]
    apply_year: &'static str,
    #[serde(rename = "applyDateOrder")]
    apply_date_order: &'static str,
    #[serde(rename = "firstAnncDateOrder")]
    first_annc_date_order: &'static str,
    #[serde(rename = "regDateOrder")]
    reg_date_order: &'static str,
    #[serde(rename = "orderId")]
    order_id: &'static str,
    valid: bool,
    #[serde(rename = "ifPrecise")]
    if_precise: bool,
    image: &'static str,
}

impl<'a> SearchQuery<'a> {
    fn for_keyword(keyword: &'a str) -> Self {
        Self {
            keyword,
            search_type: "ALL",
            page_num: 1,
            page_size: 20,
            classification: "",
            product: "",
            status: "",
            apply_year: "",
            apply_date_order: "",
            first_annc_date_order: "",
            reg_date_order: "",
            order_id: "",
            valid: false,
            if_precise: false,
            image: "",
        }
    }
}

/// Compact formatter that escapes every non-ASCII char as `\uXXXX`
struct AsciiFormatter;

impl serde_json::ser::Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Serialize the query object for a keyword to its compact ASCII JSON form
pub fn query_json(keyword: &str) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, AsciiFormatter);
    SearchQuery::for_keyword(keyword).serialize(&mut ser)?;
    // Only ASCII bytes were written
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Build the trademark search URL for a candidate name
pub fn build_lookup_url(name: &str) -> Result<String> {
    let json = query_json(name)?;
    Ok(format!(
        "{}{}",
        LOOKUP_BASE_URL,
        utf8_percent_encode(&json, QUERY_ENCODE_SET)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    const EXPECTED_TEST_QUERY: &str = concat!(
        "%7B%22keyword%22%3A%22%5Cu6d4b%5Cu8bd5%22%2C%22searchType%22%3A%22ALL%22",
        "%2C%22pageNum%22%3A1%2C%22pageSize%22%3A20%2C%22classification%22%3A%22%22",
        "%2C%22product%22%3A%22%22%2C%22Status%22%3A%22%22%2C%22ApplyYear%22%3A%22%22",
        "%2C%22applyDateOrder%22%3A%22%22%2C%22firstAnncDateOrder%22%3A%22%22",
        "%2C%22regDateOrder%22%3A%22%22%2C%22orderId%22%3A%22%22%2C%22valid%22%3Afalse",
        "%2C%22ifPrecise%22%3Afalse%2C%22image%22%3A%22%22%7D"
    );

    fn decode_query(url: &str) -> String {
        let encoded = url.strip_prefix(LOOKUP_BASE_URL).unwrap();
        percent_decode_str(encoded).decode_utf8().unwrap().into_owned()
    }

    #[test]
    fn test_query_json_is_compact_and_ordered() {
        let json = query_json("测试").unwrap();
        assert_eq!(
            json,
            r#"{"keyword":"\u6d4b\u8bd5","searchType":"ALL","pageNum":1,"pageSize":20,"classification":"","product":"","Status":"","ApplyYear":"","applyDateOrder":"","firstAnncDateOrder":"","regDateOrder":"","orderId":"","valid":false,"ifPrecise":false,"image":""}"#
        );
    }

    #[test]
    fn test_lookup_url_exact_bytes() {
        let url = build_lookup_url("测试").unwrap();
        assert_eq!(url, format!("{}{}", LOOKUP_BASE_URL, EXPECTED_TEST_QUERY));
    }

    #[test]
    fn test_lookup_url_decodes_to_defaults() {
        let url = build_lookup_url("测试").unwrap();
        let value: serde_json::Value = serde_json::from_str(&decode_query(&url)).unwrap();

        assert_eq!(value["keyword"], "测试");
        assert_eq!(value["searchType"], "ALL");
        assert_eq!(value["pageNum"], 1);
        assert_eq!(value["pageSize"], 20);
        assert_eq!(value["valid"], false);
        assert_eq!(value["ifPrecise"], false);
        assert_eq!(value["image"], "");
        assert_eq!(value.as_object().unwrap().len(), 15);
    }

    #[test]
    fn test_lookup_url_escapes_astral_chars_as_surrogates() {
        let json = query_json("a😀").unwrap();
        assert!(json.starts_with(r#"{"keyword":"a\ud83d\ude00""#));
    }

    #[test]
    fn test_lookup_url_keeps_slash_and_escapes_space() {
        let url = build_lookup_url("a b/&").unwrap();
        assert!(url.contains("%22a%20b/%26%22"));
    }

    #[test]
    fn test_lookup_url_escapes_quotes_in_name() {
        let url = build_lookup_url("say \"hi\"").unwrap();
        let value: serde_json::Value = serde_json::from_str(&decode_query(&url)).unwrap();
        assert_eq!(value["keyword"], "say \"hi\"");
    }

    #[test]
    fn test_lookup_url_is_deterministic() {
        assert_eq!(
            build_lookup_url("星辰科技").unwrap(),
            build_lookup_url("星辰科技").unwrap()
        );
    }
}
