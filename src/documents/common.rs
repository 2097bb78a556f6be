//! Common utilities for document generation.
//!
//! Shared helpers for date formatting, output filenames and text encoding.

use chrono::{Datelike, Local, NaiveDate};

/// Today's date on the server's local clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Day of month, zero-padded to two digits (e.g. "07").
pub fn format_day(date: NaiveDate) -> String {
    format!("{:02}", date.day())
}

/// Full month name and year (e.g. "October, 2026").
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%B, %Y").to_string()
}

/// PDF date string for the document information dictionary.
pub fn format_pdf_date(date: NaiveDate) -> String {
    format!("D:{}000000Z", date.format("%Y%m%d"))
}

/// Make a company name safe for a `Content-Disposition` filename.
/// Control characters, quotes and backslashes become `_`.
fn filename_stem(company_name: &str) -> String {
    company_name
        .chars()
        .map(|ch| match ch {
            '"' | '\\' => '_',
            ch if ch.is_control() => '_',
            ch => ch,
        })
        .collect()
}

/// `{company_name}_certificate.pdf`.
pub fn certificate_filename(company_name: &str) -> String {
    format!("{}_certificate.pdf", filename_stem(company_name))
}

/// `{company_name}_bylaws.pdf` with spaces replaced by underscores.
pub fn bylaws_filename(company_name: &str) -> String {
    format!("{}_bylaws.pdf", filename_stem(company_name).replace(' ', "_"))
}

/// WinAnsi code points 0x80-0x9F, where it differs from Latin-1.
const WIN_ANSI_EXTRAS: [(u8, char); 27] = [
    (0x80, '\u{20AC}'), // euro
    (0x82, '\u{201A}'),
    (0x83, '\u{0192}'),
    (0x84, '\u{201E}'),
    (0x85, '\u{2026}'), // ellipsis
    (0x86, '\u{2020}'),
    (0x87, '\u{2021}'),
    (0x88, '\u{02C6}'),
    (0x89, '\u{2030}'),
    (0x8A, '\u{0160}'),
    (0x8B, '\u{2039}'),
    (0x8C, '\u{0152}'),
    (0x8E, '\u{017D}'),
    (0x91, '\u{2018}'), // quotes
    (0x92, '\u{2019}'),
    (0x93, '\u{201C}'),
    (0x94, '\u{201D}'),
    (0x95, '\u{2022}'),
    (0x96, '\u{2013}'), // en dash
    (0x97, '\u{2014}'), // em dash
    (0x98, '\u{02DC}'),
    (0x99, '\u{2122}'),
    (0x9A, '\u{0161}'),
    (0x9B, '\u{203A}'),
    (0x9C, '\u{0153}'),
    (0x9E, '\u{017E}'),
    (0x9F, '\u{0178}'),
];

/// WinAnsi byte for `ch`, if the encoding has one. Control characters have none.
pub fn win_ansi_byte(ch: char) -> Option<u8> {
    match ch as u32 {
        code @ (0x20..=0x7E | 0xA0..=0xFF) => Some(code as u8),
        _ => WIN_ANSI_EXTRAS
            .iter()
            .find(|(_, c)| *c == ch)
            .map(|(byte, _)| *byte),
    }
}

/// Encode text for a WinAnsi simple font; unmappable characters become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| win_ansi_byte(ch).unwrap_or(b'?'))
        .collect()
}

/// Inverse of [`encode_win_ansi`].
pub fn decode_win_ansi(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| {
            WIN_ANSI_EXTRAS
                .iter()
                .find(|(byte, _)| *byte == b)
                .map_or_else(|| char::from(b), |(_, ch)| *ch)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_day_zero_padded() {
        assert_eq!(format_day(date(2026, 3, 7)), "07");
        assert_eq!(format_day(date(2026, 3, 17)), "17");
    }

    #[test]
    fn test_format_month_year() {
        assert_eq!(format_month_year(date(2026, 10, 19)), "October, 2026");
        assert_eq!(format_month_year(date(2025, 1, 1)), "January, 2025");
    }

    #[test]
    fn test_format_pdf_date() {
        assert_eq!(format_pdf_date(date(2026, 10, 19)), "D:20261019000000Z");
    }

    #[test]
    fn test_filenames() {
        assert_eq!(
            certificate_filename("Acme Corp, Inc."),
            "Acme Corp, Inc._certificate.pdf"
        );
        assert_eq!(
            bylaws_filename("Test Corporation"),
            "Test_Corporation_bylaws.pdf"
        );
        assert_eq!(bylaws_filename("A  B"), "A__B_bylaws.pdf");
    }

    #[test]
    fn test_win_ansi_round_trip() {
        let text = "Caf\u{e9} & Co. (Est. 1999) \\ 100%";
        assert_eq!(decode_win_ansi(&encode_win_ansi(text)), text);
    }

    #[test]
    fn test_filenames_drop_header_unsafe_characters() {
        assert_eq!(
            certificate_filename("Acme Corp\nInc"),
            "Acme Corp_Inc_certificate.pdf"
        );
        assert_eq!(bylaws_filename("Acme\r\nCo\tLtd"), "Acme__Co_Ltd_bylaws.pdf");
        assert_eq!(certificate_filename("A \"B\" \\ C"), "A _B_ _ C_certificate.pdf");
    }

    #[test]
    fn test_win_ansi_typographic_punctuation() {
        let text = "Se\u{e1}n O\u{2019}Brien \u{2013} Director \u{201C}CEO\u{201D} \u{20AC}5";
        let encoded = encode_win_ansi(text);
        assert!(!encoded.contains(&b'?'));
        assert_eq!(encoded[6], 0x92);
        assert_eq!(decode_win_ansi(&encoded), text);
    }

    #[test]
    fn test_win_ansi_replaces_unmappable() {
        assert_eq!(encode_win_ansi("A\u{2603}B\n"), b"A?B?".to_vec());
    }
}
