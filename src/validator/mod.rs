//! Advisory format checks run before a payload is encoded.
//!
//! They exist to reject obviously malformed input early with a specific error. Passing a check
//! says nothing about whether the URL resolves, the mailbox exists or the number is in service.

use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum DataType {
    Url,
    Email,
    PhoneNumber,
}

pub fn validate(text: &str, kind: DataType) -> bool {
    match kind {
        DataType::Url => validate_url(text),
        DataType::Email => validate_email(text),
        DataType::PhoneNumber => validate_phone_number(text),
    }
}

// Url
//------------------------------------------------------------------------------

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?:(?:https?|ftp)://)?",
        r"[\w\-]+(?:\.[\w|\-]*)*",  // host
        r"(?::[0-9]{1,5})?",         // port
        r"(?:[./|][\w|%~+\-]*)+",    // at least one dotted or slashed segment
        r"(?:\?[^\s#]*)?(?:#\S*)?$", // query & fragment
    ))
    .expect("url pattern is valid")
});

fn validate_url(url: &str) -> bool {
    URL_RE.is_match(url)
}

// Email
//------------------------------------------------------------------------------

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        "^(?:",
        // dot-atom local part
        r"[\p{L}0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[\p{L}0-9!#$%&'*+/=?^_`{|}~-]+)*",
        // quoted local part
        r#"|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*""#,
        ")@(?:",
        // domain with at least one dot
        r"(?:[\p{L}0-9](?:[\p{L}0-9-]*[\p{L}0-9])?\.)+[\p{L}0-9](?:[\p{L}0-9-]*[\p{L}0-9])?",
        // ipv4 literal
        r"|\[(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\]",
        ")$",
    ))
    .expect("email pattern is valid")
});

fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

// Phone number
//------------------------------------------------------------------------------

// Optional international prefix followed by digit groups, where any group may be a parenthesized
// area code. Groups are joined by a single space, dot or dash.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?:\+|00)? ?",
        r"(?:\([0-9]{1,4}\)|[0-9]{1,5})",
        r"(?:[ .\-]?(?:\([0-9]{1,4}\)|[0-9]{1,5}))*",
    ))
    .expect("phone pattern is valid")
});

const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;

fn validate_phone_number(number: &str) -> bool {
    let mut matches = PHONE_RE.find_iter(number);
    let (Some(m), None) = (matches.next(), matches.next()) else {
        return false;
    };
    if m.start() != 0 || m.end() != number.len() {
        return false;
    }

    let digits = number.bytes().filter(u8::is_ascii_digit).count();
    (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits)
}

#[cfg(test)]
mod validator_tests {
    use test_case::test_case;

    use super::{validate, DataType};

    #[test_case("https://example.com/")]
    #[test_case("http://example.com")]
    #[test_case("ftp://files.example.org/pub/file.txt")]
    #[test_case("example.com")]
    #[test_case("www.example.co.uk/path/to-page")]
    #[test_case("https://example.com:8080/api")]
    #[test_case("https://example.com/search?q=rust&page=2#results")]
    #[test_case("https://my_site.invalidtld/")]
    #[test_case("https://example.com/a%20b")]
    fn test_valid_url(url: &str) {
        assert!(validate(url, DataType::Url));
    }

    #[test_case(""; "empty")]
    #[test_case("localhost"; "no dot")]
    #[test_case("not a url"; "spaces")]
    #[test_case("mailto:a@b.com"; "mailto scheme")]
    #[test_case("http://"; "scheme only")]
    #[test_case("gopher://example.com"; "unsupported scheme")]
    fn test_invalid_url(url: &str) {
        assert!(!validate(url, DataType::Url));
    }

    #[test_case("a@b.com")]
    #[test_case("first.last@example.org")]
    #[test_case("user+tag@sub.domain.io")]
    #[test_case("o'hara@example.ie")]
    #[test_case("\"john.doe\"@example.com")]
    #[test_case("user@[192.168.0.1]")]
    #[test_case("josé@correo.es")]
    #[test_case("user@Example.COM")]
    fn test_valid_email(email: &str) {
        assert!(validate(email, DataType::Email));
    }

    #[test_case("not-an-email"; "no at")]
    #[test_case("a@b"; "dotless domain")]
    #[test_case("@example.com"; "empty local part")]
    #[test_case("a..b@example.com"; "double dot")]
    #[test_case("a@-example.com"; "label starts with dash")]
    #[test_case("a@[300.1.1.1]"; "ipv4 out of range")]
    #[test_case("a b@example.com"; "space")]
    #[test_case(" a@b.com"; "leading space")]
    fn test_invalid_email(email: &str) {
        assert!(!validate(email, DataType::Email));
    }

    #[test_case("+1 (555) 123-4567")]
    #[test_case("(555) 123-4567")]
    #[test_case("555-1234")]
    #[test_case("+39 333 1234567")]
    #[test_case("0039 333 1234567")]
    #[test_case("555.123.4567")]
    #[test_case("5551234567")]
    fn test_valid_phone_number(number: &str) {
        assert!(validate(number, DataType::PhoneNumber));
    }

    #[test_case(""; "empty")]
    #[test_case("12345"; "too few digits")]
    #[test_case("1234567890123456"; "too many digits")]
    #[test_case("call 555-1234"; "leading text")]
    #[test_case("555-1234 ext"; "trailing text")]
    #[test_case("555-1234 or 555-9876"; "two numbers")]
    #[test_case("555-1234-"; "dangling separator")]
    #[test_case("phone"; "letters")]
    fn test_invalid_phone_number(number: &str) {
        assert!(!validate(number, DataType::PhoneNumber));
    }
}
