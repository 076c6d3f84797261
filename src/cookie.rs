use crate::{
    split_at,
    Error,
    HeaderCollection,
};

/// This is the `max_age` of a cookie whose `Set-Cookie` header value has
/// no `expires` attribute, marking it as a session cookie.
pub const SESSION_MAX_AGE: i32 = -1;

/// This is what a response asked the client to remember through one
/// `Set-Cookie` header value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cookie {
    pub domain: Option<String>,
    pub name: String,
    pub value: String,
    pub path: Option<String>,
    pub max_age: i32,
    pub secure: bool,
}

// Only the text up to a second `=` is kept, so `a=b=c` gives `b`.
fn first_value(text: &str) -> &str {
    text.split('=').next().unwrap_or("")
}

/// Parse one `Set-Cookie` header value.
///
/// The value is split into fields at each `;` (along with any whitespace
/// after it).  The first field holds the cookie name and value, separated by
/// the first `=`.  Of the remaining fields, `secure` marks the cookie as
/// secure, and `expires`, `domain`, and `path` attributes (matched without
/// regard to case) fill in those properties.  Anything else is ignored.
///
/// # Errors
///
/// [`Error::CookieMissingValue`](enum.Error.html#variant.CookieMissingValue)
/// is returned if the first field has no `=`, and
/// [`Error::InvalidCookieExpires`](enum.Error.html#variant.InvalidCookieExpires)
/// is returned if the `expires` attribute is not an integer.
pub fn parse_set_cookie(set_cookie: &str) -> Result<Cookie, Error> {
    let mut fields = set_cookie.split(';').map(str::trim_start);
    let (name, value) = fields.next()
        .and_then(|field| split_at(field, '='))
        .ok_or_else(|| Error::CookieMissingValue(set_cookie.into()))?;
    let mut cookie = Cookie {
        domain: None,
        name: name.into(),
        value: first_value(value).into(),
        path: None,
        max_age: SESSION_MAX_AGE,
        secure: false,
    };
    for field in fields.filter(|field| !field.is_empty()) {
        if field.eq_ignore_ascii_case("secure") {
            cookie.secure = true;
            continue;
        }
        let (attribute, value) = match split_at(field, '=') {
            Some((attribute, value)) if !attribute.is_empty() => {
                (attribute, first_value(value))
            },
            _ => continue,
        };
        if attribute.eq_ignore_ascii_case("expires") {
            cookie.max_age = value.parse()
                .map_err(|_| Error::InvalidCookieExpires(value.into()))?;
        } else if attribute.eq_ignore_ascii_case("domain") {
            cookie.domain = Some(value.into());
        } else if attribute.eq_ignore_ascii_case("path") {
            cookie.path = Some(value.into());
        }
    }
    Ok(cookie)
}

/// Parse every `Set-Cookie` header value in the given headers, in order.
///
/// # Errors
///
/// Any error from [`parse_set_cookie`](fn.parse_set_cookie.html) is
/// returned for the first value which fails to parse.
pub fn parse_cookies(headers: &HeaderCollection) -> Result<Vec<Cookie>, Error> {
    let cookies = headers.header_multi_value("Set-Cookie")
        .iter()
        .map(|value| parse_set_cookie(value))
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("parsed {} cookie(s) from response headers", cookies.len());
    Ok(cookies)
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn parse_all_attributes() {
        assert_eq!(
            Cookie {
                domain: Some("example.com".into()),
                name: "sid".into(),
                value: "abc123".into(),
                path: Some("/".into()),
                max_age: -1,
                secure: true,
            },
            parse_set_cookie("sid=abc123; Domain=example.com; Path=/; Secure").unwrap()
        );
    }

    #[test]
    fn parse_name_and_value_only() {
        assert_eq!(
            Cookie {
                domain: None,
                name: "lang".into(),
                value: "en-US".into(),
                path: None,
                max_age: SESSION_MAX_AGE,
                secure: false,
            },
            parse_set_cookie("lang=en-US").unwrap()
        );
    }

    #[test]
    fn attribute_names_any_case_and_order() {
        let cookie = parse_set_cookie(
            "id=a3fWa;SECURE;  pAtH=/docs;EXPIRES=3600; dOmAiN=example.org"
        ).unwrap();
        assert_eq!(Some("example.org"), cookie.domain.as_deref());
        assert_eq!(Some("/docs"), cookie.path.as_deref());
        assert_eq!(3600, cookie.max_age);
        assert!(cookie.secure);
    }

    #[test]
    fn unrecognized_attributes_ignored() {
        let cookie = parse_set_cookie(
            "id=a3fWa; HttpOnly; SameSite=Lax; =orphan; Max-Age=10"
        ).unwrap();
        assert_eq!("id", cookie.name);
        assert_eq!("a3fWa", cookie.value);
        assert_eq!(None, cookie.domain);
        assert_eq!(None, cookie.path);
        assert_eq!(SESSION_MAX_AGE, cookie.max_age);
        assert!(!cookie.secure);
    }

    #[test]
    fn value_truncated_at_second_equals() {
        let cookie = parse_set_cookie("token=YWJj==; Path=/a=b").unwrap();
        assert_eq!("token", cookie.name);
        assert_eq!("YWJj", cookie.value);
        assert_eq!(Some("/a"), cookie.path.as_deref());
    }

    #[test]
    fn empty_value() {
        let cookie = parse_set_cookie("sid=; Secure").unwrap();
        assert_eq!("sid", cookie.name);
        assert_eq!("", cookie.value);
        assert!(cookie.secure);
    }

    #[test]
    fn missing_value() {
        assert!(matches!(
            parse_set_cookie("sid; Secure"),
            Err(Error::CookieMissingValue(value)) if value == "sid; Secure"
        ));
        assert!(matches!(
            parse_set_cookie(""),
            Err(Error::CookieMissingValue(_))
        ));
    }

    #[test]
    fn empty_first_field_is_missing_value() {
        assert!(matches!(
            parse_set_cookie(";a=1"),
            Err(Error::CookieMissingValue(value)) if value == ";a=1"
        ));
        assert!(matches!(
            parse_set_cookie("  ; sid=1; Secure"),
            Err(Error::CookieMissingValue(_))
        ));
    }

    #[test]
    fn empty_attribute_fields_skipped() {
        let cookie = parse_set_cookie("sid=1;; ;Secure;").unwrap();
        assert_eq!("1", cookie.value);
        assert!(cookie.secure);
    }

    #[test]
    fn expires_not_an_integer() {
        assert!(matches!(
            parse_set_cookie("sid=1; Expires=Wed, 21 Oct 2015 07:28:00 GMT"),
            Err(Error::InvalidCookieExpires(value))
                if value == "Wed, 21 Oct 2015 07:28:00 GMT"
        ));
    }

    #[test]
    fn parse_cookies_from_every_set_cookie_header_in_order() {
        let headers: HeaderCollection = vec![
            ("Set-Cookie", "a=1"),
            ("Content-Type", "text/plain"),
            ("set-cookie", "b=2; Secure"),
            ("Set-Cookie2", "c=3"),
        ].into_iter().collect();
        let cookies = parse_cookies(&headers).unwrap();
        assert_eq!(
            vec![("a", "1", false), ("b", "2", true)],
            cookies.iter()
                .map(|cookie| (
                    cookie.name.as_str(),
                    cookie.value.as_str(),
                    cookie.secure
                ))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn parse_cookies_without_set_cookie_headers() {
        let headers: HeaderCollection = vec![
            ("Content-Type", "text/plain"),
        ].into_iter().collect();
        assert!(parse_cookies(&headers).unwrap().is_empty());
    }

}
