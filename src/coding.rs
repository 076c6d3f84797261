//! This module contains helper functions for interpreting the body of an
//! HTTP response as text.  The text coding of a body is given by the
//! `charset` parameter of its `Content-Type` header, which a caller may
//! supplement with a charset of its own choosing, and which otherwise
//! falls back to `iso-8859-1`.

use crate::{
    split_at,
    Error,
};
use encoding_rs::Encoding;

/// This is the charset used to interpret a response body when neither the
/// `Content-Type` header nor the caller names one.  Its label resolves to
/// `windows-1252`, a superset which maps every byte to some character.
pub const DEFAULT_CHARSET: &str = "iso-8859-1";

/// Find the value of the `charset` parameter in the given `Content-Type`
/// header value.  The parameter name is matched without regard to case, and
/// any surrounding whitespace or quotes are removed from the value.  `None`
/// is returned if there is no such parameter, or if its value is empty.
#[must_use]
pub fn parse_charset(content_type: &str) -> Option<&str> {
    content_type.split(';')
        .map(str::trim)
        .filter_map(|parameter| split_at(parameter, '='))
        .find_map(|(name, value)| {
            if name.trim_end().eq_ignore_ascii_case("charset") {
                Some(value.trim().trim_matches(|c: char| c == '"' || c == '\''))
            } else {
                None
            }
        })
        .filter(|charset| !charset.is_empty())
}

/// Pick the charset used to decode a response body.  A charset named by the
/// `Content-Type` header wins over the one requested by the caller, which in
/// turn wins over [`DEFAULT_CHARSET`](constant.DEFAULT_CHARSET.html).
#[must_use]
pub fn resolve_charset<'a>(
    content_type: Option<&'a str>,
    charset_override: Option<&'a str>,
) -> &'a str {
    if let Some(charset) = content_type.and_then(parse_charset) {
        log::trace!("using charset {} from Content-Type", charset);
        charset
    } else if let Some(charset) = charset_override {
        log::trace!("using requested charset {}", charset);
        charset
    } else {
        DEFAULT_CHARSET
    }
}

/// Decode each of the given body chunks as text in the given charset, and
/// concatenate the results in order.
///
/// Chunks are decoded independently, so a character whose encoding is split
/// across two chunks is reported as malformed.
///
/// # Errors
///
/// [`Error::UnsupportedCharset`](enum.Error.html#variant.UnsupportedCharset)
/// is returned if the charset is not recognized, and
/// [`Error::BadTextEncoding`](enum.Error.html#variant.BadTextEncoding) is
/// returned if any chunk is not valid text in the charset.
pub fn decode_chunks<I>(
    chunks: I,
    charset: &str,
) -> Result<String, Error>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let encoding = Encoding::for_label(charset.trim().as_bytes())
        .ok_or_else(|| Error::UnsupportedCharset(charset.into()))?;
    chunks.into_iter().try_fold(String::new(), |mut text, chunk| {
        let chunk = chunk.as_ref();
        let decoded = encoding
            .decode_without_bom_handling_and_without_replacement(chunk)
            .ok_or_else(|| Error::BadTextEncoding {
                charset: encoding.name(),
                chunk: chunk.to_vec(),
            })?;
        text.push_str(&decoded);
        Ok(text)
    })
}

/// Encode the given text with the
/// [`DEFAULT_CHARSET`](constant.DEFAULT_CHARSET.html).  Characters the
/// charset cannot represent become numeric character references.
#[must_use]
pub fn encode_default(text: &str) -> Vec<u8> {
    let encoding = Encoding::for_label(DEFAULT_CHARSET.as_bytes())
        .unwrap_or(encoding_rs::WINDOWS_1252);
    let (encoded, _, _) = encoding.encode(text);
    encoded.into_owned()
}
