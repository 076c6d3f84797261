/// This is the enumeration of all the different kinds of errors which this
/// crate generates.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The attached bytes of a body chunk are not valid text in the
    /// attached charset.
    #[error("body chunk is not valid {charset} text")]
    BadTextEncoding {
        charset: &'static str,
        chunk: Vec<u8>,
    },

    /// A body accessor was used, but no body chunks were ever supplied, or
    /// the sequence of chunks supplied was empty.
    #[error("response body has not been computed")]
    BodyNotComputed,

    /// The first field of the attached `Set-Cookie` header value has no `=`
    /// separating the cookie name from its value.
    #[error("Set-Cookie value has no cookie value")]
    CookieMissingValue(String),

    /// A header accessor was used, but the response headers were never
    /// supplied.
    #[error("response headers have not been computed")]
    HeadersUnavailable,

    /// The attached `expires` attribute of a `Set-Cookie` header value is
    /// not an integer.
    #[error("invalid cookie expires attribute")]
    InvalidCookieExpires(String),

    /// The URI of the response status is not valid.
    #[error("invalid response URI")]
    MalformedUri(#[from] rhymuri::Error),

    /// A status accessor was used, but the response status was never
    /// supplied.
    #[error("response status has not been computed")]
    StatusUnavailable,

    /// The attached charset is not recognized as a text encoding.
    #[error("unsupported charset")]
    UnsupportedCharset(String),
}
