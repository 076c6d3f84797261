use super::{
    body_stream::{
        BodyChunk,
        ChunkedByteStream,
    },
    coding,
    cookie::{
        self,
        Cookie,
    },
    error::Error,
    headers::HeaderCollection,
    status::Status,
};
use once_cell::sync::OnceCell;
use rhymuri::Uri;
use std::sync::Arc;

/// This is a read-only view of a complete HTTP response, put together from
/// the status, headers, and body chunks which the transport received.
///
/// The body text and the cookies are worked out the first time they are
/// asked for, and kept from then on.  A `Response` may be shared between
/// threads; if several ask for the body text at the same time, it is still
/// only decoded once, and every one of them sees the same text.
#[derive(Debug)]
pub struct Response {
    body: OnceCell<String>,
    chunks: Option<Arc<[BodyChunk]>>,
    cookies: OnceCell<Vec<Cookie>>,
    headers: Option<HeaderCollection>,
    status: Option<Status>,
}

impl Response {
    /// Return the body as text.  See
    /// [`body_with_charset`](#method.body_with_charset) for how the charset
    /// is chosen.
    pub fn body(&self) -> Result<&str, Error> {
        self.materialize(None)
    }

    /// Return the first `max_length` characters of the body as text, or all
    /// of it if it is shorter than that.
    pub fn body_excerpt(
        &self,
        max_length: usize,
    ) -> Result<&str, Error> {
        self.body().map(|body| excerpt(body, max_length))
    }

    /// Return the first `max_length` characters of the body as text, or all
    /// of it if it is shorter than that.  The given charset is used as in
    /// [`body_with_charset`](#method.body_with_charset).
    pub fn body_excerpt_with_charset<C>(
        &self,
        max_length: usize,
        charset: C,
    ) -> Result<&str, Error>
    where
        C: AsRef<str>,
    {
        self.body_with_charset(charset)
            .map(|body| excerpt(body, max_length))
    }

    /// Return a stream of the bytes of the body.
    ///
    /// If the body has not yet been decoded as text, the stream reads the
    /// body chunks directly.  Otherwise it reads the decoded text, encoded
    /// again with the [`DEFAULT_CHARSET`](coding/constant.DEFAULT_CHARSET.html).
    pub fn body_stream(&self) -> Result<ChunkedByteStream, Error> {
        let chunks = self.chunks()?;
        if let Some(body) = self.body.get() {
            log::trace!("streaming re-encoded response body");
            let encoded = BodyChunk::from(coding::encode_default(body));
            Ok(ChunkedByteStream::new(vec![encoded].into()))
        } else {
            log::trace!("streaming {} response body chunk(s)", chunks.len());
            Ok(ChunkedByteStream::new(Arc::clone(chunks)))
        }
    }

    /// Return the body as text.
    ///
    /// The charset used to decode the body is the one named by the
    /// `Content-Type` header, if any, or else the given charset.  The headers
    /// must have been received, so that `Content-Type` can be consulted.  The body
    /// is only decoded the first time any body text is asked for; after
    /// that the same text is returned no matter which charset is given.
    pub fn body_with_charset<C>(
        &self,
        charset: C,
    ) -> Result<&str, Error>
    where
        C: AsRef<str>,
    {
        self.materialize(Some(charset.as_ref()))
    }

    fn chunks(&self) -> Result<&Arc<[BodyChunk]>, Error> {
        self.chunks.as_ref()
            .filter(|chunks| !chunks.is_empty())
            .ok_or(Error::BodyNotComputed)
    }

    /// Return the first value of the `Content-Type` header, if any.
    pub fn content_type(&self) -> Result<Option<&str>, Error> {
        self.header("Content-Type")
    }

    /// Return the cookies set by the `Set-Cookie` headers, in the order
    /// the headers appear.
    pub fn cookies(&self) -> Result<&[Cookie], Error> {
        let headers = self.headers()?;
        self.cookies
            .get_or_try_init(|| cookie::parse_cookies(headers))
            .map(Vec::as_slice)
    }

    /// Put together a response in which the status, headers, and body were
    /// all received.
    #[must_use]
    pub fn from_parts<I>(
        status: Status,
        headers: HeaderCollection,
        chunks: I,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<BodyChunk>,
    {
        Self::new(
            Some(status),
            Some(headers),
            Some(chunks.into_iter().map(Into::into).collect()),
        )
    }

    #[must_use]
    pub fn has_body(&self) -> bool {
        self.chunks().is_ok()
    }

    #[must_use]
    pub fn has_headers(&self) -> bool {
        self.headers.is_some()
    }

    #[must_use]
    pub fn has_status(&self) -> bool {
        self.status.is_some()
    }

    /// Return the first value of the header with the given name, if any.
    pub fn header<T>(
        &self,
        name: T,
    ) -> Result<Option<&str>, Error>
    where
        T: AsRef<str>,
    {
        Ok(self.headers()?.header_value(name))
    }

    /// Return all the values of the header with the given name.
    pub fn header_multi_value<T>(
        &self,
        name: T,
    ) -> Result<Vec<String>, Error>
    where
        T: AsRef<str>,
    {
        Ok(self.headers()?.header_multi_value(name))
    }

    pub fn headers(&self) -> Result<&HeaderCollection, Error> {
        self.headers.as_ref().ok_or(Error::HeadersUnavailable)
    }

    /// Return whether or not the status code is in the range of
    /// redirections (300-399).
    pub fn is_redirected(&self) -> Result<bool, Error> {
        self.status().map(Status::is_redirection)
    }

    fn materialize(
        &self,
        charset: Option<&str>,
    ) -> Result<&str, Error> {
        let content_type = self.content_type()?;
        let chunks = self.chunks()?;
        self.body
            .get_or_try_init(|| -> Result<String, Error> {
                let charset = coding::resolve_charset(content_type, charset);
                let body = coding::decode_chunks(chunks.iter(), charset)?;
                log::debug!(
                    "decoded {} byte response body from {} chunk(s) as {}",
                    chunks.iter().map(BodyChunk::len).sum::<usize>(),
                    chunks.len(),
                    charset
                );
                Ok(body)
            })
            .map(String::as_str)
    }

    /// Put together a response from whatever the transport received.  Any
    /// part which was never received is given as `None`.
    #[must_use]
    pub fn new(
        status: Option<Status>,
        headers: Option<HeaderCollection>,
        chunks: Option<Vec<BodyChunk>>,
    ) -> Self {
        Self {
            body: OnceCell::new(),
            chunks: chunks.map(Into::into),
            cookies: OnceCell::new(),
            headers,
            status,
        }
    }

    fn status(&self) -> Result<&Status, Error> {
        self.status.as_ref().ok_or(Error::StatusUnavailable)
    }

    pub fn status_code(&self) -> Result<usize, Error> {
        self.status().map(|status| status.status_code)
    }

    pub fn status_text(&self) -> Result<&str, Error> {
        self.status().map(|status| status.reason_phrase.as_str())
    }

    /// Return the URI of the resource which was requested.
    pub fn uri(&self) -> Result<Uri, Error> {
        Ok(Uri::parse(self.status()?.uri.as_str())?)
    }
}

fn excerpt(
    text: &str,
    max_length: usize,
) -> &str {
    match text.char_indices().nth(max_length) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
