//! This crate puts together a read-only view of a complete Hypertext
//! Transfer Protocol (HTTP) response from the pieces a transport produces:
//! the status, the headers, and the body as a sequence of chunks.  From that
//! view the body can be had as text, as an excerpt of that text, or as a
//! stream of bytes, and the cookies set by the response can be parsed.

#![warn(clippy::pedantic)]
#![allow(clippy::non_ascii_literal)]

// TODO: Before publishing to crates.io, remove this and document the
// errors of each public function.
#![allow(clippy::missing_errors_doc)]

mod body_stream;
pub mod coding;
mod cookie;
mod error;
mod headers;
mod response;
mod status;

pub use crate::body_stream::{
    BodyChunk,
    ChunkedByteStream,
};
pub use crate::cookie::{
    parse_cookies,
    parse_set_cookie,
    Cookie,
    SESSION_MAX_AGE,
};
pub use crate::error::Error;
pub use crate::headers::HeaderCollection;
pub use crate::response::Response;
pub use crate::status::Status;

// This splits the given text at the first instance of the given delimiter,
// giving the text before and after it, or `None` if it isn't found.
fn split_at(
    composite: &str,
    delimiter: char,
) -> Option<(&str, &str)> {
    composite.find(delimiter).map(|delimiter| (
        &composite[..delimiter],
        &composite[delimiter+1..],
    ))
}
