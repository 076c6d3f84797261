use std::sync::Arc;

/// This is one fragment of a response body, as delivered by the transport.
/// The bytes are shared rather than copied when the chunk is cloned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BodyChunk(Arc<[u8]>);

impl BodyChunk {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl AsRef<[u8]> for BodyChunk {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for BodyChunk {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes.into())
    }
}

impl From<&[u8]> for BodyChunk {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.into())
    }
}

impl From<&str> for BodyChunk {
    fn from(text: &str) -> Self {
        Self(text.as_bytes().into())
    }
}

impl From<String> for BodyChunk {
    fn from(text: String) -> Self {
        Self::from(text.into_bytes())
    }
}

/// This reads the bytes of a sequence of body chunks, one after another,
/// without first gathering them into a single buffer.
///
/// A stream is read once, from the front, by a single reader.  Each caller
/// wanting the body as a stream should obtain a stream of its own.
#[derive(Clone, Debug)]
pub struct ChunkedByteStream {
    available: usize,
    byte_index: usize,
    chunk_index: usize,
    chunks: Arc<[BodyChunk]>,
}

impl ChunkedByteStream {
    /// Return the total number of bytes in all the chunks.  This does not
    /// decrease as bytes are read from the stream.
    #[must_use]
    pub fn available(&self) -> usize {
        self.available
    }

    #[must_use]
    pub fn new(chunks: Arc<[BodyChunk]>) -> Self {
        let available = chunks.iter().map(BodyChunk::len).sum();
        Self {
            available,
            byte_index: 0,
            chunk_index: 0,
            chunks,
        }
    }

    /// Return the next byte of the body, or `None` once every chunk has
    /// been read.  Empty chunks are passed over.
    pub fn read_byte(&mut self) -> Option<u8> {
        while let Some(chunk) = self.chunks.get(self.chunk_index) {
            if let Some(&byte) = chunk.as_bytes().get(self.byte_index) {
                self.byte_index += 1;
                return Some(byte);
            }
            self.chunk_index += 1;
            self.byte_index = 0;
        }
        None
    }
}

impl Iterator for ChunkedByteStream {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_byte()
    }
}

impl std::io::Read for ChunkedByteStream {
    fn read(
        &mut self,
        buf: &mut [u8],
    ) -> std::io::Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            let remainder = match self.chunks.get(self.chunk_index) {
                Some(chunk) => &chunk.as_bytes()[self.byte_index..],
                None => break,
            };
            if remainder.is_empty() {
                self.chunk_index += 1;
                self.byte_index = 0;
                continue;
            }
            let count = remainder.len().min(buf.len() - filled);
            buf[filled..filled+count].copy_from_slice(&remainder[..count]);
            filled += count;
            self.byte_index += count;
        }
        Ok(filled)
    }
}
