/// This holds what the transport learned from the status line of an HTTP
/// response, along with the URI of the resource which was requested.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Status {
    pub status_code: usize,
    pub reason_phrase: String,
    pub uri: String,
}

impl Status {
    #[must_use]
    pub fn new<R, U>(
        status_code: usize,
        reason_phrase: R,
        uri: U,
    ) -> Self
    where
        R: Into<String>,
        U: Into<String>,
    {
        Self {
            status_code,
            reason_phrase: reason_phrase.into(),
            uri: uri.into(),
        }
    }

    /// Return whether or not the status code is in the redirection class.
    #[must_use]
    pub fn is_redirection(&self) -> bool {
        (300..=399).contains(&self.status_code)
    }
}
