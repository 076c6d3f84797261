use rhymessage::{
    Header,
    MessageHeaders,
};

/// This holds the headers of an HTTP response, as the transport received
/// them.  Header names are compared without regard to case.  A header which
/// appears more than once keeps all of its values, in the order they were
/// added, and distinct names are reported in the order each first appeared.
#[derive(Clone, Debug, Default)]
pub struct HeaderCollection(MessageHeaders);

impl HeaderCollection {
    /// Add a value for the header with the given name.  If the header already
    /// has values, the new value is placed after them.
    pub fn add_header<N, V>(
        &mut self,
        name: N,
        value: V,
    ) where
        N: AsRef<str>,
        V: Into<String>,
    {
        self.0.add_header(Header {
            name: name.as_ref().into(),
            value: value.into(),
        });
    }

    #[must_use]
    pub fn has_header<T>(
        &self,
        name: T,
    ) -> bool
    where
        T: AsRef<str>,
    {
        self.0.has_header(name)
    }

    /// Return the first value of the header with the given name, if any.
    /// Unlike `MessageHeaders::header_value`, later values of a repeated
    /// header are not joined onto it.
    #[must_use]
    pub fn header_value<T>(
        &self,
        name: T,
    ) -> Option<&str>
    where
        T: AsRef<str>,
    {
        let name = name.as_ref();
        self.0.headers()
            .iter()
            .find(|header| header.name == name)
            .map(|header| header.value.as_str())
    }

    /// Return all the values of the header with the given name, which is
    /// empty if the header is not present.
    #[must_use]
    pub fn header_multi_value<T>(
        &self,
        name: T,
    ) -> Vec<String>
    where
        T: AsRef<str>,
    {
        self.0.header_multi_value(name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.headers().is_empty()
    }

    /// Iterate over each distinct header name, spelled as it first appeared,
    /// along with all of its values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Vec<&str>)> {
        let headers = self.0.headers();
        headers.iter()
            .enumerate()
            .filter(move |(index, header)| {
                !headers[..*index].iter().any(|earlier| earlier.name == header.name)
            })
            .map(move |(_, header)| (
                header.name.as_ref(),
                headers.iter()
                    .filter(|other| other.name == header.name)
                    .map(|other| other.value.as_str())
                    .collect(),
            ))
    }

    /// Return the number of distinct header names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[must_use]
    pub fn message_headers(&self) -> &MessageHeaders {
        &self.0
    }

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl From<MessageHeaders> for HeaderCollection {
    fn from(headers: MessageHeaders) -> Self {
        Self(headers)
    }
}

impl<N, V> std::iter::FromIterator<(N, V)> for HeaderCollection
where
    N: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
    {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.add_header(name, value);
        }
        headers
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let mut headers = HeaderCollection::new();
        headers.add_header("Content-Type", "text/plain");
        assert!(headers.has_header("content-type"));
        assert!(headers.has_header("CONTENT-TYPE"));
        assert_eq!(Some("text/plain"), headers.header_value("cOnTeNt-TyPe"));
        assert!(!headers.has_header("Content-Length"));
        assert_eq!(None, headers.header_value("Content-Length"));
    }

    #[test]
    fn repeated_header_keeps_all_values_in_order() {
        let headers: HeaderCollection = vec![
            ("Set-Cookie", "a=1"),
            ("Date", "Mon, 27 Jul 2009 12:28:53 GMT"),
            ("set-cookie", "b=2"),
        ].into_iter().collect();
        assert_eq!(2, headers.len());
        assert_eq!(Some("a=1"), headers.header_value("Set-Cookie"));
        assert_eq!(
            vec!["a=1".to_string(), "b=2".to_string()],
            headers.header_multi_value("SET-COOKIE")
        );
    }

    #[test]
    fn iteration_groups_values_under_first_spelling_in_order() {
        let headers: HeaderCollection = vec![
            ("X-Foo", "Bar"),
            ("Accept-Ranges", "bytes"),
            ("x-foo", "Baz"),
        ].into_iter().collect();
        assert_eq!(
            vec![
                ("X-Foo", vec!["Bar", "Baz"]),
                ("Accept-Ranges", vec!["bytes"]),
            ],
            headers.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn missing_header_has_no_values() {
        let headers = HeaderCollection::new();
        assert!(headers.is_empty());
        assert_eq!(0, headers.len());
        assert!(headers.header_multi_value("X-Foo").is_empty());
    }

    #[test]
    fn from_parsed_message_headers() {
        let mut message_headers = MessageHeaders::new();
        message_headers.parse(concat!(
            "Content-Type: text/plain; charset=utf-8\r\n",
            "Set-Cookie: a=1\r\n",
            "Set-Cookie: b=2\r\n",
            "\r\n",
        )).unwrap();
        let headers = HeaderCollection::from(message_headers);
        assert_eq!(
            Some("text/plain; charset=utf-8"),
            headers.header_value("content-type")
        );
        assert_eq!(Some("a=1"), headers.header_value("Set-Cookie"));
        assert_eq!(3, headers.message_headers().headers().len());
    }

}
