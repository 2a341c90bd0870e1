use std::borrow::Cow;
use url::Url;

/// Input accepted by [`crate::route::Route::matches`]
///
/// Either a raw string (a bare path such as `/user/42?tab=posts`, or an absolute
/// URL) or an already parsed [`Url`]. Only the path component takes part in
/// matching.
#[derive(Debug, Clone, Copy)]
pub enum Token<'a> {
    Raw(&'a str),
    Url(&'a Url),
}

impl<'a> Token<'a> {
    /// Percent-decoded path component
    ///
    /// Absolute URLs are parsed with [`Url`]; anything else is cut at the first
    /// `?` or `#`. A path that does not decode to valid UTF-8 is returned as-is.
    pub fn path(&self) -> Cow<'a, str> {
        match *self {
            Token::Url(url) => Cow::Owned(decode_owned(url.path())),
            Token::Raw(raw) => match Url::parse(raw) {
                Ok(url) if !url.cannot_be_a_base() => Cow::Owned(decode_owned(url.path())),
                _ => {
                    let end = raw.find(['?', '#']).unwrap_or(raw.len());
                    decode(&raw[..end])
                }
            },
        }
    }
}

fn decode(path: &str) -> Cow<'_, str> {
    urlencoding::decode(path).unwrap_or(Cow::Borrowed(path))
}

fn decode_owned(path: &str) -> String {
    decode(path).into_owned()
}

impl<'a> From<&'a str> for Token<'a> {
    fn from(raw: &'a str) -> Self {
        Token::Raw(raw)
    }
}

impl<'a> From<&'a String> for Token<'a> {
    fn from(raw: &'a String) -> Self {
        Token::Raw(raw.as_str())
    }
}

impl<'a> From<&'a Url> for Token<'a> {
    fn from(url: &'a Url) -> Self {
        Token::Url(url)
    }
}
