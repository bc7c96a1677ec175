use std::collections::BTreeSet;

/// How a multi-character delimiter such as `"::"` is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitMode {
    /// Every character of every delimiter is a separator on its own.
    #[default]
    Characters,
    /// Each delimiter only matches as a whole; the longest one wins.
    Delimiters,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Matcher {
    Characters(BTreeSet<char>),
    Delimiters(Vec<String>),
}

/// A set of delimiters, prepared once and applied to any number of
/// sources.
///
/// Runs of adjacent delimiters collapse into one split point and empty
/// tokens are discarded, so the output never contains `""`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splitter {
    matcher: Matcher,
}

impl Splitter {
    pub fn new<I>(delimiters: I, mode: SplitMode) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let delimiters = delimiters.into_iter();
        let matcher = match mode {
            SplitMode::Characters => Matcher::Characters(
                delimiters
                    .flat_map(|delimiter| {
                        delimiter.as_ref().chars().collect::<Vec<_>>()
                    })
                    .collect(),
            ),
            SplitMode::Delimiters => {
                let mut delimiters = delimiters
                    .map(|delimiter| delimiter.as_ref().to_owned())
                    .filter(|delimiter| !delimiter.is_empty())
                    .collect::<Vec<_>>();
                delimiters
                    .sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
                delimiters.dedup();
                Matcher::Delimiters(delimiters)
            }
        };
        Self { matcher }
    }

    pub fn mode(&self) -> SplitMode {
        match self.matcher {
            Matcher::Characters(_) => SplitMode::Characters,
            Matcher::Delimiters(_) => SplitMode::Delimiters,
        }
    }

    pub fn split<'a>(&self, source: &'a str) -> Vec<&'a str> {
        match &self.matcher {
            Matcher::Characters(characters) => source
                .split(|c: char| characters.contains(&c))
                .filter(|token| !token.is_empty())
                .collect(),
            Matcher::Delimiters(delimiters) => {
                split_on_substrings(source, delimiters)
            }
        }
    }
}

fn split_on_substrings<'a>(
    source: &'a str,
    delimiters: &[String],
) -> Vec<&'a str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut position = 0;
    while let Some(c) = source[position..].chars().next() {
        let rest = &source[position..];
        match delimiters
            .iter()
            .find(|delimiter| rest.starts_with(delimiter.as_str()))
        {
            Some(delimiter) => {
                tokens.push(&source[start..position]);
                position += delimiter.len();
                start = position;
            }
            None => position += c.len_utf8(),
        }
    }
    tokens.push(&source[start..]);
    tokens.retain(|token| !token.is_empty());
    tokens
}

/// Splits `source` wherever one or more characters drawn from any of the
/// `delimiters` appear, keeping the non-empty pieces in order.
///
/// ```
/// let tokens = methodsig::split::by_delimiters("a,b;;c  d", [",", ";", " "]);
/// assert_eq!(tokens, ["a", "b", "c", "d"]);
/// ```
pub fn by_delimiters<I>(source: &str, delimiters: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Splitter::new(delimiters, SplitMode::Characters)
        .split(source)
        .into_iter()
        .map(ToOwned::to_owned)
        .collect()
}
