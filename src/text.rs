//! The string family.
//!
//! [`Text`] is an extended `String`. Its elements are `char`s, so the whole
//! functional surface of [`Extended`] works character by character, and
//! rebinding a `Text` (for example with `map`) produces a `Vec`.
//!
//! On top of that, `Text` adds splitting, joining and ASCII case folding.
//!
//! # Examples
//!
//! ```rust
//! use rebound::text::Text;
//!
//! let message = Text::from("hello brave world");
//! let words = message.split();
//! assert_eq!(words.len(), 3);
//!
//! let joined = Text::from(", ").join(&*words);
//! assert_eq!(joined, "hello, brave, world");
//! assert_eq!(joined.to_upper(), "HELLO, BRAVE, WORLD");
//! ```

use std::fmt;

use crate::containers::Vector;
use crate::extended::Extended;

/// An extended `String`.
pub type Text = Extended<String>;

impl Extended<String> {
    /// Splits on whitespace, returning the non-empty tokens in order.
    ///
    /// A text with no whitespace yields itself as the only token. This is
    /// [`split_tokens`](Self::split_tokens) with non-whitespace characters as
    /// the token class.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rebound::text::Text;
    ///
    /// let tokens = Text::from("A longer  message,\twith words").split();
    /// assert_eq!(tokens.into_inner(), ["A", "longer", "message,", "with", "words"]);
    /// assert_eq!(Text::from("word").split().into_inner(), ["word"]);
    /// ```
    #[must_use]
    pub fn split(&self) -> Vector<Self> {
        self.split_tokens(|character| !character.is_whitespace())
    }

    /// Splits on every occurrence of `delimiter`.
    ///
    /// Empty pieces between adjacent delimiters are kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rebound::text::Text;
    ///
    /// let fields = Text::from("a,,b").split_by(",");
    /// assert_eq!(fields.into_inner(), ["a", "", "b"]);
    /// ```
    #[must_use]
    pub fn split_by(&self, delimiter: &str) -> Vector<Self> {
        self.as_str().split(delimiter).map(Self::from).collect()
    }

    /// Splits on every character satisfying `predicate`, returning the
    /// non-empty pieces in order.
    #[must_use]
    pub fn split_matching<P>(&self, predicate: P) -> Vector<Self>
    where
        P: FnMut(char) -> bool,
    {
        self.as_str()
            .split(predicate)
            .filter(|piece| !piece.is_empty())
            .map(Self::from)
            .collect()
    }

    /// Returns the maximal runs of characters satisfying `is_token`, in order.
    ///
    /// Tokens are described by a character class; patterns spanning several
    /// characters are not supported.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rebound::text::Text;
    ///
    /// let text = Text::from("order 66, rows 12-14");
    /// let numbers = text.split_tokens(|character| character.is_ascii_digit());
    /// assert_eq!(numbers.into_inner(), ["66", "12", "14"]);
    /// ```
    #[must_use]
    pub fn split_tokens<P>(&self, mut is_token: P) -> Vector<Self>
    where
        P: FnMut(char) -> bool,
    {
        self.split_matching(|character| !is_token(character))
    }

    /// Joins `parts`, placing this text between each adjacent pair.
    ///
    /// Joining no parts yields an empty text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rebound::containers::ForwardList;
    /// use rebound::text::Text;
    ///
    /// let parts: ForwardList<Text> = ["hello", "world"].into_iter().map(Text::from).collect();
    /// assert_eq!(Text::from(", ").join(&parts), "hello, world");
    ///
    /// let none: ForwardList<Text> = ForwardList::default();
    /// assert_eq!(Text::from(", ").join(&none), "");
    /// ```
    #[must_use]
    pub fn join<I>(&self, parts: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut joined = String::new();
        for (index, part) in parts.into_iter().enumerate() {
            if index > 0 {
                joined.push_str(self);
            }
            joined.push_str(part.as_ref());
        }
        Self::from(joined)
    }

    /// Returns a copy with ASCII letters converted to lower case.
    ///
    /// Non-ASCII characters are left unchanged.
    #[must_use]
    pub fn to_lower(&self) -> Self {
        Self::from(self.to_ascii_lowercase())
    }

    /// Returns a copy with ASCII letters converted to upper case.
    ///
    /// Non-ASCII characters are left unchanged.
    #[must_use]
    pub fn to_upper(&self) -> Self {
        Self::from(self.to_ascii_uppercase())
    }
}

impl From<&str> for Extended<String> {
    #[inline]
    fn from(text: &str) -> Self {
        Self::from(String::from(text))
    }
}

impl AsRef<str> for Extended<String> {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Extended<String> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self)
    }
}

impl PartialEq<str> for Extended<String> {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Extended<String> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<Extended<String>> for str {
    #[inline]
    fn eq(&self, other: &Extended<String>) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<Extended<String>> for &str {
    #[inline]
    fn eq(&self, other: &Extended<String>) -> bool {
        *self == other.as_str()
    }
}
