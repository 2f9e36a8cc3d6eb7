//! The two atomic EDM value kinds.
//!
//! - [`Reference`]: a validated URI pointing at a resource or another entity
//! - [`Literal`]: text with an optional language tag and datatype
//! - [`Value`]: either of the two, for properties that accept both

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::error::Result;
use crate::rights::normalize_statement;
use crate::uri::{is_valid_uri, validate_uri};

/// A URI value.
///
/// The value is trimmed and checked with [`crate::uri::validate_uri`] on
/// construction; a `Reference` therefore always holds a valid URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Reference {
    value: String,
}

impl Reference {
    /// Creates a reference, validating the trimmed value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EdmError::InvalidRef`] if the value is not a valid URI.
    pub fn new(value: impl AsRef<str>) -> Result<Self> {
        let value = value.as_ref().trim();
        validate_uri(value)?;
        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Non-strict construction: `None` instead of an error for invalid URIs.
    #[must_use]
    pub fn try_new(value: impl AsRef<str>) -> Option<Self> {
        let value = value.as_ref().trim();
        is_valid_uri(value).then(|| Self {
            value: value.to_string(),
        })
    }

    /// Returns the URI.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consumes the reference, returning the URI.
    #[must_use]
    pub fn into_string(self) -> String {
        self.value
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for Reference {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

/// A text value.
///
/// Equality and hashing consider `(canonical_value, lang, datatype)`: a
/// literal flagged with `normalize` compares by its rights-normalized text
/// (see [`Literal::canonical_value`]), so `https://` and `deed.de` spellings
/// of the same statement are equal.
///
/// The type does not reject empty values; entity construction drops them.
#[derive(Debug, Clone, Serialize)]
pub struct Literal {
    value: String,
    lang: Option<String>,
    datatype: Option<String>,
    normalize: bool,
}

impl Literal {
    /// Creates a plain literal from the trimmed value.
    #[must_use]
    pub fn new(value: impl AsRef<str>) -> Self {
        Self {
            value: value.as_ref().trim().to_string(),
            lang: None,
            datatype: None,
            normalize: false,
        }
    }

    /// Creates a language-tagged literal.
    #[must_use]
    pub fn lang_tagged(value: impl AsRef<str>, lang: impl AsRef<str>) -> Self {
        Self::new(value).with_lang(Some(lang))
    }

    /// Creates a literal with a datatype IRI, e.g. `xsd:gYear`.
    #[must_use]
    pub fn typed(value: impl AsRef<str>, datatype: impl Into<String>) -> Self {
        Self::new(value).with_datatype(Some(datatype))
    }

    /// Sets the language tag; an empty or blank tag means no tag.
    #[must_use]
    pub fn with_lang<S: AsRef<str>>(mut self, lang: Option<S>) -> Self {
        self.lang = lang
            .map(|l| l.as_ref().trim().to_string())
            .filter(|l| !l.is_empty());
        self
    }

    /// Sets the datatype IRI; an empty datatype means none.
    #[must_use]
    pub fn with_datatype<S: Into<String>>(mut self, datatype: Option<S>) -> Self {
        self.datatype = datatype.map(Into::into).filter(|d| !d.is_empty());
        self
    }

    /// Marks the value for rights-style canonicalization.
    #[must_use]
    pub const fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Returns the text value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the language tag, if any.
    #[must_use]
    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    /// Returns the datatype IRI, if any.
    #[must_use]
    pub fn datatype(&self) -> Option<&str> {
        self.datatype.as_deref()
    }

    /// Returns the normalize flag.
    #[must_use]
    pub const fn normalize(&self) -> bool {
        self.normalize
    }

    /// Returns true if the value is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// The value used for comparisons: rights-normalized when flagged.
    #[must_use]
    pub fn canonical_value(&self) -> Cow<'_, str> {
        if self.normalize {
            Cow::Owned(normalize_statement(&self.value))
        } else {
            Cow::Borrowed(&self.value)
        }
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_value() == other.canonical_value()
            && self.lang == other.lang
            && self.datatype == other.datatype
    }
}

impl Eq for Literal {}

impl Hash for Literal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_value().hash(state);
        self.lang.hash(state);
        self.datatype.hash(state);
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.value)?;
        if let Some(lang) = &self.lang {
            write!(f, "@{lang}")?;
        } else if let Some(datatype) = &self.datatype {
            write!(f, "^^<{datatype}>")?;
        }
        Ok(())
    }
}

/// A property value: either a literal or a reference.
///
/// Serializes as the bare form of the wrapped value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// A text value.
    Literal(Literal),
    /// A URI value.
    Reference(Reference),
}

impl Value {
    /// Returns the literal, if this is one.
    #[must_use]
    pub const fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(lit) => Some(lit),
            Self::Reference(_) => None,
        }
    }

    /// Returns the reference, if this is one.
    #[must_use]
    pub const fn as_reference(&self) -> Option<&Reference> {
        match self {
            Self::Reference(r) => Some(r),
            Self::Literal(_) => None,
        }
    }

    /// Returns true if this is a literal.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// Returns true if this is a reference.
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        matches!(self, Self::Reference(_))
    }

    /// The literal text or the URI.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Literal(lit) => lit.value(),
            Self::Reference(r) => r.as_str(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(lit) => lit.fmt(f),
            Self::Reference(r) => write!(f, "<{r}>"),
        }
    }
}

impl From<Literal> for Value {
    fn from(lit: Literal) -> Self {
        Self::Literal(lit)
    }
}

impl From<Reference> for Value {
    fn from(r: Reference) -> Self {
        Self::Reference(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_trims_value() {
        let lit = Literal::new("  Example Value  ");
        assert_eq!(lit.value(), "Example Value");
    }

    #[test]
    fn test_literal_empty_lang_is_none() {
        let lit = Literal::new("x").with_lang(Some(""));
        assert_eq!(lit.lang(), None);
        let lit = Literal::lang_tagged("x", " de ");
        assert_eq!(lit.lang(), Some("de"));
    }

    #[test]
    fn test_literal_empty_value_allowed() {
        assert!(Literal::new("   ").is_empty());
    }

    #[test]
    fn test_reference_trims_and_validates() {
        let r = Reference::new("  https://example.com/resource  ").unwrap();
        assert_eq!(r.as_str(), "https://example.com/resource");
        assert!(Reference::new("/path/to/resource").is_err());
        assert!(Reference::try_new("#local").is_none());
        assert!(Reference::try_new("http://example.com/x").is_some());
    }

    #[test]
    fn test_literal_equality_ignores_normalize_flag() {
        let a = Literal::new("text").with_normalize(true);
        let b = Literal::new("text");
        assert_eq!(a, b);
        assert_ne!(Literal::lang_tagged("text", "en"), b);
        assert_ne!(Literal::typed("1885", crate::namespaces::XSD_STRING), Literal::new("1885"));
    }

    #[test]
    fn test_flagged_literal_compares_canonical_form() {
        use std::collections::HashSet;

        let flagged =
            Literal::new("https://creativecommons.org/licenses/by/4.0/deed.de").with_normalize(true);
        let canonical = Literal::new("http://creativecommons.org/licenses/by/4.0/");
        assert_eq!(flagged, canonical);
        assert_eq!(canonical, flagged);

        let set: HashSet<Literal> = [flagged, canonical].into_iter().collect();
        assert_eq!(set.len(), 1);

        assert_ne!(
            Literal::new("https://creativecommons.org/licenses/by/4.0/deed.de"),
            Literal::new("http://creativecommons.org/licenses/by/4.0/")
        );
    }

    #[test]
    fn test_canonical_value() {
        let lit = Literal::new("https://rightsstatements.org/page/InC/1.0/").with_normalize(true);
        assert_eq!(lit.canonical_value(), "http://rightsstatements.org/vocab/InC/1.0/");
        let plain = Literal::new("https://example.org/");
        assert_eq!(plain.canonical_value(), "https://example.org/");
    }

    #[test]
    fn test_value_accessors() {
        let v = Value::from(Literal::new("IMAGE"));
        assert!(v.is_literal());
        assert_eq!(v.text(), "IMAGE");
        assert!(v.as_reference().is_none());

        let v = Value::from(Reference::new("http://example.org/a").unwrap());
        assert!(v.is_reference());
        assert_eq!(v.to_string(), "<http://example.org/a>");
    }
}
