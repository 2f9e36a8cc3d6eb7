//! Rights statement normalization and validation.
//!
//! EDM requires `edm:rights` to point into one of two controlled vocabularies:
//! the Creative Commons licenses and the RightsStatements.org statements.
//!
//! [`normalize_statement`] canonicalizes the spellings found in the wild
//! (`https:`, the human-readable `/page/` path, ported CC 4.0 deeds), and
//! [`assert_valid_statement`] checks the canonical form against the
//! vocabularies.
//!
//! License tokens are matched by trying an explicit, ordered list in sequence.
//! More specific tokens precede their prefixes (`by-nc-sa` before `by-nc`
//! before `by`), so the reported license is the most specific one.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{EdmError, Result};

/// Creative Commons license tokens, most specific first.
pub const CREATIVE_COMMONS_LICENSES: &[&str] = &[
    "mark", "zero", "by-nc-sa", "by-nc-nd", "by-nd", "by-nc", "by-sa", "by",
];

/// RightsStatements.org statement tokens (lowercase), most specific first.
pub const RIGHTS_STATEMENTS_LICENSES: &[&str] = &[
    "inc-nc", "inc-edu", "inc-ruu", "inc-ow-eu", "inc", "noc-oklr", "noc-us", "noc-cr", "noc-nc",
    "nkc", "cne", "und",
];

/// One of the two rights vocabularies accepted by EDM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RightsVocabulary {
    /// `creativecommons.org`
    CreativeCommons,
    /// `rightsstatements.org`
    RightsStatements,
}

impl RightsVocabulary {
    /// Host name of the vocabulary.
    #[must_use]
    pub const fn host(self) -> &'static str {
        match self {
            Self::CreativeCommons => "creativecommons.org",
            Self::RightsStatements => "rightsstatements.org",
        }
    }

    /// The ordered license tokens of the vocabulary.
    #[must_use]
    pub const fn licenses(self) -> &'static [&'static str] {
        match self {
            Self::CreativeCommons => CREATIVE_COMMONS_LICENSES,
            Self::RightsStatements => RIGHTS_STATEMENTS_LICENSES,
        }
    }

    fn matchers(self) -> &'static [(&'static str, Regex)] {
        match self {
            Self::CreativeCommons => CREATIVE_COMMONS_MATCHERS.as_slice(),
            Self::RightsStatements => RIGHTS_STATEMENTS_MATCHERS.as_slice(),
        }
    }

    fn from_host(host: &str) -> Option<Self> {
        match host {
            "creativecommons.org" => Some(Self::CreativeCommons),
            "rightsstatements.org" => Some(Self::RightsStatements),
            _ => None,
        }
    }
}

impl fmt::Display for RightsVocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreativeCommons => write!(f, "creative commons licenses"),
            Self::RightsStatements => write!(f, "rights statements licenses"),
        }
    }
}

/// The outcome of a successful [`assert_valid_statement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RightsStatement {
    /// The vocabulary the URI belongs to.
    pub vocabulary: RightsVocabulary,
    /// The first license token (in list order) the path matched.
    pub license: &'static str,
}

lazy_static! {
    static ref SWITCH_PATTERN: Regex = Regex::new(
        r"^http://(?:www\.)?(?P<host>creativecommons\.org|rightsstatements\.org)(?P<path>.*)$"
    )
    .expect("valid switch pattern");
    static ref CREATIVE_COMMONS_MATCHERS: Vec<(&'static str, Regex)> =
        build_matchers(CREATIVE_COMMONS_LICENSES);
    static ref RIGHTS_STATEMENTS_MATCHERS: Vec<(&'static str, Regex)> =
        build_matchers(RIGHTS_STATEMENTS_LICENSES);
    static ref CC_VERSION_4_PATTERN: Regex =
        Regex::new(r"^(http://creativecommons\.org/licenses/)(.+)(/4\.0/)(.+)$")
            .expect("valid cc 4.0 pattern");
}

/// A license token matches when it directly follows a non-leading `/`.
fn build_matchers(tokens: &'static [&'static str]) -> Vec<(&'static str, Regex)> {
    tokens
        .iter()
        .map(|token| {
            let pattern = format!("^/.*/{}", regex::escape(token));
            (*token, Regex::new(&pattern).expect("valid license pattern"))
        })
        .collect()
}

/// Canonicalizes a rights statement URI.
///
/// - A leading `https:` (any case) becomes `http:`.
/// - `rightsstatements.org/page` becomes `rightsstatements.org/vocab`.
/// - Anything after the version of a Creative Commons 4.0 license (a deed
///   suffix like `deed.de` or a jurisdiction) is removed, since 4.0 has no
///   ported versions.
///
/// # Examples
///
/// ```ignore
/// use edmrs::rights::normalize_statement;
///
/// assert_eq!(
///     normalize_statement("https://creativecommons.org/licenses/by/4.0/deed.de"),
///     "http://creativecommons.org/licenses/by/4.0/"
/// );
/// ```
#[must_use]
pub fn normalize_statement(uri: &str) -> String {
    let uri = uri.trim();
    let mut normalized = if starts_with_ignore_case(uri, "https:") {
        format!("http:{}", &uri["https:".len()..])
    } else if starts_with_ignore_case(uri, "http:") {
        format!("http:{}", &uri["http:".len()..])
    } else {
        uri.to_string()
    };
    normalized = normalized.replace("rightsstatements.org/page", "rightsstatements.org/vocab");

    if CC_VERSION_4_PATTERN.is_match(&normalized) {
        normalized = CC_VERSION_4_PATTERN
            .replace(&normalized, "${1}${2}${3}")
            .into_owned();
    }
    normalized
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Checks a (normalized) rights statement URI against the known vocabularies.
///
/// The URI is lowercased, its host must be `creativecommons.org` or
/// `rightsstatements.org` (optionally with `www.`, over plain `http`), and its
/// path must contain one of the vocabulary's license tokens.
///
/// # Errors
///
/// Returns [`EdmError::Rights`] naming the URI and the vocabulary it failed
/// to match.
pub fn assert_valid_statement(uri: &str) -> Result<RightsStatement> {
    let lowered = uri.to_lowercase();
    let Some(caps) = SWITCH_PATTERN.captures(&lowered) else {
        return Err(EdmError::Rights(format!(
            "URI >{uri}< does neither match hostname >creativecommons.org< nor hostname >rightsstatements.org<."
        )));
    };

    let host = caps.name("host").map_or("", |m| m.as_str());
    let path = caps.name("path").map_or("", |m| m.as_str());
    let Some(vocabulary) = RightsVocabulary::from_host(host) else {
        return Err(EdmError::Rights(format!("URI >{uri}< has an unknown host.")));
    };

    vocabulary
        .matchers()
        .iter()
        .find(|(_, matcher)| matcher.is_match(path))
        .map(|(license, _)| RightsStatement {
            vocabulary,
            license: *license,
        })
        .ok_or_else(|| {
            EdmError::Rights(format!(
                "URI >{uri}< does not match any of the {vocabulary}."
            ))
        })
}

/// Normalizes a rights statement and validates the normalized form.
///
/// # Errors
///
/// Returns [`EdmError::Rights`] if the normalized URI is not a known statement.
pub fn normalize_and_validate(uri: &str) -> Result<String> {
    let normalized = normalize_statement(uri);
    assert_valid_statement(&normalized)?;
    Ok(normalized)
}
