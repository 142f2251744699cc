// crates/citymatch-core/src/model.rs
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// Response envelope of `GET /api/cities/`, as it comes from the API:
/// {
///   "_embedded": {
///     "city:search-results": [ { "matching_full_name": "Berlin, Germany", ... } ]
///   },
///   "_links": { ... },
///   "count": 1
/// }
/// Only the keys needed to reach `matching_full_name` are modelled; serde
/// ignores the rest. Every modelled key is required.
#[derive(Debug, Deserialize)]
pub struct SearchResponseRaw {
    #[serde(rename = "_embedded")]
    pub embedded: EmbeddedRaw,
}

#[derive(Debug, Deserialize)]
pub struct EmbeddedRaw {
    #[serde(rename = "city:search-results")]
    pub results: Vec<SearchResultRaw>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResultRaw {
    pub matching_full_name: String,
}

impl From<SearchResponseRaw> for CityNames {
    fn from(raw: SearchResponseRaw) -> Self {
        raw.embedded
            .results
            .into_iter()
            .map(|r| r.matching_full_name)
            .collect()
    }
}

/// Matching city names, in the order the API returned them.
///
/// `Display` renders the list literal form used as the lookup's string
/// result:
///
/// ```rust
/// use citymatch_core::CityNames;
///
/// let names = CityNames::from(vec!["Berlin, Germany".to_string()]);
/// assert_eq!(names.to_string(), "['Berlin, Germany']");
/// assert_eq!(CityNames::default().to_string(), "[]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CityNames(Vec<String>);

impl CityNames {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for CityNames {
    fn from(v: Vec<String>) -> Self {
        CityNames(v)
    }
}

impl FromIterator<String> for CityNames {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        CityNames(iter.into_iter().collect())
    }
}

impl IntoIterator for CityNames {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CityNames {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for CityNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_quoted(f, name)?;
        }
        f.write_char(']')
    }
}

// Single quotes unless the text has a single quote and no double quote.
fn write_quoted<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    out.write_char(quote)?;
    for c in s.chars() {
        match c {
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            c if c == quote => {
                out.write_char('\\')?;
                out.write_char(c)?;
            }
            c if is_unprintable(c) => {
                let cp = c as u32;
                if cp < 0x100 {
                    write!(out, "\\x{cp:02x}")?;
                } else if cp < 0x1_0000 {
                    write!(out, "\\u{cp:04x}")?;
                } else {
                    write!(out, "\\U{cp:08x}")?;
                }
            }
            c => out.write_char(c)?,
        }
    }
    out.write_char(quote)
}

// Control (Cc), format (Cf), separators other than the ASCII space
// (Zs, Zl, Zp) and private-use code points are escaped, never written raw.
const UNPRINTABLE: &[(u32, u32)] = &[
    (0x0000, 0x001F),
    (0x007F, 0x00A0),
    (0x00AD, 0x00AD),
    (0x0600, 0x0605),
    (0x061C, 0x061C),
    (0x06DD, 0x06DD),
    (0x070F, 0x070F),
    (0x0890, 0x0891),
    (0x08E2, 0x08E2),
    (0x1680, 0x1680),
    (0x180E, 0x180E),
    (0x2000, 0x200F),
    (0x2028, 0x202F),
    (0x205F, 0x2064),
    (0x2066, 0x206F),
    (0x3000, 0x3000),
    (0xE000, 0xF8FF),
    (0xFEFF, 0xFEFF),
    (0xFFF9, 0xFFFB),
    (0x110BD, 0x110BD),
    (0x110CD, 0x110CD),
    (0x13430, 0x1343F),
    (0x1BCA0, 0x1BCA3),
    (0x1D173, 0x1D17A),
    (0xE0001, 0xE0001),
    (0xE0020, 0xE007F),
    (0xF0000, 0xFFFFD),
    (0x100000, 0x10FFFD),
];

fn is_unprintable(c: char) -> bool {
    let cp = c as u32;
    UNPRINTABLE
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                std::cmp::Ordering::Less
            } else if lo > cp {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}
