use std::fmt;

use thiserror::Error;
use unic_char_property::EnumeratedCharProperty;
use unic_ucd_category::GeneralCategory;

/// Highest scalar value Unicode assigns.
pub const MAX_CODE_POINT: i64 = 0x10FFFF;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    #[error("code point {0} is outside 0..=0x10FFFF")]
    OutOfRange(i64),
}

/// Resolves an integer code point into something printable.
///
/// `dump_range` only needs the `Display` form of whatever comes back, which
/// keeps the Unicode database swappable in tests.
pub trait CodepointLookup {
    type Descriptor: fmt::Display;

    fn lookup(&self, point: i64) -> Result<Self::Descriptor, LookupError>;
}

/// Lookup backed by the `unicode_names2` name tables and the UCD general
/// category data from `unic`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeDatabase;

impl CodepointLookup for UnicodeDatabase {
    type Descriptor = Descriptor;

    fn lookup(&self, point: i64) -> Result<Descriptor, LookupError> {
        if !(0..=MAX_CODE_POINT).contains(&point) {
            return Err(LookupError::OutOfRange(point));
        }
        let code = u32::try_from(point).map_err(|_| LookupError::OutOfRange(point))?;
        Ok(Descriptor::from_code(code))
    }
}

/// Metadata for one code point. Surrogates have no `char`, so `ch` is only
/// set for scalar values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    code: u32,
    ch: Option<char>,
    category: GeneralCategory,
    name: Option<String>,
}

impl Descriptor {
    pub fn new(ch: char) -> Descriptor {
        Descriptor {
            code: ch as u32,
            ch: Some(ch),
            category: GeneralCategory::of(ch),
            name: unicode_names2::name(ch).map(|name| name.to_string()),
        }
    }

    /// `code` must not exceed 0x10FFFF; surrogates get category `Cs`.
    pub fn from_code(code: u32) -> Descriptor {
        match char::from_u32(code) {
            Some(ch) => Descriptor::new(ch),
            None => Descriptor {
                code,
                ch: None,
                category: GeneralCategory::Surrogate,
                name: None,
            },
        }
    }

    pub fn ch(&self) -> Option<char> {
        self.ch
    }

    pub fn code(&self) -> u32 {
        self.code
    }

    pub fn category(&self) -> GeneralCategory {
        self.category
    }

    /// The Unicode character name, if the database has one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The name, or a bracketed stand-in for code points without one.
    pub fn label(&self) -> &str {
        if let Some(name) = self.name() {
            return name;
        }

        match self.category {
            GeneralCategory::Control => "<control>",
            GeneralCategory::Surrogate => "<surrogate>",
            GeneralCategory::PrivateUse => "<private-use>",
            GeneralCategory::Unassigned => "<unassigned>",
            _ => "<unnamed>",
        }
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "U+{:04X}\t'", self.code)?;
        match self.ch {
            Some(ch) => write!(f, "{}", ch.escape_debug())?,
            None => write!(f, "\\u{{{:x}}}", self.code)?,
        }
        write!(f, "'\t{}\t{}", self.category.abbr_name(), self.label())
    }
}
