//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (e.g., positive identifiers,
//! normalized/validated email, URL-safe slugs) so that once a value reaches the
//! domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{ValidateEmail, ValidateUrl};

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided number is zero or negative.
    #[error("value must be greater than zero")]
    NonPositive,
    /// Provided number is negative.
    #[error("value must not be negative")]
    Negative,
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// Provided slug contains characters that are not URL-safe.
    #[error("invalid slug")]
    InvalidSlug,
    /// Provided url failed format validation.
    #[error("invalid url address")]
    InvalidUrl,
}

/// Normalizes and validates an email string.
fn normalize_email<S: Into<String>>(email: S) -> Result<String, TypeConstraintError> {
    let normalized = email.into().trim().to_lowercase();
    if normalized.validate_email() {
        Ok(normalized)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
}

/// Macro to generate lightweight newtypes for strictly positive integers.
macro_rules! positive_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(try_from = "i32", into = "i32")]
        pub struct $name(i32);

        impl $name {
            /// Creates a new value ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositive)
                }
            }

            /// Returns the raw `i32` backing this value.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

positive_newtype!(ProductId, "Unique identifier for a product.");
positive_newtype!(LeadId, "Unique identifier for a captured lead.");
positive_newtype!(CapacityGb, "Module capacity in gigabytes.");
positive_newtype!(SpeedMt, "Module transfer rate in MT/s.");
positive_newtype!(
    OrderQuantity,
    "Number of units requested in an order or quote."
);

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let inner = NonEmptyString::new(value)?;
                Ok(Self(inner.into_inner()))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(ProductName, "Product display name.");
non_empty_string_newtype!(Manufacturer, "Free-text manufacturer name.");
non_empty_string_newtype!(CompanyName, "Company submitting a lead.");
non_empty_string_newtype!(ContactName, "Person submitting a lead.");

/// Lower-cased and validated email address of a lead.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct LeadEmail(String);

impl LeadEmail {
    /// Validates and normalizes an email string.
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let normalized = normalize_email(email)?;
        Ok(Self(normalized))
    }

    /// Borrow the email as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LeadEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for LeadEmail {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LeadEmail> for String {
    fn from(value: LeadEmail) -> Self {
        value.0
    }
}

/// Lead message, sanitized of markup and required to be non-empty.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct LeadMessage(String);

impl LeadMessage {
    /// Constructs a sanitized, trimmed, non-empty value.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let sanitized = ammonia::clean(&value.into());
        let inner = NonEmptyString::new(sanitized)?;
        Ok(Self(inner.into_inner()))
    }

    /// Borrow the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LeadMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for LeadMessage {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LeadMessage> for String {
    fn from(value: LeadMessage) -> Self {
        value.0
    }
}

/// Characters kept verbatim when deriving a slug: ASCII alphanumerics, kana and
/// common CJK ideographs.
fn is_slug_char(c: char) -> bool {
    c.is_ascii_lowercase()
        || c.is_ascii_digit()
        || ('\u{3040}'..='\u{309f}').contains(&c)
        || ('\u{30a0}'..='\u{30ff}').contains(&c)
        || ('\u{4e00}'..='\u{9faf}').contains(&c)
}

/// URL-safe product slug, unique across the catalog.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ProductSlug(String);

impl ProductSlug {
    /// Accepts a trimmed slug made of slug characters separated by `-`.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let inner = NonEmptyString::new(value)?.into_inner();
        let valid = inner.chars().all(|c| c == '-' || is_slug_char(c))
            && !inner.starts_with('-')
            && !inner.ends_with('-');
        if valid {
            Ok(Self(inner))
        } else {
            Err(TypeConstraintError::InvalidSlug)
        }
    }

    /// Derives a slug from a display name.
    ///
    /// The name is lower-cased, every run of characters that are not slug
    /// characters collapses into a single `-`, and leading or trailing dashes
    /// are removed. Fails when nothing usable remains.
    pub fn from_name(name: &str) -> Result<Self, TypeConstraintError> {
        let mut slug = String::with_capacity(name.len());
        let mut pending_dash = false;
        for c in name.to_lowercase().chars() {
            if is_slug_char(c) {
                if pending_dash && !slug.is_empty() {
                    slug.push('-');
                }
                pending_dash = false;
                slug.push(c);
            } else {
                pending_dash = true;
            }
        }
        Self::new(slug)
    }

    /// Returns a copy with `-{suffix}` appended.
    pub fn with_suffix(&self, suffix: impl Display) -> Result<Self, TypeConstraintError> {
        Self::new(format!("{}-{suffix}", self.0))
    }

    /// Borrow the slug.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProductSlug {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ProductSlug {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ProductSlug {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductSlug> for String {
    fn from(value: ProductSlug) -> Self {
        value.0
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
/// Non-empty, trimmed absolute URL (datasheets, images).
pub struct ResourceUrl(String);

impl ResourceUrl {
    /// Ensures a trimmed URL is non-empty and well formed before wrapping.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let url = NonEmptyString::new(value)?;

        if !url.as_str().validate_url() {
            Err(TypeConstraintError::InvalidUrl)
        } else {
            Ok(Self(url.into_inner()))
        }
    }

    /// Borrow the URL.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ResourceUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ResourceUrl {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ResourceUrl> for String {
    fn from(value: ResourceUrl) -> Self {
        value.0
    }
}

/// Ensures a count-like value is zero or greater.
pub fn non_negative(value: i32) -> Result<i32, TypeConstraintError> {
    if value < 0 {
        Err(TypeConstraintError::Negative)
    } else {
        Ok(value)
    }
}
