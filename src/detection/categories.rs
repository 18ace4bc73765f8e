//! Category registry for PII detection
//!
//! The category set is closed: every detector and the redactor share
//! [`Category`], and the pattern library cannot register anything outside it.
//! Each category owns at most one canonical detection pattern and one
//! redaction tag.

use crate::domain::{Result, VeilError};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// PII category enumeration
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Email,
    Phone,
    Ssn,
    CreditCard,
    ExpirationDate,
    Cvv,
    DriversLicense,
    Names,
    Dates,
    Addresses,
    SensitiveWords,
    Ipv4,
    Ipv6,
}

impl Category {
    /// Every registered category, in report order
    pub const ALL: [Category; 13] = [
        Self::Email,
        Self::Phone,
        Self::Ssn,
        Self::CreditCard,
        Self::ExpirationDate,
        Self::Cvv,
        Self::DriversLicense,
        Self::Names,
        Self::Dates,
        Self::Addresses,
        Self::SensitiveWords,
        Self::Ipv4,
        Self::Ipv6,
    ];

    /// Stable label used in reports and pattern library files
    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "EMAIL",
            Self::Phone => "PHONE",
            Self::Ssn => "SSN",
            Self::CreditCard => "CREDIT_CARD",
            Self::ExpirationDate => "EXPIRATION_DATE",
            Self::Cvv => "CVV",
            Self::DriversLicense => "DRIVERS_LICENSE",
            Self::Names => "NAMES",
            Self::Dates => "DATES",
            Self::Addresses => "ADDRESSES",
            Self::SensitiveWords => "SENSITIVE_WORDS",
            Self::Ipv4 => "IPV4",
            Self::Ipv6 => "IPV6",
        }
    }

    /// Fixed per-category replacement tag for generic redaction
    pub fn redaction_tag(&self) -> &'static str {
        match self {
            Self::Email => "[REDACTED_EMAIL]",
            Self::Phone => "[REDACTED_PHONE]",
            Self::Ssn => "[REDACTED_SSN]",
            Self::CreditCard => "[REDACTED_CREDIT_CARD]",
            Self::ExpirationDate => "[REDACTED_EXP_DATE]",
            Self::Cvv => "[REDACTED_CVV]",
            Self::DriversLicense => "[REDACTED_DL]",
            Self::Names => "[REDACTED_NAME]",
            Self::Dates => "[REDACTED_DATE]",
            Self::Addresses => "[REDACTED_ADDRESS]",
            Self::SensitiveWords => "[REDACTED_ORG]",
            Self::Ipv4 => "[REDACTED_IP]",
            Self::Ipv6 => "[REDACTED_IPV6]",
        }
    }

    /// Parse a label as used in the pattern library
    pub fn parse_label(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "EMAIL" => Ok(Self::Email),
            "PHONE" => Ok(Self::Phone),
            "SSN" => Ok(Self::Ssn),
            "CREDIT_CARD" => Ok(Self::CreditCard),
            "EXPIRATION_DATE" => Ok(Self::ExpirationDate),
            "CVV" => Ok(Self::Cvv),
            "DRIVERS_LICENSE" => Ok(Self::DriversLicense),
            "NAMES" => Ok(Self::Names),
            "DATES" => Ok(Self::Dates),
            "ADDRESSES" => Ok(Self::Addresses),
            "SENSITIVE_WORDS" => Ok(Self::SensitiveWords),
            "IPV4" => Ok(Self::Ipv4),
            "IPV6" => Ok(Self::Ipv6),
            other => Err(VeilError::PatternLibrary(format!(
                "Unknown PII category: {other}"
            ))),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pattern library entry as declared in TOML
#[derive(Debug, Deserialize)]
struct PatternDefinition {
    category: String,
    pattern: String,
    #[serde(default)]
    keywords: Vec<String>,
}

/// Pattern library container
#[derive(Debug, Deserialize)]
struct PatternLibrary {
    categories: Vec<PatternDefinition>,
}

/// Proximity trigger keyword with its compiled whole-word matcher
#[derive(Debug, Clone)]
pub struct TriggerKeyword {
    pub text: String,
    word: Regex,
}

impl TriggerKeyword {
    /// Whole-word, case-insensitive containment check
    pub fn is_present(&self, window: &str) -> bool {
        self.word.is_match(window)
    }
}

/// Compiled category entry
#[derive(Debug, Clone)]
pub struct CategoryEntry {
    pub category: Category,
    /// Canonical pattern, compiled as declared
    pub regex: Regex,
    /// Case-insensitive compilation of the same pattern, used by the
    /// proximity analyzer and the redaction passes
    pub regex_ci: Regex,
    /// Proximity trigger keywords; empty when the category is not
    /// proximity-scanned
    pub keywords: Vec<TriggerKeyword>,
}

/// Registry of canonical category patterns
///
/// Entry order follows the library file and is the order redaction passes
/// apply their replacements in.
pub struct CategoryRegistry {
    entries: Vec<CategoryEntry>,
}

/// Classification order for correlated values (shape re-derivation)
const CLASSIFY_ORDER: [Category; 5] = [
    Category::Email,
    Category::Phone,
    Category::Ssn,
    Category::CreditCard,
    Category::Ipv4,
];

impl CategoryRegistry {
    /// Create a registry from the embedded pattern library
    pub fn builtin() -> Result<Self> {
        Self::from_toml(include_str!("../../patterns/pii_patterns.toml"))
    }

    /// Create a registry from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            VeilError::PatternLibrary(format!(
                "Failed to read pattern library {}: {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_toml(&content)
    }

    /// Create a registry from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: PatternLibrary = toml::from_str(content)
            .map_err(|e| VeilError::PatternLibrary(format!("Invalid pattern library TOML: {e}")))?;

        let mut seen: HashSet<Category> = HashSet::new();
        let mut entries = Vec::with_capacity(library.categories.len());

        for def in &library.categories {
            let category = Category::parse_label(&def.category)?;
            if !seen.insert(category) {
                return Err(VeilError::PatternLibrary(format!(
                    "Category {category} declared more than once"
                )));
            }

            let regex = Regex::new(&def.pattern).map_err(|e| {
                VeilError::PatternLibrary(format!("Invalid pattern for {category}: {e}"))
            })?;
            let regex_ci = RegexBuilder::new(&def.pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| {
                    VeilError::PatternLibrary(format!("Invalid pattern for {category}: {e}"))
                })?;

            let keywords = def
                .keywords
                .iter()
                .map(|kw| {
                    let word = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(kw)))
                        .case_insensitive(true)
                        .build()
                        .map_err(|e| {
                            VeilError::PatternLibrary(format!(
                                "Invalid keyword '{kw}' for {category}: {e}"
                            ))
                        })?;
                    Ok(TriggerKeyword {
                        text: kw.clone(),
                        word,
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            entries.push(CategoryEntry {
                category,
                regex,
                regex_ci,
                keywords,
            });
        }

        Ok(Self { entries })
    }

    /// All compiled entries, in library order
    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    /// Entry for a specific category, if it owns a pattern
    pub fn get(&self, category: Category) -> Option<&CategoryEntry> {
        self.entries.iter().find(|e| e.category == category)
    }

    /// Entries that participate in proximity analysis
    pub fn proximity_entries(&self) -> impl Iterator<Item = &CategoryEntry> {
        self.entries.iter().filter(|e| !e.keywords.is_empty())
    }

    /// Re-derive a category from a value's own shape
    ///
    /// Matches must start at the beginning of the value. Values that fit no
    /// canonical pattern return `None` and are dropped by the correlation
    /// detector.
    pub fn classify(&self, value: &str) -> Option<Category> {
        for category in CLASSIFY_ORDER {
            if let Some(entry) = self.get(category) {
                if entry.regex.find(value).is_some_and(|m| m.start() == 0) {
                    return Some(category);
                }
            }
        }
        None
    }
}
