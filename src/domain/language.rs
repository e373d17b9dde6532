use std::fmt;

use serde::Deserialize;

use super::AppError;

/// Source language of the target project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Language {
    TypeScript,
    JavaScript,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::TypeScript, Language::JavaScript];

    /// Extension for plain modules (`ts` / `js`). Also the template directory name.
    pub fn module_ext(&self) -> &'static str {
        match self {
            Language::TypeScript => "ts",
            Language::JavaScript => "js",
        }
    }

    /// Extension for component modules (`tsx` / `jsx`).
    pub fn component_ext(&self) -> &'static str {
        match self {
            Language::TypeScript => "tsx",
            Language::JavaScript => "jsx",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::TypeScript => "TypeScript",
            Language::JavaScript => "JavaScript",
        }
    }

    pub fn parse(value: &str) -> Result<Language, AppError> {
        match value.trim().to_lowercase().as_str() {
            "ts" | "tsx" | "typescript" => Ok(Language::TypeScript),
            "js" | "jsx" | "javascript" => Ok(Language::JavaScript),
            _ => Err(AppError::InvalidLanguage(value.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl TryFrom<String> for Language {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Language::parse(&value)
    }
}

/// Caching strategy baked into the generated service worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum CacheStrategy {
    /// Precache documents and data up front (`pre`).
    Precache,
    /// Cache responses as they are requested (`jit`).
    JustInTime,
}

impl CacheStrategy {
    pub const ALL: [CacheStrategy; 2] = [CacheStrategy::Precache, CacheStrategy::JustInTime];

    pub fn id(&self) -> &'static str {
        match self {
            CacheStrategy::Precache => "pre",
            CacheStrategy::JustInTime => "jit",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CacheStrategy::Precache => "Precaching",
            CacheStrategy::JustInTime => "Just-In-Time Caching",
        }
    }

    pub fn parse(value: &str) -> Result<CacheStrategy, AppError> {
        match value.trim().to_lowercase().as_str() {
            "pre" | "precache" | "precaching" => Ok(CacheStrategy::Precache),
            "jit" | "just-in-time" | "just-in-time caching" => Ok(CacheStrategy::JustInTime),
            _ => Err(AppError::InvalidCacheStrategy(value.to_string())),
        }
    }
}

impl fmt::Display for CacheStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl TryFrom<String> for CacheStrategy {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CacheStrategy::parse(&value)
    }
}
