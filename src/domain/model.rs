use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(pub u32);

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monthly price in whole dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Price(pub u32);

impl Price {
    pub fn amount(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

impl std::str::FromStr for Price {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Price)
            .map_err(|_| format!("price must be a non-negative whole number, got '{}'", s))
    }
}

// Catalog files written by hand tend to quote prices, so both forms are accepted.
impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Price(n)),
            Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<String>>,
    pub approach: Vec<String>,
    pub schedule: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub title: String,
    pub image: String,
    pub description: String,
    pub price: Price,
    pub features: Vec<String>,
    pub details: ServiceDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            email: "mchandramouli@gmail.com".to_string(),
            phone: "(587) 718-2903".to_string(),
            location: "Calgary, Alberta".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    pub title: String,
    pub tagline: String,
    pub hours: Vec<String>,
    pub card_feature_limit: usize,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "Calgary Academic Excellence".to_string(),
            tagline: "Expert tutoring for Grade 4-10, SAT prep, and university admissions"
                .to_string(),
            hours: vec![
                "Monday - Friday: 9AM - 8PM".to_string(),
                "Saturday: 10AM - 6PM".to_string(),
                "Sunday: Closed".to_string(),
            ],
            card_feature_limit: 3,
        }
    }
}

/// Palette used by the stylesheet and inline accents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub dark: String,
    pub light: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#1B4B7C".to_string(),
            secondary: "#2A9D8F".to_string(),
            accent: "#E9C46A".to_string(),
            dark: "#264653".to_string(),
            light: "#F8F9FA".to_string(),
        }
    }
}

/// An outbound e-mail inquiry about one service, ready for a `mailto:` link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsultationRequest {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// The display source chosen for a service image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedAsset {
    /// Absolute URL, used as is.
    Remote(String),
    /// Copied into the bundle at `bundle_path`.
    Bundled {
        source: std::path::PathBuf,
        bundle_path: String,
    },
    Placeholder,
}

#[derive(Debug, Clone, Default)]
pub struct SiteBundle {
    pub files: Vec<BundleFile>,
}

#[derive(Debug, Clone)]
pub struct BundleFile {
    pub path: String,
    pub contents: Vec<u8>,
}

impl SiteBundle {
    pub fn push(&mut self, path: impl Into<String>, contents: impl Into<Vec<u8>>) {
        self.files.push(BundleFile {
            path: path.into(),
            contents: contents.into(),
        });
    }

    pub fn get(&self, path: &str) -> Option<&BundleFile> {
        self.files.iter().find(|f| f.path == path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
