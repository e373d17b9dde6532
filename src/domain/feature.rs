use std::fmt;

use super::AppError;

/// Optional capability injected into the target project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    ServiceWorkers,
    WebManifest,
    PushNotifications,
    ClientUtilities,
    DevelopmentIcons,
}

impl Feature {
    /// All features in prompt order.
    pub const ALL: [Feature; 5] = [
        Feature::ServiceWorkers,
        Feature::WebManifest,
        Feature::PushNotifications,
        Feature::ClientUtilities,
        Feature::DevelopmentIcons,
    ];

    /// Short identifier accepted by `--features`.
    pub fn id(&self) -> &'static str {
        match self {
            Feature::ServiceWorkers => "sw",
            Feature::WebManifest => "manifest",
            Feature::PushNotifications => "push",
            Feature::ClientUtilities => "utils",
            Feature::DevelopmentIcons => "icons",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Feature::ServiceWorkers => "Service Workers",
            Feature::WebManifest => "Web Manifest",
            Feature::PushNotifications => "Push Notifications",
            Feature::ClientUtilities => "PWA Client Utilities",
            Feature::DevelopmentIcons => "Development Icons",
        }
    }

    /// Parse a feature from its id or display name, ignoring case.
    pub fn parse(value: &str) -> Result<Feature, AppError> {
        let needle = value.trim().to_lowercase();
        Feature::ALL
            .into_iter()
            .find(|f| f.id() == needle || f.display_name().to_lowercase() == needle)
            .ok_or_else(|| AppError::InvalidFeature(value.trim().to_string()))
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Ordered, de-duplicated set of enabled features.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureSet(Vec<Feature>);

impl FeatureSet {
    pub fn new(features: impl IntoIterator<Item = Feature>) -> Self {
        let mut set = Vec::new();
        for feature in features {
            if !set.contains(&feature) {
                set.push(feature);
            }
        }
        set.sort();
        Self(set)
    }

    pub fn all() -> Self {
        Self::new(Feature::ALL)
    }

    /// Parse a comma-separated feature list (`sw,manifest` or `Web Manifest, push`).
    pub fn parse_list(list: &str) -> Result<Self, AppError> {
        let features = list
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(Feature::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(features))
    }

    pub fn contains(&self, feature: Feature) -> bool {
        self.0.contains(&feature)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Feature> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|feature| feature.id()).collect();
        write!(f, "{}", names.join(","))
    }
}
