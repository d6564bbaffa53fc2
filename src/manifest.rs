use serde::{Deserialize, Serialize};

/// Root of an over-the-air distribution manifest.
///
/// Source order of `items` is preserved; the first item is the one evaluated
/// for updates (see [`AppUpdater::check`](crate::AppUpdater::check)). The
/// sequence may legitimately be empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Manifest {
    pub items: Vec<Item>,
}

/// One distributable application entry within a manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Downloadable resources for this entry.
    pub assets: Vec<Asset>,
    /// Descriptive fields for this entry.
    pub metadata: Metadata,
}

impl Item {
    /// URL of the first software-package asset with a non-empty URL, if any.
    /// An empty URL string counts as absent.
    pub fn software_package_url(&self) -> Option<&str> {
        self.assets
            .iter()
            .find(|asset| asset.kind == AssetKind::SoftwarePackage && !asset.url.is_empty())
            .map(|asset| asset.url.as_str())
    }
}

/// A single downloadable resource referenced by an item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Asset {
    pub kind: AssetKind,
    /// Absolute URL of the resource. May be empty, in which case the asset
    /// is ignored.
    pub url: String,
}

/// Protocol-level asset categories. Only [`SoftwarePackage`](AssetKind::SoftwarePackage)
/// participates in the update decision; an unrecognised kind fails decoding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AssetKind {
    #[serde(rename = "software-package")]
    SoftwarePackage,
    #[serde(rename = "display-image")]
    DisplayImage,
    #[serde(rename = "full-size-image")]
    FullSizeImage,
}

/// Descriptive fields of a manifest item. Field names follow the wire
/// format's dashed keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Metadata {
    /// Bundle identifier of the packaged application.
    #[serde(rename = "bundle-identifier")]
    pub identifier: String,
    /// Bundle version. Absent means the item cannot be evaluated for update
    /// eligibility.
    #[serde(rename = "bundle-version")]
    pub version: Option<String>,
    /// Protocol category; only `"software"` items are update candidates.
    pub kind: String,
    /// Human-readable application name.
    pub title: String,
    /// Optional human-readable description. May contain the literal `\n`
    /// escape, which message rendering expands to a newline.
    pub subtitle: Option<String>,
}
