use crate::{
    error::{InstallError, ManifestCheckError, ManifestLoadError, UpdateError},
    manifest::{Item, Manifest, Metadata},
    transport::ManifestTransport,
};
use url::Url;

/// Scheme of the install-trigger URL. Byte-exact; the platform installer
/// recognises nothing else.
pub const INSTALL_URL_SCHEME: &str = "itms-services";
/// Action query value of the install-trigger URL.
pub const INSTALL_URL_ACTION: &str = "download-manifest";

/// Metadata kind accepted in strict checks.
const SOFTWARE_KIND: &str = "software";

/// User-facing strings for downstream presentation layers. Kept here so
/// every platform adapter wording stays consistent.
pub mod message {
    pub const ERROR: &str = "App Update Error";
    pub const NO_CONNECTION: &str = "No internet or server connection";
    pub const UP_TO_DATE: &str = "App is up-to-date";
    pub const AVAILABLE: &str = "Update Available";
    pub const START: &str = "Download and Install Now";
    pub const POSTPONE: &str = "Remind to Update Later";
    pub const STARTED: &str = "User started the update";
    pub const POSTPONED: &str = "User postponed the update";
    pub const POSTPONE_WARNING: &str = "Immediate application update is highly encouraged!";
}

/// Manages in-house application updates against a distribution manifest.
///
/// Holds the manifest location, the running app's identity, and a transport.
/// Loading is asynchronous; checking and URL construction are pure.
#[derive(Clone)]
pub struct AppUpdater<T> {
    manifest_url: Url,
    bundle_identifier: Option<String>,
    bundle_version: Option<String>,
    transport: T,
}

impl<T> AppUpdater<T> {
    /// Create an updater for the given manifest location.
    ///
    /// Identity defaults to unknown; set it with [`bundle_identifier`](Self::bundle_identifier)
    /// and [`bundle_version`](Self::bundle_version). An unknown identifier
    /// skips the identifier check, an unknown version always offers the
    /// update.
    pub fn new(manifest_url: Url, transport: T) -> Self {
        Self {
            manifest_url,
            bundle_identifier: None,
            bundle_version: None,
            transport,
        }
    }

    /// Set the running app's bundle identifier.
    pub fn bundle_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.bundle_identifier = Some(identifier.into());
        self
    }

    /// Set the running app's bundle version.
    pub fn bundle_version(mut self, version: impl Into<String>) -> Self {
        self.bundle_version = Some(version.into());
        self
    }

    /// Location of the distribution manifest.
    pub fn manifest_url(&self) -> &Url {
        &self.manifest_url
    }

    /// Build the install-trigger URL for this updater's manifest:
    /// `itms-services://?action=download-manifest&url=<encoded location>`.
    pub fn install_url(&self) -> Result<Url, InstallError> {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("action", INSTALL_URL_ACTION)
            .append_pair("url", self.manifest_url.as_str())
            .finish();
        Url::parse(&format!("{INSTALL_URL_SCHEME}://?{query}"))
            .map_err(|_| InstallError::UnableToCreate(self.manifest_url.clone()))
    }

    /// Hand the install-trigger URL to the platform opener, starting the
    /// update.
    pub fn start(&self) -> Result<(), InstallError> {
        let url = self.install_url()?;
        tracing::debug!(%url, "opening install trigger");
        open::that(url.as_str()).map_err(|_| InstallError::UnableToOpen(url))
    }

    /// Compose the user-facing update message for an item's metadata.
    ///
    /// Renders "{title} version {new} (currently {installed})" with `?` for
    /// unknown versions, then the subtitle on a blank line with literal `\n`
    /// escapes expanded.
    pub fn update_message(&self, metadata: &Metadata) -> String {
        let mut message = format!(
            "{} version {} (currently {})",
            metadata.title,
            metadata.version.as_deref().unwrap_or("?"),
            self.bundle_version.as_deref().unwrap_or("?"),
        );
        if let Some(subtitle) = &metadata.subtitle {
            message.push_str("\n\n");
            message.push_str(&subtitle.replace("\\n", "\n"));
        }
        message
    }

    /// Check a loaded manifest for an applicable update.
    ///
    /// Evaluates the first item, short-circuiting on the first rule that
    /// fails. Strict mode additionally enforces a single-item manifest, a
    /// matching bundle identifier (when one is known), and the `"software"`
    /// kind; the version and asset rules always apply.
    ///
    /// Version strings are compared ordinally (code-point order), not as
    /// semantic versions, so `"1.10"` sorts below `"1.9"`. This matches the
    /// established manifest protocol behaviour and is pinned by tests.
    pub fn check<'m>(
        &self,
        manifest: &'m Manifest,
        strict: bool,
    ) -> Result<&'m Item, ManifestCheckError> {
        let Some(item) = manifest.items.first() else {
            return Err(ManifestCheckError::NoItems);
        };
        if strict {
            if manifest.items.len() != 1 {
                return Err(ManifestCheckError::MultipleItems(manifest.items.len()));
            }
            if let Some(identifier) = &self.bundle_identifier {
                if item.metadata.identifier != *identifier {
                    return Err(ManifestCheckError::WrongBundleIdentifier(
                        item.metadata.identifier.clone(),
                    ));
                }
            }
            if item.metadata.kind != SOFTWARE_KIND {
                return Err(ManifestCheckError::UnexpectedKind(item.metadata.kind.clone()));
            }
        }
        let Some(manifest_version) = item.metadata.version.as_deref() else {
            return Err(ManifestCheckError::NoBundleVersion);
        };
        if let Some(installed) = self.bundle_version.as_deref() {
            if manifest_version <= installed {
                return Err(ManifestCheckError::NoUpdateNeeded(
                    manifest_version.to_owned(),
                ));
            }
        }
        if item.software_package_url().is_none() {
            return Err(ManifestCheckError::NoPackageUrl);
        }
        Ok(item)
    }
}

impl<T> AppUpdater<T>
where
    T: ManifestTransport,
{
    /// Retrieve and decode the distribution manifest.
    ///
    /// One transport attempt per call; any failure is terminal for that
    /// call. The returned future resolves exactly once, on the caller's
    /// executor.
    pub async fn load_manifest(&self) -> Result<Manifest, ManifestLoadError> {
        let response = self
            .transport
            .fetch(&self.manifest_url)
            .await
            .map_err(ManifestLoadError::Connection)?;
        if let Some(status) = response.status {
            if !(200..300).contains(&status) {
                return Err(ManifestLoadError::Server(status));
            }
        }
        let Some(body) = response.body else {
            return Err(ManifestLoadError::NoData);
        };
        let manifest: Manifest = plist::from_bytes(&body)?;
        tracing::debug!(items = manifest.items.len(), "manifest loaded");
        Ok(manifest)
    }

    /// Load the manifest and check it in one step.
    ///
    /// Both error taxonomies stay distinguishable through
    /// [`UpdateError`](crate::UpdateError).
    pub async fn check_for_update(&self, strict: bool) -> Result<Item, UpdateError> {
        let manifest = self.load_manifest().await?;
        let item = self.check(&manifest, strict)?;
        Ok(item.clone())
    }
}
