use url::Url;

/// Convenient result alias for combined load-and-check operations.
pub type Result<T> = std::result::Result<T, UpdateError>;

/// Failure reported by a [`ManifestTransport`](crate::ManifestTransport)
/// implementation, boxed so the trait stays uniform across HTTP and file
/// backends.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while retrieving and decoding a manifest.
///
/// All variants are terminal for the call that produced them; retrying is
/// left to the caller's discretion.
#[derive(thiserror::Error, Debug)]
pub enum ManifestLoadError {
    /// The transport could not reach the manifest location.
    #[error("manifest connection failed: {0}")]
    Connection(#[source] TransportError),
    /// The server answered with a status code outside the 2xx range.
    #[error("server error {0}")]
    Server(u16),
    /// The transport completed without returning a response body.
    #[error("response data is empty")]
    NoData,
    /// The response bytes could not be decoded as a property-list manifest.
    #[error("manifest decoding failed: {0}")]
    Decode(#[from] plist::Error),
}

/// Reasons a manifest does not qualify for an update.
///
/// These are expected business outcomes rather than faults;
/// [`NoUpdateNeeded`](ManifestCheckError::NoUpdateNeeded) in particular is
/// the everyday "nothing to do" result and callers typically log it instead
/// of alerting.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ManifestCheckError {
    /// The manifest contains no items at all.
    #[error("no manifest items found")]
    NoItems,
    /// Strict mode found more than one item.
    #[error("{0} manifest items found, only single supported")]
    MultipleItems(usize),
    /// The item's bundle identifier does not match the running app.
    #[error("bundle \"{0}\" does not match the app")]
    WrongBundleIdentifier(String),
    /// The item's kind is not `"software"`.
    #[error("unexpected kind \"{0}\", only \"software\" downloads supported")]
    UnexpectedKind(String),
    /// The item carries no bundle version, which software items require.
    #[error("no bundle version found, it is required for software")]
    NoBundleVersion,
    /// The manifest version does not exceed the installed one. Carries the
    /// manifest's bundle version.
    #[error("current app version is greater or equal {0}, no update needed")]
    NoUpdateNeeded(String),
    /// No software-package asset with a usable URL was found.
    #[error("no software package URL found")]
    NoPackageUrl,
}

/// Errors surfaced when acting on an accepted update item.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InstallError {
    /// The manifest location could not be turned into an install-trigger URL.
    #[error("unable to create install URL for \"{0}\"")]
    UnableToCreate(Url),
    /// The platform opener refused the install-trigger URL.
    #[error("unable to open URL \"{0}\"")]
    UnableToOpen(Url),
}

/// Union of the load and check taxonomies, for callers that run both stages
/// in one go. The wrapped error stays matchable so `NoUpdateNeeded` can be
/// told apart from a malformed manifest.
#[derive(thiserror::Error, Debug)]
pub enum UpdateError {
    #[error(transparent)]
    Load(#[from] ManifestLoadError),
    #[error(transparent)]
    Check(#[from] ManifestCheckError),
}
