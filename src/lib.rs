//! Over-the-air update checks for in-house distributed apps.
//!
//! This crate decides whether a newer build of an installed application is
//! available via its enterprise distribution manifest. It fetches the
//! property-list manifest through a pluggable transport, decodes it into
//! typed values, validates its shape against the distribution protocol, and
//! either selects the single qualifying item or reports why none qualifies.
//! An accepted item can then be turned into the `itms-services` trigger URL
//! that hands installation over to the platform.
//!
//! ```ignore
//! use enterprise_updater::{AppUpdater, HttpTransport};
//! use url::Url;
//!
//! # async fn demo() -> enterprise_updater::Result<()> {
//! let manifest_url = Url::parse("https://dist.acme.com/app.plist").unwrap();
//! let updater = AppUpdater::new(manifest_url, HttpTransport::new())
//!     .bundle_identifier("com.acme.app")
//!     .bundle_version(env!("CARGO_PKG_VERSION"));
//!
//! let item = updater.check_for_update(true).await?;
//! println!("{}", updater.update_message(&item.metadata));
//! updater.start().map_err(|err| eprintln!("{err}")).ok();
//! # Ok(())
//! # }
//! ```
//!
//! Checking is pure and synchronous; only the manifest fetch suspends.
//! Errors are split into load, check, and install taxonomies so callers can
//! treat "no update needed" as the routine outcome it is.

mod error;
mod manifest;
mod transport;
mod updater;

pub use error::{
    InstallError, ManifestCheckError, ManifestLoadError, Result, TransportError, UpdateError,
};
pub use manifest::{Asset, AssetKind, Item, Manifest, Metadata};
pub use transport::{FileTransport, HttpTransport, HttpTransportBuilder, ManifestTransport, TransportResponse};
pub use updater::{message, AppUpdater, INSTALL_URL_ACTION, INSTALL_URL_SCHEME};
