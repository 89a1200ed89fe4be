//! The public extension API of pyext.
//!
//! Other extensions bind to the shape of [`ExtensionApi`] when they load, so
//! its fields and their signatures are a compatibility contract: adding a
//! capability is fine, renaming or removing one is a breaking release.

pub mod builder;
pub mod errors;
pub mod groups;
pub mod types;

pub use builder::{ExtensionApi, Ready, TestHandles, build_api};
pub use errors::{ActivationError, ApiError};
pub use groups::{
    DataScienceApi, DebugApi, JupyterApi, RegisterRemoteServerProviderFn, SettingsApi,
    ShowDataViewerFn,
};
pub use types::{ApiOptions, ExecutionDetails};
