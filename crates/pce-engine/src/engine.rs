//! The parser engine capability consumed by the schema service.

use pce_protocol::EngineOutcome;

/// A pluggable parsing backend.
///
/// Implementations report every failure through the returned
/// `EngineOutcome`; nothing is raised across this boundary. The schema
/// service shares one engine between concurrent requests, hence the
/// `Send + Sync` bound.
pub trait ParserEngine: Send + Sync {
    /// Instantiate a configuration. OK iff it is structurally valid.
    fn create(&self, configuration: &str) -> EngineOutcome;

    /// Semantic validation of one configuration.
    fn validate_configuration(&self, configuration: &str) -> EngineOutcome;

    /// Semantic validation of a batch. OK only if every member is valid.
    fn validate_configurations(&self, configurations: &str) -> EngineOutcome;

    /// Run `sample` through `configuration`.
    ///
    /// An accepted configuration that fails on this particular input
    /// yields an OK outcome whose parser result carries the exception.
    fn test(
        &self,
        configuration: &str,
        configurations: Option<&str>,
        sample: &[u8],
    ) -> EngineOutcome;
}
