use thiserror::Error;

/// Errors reported by solver construction.
///
/// Feasibility and search are total once a solver exists; the only contract
/// violation is handing over a network with no sites at all.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Robustness is undefined for an empty network.
    #[error("network must contain at least one site")]
    EmptyNetwork,
}
