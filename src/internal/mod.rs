//! Internal implementation details.

pub(crate) mod chain;

pub(crate) use chain::ResolutionChain;
