// Adapters layer: concrete implementations for external systems. The only
// external system the dex owns is its record store; HTTP lives with the
// fetch service in core.

pub mod storage;
