// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod guess;
pub mod ledger;
pub mod runtime;
pub mod scramble;
pub mod session;
pub mod summary;
pub mod util;
pub mod vocabulary;
