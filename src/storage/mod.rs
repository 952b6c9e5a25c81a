//! Token persistence behind an injected capability.
//!
//! The contract is infallible: the original client treats browser storage
//! as always available, so implementations log failures and carry on
//! rather than surfacing them to the session store.

pub mod file;
pub mod memory;
pub mod traits;

pub use file::FileTokenStore;
pub use memory::MemoryTokenStore;
pub use traits::TokenStore;
