pub mod session_store;

pub use session_store::{
    LocalStorage, MemoryStorage, SessionStore, SessionTokens, StorageError, TokenStorage,
};
