// Adapters layer: concrete implementations of the domain ports (catalog sources, storage, mail hand-off).

pub mod catalog;
pub mod mail;
pub mod storage;

pub use catalog::{BuiltinCatalog, FileCatalog, HttpCatalog};
pub use mail::{PrintHandoff, SystemMailHandoff};
pub use storage::LocalStorage;
