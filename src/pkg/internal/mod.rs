pub mod adaptors;
pub mod ai;
pub mod rag;
pub mod store;
