pub mod fallback;
pub mod rag;
