//! Core types for the textbook RAG pipeline

pub mod chunk;
pub mod response;

pub use chunk::RetrievedChunk;
pub use response::AnswerResponse;
