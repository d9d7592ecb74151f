//! Error types and error handling for the lexer.
//!
//! This module defines the error types produced while tokenizing. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each way tokenization can abort
//! - Helpful error names and suggestions for diagnostics

pub mod errors;
