//! Query string tokenization
//!
//! This module turns a raw query component into a [`QueryMap`].

pub mod decode;
pub mod map;
pub mod tokenizer;

pub use decode::{decode_component, DecodeError};
pub use map::QueryMap;
pub use tokenizer::{tokenize, TokenizeError, Tokenizer, TokenizerConfig};
