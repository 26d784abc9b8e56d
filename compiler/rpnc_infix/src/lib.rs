//! Infix to postfix conversion for single-character arithmetic.
//!
//! ```
//! use rpnc_infix::InfixConverter;
//!
//! let postfix = InfixConverter::new().convert("(1+2)*3").unwrap();
//! assert_eq!(postfix.to_string(), "12+3*");
//! ```

pub mod converter;
pub mod error;
pub mod token;

pub use converter::{to_postfix, ConverterConfig, InfixConverter, Postfix, TokenSink};
pub use error::{render_snippet, ConversionError, ParenthesisMismatch};
pub use token::{Associativity, Operator, Symbol, Token};
