//! Arithmetic expression evaluation over `f64`.
//!
//! Text goes through three stages: [`tokenize`] produces tokens, [`parse`]
//! builds an [`Ast`] by recursive descent, and [`evaluate`] walks the tree,
//! dispatching function calls to a fixed table of math routines.
//! [`calculate`] runs all three.
//!
//! ```
//! use arith_eval::{calculate, ErrorKind};
//!
//! assert_eq!(calculate("(2 + 3) * 4").unwrap(), 20.0);
//! assert_eq!(calculate("1 / 0").unwrap_err().kind(), ErrorKind::Arithmetic);
//! ```

mod ast;
mod engine;
mod error;
mod functions;
mod lexer;
mod parser;
mod registry;
mod rt_types;

pub use ast::{Ast, BinOp};
pub use engine::{Expr, calculate, evaluate};
pub use error::{CalcError, ErrorKind};
pub use lexer::{Token, TokenKind, tokenize};
pub use parser::{MAX_NESTING_DEPTH, parse};
pub use registry::{function_names, lookup};
pub use rt_types::{Fn0, Fn1, Fn2, Fn3, RegisteredFn};
