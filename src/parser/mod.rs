//! Parser for component templates

pub mod ast;
mod grammar;
pub mod invocation;
pub mod lexer;

pub use ast::*;
pub use grammar::parse;
pub use invocation::{Argument, DirectiveInvocation};
