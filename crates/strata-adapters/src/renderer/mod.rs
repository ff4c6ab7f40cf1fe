//! Source renderers.

mod php;

pub use php::{PhpRenderer, constructor_block, extends_clause, implements_clause, namespace_line};
