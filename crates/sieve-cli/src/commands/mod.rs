pub mod check;
pub mod input;
pub mod tokens;
pub mod trace;
pub mod tree;
