pub mod driver;
pub mod eval;
pub mod minimax;
pub mod ordering;
