pub mod csv;
pub mod number;
pub mod text;
