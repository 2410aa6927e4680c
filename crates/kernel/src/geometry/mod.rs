pub mod point;
pub mod vector;
pub mod curves;
pub mod sampling;
