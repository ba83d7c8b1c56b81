pub mod element;
pub mod marker;
