use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum NumericsError {
    InvalidArgument(String),
    ShapeMismatch(String),
    NotSquare(String),
    Singular(String),
}

impl fmt::Display for NumericsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericsError::InvalidArgument(msg) => write!(f, "Invalid Argument: {}", msg),
            NumericsError::ShapeMismatch(msg) => write!(f, "Shape Mismatch: {}", msg),
            NumericsError::NotSquare(msg) => write!(f, "Not Square: {}", msg),
            NumericsError::Singular(msg) => write!(f, "Singular Matrix: {}", msg),
        }
    }
}

impl std::error::Error for NumericsError {}

impl NumericsError {
    pub fn invalid_argument(message: &str) -> Self { NumericsError::InvalidArgument(message.to_string()) }
    pub fn shape_mismatch(message: &str) -> Self { NumericsError::ShapeMismatch(message.to_string()) }
    pub fn not_square(message: &str) -> Self { NumericsError::NotSquare(message.to_string()) }
    pub fn singular(message: &str) -> Self { NumericsError::Singular(message.to_string()) }
}
