use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("'{0}' is not a valid number")]
    invalid_number(String),

    #[error("'{0}' is not a supported operator")]
    invalid_operator(String),

    #[error("input ended abruptly")]
    end_of_input,

    #[error("console failure: {0}")]
    io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CalcError>;
