use thiserror::Error;

// Error kind
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum ErrorKind {
    InvalidCharacter,
    WrongLength,
    InvalidCheckDigit,
    InvalidData,
    InvalidOption,
}

// Error
//------------------------------------------------------------------------------

/// Failure raised by any stage of the encoding pipeline.
///
/// `code` is a diagnostic id unique to the failure site. Callers should match
/// on [`ErrorKind`] and treat the code as opaque.
#[derive(Debug, Error, PartialEq, Eq, Copy, Clone)]
#[error("{code}: {msg}")]
pub struct EanError {
    kind: ErrorKind,
    code: u16,
    msg: &'static str,
}

impl EanError {
    pub(crate) const fn new(kind: ErrorKind, code: u16, msg: &'static str) -> Self {
        Self { kind, code, msg }
    }

    pub(crate) const fn invalid_char(code: u16, msg: &'static str) -> Self {
        Self::new(ErrorKind::InvalidCharacter, code, msg)
    }

    pub(crate) const fn wrong_length(code: u16, msg: &'static str) -> Self {
        Self::new(ErrorKind::WrongLength, code, msg)
    }

    pub(crate) const fn invalid_check(code: u16, msg: &'static str) -> Self {
        Self::new(ErrorKind::InvalidCheckDigit, code, msg)
    }

    pub(crate) const fn invalid_data(code: u16, msg: &'static str) -> Self {
        Self::new(ErrorKind::InvalidData, code, msg)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn message(&self) -> &'static str {
        self.msg
    }
}

pub type EanResult<T> = Result<T, EanError>;
