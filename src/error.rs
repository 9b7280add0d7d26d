use std::io::Write;
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("error processing args. Cause : {0}")]
    ArgsProcessingError(String),
    #[error("unable to create default configuration file in {0}")]
    ConfigError(String),
    #[error("unable to read configuration file {file:?}. Cause : {cause}")]
    ConfigReadError { file: String, cause: String },
    #[error("no text provided to \"{0}\" (an empty text is valid, a missing one is not)")]
    InvalidInvocation(String),
    #[error("invalid character set for stage \"{stage}\". Cause : {cause}")]
    InvalidCharacterSet { stage: String, cause: String },
    #[error("unable to read input {file:?}. Cause : {cause}")]
    InputReadError { file: String, cause: String },
    #[error("unable to interpolate variable. Cause : {cause}")]
    InterpolationError { cause: String },
    #[error(transparent)]
    Io(#[from] ::std::io::Error),
    #[error("JSON serialization error: {0}")]
    JsonError(String),
    #[error("unable to parse configuration file {file:?}. Cause : {cause}")]
    SerdeTomlError { file: String, cause: String },
    #[error("unknown chain \"{0}\"")]
    UnknownChain(String),
    #[error("unknown stage \"{0}\"")]
    UnknownStage(String),
    #[error("{0}")]
    Msg(String),
}

impl From<&'static str> for Error {
    fn from(s: &'static str) -> Self {
        Error::Msg(s.to_owned())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Msg(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::JsonError(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn default_error_handler(error: &Error, output: &mut dyn Write) {
    use nu_ansi_term::Color::Red;

    match error {
        Error::Io(io_error) if io_error.kind() == ::std::io::ErrorKind::BrokenPipe => {
            ::std::process::exit(0);
        }
        Error::ConfigError(_)
        | Error::ConfigReadError { .. }
        | Error::SerdeTomlError { .. }
        | Error::InterpolationError { .. } => {
            writeln!(output, "{}: {}", Red.paint("[config error]"), error).ok();
        }
        Error::UnknownChain(_) | Error::UnknownStage(_) | Error::InvalidCharacterSet { .. } => {
            writeln!(output, "{}: {}", Red.paint("[chain error]"), error).ok();
        }
        Error::InputReadError { .. } => {
            writeln!(output, "{}: {}", Red.paint("[input error]"), error).ok();
        }
        Error::InvalidInvocation(_) => {
            writeln!(output, "{}: {}", Red.paint("[invocation error]"), error).ok();
        }
        _ => {
            writeln!(output, "{}: {}", Red.paint("[abstrak error]"), error).ok();
        }
    };
}
