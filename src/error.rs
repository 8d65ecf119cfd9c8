use std::convert::From;
use std::error;
use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: Option<String>,
}

#[derive(Debug)]
pub enum ErrorKind {
    NavigationExhausted,
    InvalidOffset,
    Widget(Box<dyn error::Error + Send + Sync + 'static>),
    ConfigParse,
    DateParse,
    IOError(io::Error),
}

impl Error {
    pub fn new(kind: ErrorKind, msg: &str) -> Self {
        Error {
            kind,
            message: Some(msg.to_owned()),
        }
    }

    pub fn with_msg(mut self, message: &str) -> Self {
        self.message = Some(message.to_owned());
        self
    }

    /// Wraps a failure reported by a calendar widget, keeping it intact as the
    /// error source.
    pub fn widget<E>(err: E) -> Self
    where
        E: error::Error + Send + Sync + 'static,
    {
        Error::from(ErrorKind::Widget(Box::new(err)))
    }

    /// Returns the widget failure this error wraps if it is of type `E`.
    pub fn widget_error<E>(&self) -> Option<&E>
    where
        E: error::Error + 'static,
    {
        match &self.kind {
            ErrorKind::Widget(err) => err.downcast_ref::<E>(),
            _ => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind, ErrorKind::NavigationExhausted)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind,
            message: None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(io_error: io::Error) -> Error {
        Error::from(ErrorKind::IOError(io_error))
    }
}

impl From<chrono::ParseError> for Error {
    fn from(parse_error: chrono::ParseError) -> Error {
        Error::new(
            ErrorKind::DateParse,
            format!("Could not parse date: {}", parse_error).as_str(),
        )
    }
}

impl From<toml::de::Error> for Error {
    fn from(toml_error: toml::de::Error) -> Error {
        Error::new(ErrorKind::ConfigParse, &toml_error.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{}: {}", self.kind.as_str(), msg),
            None => write!(f, "{}", self.kind.as_str()),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Widget(err) => Some(err.as_ref()),
            ErrorKind::IOError(err) => Some(err),
            _ => None,
        }
    }
}

impl ErrorKind {
    pub fn as_str(&self) -> String {
        match self {
            ErrorKind::NavigationExhausted => {
                "calendar never showed the target month".to_owned()
            }
            ErrorKind::InvalidOffset => "offset yields an unrepresentable date".to_owned(),
            ErrorKind::Widget(err) => format!("calendar widget failed: {}", err),
            ErrorKind::ConfigParse => "invalid configuration".to_owned(),
            ErrorKind::DateParse => "invalid date format".to_owned(),
            ErrorKind::IOError(err) => err.to_string(),
        }
    }
}
