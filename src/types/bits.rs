//! Word-size query selector types

use std::str::FromStr;

use thiserror::Error;

/// Which word size a bits query asks about
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BitsSubject {
    /// Native word size of the machine hardware
    #[default]
    Machine,
    /// Pointer width of the running binary
    Binary,
}

/// Rejected word-size selector string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown bits subject: {0:?}")]
pub struct UnknownSubjectError(pub String);

impl FromStr for BitsSubject {
    type Err = UnknownSubjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "machine" => Ok(Self::Machine),
            "binary" => Ok(Self::Binary),
            other => Err(UnknownSubjectError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_subjects() {
        assert_eq!("machine".parse(), Ok(BitsSubject::Machine));
        assert_eq!("binary".parse(), Ok(BitsSubject::Binary));
    }

    #[test]
    fn rejects_unknown_subject_with_input_in_error() {
        let err = "unknown".parse::<BitsSubject>().unwrap_err();
        assert_eq!(err, UnknownSubjectError("unknown".into()));
        assert!(err.to_string().contains("unknown"));
    }

    #[test]
    fn default_subject_is_machine() {
        assert_eq!(BitsSubject::default(), BitsSubject::Machine);
    }
}
