use thiserror::Error;

/// Client-side rejection of a submission payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("term must not be empty")]
    EmptyTerm,

    #[error("meaning must not be empty")]
    EmptyMeaning,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NewSlangTerm;

    #[test]
    fn empty_term_is_rejected() {
        let new = NewSlangTerm::new("", "something");
        assert_eq!(new.validate(), Err(ValidationError::EmptyTerm));
    }

    #[test]
    fn whitespace_only_fields_are_rejected() {
        let new = NewSlangTerm::new("   ", "something");
        assert_eq!(new.validate(), Err(ValidationError::EmptyTerm));

        let new = NewSlangTerm::new("lit", " \t\n");
        assert_eq!(new.validate(), Err(ValidationError::EmptyMeaning));
    }

    #[test]
    fn trimmed_nonempty_fields_pass() {
        let new = NewSlangTerm::new(" lit ", "exciting");
        assert_eq!(new.validate(), Ok(()));
    }
}
