use serde::Serialize;

/// Where the contact form is in its submit lifecycle.
///
/// `Submitting` is the only state in which the send button is disabled;
/// holding it as a variant rather than a separate flag rules out combinations
/// such as "submitting and succeeded".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn is_submitting(self) -> bool {
        self == SubmissionStatus::Submitting
    }

    /// Idle → Submitting, and Success/Error → Submitting for a retry.
    /// Returns `None` while a request is already in flight.
    pub fn begin(self) -> Option<Self> {
        match self {
            SubmissionStatus::Submitting => None,
            _ => Some(SubmissionStatus::Submitting),
        }
    }

    /// Submitting → Success | Error. Any other state is left as is.
    pub fn finish(self, succeeded: bool) -> Self {
        match (self, succeeded) {
            (SubmissionStatus::Submitting, true) => SubmissionStatus::Success,
            (SubmissionStatus::Submitting, false) => SubmissionStatus::Error,
            (other, _) => other,
        }
    }

    /// Success → Idle after the reset delay. Any other state is left as is.
    pub fn reset(self) -> Self {
        match self {
            SubmissionStatus::Success => SubmissionStatus::Idle,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_is_refused_while_in_flight() {
        assert_eq!(SubmissionStatus::Submitting.begin(), None);
        for from in [
            SubmissionStatus::Idle,
            SubmissionStatus::Success,
            SubmissionStatus::Error,
        ] {
            assert_eq!(from.begin(), Some(SubmissionStatus::Submitting));
        }
    }

    #[test]
    fn test_finish_only_applies_to_submitting() {
        assert_eq!(
            SubmissionStatus::Submitting.finish(true),
            SubmissionStatus::Success
        );
        assert_eq!(
            SubmissionStatus::Submitting.finish(false),
            SubmissionStatus::Error
        );
        assert_eq!(SubmissionStatus::Idle.finish(true), SubmissionStatus::Idle);
    }

    #[test]
    fn test_reset_only_clears_success() {
        assert_eq!(SubmissionStatus::Success.reset(), SubmissionStatus::Idle);
        assert_eq!(SubmissionStatus::Error.reset(), SubmissionStatus::Error);
        assert_eq!(
            SubmissionStatus::Submitting.reset(),
            SubmissionStatus::Submitting
        );
    }
}
