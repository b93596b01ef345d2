use derive_more::Display;

/// Errors raised at the boundary of the calendar core.
///
/// The grid builder and the range matcher are total over well-formed inputs;
/// this is only produced when raw integers are turned into a [`MonthRef`]
/// or a [`StartOfWeek`].
///
/// [`MonthRef`]: crate::calendar::MonthRef
/// [`StartOfWeek`]: crate::calendar::StartOfWeek
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CalendarError {
    #[display(fmt = "invalid argument: {}", _0)]
    InvalidArgument(String),
}

impl std::error::Error for CalendarError {}

impl CalendarError {
    pub fn invalid(message: impl Into<String>) -> Self {
        CalendarError::InvalidArgument(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message() {
        let e = CalendarError::invalid("month must be in 0..=11, got 12");
        assert_eq!(
            e.to_string(),
            "invalid argument: month must be in 0..=11, got 12"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<CalendarError>();
    }
}
