use core::fmt::{self, Display};

/// Misuse of the container algebra itself.
///
/// These are programming errors, not data errors. Checked constructors return
/// them; unchecked constructors panic with their message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractViolation {
    /// An invalid container was requested without a single error.
    EmptyErrors,
    /// A valid container was requested without a payload.
    AbsentPayload,
}

impl ContractViolation {
    #[inline]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::EmptyErrors => "an invalid container requires at least one error",
            Self::AbsentPayload => "a valid container requires a payload",
        }
    }
}

impl Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl core::error::Error for ContractViolation {}
