//! Token operations, one module per family.
//!
//! Every operation follows the same pattern:
//!
//! 1. Validate required arguments (blank text, empty token lists)
//! 2. Parse textual arguments and fill unset slots from the operator
//! 3. Build one canonical request from typed values only
//! 4. Submit it once through the executor and project the result

pub mod association;
pub mod create;
pub mod supply;
pub mod transfer;

use crate::SdkError;

/// Rejects a blank required text argument.
pub(crate) fn require_text(text: &str, name: &'static str) -> Result<(), SdkError> {
    if text.trim().is_empty() {
        Err(SdkError::InvalidArgument(name))
    } else {
        Ok(())
    }
}
