//! Boolean validator

use crate::macros::assert_type;
use crate::mixins::{Comparable, Custom};

assert_type! {
    /// Rules for `bool` values.
    pub struct BoolAssert for bool;
}

impl Comparable<bool> for BoolAssert {}
impl Custom<bool> for BoolAssert {}

/// Starts an empty boolean validator.
#[must_use]
pub fn boolean() -> BoolAssert {
    BoolAssert {
        rules: crate::foundation::Rules::new(),
    }
}

impl BoolAssert {
    /// Value expects to be `true`. Same as `equal(true)`.
    pub fn is_true(self) -> Self {
        self.equal(true)
    }

    /// Value expects to be `false`. Same as `equal(false)`.
    pub fn is_false(self) -> Self {
        self.equal(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Assert, Validate};

    #[test]
    fn test_is_true() {
        assert!(boolean().is_true().check(&true).is_ok());

        let error = boolean().is_true().check(&false).unwrap_err();
        assert_eq!(error.code, "eq");
        assert_eq!(error.message, "value expects to be equal to true, got false");
    }

    #[test]
    fn test_is_false() {
        assert!(boolean().is_false().validate(&false).is_ok());
        assert!(boolean().is_false().validate(&true).is_err());
    }

    #[test]
    fn test_contradiction_collects_one_failure() {
        let assert = boolean().is_true().is_false();
        assert_eq!(assert.check_all(&true).len(), 1);
        assert_eq!(assert.check_all(&false).len(), 1);
    }
}
