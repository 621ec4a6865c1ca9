//! Business rules: named predicates over domain invariants.

use thiserror::Error;

/// A domain invariant expressed as a predicate.
///
/// "Broken" means the invariant does not hold. Rules are usually small structs
/// capturing exactly the state they need to evaluate:
///
/// ```
/// use sharedkernel_core::{BusinessRule, check_rule};
///
/// struct QuantityMustBePositive(i64);
///
/// impl BusinessRule for QuantityMustBePositive {
///     fn message(&self) -> String {
///         format!("quantity must be positive (got {})", self.0)
///     }
///
///     fn is_broken(&self) -> bool {
///         self.0 <= 0
///     }
/// }
///
/// assert!(check_rule(&QuantityMustBePositive(3)).is_ok());
/// assert!(check_rule(&QuantityMustBePositive(0)).is_err());
/// ```
pub trait BusinessRule {
    /// Human-readable description of the invariant.
    fn message(&self) -> String;

    fn is_broken(&self) -> bool;

    /// Identifier of the rule variant, used in the rendered violation.
    fn name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Invariant failure raised when a [`BusinessRule`] is broken.
///
/// This signals a programming or domain-invariant error. It is not retryable;
/// an application boundary may translate it into a failure result, but the
/// kernel never does.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{rule}: {details}")]
pub struct BusinessRuleValidationError {
    rule: &'static str,
    details: String,
}

impl BusinessRuleValidationError {
    pub fn new<R: BusinessRule + ?Sized>(rule: &R) -> Self {
        Self {
            rule: rule.name(),
            details: rule.message(),
        }
    }

    /// Identifier of the broken rule.
    pub fn rule(&self) -> &'static str {
        self.rule
    }

    /// The broken rule's message.
    pub fn details(&self) -> &str {
        &self.details
    }
}

/// Evaluate `rule`, failing with [`BusinessRuleValidationError`] if it is broken.
pub fn check_rule<R: BusinessRule + ?Sized>(rule: &R) -> Result<(), BusinessRuleValidationError> {
    if rule.is_broken() {
        return Err(BusinessRuleValidationError::new(rule));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BusinessRuleStub {
        broken: bool,
    }

    impl BusinessRule for BusinessRuleStub {
        fn message(&self) -> String {
            "Message error".to_string()
        }

        fn is_broken(&self) -> bool {
            self.broken
        }
    }

    struct NamedRule;

    impl BusinessRule for NamedRule {
        fn message(&self) -> String {
            "stock cannot go negative".to_string()
        }

        fn is_broken(&self) -> bool {
            true
        }

        fn name(&self) -> &'static str {
            "StockCannotGoNegative"
        }
    }

    #[test]
    fn broken_rule_fails_with_its_message_as_details() {
        let rule = BusinessRuleStub { broken: true };
        let err = check_rule(&rule).unwrap_err();
        assert_eq!(err.details(), rule.message());
    }

    #[test]
    fn satisfied_rule_passes() {
        assert_eq!(check_rule(&BusinessRuleStub { broken: false }), Ok(()));
    }

    #[test]
    fn display_is_rule_identifier_then_message() {
        let rule = BusinessRuleStub { broken: true };
        let err = BusinessRuleValidationError::new(&rule);
        assert_eq!(
            err.to_string(),
            format!("{}: {}", core::any::type_name::<BusinessRuleStub>(), rule.message())
        );
        assert!(err.rule().ends_with("BusinessRuleStub"));
    }

    #[test]
    fn overridden_name_is_used() {
        let err = check_rule(&NamedRule).unwrap_err();
        assert_eq!(err.to_string(), "StockCannotGoNegative: stock cannot go negative");
    }

    #[test]
    fn works_through_trait_objects() {
        let rules: Vec<Box<dyn BusinessRule>> = vec![
            Box::new(BusinessRuleStub { broken: false }),
            Box::new(NamedRule),
        ];
        let first_broken = rules.iter().map(|r| check_rule(r.as_ref())).find(Result::is_err);
        assert_eq!(first_broken.unwrap().unwrap_err().rule(), "StockCannotGoNegative");
    }
}
