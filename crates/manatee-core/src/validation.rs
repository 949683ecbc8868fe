//! Validation rules applied to values before they are sent to Trello.
//!
//! Every rule inspects the current and the proposed value of a property and
//! returns an error message when the proposed value is unacceptable. Rules run
//! before any request is queued, so a rejected value never reaches the network.

use std::fmt::{self, Debug, Display};

use crate::models::Position;

/// A property value was rejected by one or more rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the property or parameter that failed validation.
    pub field: String,
    /// Debug rendering of the rejected value.
    pub value: String,
    /// One message per failed rule.
    pub errors: Vec<String>,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid value for {} ({}): {}",
            self.field,
            self.value,
            self.errors.join("; ")
        )
    }
}

impl std::error::Error for ValidationError {}

/// A single constraint on a property value.
pub trait Rule<T: ?Sized>: Send + Sync {
    /// Returns an error message if `proposed` is not acceptable.
    fn validate(&self, current: Option<&T>, proposed: Option<&T>) -> Option<String>;
}

/// Runs `rules` against `proposed` and collects every failure.
pub fn check<T: Debug>(
    field: &str,
    current: Option<&T>,
    proposed: Option<&T>,
    rules: &[&dyn Rule<T>],
) -> Result<(), ValidationError> {
    let errors: Vec<String> = rules
        .iter()
        .filter_map(|rule| rule.validate(current, proposed))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError {
            field: field.to_string(),
            value: match proposed {
                Some(value) => format!("{:?}", value),
                None => "null".to_string(),
            },
            errors,
        })
    }
}

/// The value must be present.
pub struct NotNullRule;

impl<T> Rule<T> for NotNullRule {
    fn validate(&self, _current: Option<&T>, proposed: Option<&T>) -> Option<String> {
        match proposed {
            Some(_) => None,
            None => Some("Value cannot be null.".to_string()),
        }
    }
}

/// The value must be present and contain at least one non-whitespace character.
pub struct NotNullOrWhiteSpaceRule;

impl Rule<String> for NotNullOrWhiteSpaceRule {
    fn validate(&self, _current: Option<&String>, proposed: Option<&String>) -> Option<String> {
        match proposed {
            Some(value) if !value.trim().is_empty() => None,
            _ => Some("Value cannot be null, empty, or whitespace.".to_string()),
        }
    }
}

/// Inclusive numeric bounds. Either bound may be omitted.
pub struct NumericRule<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T> Rule<T> for NumericRule<T>
where
    T: PartialOrd + Display + Send + Sync,
{
    fn validate(&self, _current: Option<&T>, proposed: Option<&T>) -> Option<String> {
        let value = proposed?;
        match (&self.min, &self.max) {
            (Some(min), Some(max)) if value < min || value > max => {
                Some(format!("Value must be between {} and {}.", min, max))
            }
            (Some(min), None) if value < min => {
                Some(format!("Value must be greater than or equal to {}.", min))
            }
            (None, Some(max)) if value > max => {
                Some(format!("Value must be less than or equal to {}.", max))
            }
            _ => None,
        }
    }
}

/// The value must be a finite number. NaN slips past every bound check.
pub struct FiniteRule;

impl Rule<f64> for FiniteRule {
    fn validate(&self, _current: Option<&f64>, proposed: Option<&f64>) -> Option<String> {
        match proposed {
            Some(value) if !value.is_finite() => Some("Value must be a finite number.".to_string()),
            _ => None,
        }
    }
}

/// Enumerations that keep a catch-all variant for values Trello may add later.
pub trait Enumerated {
    fn is_known(&self) -> bool;
}

/// The value must be one of the documented options, never the catch-all.
pub struct EnumerationRule;

impl<T: Enumerated> Rule<T> for EnumerationRule {
    fn validate(&self, _current: Option<&T>, proposed: Option<&T>) -> Option<String> {
        match proposed {
            Some(value) if !value.is_known() => Some("Value is not a recognized option.".to_string()),
            _ => None,
        }
    }
}

/// Explicit positions must be strictly positive; `top` and `bottom` always pass.
pub struct PositionRule;

impl Rule<Position> for PositionRule {
    fn validate(&self, _current: Option<&Position>, proposed: Option<&Position>) -> Option<String> {
        match proposed {
            Some(position) if !position.is_valid() => {
                Some("Position must be greater than zero.".to_string())
            }
            _ => None,
        }
    }
}

/// Character count bounds for strings. Absent values are left to other rules.
pub struct StringLengthRule {
    pub min: usize,
    pub max: usize,
}

impl Rule<String> for StringLengthRule {
    fn validate(&self, _current: Option<&String>, proposed: Option<&String>) -> Option<String> {
        let count = proposed?.chars().count();
        if count < self.min || count > self.max {
            Some(format!(
                "Length must be between {} and {} characters.",
                self.min, self.max
            ))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_null_rule() {
        assert!(<NotNullRule as Rule<i32>>::validate(&NotNullRule, None, Some(&1)).is_none());
        assert!(<NotNullRule as Rule<i32>>::validate(&NotNullRule, Some(&1), None).is_some());
    }

    #[test]
    fn test_not_null_or_whitespace_rule() {
        let rule = NotNullOrWhiteSpaceRule;
        assert!(rule.validate(None, Some(&"Sprint".to_string())).is_none());
        assert!(rule.validate(None, Some(&"".to_string())).is_some());
        assert!(rule.validate(None, Some(&"  \t".to_string())).is_some());
        assert!(rule.validate(None, None).is_some());
    }

    #[test]
    fn test_numeric_rule_bounds_are_inclusive() {
        let rule = NumericRule { min: Some(0), max: Some(359) };
        assert!(rule.validate(None, Some(&0)).is_none());
        assert!(rule.validate(None, Some(&359)).is_none());
        assert!(rule.validate(None, Some(&-1)).is_some());
        assert!(rule.validate(None, Some(&360)).is_some());
    }

    #[test]
    fn test_numeric_rule_open_bounds() {
        let min_only = NumericRule { min: Some(1.0), max: None };
        assert!(min_only.validate(None, Some(&1_000_000.0)).is_none());
        assert!(min_only.validate(None, Some(&0.5)).is_some());

        let max_only = NumericRule { min: None, max: Some(10u32) };
        assert!(max_only.validate(None, Some(&0)).is_none());
        assert!(max_only.validate(None, Some(&11)).is_some());
    }

    #[test]
    fn test_finite_rule() {
        assert!(FiniteRule.validate(None, Some(&-12.5)).is_none());
        assert!(FiniteRule.validate(None, None).is_none());
        assert!(FiniteRule.validate(None, Some(&f64::NAN)).is_some());
        assert!(FiniteRule.validate(None, Some(&f64::INFINITY)).is_some());
        assert!(FiniteRule.validate(None, Some(&f64::NEG_INFINITY)).is_some());
    }

    #[test]
    fn test_enumeration_rule() {
        use crate::models::BoardPermissionLevel;
        assert!(EnumerationRule.validate(None, Some(&BoardPermissionLevel::Org)).is_none());
        assert!(EnumerationRule.validate(None, Some(&BoardPermissionLevel::Unknown)).is_some());
        assert!(<EnumerationRule as Rule<BoardPermissionLevel>>::validate(&EnumerationRule, None, None).is_none());
    }

    #[test]
    fn test_position_rule() {
        assert!(PositionRule.validate(None, Some(&Position::Top)).is_none());
        assert!(PositionRule.validate(None, Some(&Position::At(16384.0))).is_none());
        assert!(PositionRule.validate(None, Some(&Position::At(0.0))).is_some());
        assert!(PositionRule.validate(None, Some(&Position::At(-5.0))).is_some());
    }

    #[test]
    fn test_string_length_rule_counts_chars() {
        let rule = StringLengthRule { min: 1, max: 4 };
        assert!(rule.validate(None, Some(&"GD".to_string())).is_none());
        assert!(rule.validate(None, Some(&"ÉÀÜÖ".to_string())).is_none());
        assert!(rule.validate(None, Some(&"".to_string())).is_some());
        assert!(rule.validate(None, Some(&"ABCDE".to_string())).is_some());
    }

    #[test]
    fn test_check_collects_every_failure() {
        let rules: [&dyn Rule<String>; 2] =
            [&NotNullOrWhiteSpaceRule, &StringLengthRule { min: 2, max: 4 }];
        let err = check("Initials", None, Some(&" ".to_string()), &rules).unwrap_err();
        assert_eq!(err.field, "Initials");
        assert_eq!(err.errors.len(), 2);
        assert!(err.to_string().starts_with("Invalid value for Initials"));
    }

    #[test]
    fn test_check_passes() {
        let rules: [&dyn Rule<String>; 1] = [&NotNullOrWhiteSpaceRule];
        assert!(check("Name", None, Some(&"Roadmap".to_string()), &rules).is_ok());
    }
}
