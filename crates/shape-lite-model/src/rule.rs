// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-parameter type-check rules
//!
//! Exactly one rule is evaluated per parameter name; rules do not compose.

use crate::{ParamValue, ValueKind};
use std::fmt;

/// Predicate signature for custom rules
pub type Predicate = fn(&ParamValue) -> bool;

/// Validation rule attached to a registered parameter name
#[derive(Clone)]
pub enum TypeRule {
    /// Accept values of the same kind as the current value, or any numeric
    /// value replacing a numeric value. A mismatch is a soft rejection.
    LooseNumeric,
    /// Value kind must be a member of the listed kinds. A mismatch is a
    /// hard failure for this parameter.
    Strict(Vec<ValueKind>),
    /// Accept iff the predicate returns true. A false result is a soft
    /// rejection.
    Predicate(Predicate),
    /// Accept anything
    Unchecked,
}

/// Outcome of evaluating a rule against a candidate value
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The assignment may proceed in this container
    Accepted,
    /// Not acceptable here; another container may still take the value
    Rejected,
    /// Hard failure: the value can never be assigned under this rule
    Failed { expected: String, actual: ValueKind },
}

impl TypeRule {
    /// Create a strict rule from a list of accepted kinds
    pub fn strict(kinds: impl IntoIterator<Item = ValueKind>) -> Self {
        TypeRule::Strict(kinds.into_iter().collect())
    }

    /// Evaluate this rule for `candidate` replacing `current`
    pub fn check(&self, current: &ParamValue, candidate: &ParamValue) -> RuleOutcome {
        match self {
            TypeRule::LooseNumeric => {
                if candidate.kind() == current.kind()
                    || (candidate.is_numeric() && current.is_numeric())
                {
                    RuleOutcome::Accepted
                } else {
                    RuleOutcome::Rejected
                }
            }
            TypeRule::Strict(kinds) => {
                if kinds.contains(&candidate.kind()) {
                    RuleOutcome::Accepted
                } else {
                    RuleOutcome::Failed {
                        expected: kind_list(kinds),
                        actual: candidate.kind(),
                    }
                }
            }
            TypeRule::Predicate(predicate) => {
                if predicate(candidate) {
                    RuleOutcome::Accepted
                } else {
                    RuleOutcome::Rejected
                }
            }
            TypeRule::Unchecked => RuleOutcome::Accepted,
        }
    }
}

impl fmt::Debug for TypeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRule::LooseNumeric => write!(f, "LooseNumeric"),
            TypeRule::Strict(kinds) => write!(f, "Strict({})", kind_list(kinds)),
            TypeRule::Predicate(_) => write!(f, "Predicate(..)"),
            TypeRule::Unchecked => write!(f, "Unchecked"),
        }
    }
}

/// Render a kind list for error messages, e.g. "float | integer"
fn kind_list(kinds: &[ValueKind]) -> String {
    kinds
        .iter()
        .map(ValueKind::name)
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_numeric_accepts_same_kind_and_numeric_swaps() {
        let rule = TypeRule::LooseNumeric;
        let current = ParamValue::from("meters");

        assert_eq!(
            rule.check(&current, &ParamValue::from("feet")),
            RuleOutcome::Accepted
        );
        assert_eq!(
            rule.check(&current, &ParamValue::Float(1.0)),
            RuleOutcome::Rejected
        );

        let numeric = ParamValue::Float(1.0);
        assert_eq!(
            rule.check(&numeric, &ParamValue::Integer(2)),
            RuleOutcome::Accepted
        );
    }

    #[test]
    fn strict_mismatch_is_a_hard_failure() {
        let rule = TypeRule::strict([ValueKind::Float]);
        let current = ParamValue::Float(1.0);

        assert_eq!(
            rule.check(&current, &ParamValue::Float(2.0)),
            RuleOutcome::Accepted
        );
        assert_eq!(
            rule.check(&current, &ParamValue::from("x")),
            RuleOutcome::Failed {
                expected: "float".to_string(),
                actual: ValueKind::Text,
            }
        );
        // Strict means strict: integers do not coerce
        assert_eq!(
            rule.check(&current, &ParamValue::Integer(2)),
            RuleOutcome::Failed {
                expected: "float".to_string(),
                actual: ValueKind::Integer,
            }
        );
    }

    #[test]
    fn predicate_false_is_a_soft_rejection() {
        fn positive(value: &ParamValue) -> bool {
            value.as_float().is_some_and(|v| v > 0.0)
        }
        let rule = TypeRule::Predicate(positive);
        let current = ParamValue::Float(1.0);

        assert_eq!(
            rule.check(&current, &ParamValue::Float(3.0)),
            RuleOutcome::Accepted
        );
        assert_eq!(
            rule.check(&current, &ParamValue::Float(-3.0)),
            RuleOutcome::Rejected
        );
    }

    #[test]
    fn unchecked_accepts_anything() {
        let rule = TypeRule::Unchecked;
        let current = ParamValue::Float(1.0);
        assert_eq!(
            rule.check(&current, &ParamValue::from("anything")),
            RuleOutcome::Accepted
        );
    }
}
