// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Generic parameterized entity
//!
//! [`ParamEntity`] is the scaffolding every specialized model builds on: an
//! ordered list of parameter containers, a per-name type-check policy, and
//! an optional overflow map for caller-specific extensions. The schema is
//! closed: parameters are declared with [`ParamEntity::register`] at
//! construction time, and [`ParamEntity::set`] never introduces new keys.

use crate::{ParamContainer, ParamError, ParamValue, Result, RuleOutcome, TypeRule};
use log::warn;
use rustc_hash::FxHashMap;

/// Generic parameterized entity
#[derive(Debug, Default)]
pub struct ParamEntity {
    /// Registered containers, probed in declaration order by `set`
    containers: Vec<ParamContainer>,
    /// Type-check policy, keyed by parameter name
    rules: FxHashMap<String, TypeRule>,
    /// Optional overflow for names no container holds
    user_data: Option<FxHashMap<String, ParamValue>>,
}

impl ParamEntity {
    /// Create an entity with no containers, no rules, and no user data
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty parameter container
    ///
    /// Containers are probed by `set` in the order they were added.
    /// Container names are expected to be unique.
    pub fn add_container(&mut self, name: impl Into<String>) {
        self.containers.push(ParamContainer::new(name));
    }

    /// Declare a parameter with its default value and type-check rule
    ///
    /// # Errors
    /// Returns `UnknownContainer` when `container` was never added.
    pub fn register(
        &mut self,
        container: &str,
        name: impl Into<String>,
        default: impl Into<ParamValue>,
        rule: TypeRule,
    ) -> Result<()> {
        let name = name.into();
        let slot = self
            .containers
            .iter_mut()
            .find(|c| c.name() == container)
            .ok_or_else(|| ParamError::unknown_container(container))?;
        slot.insert(name.clone(), default);
        self.rules.insert(name, rule);
        Ok(())
    }

    /// Declare a parameter with no type-check rule
    ///
    /// Assignments to such a parameter are accepted unchecked.
    ///
    /// # Errors
    /// Returns `UnknownContainer` when `container` was never added.
    pub fn register_unruled(
        &mut self,
        container: &str,
        name: impl Into<String>,
        default: impl Into<ParamValue>,
    ) -> Result<()> {
        let slot = self
            .containers
            .iter_mut()
            .find(|c| c.name() == container)
            .ok_or_else(|| ParamError::unknown_container(container))?;
        slot.insert(name, default);
        Ok(())
    }

    /// Enable the overflow user-data map
    ///
    /// Once enabled, `set` routes names no container holds into the map
    /// instead of failing with `NotRegistered`.
    pub fn enable_user_data(&mut self) {
        self.user_data.get_or_insert_with(FxHashMap::default);
    }

    /// Overflow user-data map, if enabled
    pub fn user_data(&self) -> Option<&FxHashMap<String, ParamValue>> {
        self.user_data.as_ref()
    }

    /// Look up a container by name
    pub fn container(&self, name: &str) -> Option<&ParamContainer> {
        self.containers.iter().find(|c| c.name() == name)
    }

    /// Registered containers in declaration order
    pub fn containers(&self) -> &[ParamContainer] {
        &self.containers
    }

    /// Current value of a parameter, from the first container that holds it
    pub fn value(&self, name: &str) -> Option<&ParamValue> {
        self.containers.iter().find_map(|c| c.get(name))
    }

    /// Current value of a parameter in a specific container
    pub fn value_in(&self, container: &str, name: &str) -> Option<&ParamValue> {
        self.container(container)?.get(name)
    }

    /// Type-check rule registered for a parameter name
    pub fn rule(&self, name: &str) -> Option<&TypeRule> {
        self.rules.get(name)
    }

    /// Validated multi-parameter assignment
    ///
    /// Each supplied pair is handled independently, in order:
    /// - containers are probed in declaration order; the first whose rule
    ///   accepts the value takes it;
    /// - a strict-rule failure abandons that single pair (the current value
    ///   stays), is logged, and does not stop later pairs;
    /// - a pair no container takes overflows into user data when enabled,
    ///   otherwise the whole call aborts - pairs already applied stay
    ///   applied, there is no rollback.
    ///
    /// # Errors
    /// - `NotRegistered` / `PredicateRejected`: hard stop for the call.
    /// - `TypeMismatch`: reported after all pairs were processed; the first
    ///   mismatch is returned.
    pub fn set<I, K, V>(&mut self, params: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        let mut first_mismatch: Option<ParamError> = None;

        for (name, value) in params {
            let name = name.into();
            match self.set_one(&name, value.into()) {
                Ok(()) => {}
                Err(err @ ParamError::TypeMismatch { .. }) => {
                    warn!("{err}");
                    first_mismatch.get_or_insert(err);
                }
                Err(err) => return Err(err),
            }
        }

        match first_mismatch {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Assign a single parameter through the container probe
    fn set_one(&mut self, name: &str, value: ParamValue) -> Result<()> {
        let mut predicate_rejected = false;

        for idx in 0..self.containers.len() {
            let outcome = {
                let current = match self.containers[idx].get(name) {
                    Some(current) => current,
                    None => continue,
                };
                match self.rules.get(name) {
                    Some(rule) => {
                        if matches!(rule, TypeRule::Predicate(_)) {
                            predicate_rejected = true;
                        }
                        rule.check(current, &value)
                    }
                    // A registered key with no rule is accepted unchecked
                    None => RuleOutcome::Accepted,
                }
            };

            match outcome {
                RuleOutcome::Accepted => {
                    self.containers[idx].set(name, value);
                    return Ok(());
                }
                RuleOutcome::Rejected => continue,
                RuleOutcome::Failed { expected, actual } => {
                    return Err(ParamError::type_mismatch(name, expected, actual.name()));
                }
            }
        }

        if let Some(overflow) = self.user_data.as_mut() {
            overflow.insert(name.to_string(), value);
            return Ok(());
        }

        if predicate_rejected {
            return Err(ParamError::predicate_rejected(name));
        }
        Err(ParamError::not_registered(name))
    }
}
