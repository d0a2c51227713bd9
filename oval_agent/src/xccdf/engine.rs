//! # Check Engine Dispatch
//!
//! The policy engine hands every rule check to the engines registered under
//! the check's system namespace. An [`AgentSession`] is such an engine for
//! the OVAL definitions namespace.

use super::binding::ValueBinding;
use super::error::BridgeError;
use super::result::{PolicyResult, ResultCodeBridge};
use crate::agent::{AgentSession, VerdictCounter};
use crate::logging::codes;
use crate::{log_debug, log_error};

/// Evaluates one rule check on behalf of the policy engine
pub trait CheckEngine {
    /// `definition_id` names a single check; `None` asks for the whole system.
    /// `href` is the content the rule refers to.
    fn evaluate_rule(
        &mut self,
        rule_id: &str,
        definition_id: Option<&str>,
        href: &str,
        bindings: &[ValueBinding],
    ) -> PolicyResult;
}

impl<T: CheckEngine + ?Sized> CheckEngine for &mut T {
    fn evaluate_rule(
        &mut self,
        rule_id: &str,
        definition_id: Option<&str>,
        href: &str,
        bindings: &[ValueBinding],
    ) -> PolicyResult {
        (**self).evaluate_rule(rule_id, definition_id, href, bindings)
    }
}

impl CheckEngine for AgentSession<'_> {
    fn evaluate_rule(
        &mut self,
        rule_id: &str,
        definition_id: Option<&str>,
        href: &str,
        bindings: &[ValueBinding],
    ) -> PolicyResult {
        if href != self.name() {
            return PolicyResult::NotChecked;
        }

        if let Err(e) = self.resolve_variables(bindings) {
            log_error!(codes::BIND_FAILED, "Variable resolution failed, rule result is unknown",
                "rule" => rule_id,
                "error" => e
            );
            return PolicyResult::Unknown;
        }

        let result = match definition_id {
            Some(id) => {
                // an unknown id lets the policy engine try another check
                if self.definitions().definition(id).is_none() {
                    return PolicyResult::NotChecked;
                }
                PolicyResult::from(self.evaluate_definition(id))
            }
            None => {
                let mut counter = VerdictCounter::new();
                self.evaluate_system(Some(&mut counter));
                ResultCodeBridge::aggregate(&counter)
            }
        };

        log_debug!("Rule evaluated",
            "rule" => rule_id,
            "definition" => definition_id.unwrap_or("*"),
            "result" => result
        );
        result
    }
}

/// Check engines keyed by check-system namespace, in registration order
#[derive(Default)]
pub struct EngineRegistry<'e> {
    engines: Vec<(String, Box<dyn CheckEngine + 'e>)>,
}

impl<'e> EngineRegistry<'e> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_engine(
        &mut self,
        namespace: impl Into<String>,
        engine: Box<dyn CheckEngine + 'e>,
    ) -> Result<(), BridgeError> {
        let namespace = namespace.into();
        if namespace.trim().is_empty() {
            return Err(BridgeError::EmptyNamespace);
        }
        self.engines.push((namespace, engine));
        Ok(())
    }

    pub fn engine_count(&self, namespace: &str) -> usize {
        self.engines.iter().filter(|(ns, _)| ns == namespace).count()
    }

    /// Ask each engine of `namespace` in turn until one returns something other than `NotChecked`
    pub fn dispatch(
        &mut self,
        namespace: &str,
        rule_id: &str,
        definition_id: Option<&str>,
        href: &str,
        bindings: &[ValueBinding],
    ) -> PolicyResult {
        for (_, engine) in self.engines.iter_mut().filter(|(ns, _)| ns == namespace) {
            let result = engine.evaluate_rule(rule_id, definition_id, href, bindings);
            if result != PolicyResult::NotChecked {
                return result;
            }
        }
        PolicyResult::NotChecked
    }
}

/// Register `session` as the check engine for its configured OVAL namespace
pub fn register_engine_oval<'e, 'm: 'e>(
    registry: &mut EngineRegistry<'e>,
    session: &'e mut AgentSession<'m>,
) -> bool {
    let namespace = session.config().engine_namespace.clone();
    match registry.register_engine(namespace.as_str(), Box::new(session)) {
        Ok(()) => true,
        Err(e) => {
            log_error!(codes::ENGINE_REGISTRATION_FAILED, "Check engine registration failed",
                "namespace" => &namespace,
                "error" => e
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AgentConfig, OVAL_DEFINITIONS_NAMESPACE};
    use crate::test_support::{
        fixture_model, fixture_session, ScriptedCollector, ScriptedEvaluator, FIXTURE_HREF,
    };
    use std::sync::Arc;

    struct FixedEngine(PolicyResult);

    impl CheckEngine for FixedEngine {
        fn evaluate_rule(
            &mut self,
            _rule_id: &str,
            _definition_id: Option<&str>,
            _href: &str,
            _bindings: &[ValueBinding],
        ) -> PolicyResult {
            self.0
        }
    }

    #[test]
    fn test_single_definition_rules() {
        let model = fixture_model();
        let mut session = fixture_session(&model);

        let pass = session.evaluate_rule("rule_1", Some("oval:test:def:1"), FIXTURE_HREF, &[]);
        let fail = session.evaluate_rule("rule_2", Some("oval:test:def:2"), FIXTURE_HREF, &[]);
        let missing = session.evaluate_rule("rule_3", Some("oval:test:def:404"), FIXTURE_HREF, &[]);

        assert_eq!(pass, PolicyResult::Pass);
        assert_eq!(fail, PolicyResult::Fail);
        assert_eq!(missing, PolicyResult::NotChecked);
    }

    #[test]
    fn test_whole_system_rule_fails_on_false_or_unknown() {
        let model = fixture_model();
        let mut session = fixture_session(&model);

        let result = session.evaluate_rule("rule_all", None, FIXTURE_HREF, &[]);
        assert_eq!(result, PolicyResult::Fail);
    }

    #[test]
    fn test_whole_system_rule_passes() {
        let model = fixture_model();
        let evaluator = ScriptedEvaluator::new()
            .with_verdict("oval:test:def:1", crate::types::ResultVerdict::True)
            .with_verdict("oval:test:def:2", crate::types::ResultVerdict::NotApplicable)
            .with_verdict("oval:test:def:3", crate::types::ResultVerdict::True);
        let mut session = AgentSession::new(
            &model,
            FIXTURE_HREF,
            Arc::new(ScriptedCollector::new()),
            Arc::new(evaluator),
        )
        .unwrap();

        assert_eq!(
            session.evaluate_rule("rule_all", None, FIXTURE_HREF, &[]),
            PolicyResult::Pass
        );
    }

    #[test]
    fn test_href_mismatch_not_checked() {
        let model = fixture_model();
        let mut session = fixture_session(&model);

        let result = session.evaluate_rule(
            "rule_1",
            Some("oval:test:def:1"),
            "file:///content/other.xml",
            &[ValueBinding::new("oval:test:var:1", "5")],
        );
        assert_eq!(result, PolicyResult::NotChecked);
        // nothing was resolved or evaluated
        assert!(!model.has_bound_value("oval:test:var:1"));
        assert_eq!(session.system_characteristics().object_count(), 0);
    }

    #[test]
    fn test_bind_failure_is_unknown() {
        let model = fixture_model();
        let mut session = fixture_session(&model);
        model.lock();

        let result = session.evaluate_rule(
            "rule_1",
            Some("oval:test:def:1"),
            FIXTURE_HREF,
            &[ValueBinding::new("oval:test:var:1", "5")],
        );
        assert_eq!(result, PolicyResult::Unknown);
    }

    #[test]
    fn test_bindings_flow_into_evaluation() {
        let model = fixture_model();
        let mut session = fixture_session(&model);

        session.evaluate_rule(
            "rule_1",
            Some("oval:test:def:1"),
            FIXTURE_HREF,
            &[ValueBinding::new("oval:test:var:1", "5")],
        );
        let object = session.system_characteristics().object("oval:test:obj:1").unwrap();
        assert_eq!(object.items[0].field("oval:test:var:1"), Some("5"));

        session.evaluate_rule(
            "rule_1",
            Some("oval:test:def:1"),
            FIXTURE_HREF,
            &[ValueBinding::new("oval:test:var:1", "7")],
        );
        let object = session.system_characteristics().object("oval:test:obj:1").unwrap();
        assert_eq!(object.items[0].field("oval:test:var:1"), Some("7"));
    }

    #[test]
    fn test_register_and_dispatch() {
        let model = fixture_model();
        let mut session = fixture_session(&model);
        let mut registry = EngineRegistry::new();

        assert!(register_engine_oval(&mut registry, &mut session));
        assert_eq!(registry.engine_count(OVAL_DEFINITIONS_NAMESPACE), 1);

        let result = registry.dispatch(
            OVAL_DEFINITIONS_NAMESPACE,
            "rule_1",
            Some("oval:test:def:2"),
            FIXTURE_HREF,
            &[],
        );
        assert_eq!(result, PolicyResult::Fail);

        let unregistered = registry.dispatch("urn:example:sce", "rule_1", None, FIXTURE_HREF, &[]);
        assert_eq!(unregistered, PolicyResult::NotChecked);
    }

    #[test]
    fn test_dispatch_falls_through_not_checked() {
        let model = fixture_model();
        let mut session = fixture_session(&model);
        let mut registry = EngineRegistry::new();

        registry
            .register_engine(OVAL_DEFINITIONS_NAMESPACE, Box::new(&mut session))
            .unwrap();
        registry
            .register_engine(OVAL_DEFINITIONS_NAMESPACE, Box::new(FixedEngine(PolicyResult::Informational)))
            .unwrap();

        // first engine does not know the content, second one answers
        let result = registry.dispatch(
            OVAL_DEFINITIONS_NAMESPACE,
            "rule_1",
            Some("oval:test:def:1"),
            "file:///content/other.xml",
            &[],
        );
        assert_eq!(result, PolicyResult::Informational);
    }

    #[test]
    fn test_registration_uses_configured_namespace() {
        let model = fixture_model();
        let mut session = AgentSession::with_config(
            &model,
            FIXTURE_HREF,
            Arc::new(ScriptedCollector::new()),
            Arc::new(ScriptedEvaluator::fixture()),
            AgentConfig::new().with_engine_namespace("urn:example:oval"),
        )
        .unwrap();
        let mut registry = EngineRegistry::new();

        assert!(register_engine_oval(&mut registry, &mut session));
        assert_eq!(registry.engine_count("urn:example:oval"), 1);
        assert_eq!(registry.engine_count(OVAL_DEFINITIONS_NAMESPACE), 0);
    }

    #[test]
    fn test_empty_namespace_rejected() {
        let model = fixture_model();
        let mut session = AgentSession::with_config(
            &model,
            FIXTURE_HREF,
            Arc::new(ScriptedCollector::new()),
            Arc::new(ScriptedEvaluator::fixture()),
            AgentConfig::new().with_engine_namespace(" "),
        )
        .unwrap();
        let mut registry = EngineRegistry::new();

        assert!(!register_engine_oval(&mut registry, &mut session));
    }
}
