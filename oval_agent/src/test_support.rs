//! Scripted collaborators and fixtures shared by unit tests

use crate::agent::AgentSession;
use crate::content::{Definition, DefinitionModel, ObjectRef, VariableDeclaration};
use crate::probe::{CollectionError, ObjectCollector};
use crate::results::CriteriaEvaluator;
use crate::syschar::{CollectedObject, Item, SystemCharacteristics, SystemInfo, SystemInterface};
use crate::types::{Datatype, ResultVerdict};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub(crate) const FIXTURE_HREF: &str = "file:///content/test-oval.xml";

/// D1 (true), D2 (false), D3 (unknown); D1's object references external int variable v1.
/// External variables v3 (string) and v4 (int) are not referenced by any object.
pub(crate) fn fixture_model() -> DefinitionModel {
    DefinitionModel::new(
        vec![
            Definition::new("oval:test:def:1", "D1")
                .with_description("Password minimum length")
                .with_object(
                    ObjectRef::new("oval:test:obj:1", "textfilecontent54_object")
                        .with_parameter("filepath", "/etc/login.defs")
                        .with_var_ref("oval:test:var:1"),
                ),
            Definition::new("oval:test:def:2", "D2")
                .with_object(ObjectRef::new("oval:test:obj:2", "rpminfo_object")),
            Definition::new("oval:test:def:3", "D3")
                .with_object(ObjectRef::new("oval:test:obj:3", "service_object")),
        ],
        vec![
            VariableDeclaration::external("oval:test:var:1", Datatype::Int),
            VariableDeclaration::constant(
                "oval:test:var:2",
                Datatype::String,
                vec!["fixed".to_string()],
            ),
            VariableDeclaration::external("oval:test:var:3", Datatype::String),
            VariableDeclaration::external("oval:test:var:4", Datatype::Int),
        ],
    )
    .expect("fixture model is valid")
}

/// Two interfaces, only the first with a MAC address
pub(crate) fn fixture_sysinfo() -> SystemInfo {
    SystemInfo {
        os_name: "Linux".to_string(),
        os_version: "6.1".to_string(),
        architecture: "x86_64".to_string(),
        primary_host_name: "target.example.com".to_string(),
        interfaces: vec![
            SystemInterface::new("eth0", "10.0.0.5").with_mac("00:11:22:33:44:55"),
            SystemInterface::new("eth1", "192.168.1.5"),
        ],
    }
}

pub(crate) fn fixture_session(model: &DefinitionModel) -> AgentSession<'_> {
    AgentSession::new(
        model,
        FIXTURE_HREF,
        Arc::new(ScriptedCollector::new()),
        Arc::new(ScriptedEvaluator::fixture()),
    )
    .expect("fixture session opens")
}

/// Collector returning one item per object and counting calls
pub(crate) struct ScriptedCollector {
    sysinfo: Option<SystemInfo>,
    failing: HashSet<String>,
    fail_reset: AtomicBool,
    collections: Mutex<HashMap<String, usize>>,
    resets: AtomicUsize,
}

impl ScriptedCollector {
    pub(crate) fn new() -> Self {
        Self {
            sysinfo: Some(fixture_sysinfo()),
            failing: HashSet::new(),
            fail_reset: AtomicBool::new(false),
            collections: Mutex::new(HashMap::new()),
            resets: AtomicUsize::new(0),
        }
    }

    pub(crate) fn without_sysinfo(mut self) -> Self {
        self.sysinfo = None;
        self
    }

    pub(crate) fn failing_object(mut self, object_id: &str) -> Self {
        self.failing.insert(object_id.to_string());
        self
    }

    pub(crate) fn set_reset_failure(&self, fail: bool) {
        self.fail_reset.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn collections(&self, object_id: &str) -> usize {
        self.collections
            .lock()
            .unwrap()
            .get(object_id)
            .copied()
            .unwrap_or(0)
    }

    pub(crate) fn resets(&self) -> usize {
        self.resets.load(Ordering::SeqCst)
    }
}

impl ObjectCollector for ScriptedCollector {
    fn collector_id(&self) -> &str {
        "scripted"
    }

    fn system_info(&self) -> Result<SystemInfo, CollectionError> {
        self.sysinfo
            .clone()
            .ok_or_else(|| CollectionError::failed("sysinfo", "host unreachable"))
    }

    fn collect_object(
        &self,
        object: &ObjectRef,
        definitions: &DefinitionModel,
    ) -> Result<CollectedObject, CollectionError> {
        if self.failing.contains(&object.id) {
            return Err(CollectionError::failed(&object.id, "scripted failure"));
        }

        *self
            .collections
            .lock()
            .unwrap()
            .entry(object.id.clone())
            .or_insert(0) += 1;

        let mut item = Item::new("1").with_field("kind", object.kind.clone());
        for (name, value) in &object.parameters {
            item = item.with_field(name.clone(), value.clone());
        }
        for var in &object.var_refs {
            let values = definitions.variable_values(var).unwrap_or_default();
            item = item.with_field(var.clone(), values.join(","));
        }

        Ok(CollectedObject::complete(object.id.clone(), vec![item]))
    }

    fn reset(&self) -> Result<(), CollectionError> {
        if self.fail_reset.load(Ordering::SeqCst) {
            return Err(CollectionError::failed("reset", "scripted reset failure"));
        }
        self.resets.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Evaluator returning a fixed verdict per definition id, `Unknown` otherwise
pub(crate) struct ScriptedEvaluator {
    verdicts: HashMap<String, ResultVerdict>,
    evaluated: Mutex<Vec<String>>,
}

impl ScriptedEvaluator {
    pub(crate) fn new() -> Self {
        Self {
            verdicts: HashMap::new(),
            evaluated: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn fixture() -> Self {
        Self::new()
            .with_verdict("oval:test:def:1", ResultVerdict::True)
            .with_verdict("oval:test:def:2", ResultVerdict::False)
            .with_verdict("oval:test:def:3", ResultVerdict::Unknown)
    }

    pub(crate) fn with_verdict(mut self, definition_id: &str, verdict: ResultVerdict) -> Self {
        self.verdicts.insert(definition_id.to_string(), verdict);
        self
    }

    pub(crate) fn evaluations(&self, definition_id: &str) -> usize {
        self.evaluated
            .lock()
            .unwrap()
            .iter()
            .filter(|id| id.as_str() == definition_id)
            .count()
    }

    pub(crate) fn evaluated_ids(&self) -> Vec<String> {
        self.evaluated.lock().unwrap().clone()
    }
}

impl CriteriaEvaluator for ScriptedEvaluator {
    fn evaluate(
        &self,
        definition: &Definition,
        _syschar: &SystemCharacteristics,
        _definitions: &DefinitionModel,
    ) -> ResultVerdict {
        self.evaluated.lock().unwrap().push(definition.id.clone());
        self.verdicts
            .get(&definition.id)
            .copied()
            .unwrap_or(ResultVerdict::Unknown)
    }
}
