use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Class of an OVAL definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefinitionClass {
    Compliance,
    Inventory,
    Miscellaneous,
    Patch,
    Vulnerability,
}

impl Default for DefinitionClass {
    fn default() -> Self {
        DefinitionClass::Compliance
    }
}

/// Reference from a definition to an object the probe layer must collect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectRef {
    /// Object identifier, the key of the probe item cache
    pub id: String,

    /// Object family, e.g. `textfilecontent54_object`
    pub kind: String,

    /// Object entities handed to the collector as-is
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,

    /// External or local variables the object entities reference
    #[serde(default)]
    pub var_refs: Vec<String>,
}

impl ObjectRef {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            parameters: BTreeMap::new(),
            var_refs: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    pub fn with_var_ref(mut self, variable: impl Into<String>) -> Self {
        self.var_refs.push(variable.into());
        self
    }
}

/// One OVAL definition as seen by the session engine
///
/// `criteria` stays opaque here; only the [`CriteriaEvaluator`] interprets it.
///
/// [`CriteriaEvaluator`]: crate::results::CriteriaEvaluator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub id: String,

    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub class: DefinitionClass,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Objects probed before this definition is evaluated
    #[serde(default)]
    pub objects: Vec<ObjectRef>,

    #[serde(default)]
    pub criteria: Option<serde_json::Value>,
}

fn default_version() -> u32 {
    1
}

impl Definition {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: default_version(),
            class: DefinitionClass::default(),
            title: title.into(),
            description: String::new(),
            objects: Vec::new(),
            criteria: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_class(mut self, class: DefinitionClass) -> Self {
        self.class = class;
        self
    }

    pub fn with_object(mut self, object: ObjectRef) -> Self {
        self.objects.push(object);
        self
    }

    pub fn with_criteria(mut self, criteria: serde_json::Value) -> Self {
        self.criteria = Some(criteria);
        self
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (v{}): {}", self.id, self.version, self.title)
    }
}
