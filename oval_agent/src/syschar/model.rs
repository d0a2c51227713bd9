use super::sysinfo::SystemInfo;
use crate::types::Message;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of collecting one object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionFlag {
    Complete,
    Incomplete,
    DoesNotExist,
    NotCollected,
    Error,
    NotApplicable,
}

impl CollectionFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionFlag::Complete => "complete",
            CollectionFlag::Incomplete => "incomplete",
            CollectionFlag::DoesNotExist => "does not exist",
            CollectionFlag::NotCollected => "not collected",
            CollectionFlag::Error => "error",
            CollectionFlag::NotApplicable => "not applicable",
        }
    }
}

/// Status of a single collected item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Exists,
    DoesNotExist,
    NotCollected,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub status: ItemStatus,
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl Item {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: ItemStatus::Exists,
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Items collected for one object, with the collection flag and messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectedObject {
    pub id: String,
    pub flag: CollectionFlag,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl CollectedObject {
    pub fn new(id: impl Into<String>, flag: CollectionFlag) -> Self {
        Self {
            id: id.into(),
            flag,
            items: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn complete(id: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            items,
            ..Self::new(id, CollectionFlag::Complete)
        }
    }

    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }
}

/// System-characteristics model of one target
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemCharacteristics {
    sysinfo: Option<SystemInfo>,
    objects: BTreeMap<String, CollectedObject>,
}

impl SystemCharacteristics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sysinfo(&self) -> Option<&SystemInfo> {
        self.sysinfo.as_ref()
    }

    pub fn set_sysinfo(&mut self, sysinfo: SystemInfo) {
        self.sysinfo = Some(sysinfo);
    }

    /// Insert a collected object, replacing any earlier collection with the same id
    pub fn add_object(&mut self, object: CollectedObject) {
        self.objects.insert(object.id.clone(), object);
    }

    pub fn object(&self, id: &str) -> Option<&CollectedObject> {
        self.objects.get(id)
    }

    pub fn objects(&self) -> impl Iterator<Item = &CollectedObject> {
        self.objects.values()
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Take every collected object out of the model, leaving sysinfo in place
    pub fn drain_objects(&mut self) -> BTreeMap<String, CollectedObject> {
        std::mem::take(&mut self.objects)
    }

    /// Put back objects previously removed with [`drain_objects`](Self::drain_objects)
    pub fn restore_objects(&mut self, objects: BTreeMap<String, CollectedObject>) {
        self.objects = objects;
    }

    /// Forget collected objects; host facts survive
    pub fn reset(&mut self) {
        self.objects.clear();
    }
}
