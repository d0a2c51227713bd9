// src/probe/session.rs
//! Probe session: object collection with a per-session item cache

use super::error::{CollectionError, ProbeError};
use super::traits::ObjectCollector;
use crate::content::DefinitionModel;
use crate::logging::codes;
use crate::syschar::{CollectedObject, CollectionFlag, SystemCharacteristics, SystemInfo};
use crate::types::Message;
use crate::{log_debug, log_error, log_warning};
use std::collections::HashMap;
use std::sync::Arc;

pub struct ProbeSession {
    collector: Arc<dyn ObjectCollector>,
    item_cache: HashMap<String, CollectedObject>,
    cache_enabled: bool,
}

impl ProbeSession {
    pub fn new(collector: Arc<dyn ObjectCollector>) -> Self {
        Self {
            collector,
            item_cache: HashMap::new(),
            cache_enabled: true,
        }
    }

    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    pub fn collector_id(&self) -> &str {
        self.collector.collector_id()
    }

    pub fn cached_objects(&self) -> usize {
        self.item_cache.len()
    }

    pub fn query_sysinfo(&self) -> Result<SystemInfo, ProbeError> {
        self.collector.system_info().map_err(|e| {
            log_error!(codes::SYSINFO_QUERY_FAILED, "System information query failed",
                "collector" => self.collector.collector_id(),
                "error" => &e
            );
            ProbeError::SysinfoUnavailable(e)
        })
    }

    /// Collect every object `definition_id` references into `syschar`.
    ///
    /// Objects already in the item cache are copied over without touching the
    /// collector. A failing object is recorded with flag `Error` and is not cached.
    pub fn query_definition(
        &mut self,
        definitions: &DefinitionModel,
        definition_id: &str,
        syschar: &mut SystemCharacteristics,
    ) -> Result<(), ProbeError> {
        let definition = definitions
            .definition(definition_id)
            .ok_or_else(|| ProbeError::UnknownDefinition(definition_id.to_string()))?;

        for object in &definition.objects {
            if let Some(cached) = self.item_cache.get(&object.id) {
                log_debug!("Probe cache hit", "object" => &object.id);
                syschar.add_object(cached.clone());
                continue;
            }

            match self.collector.collect_object(object, definitions) {
                Ok(collected) => {
                    if self.cache_enabled {
                        self.item_cache.insert(object.id.clone(), collected.clone());
                    }
                    syschar.add_object(collected);
                }
                Err(e) => {
                    log_warning!(code = codes::DEFINITION_PROBE_FAILED, "Object collection failed",
                        "definition" => definition_id,
                        "object" => &object.id,
                        "error" => &e
                    );
                    syschar.add_object(
                        CollectedObject::new(object.id.clone(), CollectionFlag::Error)
                            .with_message(Message::error(e.to_string())),
                    );
                    return Err(e.into());
                }
            }
        }

        Ok(())
    }

    /// Invalidate the item cache. The cache survives if the collector reset fails.
    pub fn reset(&mut self) -> Result<(), ProbeError> {
        self.collector.reset().map_err(|e: CollectionError| {
            log_error!(codes::PROBE_RESET_FAILED, "Probe reset failed",
                "collector" => self.collector.collector_id(),
                "error" => &e
            );
            ProbeError::ResetFailed(e)
        })?;

        let dropped = self.item_cache.len();
        self.item_cache.clear();
        log_debug!("Probe cache cleared", "objects" => dropped);
        Ok(())
    }
}

impl std::fmt::Debug for ProbeSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProbeSession")
            .field("collector", &self.collector.collector_id())
            .field("cached_objects", &self.item_cache.len())
            .field("cache_enabled", &self.cache_enabled)
            .finish()
    }
}
