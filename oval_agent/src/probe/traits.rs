// src/probe/traits.rs
//! Transport seam between the session engine and whatever gathers host facts

use super::error::CollectionError;
use crate::content::{DefinitionModel, ObjectRef};
use crate::syschar::{CollectedObject, SystemInfo};

/// Collects raw facts from one target host
pub trait ObjectCollector: Send + Sync {
    /// Get collector identifier
    fn collector_id(&self) -> &str;

    /// Host identity facts: name, OS, interfaces
    fn system_info(&self) -> Result<SystemInfo, CollectionError>;

    /// Collect the items matching `object`.
    ///
    /// `definitions` gives access to variable values referenced by the object.
    fn collect_object(
        &self,
        object: &ObjectRef,
        definitions: &DefinitionModel,
    ) -> Result<CollectedObject, CollectionError>;

    /// Drop any transport-side state kept between collections
    fn reset(&self) -> Result<(), CollectionError> {
        Ok(())
    }
}
