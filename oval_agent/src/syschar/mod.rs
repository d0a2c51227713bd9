//! System-characteristics model: host facts plus the objects collected by the probe layer.

pub mod model;
pub mod sysinfo;

pub use model::{CollectedObject, CollectionFlag, Item, ItemStatus, SystemCharacteristics};
pub use sysinfo::{SystemInfo, SystemInterface};
