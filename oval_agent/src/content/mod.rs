//! Definition model collaborator: definitions, variable declarations and
//! external variable bindings.

pub mod definition;
pub mod error;
pub mod model;
pub mod variable;
pub mod variable_model;

pub use definition::{Definition, DefinitionClass, ObjectRef};
pub use error::ContentError;
pub use model::{ContentDocument, DefinitionModel};
pub use variable::{VariableDeclaration, VariableKind};
pub use variable_model::{VariableEntry, VariableModel};
