//! Boolean evaluator seam

use crate::content::{Definition, DefinitionModel};
use crate::syschar::SystemCharacteristics;
use crate::types::ResultVerdict;

/// Evaluates a definition's criteria tree against collected system characteristics
pub trait CriteriaEvaluator: Send + Sync {
    fn evaluate(
        &self,
        definition: &Definition,
        syschar: &SystemCharacteristics,
        definitions: &DefinitionModel,
    ) -> ResultVerdict;
}

impl<F> CriteriaEvaluator for F
where
    F: Fn(&Definition, &SystemCharacteristics, &DefinitionModel) -> ResultVerdict + Send + Sync,
{
    fn evaluate(
        &self,
        definition: &Definition,
        syschar: &SystemCharacteristics,
        definitions: &DefinitionModel,
    ) -> ResultVerdict {
        self(definition, syschar, definitions)
    }
}
