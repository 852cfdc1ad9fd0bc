use crate::domain::operator::Operator;
use serde::Serialize;
use std::collections::BTreeMap;

/// Payload localized into the checkout script: operator name → payment
/// instruction, so the client can swap the instruction text the moment the
/// shopper changes operator, plus a flag for the Blocks checkout variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptData {
    pub operators: BTreeMap<String, String>,
    pub is_blocks: bool,
}

impl ScriptData {
    pub fn new(operators: &[Operator], is_blocks: bool) -> Self {
        let operators = operators
            .iter()
            .map(|op| (op.name.clone(), op.instruction.clone()))
            .collect();
        Self {
            operators,
            is_blocks,
        }
    }
}
