use flexq_core::{NodeKind, NodeRef, ProximityType, Variant};

use crate::builder::BuildCtx;
use crate::query::{Query, Within};
use crate::{CompileError, Result};

pub fn build_proximity(node: NodeRef<'_>, ctx: &BuildCtx<'_, Query>) -> Result<Query> {
    let NodeKind::Proximity(proximity) = node.kind() else {
        return Err(CompileError::unexpected_node(Variant::PROXIMITY, node));
    };

    let within = match (proximity.proximity_type(), proximity.distance()) {
        (ProximityType::Sentence, _) => Within::Sentence,
        (ProximityType::Paragraph, _) => Within::Paragraph,
        (ProximityType::Number, Some(distance)) => Within::Terms(distance),
        (ProximityType::Number, None) => {
            return Err(CompileError::from(flexq_core::Error::invalid_parameter(
                "distance",
                flexq_core::NO_DISTANCE,
            )));
        }
    };

    let clauses = ctx
        .child_artifacts(node)?
        .into_iter()
        .cloned()
        .collect();
    Ok(Query::Near {
        clauses,
        within,
        in_order: proximity.in_order(),
    })
}
