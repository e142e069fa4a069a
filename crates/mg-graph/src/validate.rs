//! Graph validation logic.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use mg_core::{Label, MgResult, ValidationError};

use crate::endpoints::Endpoints;

/// Validate the graph structure: labels are disjoint and every endpoint exists.
///
/// Arity is already guaranteed by `Endpoints`.
pub(crate) fn validate_structure<L: Label>(
    vertices: &HashSet<L>,
    incidence: &HashMap<L, Endpoints<L>>,
) -> MgResult<()> {
    // No label may be both a vertex and an edge
    for edge in incidence.keys() {
        if vertices.contains(edge) {
            return Err(ValidationError::Overlap {
                label: edge.describe(),
            }
            .into());
        }
    }

    // Each endpoint must reference a vertex
    for (edge, ends) in incidence {
        for vertex in ends {
            if !vertices.contains(vertex) {
                return Err(ValidationError::DanglingEndpoint {
                    edge: edge.describe(),
                    vertex: vertex.describe(),
                }
                .into());
            }
        }
    }

    Ok(())
}

/// Collect raw endpoint lists into an incidence map, checking arity and that
/// no edge label repeats.
pub(crate) fn collect_incidence<L, I, P>(edges: I) -> MgResult<HashMap<L, Endpoints<L>>>
where
    L: Label,
    I: IntoIterator<Item = (L, P)>,
    P: IntoIterator<Item = L>,
{
    let edges = edges.into_iter();
    let mut incidence: HashMap<L, Endpoints<L>> = HashMap::with_capacity(edges.size_hint().0);

    for (edge, ends) in edges {
        let ends: Vec<L> = ends.into_iter().collect();
        let ends = Endpoints::<L>::try_from(ends).map_err(|rejected| ValidationError::WrongArity {
            edge: edge.describe(),
            count: rejected.len(),
        })?;

        match incidence.entry(edge) {
            Entry::Occupied(slot) => {
                return Err(ValidationError::DuplicateEdge {
                    edge: slot.key().describe(),
                }
                .into());
            }
            Entry::Vacant(slot) => {
                slot.insert(ends);
            }
        }
    }

    Ok(incidence)
}
