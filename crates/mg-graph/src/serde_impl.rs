//! serde support, gated behind the `serde` feature.
//!
//! A graph serializes as `{ "vertices": [..], "incidence": { edge: [a, b] } }`.
//! Deserialization goes through [`Graph::from_incidence_lists`], so invalid
//! input is rejected rather than producing a graph that breaks its invariants.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::marker::PhantomData;

use mg_core::Label;
use serde::de::{Error as _, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::endpoints::Endpoints;
use crate::graph::Graph;

impl<L: Serialize> Serialize for Endpoints<L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.first(), self.second()].serialize(serializer)
    }
}

impl<'de, L: Deserialize<'de>> Deserialize<'de> for Endpoints<L> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let labels = Vec::<L>::deserialize(deserializer)?;
        Endpoints::<L>::try_from(labels)
            .map_err(|rejected| D::Error::invalid_length(rejected.len(), &"2 endpoints"))
    }
}

#[derive(Serialize)]
struct GraphRef<'a, L> {
    vertices: &'a HashSet<L>,
    incidence: &'a HashMap<L, Endpoints<L>>,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "L: Label + Deserialize<'de>"))]
struct RawGraph<L> {
    #[serde(default)]
    vertices: HashSet<L>,
    #[serde(default)]
    incidence: IncidenceEntries<L>,
}

/// Incidence map entries in input order, repeated keys included, so that
/// duplicate edge labels reach validation instead of being overwritten.
struct IncidenceEntries<L>(Vec<(L, Vec<L>)>);

impl<L> Default for IncidenceEntries<L> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

struct EntriesVisitor<L>(PhantomData<L>);

impl<'de, L: Deserialize<'de>> Visitor<'de> for EntriesVisitor<L> {
    type Value = IncidenceEntries<L>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from edge labels to endpoint lists")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0).min(4096));
        while let Some(entry) = map.next_entry::<L, Vec<L>>()? {
            entries.push(entry);
        }
        Ok(IncidenceEntries(entries))
    }
}

impl<'de, L: Deserialize<'de>> Deserialize<'de> for IncidenceEntries<L> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

impl<L: Label + Serialize> Serialize for Graph<L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GraphRef {
            vertices: self.vertices(),
            incidence: self.incidence(),
        }
        .serialize(serializer)
    }
}

impl<'de, L: Label + Deserialize<'de>> Deserialize<'de> for Graph<L> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawGraph::<L>::deserialize(deserializer)?;
        Graph::from_incidence_lists(raw.vertices, raw.incidence.0).map_err(D::Error::custom)
    }
}
