use super::RecordType;
use crate::stmt::{Condition, Direction, Query};

/// Static description of one named relationship from a source record type
/// to a target record type.
///
/// `ref_key` names an attribute on the target. `link_key` names the
/// attribute on the source whose values are matched against `ref_key`.
/// When the relation is mediated by a junction table or another relation,
/// `link_key` instead names the key read off the mediating rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    /// Name of the target record type
    pub target: String,

    pub cardinality: Cardinality,

    pub ref_key: String,

    pub link_key: String,

    pub via: Via,

    /// Which side stores the foreign key. Inferred when `None`.
    pub back_ref: Option<bool>,

    /// Default for `remove` on unlink
    pub remove_on_unlink: bool,

    /// Base filter, ordering and index key applied to every fetch. Never
    /// mutated by population; each call works on a fresh copy.
    pub scope: Query,

    /// Relation on the target pointing back at the source
    pub inverse_of: Option<String>,

    /// Relation paths populated on fetched targets
    pub eager: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    One,
    Many,
}

/// Mediation kind
#[derive(Debug, Clone, PartialEq)]
pub enum Via {
    /// A literal foreign key on one side
    None,

    /// Rows of an intermediate table hold both keys
    JunctionTable(Junction),

    /// Another named relation on the same source type
    Relation(String),

    /// The source's `link_key` attribute holds a list of target keys
    Array,
}

/// Junction table layout.
///
/// For a relation mediated by a junction table, the target's `ref_key` is
/// matched against the junction column named by the relation's `link_key`.
#[derive(Debug, Clone, PartialEq)]
pub struct Junction {
    pub table: String,

    /// Junction column holding the source key
    pub ref_key: String,

    /// Source attribute stored in `ref_key`
    pub link_key: String,
}

impl Relation {
    pub fn has_one(
        target: impl Into<String>,
        ref_key: impl Into<String>,
        link_key: impl Into<String>,
    ) -> Relation {
        Relation::new(Cardinality::One, target.into(), ref_key.into(), link_key.into())
    }

    pub fn has_many(
        target: impl Into<String>,
        ref_key: impl Into<String>,
        link_key: impl Into<String>,
    ) -> Relation {
        Relation::new(Cardinality::Many, target.into(), ref_key.into(), link_key.into())
    }

    fn new(cardinality: Cardinality, target: String, ref_key: String, link_key: String) -> Self {
        Relation {
            target,
            cardinality,
            ref_key,
            link_key,
            via: Via::None,
            back_ref: None,
            remove_on_unlink: false,
            scope: Query::new(),
            inverse_of: None,
            eager: vec![],
        }
    }

    /// Mediates the relation through a junction table. `ref_key` is the
    /// junction column storing the source's `link_key` attribute.
    pub fn via_table(
        mut self,
        table: impl Into<String>,
        ref_key: impl Into<String>,
        link_key: impl Into<String>,
    ) -> Self {
        self.via = Via::JunctionTable(Junction {
            table: table.into(),
            ref_key: ref_key.into(),
            link_key: link_key.into(),
        });
        self
    }

    /// Mediates the relation through another relation of the source type.
    pub fn via(mut self, relation: impl Into<String>) -> Self {
        self.via = Via::Relation(relation.into());
        self
    }

    pub fn via_array(mut self) -> Self {
        self.via = Via::Array;
        self
    }

    pub fn back_ref(mut self, back_ref: bool) -> Self {
        self.back_ref = Some(back_ref);
        self
    }

    pub fn remove_on_unlink(mut self, remove: bool) -> Self {
        self.remove_on_unlink = remove;
        self
    }

    pub fn where_(mut self, condition: impl Into<Condition>) -> Self {
        self.scope = self.scope.and_filter(condition);
        self
    }

    pub fn order_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.scope = self.scope.add_order_by(field, direction);
        self
    }

    pub fn index_by(mut self, key: impl Into<String>) -> Self {
        self.scope = self.scope.index_by(key);
        self
    }

    pub fn inverse_of(mut self, name: impl Into<String>) -> Self {
        self.inverse_of = Some(name.into());
        self
    }

    /// Populates `path` on every fetched target.
    pub fn with(mut self, path: impl Into<String>) -> Self {
        self.eager.push(path.into());
        self
    }

    pub fn is_one(&self) -> bool {
        self.cardinality == Cardinality::One
    }

    /// Returns `true` when the target stores the foreign key.
    ///
    /// Without an explicit setting, the relation is a back-reference if
    /// `link_key` is the source's primary key or is not an attribute of the
    /// source at all.
    pub fn is_back_ref(&self, source: &RecordType) -> bool {
        if let Some(back_ref) = self.back_ref {
            return back_ref;
        }

        self.link_key == source.primary_key_name() || !source.has_attr(&self.link_key)
    }

    /// Fresh query over the target table carrying the relation's scope.
    pub fn base_query(&self, target: &RecordType) -> Query {
        self.scope.clone().from(&target.table.name)
    }
}
