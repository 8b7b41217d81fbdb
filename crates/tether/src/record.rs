use indexmap::IndexMap;
use std::sync::Arc;
use tether_core::{
    schema::RecordType,
    stmt::{Row, Value},
};

/// An entity of some record type: attribute values, the snapshot last
/// written to or read from storage, and a cache of populated relations.
#[derive(Debug, Clone)]
pub struct Record {
    ty: Arc<RecordType>,

    attributes: Row,

    /// `None` until the record is persisted
    original: Option<Row>,

    related: IndexMap<String, Related>,
}

/// A populated relation
#[derive(Debug, Clone, PartialEq)]
pub enum Related {
    One(Option<Box<Record>>),
    Many(Vec<Record>),

    /// A many relation keyed by the relation's index key
    Indexed(IndexMap<Value, Record>),
}

impl Record {
    /// A new, unsaved record.
    pub fn new(ty: &Arc<RecordType>) -> Record {
        Record {
            ty: ty.clone(),
            attributes: Row::new(),
            original: None,
            related: IndexMap::new(),
        }
    }

    /// A record read from storage.
    pub(crate) fn from_row(ty: &Arc<RecordType>, row: Row) -> Record {
        Record {
            ty: ty.clone(),
            original: Some(row.clone()),
            attributes: row,
            related: IndexMap::new(),
        }
    }

    pub fn record_type(&self) -> &Arc<RecordType> {
        &self.ty
    }

    pub fn type_name(&self) -> &str {
        &self.ty.name
    }

    pub fn attributes(&self) -> &Row {
        &self.attributes
    }

    /// Returns the attribute value; unset attributes read as null.
    pub fn get(&self, attr: &str) -> &Value {
        const NULL: &Value = &Value::Null;
        self.attributes.get(attr).unwrap_or(NULL)
    }

    pub fn set(&mut self, attr: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.attributes.insert(attr.into(), value.into());
        self
    }

    pub fn with(mut self, attr: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(attr, value);
        self
    }

    /// The value as of the last successful read or write.
    pub fn old_attr(&self, attr: &str) -> Option<&Value> {
        self.original.as_ref()?.get(attr)
    }

    pub fn primary_key(&self) -> &str {
        self.ty.primary_key_name()
    }

    /// The record's identity, once persisted.
    pub fn id(&self) -> Option<&Value> {
        if self.is_new() {
            return None;
        }
        Some(self.get(self.primary_key())).filter(|id| !id.is_null())
    }

    pub fn is_new(&self) -> bool {
        self.original.is_none()
    }

    /// Attributes that differ from the snapshot. Every attribute of a new
    /// record is dirty.
    pub fn dirty_attributes(&self) -> Row {
        let Some(original) = &self.original else {
            return self.attributes.clone();
        };

        self.attributes
            .iter()
            .filter(|(name, value)| original.get(*name) != Some(*value))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty_attributes().is_empty()
    }

    /// Refreshes the snapshot after a successful write.
    pub(crate) fn mark_persisted(&mut self) {
        self.original = Some(self.attributes.clone());
    }

    /// The attributes and snapshot without any cached relations.
    pub fn shallow(&self) -> Record {
        Record {
            ty: self.ty.clone(),
            attributes: self.attributes.clone(),
            original: self.original.clone(),
            related: IndexMap::new(),
        }
    }

    pub fn related(&self, name: &str) -> Option<&Related> {
        self.related.get(name)
    }

    pub fn related_mut(&mut self, name: &str) -> Option<&mut Related> {
        self.related.get_mut(name)
    }

    pub fn set_related(&mut self, name: impl Into<String>, related: Related) {
        self.related.insert(name.into(), related);
    }

    /// Drops a cached relation so the next read fetches it again.
    pub fn unset_related(&mut self, name: &str) -> Option<Related> {
        self.related.shift_remove(name)
    }

    pub fn is_related_populated(&self, name: &str) -> bool {
        self.related.contains_key(name)
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Record) -> bool {
        self.ty.name == other.ty.name && self.attributes == other.attributes
    }
}

impl Related {
    /// An empty relation of the right shape.
    pub(crate) fn empty(one: bool, indexed: bool) -> Related {
        match (one, indexed) {
            (true, _) => Related::One(None),
            (false, true) => Related::Indexed(IndexMap::new()),
            (false, false) => Related::Many(vec![]),
        }
    }

    pub fn as_one(&self) -> Option<&Record> {
        match self {
            Related::One(record) => record.as_deref(),
            _ => None,
        }
    }

    pub fn as_many(&self) -> Option<&[Record]> {
        match self {
            Related::Many(records) => Some(records),
            _ => None,
        }
    }

    pub fn as_indexed(&self) -> Option<&IndexMap<Value, Record>> {
        match self {
            Related::Indexed(records) => Some(records),
            _ => None,
        }
    }

    /// Every related record, whatever the shape.
    pub fn records(&self) -> Vec<&Record> {
        match self {
            Related::One(record) => record.iter().map(|record| &**record).collect(),
            Related::Many(records) => records.iter().collect(),
            Related::Indexed(records) => records.values().collect(),
        }
    }

    pub(crate) fn records_mut(&mut self) -> Vec<&mut Record> {
        match self {
            Related::One(record) => record.iter_mut().map(|record| &mut **record).collect(),
            Related::Many(records) => records.iter_mut().collect(),
            Related::Indexed(records) => records.values_mut().collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Related::One(record) => record.iter().len(),
            Related::Many(records) => records.len(),
            Related::Indexed(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Primary keys of the related records, in order.
    pub fn ids(&self) -> Vec<Value> {
        self.records()
            .into_iter()
            .map(|record| record.get(record.primary_key()).clone())
            .collect()
    }
}
