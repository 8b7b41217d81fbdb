use crate::eval;

use serde_json::{Map, Value as Json};
use std::collections::HashMap;
use tether_core::Result;

pub(crate) type Document = Map<String, Json>;

#[derive(Debug, Default)]
pub(crate) struct Store {
    collections: HashMap<String, Vec<Document>>,
}

impl Store {
    pub(crate) fn create_collection(&mut self, name: &str) {
        self.collections.entry(name.to_string()).or_default();
    }

    pub(crate) fn drop_collection(&mut self, name: &str) {
        self.collections.remove(name);
    }

    pub(crate) fn insert(&mut self, collection: &str, doc: Document) {
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(doc);
    }

    /// Documents matching `filter`, in insertion order.
    pub(crate) fn find(&self, collection: &str, filter: &Json) -> Result<Vec<&Document>> {
        let mut ret = vec![];
        for doc in self.collections.get(collection).into_iter().flatten() {
            if eval::matches(doc, filter)? {
                ret.push(doc);
            }
        }
        Ok(ret)
    }

    /// Applies `f` to every document matching `filter`, returning how many
    /// matched.
    pub(crate) fn update(
        &mut self,
        collection: &str,
        filter: &Json,
        mut f: impl FnMut(&mut Document),
    ) -> Result<u64> {
        let mut count = 0;
        if let Some(docs) = self.collections.get_mut(collection) {
            for doc in docs.iter_mut() {
                if eval::matches(doc, filter)? {
                    f(doc);
                    count += 1;
                }
            }
        }
        Ok(count)
    }

    pub(crate) fn delete(&mut self, collection: &str, filter: &Json) -> Result<u64> {
        let Some(docs) = self.collections.get_mut(collection) else {
            return Ok(0);
        };

        let mut keep = Vec::with_capacity(docs.len());
        for doc in docs.iter() {
            keep.push(!eval::matches(doc, filter)?);
        }

        let before = docs.len();
        let mut keep = keep.into_iter();
        docs.retain(|_| keep.next().unwrap_or(true));
        Ok((before - docs.len()) as u64)
    }
}
