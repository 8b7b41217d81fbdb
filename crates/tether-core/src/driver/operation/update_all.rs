use super::*;

#[derive(Debug, Clone)]
pub struct UpdateAll {
    pub query: stmt::Query,

    pub values: stmt::Row,
}

impl From<UpdateAll> for Operation {
    fn from(value: UpdateAll) -> Self {
        Self::UpdateAll(value)
    }
}
