mod cond_and;
pub use cond_and::CondAnd;

mod cond_between;
pub use cond_between::CondBetween;

mod cond_compare;
pub use cond_compare::{CompareOp, CondCompare};

mod cond_contains;
pub use cond_contains::CondContains;

mod cond_hash;
pub use cond_hash::CondHash;

mod cond_id;
pub use cond_id::CondId;

mod cond_in_list;
pub use cond_in_list::CondInList;

mod cond_like;
pub use cond_like::CondLike;

mod cond_not;
pub use cond_not::CondNot;

mod cond_or;
pub use cond_or::CondOr;

pub use cond_test::{CondTest, TestOp};

mod condition;
pub use condition::Condition;

mod direction;
pub use direction::Direction;

mod like;
pub use like::LikePattern;

mod operator;
pub use operator::{Arity, Operator};

mod order_by_in;
pub use order_by_in::OrderByIn;

mod parse;

mod prune;

mod query;
pub use query::Query;

mod row;
pub use row::Row;

mod value;
pub use value::Value;

mod value_cmp;

mod value_json;
