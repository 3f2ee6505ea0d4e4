//! 惰性序列操作库。
//!
//! 以[`Seq`]为入口构建流水线：先链接零个或多个惰性转换操作，
//! 再调用一个终止操作求值。转换操作仅包装上游迭代器，
//! 构造时不拉取任何元素。

mod err;
pub mod op;
mod seq;

pub use crate::err::SeqErr;
pub use crate::op::DefaultIfEmpty;
pub use crate::op::group::{GroupBy, Grouping, Lookup};
pub use crate::op::order::{OrderBy, Reversed};
pub use crate::op::set::{Distinct, DistinctBy, SetOp};
pub use crate::op::slice::{SkipLast, TakeLast};
pub use crate::op::zip::ZipWith;
pub use crate::seq::Seq;

/// 终止操作的结果类型
pub type SeqRes<T> = Result<T, SeqErr>;
