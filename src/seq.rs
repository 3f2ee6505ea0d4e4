use crate::SeqRes;
use crate::err::SeqErr;
use crate::op::DefaultIfEmpty;
use crate::op::group::{GroupBy, Lookup};
use crate::op::order::{OrderBy, Reversed};
use crate::op::set::{Distinct, DistinctBy, SetOp};
use crate::op::slice::{SkipLast, TakeLast};
use crate::op::zip::ZipWith;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::fmt::Debug;
use std::hash::Hash;
use std::iter;

/// 序列流水线。
///
/// 包装任意迭代器，提供惰性转换操作与终止操作。
/// 转换操作返回新的[`Seq`]，构造时不做任何元素求值；
/// 终止操作消费流水线并返回具体值。
pub struct Seq<I> {
    iter: I,
}

impl<I: Iterator> Iterator for Seq<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I: Iterator> Seq<I> {
    /// 从迭代器构建序列。
    pub fn new(iter: I) -> Seq<I> {
        Seq { iter }
    }

    /// 从任意可迭代的数据源构建序列。
    pub fn of<C: IntoIterator<IntoIter = I>>(source: C) -> Seq<I> {
        Seq { iter: source.into_iter() }
    }

    /* **************************************** 惰性转换 **************************************** */

    /// 保留满足条件的元素，丢弃其他元素，维持原有顺序。
    pub fn filter<P>(self, pred: P) -> Seq<iter::Filter<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Seq { iter: self.iter.filter(pred) }
    }

    /// 将每个元素映射为新值，一对一，维持原有顺序。
    pub fn project<U, F>(self, f: F) -> Seq<iter::Map<I, F>>
    where
        F: FnMut(I::Item) -> U,
    {
        Seq { iter: self.iter.map(f) }
    }

    /// 保留前`count`个元素，丢弃后续的其他元素。
    /// 满足数量之后不再拉取上游元素。
    pub fn take(self, count: usize) -> Seq<iter::Take<I>> {
        Seq { iter: self.iter.take(count) }
    }

    /// 持续保留元素，直到条件首次不满足，之后不再拉取上游元素。
    pub fn take_while<P>(self, pred: P) -> Seq<iter::TakeWhile<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Seq { iter: self.iter.take_while(pred) }
    }

    /// 丢弃前`count`个元素，保留后续的其他元素。
    pub fn skip(self, count: usize) -> Seq<iter::Skip<I>> {
        Seq { iter: self.iter.skip(count) }
    }

    /// 持续丢弃元素，直到条件首次不满足，保留从首个不满足元素起的剩余元素。
    pub fn skip_while<P>(self, pred: P) -> Seq<iter::SkipWhile<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Seq { iter: self.iter.skip_while(pred) }
    }

    /// 保留末尾`count`个元素。
    /// 末尾位置在耗尽前未知，首次拉取时需要缓冲整个序列，仅支持有限序列。
    pub fn take_last(self, count: usize) -> Seq<TakeLast<I>> {
        Seq { iter: TakeLast::new(self.iter, count) }
    }

    /// 丢弃末尾`count`个元素。
    /// 内部以`count`长度的缓冲延迟输出，流式处理，仅支持有限序列。
    pub fn skip_last(self, count: usize) -> Seq<SkipLast<I>> {
        Seq { iter: SkipLast::new(self.iter, count) }
    }

    /// 连接另一个序列：先输出自身所有元素，再输出对方所有元素。
    pub fn concat<C>(self, other: C) -> Seq<iter::Chain<I, C::IntoIter>>
    where
        C: IntoIterator<Item = I::Item>,
    {
        Seq { iter: self.iter.chain(other) }
    }

    /// 在末尾追加单个元素。
    pub fn append(self, value: I::Item) -> Seq<iter::Chain<I, iter::Once<I::Item>>> {
        Seq { iter: self.iter.chain(iter::once(value)) }
    }

    /// 在开头插入单个元素。
    pub fn prepend(self, value: I::Item) -> Seq<iter::Chain<iter::Once<I::Item>, I>> {
        Seq { iter: iter::once(value).chain(self.iter) }
    }

    /// 去重，每个值仅在首次出现时输出一次，维持首次出现的顺序。
    pub fn distinct(self) -> Seq<Distinct<I>>
    where
        I::Item: Eq + Hash + Clone,
    {
        Seq { iter: Distinct::new(self.iter) }
    }

    /// 按键函数去重，每个键仅在首次出现时输出对应元素。
    pub fn distinct_by<K, F>(self, key_fn: F) -> Seq<DistinctBy<I, F, K>>
    where
        K: Eq + Hash,
        F: FnMut(&I::Item) -> K,
    {
        Seq { iter: DistinctBy::new(self.iter, key_fn) }
    }

    /// 并集：输出自身元素，再输出对方中尚未输出过的元素，整体去重。
    /// 等价于连接后去重。
    pub fn union<C>(self, other: C) -> Seq<Distinct<iter::Chain<I, C::IntoIter>>>
    where
        C: IntoIterator<Item = I::Item>,
        I::Item: Eq + Hash + Clone,
    {
        self.concat(other).distinct()
    }

    /// 交集：输出自身中同时出现在对方序列的元素，每个至多输出一次。
    /// 首次拉取时物化对方序列。
    pub fn intersect<C>(self, other: C) -> Seq<SetOp<I, C::IntoIter>>
    where
        C: IntoIterator<Item = I::Item>,
        I::Item: Eq + Hash + Clone,
    {
        Seq { iter: SetOp::intersect(self.iter, other.into_iter()) }
    }

    /// 差集：输出自身中未出现在对方序列的元素，每个至多输出一次。
    /// 首次拉取时物化对方序列。
    pub fn except<C>(self, other: C) -> Seq<SetOp<I, C::IntoIter>>
    where
        C: IntoIterator<Item = I::Item>,
        I::Item: Eq + Hash + Clone,
    {
        Seq { iter: SetOp::except(self.iter, other.into_iter()) }
    }

    /// 按键升序稳定排序，键相等的元素维持原有相对顺序。
    /// 首次拉取时物化并排序整个序列，仅支持有限序列。
    /// 可继续调用[`Seq::then_by`]按次级键细化排序。
    pub fn order_by<K, F>(self, key_fn: F) -> Seq<OrderBy<I>>
    where
        K: Ord,
        F: Fn(&I::Item) -> K + 'static,
    {
        Seq { iter: OrderBy::new(self.iter, Box::new(move |a, b| key_fn(a).cmp(&key_fn(b)))) }
    }

    /// 按自定义比较器稳定排序。
    pub fn order_by_cmp<F>(self, cmp: F) -> Seq<OrderBy<I>>
    where
        F: Fn(&I::Item, &I::Item) -> Ordering + 'static,
    {
        Seq { iter: OrderBy::new(self.iter, Box::new(cmp)) }
    }

    /// 逆序输出。首次拉取时物化整个序列，仅支持有限序列。
    pub fn reverse(self) -> Seq<Reversed<I>> {
        Seq { iter: Reversed::new(self.iter) }
    }

    /// 按键分组，输出[`Grouping`]序列。
    ///
    /// 分组顺序为各键首次出现的顺序，组内元素维持原有顺序。
    /// 任一键的最终成员须到输入结束才能确定，故首次拉取时物化整个序列。
    ///
    /// [`Grouping`]: crate::op::group::Grouping
    pub fn group_by<K, F>(self, key_fn: F) -> Seq<GroupBy<I, K, F>>
    where
        K: Eq + Hash + Clone,
        F: FnMut(&I::Item) -> K,
    {
        Seq { iter: GroupBy::new(self.iter, key_fn) }
    }

    /// 与另一个序列逐对合并，输出合并函数的结果，在较短一方耗尽时结束。
    pub fn zip_with<C, U, F>(self, other: C, combine: F) -> Seq<ZipWith<I, C::IntoIter, F>>
    where
        C: IntoIterator,
        F: FnMut(I::Item, C::Item) -> U,
    {
        Seq { iter: ZipWith::new(self.iter, other.into_iter(), combine) }
    }

    /// 序列为空时输出单个默认值，否则原样输出。
    pub fn default_if_empty(self) -> Seq<DefaultIfEmpty<I>>
    where
        I::Item: Default,
    {
        Seq { iter: DefaultIfEmpty::new(self.iter, I::Item::default()) }
    }

    /// 序列为空时输出单个指定的兜底值，否则原样输出。
    pub fn default_if_empty_or(self, fallback: I::Item) -> Seq<DefaultIfEmpty<I>> {
        Seq { iter: DefaultIfEmpty::new(self.iter, fallback) }
    }

    /* **************************************** 终止操作 **************************************** */

    /// 无种子左折叠：从首个元素开始，自左向右逐对应用累积函数。
    ///
    /// # Errors
    /// 序列为空时返回[`SeqErr::EmptySequence`]。
    pub fn aggregate<F>(mut self, mut acc_fn: F) -> SeqRes<I::Item>
    where
        F: FnMut(I::Item, I::Item) -> I::Item,
    {
        let mut acc = self.iter.next().ok_or(SeqErr::EmptySequence)?;
        for item in self.iter {
            acc = acc_fn(acc, item);
        }
        Ok(acc)
    }

    /// 全称量化：所有元素都满足条件时为true，空序列为true。
    pub fn all<P>(mut self, mut pred: P) -> bool
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.iter.all(|item| pred(&item))
    }

    /// 存在量化：任一元素满足条件时为true，空序列为false。
    pub fn any<P>(mut self, mut pred: P) -> bool
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.iter.any(|item| pred(&item))
    }

    /// 无条件的存在量化：序列至少有一个元素时为true。
    pub fn non_empty(mut self) -> bool {
        self.iter.next().is_some()
    }

    /// 按相等比较查找指定值。
    pub fn contains(mut self, value: &I::Item) -> bool
    where
        I::Item: PartialEq,
    {
        self.iter.any(|item| item == *value)
    }

    /// 统计元素数量，完全消费序列。
    pub fn count(self) -> usize {
        self.iter.count()
    }

    /// 统计元素数量，以64位整数返回。
    pub fn long_count(self) -> u64 {
        self.iter.fold(0u64, |n, _| n + 1)
    }

    /// 累加所有元素，空序列返回加法单位元（0）。
    pub fn sum(self) -> I::Item
    where
        I::Item: iter::Sum<I::Item>,
    {
        self.iter.sum()
    }

    /// 计算所有元素的平均值。
    ///
    /// # Errors
    /// 序列为空时返回[`SeqErr::EmptySequence`]。
    pub fn average(self) -> SeqRes<f64>
    where
        I::Item: Into<f64>,
    {
        let mut total = 0.0;
        let mut count = 0u64;
        for item in self.iter {
            total += item.into();
            count += 1;
        }
        if count == 0 { Err(SeqErr::EmptySequence) } else { Ok(total / count as f64) }
    }

    /// 返回最大元素。
    ///
    /// # Errors
    /// 序列为空时返回[`SeqErr::EmptySequence`]。
    pub fn max(self) -> SeqRes<I::Item>
    where
        I::Item: Ord,
    {
        self.iter.max().ok_or(SeqErr::EmptySequence)
    }

    /// 返回最小元素。
    ///
    /// # Errors
    /// 序列为空时返回[`SeqErr::EmptySequence`]。
    pub fn min(self) -> SeqRes<I::Item>
    where
        I::Item: Ord,
    {
        self.iter.min().ok_or(SeqErr::EmptySequence)
    }

    /// 返回指定索引（从0开始）处的元素，找到后不再拉取上游元素。
    ///
    /// # Errors
    /// 索引超出序列长度时返回[`SeqErr::IndexOutOfRange`]。
    /// 负索引在类型上不可表示。
    pub fn element_at(self, index: usize) -> SeqRes<I::Item> {
        let mut len = 0;
        for item in self.iter {
            if len == index {
                return Ok(item);
            }
            len += 1;
        }
        Err(SeqErr::IndexOutOfRange { index, len })
    }

    /// 返回指定索引处的元素，索引越界时返回类型默认值而不报错。
    pub fn element_at_or_default(self, index: usize) -> I::Item
    where
        I::Item: Default,
    {
        self.element_at(index).unwrap_or_default()
    }

    /// 返回首个元素。
    ///
    /// # Errors
    /// 序列为空时返回[`SeqErr::NoMatchingElement`]。
    pub fn first(mut self) -> SeqRes<I::Item> {
        self.iter.next().ok_or(SeqErr::NoMatchingElement)
    }

    /// 返回首个满足条件的元素，找到后不再拉取上游元素。
    ///
    /// # Errors
    /// 无元素满足条件时返回[`SeqErr::NoMatchingElement`]。
    pub fn first_by<P>(mut self, mut pred: P) -> SeqRes<I::Item>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.iter.find(|item| pred(item)).ok_or(SeqErr::NoMatchingElement)
    }

    /// 返回首个元素，序列为空时返回类型默认值而不报错。
    pub fn first_or_default(self) -> I::Item
    where
        I::Item: Default,
    {
        self.first().unwrap_or_default()
    }

    /// 返回首个满足条件的元素，无匹配时返回类型默认值而不报错。
    pub fn first_by_or_default<P>(self, pred: P) -> I::Item
    where
        I::Item: Default,
        P: FnMut(&I::Item) -> bool,
    {
        self.first_by(pred).unwrap_or_default()
    }

    /// 返回末尾元素。
    ///
    /// # Errors
    /// 序列为空时返回[`SeqErr::NoMatchingElement`]。
    pub fn last(self) -> SeqRes<I::Item> {
        self.iter.last().ok_or(SeqErr::NoMatchingElement)
    }

    /// 返回末尾一个满足条件的元素。
    ///
    /// # Errors
    /// 无元素满足条件时返回[`SeqErr::NoMatchingElement`]。
    pub fn last_by<P>(self, mut pred: P) -> SeqRes<I::Item>
    where
        P: FnMut(&I::Item) -> bool,
    {
        let mut found = None;
        for item in self.iter {
            if pred(&item) {
                found = Some(item);
            }
        }
        found.ok_or(SeqErr::NoMatchingElement)
    }

    /// 返回末尾元素，序列为空时返回类型默认值而不报错。
    pub fn last_or_default(self) -> I::Item
    where
        I::Item: Default,
    {
        self.last().unwrap_or_default()
    }

    /// 返回末尾一个满足条件的元素，无匹配时返回类型默认值而不报错。
    pub fn last_by_or_default<P>(self, pred: P) -> I::Item
    where
        I::Item: Default,
        P: FnMut(&I::Item) -> bool,
    {
        self.last_by(pred).unwrap_or_default()
    }

    /// 返回序列的唯一元素。
    ///
    /// # Errors
    /// 序列为空时返回[`SeqErr::EmptySequence`]，
    /// 多于一个元素时返回[`SeqErr::MultipleElements`]。
    pub fn single(mut self) -> SeqRes<I::Item> {
        let sole = self.iter.next().ok_or(SeqErr::EmptySequence)?;
        match self.iter.next() {
            None => Ok(sole),
            Some(_) => Err(SeqErr::MultipleElements),
        }
    }

    /// 逐元素比较两个序列是否相等，要求长度与顺序完全一致。
    pub fn sequence_equal<C>(mut self, other: C) -> bool
    where
        C: IntoIterator<Item = I::Item>,
        I::Item: PartialEq,
    {
        let mut other = other.into_iter();
        loop {
            match (self.iter.next(), other.next()) {
                (Some(a), Some(b)) if a == b => {}
                (None, None) => return true,
                _ => return false,
            }
        }
    }

    /// 物化为可增长的有序容器。
    pub fn to_list(self) -> Vec<I::Item> {
        self.iter.collect()
    }

    /// 物化为定长的有序容器。
    pub fn to_array(self) -> Box<[I::Item]> {
        self.iter.collect()
    }

    /// 物化为键到值的唯一映射。
    ///
    /// # Arguments
    /// * `key_fn` - 键函数
    /// * `value_fn` - 值函数
    ///
    /// # Errors
    /// 键函数产生重复键时返回[`SeqErr::DuplicateKey`]。
    pub fn to_dictionary<K, V, FK, FV>(self, mut key_fn: FK, mut value_fn: FV) -> SeqRes<FxHashMap<K, V>>
    where
        K: Eq + Hash + Debug,
        FK: FnMut(&I::Item) -> K,
        FV: FnMut(I::Item) -> V,
    {
        let mut map = FxHashMap::default();
        for item in self.iter {
            match map.entry(key_fn(&item)) {
                Entry::Occupied(occupied) => {
                    return Err(SeqErr::DuplicateKey { key: format!("{:?}", occupied.key()) });
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(value_fn(item));
                }
            }
        }
        Ok(map)
    }

    /// 物化为键到有序值列表的多值映射，重复键累积而不报错。
    pub fn to_lookup<K, F>(self, key_fn: F) -> Lookup<K, I::Item>
    where
        K: Eq + Hash + Clone,
        F: FnMut(&I::Item) -> K,
    {
        Lookup::build(self.iter, key_fn)
    }
}

impl<I: Iterator> Seq<OrderBy<I>> {
    /// 按次级键细化排序，仅调整主键相等的元素，其余并列关系维持原有相对顺序。
    pub fn then_by<K, F>(self, key_fn: F) -> Seq<OrderBy<I>>
    where
        K: Ord,
        F: Fn(&I::Item) -> K + 'static,
        I::Item: 'static,
    {
        Seq { iter: self.iter.refine(Box::new(move |a, b| key_fn(a).cmp(&key_fn(b)))) }
    }
}
