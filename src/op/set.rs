use rustc_hash::FxHashSet;
use std::hash::Hash;

/// 去重适配器：每个值仅在首次出现时输出一次。
pub struct Distinct<I: Iterator> {
    source: I,
    seen: FxHashSet<I::Item>,
}

impl<I: Iterator> Distinct<I> {
    pub(crate) fn new(source: I) -> Self {
        Distinct { source, seen: FxHashSet::default() }
    }
}

impl<I> Iterator for Distinct<I>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.source.next()?;
            if self.seen.insert(item.clone()) {
                // 插入成功表示首次出现
                return Some(item);
            }
        }
    }
}

/// 按键去重适配器：键的相等性由键函数定义。
pub struct DistinctBy<I, F, K> {
    source: I,
    key_fn: F,
    seen: FxHashSet<K>,
}

impl<I, F, K> DistinctBy<I, F, K> {
    pub(crate) fn new(source: I, key_fn: F) -> Self {
        DistinctBy { source, key_fn, seen: FxHashSet::default() }
    }
}

impl<I, F, K> Iterator for DistinctBy<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Eq + Hash,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.source.next()?;
            if self.seen.insert((self.key_fn)(&item)) {
                return Some(item);
            }
        }
    }
}

enum SetMode {
    Intersect,
    Except,
}

/// 交集/差集适配器。
///
/// 构造时不求值，首次拉取时将对方序列物化为参照集，
/// 之后流式过滤自身元素，每个元素至多输出一次。
pub struct SetOp<I: Iterator, J> {
    source: I,
    other: Option<J>,
    keys: FxHashSet<I::Item>,
    mode: SetMode,
}

impl<I: Iterator, J> SetOp<I, J> {
    pub(crate) fn intersect(source: I, other: J) -> Self {
        SetOp { source, other: Some(other), keys: FxHashSet::default(), mode: SetMode::Intersect }
    }

    pub(crate) fn except(source: I, other: J) -> Self {
        SetOp { source, other: Some(other), keys: FxHashSet::default(), mode: SetMode::Except }
    }
}

impl<I, J> Iterator for SetOp<I, J>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
    I::Item: Eq + Hash + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(other) = self.other.take() {
            self.keys = other.collect();
        }
        loop {
            let item = self.source.next()?;
            let emit = match self.mode {
                // 命中即移除，保证同一元素至多输出一次
                SetMode::Intersect => self.keys.remove(&item),
                // 插入成功表示既不在参照集中、也未输出过
                SetMode::Except => self.keys.insert(item.clone()),
            };
            if emit {
                return Some(item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Seq;

    #[test]
    fn test_distinct_first_occurrence_order() {
        assert_eq!(Seq::of([1, 2, 2, 3, 3, 3]).distinct().to_list(), vec![1, 2, 3]);
        assert_eq!(Seq::of([3, 1, 3, 2, 1]).distinct().to_list(), vec![3, 1, 2]);
    }

    #[test]
    fn test_distinct_idempotence() {
        let once = Seq::of([1, 2, 2, 3, 3, 3]).distinct().to_list();
        let twice = Seq::of([1, 2, 2, 3, 3, 3]).distinct().distinct().to_list();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_distinct_by_key() {
        // 按个位数去重
        assert_eq!(Seq::of([11, 21, 12, 31, 22]).distinct_by(|x| x % 10).to_list(), vec![11, 12]);
    }

    #[test]
    fn test_union() {
        assert_eq!(Seq::of([1, 2, 3, 4, 5]).union([6, 7, 8]).to_list(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(Seq::of([1, 2, 2]).union([2, 3, 3]).to_list(), vec![1, 2, 3]);
    }

    #[test]
    fn test_intersect() {
        assert_eq!(Seq::of([1, 2, 3, 4, 5]).intersect([2, 4, 6]).to_list(), vec![2, 4]);
        // 自身重复元素至多输出一次
        assert_eq!(Seq::of([2, 2, 4, 4]).intersect([2, 4]).to_list(), vec![2, 4]);
        assert_eq!(Seq::of([1, 3]).intersect([2, 4]).to_list(), Vec::<i32>::new());
    }

    #[test]
    fn test_except() {
        assert_eq!(Seq::of([1, 2, 3, 4, 5]).except([1, 2]).to_list(), vec![3, 4, 5]);
        // 自身重复元素至多输出一次
        assert_eq!(Seq::of([3, 3, 4, 4, 1]).except([1, 2]).to_list(), vec![3, 4]);
        assert_eq!(Seq::of([1, 2]).except(Vec::<i32>::new()).to_list(), vec![1, 2]);
    }
}
