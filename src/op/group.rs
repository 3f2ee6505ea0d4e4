use rustc_hash::FxHashMap;
use std::hash::Hash;
use std::slice;
use std::vec;

/// 分组：一个键与共享该键的有序成员子序列。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping<K, T> {
    key: K,
    items: Vec<T>,
}

impl<K, T> Grouping<K, T> {
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<K, T> IntoIterator for Grouping<K, T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, K, T> IntoIterator for &'a Grouping<K, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// 分组适配器：按键函数划分分组并逐组输出。
///
/// 任一键的最终成员须到输入结束才能确定，故首次拉取时物化整个源，
/// 仅支持有限序列。分组顺序为各键首次出现的顺序，组内维持原有顺序。
pub struct GroupBy<I: Iterator, K, F> {
    source: Option<(I, F)>,
    groups: Option<vec::IntoIter<Grouping<K, I::Item>>>,
}

impl<I: Iterator, K, F> GroupBy<I, K, F> {
    pub(crate) fn new(source: I, key_fn: F) -> Self {
        GroupBy { source: Some((source, key_fn)), groups: None }
    }
}

impl<I, K, F> Iterator for GroupBy<I, K, F>
where
    I: Iterator,
    K: Eq + Hash + Clone,
    F: FnMut(&I::Item) -> K,
{
    type Item = Grouping<K, I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((source, key_fn)) = self.source.take() {
            self.groups = Some(collect_groups(source, key_fn).into_iter());
        }
        self.groups.as_mut()?.next()
    }
}

/// 多值映射：键到共享该键的有序值列表。
///
/// 与唯一映射不同，重复键的值依次累积。分组顺序为各键首次出现的顺序。
pub struct Lookup<K, T> {
    groups: Vec<Grouping<K, T>>,
    index: FxHashMap<K, usize>,
}

impl<K: Eq + Hash + Clone, T> Lookup<K, T> {
    pub(crate) fn build<I, F>(source: I, key_fn: F) -> Self
    where
        I: Iterator<Item = T>,
        F: FnMut(&T) -> K,
    {
        let groups = collect_groups(source, key_fn);
        let index = groups.iter().enumerate().map(|(slot, group)| (group.key.clone(), slot)).collect();
        Lookup { groups, index }
    }

    pub fn get(&self, key: &K) -> Option<&[T]> {
        self.index.get(key).map(|&slot| self.groups[slot].items())
    }

    /// 返回指定键的成员，键不存在时返回空切片而不报错。
    pub fn items(&self, key: &K) -> &[T] {
        self.get(key).unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// 分组数量
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Grouping<K, T>> {
        self.groups.iter()
    }
}

impl<K, T> IntoIterator for Lookup<K, T> {
    type Item = Grouping<K, T>;
    type IntoIter = vec::IntoIter<Grouping<K, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a, K, T> IntoIterator for &'a Lookup<K, T> {
    type Item = &'a Grouping<K, T>;
    type IntoIter = slice::Iter<'a, Grouping<K, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

fn collect_groups<I, K, F>(source: I, mut key_fn: F) -> Vec<Grouping<K, I::Item>>
where
    I: Iterator,
    K: Eq + Hash + Clone,
    F: FnMut(&I::Item) -> K,
{
    let mut index: FxHashMap<K, usize> = FxHashMap::default();
    let mut groups: Vec<Grouping<K, I::Item>> = Vec::new();
    for item in source {
        let key = key_fn(&item);
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            groups.push(Grouping { key, items: Vec::new() });
            groups.len() - 1
        });
        groups[slot].items.push(item);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Seq;

    #[test]
    fn test_group_by_parity() {
        let groups: Vec<_> = Seq::of([1, 2, 3, 4, 5]).group_by(|x| x % 2 == 0).to_list();
        assert_eq!(groups.len(), 2);
        // false的键首次出现在元素1，分组排在前面
        assert_eq!(groups[0].key(), &false);
        assert_eq!(groups[0].items(), &[1, 3, 5]);
        assert_eq!(groups[1].key(), &true);
        assert_eq!(groups[1].items(), &[2, 4]);
    }

    #[test]
    fn test_group_by_empty() {
        assert_eq!(Seq::of(Vec::<i32>::new()).group_by(|x| x % 2).count(), 0);
    }

    #[test]
    fn test_group_by_preserves_source_order_within_group() {
        let groups: Vec<_> = Seq::of(["ab", "cd", "a", "ef", "b"]).group_by(|s| s.len()).to_list();
        assert_eq!(groups[0].key(), &2);
        assert_eq!(groups[0].items(), &["ab", "cd", "ef"]);
        assert_eq!(groups[1].key(), &1);
        assert_eq!(groups[1].items(), &["a", "b"]);
    }

    #[test]
    fn test_grouping_iteration() {
        let groups: Vec<_> = Seq::of([1, 2, 3]).group_by(|x| x % 2).to_list();
        let odd: Vec<i32> = (&groups[0]).into_iter().copied().collect();
        assert_eq!(odd, vec![1, 3]);
        assert_eq!(groups[0].len(), 2);
        assert!(!groups[0].is_empty());
    }

    #[test]
    fn test_lookup_accumulates_duplicate_keys() {
        let lookup = Seq::of([1, 2, 3, 4, 5]).to_lookup(|x| x % 2);
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.items(&1), &[1, 3, 5]);
        assert_eq!(lookup.items(&0), &[2, 4]);
        assert_eq!(lookup.get(&2), None);
        assert_eq!(lookup.items(&2), &[] as &[i32]);
        assert!(lookup.contains_key(&0));
        assert!(!lookup.contains_key(&7));
    }

    #[test]
    fn test_lookup_first_occurrence_order() {
        let lookup = Seq::of([1, 2, 3, 4, 5]).to_lookup(|x| x % 2);
        let keys: Vec<i32> = lookup.iter().map(|group| *group.key()).collect();
        assert_eq!(keys, vec![1, 0]);
    }

    #[test]
    fn test_collect_groups_direct() {
        let groups = collect_groups([1i32, 1, 2].into_iter(), |x| *x);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].items(), &[1, 1]);
        assert_eq!(groups[1].items(), &[2]);
    }
}
