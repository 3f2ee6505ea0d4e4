use std::cmp::Ordering;
use std::vec;

pub(crate) type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering>;

/// 排序适配器：按比较器稳定排序，比较结果相等的元素维持原有相对顺序。
///
/// 构造时不求值，首次拉取时物化并排序整个源，仅支持有限序列。
pub struct OrderBy<I: Iterator> {
    source: Option<I>,
    cmp: Comparator<I::Item>,
    sorted: Option<vec::IntoIter<I::Item>>,
}

impl<I: Iterator> OrderBy<I> {
    pub(crate) fn new(source: I, cmp: Comparator<I::Item>) -> Self {
        OrderBy { source: Some(source), cmp, sorted: None }
    }

    /// 组合次级比较器，仅在主比较结果相等时生效。
    pub(crate) fn refine(mut self, secondary: Comparator<I::Item>) -> Self
    where
        I::Item: 'static,
    {
        let primary = std::mem::replace(&mut self.cmp, Box::new(|_, _| Ordering::Equal));
        self.cmp = Box::new(move |a, b| primary(a, b).then_with(|| secondary(a, b)));
        self
    }
}

impl<I: Iterator> Iterator for OrderBy<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(source) = self.source.take() {
            let mut items: Vec<_> = source.collect();
            // Vec::sort_by 为稳定排序
            items.sort_by(|a, b| (self.cmp)(a, b));
            self.sorted = Some(items.into_iter());
        }
        self.sorted.as_mut()?.next()
    }
}

/// 逆序适配器：首次拉取时物化整个源，再从末尾逐个输出，仅支持有限序列。
pub struct Reversed<I: Iterator> {
    source: Option<I>,
    items: Vec<I::Item>,
}

impl<I: Iterator> Reversed<I> {
    pub(crate) fn new(source: I) -> Self {
        Reversed { source: Some(source), items: Vec::new() }
    }
}

impl<I: Iterator> Iterator for Reversed<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(source) = self.source.take() {
            self.items = source.collect();
        }
        self.items.pop()
    }
}

#[cfg(test)]
mod tests {
    use crate::Seq;
    use ordered_float::OrderedFloat;

    #[test]
    fn test_order_by_ascending() {
        assert_eq!(Seq::of([3, 1, 2]).order_by(|x| *x).to_list(), vec![1, 2, 3]);
        assert_eq!(Seq::of([1, 2, 3]).order_by(|x| -x).to_list(), vec![3, 2, 1]);
    }

    #[test]
    fn test_order_by_stable() {
        let source = vec![(1, "a"), (1, "b")];
        let sorted = Seq::of(source).order_by(|pair| pair.0).to_list();
        assert_eq!(sorted, vec![(1, "a"), (1, "b")]);
    }

    #[test]
    fn test_order_by_float_key() {
        let sorted = Seq::of([2.5f64, 0.5, 1.5]).order_by(|x| OrderedFloat(*x)).to_list();
        assert_eq!(sorted, vec![0.5, 1.5, 2.5]);
    }

    #[test]
    fn test_order_by_cmp() {
        let sorted = Seq::of([1, 3, 2]).order_by_cmp(|a, b| b.cmp(a)).to_list();
        assert_eq!(sorted, vec![3, 2, 1]);
    }

    #[test]
    fn test_then_by_refines_ties() {
        // 主键为奇偶性，次级键为数值本身
        let sorted = Seq::of([1, 2, 3, 4, 5]).order_by(|x| x % 2).then_by(|x| *x).to_list();
        assert_eq!(sorted, vec![2, 4, 1, 3, 5]);
    }

    #[test]
    fn test_then_by_preserves_remaining_ties() {
        let source = vec![(1, 1, "a"), (1, 1, "b"), (1, 0, "c")];
        let sorted = Seq::of(source).order_by(|t| t.0).then_by(|t| t.1).to_list();
        assert_eq!(sorted, vec![(1, 0, "c"), (1, 1, "a"), (1, 1, "b")]);
    }

    #[test]
    fn test_reverse() {
        assert_eq!(Seq::of([1, 2, 3, 4, 5]).reverse().to_list(), vec![5, 4, 3, 2, 1]);
        assert_eq!(Seq::of(Vec::<i32>::new()).reverse().to_list(), Vec::<i32>::new());
    }

    #[test]
    fn test_reverse_round_trip() {
        let source = vec![1, 2, 2, 3];
        assert_eq!(Seq::of(source.clone()).reverse().reverse().to_list(), source);
    }
}
