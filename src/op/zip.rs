/// 拉链适配器：与另一个序列逐对合并，在较短一方耗尽时结束。
pub struct ZipWith<I, J, F> {
    left: I,
    right: J,
    combine: F,
}

impl<I, J, F> ZipWith<I, J, F> {
    pub(crate) fn new(left: I, right: J, combine: F) -> Self {
        ZipWith { left, right, combine }
    }
}

impl<I, J, U, F> Iterator for ZipWith<I, J, F>
where
    I: Iterator,
    J: Iterator,
    F: FnMut(I::Item, J::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<Self::Item> {
        let left = self.left.next()?;
        let right = self.right.next()?;
        Some((self.combine)(left, right))
    }
}

#[cfg(test)]
mod tests {
    use crate::Seq;

    #[test]
    fn test_zip_with_stops_at_shortest() {
        let pairs = Seq::of([1, 2, 3, 4, 5]).zip_with([6, 7, 8], |a, b| (a, b)).to_list();
        assert_eq!(pairs, vec![(1, 6), (2, 7), (3, 8)]);
    }

    #[test]
    fn test_zip_with_shorter_self() {
        let sums = Seq::of([1, 2]).zip_with([10, 20, 30], |a, b| a + b).to_list();
        assert_eq!(sums, vec![11, 22]);
    }

    #[test]
    fn test_zip_with_empty() {
        assert_eq!(Seq::of(Vec::<i32>::new()).zip_with([1, 2], |a, b| a + b).to_list(), Vec::<i32>::new());
        assert_eq!(Seq::of([1, 2]).zip_with(Vec::<i32>::new(), |a, b| a + b).to_list(), Vec::<i32>::new());
    }

    #[test]
    fn test_zip_with_different_types() {
        let labeled = Seq::of([1, 2, 3]).zip_with(["a", "b", "c"], |n, s| format!("{s}{n}")).to_list();
        assert_eq!(labeled, vec!["a1", "b2", "c3"]);
    }
}
