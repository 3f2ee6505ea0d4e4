pub mod group;
pub mod order;
pub mod set;
pub mod slice;
pub mod zip;

/// default-if-empty适配器：源为空时输出单个兜底值，否则原样透传。
pub struct DefaultIfEmpty<I: Iterator> {
    source: I,
    fallback: Option<I::Item>,
    started: bool,
}

impl<I: Iterator> DefaultIfEmpty<I> {
    pub(crate) fn new(source: I, fallback: I::Item) -> Self {
        DefaultIfEmpty { source, fallback: Some(fallback), started: false }
    }
}

impl<I: Iterator> Iterator for DefaultIfEmpty<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return match self.source.next() {
                Some(item) => {
                    self.fallback = None;
                    Some(item)
                }
                None => self.fallback.take(),
            };
        }
        self.source.next()
    }
}

#[cfg(test)]
mod tests {
    use crate::Seq;

    #[test]
    fn test_default_if_empty_on_empty() {
        assert_eq!(Seq::of(Vec::<i32>::new()).default_if_empty().to_list(), vec![0]);
        assert_eq!(Seq::of(Vec::<i32>::new()).default_if_empty_or(9).to_list(), vec![9]);
    }

    #[test]
    fn test_default_if_empty_passthrough() {
        assert_eq!(Seq::of([1, 2, 3]).default_if_empty().to_list(), vec![1, 2, 3]);
        assert_eq!(Seq::of([1]).default_if_empty_or(9).to_list(), vec![1]);
    }

    #[test]
    fn test_default_if_empty_emits_fallback_once() {
        let mut seq = Seq::of(Vec::<i32>::new()).default_if_empty();
        assert_eq!(seq.next(), Some(0));
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
    }
}
