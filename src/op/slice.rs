use std::collections::VecDeque;

/// take-last适配器：保留末尾`count`个元素。
///
/// 末尾位置在源耗尽前未知，首次拉取时消费整个源并以环形缓冲
/// 保留最近的`count`个元素，仅支持有限序列。
pub struct TakeLast<I: Iterator> {
    source: Option<I>,
    count: usize,
    buffer: VecDeque<I::Item>,
}

impl<I: Iterator> TakeLast<I> {
    pub(crate) fn new(source: I, count: usize) -> Self {
        TakeLast { source: Some(source), count, buffer: VecDeque::new() }
    }
}

impl<I: Iterator> Iterator for TakeLast<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(source) = self.source.take() {
            if self.count > 0 {
                for item in source {
                    if self.buffer.len() == self.count {
                        self.buffer.pop_front();
                    }
                    self.buffer.push_back(item);
                }
            }
        }
        self.buffer.pop_front()
    }
}

/// skip-last适配器：丢弃末尾`count`个元素。
///
/// 以`count`长度的缓冲延迟输出：每读入一个元素即可确定
/// 缓冲头部的元素不属于末尾，流式输出，仅支持有限序列。
pub struct SkipLast<I: Iterator> {
    source: I,
    count: usize,
    buffer: VecDeque<I::Item>,
}

impl<I: Iterator> SkipLast<I> {
    pub(crate) fn new(source: I, count: usize) -> Self {
        SkipLast { source, count, buffer: VecDeque::new() }
    }
}

impl<I: Iterator> Iterator for SkipLast<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.source.next()?;
            self.buffer.push_back(item);
            if self.buffer.len() > self.count {
                return self.buffer.pop_front();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Seq;

    #[test]
    fn test_take_last() {
        assert_eq!(Seq::of([1, 2, 3, 4, 5]).take_last(2).to_list(), vec![4, 5]);
        assert_eq!(Seq::of([1, 2, 3]).take_last(5).to_list(), vec![1, 2, 3]);
        assert_eq!(Seq::of([1, 2, 3]).take_last(0).to_list(), Vec::<i32>::new());
        assert_eq!(Seq::of(Vec::<i32>::new()).take_last(2).to_list(), Vec::<i32>::new());
    }

    #[test]
    fn test_skip_last() {
        assert_eq!(Seq::of([1, 2, 3, 4, 5]).skip_last(2).to_list(), vec![1, 2, 3]);
        assert_eq!(Seq::of([1, 2, 3]).skip_last(5).to_list(), Vec::<i32>::new());
        assert_eq!(Seq::of([1, 2, 3]).skip_last(0).to_list(), vec![1, 2, 3]);
        assert_eq!(Seq::of(Vec::<i32>::new()).skip_last(2).to_list(), Vec::<i32>::new());
    }

    #[test]
    fn test_take_last_skip_last_partition() {
        let source = vec![1, 2, 3, 4, 5];
        for n in 0..=source.len() {
            let mut parts = Seq::of(source.clone()).skip_last(n).to_list();
            parts.extend(Seq::of(source.clone()).take_last(n).to_list());
            assert_eq!(parts, source);
        }
    }
}
