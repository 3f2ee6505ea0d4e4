use thiserror::Error;

/// 终止操作的错误类型。
///
/// 所有错误在终止操作被调用时同步产生，直接返回给调用方，
/// 不涉及重试或部分结果。
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SeqErr {
    #[error("[Terminal] Sequence contains no elements")]
    EmptySequence,

    #[error("[Terminal] No element satisfies the condition")]
    NoMatchingElement,

    #[error("[Terminal] Sequence contains more than one element")]
    MultipleElements,

    #[error("[Terminal] Index `{index}` is out of range, sequence length is `{len}`")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("[Terminal] Duplicate key `{key}` when building a unique mapping")]
    DuplicateKey { key: String },
}
