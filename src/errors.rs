use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CadenceError {
    /// An interval of zero would place an ad at every position
    #[error("Cadence must be greater than zero")]
    Zero,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdConfigParseError {
    /// The configuration contains no records at all
    #[error("The ad configuration does not contain any ads")]
    Empty,

    /// A non-blank, non-comment line is not of the form `key = value`
    #[error("Line {line} is not a `key = value` pair: {content:?}")]
    MalformedLine { line: usize, content: String },

    /// The same key appears twice inside one record
    #[error("Line {line} repeats the field `{field}` within the same ad")]
    DuplicateField { line: usize, field: String },

    /// A record lacks one of `id`, `title`, `imageUrl` or `linkUrl`
    #[error("Ad #{record} is missing the required field `{field}`")]
    MissingField { record: usize, field: &'static str },
}
