//! Stage grammar for text pipelines: parsing and rendering.

use std::fmt;
use std::str::FromStr;

use crate::RangeError;

/// Integer predicates available to `filter=` stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// `even`
    Even,
    /// `odd`
    Odd,
    /// `mul:N`, divisible by `N` (non-zero).
    MultipleOf(i64),
    /// `gt:N`
    GreaterThan(i64),
    /// `lt:N`
    LessThan(i64),
}

impl Predicate {
    /// Whether `value` passes.
    pub fn accepts(self, value: i64) -> bool {
        match self {
            Predicate::Even => value % 2 == 0,
            Predicate::Odd => value % 2 != 0,
            Predicate::MultipleOf(n) => value.wrapping_rem(n) == 0,
            Predicate::GreaterThan(n) => value > n,
            Predicate::LessThan(n) => value < n,
        }
    }
}

/// Integer mappings available to `transform=` stages.
///
/// Arithmetic wraps on overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mapping {
    /// `square`
    Square,
    /// `neg`
    Negate,
    /// `add:N`
    Add(i64),
    /// `mul:N`
    Multiply(i64),
}

impl Mapping {
    /// Apply the mapping.
    pub fn apply(self, value: i64) -> i64 {
        match self {
            Mapping::Square => value.wrapping_mul(value),
            Mapping::Negate => value.wrapping_neg(),
            Mapping::Add(n) => value.wrapping_add(n),
            Mapping::Multiply(n) => value.wrapping_mul(n),
        }
    }
}

/// One step of a textual pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// `filter=<predicate>`
    Filter(Predicate),
    /// `transform=<mapping>`
    Transform(Mapping),
    /// `take=N`
    Take(usize),
    /// `reverse`
    Reverse,
    /// `sort`
    Sort,
}

impl Stage {
    /// Stage keyword as written in a pipeline.
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Filter(_) => "filter",
            Stage::Transform(_) => "transform",
            Stage::Take(_) => "take",
            Stage::Reverse => "reverse",
            Stage::Sort => "sort",
        }
    }
}

/// One-line summaries of the stage grammar, for help output.
pub const STAGE_SYNTAX: &[(&str, &str)] = &[
    ("filter=even|odd|mul:N|gt:N|lt:N", "keep matching elements"),
    ("transform=square|neg|add:N|mul:N", "map every element"),
    ("take=N", "first N elements"),
    ("reverse", "last to first (needs a bidirectional source)"),
    ("sort", "ascending order (needs a bounded source)"),
];

fn integer(stage: &str, text: &str) -> Result<i64, RangeError> {
    text.trim().parse().map_err(|_| RangeError::InvalidArgument {
        stage: stage.to_string(),
        value: text.trim().to_string(),
    })
}

impl FromStr for Predicate {
    type Err = RangeError;

    fn from_str(text: &str) -> Result<Self, RangeError> {
        let (name, arg) = match text.split_once(':') {
            Some((name, arg)) => (name.trim(), Some(arg)),
            None => (text.trim(), None),
        };
        match (name, arg) {
            ("even", None) => Ok(Predicate::Even),
            ("odd", None) => Ok(Predicate::Odd),
            ("mul", Some(arg)) => match integer("filter", arg)? {
                0 => Err(RangeError::InvalidArgument {
                    stage: "filter".to_string(),
                    value: "mul:0".to_string(),
                }),
                n => Ok(Predicate::MultipleOf(n)),
            },
            ("gt", Some(arg)) => Ok(Predicate::GreaterThan(integer("filter", arg)?)),
            ("lt", Some(arg)) => Ok(Predicate::LessThan(integer("filter", arg)?)),
            _ => Err(RangeError::InvalidArgument {
                stage: "filter".to_string(),
                value: text.trim().to_string(),
            }),
        }
    }
}

impl FromStr for Mapping {
    type Err = RangeError;

    fn from_str(text: &str) -> Result<Self, RangeError> {
        let (name, arg) = match text.split_once(':') {
            Some((name, arg)) => (name.trim(), Some(arg)),
            None => (text.trim(), None),
        };
        match (name, arg) {
            ("square", None) => Ok(Mapping::Square),
            ("neg", None) => Ok(Mapping::Negate),
            ("add", Some(arg)) => Ok(Mapping::Add(integer("transform", arg)?)),
            ("mul", Some(arg)) => Ok(Mapping::Multiply(integer("transform", arg)?)),
            _ => Err(RangeError::InvalidArgument {
                stage: "transform".to_string(),
                value: text.trim().to_string(),
            }),
        }
    }
}

impl FromStr for Stage {
    type Err = RangeError;

    fn from_str(text: &str) -> Result<Self, RangeError> {
        let text = text.trim();
        let (keyword, arg) = match text.split_once('=') {
            Some((keyword, arg)) => (keyword.trim(), Some(arg)),
            None => (text, None),
        };
        match (keyword, arg) {
            ("filter", Some(arg)) => Ok(Stage::Filter(arg.parse()?)),
            ("transform", Some(arg)) => Ok(Stage::Transform(arg.parse()?)),
            ("take", Some(arg)) => {
                let count = arg.trim().parse().map_err(|_| RangeError::InvalidArgument {
                    stage: "take".to_string(),
                    value: arg.trim().to_string(),
                })?;
                Ok(Stage::Take(count))
            }
            ("reverse", None) => Ok(Stage::Reverse),
            ("sort", None) => Ok(Stage::Sort),
            ("filter" | "transform" | "take", None) => Err(RangeError::InvalidArgument {
                stage: keyword.to_string(),
                value: String::new(),
            }),
            _ => Err(RangeError::UnknownStage(text.to_string())),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Even => f.write_str("even"),
            Predicate::Odd => f.write_str("odd"),
            Predicate::MultipleOf(n) => write!(f, "mul:{n}"),
            Predicate::GreaterThan(n) => write!(f, "gt:{n}"),
            Predicate::LessThan(n) => write!(f, "lt:{n}"),
        }
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mapping::Square => f.write_str("square"),
            Mapping::Negate => f.write_str("neg"),
            Mapping::Add(n) => write!(f, "add:{n}"),
            Mapping::Multiply(n) => write!(f, "mul:{n}"),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Filter(predicate) => write!(f, "filter={predicate}"),
            Stage::Transform(mapping) => write!(f, "transform={mapping}"),
            Stage::Take(count) => write!(f, "take={count}"),
            Stage::Reverse | Stage::Sort => f.write_str(self.name()),
        }
    }
}

/// Parse `|`-separated stages. Blank text is the empty pipeline.
pub fn parse_stages(text: &str) -> Result<Vec<Stage>, RangeError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    text.split('|').map(str::parse).collect()
}

/// Render stages back into the text [`parse_stages`] accepts.
pub fn format_stages(stages: &[Stage]) -> String {
    stages
        .iter()
        .map(Stage::to_string)
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_pipeline() {
        let stages = parse_stages("filter=even | transform=square | take=3 | reverse").unwrap();
        assert_eq!(
            stages,
            vec![
                Stage::Filter(Predicate::Even),
                Stage::Transform(Mapping::Square),
                Stage::Take(3),
                Stage::Reverse,
            ]
        );
        assert_eq!(
            format_stages(&stages),
            "filter=even | transform=square | take=3 | reverse"
        );
    }

    #[test]
    fn test_parse_rejects_unknown_and_bad_arguments() {
        assert_eq!(
            "shuffle".parse::<Stage>(),
            Err(RangeError::UnknownStage("shuffle".to_string()))
        );
        assert!(matches!(
            "take=-1".parse::<Stage>(),
            Err(RangeError::InvalidArgument { .. })
        ));
        assert!(matches!(
            "filter=mul:0".parse::<Stage>(),
            Err(RangeError::InvalidArgument { .. })
        ));
        assert!(matches!(
            "filter".parse::<Stage>(),
            Err(RangeError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_blank_pipeline_has_no_stages() {
        assert_eq!(parse_stages("  "), Ok(Vec::new()));
    }

    #[test]
    fn test_predicate_handles_negative_odd() {
        assert!(Predicate::Odd.accepts(-3));
        assert!(!Predicate::Even.accepts(-3));
        assert!(Predicate::MultipleOf(3).accepts(-9));
    }
}
