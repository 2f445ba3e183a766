//! Pipelines assembled at run time from text.
//!
//! The statically typed adaptors check capabilities at compile time. A
//! pipeline read from a command line cannot be typed ahead of time, so each
//! stage boxes its output and the capability is tracked alongside: asking a
//! forward-only stage to `reverse` is a [`RangeError::Capability`], and
//! draining an endless counter without a `take` is [`RangeError::Unbounded`].

mod stage;

pub use stage::{format_stages, parse_stages, Mapping, Predicate, Stage, STAGE_SYNTAX};

use tracing::{debug, warn};

use crate::adaptor::{filter, reverse, sort, take, transform};
use crate::cursor::{BoxedBidirectional, BoxedForward, Traversal};
use crate::view::{view, View};
use crate::{generate, generate_n, RangeError};

/// Where a pipeline's integers come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Fixed list of values; bidirectional.
    Values(Vec<i64>),
    /// `start, start + 1, ...` without end; forward.
    Counter {
        /// First value produced.
        start: i64,
    },
    /// `count` values from `start`; forward.
    CounterN {
        /// First value produced.
        start: i64,
        /// Number of values.
        count: usize,
    },
}

impl Source {
    /// Capability of the source before any stage runs.
    pub fn traversal(&self) -> Traversal {
        match self {
            Source::Values(_) => Traversal::Bidirectional,
            Source::Counter { .. } | Source::CounterN { .. } => Traversal::Forward,
        }
    }
}

/// Default cap on how many elements [`PipelineConfig::run`] collects.
pub const DEFAULT_MAX_ELEMENTS: usize = 1 << 20;

/// Configuration for a run-time pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Element source.
    pub source: Source,
    /// Stages applied in order.
    pub stages: Vec<Stage>,
    /// Collection stops after this many elements.
    pub max_elements: usize,
}

impl PipelineConfig {
    /// Pipeline with no stages over `source`.
    pub fn new(source: Source) -> Self {
        Self {
            source,
            stages: Vec::new(),
            max_elements: DEFAULT_MAX_ELEMENTS,
        }
    }

    /// Replace the stages.
    pub fn with_stages(mut self, stages: Vec<Stage>) -> Self {
        self.stages = stages;
        self
    }

    /// Parse and replace the stages.
    pub fn with_pipeline(self, text: &str) -> Result<Self, RangeError> {
        Ok(self.with_stages(parse_stages(text)?))
    }

    /// Append one stage.
    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    /// Set the collection cap (at least one element).
    pub fn with_max_elements(mut self, max_elements: usize) -> Self {
        self.max_elements = max_elements.max(1);
        self
    }

    /// Check capabilities and boundedness without reading any element.
    pub fn validate(&self) -> Result<(), RangeError> {
        let mut traversal = self.source.traversal();
        let mut bounded = !matches!(self.source, Source::Counter { .. });
        for stage in &self.stages {
            match stage {
                Stage::Filter(_) | Stage::Transform(_) => {}
                Stage::Take(_) => {
                    traversal = traversal.cap(Traversal::Forward);
                    bounded = true;
                }
                Stage::Reverse => {
                    if !traversal.at_least(Traversal::Bidirectional) {
                        return Err(RangeError::Capability {
                            stage: stage.to_string(),
                            required: Traversal::Bidirectional,
                            found: traversal,
                        });
                    }
                }
                Stage::Sort => {
                    if !bounded {
                        return Err(RangeError::Unbounded);
                    }
                    traversal = Traversal::Bidirectional;
                }
            }
        }
        if bounded {
            Ok(())
        } else {
            Err(RangeError::Unbounded)
        }
    }

    /// Build the pipeline and collect its output.
    pub fn run(&self) -> Result<Vec<i64>, RangeError> {
        self.validate()?;
        let mut erased = Erased::from_source(&self.source);
        debug!(
            source = ?self.source.traversal(),
            stages = %format_stages(&self.stages),
            "assembling pipeline"
        );
        for stage in &self.stages {
            erased = erased.push(*stage)?;
            debug!(stage = %stage, traversal = %erased.traversal(), "stage applied");
        }
        let (output, truncated) = erased.collect(self.max_elements);
        if truncated {
            warn!(max_elements = self.max_elements, "pipeline output truncated");
        }
        Ok(output)
    }
}

/// A stage output with its concrete cursor type erased.
enum Erased {
    Forward(View<BoxedForward<i64>>),
    Bidirectional(View<BoxedBidirectional<i64>>),
}

impl Erased {
    fn from_source(source: &Source) -> Self {
        match source {
            Source::Values(values) => {
                Erased::Bidirectional(view(values.clone()).boxed_bidirectional())
            }
            Source::Counter { start } => Erased::Forward(generate(counter(*start)).boxed()),
            Source::CounterN { start, count } => {
                Erased::Forward(generate_n(counter(*start), *count).boxed())
            }
        }
    }

    fn traversal(&self) -> Traversal {
        match self {
            Erased::Forward(_) => Traversal::Forward,
            Erased::Bidirectional(_) => Traversal::Bidirectional,
        }
    }

    fn push(self, stage: Stage) -> Result<Self, RangeError> {
        let next = match (stage, self) {
            (Stage::Filter(predicate), Erased::Forward(v)) => {
                Erased::Forward((v | filter(move |x: &i64| predicate.accepts(*x))).boxed())
            }
            (Stage::Filter(predicate), Erased::Bidirectional(v)) => Erased::Bidirectional(
                (v | filter(move |x: &i64| predicate.accepts(*x))).boxed_bidirectional(),
            ),
            (Stage::Transform(mapping), Erased::Forward(v)) => {
                Erased::Forward((v | transform(move |x: i64| mapping.apply(x))).boxed())
            }
            (Stage::Transform(mapping), Erased::Bidirectional(v)) => Erased::Bidirectional(
                (v | transform(move |x: i64| mapping.apply(x))).boxed_bidirectional(),
            ),
            (Stage::Take(count), Erased::Forward(v)) => Erased::Forward((v | take(count)).boxed()),
            (Stage::Take(count), Erased::Bidirectional(v)) => {
                Erased::Forward((v | take(count)).boxed())
            }
            (Stage::Reverse, Erased::Bidirectional(v)) => {
                Erased::Bidirectional((v | reverse()).boxed_bidirectional())
            }
            (Stage::Reverse, Erased::Forward(_)) => {
                return Err(RangeError::Capability {
                    stage: stage.to_string(),
                    required: Traversal::Bidirectional,
                    found: Traversal::Forward,
                })
            }
            (Stage::Sort, Erased::Forward(v)) => {
                Erased::Bidirectional((v | sort()).boxed_bidirectional())
            }
            (Stage::Sort, Erased::Bidirectional(v)) => {
                Erased::Bidirectional((v | sort()).boxed_bidirectional())
            }
        };
        Ok(next)
    }

    /// Up to `max_elements` values, and whether any were left over.
    fn collect(self, max_elements: usize) -> (Vec<i64>, bool) {
        let wanted = max_elements.saturating_add(1);
        let mut output: Vec<i64> = match self {
            Erased::Forward(v) => v.into_iter().take(wanted).collect(),
            Erased::Bidirectional(v) => v.into_iter().take(wanted).collect(),
        };
        let truncated = output.len() > max_elements;
        output.truncate(max_elements);
        (output, truncated)
    }
}

fn counter(start: i64) -> impl FnMut() -> i64 + Clone + 'static {
    let mut next = start;
    move || {
        let value = next;
        next = next.wrapping_add(1);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_filter_then_square() {
        let output = PipelineConfig::new(Source::Values(vec![1, 2, 3, 6, 9, 12, 13]))
            .with_pipeline("filter=even | transform=square")
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(output, vec![4, 36, 144]);
    }

    #[test]
    fn test_counter_needs_take() {
        let config = PipelineConfig::new(Source::Counter { start: 0 })
            .with_stage(Stage::Filter(Predicate::Odd));
        assert_eq!(config.run(), Err(RangeError::Unbounded));

        let bounded = config.with_stage(Stage::Take(5));
        assert_eq!(bounded.run(), Ok(vec![1, 3, 5, 7, 9]));
    }

    #[test]
    fn test_reverse_after_take_is_rejected() {
        let config = PipelineConfig::new(Source::Values(vec![1, 2, 3]))
            .with_pipeline("take=2 | reverse")
            .unwrap();
        assert_eq!(
            config.run(),
            Err(RangeError::Capability {
                stage: "reverse".to_string(),
                required: Traversal::Bidirectional,
                found: Traversal::Forward,
            })
        );
    }

    #[test]
    fn test_sort_restores_bidirectional() {
        let output = PipelineConfig::new(Source::CounterN { start: 0, count: 6 })
            .with_pipeline("transform=neg | sort | reverse | take=3")
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(output, vec![0, -1, -2]);
    }

    #[test]
    fn test_max_elements_truncates() {
        let output = PipelineConfig::new(Source::Values((0..10).collect()))
            .with_max_elements(4)
            .run()
            .unwrap();
        assert_eq!(output, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_collect_flags_only_real_truncation() {
        let exact = Erased::from_source(&Source::CounterN { start: 0, count: 3 });
        assert_eq!(exact.collect(3), (vec![0, 1, 2], false));

        let longer = Erased::from_source(&Source::Values(vec![5, 6, 7, 8]));
        assert_eq!(longer.collect(3), (vec![5, 6, 7], true));

        let config =
            PipelineConfig::new(Source::CounterN { start: 1, count: 4 }).with_max_elements(4);
        assert_eq!(config.run(), Ok(vec![1, 2, 3, 4]));
    }
}
