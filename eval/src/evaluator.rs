//! Breadth-first grammar expansion.

use std::collections::VecDeque;

use cfdg_core::{HsvColor, Shape, Transform2D};
use cfdg_grammar::{Grammar, Replacement, ReplacementKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::EvalResult;
use crate::EvalError;

/// Default hard cap on the number of emitted shapes.
pub const MAX_SHAPES: usize = 500_000;

/// Default minimum scale area below which a branch is pruned.
pub const AREA_CUTOFF: f32 = 0.000003;

/// Counters from the most recent evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvalStats {
    /// Shapes in the returned list.
    pub emitted: usize,
    /// Frames dropped by the area cutoff.
    pub culled: usize,
    /// True when the shape cap stopped the expansion early.
    pub capped: bool,
}

/// A queued unit of pending expansion: the replacement to process plus the
/// accumulated absolute transform and color leading into it.
struct Frame<'g> {
    replacement: &'g Replacement,
    transform: Transform2D,
    color: HsvColor,
}

/// Expands a grammar's start shape into terminal shapes.
///
/// The expansion walks a FIFO queue breadth-first instead of recursing, so
/// arbitrarily deep grammars cannot exhaust the native stack, and shapes at
/// shallow recursion depths are discovered first. Two safety valves bound
/// the otherwise potentially infinite rewriting: frames whose accumulated
/// scale area falls below `area_cutoff` are culled, and the whole expansion
/// stops once `max_shapes` is exceeded (keeping what was produced).
///
/// Internal state is fully reset by each [`Evaluator::evaluate`] call, but an
/// evaluator must not be shared between concurrent evaluations.
pub struct Evaluator {
    pub max_shapes: usize,
    pub area_cutoff: f32,
    rng: StdRng,
    stats: EvalStats,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// An evaluator whose rule selection is reproducible for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            max_shapes: MAX_SHAPES,
            area_cutoff: AREA_CUTOFF,
            rng,
            stats: EvalStats::default(),
        }
    }

    /// Counters from the most recent [`Evaluator::evaluate`] call.
    pub fn stats(&self) -> EvalStats {
        self.stats
    }

    /// Expand `grammar` into its terminal shapes, sorted by descending area
    /// with dense indices.
    ///
    /// Takes the grammar mutably to derive selection probabilities
    /// (`finish_setup`) before expanding; the grammar is otherwise untouched.
    pub fn evaluate(&mut self, grammar: &mut Grammar) -> EvalResult<Vec<Shape>> {
        grammar.finish_setup();
        let grammar: &Grammar = grammar;

        self.stats = EvalStats::default();

        let start_name = grammar
            .start_shape
            .clone()
            .ok_or(EvalError::MissingStartShape)?;
        let start = Replacement::call(start_name);

        let mut shapes: Vec<Shape> = Vec::new();
        let mut queue: VecDeque<Frame<'_>> = VecDeque::new();
        queue.push_back(Frame {
            replacement: &start,
            transform: Transform2D::IDENTITY,
            color: HsvColor::new(0.0, 0.0, 0.0, 1.0),
        });

        'drain: while let Some(frame) = queue.pop_front() {
            // The incoming accumulated transform decides culling, and is
            // also the area recorded on any shape this frame emits.
            let area = frame.transform.scale_area();
            if area < self.area_cutoff {
                self.stats.culled += 1;
                continue;
            }

            match &frame.replacement.kind {
                ReplacementKind::Primitive(primitive) => {
                    let transform = frame.transform.then(&frame.replacement.transform);
                    let color = frame.color.adjust(&frame.replacement.color);
                    shapes.push(Shape {
                        transform,
                        hsv: color,
                        color: color.to_rgba(),
                        primitive: *primitive,
                        area,
                        index: 0,
                    });
                    if shapes.len() > self.max_shapes {
                        self.stats.capped = true;
                        log::info!(
                            "stopped expansion: too many shapes (cap {})",
                            self.max_shapes
                        );
                        break 'drain;
                    }
                }
                ReplacementKind::Call(name) => {
                    let transform = frame.transform.then(&frame.replacement.transform);
                    let color = frame.color.adjust(&frame.replacement.color);
                    let draw = self.rng.gen::<f32>();
                    let rule = grammar.get_rule(name, draw)?;
                    for replacement in &rule.replacements {
                        queue.push_back(Frame {
                            replacement,
                            transform,
                            color,
                        });
                    }
                }
                ReplacementKind::Loop { count, body } => {
                    // Unroll: iteration k carries the per-iteration delta
                    // applied k times, so the first pass runs undisplaced.
                    let mut transform = frame.transform;
                    let mut color = frame.color;
                    for _ in 0..*count {
                        for replacement in body {
                            queue.push_back(Frame {
                                replacement,
                                transform,
                                color,
                            });
                        }
                        transform = transform.then(&frame.replacement.transform);
                        color = color.adjust(&frame.replacement.color);
                    }
                }
            }
        }

        // Large shapes first: consumers reveal output progressively and want
        // background shapes before fine detail. The sort is stable, so equal
        // areas keep their breadth-first discovery order.
        shapes.sort_by(|s1, s2| s2.area.total_cmp(&s1.area));
        for (index, shape) in shapes.iter_mut().enumerate() {
            shape.index = index;
        }

        self.stats.emitted = shapes.len();
        log::info!("shapes: {} culled: {}", shapes.len(), self.stats.culled);
        Ok(shapes)
    }
}

/// Expand `grammar` with default settings and an entropy-seeded evaluator.
pub fn evaluate(grammar: &mut Grammar) -> EvalResult<Vec<Shape>> {
    Evaluator::new().evaluate(grammar)
}
