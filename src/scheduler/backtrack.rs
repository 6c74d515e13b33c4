//! Backtracking schedule generator.
//!
//! # Algorithm
//!
//! 1. If any course has no candidate, fail with `NoCandidates` (no search).
//! 2. Depth-first over courses in request order. At depth `i`, try the
//!    candidates of course `i` in list order; accept the first that
//!    conflicts with none of the sections placed at depths `0..i`.
//! 3. On acceptance descend; when every course is placed, return the
//!    placement (first found, not optimized).
//! 4. When a depth runs out of candidates, undo the previous placement
//!    and resume that depth at its next candidate. Exhausting depth 0
//!    yields `Unsatisfiable`.
//!
//! The search state is an explicit stack: the placement vector plus one
//! candidate cursor per depth, so deep course lists never recurse.
//!
//! # Complexity
//! Worst case O(Π cᵢ · n) conflict checks for n courses with cᵢ
//! candidates each. Real inputs are a single student's course load.

use tracing::{debug, trace, warn};

use crate::config::{SchedulerConfig, SearchConfig};
use crate::conflict::PreparedSlot;
use crate::models::{CourseCandidateGroup, ScheduleResult};

/// Counters from one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidate placements tried.
    pub nodes_visited: u64,
    /// Placements undone.
    pub backtracks: u64,
    /// Whether the configured node budget stopped the search.
    pub node_limit_hit: bool,
}

/// Depth-first backtracking schedule generator.
///
/// # Example
///
/// ```
/// use section_schedule::models::{CourseCandidateGroup, DayPattern, SectionTimeSlot};
/// use section_schedule::scheduler::BacktrackScheduler;
///
/// let mw = DayPattern::from_tokens(["M", "W"]);
/// let groups = vec![
///     CourseCandidateGroup::new("A")
///         .with_candidate(SectionTimeSlot::new("a1", "A", mw).with_time("9:00 AM - 9:50 AM"))
///         .with_candidate(SectionTimeSlot::new("a2", "A", mw).with_time("10:00 AM - 10:50 AM")),
///     CourseCandidateGroup::new("B")
///         .with_candidate(SectionTimeSlot::new("b1", "B", mw).with_time("9:00 AM - 9:50 AM")),
/// ];
///
/// let result = BacktrackScheduler::new().generate(&groups);
/// assert_eq!(result.section_ids().unwrap(), ["a2", "b1"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BacktrackScheduler {
    config: SearchConfig,
}

impl BacktrackScheduler {
    /// Creates an exhaustive scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a loaded configuration.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config.search;
        self
    }

    /// Limits the number of candidate placements tried.
    pub fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.config.max_nodes = Some(max_nodes);
        self
    }

    /// Picks one section per course with no two conflicting.
    pub fn generate(&self, groups: &[CourseCandidateGroup]) -> ScheduleResult {
        self.generate_with_stats(groups).0
    }

    /// Like [`generate`](Self::generate), also returning search counters.
    pub fn generate_with_stats(
        &self,
        groups: &[CourseCandidateGroup],
    ) -> (ScheduleResult, SearchStats) {
        let mut stats = SearchStats::default();

        let missing: Vec<String> = groups
            .iter()
            .filter(|g| g.is_empty())
            .map(|g| g.course_id.clone())
            .collect();
        if !missing.is_empty() {
            debug!(courses = ?missing, "courses without candidates; search skipped");
            return (ScheduleResult::NoCandidates { course_ids: missing }, stats);
        }

        let prepared: Vec<Vec<PreparedSlot<'_>>> = groups
            .iter()
            .map(|g| g.candidates.iter().map(PreparedSlot::new).collect())
            .collect();

        debug!(
            courses = groups.len(),
            candidates = prepared.iter().map(Vec::len).sum::<usize>(),
            max_nodes = ?self.config.max_nodes,
            "schedule search start"
        );

        let result = match self.search(&prepared, &mut stats) {
            Some(placement) => ScheduleResult::Scheduled {
                section_ids: placement
                    .iter()
                    .enumerate()
                    .map(|(depth, &idx)| groups[depth].candidates[idx].id.clone())
                    .collect(),
            },
            None => ScheduleResult::Unsatisfiable,
        };

        debug!(
            success = result.is_success(),
            nodes = stats.nodes_visited,
            backtracks = stats.backtracks,
            "schedule search finished"
        );
        (result, stats)
    }

    /// Returns the chosen candidate index per depth.
    fn search(
        &self,
        groups: &[Vec<PreparedSlot<'_>>],
        stats: &mut SearchStats,
    ) -> Option<Vec<usize>> {
        let n = groups.len();
        let mut placed: Vec<usize> = Vec::with_capacity(n);
        let mut cursor: Vec<usize> = vec![0; n];
        let mut depth = 0;

        loop {
            if depth == n {
                return Some(placed);
            }

            let mut accepted = None;
            while cursor[depth] < groups[depth].len() {
                if self
                    .config
                    .max_nodes
                    .is_some_and(|max| stats.nodes_visited >= max)
                {
                    warn!(nodes = stats.nodes_visited, "schedule search node budget exhausted");
                    stats.node_limit_hit = true;
                    return None;
                }

                let idx = cursor[depth];
                cursor[depth] += 1;
                stats.nodes_visited += 1;

                let candidate = &groups[depth][idx];
                let fits = placed
                    .iter()
                    .enumerate()
                    .all(|(d, &ci)| !candidate.conflicts_with(&groups[d][ci]));
                if fits {
                    accepted = Some(idx);
                    break;
                }
            }

            match accepted {
                Some(idx) => {
                    placed.push(idx);
                    depth += 1;
                    if depth < n {
                        cursor[depth] = 0;
                    }
                }
                None => {
                    if depth == 0 {
                        return None;
                    }
                    depth -= 1;
                    placed.pop();
                    stats.backtracks += 1;
                    trace!(depth, "backtrack");
                }
            }
        }
    }
}

/// Picks one section per course with an exhaustive search.
///
/// See [`BacktrackScheduler`] for the algorithm.
pub fn generate_schedule(groups: &[CourseCandidateGroup]) -> ScheduleResult {
    BacktrackScheduler::new().generate(groups)
}
