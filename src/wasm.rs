use itertools::Itertools;
use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::board::{Grid, Weight};
use crate::solution::Solution;
use crate::solver::Solver;

/// A [`Solver`] for use from JavaScript, typically inside a web worker that posts each snapshot back to the page.
#[wasm_bindgen]
pub struct IncrementalSolver {
    solver: Solver,
    latest: Option<Solution>,
}

#[wasm_bindgen]
impl IncrementalSolver {
    /// Begin solving a `width` by `height` grid whose `weights` are given row by row.
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize, weights: &[Weight]) -> Result<IncrementalSolver, JsError> {
        let rows = split_rows(width, height, weights)
            .ok_or_else(|| JsError::new("expected width * height weights"))?;
        let grid = Grid::try_from(rows)
            .map_err(|reasons| JsError::new(&reasons.iter().join(", ")))?;

        Ok(Self {
            solver: Solver::begin(grid),
            latest: None,
        })
    }

    /// Solve one more column. Returns `false`, doing nothing, once every column is solved.
    pub fn advance(&mut self) -> bool {
        match self.solver.advance() {
            Some(solution) => {
                self.latest = Some(solution);
                true
            }
            None => false,
        }
    }

    /// Whether every column has been solved.
    pub fn exhausted(&self) -> bool {
        self.solver.is_exhausted()
    }

    /// Score of the latest snapshot.
    pub fn score(&self) -> f64 {
        self.latest.as_ref().map_or(0, Solution::score) as f64
    }

    /// The latest snapshot rendered one string per grid row.
    pub fn rows(&self) -> Array {
        let lines = Array::new();
        if let Some(solution) = &self.latest {
            for line in solution.route().to_string().lines() {
                lines.push(&JsValue::from_str(line));
            }
        }

        lines
    }
}

/// Cut `weights` into `height` rows of `width`, or `None` if the lengths disagree.
pub(crate) fn split_rows(width: usize, height: usize, weights: &[Weight]) -> Option<Vec<Vec<Weight>>> {
    if width == 0 || width.checked_mul(height) != Some(weights.len()) {
        return None;
    }

    Some(weights.chunks(width).map(<[Weight]>::to_vec).collect_vec())
}
