use std::collections::BinaryHeap;

use mazeway_core::Point;

use crate::PathFinder;
use crate::pathfinder::NodeRef;
use crate::traits::Graph;

impl PathFinder {
    /// Run A* from `from` toward `to` over `graph`.
    ///
    /// The returned points trace the predecessor chain that ends at `to`:
    /// the complete minimum-cost path (both endpoints included) when the
    /// goal was reached, or just `[to]` when it was not. Expansion order
    /// is lowest f-score first with ties resolved in row-major node order,
    /// so equal queries always return equal paths. `None` only when an
    /// endpoint lies outside the finder's grid.
    pub fn astar_path<G: Graph>(
        &mut self,
        graph: &G,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        let origin = self.idx(from)?;
        let goal = self.idx(to)?;

        let run = self.begin_run();

        let h0 = graph.estimate(from, to);
        {
            let seed = &mut self.nodes[origin];
            seed.g = 0.0;
            seed.f = h0;
            seed.parent = usize::MAX;
            seed.generation = run;
            seed.open = true;
        }

        let mut frontier = BinaryHeap::from([NodeRef { idx: origin, f: h0 }]);
        let mut scratch = std::mem::take(&mut self.nbuf);

        while let Some(head) = frontier.pop() {
            let node = &self.nodes[head.idx];
            if node.generation != run || !node.open {
                // Superseded by a cheaper entry for the same node.
                continue;
            }
            if head.idx == goal {
                break;
            }
            self.nodes[head.idx].open = false;

            let here = self.point(head.idx);
            scratch.clear();
            graph.neighbors(here, &mut scratch);
            for &step in &scratch {
                if let Some(entry) = self.relax(graph, run, head.idx, step, to) {
                    frontier.push(entry);
                }
            }
        }

        self.nbuf = scratch;
        Some(self.walk_back(goal, run))
    }

    /// Start a new run by bumping the generation stamp; nodes from earlier
    /// runs become stale without being cleared.
    fn begin_run(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Try to reach `step` through node `via`. Records the cheaper route
    /// and returns a frontier entry when `step` is new this run or improved.
    fn relax<G: Graph>(
        &mut self,
        graph: &G,
        run: u32,
        via: usize,
        step: Point,
        goal: Point,
    ) -> Option<NodeRef> {
        let i = self.idx(step)?;
        let through = self.nodes[via].g + graph.cost(self.point(via), step);

        let node = &mut self.nodes[i];
        if node.generation == run && through >= node.g {
            return None;
        }
        node.generation = run;
        node.g = through;
        node.f = through + graph.estimate(step, goal);
        node.parent = via;
        node.open = true;
        Some(NodeRef { idx: i, f: node.f })
    }

    /// Collect the predecessor chain ending at `goal`, in walking order.
    ///
    /// The walk starts at the goal unconditionally, so the result always
    /// holds the goal cell; it extends back to the origin only when the
    /// search reached the goal this run.
    fn walk_back(&self, goal: usize, run: u32) -> Vec<Point> {
        let mut trail = vec![self.point(goal)];
        let mut at = goal;
        while self.nodes[at].generation == run && self.nodes[at].parent != usize::MAX {
            at = self.nodes[at].parent;
            trail.push(self.point(at));
        }
        trail.reverse();
        trail
    }
}
