//! Movement pass: one sweep over the grid, bottom row first.

use crate::systems::behaviors::UpdateContext;

use super::SimulationCore;

#[derive(Default)]
pub(super) struct MovementCounts {
    pub(super) processed: u32,
    pub(super) moved: u32,
    pub(super) transformed: u32,
}

/// Rows run bottom-up so a particle that falls is not met again lower down.
/// Columns alternate direction every frame to cancel sideways bias.
pub(super) fn movement_pass(sim: &mut SimulationCore) -> MovementCounts {
    let SimulationCore { grid, behaviors, settings, rng, frame, .. } = sim;
    let frame = *frame;
    let width = grid.width();
    let height = grid.height();
    let left_to_right = frame % 2 == 0;

    let mut counts = MovementCounts::default();
    for y in (0..height).rev() {
        for i in 0..width {
            let x = if left_to_right { i } else { width - 1 - i };
            let idx = grid.index_unchecked(x, y);

            // SAFETY: x < width and y < height by the loop bounds
            let material = unsafe { grid.material_unchecked(x, y) };
            if material.is_empty() || unsafe { grid.is_updated_unchecked(idx) } {
                continue;
            }

            let mut ctx = UpdateContext::new(grid, settings, rng, x, y, frame);
            behaviors.update(material.category(), &mut ctx);

            counts.processed += 1;
            counts.moved += ctx.moved;
            counts.transformed += ctx.transformed;
        }
    }
    counts
}
