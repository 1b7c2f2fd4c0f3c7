//! Platform landing checks
//!
//! Only top surfaces are solid, and only when approached from above. The
//! ground line is handled by the player controller itself; this pass runs
//! after it and can override its vertical decision.

use super::body::BoundingBox;
use super::obstacle::Obstacle;
use super::player::Player;
use super::state::{SimEvent, Support};

/// Whether the player is above `top` now and reaches it within one more
/// vertical step, while overlapping the surface horizontally.
pub fn crosses_top(player: &Player, surface: &BoundingBox) -> bool {
    player.bottom <= surface.top
        && player.bottom + player.body.vel.y >= surface.top
        && player.right >= surface.left
        && player.left <= surface.right
}

/// Resolve the player against every platform, in list order.
///
/// Each platform is checked independently. A match lands the player; a miss
/// while grounded with jump held fires a jump, so jumping from a platform
/// works even though the ground check never sees it. Ground entries in
/// `obstacles` are skipped.
pub fn resolve_platforms(
    player: &mut Player,
    obstacles: &[Obstacle],
    jump_impulse: f32,
    jump_pressed: bool,
    events: &mut Vec<SimEvent>,
) {
    for (index, obstacle) in obstacles.iter().enumerate() {
        let Obstacle::Platform(_) = obstacle else {
            continue;
        };

        if crosses_top(player, &obstacle.bounding_box()) {
            if !player.grounded {
                events.push(SimEvent::Landed {
                    on: Support::Platform(index),
                });
            }
            player.land();
        } else if player.grounded && jump_pressed {
            player.jump(jump_impulse);
            events.push(SimEvent::Jumped {
                from: Support::Platform(index),
            });
        }
    }
}
