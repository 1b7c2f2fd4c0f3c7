//! Frame driver
//!
//! One call to `step` is one simulated and drawn frame. The host invokes it
//! once per display refresh; it queues its own successor first.

use super::collision::resolve_platforms;
use super::obstacle::Obstacle;
use super::player::Regime;
use super::state::{SimEvent, SimulationContext, Support};
use crate::platform::FrameScheduler;
use crate::renderer::DrawSurface;

/// Advance the simulation by one frame and draw it
pub fn step<F, S>(ctx: &mut SimulationContext, scheduler: &mut F, surface: &mut S)
where
    F: FrameScheduler + ?Sized,
    S: DrawSurface + ?Sized,
{
    scheduler.request_frame();
    ctx.events.clear();
    surface.clear();

    // Ground refreshes from the current viewport; platforms are static
    for obstacle in ctx.obstacles.iter_mut() {
        obstacle.update(&ctx.viewport);
        let color = match obstacle {
            Obstacle::Ground(_) => ctx.palette.ground,
            Obstacle::Platform(_) => ctx.palette.platform,
        };
        surface.fill_rect(&obstacle.bounding_box(), color);
    }

    // Drawn where it stood before this frame's motion
    surface.fill_rect(&ctx.player.bounding_box(), ctx.palette.player);

    let was_grounded = ctx.player.grounded;
    let ground_y = ctx.ground_y();
    match ctx.player.update(&ctx.physics, ground_y, ctx.input.up) {
        Regime::Jumped => ctx.events.push(SimEvent::Jumped {
            from: Support::Ground,
        }),
        Regime::Grounded if !was_grounded => ctx.events.push(SimEvent::Landed {
            on: Support::Ground,
        }),
        _ => {}
    }

    ctx.player
        .steer(&ctx.input, ctx.viewport.width, ctx.physics.base_speed);

    resolve_platforms(
        &mut ctx.player,
        &ctx.obstacles,
        ctx.physics.jump_impulse,
        ctx.input.up,
        &mut ctx.events,
    );

    ctx.frame += 1;

    for event in &ctx.events {
        log::debug!("frame {}: {:?}", ctx.frame, event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;
    use crate::platform::FrameCounter;
    use crate::renderer::{RectBatch, colors};
    use glam::Vec2;

    fn world(width: f32, height: f32) -> (SimulationContext, FrameCounter, RectBatch) {
        let ctx = SimulationContext::new(&Settings::default(), width, height);
        (ctx, FrameCounter::default(), RectBatch::new(colors::WHITE))
    }

    #[test]
    fn test_step_schedules_and_draws_in_order() {
        let (mut ctx, mut sched, mut batch) = world(1280.0, 1000.0);
        step(&mut ctx, &mut sched, &mut batch);

        assert_eq!(sched.requested, 1);
        assert_eq!(ctx.frame, 1);
        // ground, two platforms, player
        assert_eq!(batch.rect_count(), 4);
        assert_eq!(batch.rect_color(0), Some(ctx.palette.ground));
        assert_eq!(batch.rect_color(1), Some(ctx.palette.platform));
        assert_eq!(batch.rect_color(2), Some(ctx.palette.platform));
        assert_eq!(batch.rect_color(3), Some(ctx.palette.player));

        // the surface is wiped every frame
        step(&mut ctx, &mut sched, &mut batch);
        assert_eq!(batch.rect_count(), 4);
        assert_eq!(sched.requested, 2);
    }

    #[test]
    fn test_player_drawn_before_moving() {
        let (mut ctx, mut sched, mut batch) = world(1280.0, 1000.0);
        ctx.player.body.vel.y = 5.0;
        step(&mut ctx, &mut sched, &mut batch);
        // player quad starts at vertex 18; its top-left corner is first
        assert_eq!(batch.vertices()[18].position, [100.0, 600.0]);
        assert_eq!(ctx.player.body.pos.y, 605.0);
    }

    #[test]
    fn test_concrete_fall_to_ground() {
        // ground at 800; spawn (100, 600) avoids the (200, 700) platform
        let (mut ctx, mut sched, mut batch) = world(1280.0, 1000.0);
        step(&mut ctx, &mut sched, &mut batch);
        assert_eq!(ctx.player.bottom, 630.0);
        assert_eq!(ctx.player.body.vel.y, 0.25);

        let mut frames = 1;
        while !ctx.player.grounded {
            let vy = ctx.player.body.vel.y;
            step(&mut ctx, &mut sched, &mut batch);
            if !ctx.player.grounded {
                assert_eq!(ctx.player.body.vel.y, vy + 0.25);
            }
            frames += 1;
            assert!(frames < 500, "never landed");
        }
        assert_eq!(ctx.player.body.vel.y, 0.0);
        assert!(ctx.player.bottom <= 800.0);
        assert_eq!(
            ctx.events,
            vec![SimEvent::Landed {
                on: Support::Ground
            }]
        );
    }

    #[test]
    fn test_ground_follows_resize() {
        let (mut ctx, mut sched, mut batch) = world(1280.0, 1000.0);
        ctx.resize(640.0, 500.0);
        step(&mut ctx, &mut sched, &mut batch);
        let ground = ctx.obstacles[0].bounding_box();
        assert_eq!(ground.top, 400.0);
        assert_eq!(ground.right, 640.0);
    }

    #[test]
    fn test_walk_on_ground() {
        let (mut ctx, mut sched, mut batch) = world(1280.0, 1000.0);
        while !ctx.player.grounded {
            step(&mut ctx, &mut sched, &mut batch);
        }

        ctx.key_event(crate::consts::KEY_D, true);
        step(&mut ctx, &mut sched, &mut batch);
        assert_eq!(ctx.player.body.vel.x, 2.5);
        let x = ctx.player.body.pos.x;
        step(&mut ctx, &mut sched, &mut batch);
        assert_eq!(ctx.player.body.pos.x, x + 2.5);

        ctx.key_event(crate::consts::KEY_D, false);
        step(&mut ctx, &mut sched, &mut batch);
        assert_eq!(ctx.player.body.vel.x, 0.0);
    }

    #[test]
    fn test_jump_from_ground_line() {
        let (mut ctx, mut sched, mut batch) = world(1280.0, 1000.0);
        // bottom lands at 801, past the 800 ground line
        ctx.player.body.pos.y = 771.0;
        ctx.player.grounded = true;
        ctx.input.up = true;

        step(&mut ctx, &mut sched, &mut batch);
        assert!(!ctx.player.grounded);
        assert_eq!(ctx.player.body.vel.y, -15.0);
        assert_eq!(
            ctx.events,
            vec![SimEvent::Jumped {
                from: Support::Ground
            }]
        );

        let y = ctx.player.body.pos.y;
        step(&mut ctx, &mut sched, &mut batch);
        assert!(ctx.player.body.pos.y < y);
    }

    #[test]
    fn test_jump_while_settling_fires_from_platform_pass() {
        // Just after landing the body still creeps toward the ground line,
        // so the ground check sees it airborne and the platform pass fires
        // the jump from the first platform it misses.
        let (mut ctx, mut sched, mut batch) = world(1280.0, 1000.0);
        while !ctx.player.grounded {
            step(&mut ctx, &mut sched, &mut batch);
        }
        assert!(ctx.player.bottom < 800.0);

        ctx.input.up = true;
        step(&mut ctx, &mut sched, &mut batch);
        assert!(!ctx.player.grounded);
        assert_eq!(ctx.player.body.vel.y, 0.25 - 15.0);
        assert_eq!(
            ctx.events,
            vec![SimEvent::Jumped {
                from: Support::Platform(1)
            }]
        );
    }

    #[test]
    fn test_move_blocked_at_left_edge() {
        let (mut ctx, mut sched, mut batch) = world(1280.0, 1000.0);
        ctx.player.body.pos = Vec2::new(0.0, 600.0);
        ctx.input.left = true;
        step(&mut ctx, &mut sched, &mut batch);
        assert_eq!(ctx.player.left, 0.0);
        assert_eq!(ctx.player.body.vel.x, 0.0);
    }

    #[test]
    fn test_move_can_overshoot_right_edge() {
        let (mut ctx, mut sched, mut batch) = world(1280.0, 1000.0);
        // right edge 1279 < 1280, so a move may start and carries past
        ctx.player.body.pos = Vec2::new(1249.0, 600.0);
        ctx.input.right = true;
        step(&mut ctx, &mut sched, &mut batch);
        assert_eq!(ctx.player.body.vel.x, 2.5);
        step(&mut ctx, &mut sched, &mut batch);
        assert_eq!(ctx.player.right, 1281.5);
        assert_eq!(ctx.player.body.vel.x, 0.0);
    }

    #[test]
    fn test_lands_on_platform() {
        // directly above the (600, 500) platform
        let (mut ctx, mut sched, mut batch) = world(1280.0, 1000.0);
        ctx.player.body.pos = Vec2::new(650.0, 400.0);
        let mut frames = 0;
        while !ctx.player.grounded {
            step(&mut ctx, &mut sched, &mut batch);
            frames += 1;
            assert!(frames < 200, "never landed");
        }
        assert_eq!(
            ctx.events,
            vec![SimEvent::Landed {
                on: Support::Platform(2)
            }]
        );
        assert!(ctx.player.bottom <= 500.0);

        // settles onto the top and stays there
        for _ in 0..30 {
            step(&mut ctx, &mut sched, &mut batch);
            assert!(ctx.player.grounded);
            assert!(ctx.player.bottom <= 500.0);
        }
        assert!(ctx.player.bottom > 499.0);
    }
}
