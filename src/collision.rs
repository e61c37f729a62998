//! Elastic collision response between two balls.
//!
//! Both velocities are rotated so that the line between the centers lies on
//! the x axis. Along that axis the exchange is the 1D elastic formula; the
//! tangential (y) components are untouched. The results are rotated back.

use crate::items::Ball;
use crate::library::*;

/// Exchanges momentum between `ball` and `other` if they are closing in.
///
/// Nothing is written when the pair is already separating, so two balls that
/// still overlap after a previous exchange are not bounced back together.
/// Returns whether velocities changed.
///
/// Exactly coincident centers give `atan2(0, 0) == 0` and the exchange
/// happens along the x axis.
pub fn resolve_collision(ball: &mut Ball, other: &mut Ball) -> bool {
    let velocity_diff = find_vector(other.velocity, ball.velocity);
    let dist = find_vector(ball.position, other.position);

    if dot(velocity_diff, dist) < 0.0 {
        return false;
    }

    let angle = -dist[1].atan2(dist[0]);
    let m1 = ball.mass;
    let m2 = other.mass;
    let total = m1 + m2;

    let u1 = rotate(ball.velocity, angle);
    let u2 = rotate(other.velocity, angle);

    let v1 = [u1[0] * (m1 - m2) / total + u2[0] * 2.0 * m2 / total, u1[1]];
    let v2 = [u2[0] * (m2 - m1) / total + u1[0] * 2.0 * m1 / total, u2[1]];

    ball.velocity = rotate(v1, -angle);
    other.velocity = rotate(v2, -angle);
    true
}
