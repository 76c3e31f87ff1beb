//! Scroll-scrubbed tween timeline.
//!
//! Each tween binds one parameter channel to one page section, and its
//! progress tracks that section's scroll progress through a shared "scrub"
//! catch-up window instead of playing on a timer. A single timed intro tween
//! drops the mesh into place on load.

use glam::{Mat4, Vec3};
use thiserror::Error;

use crate::constants::DEFAULT_SCRUB_SECONDS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    OutQuad,
    OutCubic,
    OutExpo,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::OutExpo => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
        }
    }
}

/// Parameter channels a tween can drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Randomness,
    Twist,
    RotationY,
    PositionY,
    Scale,
}

/// Shared parameter record: written by the timeline, read by the frame loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneParams {
    pub randomness: f32,
    pub twist: f32,
    pub rotation_y: f32,
    pub position_y: f32,
    pub scale: f32,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            randomness: 0.0,
            twist: 0.0,
            rotation_y: 0.0,
            position_y: 0.0,
            scale: 1.0,
        }
    }
}

impl SceneParams {
    /// Morph influences in target order: randomness first, twist second.
    #[inline]
    pub fn morph_weights(&self) -> [f32; 2] {
        [self.randomness, self.twist]
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, self.position_y, 0.0))
            * Mat4::from_rotation_y(self.rotation_y)
            * Mat4::from_scale(Vec3::splat(self.scale))
    }

    #[inline]
    pub fn get(&self, channel: Channel) -> f32 {
        match channel {
            Channel::Randomness => self.randomness,
            Channel::Twist => self.twist,
            Channel::RotationY => self.rotation_y,
            Channel::PositionY => self.position_y,
            Channel::Scale => self.scale,
        }
    }

    #[inline]
    pub fn set(&mut self, channel: Channel, value: f32) {
        match channel {
            Channel::Randomness => self.randomness = value,
            Channel::Twist => self.twist = value,
            Channel::RotationY => self.rotation_y = value,
            Channel::PositionY => self.position_y = value,
            Channel::Scale => self.scale = value,
        }
    }
}

/// Document-space rectangle of one `.section` element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionRect {
    pub top: f32,
    pub height: f32,
}

/// Scroll progress of a section: 0 while its top is still below the viewport
/// bottom, 1 once its bottom has passed the viewport top.
pub fn section_progress(rect: SectionRect, scroll_y: f32, viewport_h: f32) -> f32 {
    let span = viewport_h + rect.height;
    if span <= 0.0 {
        return 0.0;
    }
    ((scroll_y + viewport_h - rect.top) / span).clamp(0.0, 1.0)
}

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("section index {index} out of range ({count} sections)")]
    SectionOutOfRange { index: usize, count: usize },
}

struct ScrollTween {
    section: usize,
    channel: Channel,
    to: f32,
    ease: Ease,
    scrub: f32,
    // Captured from the live channel value the first time the section enters
    // the viewport; until then the tween does not write at all.
    from: Option<f32>,
    progress: f32,
}

struct TimedTween {
    channel: Channel,
    from: f32,
    to: f32,
    duration: f32,
    ease: Ease,
    elapsed: f32,
}

/// Ordered set of scroll tweens plus an optional intro tween.
///
/// Tweens registered on one section apply concurrently, in registration
/// order; tweens on later sections hold back until their section first enters
/// the viewport.
pub struct ScrollTimeline {
    sections: Vec<SectionRect>,
    tweens: Vec<ScrollTween>,
    intro: Option<TimedTween>,
    default_scrub: f32,
}

impl ScrollTimeline {
    pub fn new(sections: Vec<SectionRect>) -> Self {
        Self {
            sections,
            tweens: Vec::new(),
            intro: None,
            default_scrub: DEFAULT_SCRUB_SECONDS,
        }
    }

    /// Replace the section rectangles after a layout change (resize).
    pub fn set_sections(&mut self, sections: Vec<SectionRect>) {
        self.sections = sections;
    }

    /// Bind `channel` to `section` with the shared default scrub window.
    pub fn tween(
        &mut self,
        section: usize,
        channel: Channel,
        to: f32,
        ease: Ease,
    ) -> Result<(), TimelineError> {
        self.tween_with_scrub(section, channel, to, ease, self.default_scrub)
    }

    pub fn tween_with_scrub(
        &mut self,
        section: usize,
        channel: Channel,
        to: f32,
        ease: Ease,
        scrub: f32,
    ) -> Result<(), TimelineError> {
        if section >= self.sections.len() {
            return Err(TimelineError::SectionOutOfRange {
                index: section,
                count: self.sections.len(),
            });
        }
        self.tweens.push(ScrollTween {
            section,
            channel,
            to,
            ease,
            scrub,
            from: None,
            progress: 0.0,
        });
        Ok(())
    }

    /// Register the load-time intro tween; runs on the frame clock, not on
    /// scroll.
    pub fn intro(&mut self, channel: Channel, from: f32, to: f32, duration: f32, ease: Ease) {
        self.intro = Some(TimedTween {
            channel,
            from,
            to,
            duration,
            ease,
            elapsed: 0.0,
        });
    }

    /// Advance every tween by `dt` seconds against the current scroll state
    /// and write the results into `params`.
    pub fn advance(&mut self, scroll_y: f32, viewport_h: f32, dt: f32, params: &mut SceneParams) {
        if let Some(intro) = &mut self.intro {
            intro.elapsed += dt;
            let t = if intro.duration > 0.0 {
                (intro.elapsed / intro.duration).clamp(0.0, 1.0)
            } else {
                1.0
            };
            let eased = intro.ease.apply(t);
            params.set(intro.channel, intro.from + (intro.to - intro.from) * eased);
        }

        for tween in &mut self.tweens {
            let Some(rect) = self.sections.get(tween.section) else {
                continue;
            };
            let raw = section_progress(*rect, scroll_y, viewport_h);
            let from = match tween.from {
                Some(f) => f,
                None => {
                    if raw <= 0.0 {
                        continue;
                    }
                    let f = params.get(tween.channel);
                    log::debug!(
                        "[timeline] section {} tween activated (from {:.3})",
                        tween.section,
                        f
                    );
                    tween.from = Some(f);
                    f
                }
            };
            let target = tween.ease.apply(raw);
            tween.progress += (target - tween.progress) * scrub_alpha(tween.scrub, dt);
            params.set(tween.channel, from + (tween.to - from) * tween.progress);
        }
    }
}

/// Per-step blend factor so a scrubbed tween catches up with the scroll
/// position within roughly its scrub window.
#[inline]
fn scrub_alpha(scrub: f32, dt: f32) -> f32 {
    if scrub <= 0.0 {
        1.0
    } else {
        1.0 - (-3.0 * dt / scrub).exp()
    }
}
