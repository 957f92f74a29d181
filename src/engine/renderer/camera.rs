// Y-sorted follow camera

use super::{DrawTarget, Drawable};
use glam::Vec2;
use log::trace;

/// Follows one tracked entity and draws every member back-to-front.
///
/// Members are painted in ascending order of their visual center's y, so an
/// entity lower on screen covers one standing behind it.
#[derive(Debug, Clone)]
pub struct CameraGroup {
    /// Half the viewport, in pixels
    half_size: Vec2,
    /// World-to-screen translation computed on the last draw
    offset: Vec2,
}

impl CameraGroup {
    /// Create a camera for a viewport of the given size
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            half_size: half_extents(viewport_width, viewport_height),
            offset: Vec2::ZERO,
        }
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.half_size = half_extents(width, height);
    }

    pub fn half_size(&self) -> Vec2 {
        self.half_size
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Center the view on `focus`
    pub fn track(&mut self, focus: &dyn Drawable) -> Vec2 {
        self.offset = focus.hitbox().center() - self.half_size;
        self.offset
    }

    /// Convert world coordinates to screen coordinates
    pub fn world_to_screen(&self, world_pos: Vec2) -> Vec2 {
        world_pos - self.offset
    }

    /// Draw all `members` relative to `focus`
    pub fn draw<'a, I>(&mut self, focus: &dyn Drawable, members: I, target: &mut dyn DrawTarget)
    where
        I: IntoIterator<Item = &'a dyn Drawable>,
    {
        self.track(focus);

        let mut ordered: Vec<&dyn Drawable> = members.into_iter().collect();
        // `sort_by` is stable: equal depths keep their insertion order
        ordered.sort_by(|a, b| a.rect().center().y.total_cmp(&b.rect().center().y));

        for member in &ordered {
            target.blit(
                member.frame(),
                self.world_to_screen(member.rect().topleft()),
                member.alpha(),
            );
        }

        trace!("Drew {} sprites at offset {:?}", ordered.len(), self.offset);
    }
}

fn half_extents(width: f32, height: f32) -> Vec2 {
    Vec2::new((width / 2.0).floor(), (height / 2.0).floor())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rect;
    use crate::engine::assets::{SpriteFrame, TextureHandle};
    use crate::engine::renderer::FrameRecorder;

    struct Block {
        rect: Rect,
        frame: SpriteFrame,
    }

    impl Block {
        fn new(name: &str, x: f32, y: f32, size: f32) -> Self {
            Self {
                rect: Rect::new(x, y, size, size),
                frame: SpriteFrame::new(TextureHandle::from_path(name), Vec2::splat(size)),
            }
        }
    }

    impl Drawable for Block {
        fn rect(&self) -> Rect {
            self.rect
        }

        fn frame(&self) -> SpriteFrame {
            self.frame
        }
    }

    fn texture(name: &str) -> TextureHandle {
        TextureHandle::from_path(name)
    }

    #[test]
    fn test_offset_centers_tracked_entity() {
        let mut camera = CameraGroup::new(1280.0, 720.0);
        let player = Block::new("player", 1000.0, 500.0, 64.0);

        let offset = camera.track(&player);
        assert_eq!(offset, Vec2::new(1032.0 - 640.0, 532.0 - 360.0));
        assert_eq!(camera.world_to_screen(player.rect.center()), Vec2::new(640.0, 360.0));
    }

    #[test]
    fn test_odd_viewport_uses_floored_half() {
        let camera = CameraGroup::new(641.0, 361.0);
        assert_eq!(camera.half_size(), Vec2::new(320.0, 180.0));
    }

    #[test]
    fn test_draws_in_ascending_center_y() {
        let mut camera = CameraGroup::new(200.0, 200.0);
        let low = Block::new("low", 0.0, 300.0, 32.0);
        let high = Block::new("high", 0.0, 10.0, 32.0);
        let middle = Block::new("middle", 0.0, 150.0, 32.0);

        let mut recorder = FrameRecorder::new();
        let members: [&dyn Drawable; 3] = [&low, &high, &middle];
        camera.draw(&middle, members, &mut recorder);

        let order: Vec<TextureHandle> = recorder.commands().iter().map(|cmd| cmd.frame.texture).collect();
        assert_eq!(order, vec![texture("high"), texture("middle"), texture("low")]);
    }

    #[test]
    fn test_blits_at_topleft_minus_offset() {
        let mut camera = CameraGroup::new(200.0, 100.0);
        let focus = Block::new("focus", 100.0, 100.0, 20.0);
        let other = Block::new("other", 300.0, 40.0, 20.0);

        let mut recorder = FrameRecorder::new();
        let members: [&dyn Drawable; 2] = [&focus, &other];
        camera.draw(&focus, members, &mut recorder);

        // offset = (110, 110) - (100, 50)
        assert_eq!(camera.offset(), Vec2::new(10.0, 60.0));
        let commands = recorder.commands();
        assert_eq!(commands[0].frame.texture, texture("other"));
        assert_eq!(commands[0].position, Vec2::new(290.0, -20.0));
        assert_eq!(commands[1].position, Vec2::new(90.0, 40.0));
        assert!(commands.iter().all(|c| c.alpha == 255));
    }

    #[test]
    fn test_equal_depth_order_is_stable_across_frames() {
        let mut camera = CameraGroup::new(100.0, 100.0);
        let a = Block::new("a", 0.0, 50.0, 16.0);
        let b = Block::new("b", 40.0, 50.0, 16.0);
        let c = Block::new("c", 80.0, 50.0, 16.0);
        let front = Block::new("front", 10.0, 90.0, 16.0);

        let mut first = Vec::new();
        for frame in 0..5 {
            let mut recorder = FrameRecorder::new();
            let members: [&dyn Drawable; 4] = [&c, &front, &a, &b];
            camera.draw(&a, members, &mut recorder);

            let order: Vec<TextureHandle> = recorder.commands().iter().map(|cmd| cmd.frame.texture).collect();
            assert_eq!(
                order,
                vec![texture("c"), texture("a"), texture("b"), texture("front")]
            );
            if frame == 0 {
                first = order;
            } else {
                assert_eq!(order, first);
            }
        }
    }

    #[test]
    fn test_empty_group_draws_nothing() {
        let mut camera = CameraGroup::new(100.0, 100.0);
        let focus = Block::new("focus", 0.0, 0.0, 10.0);
        let mut recorder = FrameRecorder::new();
        camera.draw(&focus, std::iter::empty(), &mut recorder);
        assert!(recorder.commands().is_empty());
    }
}
