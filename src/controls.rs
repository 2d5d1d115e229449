use raylib::prelude::*;
use crate::carousel::{Trigger, Viewport};
use crate::constants::*;

/// Previous/next buttons laid out for one viewport.
#[derive(Debug, Clone, Copy)]
pub struct Controls {
    prev: Rectangle,
    next: Rectangle,
}

fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

impl Controls {
    pub fn layout(viewport: Viewport) -> Self {
        let y = (viewport.height - BUTTON_SIZE) * 0.5;
        Self {
            prev: Rectangle::new(BUTTON_MARGIN, y, BUTTON_SIZE, BUTTON_SIZE),
            next: Rectangle::new(viewport.width - BUTTON_MARGIN - BUTTON_SIZE, y, BUTTON_SIZE, BUTTON_SIZE),
        }
    }

    pub fn hit(&self, point: Vector2) -> Option<Trigger> {
        if contains(&self.prev, point) {
            Some(Trigger::Previous)
        } else if contains(&self.next, point) {
            Some(Trigger::Next)
        } else {
            None
        }
    }

    /// Triggers raised by this frame's keyboard and mouse input.
    pub fn poll(&self, rl: &RaylibHandle) -> Vec<Trigger> {
        let mut triggers = Vec::new();
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            triggers.push(Trigger::Next);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            triggers.push(Trigger::Previous);
        }
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            triggers.extend(self.hit(rl.get_mouse_position()));
        }
        triggers
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, current_index: usize, len: usize, viewport: Viewport) {
        let background = Color::new(0, 0, 0, 140);
        d.draw_rectangle_rec(self.prev, background);
        d.draw_rectangle_rec(self.next, background);

        // Arrows, vertices in counter-clockwise order
        let inset = BUTTON_SIZE * 0.3;
        let p = self.prev;
        d.draw_triangle(
            Vector2::new(p.x + p.width - inset, p.y + inset),
            Vector2::new(p.x + inset, p.y + p.height * 0.5),
            Vector2::new(p.x + p.width - inset, p.y + p.height - inset),
            Color::WHITE,
        );
        let n = self.next;
        d.draw_triangle(
            Vector2::new(n.x + inset, n.y + inset),
            Vector2::new(n.x + inset, n.y + n.height - inset),
            Vector2::new(n.x + n.width - inset, n.y + n.height * 0.5),
            Color::WHITE,
        );

        let indicator = format!("{} / {}", current_index + 1, len);
        let text_width = measure_text(&indicator, INDICATOR_FONT_SIZE);
        d.draw_text(
            &indicator,
            (viewport.width as i32 - text_width) / 2,
            viewport.height as i32 - BUTTON_MARGIN as i32 - INDICATOR_FONT_SIZE,
            INDICATOR_FONT_SIZE,
            Color::WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicks_inside_buttons_map_to_triggers() {
        let controls = Controls::layout(Viewport::new(800.0, 600.0));

        let prev_center = Vector2::new(BUTTON_MARGIN + BUTTON_SIZE * 0.5, 300.0);
        let next_center = Vector2::new(800.0 - BUTTON_MARGIN - BUTTON_SIZE * 0.5, 300.0);

        assert_eq!(controls.hit(prev_center), Some(Trigger::Previous));
        assert_eq!(controls.hit(next_center), Some(Trigger::Next));
    }

    #[test]
    fn clicks_elsewhere_are_ignored() {
        let controls = Controls::layout(Viewport::new(800.0, 600.0));

        assert_eq!(controls.hit(Vector2::new(400.0, 300.0)), None);
        assert_eq!(controls.hit(Vector2::new(BUTTON_MARGIN + 1.0, 10.0)), None);
        assert_eq!(controls.hit(Vector2::new(0.0, 300.0)), None);
    }

    #[test]
    fn layout_follows_the_viewport() {
        let controls = Controls::layout(Viewport::new(400.0, 200.0));
        let next_center = Vector2::new(400.0 - BUTTON_MARGIN - BUTTON_SIZE * 0.5, 100.0);
        assert_eq!(controls.hit(next_center), Some(Trigger::Next));

        let resized = Controls::layout(Viewport::new(1200.0, 200.0));
        assert_eq!(resized.hit(next_center), None);
    }
}
