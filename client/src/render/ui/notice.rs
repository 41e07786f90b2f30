//! Short-lived feedback lines (harvests, crafting, refused actions)

use macroquad::prelude::*;

use super::super::Renderer;
use super::common::*;

const NOTICE_LIFETIME: f32 = 3.0;
const NOTICE_FADE: f32 = 0.5;
const MAX_NOTICES: usize = 4;

#[derive(Debug, Clone)]
struct Notice {
    text: String,
    remaining: f32,
}

#[derive(Debug, Clone, Default)]
pub struct NoticeLog {
    entries: Vec<Notice>,
}

impl NoticeLog {
    /// Add a line; the oldest one drops off past the cap
    pub fn push(&mut self, text: String) {
        if self.entries.len() == MAX_NOTICES {
            self.entries.remove(0);
        }
        self.entries.push(Notice {
            text,
            remaining: NOTICE_LIFETIME,
        });
    }

    pub fn update(&mut self, delta: f32) {
        for notice in &mut self.entries {
            notice.remaining -= delta;
        }
        self.entries.retain(|n| n.remaining > 0.0);
    }

    /// Lines oldest first with their opacity
    pub fn visible(&self) -> impl Iterator<Item = (&str, f32)> {
        self.entries
            .iter()
            .map(|n| (n.text.as_str(), (n.remaining / NOTICE_FADE).min(1.0)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Renderer {
    pub(crate) fn render_notices(&self, notices: &NoticeLog) {
        let line_height = 20.0;
        let base_y = screen_height() - 40.0 - (notices.len() as f32 - 1.0) * line_height;

        for (i, (text, alpha)) in notices.visible().enumerate() {
            let mut color = TEXT_NORMAL;
            color.a = alpha;
            self.draw_text_outlined(text, 12.0, base_y + i as f32 * line_height, 18.0, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices_expire() {
        let mut log = NoticeLog::default();
        log.push("first".to_string());
        log.update(NOTICE_LIFETIME - 0.25);
        log.push("second".to_string());

        let lines: Vec<_> = log.visible().collect();
        assert_eq!(lines[0], ("first", 0.5));
        assert_eq!(lines[1], ("second", 1.0));

        log.update(0.5);
        assert_eq!(log.visible().map(|(t, _)| t).collect::<Vec<_>>(), vec!["second"]);
    }

    #[test]
    fn test_notice_cap() {
        let mut log = NoticeLog::default();
        for i in 0..6 {
            log.push(format!("line {}", i));
        }
        assert_eq!(log.len(), MAX_NOTICES);
        assert_eq!(log.visible().next().map(|(t, _)| t), Some("line 2"));
    }
}
