/// Index into a fixed-length slide list, clamped to `[0, len - 1]`.
///
/// Navigation past either end is a no-op rather than a wrap; the slider's
/// Prev/Next buttons disable themselves via `at_start`/`at_end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selector {
    index: usize,
    len: usize,
}

impl Selector {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Jump to an absolute target, clamping out-of-range requests.
    pub fn jump(&mut self, target: isize) {
        let max = self.len.saturating_sub(1) as isize;
        self.index = target.clamp(0, max) as usize;
    }

    pub fn next(&mut self) {
        self.jump(self.index as isize + 1);
    }

    pub fn prev(&mut self) {
        self.jump(self.index as isize - 1);
    }

    pub fn at_start(&self) -> bool {
        self.index == 0
    }

    pub fn at_end(&self) -> bool {
        self.index + 1 >= self.len
    }

    /// Map arrow keys to prev/next. Returns whether the index moved.
    pub fn handle_key(&mut self, key: &str) -> bool {
        let before = self.index;
        match key {
            "ArrowLeft" => self.prev(),
            "ArrowRight" => self.next(),
            _ => return false,
        }
        self.index != before
    }
}

#[cfg(test)]
mod tests {
    use super::Selector;

    #[test]
    fn jump_clamps_to_bounds_for_any_target() {
        for len in 1..6usize {
            let mut sel = Selector::new(len);
            for target in -3..(len as isize + 3) {
                sel.jump(target);
                assert!(sel.index() < len, "index {} out of range for len {len}", sel.index());
                let expected = target.clamp(0, len as isize - 1) as usize;
                assert_eq!(sel.index(), expected);
            }
        }
    }

    #[test]
    fn prev_at_first_and_next_at_last_are_noops() {
        let mut sel = Selector::new(3);
        sel.prev();
        assert_eq!(sel.index(), 0);
        assert!(sel.at_start());

        sel.jump(2);
        sel.next();
        assert_eq!(sel.index(), 2);
        assert!(sel.at_end());
    }

    #[test]
    fn next_three_times_on_three_slides_clamps_at_last() {
        let mut sel = Selector::new(3);
        sel.next();
        sel.next();
        sel.next();
        assert_eq!(sel.index(), 2);
    }

    #[test]
    fn arrow_keys_move_and_report_change() {
        let mut sel = Selector::new(3);
        assert!(sel.handle_key("ArrowRight"));
        assert_eq!(sel.index(), 1);
        assert!(sel.handle_key("ArrowLeft"));
        assert_eq!(sel.index(), 0);
        // Already at the first slide: key is absorbed without movement.
        assert!(!sel.handle_key("ArrowLeft"));
        assert_eq!(sel.index(), 0);
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let mut sel = Selector::new(3);
        assert!(!sel.handle_key("Enter"));
        assert!(!sel.handle_key("ArrowUp"));
        assert_eq!(sel.index(), 0);
    }

    #[test]
    fn empty_list_degenerates_to_zero() {
        let mut sel = Selector::new(0);
        sel.next();
        sel.jump(5);
        assert_eq!(sel.index(), 0);
    }
}
