/// Open/closed flag for one FAQ card.
///
/// Each card owns its own flag; cards do not coordinate, so several can be
/// open at once. One designated card starts open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Disclosure {
    open: bool,
}

impl Disclosure {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

#[cfg(test)]
mod tests {
    use super::Disclosure;

    #[test]
    fn double_toggle_restores_original_state() {
        for start in [false, true] {
            let mut d = Disclosure::new(start);
            d.toggle();
            assert_eq!(d.is_open(), !start);
            d.toggle();
            assert_eq!(d.is_open(), start);
        }
    }

    #[test]
    fn how_can_i_try_it_opens_then_closes() {
        let item = crate::content::FAQ_ITEMS
            .iter()
            .find(|it| it.question == "How can I try it?")
            .unwrap();
        assert!(!item.default_open);

        let mut d = Disclosure::new(item.default_open);
        d.toggle();
        assert!(d.is_open());
        d.toggle();
        assert!(!d.is_open());
    }
}
