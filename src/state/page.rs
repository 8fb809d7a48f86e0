/// Delay before scrolling to a section after switching back from the demo
/// view, so the landing content has remounted first.
pub const SECTION_SCROLL_DELAY_MS: u64 = 100;

/// The two top-level views. Owned as a signal by the composition root and
/// passed down explicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Demo,
}

/// How a request to scroll to a named section must be sequenced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollPlan {
    /// Landing content is on screen: scroll right away.
    Immediate,
    /// Demo view is on screen: return home first, then scroll after the delay.
    AfterReturn { delay_ms: u64 },
}

impl Page {
    pub fn plan_section_scroll(self) -> ScrollPlan {
        match self {
            Page::Home => ScrollPlan::Immediate,
            Page::Demo => ScrollPlan::AfterReturn { delay_ms: SECTION_SCROLL_DELAY_MS },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Page, ScrollPlan, SECTION_SCROLL_DELAY_MS};

    #[test]
    fn home_scrolls_immediately() {
        assert_eq!(Page::Home.plan_section_scroll(), ScrollPlan::Immediate);
    }

    #[test]
    fn demo_to_faq_returns_home_then_scrolls_after_delay() {
        // Open the demo, then ask for the "faq" section from there.
        let mut page = Page::default();
        assert_eq!(page, Page::Home);
        page = Page::Demo;

        let plan = page.plan_section_scroll();
        page = Page::Home;

        assert_eq!(page, Page::Home);
        assert_eq!(plan, ScrollPlan::AfterReturn { delay_ms: SECTION_SCROLL_DELAY_MS });
    }

    #[test]
    fn default_view_is_home() {
        assert_eq!(Page::default(), Page::Home);
    }
}
