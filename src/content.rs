// Static page content. Everything here is fixed at build time; the only
// runtime variation is which slide, step, or FAQ card is currently shown.

pub const WAITLIST_URL: &str = "https://form.typeform.com/to/pXqr5Phq";
pub const DEMO_VIDEO_URL: &str = "https://www.youtube.com/embed/I2LIvwIPuyE";
pub const DEMO_CONTACT_EMAIL: &str = "jago@clearity.pro";
pub const FAQ_CONTACT_EMAIL: &str = "jago@clearity.me";

pub const CLOUDS_URL: &str = "/clouds.png";
pub const LAPTOP_URL: &str = "/laptop.png";
pub const LOGO_URL: &str = "/logo.png";
pub const REDDIT_URL: &str = "/reddit.png";

/// One panel of the tabbed problems slider, bound to a segmented-control tab.
pub struct Slide {
    pub key: &'static str,
    pub label: &'static str,
    pub quote: &'static str,
    pub rank: &'static str,
    pub panel_title: &'static str,
    pub panel_text: &'static str,
    pub art: Option<&'static str>,
    pub art_alt: &'static str,
    /// CSS background value: either a gradient or a flat color.
    pub panel_bg: &'static str,
}

pub const SLIDES: [Slide; 3] = [
    Slide {
        key: "prod",
        label: "Productivity Illusion",
        quote: "I switch between tasks endlessly, never know what counts as progress, and feel unsatisfied with anything I do.",
        rank: "#1 Most Common problem for ADHD Reddit Users",
        panel_title: "Clearity helps you focus on the most important things",
        panel_text: "It highlights anxiety points, areas to work on, and hidden connections, turning decisions into actionable tasks and tracking real progress.",
        art: Some("/illustrations/prod.png"),
        art_alt: "Floating sheets illustration",
        panel_bg: "linear-gradient(90deg, #1940A5, #244FBF)",
    },
    Slide {
        key: "brain",
        label: "Brain Overload",
        quote: "My brain is full of useless thoughts, I can\u{2019}t focus. Everything feels like chaos.",
        rank: "#2 Most Common problem for ADHD Reddit Users",
        panel_title: "You talk, Clearity turns your thoughts into a living map.",
        panel_text: "Scattered thoughts become organized and chaos becomes visible order, so your mind feels lighter and more in control.",
        art: Some("/illustrations/node.png"),
        art_alt: "Node map with leaves",
        panel_bg: "#3F6C7C",
    },
    Slide {
        key: "tool",
        label: "Tool Fatigue",
        quote: "Instead of helping, productivity apps drain me \u{2014} I waste energy, switch nonstop, and never stick.",
        rank: "#3 Most Common problem for ADHD Reddit Users",
        panel_title: "No learning curve: Clearity works the way you already do.",
        panel_text: "You just chat naturally \u{2014} no setup, no tabs, no distractions. It works for your brain, not the other way around.",
        art: Some("/illustrations/people.png"),
        art_alt: "Two people with phone illustration",
        panel_bg: "#3B87B2",
    },
];

/// Which side of the step row carries the text column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// One row of the "How Clearity Works" walkthrough.
pub struct Step {
    pub n: u8,
    pub title: &'static str,
    pub text: &'static str,
    pub result: &'static str,
    pub align: Align,
}

pub const STEPS: [Step; 5] = [
    Step {
        n: 1,
        title: "Talk it out",
        text: "Share your messy thoughts \u{2013} Clearity instantly turns it into a living mind map.",
        result: "Brain fog turns into visible order.",
        align: Align::Left,
    },
    Step {
        n: 2,
        title: "Keep chatting",
        text: "And switching between ideas \u{2013} the map updates in real time, showing hidden connections and guiding you.",
        result: "You finally see the bigger picture.",
        align: Align::Right,
    },
    Step {
        n: 3,
        title: "Lock in clarity",
        text: "When you land on a decision or insight, Clearity saves it as a snapshot and fades the clutter.",
        result: "No overthinking \u{2013} you know what you decided.",
        align: Align::Left,
    },
    Step {
        n: 4,
        title: "Move forward",
        text: "Turn snapshots into tasks, track progress, and sync with your calendar.",
        result: "Now you know exactly what you need to do.",
        align: Align::Right,
    },
    Step {
        n: 5,
        title: "Pick up anytime",
        text: "Search snapshots with a phrase and jump back into the exact map you left off.",
        result: "No lost context \u{2014} momentum is never broken.",
        align: Align::Left,
    },
];

pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
    pub default_open: bool,
}

pub const FAQ_ITEMS: [FaqItem; 6] = [
    FaqItem {
        question: "Is Clearity just another productivity app?",
        answer: "No. Clearity is designed to reduce anxiety and make your thinking clearer, not just manage tasks.",
        default_open: true,
    },
    FaqItem {
        question: "How is it different from ChatGPT?",
        answer: "Clearity doesn\u{2019}t just answer questions \u{2014} it organizes your thoughts and shows patterns so you can see the bigger picture of your mind.",
        default_open: false,
    },
    FaqItem {
        question: "Will it replace my existing apps?",
        answer: "No. Clearity works with your flow \u{2014} it\u{2019}s a thinking companion, not a replacement for tools you already use.",
        default_open: false,
    },
    FaqItem {
        question: "How secure is my personal data?",
        answer: "Clearity only stores what\u{2019}s necessary to map your thoughts \u{2014} nothing is shared without your control.",
        default_open: false,
    },
    FaqItem {
        question: "How quickly will I see results?",
        answer: "Almost immediately. Even a short session reduces stress, organizes your thoughts, and helps you get things done.",
        default_open: false,
    },
    FaqItem {
        question: "How can I try it?",
        answer: "Join the waitlist and get early access to the private beta.",
        default_open: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_faq_item_starts_open() {
        let open: Vec<_> = FAQ_ITEMS.iter().filter(|it| it.default_open).collect();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].question, "Is Clearity just another productivity app?");
    }

    #[test]
    fn try_it_item_exists_and_starts_closed() {
        let item = FAQ_ITEMS.iter().find(|it| it.question == "How can I try it?");
        assert!(item.is_some_and(|it| !it.default_open));
    }

    #[test]
    fn steps_are_numbered_and_alternate_sides() {
        for (i, step) in STEPS.iter().enumerate() {
            assert_eq!(step.n as usize, i + 1);
            let expected = if i % 2 == 0 { Align::Left } else { Align::Right };
            assert_eq!(step.align, expected, "step {} side", step.n);
        }
    }

    #[test]
    fn slides_have_unique_keys() {
        for (i, a) in SLIDES.iter().enumerate() {
            for b in SLIDES.iter().skip(i + 1) {
                assert_ne!(a.key, b.key);
            }
        }
    }
}
