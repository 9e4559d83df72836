#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Legal,
}

/// Which page is mounted, plus the legal section to expand when it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteState {
    pub page: Page,
    pub legal_section: usize,
}

impl Default for RouteState {
    fn default() -> Self {
        Self::home()
    }
}

impl RouteState {
    pub fn home() -> Self {
        Self {
            page: Page::Home,
            legal_section: 0,
        }
    }

    pub fn legal(section: usize) -> Self {
        Self {
            page: Page::Legal,
            legal_section: section,
        }
    }

    pub fn navigate(&mut self, page: Page, section: usize) {
        self.page = page;
        self.legal_section = section;
    }
}

/// Sections of the legal page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalTopic {
    PrivacyPolicy,
    TermsOfService,
    RefundPolicy,
    CustomerSupport,
}

impl LegalTopic {
    pub const ALL: [LegalTopic; 4] = [
        LegalTopic::PrivacyPolicy,
        LegalTopic::TermsOfService,
        LegalTopic::RefundPolicy,
        LegalTopic::CustomerSupport,
    ];

    pub fn section(self) -> usize {
        match self {
            LegalTopic::PrivacyPolicy => 0,
            LegalTopic::TermsOfService => 1,
            LegalTopic::RefundPolicy => 2,
            LegalTopic::CustomerSupport => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LegalTopic::PrivacyPolicy => "Privacy Policy",
            LegalTopic::TermsOfService => "Terms of Service",
            LegalTopic::RefundPolicy => "Refund Policy",
            LegalTopic::CustomerSupport => "Customer Support",
        }
    }
}

/// Navbar entries: label and the home-page anchor they scroll to.
pub const NAV_LINKS: [(&str, &str); 6] = [
    ("Reality", "#reality"),
    ("About Us", "#comparison"),
    ("Curriculum", "#curriculum"),
    ("Benefits", "#benefits"),
    ("FAQ", "#faq"),
    ("Contact", "#contact"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorPlan {
    /// The anchor is already mounted.
    ScrollNow(String),
    /// Mount the home page first, then scroll once it has rendered.
    SwitchHomeThenScroll(String),
}

pub fn plan_anchor_navigation(current: Page, anchor: &str) -> AnchorPlan {
    match current {
        Page::Home => AnchorPlan::ScrollNow(anchor.to_string()),
        Page::Legal => AnchorPlan::SwitchHomeThenScroll(anchor.to_string()),
    }
}

/// What anchor navigation needs from its environment.
pub trait AnchorHost: Clone + 'static {
    /// Mounts the home page.
    fn show_home(&self);
    fn scroll_to(&self, anchor: &str);
    /// Runs `task` once, `delay_ms` from now.
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Follows a navbar anchor. Off the home page the anchor does not exist yet,
/// so switch pages first and scroll after the home tree has had time to mount.
pub fn follow_anchor<H: AnchorHost>(host: &H, current: Page, anchor: &str, delay_ms: u32) {
    match plan_anchor_navigation(current, anchor) {
        AnchorPlan::ScrollNow(anchor) => host.scroll_to(&anchor),
        AnchorPlan::SwitchHomeThenScroll(anchor) => {
            host.show_home();
            let later = host.clone();
            host.defer(delay_ms, Box::new(move || later.scroll_to(&anchor)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn starts_home() {
        assert_eq!(RouteState::default(), RouteState::home());
    }

    #[test]
    fn navigating_home_resets_section() {
        let mut route = RouteState::legal(3);
        route.navigate(Page::Home, 0);
        assert_eq!(route, RouteState::home());
    }

    #[test]
    fn legal_topics_map_to_sections_in_order() {
        for (index, topic) in LegalTopic::ALL.iter().enumerate() {
            assert_eq!(topic.section(), index);
        }
    }

    #[test]
    fn anchor_from_home_scrolls_immediately() {
        assert_eq!(
            plan_anchor_navigation(Page::Home, "#faq"),
            AnchorPlan::ScrollNow("#faq".into())
        );
    }

    #[derive(Clone, Default)]
    struct Host {
        log: Rc<RefCell<Vec<String>>>,
        queued: Rc<RefCell<Vec<Box<dyn FnOnce()>>>>,
    }

    impl AnchorHost for Host {
        fn show_home(&self) {
            self.log.borrow_mut().push("home".into());
        }
        fn scroll_to(&self, anchor: &str) {
            self.log.borrow_mut().push(format!("scroll {}", anchor));
        }
        fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
            self.log.borrow_mut().push(format!("defer {}", delay_ms));
            self.queued.borrow_mut().push(task);
        }
    }

    #[test]
    fn anchor_from_legal_scrolls_only_after_the_delay() {
        let host = Host::default();
        follow_anchor(&host, Page::Legal, "#benefits", 100);
        assert_eq!(*host.log.borrow(), vec!["home", "defer 100"]);

        let queued: Vec<_> = host.queued.borrow_mut().drain(..).collect();
        for task in queued {
            task();
        }
        assert_eq!(*host.log.borrow(), vec!["home", "defer 100", "scroll #benefits"]);
    }
}
