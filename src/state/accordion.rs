/// Which entry of an accordion is expanded. At most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccordionSelection {
    open: Option<usize>,
}

impl AccordionSelection {
    pub fn closed() -> Self {
        Self { open: None }
    }

    pub fn opened(index: usize) -> Self {
        Self { open: Some(index) }
    }

    /// Opens `index` only if it addresses one of `len` entries.
    pub fn opened_within(index: usize, len: usize) -> Self {
        if index < len {
            Self::opened(index)
        } else {
            Self::closed()
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn toggle(&mut self, index: usize) {
        self.open = Self::toggled(self.open, index);
    }

    /// Clicking the open entry closes it, clicking any other entry opens that one instead.
    pub fn toggled(current: Option<usize>, index: usize) -> Option<usize> {
        if current == Some(index) {
            None
        } else {
            Some(index)
        }
    }
}

impl From<Option<usize>> for AccordionSelection {
    fn from(open: Option<usize>) -> Self {
        Self { open }
    }
}

/// Accordion whose open entry is seeded from a deep link. The user may open
/// or close entries freely; a different deep link overrides their choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeepLinkedSelection {
    link: usize,
    len: usize,
    selection: AccordionSelection,
}

impl DeepLinkedSelection {
    pub fn new(link: usize, len: usize) -> Self {
        Self {
            link,
            len,
            selection: AccordionSelection::opened_within(link, len),
        }
    }

    /// Applies the current deep link. Returns whether it differed from the last one.
    pub fn follow(&mut self, link: usize) -> bool {
        if link == self.link {
            return false;
        }
        *self = Self::new(link, self.len);
        true
    }

    pub fn choose(&mut self, selected: Option<usize>) {
        self.selection = AccordionSelection::from(selected);
    }

    pub fn selected(&self) -> Option<usize> {
        self.selection.selected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let selection = AccordionSelection::default();
        assert_eq!(selection.selected(), None);
        assert!(!selection.is_open(0));
    }

    #[test]
    fn toggling_open_entry_closes_it() {
        let mut selection = AccordionSelection::opened(2);
        selection.toggle(2);
        assert_eq!(selection, AccordionSelection::closed());
    }

    #[test]
    fn toggling_other_entry_replaces_selection() {
        let mut selection = AccordionSelection::opened(0);
        selection.toggle(3);
        assert_eq!(selection.selected(), Some(3));
        assert!((0..7).filter(|i| selection.is_open(*i)).eq([3]));
    }

    #[test]
    fn toggling_when_closed_opens() {
        assert_eq!(AccordionSelection::toggled(None, 4), Some(4));
    }

    #[test]
    fn out_of_range_deep_link_opens_nothing() {
        assert_eq!(AccordionSelection::opened_within(9, 4).selected(), None);
        assert_eq!(AccordionSelection::opened_within(3, 4).selected(), Some(3));
    }

    #[test]
    fn deep_link_opens_its_entry() {
        assert_eq!(DeepLinkedSelection::new(2, 4).selected(), Some(2));
        assert_eq!(DeepLinkedSelection::new(4, 4).selected(), None);
    }

    #[test]
    fn same_deep_link_keeps_user_choice() {
        let mut selection = DeepLinkedSelection::new(1, 4);
        selection.choose(Some(3));
        assert!(!selection.follow(1));
        assert_eq!(selection.selected(), Some(3));
    }

    #[test]
    fn new_deep_link_replaces_user_choice() {
        let mut selection = DeepLinkedSelection::new(1, 4);
        selection.choose(None);
        assert!(selection.follow(2));
        assert_eq!(selection.selected(), Some(2));
    }
}
