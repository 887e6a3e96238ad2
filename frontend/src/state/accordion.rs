/// Single-select accordion: at most one section open, first one by default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accordion {
    expanded: Option<usize>,
    sections: usize,
}

impl Accordion {
    pub fn new(sections: usize) -> Self {
        Self {
            expanded: if sections > 0 { Some(0) } else { None },
            sections,
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Open `index`, or collapse it if it is already open
    pub fn toggle(&mut self, index: usize) {
        if index >= self.sections {
            return;
        }
        self.expanded = if self.is_expanded(index) { None } else { Some(index) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_section_open_by_default() {
        assert_eq!(Accordion::new(8).expanded, Some(0));
        assert_eq!(Accordion::new(0).expanded, None);
    }

    #[test]
    fn test_toggle() {
        let mut accordion = Accordion::new(3);

        accordion.toggle(2);
        assert!(accordion.is_expanded(2));
        assert!(!accordion.is_expanded(0));

        accordion.toggle(2);
        assert_eq!(accordion.expanded, None);

        accordion.toggle(5);
        assert_eq!(accordion.expanded, None);
    }
}
