//! Pointer input and the screen regions it can hit
//!
//! The view records where each section and pagination dot was drawn on the
//! last frame; pointer handlers resolve terminal cells against those regions.

use crate::section::Section;

/// Kind of pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Primary button pressed
    Down,
    /// Primary button released
    Up,
    /// Moved with the button held
    Drag,
    /// Moved without a button held
    Moved,
}

/// Abstract pointer event, converted from crossterm mouse events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub column: u16,
    pub row: u16,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, column: u16, row: u16) -> Self {
        Self { kind, column, row }
    }
}

/// Rectangle in terminal cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && u32::from(column) < u32::from(self.x) + u32::from(self.width)
            && u32::from(row) < u32::from(self.y) + u32::from(self.height)
    }
}

/// Clickable areas drawn on the last frame
#[derive(Debug, Clone, Default)]
pub struct HitRegions {
    sections: Vec<(Section, Region)>,
    cards: Vec<(Section, usize, Region)>,
    dots: Vec<(Section, usize, Region)>,
}

impl HitRegions {
    pub fn clear(&mut self) {
        self.sections.clear();
        self.cards.clear();
        self.dots.clear();
    }

    pub fn add_section(&mut self, section: Section, region: Region) {
        self.sections.push((section, region));
    }

    /// Item at `offset` within the visible window of `section`
    pub fn add_card(&mut self, section: Section, offset: usize, region: Region) {
        self.cards.push((section, offset, region));
    }

    /// Pagination dot for window `index` of `section`
    pub fn add_dot(&mut self, section: Section, index: usize, region: Region) {
        self.dots.push((section, index, region));
    }

    pub fn section_at(&self, column: u16, row: u16) -> Option<Section> {
        self.sections
            .iter()
            .find(|(_, r)| r.contains(column, row))
            .map(|(s, _)| *s)
    }

    pub fn card_at(&self, column: u16, row: u16) -> Option<(Section, usize)> {
        self.cards
            .iter()
            .find(|(_, _, r)| r.contains(column, row))
            .map(|(s, i, _)| (*s, *i))
    }

    pub fn dot_at(&self, column: u16, row: u16) -> Option<(Section, usize)> {
        self.dots
            .iter()
            .find(|(_, _, r)| r.contains(column, row))
            .map(|(s, i, _)| (*s, *i))
    }

    pub fn section_region(&self, section: Section) -> Option<Region> {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, r)| *r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_contains_edges() {
        let r = Region::new(2, 3, 4, 2);
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 4));
        assert!(!r.contains(6, 4));
        assert!(!r.contains(5, 5));
        assert!(!r.contains(1, 3));
    }

    #[test]
    fn test_region_at_terminal_edge() {
        let r = Region::new(u16::MAX - 1, 0, 2, 1);
        assert!(r.contains(u16::MAX, 0));
    }

    #[test]
    fn test_hit_lookup() {
        let mut regions = HitRegions::default();
        regions.add_section(Section::Offers, Region::new(0, 10, 80, 8));
        regions.add_dot(Section::Offers, 2, Region::new(40, 17, 1, 1));
        regions.add_card(Section::Offers, 0, Region::new(1, 11, 78, 5));

        assert_eq!(regions.section_at(5, 12), Some(Section::Offers));
        assert_eq!(regions.section_at(5, 30), None);
        assert_eq!(regions.dot_at(40, 17), Some((Section::Offers, 2)));
        assert_eq!(regions.dot_at(41, 17), None);
        assert_eq!(regions.card_at(3, 11), Some((Section::Offers, 0)));

        regions.clear();
        assert_eq!(regions.section_at(5, 12), None);
    }
}
