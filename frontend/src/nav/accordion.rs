use std::collections::BTreeSet;

/// Expanded sections of one mounted mobile menu. Several sections may be
/// open at once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    expanded: BTreeSet<usize>,
}

impl AccordionState {
    pub fn toggle_section(&mut self, index: usize) {
        if !self.expanded.remove(&index) {
            self.expanded.insert(index);
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    pub fn is_collapsed(&self) -> bool {
        self.expanded.is_empty()
    }
}

/// What activating a menu item does, in order. Collapsing and closing come
/// before navigation so the old menu is gone when the new route renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivationStep {
    CollapseSections,
    CloseMenus,
    Navigate(&'static str),
}

pub fn item_activation(path: &'static str) -> [ActivationStep; 3] {
    [
        ActivationStep::CollapseSections,
        ActivationStep::CloseMenus,
        ActivationStep::Navigate(path),
    ]
}
