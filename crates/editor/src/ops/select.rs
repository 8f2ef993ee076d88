use history::Command;
use shared::{Rect, Selection};

use crate::state::document::Document;

/// Replace the active selection (`None` selects everything)
pub struct SelectCommand {
    selection: Selection,
    previous: Option<Selection>,
}

impl SelectCommand {
    pub fn new(rect: Option<Rect>) -> Self {
        Self {
            selection: Selection { rect },
            previous: None,
        }
    }
}

impl Command<Document> for SelectCommand {
    fn name(&self) -> &str {
        if self.selection.is_all() {
            "Select All"
        } else {
            "Select"
        }
    }

    fn size(&self) -> usize {
        std::mem::size_of::<Selection>() * 2
    }

    fn execute(&mut self, target: &mut Document) {
        self.previous = Some(std::mem::replace(&mut target.selection, self.selection));
    }

    fn unexecute(&mut self, target: &mut Document) {
        debug_assert!(self.previous.is_some(), "unexecute before execute");
        if let Some(previous) = self.previous {
            target.selection = previous;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Rgba;

    #[test]
    fn test_select_and_revert() {
        let mut d = Document::blank(4, 4, Rgba::WHITE).unwrap();
        let mut cmd = SelectCommand::new(Some(Rect::new(0, 0, 2, 2)));
        assert_eq!(cmd.name(), "Select");
        cmd.execute(&mut d);
        assert_eq!(d.selection.rect, Some(Rect::new(0, 0, 2, 2)));
        cmd.unexecute(&mut d);
        assert!(d.selection.is_all());
    }

    #[test]
    fn test_select_all_name() {
        assert_eq!(SelectCommand::new(None).name(), "Select All");
    }
}
