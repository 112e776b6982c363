use super::{kinds::CalloutKind, types::ContainerFrame};

/// The open container stack: at most one blockquote frame at the bottom,
/// then list items from outermost to innermost.
#[derive(Debug, Default, Clone)]
pub struct ContainerPath(pub Vec<ContainerFrame>);

impl ContainerPath {
    /// Current blockquote depth.
    pub fn quote_depth(&self) -> usize {
        self.0
            .iter()
            .find_map(|f| match f {
                ContainerFrame::BlockQuote { depth, .. } => Some(*depth),
                _ => None,
            })
            .unwrap_or(0)
    }

    pub fn callout(&self) -> Option<CalloutKind> {
        self.0.iter().find_map(|f| match f {
            ContainerFrame::BlockQuote { callout, .. } => *callout,
            _ => None,
        })
    }

    /// Moves to a new quote depth. Lists never survive a change of quote
    /// depth. Returns true when the depth increased.
    pub fn set_blockquote_depth(&mut self, depth: usize) -> bool {
        let current = self.quote_depth();
        if current == depth {
            return false;
        }
        self.0.clear();
        if depth > 0 {
            self.0.push(ContainerFrame::BlockQuote {
                depth,
                callout: None,
            });
        }
        depth > current
    }

    pub fn set_callout(&mut self, kind: CalloutKind) {
        for f in &mut self.0 {
            if let ContainerFrame::BlockQuote { callout, .. } = f {
                *callout = Some(kind);
            }
        }
    }

    /// Depth of the innermost open list item, 0 outside lists.
    pub fn list_depth(&self) -> usize {
        match self.0.last() {
            Some(ContainerFrame::ListItem { depth, .. }) => *depth,
            _ => 0,
        }
    }

    /// Content column of the innermost open list item.
    pub fn content_col(&self) -> Option<usize> {
        match self.0.last() {
            Some(ContainerFrame::ListItem { content_col, .. }) => Some(*content_col),
            _ => None,
        }
    }

    /// Opens a list item whose marker sits at `indent` and returns its depth.
    ///
    /// Items at or left of an open item's marker close it. An indent that
    /// does not reach the open item's content column makes a sibling, so
    /// small indentation wobbles never add depth.
    pub fn open_list_item(&mut self, indent: usize, width: usize, ordered: bool) -> usize {
        while let Some(ContainerFrame::ListItem { marker_col, .. }) = self.0.last() {
            if *marker_col >= indent {
                self.0.pop();
            } else {
                break;
            }
        }
        if let Some(ContainerFrame::ListItem { content_col, .. }) = self.0.last()
            && *content_col > indent
        {
            self.0.pop();
        }

        let depth = self.list_depth() + 1;
        self.0.push(ContainerFrame::ListItem {
            marker_col: indent,
            content_col: indent + width,
            depth,
            ordered,
        });
        depth
    }

    /// Closes list items whose content column lies right of `indent`.
    pub fn close_lists_for_indent(&mut self, indent: usize) {
        while let Some(ContainerFrame::ListItem { content_col, .. }) = self.0.last() {
            if *content_col > indent {
                self.0.pop();
            } else {
                break;
            }
        }
    }

    pub fn close_lists(&mut self) {
        self.0
            .retain(|f| matches!(f, ContainerFrame::BlockQuote { .. }));
    }
}
