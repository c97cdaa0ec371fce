//! List command report data structures.

use super::output::{Output, Report};

/// Classes declared in a manifest.
#[derive(Debug)]
pub struct ListReport {
    /// Number of classes.
    pub class_count: usize,
    /// Class tree display string.
    pub tree: String,
    /// The lowered hierarchy as JSON, when requested.
    pub json: Option<String>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if let Some(json) = &self.json {
            out.preformatted(json);
            return;
        }

        if self.class_count == 0 {
            out.preformatted("No classes defined");
        } else {
            out.section(&format!("Classes ({})", self.class_count));
            out.preformatted(&self.tree);
        }
    }
}
