// file: src/profile/document.rs
// description: assembles banner, rendered sections and footer into the profile README

pub const DEFAULT_BANNER: &str = "## Welcome to {org}\n\nHere is everything we are building in the open, most recently active first.";

pub const DEFAULT_FOOTER: &str =
    "<sub>This README is generated automatically from the organization's repositories. Manual edits will be overwritten.</sub>";

#[derive(Debug, Clone)]
pub struct DocumentAssembler {
    banner: String,
    footer: String,
}

impl DocumentAssembler {
    /// `{org}` in the banner is replaced with the organization name.
    pub fn new(org: &str, banner: Option<&str>, footer: Option<&str>) -> Self {
        Self {
            banner: banner.unwrap_or(DEFAULT_BANNER).replace("{org}", org),
            footer: footer.unwrap_or(DEFAULT_FOOTER).to_string(),
        }
    }

    /// Blocks are separated by exactly one blank line and the document ends
    /// with a single newline.
    pub fn assemble<S: AsRef<str>>(&self, sections: &[S]) -> String {
        let blocks: Vec<&str> = std::iter::once(self.banner.as_str())
            .chain(sections.iter().map(|section| section.as_ref()))
            .chain(std::iter::once(self.footer.as_str()))
            .map(|block| block.trim_matches('\n'))
            .collect();

        let mut document = blocks.join("\n\n");
        document.push('\n');
        document
    }
}
