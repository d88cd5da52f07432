//! Status use case: what each section will contribute to each document

use crate::domain::{Content, Target};
use crate::error::Result;
use crate::infrastructure::{ContentRepository, FileSystemRepository};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionStatus {
    pub name: String,
    /// Item slots in the document, rendered or not
    pub slots: usize,
    pub domestic: usize,
    pub international: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub date: String,
    pub sections: Vec<SectionStatus>,
}

impl StatusReport {
    pub fn from_content(content: &Content) -> Self {
        let sections = content
            .sections
            .iter()
            .map(|section| SectionStatus {
                name: section.name.clone(),
                slots: section.items.len(),
                domestic: section.ranked_items(Target::Domestic).len(),
                international: section.ranked_items(Target::International).len(),
            })
            .collect();

        StatusReport {
            date: content.metadata.date.clone(),
            sections,
        }
    }
}

pub fn status(repository: &FileSystemRepository) -> Result<StatusReport> {
    let content = repository.load_content()?;
    Ok(StatusReport::from_content(&content))
}
