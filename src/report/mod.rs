//! Usage Report
//!
//! Read-only views over aggregated trees: the text layout lives in
//! [`format`], the serializable shapes for `--format json` live here. Every
//! view lists entries in report order (size descending, insertion order on
//! ties).

pub mod format;

pub use format::{
    format_section_heading, format_summary_text, format_usage_text, human_size, pad_line,
    render_tree, resolve_columns, FALLBACK_COLUMNS,
};

use crate::store::RecordStore;
use crate::tree::{BuildStats, TreeNode};
use serde::Serialize;

/// Trees selected for one report
#[derive(Debug, Clone, Copy)]
pub struct UsageView<'a> {
    pub visible: &'a TreeNode,
    pub trash: Option<&'a TreeNode>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub id: String,
    pub name: String,
    pub size: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DirectoryReport {
    pub name: String,
    pub total_size: u64,
    pub documents: Vec<DocumentReport>,
    pub directories: Vec<DirectoryReport>,
}

impl DirectoryReport {
    pub fn from_node(name: &str, node: &TreeNode) -> Self {
        Self {
            name: name.to_string(),
            total_size: node.total_size,
            documents: node
                .sorted_documents()
                .into_iter()
                .map(|(name, record)| DocumentReport {
                    id: record.id.clone(),
                    name: name.to_string(),
                    size: record.document_size(),
                })
                .collect(),
            directories: node
                .sorted_directories()
                .into_iter()
                .map(|(name, child)| DirectoryReport::from_node(name, child))
                .collect(),
        }
    }
}

/// JSON shape of a usage report
#[derive(Debug, Clone, Serialize)]
pub struct UsageReport {
    pub visible: DirectoryReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trash: Option<DirectoryReport>,
}

impl UsageReport {
    pub fn from_view(view: &UsageView<'_>) -> Self {
        Self {
            visible: DirectoryReport::from_node("", view.visible),
            trash: view
                .trash
                .map(|trash| DirectoryReport::from_node("trash", trash)),
        }
    }
}

/// One row of the top-level folder breakdown
#[derive(Debug, Clone, Serialize)]
pub struct FolderUsage {
    pub name: String,
    pub documents: usize,
    pub total_size: u64,
}

/// Numbers behind `redu summary`
#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub records: usize,
    pub collections: usize,
    pub visible_documents: usize,
    pub trash_documents: usize,
    pub replaced_documents: usize,
    pub visible_bytes: u64,
    pub trash_bytes: u64,
    pub top_directories: Vec<FolderUsage>,
}

/// Rows shown in the top-level breakdown
pub const SUMMARY_TOP_DIRECTORIES: usize = 10;

impl SummaryData {
    pub fn collect(
        store: &RecordStore,
        visible: &TreeNode,
        trash: &TreeNode,
        stats: &BuildStats,
    ) -> Self {
        let top_directories = visible
            .sorted_directories()
            .into_iter()
            .take(SUMMARY_TOP_DIRECTORIES)
            .map(|(name, node)| FolderUsage {
                name: name.to_string(),
                documents: node.document_count(),
                total_size: node.total_size,
            })
            .collect();

        Self {
            records: store.len(),
            collections: store.collections().count(),
            visible_documents: stats.visible_documents,
            trash_documents: stats.trash_documents,
            replaced_documents: stats.replaced_documents,
            visible_bytes: visible.total_size,
            trash_bytes: trash.total_size,
            top_directories,
        }
    }
}
