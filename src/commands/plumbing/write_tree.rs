use crate::areas::repository::Repository;
use crate::areas::workspace::{EntryKind, WorkspaceEntry};
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::{Tree, TreeEntry};
use futures::FutureExt;
use futures::future::{LocalBoxFuture, try_join_all};
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Snapshot `dir_path` into the store and return its tree id.
    ///
    /// Children are stored before their parent (post-order). Entries are
    /// sorted by name bytes here, whatever order the filesystem lists them
    /// in, so equal directories always hash equally. Any I/O failure aborts
    /// the build before the parent tree is written.
    pub async fn build_tree(&self, dir_path: &Path) -> anyhow::Result<ObjectId> {
        let mut entries = self.workspace().list_dir(Some(dir_path))?;
        entries.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));

        log::debug!(
            "building tree for {} ({} entries)",
            dir_path.display(),
            entries.len()
        );

        // siblings are independent; the join keeps their sorted order
        let tree_entries =
            try_join_all(entries.into_iter().map(|entry| self.build_tree_entry(entry))).await?;

        let tree = Tree::new(tree_entries);
        Ok(self.database().store(&tree)?)
    }

    fn build_tree_entry(&self, entry: WorkspaceEntry) -> LocalBoxFuture<'_, anyhow::Result<TreeEntry>> {
        async move {
            let (mode, oid) = match entry.kind {
                EntryKind::Directory => (EntryMode::Directory, self.build_tree(&entry.path).await?),
                EntryKind::File => {
                    let content = self.workspace().read_file(&entry.path).await?;
                    (EntryMode::Regular, self.write_blob(content, true)?)
                }
            };

            Ok(TreeEntry::new(mode, entry.name, oid))
        }
        .boxed_local()
    }

    pub async fn write_tree(&self, dir_path: Option<&Path>) -> anyhow::Result<()> {
        let dir_path = dir_path.unwrap_or(self.path());
        let tree_id = self.build_tree(dir_path).await?;

        writeln!(self.writer(), "{tree_id}")?;

        Ok(())
    }
}
