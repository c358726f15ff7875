use crate::areas::repository::Repository;
use crate::artifacts::objects::object::ObjectBox;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::TreeEntry;
use anyhow::Context;
use std::io::Write;

impl Repository {
    /// Entries of a tree, in stored order. A commit id lists its tree.
    pub fn list_tree_entries(&self, object_id: &ObjectId) -> anyhow::Result<Vec<TreeEntry>> {
        let object = self
            .database()
            .parse_object(object_id)
            .with_context(|| format!("Unable to read tree {object_id}"))?;

        match object {
            ObjectBox::Tree(tree) => Ok(tree.into_entries().collect()),
            ObjectBox::Commit(commit) => self.list_tree_entries(commit.tree_oid()),
            ObjectBox::Blob(_) => anyhow::bail!("{object_id} is a blob, not a tree object"),
        }
    }

    pub fn list_tree_names(&self, object_id: &ObjectId) -> anyhow::Result<Vec<String>> {
        Ok(self
            .list_tree_entries(object_id)?
            .into_iter()
            .map(|entry| entry.name)
            .collect())
    }

    pub fn ls_tree(&self, object_sha: &str, name_only: bool, recursive: bool) -> anyhow::Result<()> {
        let oid = ObjectId::try_parse(object_sha)?;

        let entries = if recursive {
            self.list_tree_entries_recursive(&oid, "")?
        } else {
            self.list_tree_entries(&oid)?
        };

        for entry in entries {
            if name_only {
                writeln!(self.writer(), "{}", entry.name)?;
            } else {
                writeln!(self.writer(), "{}", entry.display())?;
            }
        }

        Ok(())
    }

    /// Blob entries of the whole tree, named by their path from the root.
    fn list_tree_entries_recursive(
        &self,
        oid: &ObjectId,
        prefix: &str,
    ) -> anyhow::Result<Vec<TreeEntry>> {
        let mut entries = Vec::new();

        for entry in self.list_tree_entries(oid)? {
            let path = format!("{prefix}{}", entry.name);

            if entry.is_tree() {
                entries.extend(self.list_tree_entries_recursive(&entry.oid, &format!("{path}/"))?);
            } else {
                entries.push(TreeEntry::new(entry.mode, path, entry.oid));
            }
        }

        Ok(entries)
    }
}
