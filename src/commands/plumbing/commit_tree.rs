use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Author, Commit};
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// Assemble a commit for `tree_oid` using the configured identities and
    /// the current time. Nothing is written to the store.
    ///
    /// The tree and parent ids are taken on trust: a commit may name objects
    /// this store does not hold.
    pub fn build_commit(
        &self,
        tree_oid: ObjectId,
        parent: Option<ObjectId>,
        message: &str,
    ) -> Commit {
        let author = Author::author_from_env();
        let committer = Author::committer_from_env(&author);

        self.build_commit_with(tree_oid, parent, author, committer, message)
    }

    pub fn build_commit_with(
        &self,
        tree_oid: ObjectId,
        parent: Option<ObjectId>,
        author: Author,
        committer: Author,
        message: &str,
    ) -> Commit {
        Commit::new(tree_oid, parent, author, committer, message.to_string())
    }

    pub fn commit_tree(
        &self,
        tree_sha: &str,
        parent_sha: Option<&str>,
        message: &str,
    ) -> anyhow::Result<()> {
        let tree_oid = ObjectId::try_parse(tree_sha)?;
        let parent = parent_sha.map(ObjectId::try_parse).transpose()?;

        for oid in std::iter::once(&tree_oid).chain(parent.as_ref()) {
            if !self.database().contains(oid) {
                log::warn!("commit references {oid}, which is not in the object store");
            }
        }

        let commit = self.build_commit(tree_oid, parent, message);
        let commit_id = self.database().store(&commit)?;

        writeln!(self.writer(), "{commit_id}")?;

        Ok(())
    }
}
