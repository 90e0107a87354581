#![allow(dead_code)]

use git2::{Repository, Signature};
use std::path::Path;
use tempfile::TempDir;

// Helper function to setup a temporary git repo with the given tags on a
// single commit
pub fn setup_tagged_repo(tags: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().expect("Could not create temp dir");
    let repo = Repository::init(temp_dir.path()).expect("Could not init git repo");
    commit_with_tags(&repo, tags);
    temp_dir
}

pub fn commit_with_tags(repo: &Repository, tags: &[&str]) {
    let sig = Signature::now("Test User", "test@example.com").expect("Could not build signature");
    let tree_id = repo
        .index()
        .expect("Could not get index")
        .write_tree()
        .expect("Could not write tree");
    let tree = repo.find_tree(tree_id).expect("Could not find tree");

    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    let commit_id = repo
        .commit(Some("HEAD"), &sig, &sig, "release", &tree, &parents)
        .expect("Could not create commit");
    let object = repo
        .find_object(commit_id, None)
        .expect("Could not find commit object");

    for tag in tags {
        repo.tag_lightweight(tag, &object, false)
            .expect("Could not create tag");
    }
}

/// Empty repository whose `origin` remote points at `upstream`.
pub fn setup_clone_of(upstream: &Path) -> TempDir {
    let temp_dir = TempDir::new().expect("Could not create temp dir");
    let repo = Repository::init(temp_dir.path()).expect("Could not init git repo");
    repo.remote("origin", upstream.to_str().expect("utf-8 temp path"))
        .expect("Could not add remote");
    temp_dir
}
