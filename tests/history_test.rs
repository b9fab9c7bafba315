use git2::Repository;
use serial_test::serial;
use std::env;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use autover::domain::Resolver;
use autover::git::{GitHistory, History};
use autover::publisher::Publisher;
use autover::store::VersionStore;

fn commit_file(repo: &Repository, rel_path: &str, content: &[u8], message: &str) -> git2::Oid {
    let workdir = repo.workdir().expect("repo has workdir");
    fs::write(workdir.join(rel_path), content).expect("write file");

    let mut index = repo.index().expect("index");
    index.add_path(Path::new(rel_path)).expect("add path");
    index.write().expect("write index");

    let tree_id = index.write_tree().expect("write tree");
    let tree = repo.find_tree(tree_id).expect("find tree");
    let sig = repo.signature().expect("signature");

    let parents = match repo.head() {
        Ok(head) => vec![head.peel_to_commit().expect("parent commit")],
        Err(_) => Vec::new(),
    };
    let parent_refs: Vec<&git2::Commit> = parents.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
        .expect("commit")
}

/// Repo with a tagged 0.1.0 release and three conventional commits on top
fn setup_test_repo() -> TempDir {
    let temp = TempDir::new().expect("Could not create temp dir");
    let repo = Repository::init(temp.path()).expect("Could not init git repo");

    {
        let mut config = repo.config().expect("Could not get config");
        config
            .set_str("user.name", "Test User")
            .expect("Could not set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Could not set user.email");
    }

    let manifest = "[package]\nname = \"demo\"\nversion = \"0.1.0\"\nedition = \"2021\"\n";
    let first = commit_file(
        &repo,
        "Cargo.toml",
        manifest.as_bytes(),
        "chore: initial scaffold",
    );
    repo.tag_lightweight("v0.1.0", &repo.find_object(first, None).unwrap(), false)
        .expect("Could not create tag");

    commit_file(&repo, "notes.txt", b"one", "fix: bug1");
    commit_file(&repo, "notes.txt", b"two", "chore: cleanup");
    commit_file(&repo, "notes.txt", b"three", "feat(api): new endpoint");

    temp
}

#[test]
fn test_latest_tag_found_on_history() {
    let temp = setup_test_repo();
    let history = GitHistory::open(temp.path()).unwrap();

    assert_eq!(history.latest_tag().unwrap(), Some("v0.1.0".to_string()));
}

#[test]
fn test_subjects_since_tag_oldest_first() {
    let temp = setup_test_repo();
    let history = GitHistory::open(temp.path()).unwrap();

    let commits = history.subjects_since(Some("v0.1.0")).unwrap();
    let subjects: Vec<&str> = commits.iter().map(|c| c.subject.as_str()).collect();
    assert_eq!(
        subjects,
        vec!["fix: bug1", "chore: cleanup", "feat(api): new endpoint"]
    );

    // Hash and author come through with the subject
    for commit in &commits {
        assert_eq!(commit.author, "Test User");
        assert!(!commit.hash.is_empty());
    }
}

#[test]
fn test_subjects_without_tag_yields_head_only() {
    let temp = setup_test_repo();
    let history = GitHistory::open(temp.path()).unwrap();

    let commits = history.subjects_since(None).unwrap();
    assert_eq!(commits.len(), 1);
    assert_eq!(commits[0].subject, "feat(api): new endpoint");
}

#[test]
fn test_full_release_pipeline_without_push() {
    let temp = setup_test_repo();
    let history = GitHistory::open(temp.path()).unwrap();

    let tag = history.latest_tag().unwrap();
    let commits = history.subjects_since(tag.as_deref()).unwrap();
    let subjects: Vec<String> = commits.iter().map(|c| c.subject.clone()).collect();

    let store = VersionStore::new(temp.path().join("Cargo.toml"), "package.version");
    let current = store.read().unwrap();
    assert_eq!(current, "0.1.0");

    let resolution = Resolver::new().resolve(&current, &subjects);
    assert_eq!(resolution.version, "0.2.0");
    assert!(resolution.changed);

    store.write(&current, &resolution.version).unwrap();
    assert_eq!(store.read().unwrap(), "0.2.0");

    let publisher = Publisher::open(temp.path()).unwrap();
    publisher
        .commit_release(Path::new("Cargo.toml"), "chore: release 0.2.0")
        .unwrap();
    publisher.create_tag("v0.2.0").unwrap();

    let repo = Repository::open(temp.path()).unwrap();
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    assert_eq!(head.message().unwrap(), "chore: release 0.2.0");
    assert!(repo.find_reference("refs/tags/v0.2.0").is_ok());

    // The new tag is now the resolution boundary for the next run
    assert_eq!(history.latest_tag().unwrap(), Some("v0.2.0".to_string()));
}

#[test]
#[serial]
fn test_git_history_open_in_cwd() {
    let temp = setup_test_repo();
    let original_dir = env::current_dir().unwrap();

    env::set_current_dir(temp.path()).expect("Could not change to temp dir");
    let history = GitHistory::open(".");
    assert!(
        history.is_ok(),
        "GitHistory::open(\".\") should succeed inside a git directory"
    );

    env::set_current_dir(original_dir).unwrap();
}
