//! Deterministic image-tag derivation.
//!
//! Tags are fully qualified references of the form `registry-base/name:label`.
//! The list order is an observable contract: pushes happen in exactly this
//! order, one at a time.

/// Replaces branch path separators so the branch can be used as a tag label.
///
/// Docker tag labels may not contain `/`, so `feature/x` becomes `feature-x`.
#[must_use]
pub fn safe_branch(branch: &str) -> String {
    branch.replace('/', "-")
}

/// Derives the ordered list of image tags for a build.
///
/// The list always contains, in this order: the build-number tag, the
/// branch+build-number tag, the branch-latest tag, and the commit-SHA tag.
/// Builds of `master` additionally get a plain `:latest` tag appended last.
#[must_use]
pub fn derive_tags(
    ecr_base: &str,
    project_name: &str,
    build_number: &str,
    branch: &str,
    commit_sha: &str,
) -> Vec<String> {
    let image = format!("{ecr_base}/{project_name}");
    let branch_label = safe_branch(branch);

    let mut tags = vec![
        format!("{image}:build-{build_number}"),
        format!("{image}:{branch_label}-{build_number}"),
        format!("{image}:{branch_label}-latest"),
        format!("{image}:{commit_sha}"),
    ];
    if branch == "master" {
        tags.push(format!("{image}:latest"));
    }
    tags
}
