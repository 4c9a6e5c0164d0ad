//! README regeneration — `deckhand update-readme`.

use anyhow::{Context, Result};
use std::path::Path;

use deckhand::ci;
use deckhand::index::{REPO_INDEX_PATH, RepoIndex};
use deckhand::readme::{
    self, APP_END_MARKER, APP_START_MARKER, README_PATH, TOC_END_MARKER, TOC_START_MARKER,
};

pub fn cmd_update_readme(root: &Path) -> Result<()> {
    let index_path = root.join(REPO_INDEX_PATH);
    let repo_index = RepoIndex::load(&index_path).context("Could not load repository index")?;
    println!("Found {} entries in repo index", repo_index.len());

    let groups = readme::group_by_category(&repo_index);
    let categories: Vec<String> = groups.iter().map(|(category, _)| category.clone()).collect();
    println!("Found categories: {}", categories.join(", "));

    let app_list = readme::render_app_list(&groups);
    let toc = readme::render_toc(&categories);

    let readme_path = root.join(README_PATH);
    let original = std::fs::read_to_string(&readme_path)
        .with_context(|| format!("Failed to read {}", readme_path.display()))?;

    // The applications region is mandatory; a README without it is a
    // hard error.
    let mut updated = readme::splice(
        &original,
        APP_START_MARKER,
        APP_END_MARKER,
        &format!("\n\n{app_list}\n\n"),
    )
    .with_context(|| {
        format!(
            "Cannot update the applications section of {}",
            readme_path.display()
        )
    })?;

    // Missing TOC markers only cost the TOC refresh, not the run.
    match readme::splice(&updated, TOC_START_MARKER, TOC_END_MARKER, &format!("\n{toc}\n")) {
        Ok(spliced) => updated = spliced,
        Err(err) => tracing::warn!(
            "skipping TOC update for {}: {err}",
            readme_path.display()
        ),
    }

    let changes_made = updated != original;
    if changes_made {
        std::fs::write(&readme_path, &updated)
            .with_context(|| format!("Failed to write {}", readme_path.display()))?;
        println!("{} updated successfully.", readme_path.display());
    } else {
        println!("{} is already up-to-date.", readme_path.display());
    }

    ci::set_output("changes_made", changes_made).context("Failed to write CI output")?;
    Ok(())
}
