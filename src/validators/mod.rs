//! Submission validators.
//!
//! Each submodule owns one check over a submitted file:
//!
//! | Module           | Checks                                             |
//! |------------------|-----------------------------------------------------|
//! | `file_structure` | path shape: `commands/<app>/docker-run.md`         |
//! | `front_matter`   | front matter present, `repo` URL shape, `logo` URL |
//! | `content`        | H1 title and "Docker Run Command" heading          |
//! | `docker_command` | fenced `docker run` block with a port mapping      |
//! | `image_tag`      | explicit tag on the image reference                |
//! | `duplicate`      | repo URL not already claimed by another directory  |
//! | `category`       | category present, a string, trimmed length ≥ 2     |
//!
//! All checks are pure functions over the path, the file content, and
//! (for the duplicate check) an explicitly passed index. Each reports at
//! most one error string, phrased for the contributor reading the CI
//! log. The repository-existence check against GitHub lives in
//! [`crate::github`], not here, so everything in this tree is testable
//! offline.

pub mod category;
pub mod content;
pub mod docker_command;
pub mod duplicate;
pub mod file_structure;
pub mod front_matter;
pub mod image_tag;
