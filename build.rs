//! Build script: stamps dev builds with the git revision.
//!
//! `cli::version()` appends `VERGEN_GIT_SHA` to the package version. Builds
//! with `--features release` skip it so official binaries report a clean
//! version.

fn main() {
    #[cfg(not(feature = "release"))]
    emit_git_sha();
}

#[cfg(not(feature = "release"))]
fn emit_git_sha() {
    use vergen_gitcl::{Emitter, GitclBuilder};

    let emitted = GitclBuilder::default()
        .sha(true)
        .build()
        .map_err(describe)
        .and_then(|git| {
            Emitter::default()
                .add_instructions(&git)
                .and_then(|emitter| emitter.emit())
                .map_err(describe)
        });

    // Source tarballs have no git metadata
    if let Err(message) = emitted {
        println!("cargo:warning=git revision unavailable: {}", message);
    }
}

#[cfg(not(feature = "release"))]
fn describe(e: impl std::fmt::Display) -> String {
    e.to_string()
}
