use assert_cmd::prelude::*;
use predicates::prelude::*;

mod common;
use common::{assertions, repository::*};

#[cfg(test)]
mod detect_command_tests {
    use super::*;

    #[test]
    fn test_detect_git_repository() -> anyhow::Result<()> {
        let repo = setup_test_repo(".git")?;
        let file = create_file(repo.path(), "src/lib.rs", "")?;

        tortoise_command(&repo)?
            .arg("detect")
            .arg(&file)
            .assert()
            .success()
            .stdout(predicate::str::contains("Git working copy at"))
            .stdout(predicate::str::contains(repo.path().display().to_string()));

        Ok(())
    }

    #[test]
    fn test_detect_prefers_mercurial() -> anyhow::Result<()> {
        let repo = setup_test_repo(".git")?;
        std::fs::create_dir(repo.path().join(".hg"))?;

        tortoise_command(&repo)?
            .arg("detect")
            .arg(repo.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Mercurial working copy at"));

        Ok(())
    }

    #[test]
    fn test_detect_legacy_subversion_uses_outermost_root() -> anyhow::Result<()> {
        let repo = setup_test_repo(".svn")?;
        std::fs::create_dir_all(repo.path().join("trunk").join(".svn"))?;
        let file = create_file(repo.path(), "trunk/README", "")?;

        tortoise_command(&repo)?
            .arg("detect")
            .arg(&file)
            .assert()
            .success()
            .stdout(predicate::str::contains("Subversion working copy at"))
            .stdout(predicate::str::ends_with(format!("{}\n", repo.path().display())));

        Ok(())
    }

    #[test]
    fn test_detect_relative_path() -> anyhow::Result<()> {
        let repo = setup_test_repo(".hg")?;
        create_file(repo.path(), "docs/index.md", "")?;

        tortoise_command(&repo)?
            .args(["detect", "docs/index.md"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Mercurial"));

        Ok(())
    }

    #[test]
    fn test_detect_outside_working_copy_fails() -> anyhow::Result<()> {
        let repo = setup_test_repo(".git")?;
        let outside = repo.tools_dir();

        tortoise_command(&repo)?
            .arg("detect")
            .arg(&outside)
            .assert()
            .failure()
            .stdout(assertions::not_under_vcs());

        Ok(())
    }
}
