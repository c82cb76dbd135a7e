//! Tests for project discovery and the command-folder resolver.

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::host::fake::FakeHost;
    use crate::project::{
        find_project_folders, is_flutter_project_folder, locate_best_project_root,
        resolve_command_folder, PUBSPEC_FILE,
    };
    use std::collections::HashSet;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const PLAIN_PUBSPEC: &str = "name: sample\ndependencies:\n  path: ^1.8.0\n";
    const FLUTTER_PUBSPEC: &str = "name: app\ndependencies:\n  flutter:\n    sdk: flutter\n";

    fn make_project(root: &Path, name: &str, pubspec: &str) -> PathBuf {
        let folder = root.join(name);
        std::fs::create_dir_all(&folder).unwrap();
        std::fs::write(folder.join(PUBSPEC_FILE), pubspec).unwrap();
        folder
    }

    fn no_exclusions() -> HashSet<String> {
        HashSet::new()
    }

    #[test]
    fn locates_nearest_enclosing_project_root() {
        let workspace = TempDir::new().unwrap();
        let outer = make_project(workspace.path(), "outer", PLAIN_PUBSPEC);
        let inner = make_project(&outer, "packages/inner", PLAIN_PUBSPEC);
        let file = inner.join("lib").join("main.dart");
        std::fs::create_dir_all(file.parent().unwrap()).unwrap();
        std::fs::write(&file, "void main() {}").unwrap();

        assert_eq!(locate_best_project_root(&file), Some(inner.clone()));
        // A file directly under the outer project resolves to the outer root.
        let outer_file = outer.join("tool.dart");
        std::fs::write(&outer_file, "").unwrap();
        assert_eq!(locate_best_project_root(&outer_file), Some(outer));
    }

    #[test]
    fn locate_returns_none_outside_any_project() {
        let workspace = TempDir::new().unwrap();
        let file = workspace.path().join("notes.txt");
        std::fs::write(&file, "").unwrap();
        assert_eq!(locate_best_project_root(&file), None);
    }

    #[test]
    fn finds_project_folders_sorted() {
        let workspace = TempDir::new().unwrap();
        let b = make_project(workspace.path(), "beta", PLAIN_PUBSPEC);
        let a = make_project(workspace.path(), "alpha", PLAIN_PUBSPEC);
        // A directory without a pubspec is not a project.
        std::fs::create_dir_all(workspace.path().join("docs")).unwrap();

        let found = find_project_folders(
            &[workspace.path().to_path_buf()],
            &no_exclusions(),
            false,
        );
        assert_eq!(found, vec![a, b]);
    }

    #[test]
    fn excluded_folders_are_not_searched() {
        let workspace = TempDir::new().unwrap();
        let kept = make_project(workspace.path(), "app", PLAIN_PUBSPEC);
        make_project(workspace.path(), "third_party/dep", PLAIN_PUBSPEC);

        let excluded: HashSet<String> = ["third_party".to_string()].into_iter().collect();
        let found =
            find_project_folders(&[workspace.path().to_path_buf()], &excluded, false);
        assert_eq!(found, vec![kept]);
    }

    #[test]
    fn flutter_only_keeps_flutter_projects() {
        let workspace = TempDir::new().unwrap();
        make_project(workspace.path(), "plain", PLAIN_PUBSPEC);
        let app = make_project(workspace.path(), "app", FLUTTER_PUBSPEC);

        assert!(is_flutter_project_folder(&app));
        let found = find_project_folders(
            &[workspace.path().to_path_buf()],
            &no_exclusions(),
            true,
        );
        assert_eq!(found, vec![app]);
    }

    #[tokio::test]
    async fn no_projects_warns_and_returns_none() {
        let workspace = TempDir::new().unwrap();
        let host = FakeHost::new(vec![workspace.path().to_path_buf()]);

        let result = resolve_command_folder(&host, &Config::default(), "Pick one", None, false)
            .await
            .unwrap();
        assert_eq!(result, None);
        let warnings = host.warnings.lock().unwrap();
        assert_eq!(warnings.as_slice(), ["No Dart/Flutter projects were found."]);
    }

    #[tokio::test]
    async fn no_flutter_projects_warning_names_flutter() {
        let workspace = TempDir::new().unwrap();
        make_project(workspace.path(), "plain", PLAIN_PUBSPEC);
        let host = FakeHost::new(vec![workspace.path().to_path_buf()]);

        let result = resolve_command_folder(&host, &Config::default(), "Pick one", None, true)
            .await
            .unwrap();
        assert_eq!(result, None);
        let warnings = host.warnings.lock().unwrap();
        assert_eq!(warnings.as_slice(), ["No Flutter projects were found."]);
    }

    #[tokio::test]
    async fn single_candidate_is_returned_without_prompting() {
        let workspace = TempDir::new().unwrap();
        let only = make_project(workspace.path(), "only", PLAIN_PUBSPEC);
        let host = FakeHost::new(vec![workspace.path().to_path_buf()]);

        let result = resolve_command_folder(&host, &Config::default(), "Pick one", None, false)
            .await
            .unwrap();
        assert_eq!(result, Some(only));
        assert!(host.pickers_shown.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn multiple_candidates_go_through_the_picker() {
        let workspace = TempDir::new().unwrap();
        let a = make_project(workspace.path(), "alpha", PLAIN_PUBSPEC);
        let b = make_project(workspace.path(), "beta", PLAIN_PUBSPEC);
        let mut host = FakeHost::new(vec![workspace.path().to_path_buf()]);
        host.pick = Some(1);

        let result = resolve_command_folder(&host, &Config::default(), "Pick one", None, false)
            .await
            .unwrap();
        assert_eq!(result, Some(b.clone()));

        // Labels are relative to the workspace folder's parent directory.
        let pickers = host.pickers_shown.lock().unwrap();
        assert_eq!(pickers.len(), 1);
        let labels: Vec<String> = pickers[0].iter().map(|i| i.label.clone()).collect();
        let workspace_name = workspace.path().file_name().unwrap().to_string_lossy();
        assert_eq!(
            labels,
            vec![
                format!("{}/alpha", workspace_name),
                format!("{}/beta", workspace_name)
            ]
        );
        assert_eq!(pickers[0][0].path, a);
    }

    #[tokio::test]
    async fn cancelling_the_picker_returns_none() {
        let workspace = TempDir::new().unwrap();
        make_project(workspace.path(), "alpha", PLAIN_PUBSPEC);
        make_project(workspace.path(), "beta", PLAIN_PUBSPEC);
        let host = FakeHost::new(vec![workspace.path().to_path_buf()]);
        // host.pick stays None: the user dismissed the prompt.

        let result = resolve_command_folder(&host, &Config::default(), "Pick one", None, false)
            .await
            .unwrap();
        assert_eq!(result, None);
        assert_eq!(host.pickers_shown.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn explicit_selection_short_circuits_enumeration() {
        let workspace = TempDir::new().unwrap();
        let project = make_project(workspace.path(), "picked", PLAIN_PUBSPEC);
        let file = project.join("lib").join("main.dart");
        std::fs::create_dir_all(file.parent().unwrap()).unwrap();
        std::fs::write(&file, "").unwrap();

        // No workspace folders at all: resolution must not need them.
        let host = FakeHost::new(Vec::new());
        let result = resolve_command_folder(
            &host,
            &Config::default(),
            "Pick one",
            Some(&file),
            false,
        )
        .await
        .unwrap();
        assert_eq!(result, Some(project));
        assert!(host.pickers_shown.lock().unwrap().is_empty());
        assert!(host.warnings.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn active_file_is_used_when_no_selection_given() {
        let workspace = TempDir::new().unwrap();
        let project = make_project(workspace.path(), "active", PLAIN_PUBSPEC);
        let file = project.join("bin").join("tool.dart");
        std::fs::create_dir_all(file.parent().unwrap()).unwrap();
        std::fs::write(&file, "").unwrap();

        let mut host = FakeHost::new(vec![workspace.path().to_path_buf()]);
        host.active = Some(file);

        let result = resolve_command_folder(&host, &Config::default(), "Pick one", None, false)
            .await
            .unwrap();
        assert_eq!(result, Some(project));
    }
}
