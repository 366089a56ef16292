//! Integration tests for the scaffold workflow
//!
//! A fake runner stands in for the shell: it records the plan and writes the
//! files create-vite would have generated, so the patch phase can be checked
//! end to end without network access.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use starter_core::{Feature, Language, PackageManager, Selection};
use starter_projects::patch::{patch_stylesheet, patch_vite_config, ConfigEdit};
use starter_projects::{
    build_plan, CommandPlan, CommandRunner, DryRunRunner, PatchStatus, RunReport, Scaffolder,
};
use std::fs;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;

const VITE_CONFIG: &str = r#"import { defineConfig } from 'vite'
import react from '@vitejs/plugin-react'

// https://vite.dev/config/
export default defineConfig({
  plugins: [react()],
})
"#;

const INDEX_CSS: &str = ":root {\n  color-scheme: light dark;\n}\n";

/// Runner that pretends to be create-vite
struct FakeScaffoldRunner {
    project_path: Utf8PathBuf,
    config_file: &'static str,
    exit_code: i32,
    seen: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl CommandRunner for FakeScaffoldRunner {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn run(&self, plan: &CommandPlan) -> starter_projects::Result<RunReport> {
        self.seen.lock().unwrap().extend(plan.iter().cloned());

        fs::create_dir_all(self.project_path.join("src"))?;
        fs::write(self.project_path.join(self.config_file), VITE_CONFIG)?;
        fs::write(self.project_path.join("src/index.css"), INDEX_CSS)?;
        fs::write(self.project_path.join("README.md"), "# React + Vite\n")?;

        Ok(RunReport {
            commands_sent: plan.len(),
            executed: true,
            exit_code: Some(self.exit_code),
        })
    }
}

fn temp_root() -> (TempDir, Utf8PathBuf) {
    let temp = TempDir::new().unwrap();
    let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
    (temp, root)
}

fn selection(
    root: &Utf8Path,
    language: Language,
    features: &[Feature],
    pm: PackageManager,
) -> Selection {
    Selection::new(language, features.iter().copied(), pm, "demo", root.to_path_buf()).unwrap()
}

#[test]
fn test_typescript_pnpm_scenario_order() {
    let (_temp, root) = temp_root();
    let sel = selection(
        &root,
        Language::TypeScript,
        &[Feature::TailwindCss, Feature::Axios],
        PackageManager::Pnpm,
    );
    let plan = build_plan(&sel);
    let commands = plan.commands();

    assert_eq!(commands.len(), 6);
    assert_eq!(commands[0], format!("cd \"{}\"", root));
    assert!(commands[1].contains("--template react-ts"));
    assert_eq!(commands[2], "cd \"demo\"");
    assert_eq!(commands[3], "pnpm install");
    assert_eq!(commands[4], "pnpm add tailwindcss @tailwindcss/vite");
    assert_eq!(commands[5], "pnpm add axios");
}

#[test]
fn test_tailwind_install_after_base_install() {
    let (_temp, root) = temp_root();
    for pm in PackageManager::all() {
        let sel = selection(&root, Language::JavaScript, &[Feature::TailwindCss], pm);
        let plan = build_plan(&sel);

        let base = plan
            .position(&format!("{} install", pm.as_str()))
            .expect("base install present");
        let tailwind = plan.position("tailwindcss").expect("tailwind install present");
        assert!(tailwind > base, "tailwind must follow base install for {}", pm);
    }
}

#[test]
fn test_chakra_and_framer_motion_single_animation_line() {
    let (_temp, root) = temp_root();
    let sel = selection(
        &root,
        Language::JavaScript,
        &[Feature::ChakraUi, Feature::FramerMotion, Feature::Zustand],
        PackageManager::Npm,
    );
    let plan = build_plan(&sel);

    let count = plan.iter().filter(|c| c.contains("framer-motion")).count();
    assert_eq!(count, 1);
}

#[test]
fn test_patches_are_idempotent_on_content() {
    let once = patch_stylesheet(INDEX_CSS).unwrap();
    let twice = patch_stylesheet(&once).unwrap_or_else(|| once.clone());
    assert_eq!(once, twice);

    let patched_config = match patch_vite_config(VITE_CONFIG) {
        ConfigEdit::Patched { content, .. } => content,
        ConfigEdit::Unchanged => panic!("fresh config should be patched"),
    };
    assert_eq!(patch_vite_config(&patched_config), ConfigEdit::Unchanged);
}

#[tokio::test]
async fn test_scaffold_patches_generated_files() {
    let (_temp, root) = temp_root();
    let sel = selection(
        &root,
        Language::TypeScript,
        &[Feature::TailwindCss, Feature::ReactRouter],
        PackageManager::Yarn,
    );
    let project = sel.project_path();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let runner = FakeScaffoldRunner {
        project_path: project.clone(),
        config_file: "vite.config.ts",
        exit_code: 0,
        seen: Arc::clone(&seen),
    };
    let report = Scaffolder::new(Box::new(runner)).scaffold(&sel).await.unwrap();

    assert_eq!(seen.lock().unwrap().len(), report.plan.len());
    assert_eq!(report.patches.len(), 3);
    assert!(report
        .patches
        .iter()
        .all(|p| p.status == PatchStatus::Success));

    let config = fs::read_to_string(project.join("vite.config.ts")).unwrap();
    assert!(config.starts_with("import tailwindcss from '@tailwindcss/vite'\n"));
    assert!(config.contains("plugins: [tailwindcss(), react()]"));

    let css = fs::read_to_string(project.join("src/index.css")).unwrap();
    assert!(css.starts_with("@import \"tailwindcss\";"));

    let readme = fs::read_to_string(project.join("README.md")).unwrap();
    assert!(readme.contains("- TailwindCSS\n- React Router\n"));
    assert!(readme.lines().any(|l| l == "yarn dev"));
}

#[tokio::test]
async fn test_second_patch_pass_skips_tailwind_targets() {
    let (_temp, root) = temp_root();
    let sel = selection(
        &root,
        Language::JavaScript,
        &[Feature::TailwindCss],
        PackageManager::Npm,
    );
    let project = sel.project_path();

    let runner = FakeScaffoldRunner {
        project_path: project.clone(),
        config_file: "vite.config.js",
        exit_code: 0,
        seen: Arc::new(Mutex::new(Vec::new())),
    };
    Scaffolder::new(Box::new(runner)).scaffold(&sel).await.unwrap();

    let config_before = fs::read(project.join("vite.config.js")).unwrap();
    let css_before = fs::read(project.join("src/index.css")).unwrap();

    let outcomes = starter_projects::apply_patches(&sel, &project);

    assert_eq!(outcomes[0].status, PatchStatus::Skipped);
    assert_eq!(outcomes[1].status, PatchStatus::Skipped);
    assert_eq!(outcomes[2].status, PatchStatus::Success);
    assert_eq!(fs::read(project.join("vite.config.js")).unwrap(), config_before);
    assert_eq!(fs::read(project.join("src/index.css")).unwrap(), css_before);
}

#[tokio::test]
async fn test_failed_session_still_patches() {
    let (_temp, root) = temp_root();
    let sel = selection(&root, Language::JavaScript, &[Feature::Axios], PackageManager::Npm);

    let runner = FakeScaffoldRunner {
        project_path: sel.project_path(),
        config_file: "vite.config.js",
        exit_code: 1,
        seen: Arc::new(Mutex::new(Vec::new())),
    };
    let report = Scaffolder::new(Box::new(runner)).scaffold(&sel).await.unwrap();

    assert!(!report.run.success());
    assert_eq!(report.patches.len(), 1);
    assert_eq!(report.failed_patches(), 0);
}

#[tokio::test]
async fn test_dry_run_skips_patching() {
    let (_temp, root) = temp_root();
    let sel = selection(
        &root,
        Language::TypeScript,
        &[Feature::TailwindCss],
        PackageManager::Npm,
    );

    let report = Scaffolder::new(Box::new(DryRunRunner::new()))
        .scaffold(&sel)
        .await
        .unwrap();

    assert!(!report.run.executed);
    assert!(report.patches.is_empty());
    assert!(!sel.project_path().exists());
}

#[tokio::test(start_paused = true)]
async fn test_patches_wait_for_settle_delay() {
    let (_temp, root) = temp_root();
    let sel = selection(&root, Language::JavaScript, &[Feature::Axios], PackageManager::Npm);

    let runner = FakeScaffoldRunner {
        project_path: sel.project_path(),
        config_file: "vite.config.js",
        exit_code: 0,
        seen: Arc::new(Mutex::new(Vec::new())),
    };
    let scaffolder =
        Scaffolder::new(Box::new(runner)).with_settle_delay(Duration::from_secs(30));

    let (_plan, run) = scaffolder.execute(&sel).await.unwrap();
    let started = tokio::time::Instant::now();
    let patches = scaffolder.patch(&sel, &run).await;

    assert!(started.elapsed() >= Duration::from_secs(30));
    assert_eq!(patches.len(), 1);
    assert_eq!(patches[0].status, PatchStatus::Success);
}

#[tokio::test(start_paused = true)]
async fn test_zero_settle_delay_patches_immediately() {
    let (_temp, root) = temp_root();
    let sel = selection(&root, Language::JavaScript, &[Feature::Axios], PackageManager::Npm);

    let runner = FakeScaffoldRunner {
        project_path: sel.project_path(),
        config_file: "vite.config.js",
        exit_code: 0,
        seen: Arc::new(Mutex::new(Vec::new())),
    };
    let scaffolder = Scaffolder::new(Box::new(runner));

    let (_plan, run) = scaffolder.execute(&sel).await.unwrap();
    let started = tokio::time::Instant::now();
    scaffolder.patch(&sel, &run).await;

    assert_eq!(started.elapsed(), Duration::ZERO);
}
