//! End-to-end launch behavior against a fake dashboard server script.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tempfile::tempdir;

use logviz_launcher::{
    config::LauncherConfig,
    launcher::{
        launch_with, run_dashboard, DependencyInstaller, LaunchPlan, LaunchProbe, START_BANNER,
        STOPPED_BANNER,
    },
    support::errors::LaunchError,
};

use crate::common::{dashboard_workspace, write_executable};

struct StaticProbe {
    executable: PathBuf,
    cwd: PathBuf,
}

impl LaunchProbe for StaticProbe {
    fn resolve_executable(&self, _name: &Path) -> Option<PathBuf> {
        Some(self.executable.clone())
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        Ok(self.cwd.clone())
    }

    fn module_path(&self) -> Option<String> {
        None
    }
}

struct RejectingInstaller;

#[async_trait]
impl DependencyInstaller for RejectingInstaller {
    async fn install(&self, _pip_path: &Path, _packages: &[String]) -> Result<(), LaunchError> {
        panic!("install must not run when the executable resolves");
    }
}

fn plan_for(streamlit_path: PathBuf, app_dir: PathBuf, module_search_path: String) -> LaunchPlan {
    LaunchPlan {
        streamlit_path,
        app_dir,
        entry_file: "app.py".to_string(),
        module_search_path,
        installed_dependencies: false,
    }
}

#[tokio::test]
async fn dashboard_runs_with_fixed_flags_in_the_app_dir() {
    let temp = tempdir().expect("can create temporary directory");
    let viz_dir = dashboard_workspace(temp.path());
    let out = temp.path().join("invocation.txt");
    let script = format!(
        "#!/bin/sh\necho \"$@\" > {out}\necho \"$PYTHONPATH\" >> {out}\npwd >> {out}\nexit 0\n",
        out = out.display()
    );
    let server = write_executable(temp.path(), "fake-streamlit", &script);

    let module_search_path = format!("/prior:{}", temp.path().display());
    let plan = plan_for(server, viz_dir.clone(), module_search_path.clone());

    let status = run_dashboard(&plan).await.expect("server should run");
    assert!(status.success(), "exit status: {status:?}");

    let recorded = fs::read_to_string(&out).expect("server should record its invocation");
    let mut lines = recorded.lines();
    assert_eq!(
        lines.next(),
        Some("run app.py --server.port 8501 --server.address 0.0.0.0")
    );
    assert_eq!(lines.next(), Some(module_search_path.as_str()));

    // `pwd` may report a resolved symlink (e.g. /tmp on macOS).
    let reported_cwd = PathBuf::from(lines.next().expect("server should record its cwd"));
    assert_eq!(
        reported_cwd.canonicalize().expect("reported cwd exists"),
        viz_dir.canonicalize().expect("app dir exists")
    );
}

#[tokio::test]
async fn launcher_observes_the_server_exit_code() {
    let temp = tempdir().expect("can create temporary directory");
    let viz_dir = dashboard_workspace(temp.path());
    let server = write_executable(temp.path(), "fake-streamlit", "#!/bin/sh\nexit 3\n");

    let plan = plan_for(server, viz_dir, temp.path().display().to_string());

    let status = run_dashboard(&plan).await.expect("wait should succeed");
    assert_eq!(status.code(), Some(3));
}

#[tokio::test]
async fn stopped_banner_prints_only_after_the_server_has_exited() {
    let temp = tempdir().expect("can create temporary directory");
    dashboard_workspace(temp.path());
    let marker = temp.path().join("server-ran.txt");
    let script = format!(
        "#!/bin/sh\ntouch {marker}\nexit 0\n",
        marker = marker.display()
    );
    let server = write_executable(temp.path(), "fake-streamlit", &script);

    let probe = StaticProbe {
        executable: server,
        cwd: temp.path().to_path_buf(),
    };

    let mut out = Vec::new();
    let status = launch_with(
        &LauncherConfig::defaults(),
        &probe,
        &RejectingInstaller,
        true,
        &mut out,
    )
    .await
    .expect("launch should complete");

    assert!(status.success(), "exit status: {status:?}");
    assert!(marker.is_file(), "server should have run");
    let banners = String::from_utf8(out).expect("banners are utf-8");
    assert_eq!(
        banners.lines().collect::<Vec<_>>(),
        vec![START_BANNER, STOPPED_BANNER]
    );
}

#[tokio::test]
async fn stopped_banner_follows_a_signal_terminated_server() {
    let temp = tempdir().expect("can create temporary directory");
    dashboard_workspace(temp.path());
    // The server kills itself with SIGTERM, mimicking an interrupted run.
    let server = write_executable(temp.path(), "fake-streamlit", "#!/bin/sh\nkill -TERM $$\n");

    let probe = StaticProbe {
        executable: server,
        cwd: temp.path().to_path_buf(),
    };

    let mut out = Vec::new();
    let status = launch_with(
        &LauncherConfig::defaults(),
        &probe,
        &RejectingInstaller,
        true,
        &mut out,
    )
    .await
    .expect("wait should succeed even when the server is signalled");

    assert_eq!(status.code(), None, "exit status: {status:?}");
    let banners = String::from_utf8(out).expect("banners are utf-8");
    assert_eq!(
        banners.lines().collect::<Vec<_>>(),
        vec![START_BANNER, STOPPED_BANNER]
    );
}

#[tokio::test]
async fn stopped_banner_is_absent_when_the_server_never_ran() {
    let temp = tempdir().expect("can create temporary directory");
    dashboard_workspace(temp.path());

    let probe = StaticProbe {
        executable: temp.path().join("absent-streamlit"),
        cwd: temp.path().to_path_buf(),
    };

    let mut out = Vec::new();
    let error = launch_with(
        &LauncherConfig::defaults(),
        &probe,
        &RejectingInstaller,
        true,
        &mut out,
    )
    .await
    .expect_err("spawn should fail for a missing executable");

    assert!(matches!(error, LaunchError::ServerSpawn { .. }));
    let banners = String::from_utf8(out).expect("banners are utf-8");
    assert_eq!(banners.lines().collect::<Vec<_>>(), vec![START_BANNER]);
}

#[tokio::test]
async fn unspawnable_server_surfaces_a_structured_error() {
    let temp = tempdir().expect("can create temporary directory");
    let viz_dir = dashboard_workspace(temp.path());
    let missing = temp.path().join("absent-streamlit");

    let plan = plan_for(missing.clone(), viz_dir, temp.path().display().to_string());

    let error = run_dashboard(&plan)
        .await
        .expect_err("spawn should fail for a missing executable");
    match error {
        LaunchError::ServerSpawn { command, .. } => {
            assert_eq!(command, missing.display().to_string())
        }
        other => panic!("Unexpected error: {other:?}"),
    }
}
