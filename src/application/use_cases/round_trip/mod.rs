use crate::application::dto::{PrintedFile, RoundTripRequest, RoundTripResponse};
use crate::file_lifecycle::domain::{normalized_path, Step, TextFile};
use crate::ports::inbound::FileLifecyclePort;
use crate::ports::outbound::{OutputPresenter, ProgressReporter, TextFileStore};
use crate::shared::error::FileLifecycleError;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// RoundTripUseCase - runs a scenario of create/write, read/print and cleanup steps
///
/// Steps run strictly in order. The first failing step aborts the run and its
/// error is returned unchanged; later steps never execute.
///
/// # Type Parameters
/// * `S` - TextFileStore implementation
/// * `O` - OutputPresenter implementation
/// * `PR` - ProgressReporter implementation
pub struct RoundTripUseCase<S, O, PR> {
    store: S,
    presenter: O,
    progress_reporter: PR,
}

impl<S, O, PR> RoundTripUseCase<S, O, PR>
where
    S: TextFileStore,
    O: OutputPresenter,
    PR: ProgressReporter,
{
    /// Creates a new RoundTripUseCase with injected dependencies
    pub fn new(store: S, presenter: O, progress_reporter: PR) -> Self {
        Self {
            store,
            presenter,
            progress_reporter,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Executes every step of the requested scenario
    ///
    /// With `cleanup_on_failure` set, files written by this run and not yet
    /// removed are deleted again before the error is returned.
    pub fn execute(&self, request: RoundTripRequest) -> Result<RoundTripResponse> {
        let scenario = request.scenario;
        let total = scenario.len();

        self.progress_reporter
            .report(&format!("📂 Running {} file lifecycle step(s)", total));

        let mut created = CreatedFilesGuard::new(
            &self.store,
            &self.progress_reporter,
            request.cleanup_on_failure,
        );
        let mut response = RoundTripResponse::default();

        for (index, step) in scenario.steps().iter().enumerate() {
            match step {
                Step::CreateAndWrite(file) => {
                    let result = self.create_and_write(file);
                    if leaves_file_behind(&result) {
                        created.track(file.path());
                    }
                    result?;
                }
                Step::ReadAndPrint(path) => {
                    let content = self.read_and_print(path)?;
                    response.printed.push(PrintedFile {
                        path: path.clone(),
                        content,
                    });
                }
                Step::Cleanup(paths) => {
                    self.remove_each(paths, |path| {
                        created.forget(path);
                        response.removed.push(path.to_path_buf());
                    })?;
                }
            }

            self.progress_reporter
                .report_progress(index + 1, total, Some(&step.to_string()));
        }

        created.disarm();

        self.progress_reporter.report_completion(&format!(
            "✅ Completed {} step(s): printed {} file(s), removed {} file(s)",
            total,
            response.printed.len(),
            response.removed.len()
        ));

        Ok(response)
    }

    /// Removes `paths` in order, calling `on_removed` after each success.
    /// Stops at the first failure; paths before it stay removed.
    fn remove_each(&self, paths: &[PathBuf], mut on_removed: impl FnMut(&Path)) -> Result<()> {
        for path in paths {
            self.progress_reporter
                .report(&format!("🗑️  Removing {}", path.display()));
            self.store.remove(path)?;
            on_removed(path);
        }
        Ok(())
    }
}

impl<S, O, PR> FileLifecyclePort for RoundTripUseCase<S, O, PR>
where
    S: TextFileStore,
    O: OutputPresenter,
    PR: ProgressReporter,
{
    fn create_and_write(&self, file: &TextFile) -> Result<()> {
        self.progress_reporter.report(&format!(
            "📝 Writing {} ({} fragment(s))",
            file.path().display(),
            file.fragments().len()
        ));
        self.store.create_and_write(file.path(), file.fragments())
    }

    fn read_and_print(&self, path: &Path) -> Result<String> {
        self.progress_reporter
            .report(&format!("📖 Reading {}", path.display()));
        let content = self.store.read_to_string(path)?;
        self.presenter.present(&content)?;
        Ok(content)
    }

    fn cleanup(&self, paths: &[PathBuf]) -> Result<()> {
        self.remove_each(paths, |_| {})
    }
}

/// A failed write still leaves the created file on disk; a failed create does not.
fn leaves_file_behind(result: &Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => matches!(
            e.downcast_ref::<FileLifecycleError>(),
            Some(FileLifecycleError::WriteFailed { .. })
        ),
    }
}

/// Removes the files a run created when the run is abandoned by an error.
///
/// Disarmed on success; a guard built with `armed == false` never removes anything.
/// Paths are tracked in normalized form so `./a.txt` and `a.txt` match.
struct CreatedFilesGuard<'a, S: TextFileStore, PR: ProgressReporter> {
    store: &'a S,
    reporter: &'a PR,
    paths: Vec<PathBuf>,
    armed: bool,
}

impl<'a, S: TextFileStore, PR: ProgressReporter> CreatedFilesGuard<'a, S, PR> {
    fn new(store: &'a S, reporter: &'a PR, armed: bool) -> Self {
        Self {
            store,
            reporter,
            paths: Vec::new(),
            armed,
        }
    }

    fn track(&mut self, path: &Path) {
        let path = normalized_path(path);
        if !self.paths.contains(&path) {
            self.paths.push(path);
        }
    }

    fn forget(&mut self, path: &Path) {
        let path = normalized_path(path);
        self.paths.retain(|p| *p != path);
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl<S: TextFileStore, PR: ProgressReporter> Drop for CreatedFilesGuard<'_, S, PR> {
    fn drop(&mut self) {
        if !self.armed || self.paths.is_empty() {
            return;
        }

        let mut removed = 0;
        for path in &self.paths {
            match self.store.remove(path) {
                Ok(()) => removed += 1,
                Err(e) => self.reporter.report_error(&format!(
                    "⚠️  Warning: Could not remove {} after failure: {}",
                    path.display(),
                    e
                )),
            }
        }

        self.reporter.report_error(&format!(
            "🧹 Removed {} file(s) created before the failure",
            removed
        ));
    }
}
