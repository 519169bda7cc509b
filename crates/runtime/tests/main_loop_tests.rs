use std::io::{BufRead, BufReader, Read};
use std::process::{Command, ExitStatus, Stdio};
use std::thread;
use std::time::Duration;

struct RunOutput {
    status: ExitStatus,
    stdout: String,
    stderr: String,
}

fn capture<R: Read + Send + 'static>(stream: R) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut captured = String::new();
        for line in BufReader::new(stream).lines().map_while(Result::ok) {
            captured.push_str(&line);
            captured.push('\n'); // lines() strips it
        }
        captured
    })
}

fn run_tumble(args: &[&str]) -> RunOutput {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tumble"))
        .args(args)
        .env("NO_COLOR", "1")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn tumble process");

    let stdout_handle = capture(child.stdout.take().expect("Failed to capture stdout"));
    let stderr_handle = capture(child.stderr.take().expect("Failed to capture stderr"));

    let timeout = Duration::from_secs(30);
    let status = match child.wait_timeout_secs(timeout) {
        Ok(Some(status)) => status,
        Ok(None) => {
            child.kill().expect("Failed to kill timed-out process");
            panic!("tumble process timed out after {timeout:?}");
        }
        Err(e) => panic!("Failed to wait for tumble process: {e}"),
    };

    let stdout = stdout_handle.join().expect("Stdout reader thread panicked");
    let stderr = stderr_handle.join().expect("Stderr reader thread panicked");
    eprintln!("--- tumble STDOUT ---\n{stdout}");
    eprintln!("--- tumble STDERR ---\n{stderr}");

    RunOutput { status, stdout, stderr }
}

#[test]
fn headless_loop_runs_to_completion() {
    let out = run_tumble(&["--steps", "90", "--log-every", "30"]);

    assert!(out.status.success(), "tumble exited with {:?}", out.status.code());
    assert!(out.stdout.contains("Simulation loop finished after 90 steps."));
    assert_eq!(out.stdout.matches("complete. Ball_y").count(), 3);
}

#[test]
fn scripted_reset_is_logged() {
    let out = run_tumble(&["--steps", "40", "--reset-at", "20", "--reset-at", "30"]);

    assert!(out.status.success());
    assert_eq!(out.stdout.matches("reset requested").count(), 2);
}

#[test]
fn invalid_timestep_fails() {
    let out = run_tumble(&["--steps", "5", "--dt", "0"]);

    assert!(!out.status.success());
    assert!(out.stderr.contains("timestep must be positive"), "{}", out.stderr);
}

// Polling wait with a deadline; std's Child has no timeout variant.
trait ChildExt {
    fn wait_timeout_secs(&mut self, duration: Duration) -> std::io::Result<Option<ExitStatus>>;
}

impl ChildExt for std::process::Child {
    fn wait_timeout_secs(&mut self, duration: Duration) -> std::io::Result<Option<ExitStatus>> {
        let start_time = std::time::Instant::now();
        loop {
            if let Some(status) = self.try_wait()? {
                return Ok(Some(status));
            }
            if start_time.elapsed() > duration {
                return Ok(None);
            }
            thread::sleep(Duration::from_millis(50));
        }
    }
}
