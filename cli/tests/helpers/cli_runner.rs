use std::io::Cursor;
use std::path::PathBuf;
use std::process::{Command, Stdio};

#[derive(Debug, Clone)]
pub struct CliRunner {
    mode: RunMode,
}

#[derive(Debug, Clone)]
enum RunMode {
    Binary(PathBuf),
    Library,
}

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CliRunner {
    pub fn new() -> Self {
        // Prefer the Cargo-provided path to the compiled binary
        if let Ok(p) = std::env::var("CARGO_BIN_EXE_lotto") {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self {
                    mode: RunMode::Binary(pb),
                };
            }
        }

        // Fallback to direct library invocation (no mock; calls the real CLI
        // entrypoint, but cannot isolate environment variables)
        Self {
            mode: RunMode::Library,
        }
    }

    #[allow(dead_code)]
    pub fn run(&self, args: &[&str]) -> CliResult {
        self.run_inner(args, &[], None)
    }

    #[allow(dead_code)]
    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CliResult {
        self.run_inner(args, env, None)
    }

    #[allow(dead_code)]
    pub fn run_with_input(&self, args: &[&str], input: &str) -> CliResult {
        self.run_inner(args, &[], Some(input))
    }

    fn run_inner(&self, args: &[&str], env: &[(&str, &str)], input: Option<&str>) -> CliResult {
        match &self.mode {
            RunMode::Binary(bin) => {
                let mut cmd = Command::new(bin);
                cmd.args(args)
                    .stdin(if input.is_some() {
                        Stdio::piped()
                    } else {
                        Stdio::null()
                    })
                    .stdout(Stdio::piped())
                    .stderr(Stdio::piped());
                for (k, v) in env.iter() {
                    cmd.env(k, v);
                }

                let mut child = cmd.spawn().expect("failed to spawn CLI binary");
                if let Some(s) = input {
                    use std::io::Write as _;
                    if let Some(mut stdin) = child.stdin.take() {
                        let _ = stdin.write_all(s.as_bytes());
                    }
                }
                let output = child.wait_with_output().expect("failed to read output");
                CliResult {
                    exit_code: output.status.code().unwrap_or(1),
                    stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                    stderr: String::from_utf8_lossy(&output.stderr).to_string(),
                }
            }
            RunMode::Library => {
                let mut out: Vec<u8> = Vec::new();
                let mut err: Vec<u8> = Vec::new();
                let mut stdin = Cursor::new(input.unwrap_or("").as_bytes().to_vec());
                // Prepend program name for clap compatibility
                let argv: Vec<String> = std::iter::once("lotto".to_string())
                    .chain(args.iter().map(|s| s.to_string()))
                    .collect();
                let code = lotto_cli::run(argv, &mut stdin, &mut out, &mut err);
                CliResult {
                    exit_code: code,
                    stdout: String::from_utf8_lossy(&out).to_string(),
                    stderr: String::from_utf8_lossy(&err).to_string(),
                }
            }
        }
    }
}
